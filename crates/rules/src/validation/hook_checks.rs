//! Hook checks: webhook URLs, gRPC target and chat settings.

use super::ValidationResult;
use crate::schema::RuleSet;

pub(super) fn validate_hooks(rule_set: &RuleSet, result: &mut ValidationResult) {
    for (i, url) in rule_set.webhooks().iter().enumerate() {
        check_url(url, &format!("webhooks[{i}]"), result);
    }

    if let Some(grpc) = &rule_set.grpc_hook {
        match (&grpc.target_host, grpc.target_port) {
            (None, None) => result.warn("gRPCHook", "gRPC hook is declared without a target"),
            (Some(_), None) => result.warn("gRPCHook.target_port", "gRPC hook has a host but no port"),
            (None, Some(_)) => result.warn("gRPCHook.target_host", "gRPC hook has a port but no host"),
            (Some(host), Some(port)) => {
                if host.trim().is_empty() {
                    result.error("gRPCHook.target_host", "gRPC target host is empty");
                }
                if port == 0 {
                    result.error("gRPCHook.target_port", "gRPC target port must not be 0");
                }
            }
        }
    }

    if let Some(chat) = &rule_set.chat_hook {
        if chat.webhooks.is_empty() {
            result.warn("slackHooks.webhooks", "Chat hook is declared without webhooks");
        }
        for (i, url) in chat.webhooks.iter().enumerate() {
            check_url(url, &format!("slackHooks.webhooks[{i}]"), result);
        }
    }

    if !rule_set.rules().is_empty() && !rule_set.has_hooks() {
        result.warn("", "Rules are defined but no hook will receive their alarms");
    }
}

fn check_url(url: &str, path: &str, result: &mut ValidationResult) {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        result.error(
            path,
            format!("URL must start with http:// or https://, got '{url}'"),
        );
    }
}
