//! Root value object produced from an alarm settings document.

use serde::{Deserialize, Serialize};

use super::{AlarmRule, ChatHookSetting, GrpcHookSetting};

/// Alarm rules plus the hooks alarms are dispatched to.
///
/// `rules` and `webhooks` are `None` when the document does not mention them
/// and `Some` (possibly empty) when it does.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleSet {
    pub rules: Option<Vec<AlarmRule>>,
    pub webhooks: Option<Vec<String>>,
    pub grpc_hook: Option<GrpcHookSetting>,
    pub chat_hook: Option<ChatHookSetting>,
}

impl RuleSet {
    /// Rules in document order, empty when none were declared.
    pub fn rules(&self) -> &[AlarmRule] {
        self.rules.as_deref().unwrap_or_default()
    }

    /// Plain webhook URLs, empty when none were declared.
    pub fn webhooks(&self) -> &[String] {
        self.webhooks.as_deref().unwrap_or_default()
    }

    /// Look up a rule by its key.
    pub fn rule(&self, name: &str) -> Option<&AlarmRule> {
        self.rules().iter().find(|r| r.name == name)
    }

    /// True when the document declared nothing at all.
    pub fn is_empty(&self) -> bool {
        self.rules.is_none()
            && self.webhooks.is_none()
            && self.grpc_hook.is_none()
            && self.chat_hook.is_none()
    }

    /// True when at least one hook would receive alarms.
    pub fn has_hooks(&self) -> bool {
        !self.webhooks().is_empty()
            || self.grpc_hook.as_ref().is_some_and(|h| h.target().is_some())
            || self.chat_hook.as_ref().is_some_and(|h| !h.webhooks.is_empty())
    }
}
