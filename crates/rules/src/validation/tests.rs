//! Tests for rule set validation.

use super::*;

fn settings(rule_body: &str) -> String {
    format!(
        "rules:\n  cpu_rule:\n    metrics-name: service_cpu\n{rule_body}webhooks:\n  - http://127.0.0.1/notify/\n"
    )
}

fn error_paths(result: &ValidationResult) -> Vec<&str> {
    result.errors.iter().map(|e| e.path.as_str()).collect()
}

fn warning_paths(result: &ValidationResult) -> Vec<&str> {
    result.warnings.iter().map(|w| w.path.as_str()).collect()
}

#[test]
fn valid_settings_pass() {
    let result = validate_yaml(&settings(
        "    op: \">\"\n    threshold: 80\n    period: 10\n    count: 3\n",
    ));
    assert!(result.valid, "errors: {:?}", result.errors);
    assert!(result.warnings.is_empty(), "warnings: {:?}", result.warnings);
}

#[test]
fn build_error_becomes_single_error() {
    let result = validate_yaml("rules:\n  cpu_rule:\n    threshold: 80\n");
    assert!(!result.valid);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path, "rules.cpu_rule");
    assert!(result.errors[0].message.contains("metrics-name"));
}

#[test]
fn missing_op_is_an_error() {
    let result = validate_yaml(&settings("    threshold: 80\n"));
    assert!(!result.valid);
    assert_eq!(error_paths(&result), vec!["rules.cpu_rule.op"]);
}

#[test]
fn unknown_op_gets_suggestion() {
    let result = validate_yaml(&settings("    op: \">==\"\n    threshold: 80\n"));
    assert!(!result.valid);
    let err = &result.errors[0];
    assert_eq!(err.path, "rules.cpu_rule.op");
    assert_eq!(err.suggestion.as_deref(), Some("Did you mean '>='?"));
}

#[test]
fn unknown_op_without_close_match_lists_symbols() {
    let result = validate_yaml(&settings("    op: greater\n    threshold: 80\n"));
    let err = &result.errors[0];
    assert!(err.suggestion.is_none());
    assert!(err.message.contains("expected one of"));
}

#[test]
fn single_equals_points_at_double_equals() {
    let result = validate_yaml(&settings("    op: \"=\"\n    threshold: 80\n"));
    assert!(!result.valid);
    let err = &result.errors[0];
    assert_eq!(err.path, "rules.cpu_rule.op");
    assert_eq!(err.suggestion.as_deref(), Some("Did you mean '=='?"));
}

#[test]
fn count_above_period_can_never_fire() {
    let result = validate_yaml(&settings(
        "    op: \">\"\n    threshold: 80\n    period: 2\n    count: 3\n",
    ));
    assert!(!result.valid);
    assert_eq!(error_paths(&result), vec!["rules.cpu_rule.count"]);
}

#[test]
fn short_silence_period_warns() {
    let result = validate_yaml(&settings(
        "    op: \">\"\n    threshold: 80\n    period: 10\n    silence-period: 2\n",
    ));
    assert!(result.valid);
    assert_eq!(warning_paths(&result), vec!["rules.cpu_rule.silence-period"]);
}

#[test]
fn multi_value_threshold_accepts_placeholders() {
    let result = validate_yaml(&settings("    op: \">\"\n    threshold: 1000,-,-,2000\n"));
    assert!(result.valid, "errors: {:?}", result.errors);

    let result = validate_yaml(&settings("    op: \">\"\n    threshold: 1000,abc\n"));
    assert_eq!(error_paths(&result), vec!["rules.cpu_rule.threshold"]);

    let result = validate_yaml(&settings("    op: \">\"\n    threshold: \"-,-\"\n"));
    assert_eq!(error_paths(&result), vec!["rules.cpu_rule.threshold"]);
}

#[test]
fn threshold_spellings_parse_as_numbers() {
    for threshold in ["1e3", "1_000", "99999999999999999999", "-0.5"] {
        let result = validate_yaml(&settings(&format!(
            "    op: \">\"\n    threshold: {threshold}\n"
        )));
        assert!(result.valid, "{threshold}: {:?}", result.errors);
    }
}

#[test]
fn invalid_regex_filter_is_an_error() {
    let result = validate_yaml(&settings(
        "    op: \">\"\n    threshold: 80\n    include-names-regex: \"svc-(a|b\"\n",
    ));
    assert_eq!(
        error_paths(&result),
        vec!["rules.cpu_rule.include-names-regex"]
    );
}

#[test]
fn look_around_and_backreference_filters_are_valid() {
    let result = validate_yaml(&settings(
        "    op: \">\"\n    threshold: 80\n    include-names-regex: \"^(?!test-).*\"\n    exclude-labels-regex: \"^(\\\\w+)-\\\\1$\"\n",
    ));
    assert!(result.valid, "errors: {:?}", result.errors);
    assert!(result.warnings.is_empty(), "warnings: {:?}", result.warnings);
}

#[test]
fn list_and_regex_on_same_filter_warns() {
    let result = validate_yaml(&settings(
        "    op: \">\"\n    threshold: 80\n    include-names: [svc-a]\n    include-names-regex: \"svc-.*\"\n",
    ));
    assert!(result.valid);
    assert_eq!(warning_paths(&result), vec!["rules.cpu_rule.include-names"]);
}

#[test]
fn included_and_excluded_name_warns() {
    let result = validate_yaml(&settings(
        "    op: \">\"\n    threshold: 80\n    include-names: [svc-a, svc-b]\n    exclude-names: [svc-b]\n",
    ));
    assert_eq!(warning_paths(&result), vec!["rules.cpu_rule.exclude-names"]);
}

#[test]
fn webhook_urls_need_http_scheme() {
    let yaml = r#"
webhooks:
  - http://ok/hook
  - ftp://nope/hook
slackHooks:
  webhooks:
    - hooks.slack.com/services/x
"#;
    let result = validate_yaml(yaml);
    assert_eq!(
        error_paths(&result),
        vec!["webhooks[1]", "slackHooks.webhooks[0]"]
    );
}

#[test]
fn partial_grpc_hook_warns() {
    let result = validate_yaml("gRPCHook:\n  target_host: 127.0.0.1\n");
    assert!(result.valid);
    assert_eq!(warning_paths(&result), vec!["gRPCHook.target_port"]);

    let result = validate_yaml("gRPCHook:\n  target_host: 127.0.0.1\n  target_port: 0\n");
    assert_eq!(error_paths(&result), vec!["gRPCHook.target_port"]);
}

#[test]
fn rules_without_hooks_warn() {
    let yaml = "rules:\n  cpu_rule:\n    metrics-name: service_cpu\n    op: \">\"\n    threshold: 80\n";
    let result = validate_yaml(yaml);
    assert!(result.valid);
    assert_eq!(warning_paths(&result), vec![""]);
}

#[test]
fn empty_document_is_valid() {
    let result = validate_yaml("");
    assert!(result.valid);
    assert!(result.warnings.is_empty());
}
