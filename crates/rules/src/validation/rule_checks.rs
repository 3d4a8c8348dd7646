//! Per-rule checks: operator, evaluation windows, threshold and filters.

use fancy_regex::Regex;

use super::fuzzy::fuzzy_match;
use super::ValidationResult;
use crate::schema::{AlarmRule, CompareOp};

/// Placeholder accepted in multi-value thresholds for "no threshold here".
const SKIPPED_THRESHOLD: &str = "-";

pub(super) fn validate_rule(rule: &AlarmRule, result: &mut ValidationResult) {
    let path = format!("rules.{}", rule.name);
    validate_op(rule, &path, result);
    validate_windows(rule, &path, result);
    validate_threshold(rule, &path, result);
    validate_filters(rule, &path, result);

    if rule.message.trim().is_empty() {
        result.warn(format!("{path}.message"), "Alarm message is empty");
    }
}

fn validate_op(rule: &AlarmRule, path: &str, result: &mut ValidationResult) {
    let path = format!("{path}.op");
    match rule.compare_op() {
        None => result.error(path, "Rule has no 'op'; the engine cannot compare against the threshold"),
        Some(Ok(_)) => {}
        Some(Err(msg)) => {
            let op = rule.op.as_deref().unwrap_or_default().trim();
            // Too short for the edit-distance cutoff.
            let suggestion = if op == "=" {
                Some(CompareOp::Equal.symbol())
            } else {
                fuzzy_match(op, CompareOp::SYMBOLS)
            };
            match suggestion {
                Some(suggestion) => result.error_with_suggestion(
                    path,
                    msg,
                    format!("Did you mean '{suggestion}'?"),
                ),
                None => result.error(
                    path,
                    format!("{msg}; expected one of {}", CompareOp::SYMBOLS.join(", ")),
                ),
            }
        }
    }
}

fn validate_windows(rule: &AlarmRule, path: &str, result: &mut ValidationResult) {
    if rule.count > rule.period {
        result.error(
            format!("{path}.count"),
            format!(
                "count ({}) exceeds period ({}); the rule can never fire",
                rule.count, rule.period
            ),
        );
    }

    if rule.silence_period < rule.period {
        result.warn(
            format!("{path}.silence-period"),
            format!(
                "silence-period ({}) is shorter than period ({}); the same breach may fire repeatedly",
                rule.silence_period, rule.period
            ),
        );
    }
}

/// Thresholds are either one number or a comma-separated list where `-`
/// skips a position.
fn validate_threshold(rule: &AlarmRule, path: &str, result: &mut ValidationResult) {
    let path = format!("{path}.threshold");
    let parts: Vec<&str> = rule.threshold.split(',').map(str::trim).collect();

    if parts.iter().all(|p| *p == SKIPPED_THRESHOLD) {
        result.error(path, "Threshold has no numeric value");
        return;
    }

    for part in parts {
        if part == SKIPPED_THRESHOLD {
            continue;
        }
        // YAML 1.1 digit separators, as in `1_000`.
        if part.replace('_', "").parse::<f64>().is_err() {
            result.error(
                path.as_str(),
                format!("Threshold value '{part}' is not a number"),
            );
        }
    }
}

fn validate_filters(rule: &AlarmRule, path: &str, result: &mut ValidationResult) {
    let regexes = [
        ("include-names-regex", &rule.include_names_regex),
        ("exclude-names-regex", &rule.exclude_names_regex),
        ("include-labels-regex", &rule.include_labels_regex),
        ("exclude-labels-regex", &rule.exclude_labels_regex),
    ];
    for (field, pattern) in regexes {
        if pattern.is_empty() {
            continue;
        }
        if let Err(e) = Regex::new(pattern) {
            result.error(
                format!("{path}.{field}"),
                format!("Invalid regular expression '{pattern}': {e}"),
            );
        }
    }

    // An exact list and a regex on the same filter are both configured.
    let overlaps = [
        ("include-names", rule.include_names.is_empty(), &rule.include_names_regex),
        ("exclude-names", rule.exclude_names.is_empty(), &rule.exclude_names_regex),
        ("include-labels", rule.include_labels.is_empty(), &rule.include_labels_regex),
        ("exclude-labels", rule.exclude_labels.is_empty(), &rule.exclude_labels_regex),
    ];
    for (field, list_empty, regex) in overlaps {
        if !list_empty && !regex.is_empty() {
            result.warn(
                format!("{path}.{field}"),
                format!("Both '{field}' and '{field}-regex' are set; an entity must pass both"),
            );
        }
    }

    for name in rule.include_names.iter().filter(|n| rule.exclude_names.contains(*n)) {
        result.warn(
            format!("{path}.exclude-names"),
            format!("'{name}' is both included and excluded"),
        );
    }
}
