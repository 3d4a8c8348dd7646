//! Advisory validation of a built rule set.
//!
//! Building only rejects what the alarm engine cannot work with at all
//! (missing `metrics-name` / `threshold`). This pass reports the rest:
//! unknown operators, rules that can never fire, bad regex filters and
//! unusable hook targets. Returns a [`ValidationResult`] with errors and
//! warnings; nothing here changes the rule set.

mod hook_checks;
mod rule_checks;

pub mod fuzzy;

use serde::{Deserialize, Serialize};

use crate::reader::RuleSetBuilder;
use crate::schema::RuleSet;

// ── Result types ────────────────────────────────────────────────────

/// Overall validation outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

/// A finding that makes a rule or hook unusable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Dotted location, e.g. `"rules.cpu_rule.op"`.
    pub path: String,
    pub message: String,
    /// Optional "Did you mean …?" suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// A non-blocking advisory warning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationResult {
    pub(crate) fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub(crate) fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(ValidationError {
            path: path.into(),
            message: message.into(),
            suggestion: None,
        });
    }

    pub(crate) fn error_with_suggestion(
        &mut self,
        path: impl Into<String>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) {
        self.valid = false;
        self.errors.push(ValidationError {
            path: path.into(),
            message: message.into(),
            suggestion: Some(suggestion.into()),
        });
    }

    pub(crate) fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationWarning {
            path: path.into(),
            message: message.into(),
        });
    }
}

// ── Public API ──────────────────────────────────────────────────────

/// Validate a built [`RuleSet`].
pub fn validate_rule_set(rule_set: &RuleSet) -> ValidationResult {
    let mut result = ValidationResult::new();
    for rule in rule_set.rules() {
        rule_checks::validate_rule(rule, &mut result);
    }
    hook_checks::validate_hooks(rule_set, &mut result);
    result
}

/// Build from raw YAML and validate. Build errors are reported as a single error.
pub fn validate_yaml(yaml: &str) -> ValidationResult {
    match RuleSetBuilder::from_yaml_str(yaml) {
        Ok(rule_set) => validate_rule_set(&rule_set),
        Err(e) => {
            let mut result = ValidationResult::new();
            let path = e.rule().map(|r| format!("rules.{r}")).unwrap_or_default();
            result.error(path, e.to_string());
            result
        }
    }
}

#[cfg(test)]
mod tests;
