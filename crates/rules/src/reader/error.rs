//! Error types for building a rule set.

/// Errors that abort building a rule set.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Reading the input failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed YAML or a value of the wrong shape. Messages carry the
    /// dotted location, e.g. `rules.cpu_rule.period`.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A recognised rule lacks a mandatory field.
    #[error("rule '{rule}' is missing required field '{field}'")]
    MissingField { rule: String, field: &'static str },

    /// A recognised rule carries a value outside its domain.
    #[error("rule '{rule}' has invalid '{field}': {reason}")]
    InvalidValue {
        rule: String,
        field: &'static str,
        reason: String,
    },
}

impl RuleError {
    pub(crate) fn missing(rule: &str, field: &'static str) -> Self {
        RuleError::MissingField {
            rule: rule.to_string(),
            field,
        }
    }

    pub(crate) fn invalid(rule: &str, field: &'static str, reason: impl Into<String>) -> Self {
        RuleError::InvalidValue {
            rule: rule.to_string(),
            field,
            reason: reason.into(),
        }
    }

    /// Key of the offending rule, for rule-level errors.
    pub fn rule(&self) -> Option<&str> {
        match self {
            RuleError::MissingField { rule, .. } | RuleError::InvalidValue { rule, .. } => {
                Some(rule)
            }
            RuleError::Io(_) | RuleError::Parse(_) => None,
        }
    }
}

/// Result alias for rule set operations.
pub type Result<T> = std::result::Result<T, RuleError>;
