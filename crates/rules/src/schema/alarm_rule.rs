//! A single named threshold rule.

use serde::{Deserialize, Serialize};

use super::CompareOp;

/// Suffix a key under `rules` must carry to be read as an alarm rule.
pub const RULE_KEY_SUFFIX: &str = "_rule";

/// Default evaluation window, in check cycles.
pub const DEFAULT_PERIOD: u32 = 1;

/// Default number of breaching cycles needed to fire.
pub const DEFAULT_COUNT: u32 = 1;

/// An alarm rule with every optional field resolved to its default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlarmRule {
    /// Key the rule was declared under. Always ends with [`RULE_KEY_SUFFIX`].
    pub name: String,
    pub metrics_name: String,
    pub include_names: Vec<String>,
    pub exclude_names: Vec<String>,
    /// Empty means no regex filter.
    pub include_names_regex: String,
    pub exclude_names_regex: String,
    pub include_labels: Vec<String>,
    pub exclude_labels: Vec<String>,
    pub include_labels_regex: String,
    pub exclude_labels_regex: String,
    /// Threshold as written. Multi-value thresholds such as `1000,1000,-`
    /// stay intact; numbers are rendered through their YAML form.
    pub threshold: String,
    /// Comparison operator as written. Not checked at build time.
    pub op: Option<String>,
    pub period: u32,
    pub count: u32,
    /// Check cycles to stay quiet after firing.
    pub silence_period: u32,
    pub message: String,
}

impl AlarmRule {
    /// Whether a key under `rules` declares an alarm rule.
    pub fn is_rule_key(key: &str) -> bool {
        key.ends_with(RULE_KEY_SUFFIX)
    }

    /// Message used when a rule does not set one.
    pub fn default_message(name: &str) -> String {
        format!("Alarm caused by Rule {name}")
    }

    /// Parse the stored operator. `None` when the rule has no `op`.
    pub fn compare_op(&self) -> Option<std::result::Result<CompareOp, String>> {
        self.op.as_deref().map(str::parse)
    }

    /// True when any name or label filter is configured.
    pub fn has_filters(&self) -> bool {
        !self.include_names.is_empty()
            || !self.exclude_names.is_empty()
            || !self.include_names_regex.is_empty()
            || !self.exclude_names_regex.is_empty()
            || !self.include_labels.is_empty()
            || !self.exclude_labels.is_empty()
            || !self.include_labels_regex.is_empty()
            || !self.exclude_labels_regex.is_empty()
    }
}
