//! [`RuleSetBuilder`]: walks a decoded settings document into a [`RuleSet`].

use std::io::Read;

use serde_yaml::Value;
use tracing::{debug, info};

use crate::schema::raw::{RawRule, RawRules, RawSettings};
use crate::schema::{AlarmRule, RuleSet, DEFAULT_COUNT, DEFAULT_PERIOD};

use super::error::{Result, RuleError};

/// Builds a [`RuleSet`] from an alarm settings document.
///
/// Stateless: every entry point is an associated function, so independent
/// documents can be built concurrently.
pub struct RuleSetBuilder;

impl RuleSetBuilder {
    /// Build from an already decoded document.
    ///
    /// `None` and a YAML null both produce an empty [`RuleSet`]. Other values
    /// are rendered back to YAML and read like text input.
    pub fn build(document: Option<Value>) -> Result<RuleSet> {
        match document {
            None | Some(Value::Null) => Ok(RuleSet::default()),
            Some(value) => {
                let text = serde_yaml::to_string(&value)?;
                Self::from_yaml_str(&text)
            }
        }
    }

    /// Decode YAML text, then build.
    pub fn from_yaml_str(text: &str) -> Result<RuleSet> {
        if text.trim().is_empty() {
            debug!("empty alarm settings document");
            return Ok(RuleSet::default());
        }
        let raw: Option<RawSettings> = serde_yaml::from_str(text)?;
        match raw {
            Some(raw) => assemble(raw),
            None => {
                debug!("empty alarm settings document");
                Ok(RuleSet::default())
            }
        }
    }

    /// Read the whole input, then build. The reader is consumed.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<RuleSet> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_yaml_str(&text)
    }
}

fn assemble(raw: RawSettings) -> Result<RuleSet> {
    let rule_set = RuleSet {
        rules: raw.rules.map(build_rules).transpose()?,
        webhooks: raw.webhooks,
        grpc_hook: raw.grpc_hook.map(Into::into),
        chat_hook: raw.slack_hooks.map(Into::into),
    };

    info!(
        rules = rule_set.rules().len(),
        webhooks = rule_set.webhooks().len(),
        grpc_hook = rule_set.grpc_hook.is_some(),
        chat_hook = rule_set.chat_hook.is_some(),
        "built alarm rule set"
    );
    Ok(rule_set)
}

fn build_rules(raw: RawRules) -> Result<Vec<AlarmRule>> {
    for key in &raw.skipped {
        debug!(key = %key, "skipping entry without rule suffix");
    }
    let mut rules = Vec::with_capacity(raw.rules.len());
    for (name, body) in raw.rules {
        let rule = build_rule(name, body.unwrap_or_default())?;
        debug!(rule = %rule.name, metrics = %rule.metrics_name, "parsed alarm rule");
        rules.push(rule);
    }
    Ok(rules)
}

fn build_rule(name: String, raw: RawRule) -> Result<AlarmRule> {
    let metrics_name = raw
        .metrics_name
        .ok_or_else(|| RuleError::missing(&name, "metrics-name"))?;
    let threshold = raw
        .threshold
        .map(|t| t.0)
        .ok_or_else(|| RuleError::missing(&name, "threshold"))?;

    let period = positive(&name, "period", raw.period.unwrap_or(DEFAULT_PERIOD))?;
    let count = positive(&name, "count", raw.count.unwrap_or(DEFAULT_COUNT))?;
    // Silence defaults to the rule's own window, not a fixed value.
    let silence_period = positive(&name, "silence-period", raw.silence_period.unwrap_or(period))?;
    let message = raw
        .message
        .unwrap_or_else(|| AlarmRule::default_message(&name));

    Ok(AlarmRule {
        metrics_name,
        include_names: raw.include_names.unwrap_or_default(),
        exclude_names: raw.exclude_names.unwrap_or_default(),
        include_names_regex: raw.include_names_regex.unwrap_or_default(),
        exclude_names_regex: raw.exclude_names_regex.unwrap_or_default(),
        include_labels: raw.include_labels.unwrap_or_default(),
        exclude_labels: raw.exclude_labels.unwrap_or_default(),
        include_labels_regex: raw.include_labels_regex.unwrap_or_default(),
        exclude_labels_regex: raw.exclude_labels_regex.unwrap_or_default(),
        threshold,
        op: raw.op,
        period,
        count,
        silence_period,
        message,
        name,
    })
}

fn positive(rule: &str, field: &'static str, value: u32) -> Result<u32> {
    if value == 0 {
        return Err(RuleError::invalid(rule, field, "must be at least 1"));
    }
    Ok(value)
}
