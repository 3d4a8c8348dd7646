//! Document shape as written in `alarm-settings.yml`.
//!
//! Every field is optional here; defaults and required-field checks are
//! applied by the builder. Entries under `rules` whose key lacks the `_rule`
//! suffix are skipped without being decoded, so their content never matters.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;

use super::{AlarmRule, ChatHookSetting, GrpcHookSetting};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawSettings {
    pub rules: Option<RawRules>,
    pub webhooks: Option<Vec<String>>,
    #[serde(rename = "gRPCHook")]
    pub grpc_hook: Option<RawGrpcHook>,
    #[serde(rename = "slackHooks")]
    pub slack_hooks: Option<RawChatHook>,
}

/// The `rules` mapping, in document order.
#[derive(Debug, Default)]
pub(crate) struct RawRules {
    /// Rule bodies keyed by rule key. A null body is `None`.
    pub rules: IndexMap<String, Option<RawRule>>,
    /// Keys without the rule suffix.
    pub skipped: Vec<String>,
}

impl<'de> Deserialize<'de> for RawRules {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RulesVisitor;

        impl<'de> Visitor<'de> for RulesVisitor {
            type Value = RawRules;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of rule keys to rule settings")
            }

            fn visit_map<A>(self, mut map: A) -> Result<RawRules, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut raw = RawRules::default();
                while let Some(key) = map.next_key::<String>()? {
                    if AlarmRule::is_rule_key(&key) {
                        let body = map.next_value::<Option<RawRule>>()?;
                        raw.rules.insert(key, body);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                        raw.skipped.push(key);
                    }
                }
                Ok(raw)
            }
        }

        deserializer.deserialize_map(RulesVisitor)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct RawRule {
    pub metrics_name: Option<String>,
    pub include_names: Option<Vec<String>>,
    pub exclude_names: Option<Vec<String>>,
    pub include_names_regex: Option<String>,
    pub exclude_names_regex: Option<String>,
    pub include_labels: Option<Vec<String>>,
    pub exclude_labels: Option<Vec<String>>,
    pub include_labels_regex: Option<String>,
    pub exclude_labels_regex: Option<String>,
    pub threshold: Option<RawThreshold>,
    pub op: Option<String>,
    pub period: Option<u32>,
    pub count: Option<u32>,
    pub silence_period: Option<u32>,
    pub message: Option<String>,
}

/// Threshold scalar as text.
///
/// Asked for a string, the YAML deserializer hands over the scalar exactly as
/// written, so `1e3`, `1_000` and integers wider than 128 bits keep their
/// spelling. Typed visits cover deserializers that only offer resolved values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawThreshold(pub String);

impl<'de> Deserialize<'de> for RawThreshold {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ThresholdVisitor;

        impl<'de> Visitor<'de> for ThresholdVisitor {
            type Value = RawThreshold;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a threshold scalar")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<RawThreshold, E> {
                Ok(RawThreshold(v.to_owned()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<RawThreshold, E> {
                Ok(RawThreshold(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<RawThreshold, E> {
                Ok(RawThreshold(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<RawThreshold, E> {
                Ok(RawThreshold(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<RawThreshold, E> {
                Ok(RawThreshold(v.to_string()))
            }

            fn visit_i128<E: de::Error>(self, v: i128) -> Result<RawThreshold, E> {
                Ok(RawThreshold(v.to_string()))
            }

            fn visit_u128<E: de::Error>(self, v: u128) -> Result<RawThreshold, E> {
                Ok(RawThreshold(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<RawThreshold, E> {
                Ok(RawThreshold(v.to_string()))
            }
        }

        deserializer.deserialize_str(ThresholdVisitor)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawGrpcHook {
    pub target_host: Option<String>,
    pub target_port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawChatHook {
    #[serde(rename = "textTemplate")]
    pub text_template: Option<String>,
    pub webhooks: Option<Vec<String>>,
}

impl From<RawGrpcHook> for GrpcHookSetting {
    fn from(raw: RawGrpcHook) -> Self {
        Self {
            target_host: raw.target_host,
            target_port: raw.target_port,
        }
    }
}

impl From<RawChatHook> for ChatHookSetting {
    fn from(raw: RawChatHook) -> Self {
        Self {
            text_template: raw.text_template.unwrap_or_default(),
            webhooks: raw.webhooks.unwrap_or_default(),
        }
    }
}
