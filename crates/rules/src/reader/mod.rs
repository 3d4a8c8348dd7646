//! Alarm settings reader.
//!
//! Decodes an `alarm-settings.yml` document with `serde_yaml` and walks it
//! into a [`crate::schema::RuleSet`], applying per-rule defaults.
//! Keys under `rules` without the `_rule` suffix are skipped silently; a
//! recognised rule missing `metrics-name` or `threshold` aborts the build.

mod builder;
mod error;


pub use self::builder::RuleSetBuilder;
pub use self::error::{Result, RuleError};
