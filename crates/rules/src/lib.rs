//! Alarm settings reader.
//!
//! This crate provides:
//! - Typed alarm rule and hook settings decoded from `alarm-settings.yml`
//! - `_rule` key recognition with per-rule defaulting
//! - Named errors for rules missing `metrics-name` or `threshold`
//! - Advisory validation used by the `alarm-check` binary

pub mod config;
pub mod reader;
pub mod schema;
pub mod validation;

pub use reader::{Result, RuleError, RuleSetBuilder};
pub use schema::{AlarmRule, ChatHookSetting, CompareOp, GrpcHookSetting, RuleSet};
