//! Alarm settings schema.
//!
//! Defines the value objects handed to the alarm engine:
//! - `RuleSet`: root object with rules and notification hooks
//! - `AlarmRule`: one fully defaulted threshold rule
//! - `GrpcHookSetting` / `ChatHookSetting`: hook targets
//!
//! The `raw` module holds the document shape those objects are built from.

mod alarm_rule;
mod hooks;
mod op;
pub(crate) mod raw;
mod rule_set;

pub use alarm_rule::*;
pub use hooks::*;
pub use op::*;
pub use rule_set::*;
