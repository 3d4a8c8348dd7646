//! Threshold comparison operators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operator a rule uses to compare a metric value against its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOp {
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
    Equal,
    NotEqual,
}

impl CompareOp {
    /// Canonical symbols, in declaration order.
    pub const SYMBOLS: &'static [&'static str] = &[">", ">=", "<", "<=", "==", "!="];

    /// Canonical symbol for this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Greater => ">",
            CompareOp::GreaterOrEqual => ">=",
            CompareOp::Less => "<",
            CompareOp::LessOrEqual => "<=",
            CompareOp::Equal => "==",
            CompareOp::NotEqual => "!=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for CompareOp {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            ">" => Ok(CompareOp::Greater),
            ">=" => Ok(CompareOp::GreaterOrEqual),
            "<" => Ok(CompareOp::Less),
            "<=" => Ok(CompareOp::LessOrEqual),
            "==" => Ok(CompareOp::Equal),
            "!=" => Ok(CompareOp::NotEqual),
            other => Err(format!("unknown comparison operator: '{}'", other)),
        }
    }
}
