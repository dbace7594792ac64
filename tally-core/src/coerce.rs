//! Numeric coercion at the input boundary.
//!
//! Anything that reaches a record or a ledger as "a number" comes through
//! here first. Unconvertible input becomes `0.0`.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// An untyped input value, as it arrives from a CLI flag, a CSV cell or JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Missing,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawValue {
    /// The text payload, if this value is a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Missing => f.write_str("<missing>"),
            RawValue::Bool(b) => write!(f, "{b}"),
            RawValue::Int(i) => write!(f, "{i}"),
            RawValue::Float(x) => write!(f, "{x:?}"),
            RawValue::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<i32> for RawValue {
    fn from(i: i32) -> Self {
        RawValue::Int(i64::from(i))
    }
}

impl From<i64> for RawValue {
    fn from(i: i64) -> Self {
        RawValue::Int(i)
    }
}

impl From<u32> for RawValue {
    fn from(i: u32) -> Self {
        RawValue::Int(i64::from(i))
    }
}

impl From<f32> for RawValue {
    fn from(x: f32) -> Self {
        RawValue::Float(f64::from(x))
    }
}

impl From<f64> for RawValue {
    fn from(x: f64) -> Self {
        RawValue::Float(x)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(RawValue::Missing)
    }
}

/// Convert `value` to a finite `f64`.
///
/// Text is trimmed before parsing. NaN and infinities are rejected so the
/// result can always be summed and compared.
pub fn try_coerce(value: &RawValue) -> Result<f64> {
    let n = match value {
        RawValue::Missing => None,
        RawValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        RawValue::Int(i) => Some(*i as f64),
        RawValue::Float(x) => Some(*x),
        RawValue::Text(s) => s.trim().parse::<f64>().ok(),
    };

    n.filter(|x| x.is_finite()).ok_or_else(|| Error::NonNumeric {
        input: value.to_string(),
    })
}

/// Like [`try_coerce`], but falls back to `0.0`.
pub fn coerce(value: impl Into<RawValue>) -> f64 {
    let value = value.into();
    match try_coerce(&value) {
        Ok(n) => n,
        Err(e) => {
            debug!(error = %e, "coerced to 0.0");
            0.0
        }
    }
}
