//! Node identifiers and the loose equality used to compare them.
//!
//! Records come from loosely typed sources where the same id shows up as
//! `2`, `"2"` or `2.0`. Every comparison in the crate goes through
//! [`NodeId`], which normalizes a value once:
//!
//! - integers in the `i64` range, integral floats and strings that parse as
//!   such become `Int` (`"2"`, `" 2 "`, `2`, `2.0` and `"2e0"` are all equal)
//! - integers outside the `i64` range keep their exact decimal digits as
//!   `Text`, so `10000000000000000001` never equals `10000000000000000000`
//! - `null`, `false` and the empty string become `Int(0)`, the root sentinel;
//!   `true` becomes `Int(1)`
//! - non-integral finite numbers and numeric strings become their shortest
//!   decimal text (`1.5` equals `"1.50"`)
//! - any other string is compared after trimming surrounding whitespace,
//!   case-sensitive (`" a "` equals `"a"`, `"a"` != `"A"`)
//! - arrays and objects are not identifiers and never equal anything
//!
//! So `"0"` equals `0` and equals a missing parent reference, while `"abc"`
//! never equals `0`.

use std::fmt;

use serde_json::Value;

/// Normalized node identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeId {
    Int(i64),
    Text(String),
}

impl NodeId {
    /// Root sentinel: the parent reference of top-level records.
    pub const ROOT: NodeId = NodeId::Int(0);

    /// Normalize a JSON value; `None` for arrays and objects.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(Self::ROOT),
            Value::Bool(b) => Some(Self::Int(i64::from(*b))),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Self::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Some(Self::Text(u.to_string()))
                } else if let Some(f) = n.as_f64() {
                    Some(Self::from_float(f).unwrap_or_else(|| Self::Text(n.to_string())))
                } else {
                    Some(Self::Text(n.to_string()))
                }
            }
            Value::String(s) => Some(Self::from_text(s)),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Normalize a textual id, e.g. one item of a comma-separated list.
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::ROOT;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Self::Int(i);
        }
        if let Some(digits) = wide_integer(trimmed) {
            return Self::Text(digits);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            if let Some(id) = Self::from_float(f) {
                return id;
            }
        }
        Self::Text(trimmed.to_string())
    }

    fn from_float(f: f64) -> Option<Self> {
        if !f.is_finite() {
            return None;
        }
        // i64::MAX as f64 rounds up to 2^63, which does not fit
        if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
            Some(Self::Int(f as i64))
        } else {
            Some(Self::Text(f.to_string()))
        }
    }

    pub fn is_root(&self) -> bool {
        *self == Self::ROOT
    }
}

/// Canonical digits of an integer literal too wide for `i64`.
///
/// Leading zeros and a `+` sign are dropped so `"+010000000000000000000"`
/// matches the JSON number `10000000000000000000`.
fn wide_integer(text: &str) -> Option<String> {
    let (negative, digits) = match text.as_bytes().first().copied()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return None;
    }
    Some(if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    })
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for NodeId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for NodeId {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for NodeId {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::from_text(value)
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self::from_text(&value)
    }
}

impl From<&NodeId> for NodeId {
    fn from(value: &NodeId) -> Self {
        value.clone()
    }
}

/// Loose id equality, see the module docs for the exact rule.
pub fn ids_equal(a: &Value, b: &Value) -> bool {
    match (NodeId::from_value(a), NodeId::from_value(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Set of ids given either as a literal sequence or as a comma-separated string.
///
/// Used for the `selected` and `disabled` marks of the renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdList(Vec<NodeId>);

impl IdList {
    /// Parse `"1,2,abc"`. An empty string is an empty list.
    pub fn parse(text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::default();
        }
        Self(text.split(',').map(NodeId::from_text).collect())
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.0.iter().any(|candidate| candidate == id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for IdList {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for IdList {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl<T: Into<NodeId>> From<Vec<T>> for IdList {
    fn from(value: Vec<T>) -> Self {
        Self(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<NodeId>> FromIterator<T> for IdList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
