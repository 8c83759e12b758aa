//! Records and record sets: the flat adjacency-list input.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::error::{TreeError, TreeResult};
use crate::domain::id::NodeId;

/// Name of the identifier field every record is matched by.
pub const ID_FIELD: &str = "id";

/// One node: an open field map with a required `id` and a parent reference.
///
/// Fields other than `id` and the parent reference are opaque and only
/// passed through to rendering. Field order is kept as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Normalized id, `None` when the field is missing or null.
    pub fn id(&self) -> Option<NodeId> {
        match self.0.get(ID_FIELD) {
            None | Some(Value::Null) => None,
            Some(value) => NodeId::from_value(value),
        }
    }

    /// Normalized parent reference; a missing field is the root sentinel.
    pub fn parent_id(&self, pid_name: &str) -> Option<NodeId> {
        match self.0.get(pid_name) {
            None => Some(NodeId::ROOT),
            Some(value) => NodeId::from_value(value),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.shift_remove(field)
    }

    /// Field value as substitution text; missing fields are `None`.
    pub fn text(&self, field: &str) -> Option<String> {
        self.0.get(field).map(value_text)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Record {
    type Error = TreeError;

    fn try_from(value: Value) -> TreeResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(TreeError::InvalidRecord {
                index: 0,
                message: format!("expected an object, got {other}"),
            }),
        }
    }
}

/// Stringify a field value for template substitution.
///
/// Strings are used verbatim, numbers in their JSON form, `null` is empty,
/// `true` is `1` and `false` is empty. Arrays and objects render as compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => String::new(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Truthiness of a field value: `null`, `false`, `0`, `""`, `"0"` and empty
/// arrays/objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Ordered, immutable input collection.
///
/// Duplicate ids are allowed; lookups match every record carrying the id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecordSet(Vec<Record>);

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self(records)
    }

    /// Parse a JSON array of records, or an object whose values are records
    /// (keys are ignored, value order is kept).
    pub fn from_json(text: &str) -> TreeResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> TreeResult<Self> {
        let items: Vec<Value> = match value {
            Value::Array(items) => items,
            Value::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
            other => {
                return Err(TreeError::InvalidRecord {
                    index: 0,
                    message: format!("expected an array or object of records, got {other}"),
                })
            }
        };
        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(map) => Ok(Record(map)),
                other => Err(TreeError::InvalidRecord {
                    index,
                    message: format!("expected an object, got {other}"),
                }),
            })
            .collect::<TreeResult<Vec<_>>>()
            .map(Self)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self(records)
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
