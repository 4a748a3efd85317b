//! Record representation for validation.
//!
//! This module provides the types records are decoded into before they reach
//! the engine: [`DataValue`], [`Record`] and [`DataSet`].

use crate::ValidationError;
use indexmap::IndexMap;
use std::fmt;

/// A value in a record.
///
/// Represents the different types of values that can appear in data records.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    /// Null/missing value
    Null,
    /// String value
    String(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Nested mapping
    Map(IndexMap<String, DataValue>),
    /// List/array value
    List(Vec<DataValue>),
}

impl DataValue {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            DataValue::Null => "null",
            DataValue::String(_) => "string",
            DataValue::Int(_) => "int64",
            DataValue::Float(_) => "float64",
            DataValue::Bool(_) => "boolean",
            DataValue::Map(_) => "map",
            DataValue::List(_) => "list",
        }
    }

    /// Attempts to get this value as a string.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            DataValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            DataValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Attempts to get this value as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            DataValue::Float(f) => Some(*f),
            DataValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Attempts to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DataValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to get this value as a nested map.
    pub fn as_map(&self) -> Option<&IndexMap<String, DataValue>> {
        match self {
            DataValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Coerces this value to a finite number.
    ///
    /// Numbers are taken as-is and numeric strings (`" 12.5 "`) are parsed.
    /// NaN and infinities never count as numbers.
    pub fn to_number(&self) -> Option<f64> {
        let n = match self {
            DataValue::Int(i) => *i as f64,
            DataValue::Float(f) => *f,
            DataValue::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        n.is_finite().then_some(n)
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Null => write!(f, "null"),
            DataValue::String(s) => write!(f, "{}", s),
            DataValue::Int(i) => write!(f, "{}", i),
            DataValue::Float(x) => write!(f, "{}", x),
            DataValue::Bool(b) => write!(f, "{}", b),
            DataValue::Map(_) | DataValue::List(_) => {
                write!(f, "{}", serde_json::Value::from(self))
            }
        }
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::String(s)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::String(s.to_string())
    }
}

impl From<i32> for DataValue {
    fn from(i: i32) -> Self {
        DataValue::Int(i as i64)
    }
}

impl From<i64> for DataValue {
    fn from(i: i64) -> Self {
        DataValue::Int(i)
    }
}

impl From<f64> for DataValue {
    fn from(f: f64) -> Self {
        DataValue::Float(f)
    }
}

impl From<bool> for DataValue {
    fn from(b: bool) -> Self {
        DataValue::Bool(b)
    }
}

impl From<Record> for DataValue {
    fn from(record: Record) -> Self {
        DataValue::Map(record.fields)
    }
}

impl From<serde_json::Value> for DataValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => DataValue::Null,
            Value::Bool(b) => DataValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => DataValue::Int(i),
                None => n.as_f64().map_or(DataValue::Null, DataValue::Float),
            },
            Value::String(s) => DataValue::String(s),
            Value::Array(items) => DataValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => DataValue::Map(
                map.into_iter()
                    .map(|(key, value)| (key, DataValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&DataValue> for serde_json::Value {
    fn from(value: &DataValue) -> Self {
        use serde_json::Value;

        match value {
            DataValue::Null => Value::Null,
            DataValue::String(s) => Value::String(s.clone()),
            DataValue::Int(i) => Value::from(*i),
            DataValue::Float(f) => Value::from(*f),
            DataValue::Bool(b) => Value::Bool(*b),
            DataValue::Map(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), Value::from(value)))
                    .collect(),
            ),
            DataValue::List(items) => Value::Array(items.iter().map(Value::from).collect()),
        }
    }
}

/// A single input record: an insertion-ordered mapping of field names to values.
///
/// # Example
///
/// ```rust
/// use quality_validator::{DataValue, Record};
///
/// let record = Record::new()
///     .with("id", 1)
///     .with("rating", Record::new().with("rate", 4.5));
///
/// assert_eq!(record.get_path("rating.rate"), Some(&DataValue::Float(4.5)));
/// assert_eq!(record.get_path("rating.count"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<String, DataValue>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record with a field added.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<DataValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a field, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<DataValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Gets a top-level field.
    pub fn get(&self, name: &str) -> Option<&DataValue> {
        self.fields.get(name)
    }

    /// Resolves a dotted path through nested maps.
    pub fn get_path(&self, path: &str) -> Option<&DataValue> {
        let mut segments = path.split('.');
        let mut current = self.fields.get(segments.next()?)?;
        for segment in segments {
            current = current.as_map()?.get(segment)?;
        }
        Some(current)
    }

    /// Resolves a dotted path to a non-null value.
    ///
    /// A field holding `null` counts as missing.
    pub fn get_present(&self, path: &str) -> Option<&DataValue> {
        self.get_path(path).filter(|value| !value.is_null())
    }

    /// Returns the number of top-level fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over top-level fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DataValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl FromIterator<(String, DataValue)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, DataValue)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl From<IndexMap<String, DataValue>> for Record {
    fn from(fields: IndexMap<String, DataValue>) -> Self {
        Self { fields }
    }
}

/// A dataset containing multiple records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSet {
    records: Vec<Record>,
}

impl DataSet {
    /// Creates a new empty dataset.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a new dataset from records.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Decodes a dataset from a JSON array of objects.
    ///
    /// Decoding is the record source's job: anything that is not an array of
    /// objects is rejected here, before validation starts.
    pub fn from_json_str(content: &str) -> Result<Self, ValidationError> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        Self::from_json(value)
    }

    /// Decodes a dataset from an already parsed JSON value.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ValidationError> {
        let items = match value {
            serde_json::Value::Array(items) => items,
            other => {
                return Err(ValidationError::record_source(format!(
                    "expected a JSON array of records, found {}",
                    json_type_name(&other)
                )));
            }
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match DataValue::from(item) {
                DataValue::Map(fields) => Ok(Record::from(fields)),
                other => Err(ValidationError::NotAnObject {
                    index,
                    found: other.type_name().to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_records)
    }

    /// Returns the number of records in the dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an iterator over the records.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Returns the records as a slice.
    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    /// Gets a specific record by index.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Adds a record to the dataset.
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }
}

impl FromIterator<Record> for DataSet {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
