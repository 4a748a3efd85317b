//! Result matching for query tasks.
//!
//! Compares the first row of a tabular query result against an expected row.
//! Columns are looked up by name first and by position second, and numeric
//! expectations accept any value that coerces to the same number, so a
//! driver returning `"6000"` still matches an expected `6000`.

use crate::DataValue;

/// A tabular query result: named columns and rows of values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    /// Column names in result order
    pub columns: Vec<String>,
    /// Rows, each holding one value per column
    pub rows: Vec<Vec<DataValue>>,
}

impl ResultSet {
    /// Creates a result set.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<DataValue>>) -> Self {
        Self { columns, rows }
    }

    /// Returns true if the result has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Returns the first row, if any.
    pub fn first_row(&self) -> Option<&[DataValue]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Returns the value at `row` in the named column.
    pub fn get(&self, row: usize, column: &str) -> Option<&DataValue> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }
}

/// Expected values for the first row of a result, keyed by column name.
///
/// # Example
///
/// ```rust
/// use quality_validator::{matches_expected, DataValue, ExpectedRow, ResultSet};
///
/// let result = ResultSet::new(
///     vec!["customer".into(), "total_spent".into()],
///     vec![vec![DataValue::from("Alice"), DataValue::from(20000)]],
/// );
/// let expected = ExpectedRow::new()
///     .with("customer", "Alice")
///     .with("total_spent", 20000);
///
/// assert!(matches_expected(&result, &expected));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpectedRow {
    values: Vec<(String, DataValue)>,
}

impl ExpectedRow {
    /// Creates an empty expectation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an expected column value.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<DataValue>) -> Self {
        self.values.push((column.into(), value.into()));
        self
    }

    /// Iterates over expectations in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DataValue)> {
        self.values.iter().map(|(column, value)| (column.as_str(), value))
    }

    /// Returns the number of expected columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing is expected.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Returns true if the first row of `result` satisfies every expectation.
///
/// An empty result never matches. An empty expectation matches any
/// non-empty result.
pub fn matches_expected(result: &ResultSet, expected: &ExpectedRow) -> bool {
    let Some(row) = result.first_row() else {
        return false;
    };

    expected.iter().enumerate().all(|(position, (column, value))| {
        let index = result.column_index(column).unwrap_or(position);
        row.get(index)
            .is_some_and(|actual| values_match(actual, value))
    })
}

/// Compares one actual value against one expected value.
///
/// Numeric expectations compare after numeric coercion of the actual value.
/// Every other expectation requires a value of the same kind. Null never
/// matches.
pub fn values_match(actual: &DataValue, expected: &DataValue) -> bool {
    match expected {
        DataValue::Null => false,
        DataValue::Int(_) | DataValue::Float(_) => {
            match (actual.to_number(), expected.to_number()) {
                (Some(a), Some(e)) => a == e,
                _ => false,
            }
        }
        DataValue::String(e) => actual.as_string() == Some(e.as_str()),
        DataValue::Bool(e) => actual.as_bool() == Some(*e),
        DataValue::Map(_) | DataValue::List(_) => actual == expected,
    }
}
