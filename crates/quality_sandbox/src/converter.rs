//! Type conversion between Arrow arrays and validator values.

use crate::SandboxError;
use arrow_array::array::*;
use arrow_array::RecordBatch;
use arrow_schema::DataType;
use chrono::{DateTime, TimeDelta, Utc};
use quality_validator::{DataValue, ResultSet};

fn downcast<'a, T: 'static>(array: &'a ArrayRef, name: &str) -> Result<&'a T, SandboxError> {
    array.as_any().downcast_ref::<T>().ok_or_else(|| {
        SandboxError::TypeConversionError(format!("Failed to downcast to {}", name))
    })
}

/// Converts one Arrow value to a `DataValue`.
///
/// Dates become ISO-8601 strings (`2024-03-01`) and decimals become floats.
pub fn arrow_value_to_data_value(
    array: &ArrayRef,
    row_idx: usize,
) -> Result<DataValue, SandboxError> {
    if array.is_null(row_idx) {
        return Ok(DataValue::Null);
    }

    let value = match array.data_type() {
        DataType::Null => DataValue::Null,
        DataType::Boolean => {
            DataValue::Bool(downcast::<BooleanArray>(array, "BooleanArray")?.value(row_idx))
        }
        DataType::Int8 => {
            DataValue::Int(downcast::<Int8Array>(array, "Int8Array")?.value(row_idx) as i64)
        }
        DataType::Int16 => {
            DataValue::Int(downcast::<Int16Array>(array, "Int16Array")?.value(row_idx) as i64)
        }
        DataType::Int32 => {
            DataValue::Int(downcast::<Int32Array>(array, "Int32Array")?.value(row_idx) as i64)
        }
        DataType::Int64 => DataValue::Int(downcast::<Int64Array>(array, "Int64Array")?.value(row_idx)),
        DataType::UInt32 => {
            DataValue::Int(downcast::<UInt32Array>(array, "UInt32Array")?.value(row_idx) as i64)
        }
        DataType::UInt64 => {
            let raw = downcast::<UInt64Array>(array, "UInt64Array")?.value(row_idx);
            i64::try_from(raw)
                .map(DataValue::Int)
                .unwrap_or(DataValue::Float(raw as f64))
        }
        DataType::Float32 => {
            DataValue::Float(downcast::<Float32Array>(array, "Float32Array")?.value(row_idx) as f64)
        }
        DataType::Float64 => {
            DataValue::Float(downcast::<Float64Array>(array, "Float64Array")?.value(row_idx))
        }
        DataType::Decimal128(_, scale) => {
            let raw = downcast::<Decimal128Array>(array, "Decimal128Array")?.value(row_idx);
            DataValue::Float(raw as f64 / 10f64.powi(*scale as i32))
        }
        DataType::Utf8 => DataValue::String(
            downcast::<StringArray>(array, "StringArray")?
                .value(row_idx)
                .to_string(),
        ),
        DataType::LargeUtf8 => DataValue::String(
            downcast::<LargeStringArray>(array, "LargeStringArray")?
                .value(row_idx)
                .to_string(),
        ),
        DataType::Utf8View => DataValue::String(
            downcast::<StringViewArray>(array, "StringViewArray")?
                .value(row_idx)
                .to_string(),
        ),
        DataType::Date32 => {
            let days = downcast::<Date32Array>(array, "Date32Array")?.value(row_idx);
            let date = DateTime::<Utc>::UNIX_EPOCH
                .date_naive()
                .checked_add_signed(TimeDelta::days(days as i64))
                .ok_or_else(|| {
                    SandboxError::TypeConversionError(format!("Invalid date value: {}", days))
                })?;
            DataValue::String(date.format("%Y-%m-%d").to_string())
        }
        other => return Err(SandboxError::UnsupportedType(other.to_string())),
    };

    Ok(value)
}

/// Converts query output batches into a `ResultSet`.
///
/// `columns` is passed separately so that a query returning no batches still
/// reports its column names.
pub fn record_batches_to_result_set(
    columns: Vec<String>,
    batches: &[RecordBatch],
) -> Result<ResultSet, SandboxError> {
    let mut rows = Vec::with_capacity(batches.iter().map(RecordBatch::num_rows).sum());

    for batch in batches {
        for row_idx in 0..batch.num_rows() {
            let row = batch
                .columns()
                .iter()
                .map(|column| arrow_value_to_data_value(column, row_idx))
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
    }

    Ok(ResultSet::new(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_arrow_boolean_conversion() {
        let array: ArrayRef = Arc::new(BooleanArray::from(vec![true, false]));

        assert_eq!(arrow_value_to_data_value(&array, 0).unwrap(), DataValue::Bool(true));
        assert_eq!(arrow_value_to_data_value(&array, 1).unwrap(), DataValue::Bool(false));
    }

    #[test]
    fn test_arrow_int_conversion() {
        let array: ArrayRef = Arc::new(Int64Array::from(vec![42, 100]));
        assert_eq!(arrow_value_to_data_value(&array, 0).unwrap(), DataValue::Int(42));
    }

    #[test]
    fn test_arrow_string_conversion() {
        let array: ArrayRef = Arc::new(StringArray::from(vec!["hello", "world"]));
        assert_eq!(
            arrow_value_to_data_value(&array, 0).unwrap(),
            DataValue::String("hello".to_string())
        );

        let array: ArrayRef = Arc::new(StringViewArray::from(vec!["view"]));
        assert_eq!(
            arrow_value_to_data_value(&array, 0).unwrap(),
            DataValue::String("view".to_string())
        );
    }

    #[test]
    fn test_arrow_null_conversion() {
        let array: ArrayRef = Arc::new(Int64Array::from(vec![Some(42), None]));
        assert_eq!(arrow_value_to_data_value(&array, 1).unwrap(), DataValue::Null);
    }

    #[test]
    fn test_arrow_date_conversion() {
        let array: ArrayRef = Arc::new(Date32Array::from(vec![19783]));
        assert_eq!(
            arrow_value_to_data_value(&array, 0).unwrap(),
            DataValue::String("2024-03-01".to_string())
        );
    }

    #[test]
    fn test_arrow_unsupported_type() {
        let array: ArrayRef = Arc::new(BinaryArray::from(vec![b"raw".as_ref()]));
        assert!(matches!(
            arrow_value_to_data_value(&array, 0),
            Err(SandboxError::UnsupportedType(_))
        ));
    }
}
