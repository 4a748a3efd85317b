//! The `orders` table: row type, seed data and Arrow encoding.

use crate::SandboxError;
use arrow_array::{ArrayRef, Date32Array, Float64Array, Int64Array, RecordBatch, StringArray};
use arrow_schema::{DataType, Field, Schema, SchemaRef};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order number
    pub id: i64,
    /// Customer name
    pub customer: String,
    /// Order value
    pub amount: f64,
    /// Day the order was placed, `YYYY-MM-DD` in JSON
    pub order_date: NaiveDate,
}

impl Order {
    /// Creates an order.
    pub fn new(id: i64, customer: impl Into<String>, amount: f64, order_date: NaiveDate) -> Self {
        Self {
            id,
            customer: customer.into(),
            amount,
            order_date,
        }
    }
}

const SEED: [(&str, f64, (i32, u32, u32)); 8] = [
    ("Alice", 5000.0, (2024, 3, 1)),
    ("Bob", 8000.0, (2024, 3, 5)),
    ("Alice", 3000.0, (2024, 3, 15)),
    ("Charlie", 7000.0, (2024, 2, 20)),
    ("Alice", 10000.0, (2024, 2, 28)),
    ("Bob", 4000.0, (2024, 2, 10)),
    ("Charlie", 9000.0, (2024, 3, 22)),
    ("Alice", 2000.0, (2024, 3, 30)),
];

/// The eight orders the sandbox starts with.
pub fn seed_orders() -> Vec<Order> {
    SEED.iter()
        .zip(1..)
        .filter_map(|((customer, amount, (y, m, d)), id)| {
            NaiveDate::from_ymd_opt(*y, *m, *d).map(|date| Order::new(id, *customer, *amount, date))
        })
        .collect()
}

/// Arrow schema of the orders table.
pub fn orders_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("customer", DataType::Utf8, false),
        Field::new("amount", DataType::Float64, false),
        Field::new("order_date", DataType::Date32, false),
    ]))
}

/// Encodes orders as a single record batch.
pub fn orders_batch(orders: &[Order]) -> Result<RecordBatch, SandboxError> {
    let epoch = DateTime::<Utc>::UNIX_EPOCH.date_naive();

    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int64Array::from_iter_values(orders.iter().map(|o| o.id))),
        Arc::new(StringArray::from_iter_values(
            orders.iter().map(|o| o.customer.as_str()),
        )),
        Arc::new(Float64Array::from_iter_values(orders.iter().map(|o| o.amount))),
        Arc::new(Date32Array::from_iter_values(orders.iter().map(|o| {
            o.order_date.signed_duration_since(epoch).num_days() as i32
        }))),
    ];

    Ok(RecordBatch::try_new(orders_schema(), columns)?)
}
