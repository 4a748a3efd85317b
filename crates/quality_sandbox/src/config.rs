//! Configuration for the SQL sandbox.

use crate::{seed_orders, Order, SandboxError};
use serde::{Deserialize, Serialize};

/// Name under which the orders table is registered.
pub const DEFAULT_TABLE_NAME: &str = "orders";

/// Configuration for a sandbox session.
///
/// The default configuration registers the eight seed orders as `orders`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SandboxConfig {
    /// Table name used in queries
    pub table_name: String,

    /// Rows loaded into the table
    pub orders: Vec<Order>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            orders: seed_orders(),
        }
    }
}

impl SandboxConfig {
    /// Creates a new builder for `SandboxConfig`.
    pub fn builder() -> SandboxConfigBuilder {
        SandboxConfigBuilder::default()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SandboxError> {
        if self.table_name.is_empty() {
            return Err(SandboxError::ConfigurationError(
                "table_name cannot be empty".to_string(),
            ));
        }

        let valid_identifier = self
            .table_name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && self
                .table_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid_identifier {
            return Err(SandboxError::ConfigurationError(format!(
                "table_name '{}' is not a plain SQL identifier",
                self.table_name
            )));
        }

        if let Some(order) = self.orders.iter().find(|o| !o.amount.is_finite()) {
            return Err(SandboxError::ConfigurationError(format!(
                "order {} has a non-finite amount",
                order.id
            )));
        }

        Ok(())
    }
}

/// Builder for `SandboxConfig`.
#[derive(Debug, Clone, Default)]
pub struct SandboxConfigBuilder {
    table_name: Option<String>,
    orders: Option<Vec<Order>>,
}

impl SandboxConfigBuilder {
    /// Sets the table name.
    pub fn table_name<S: Into<String>>(mut self, name: S) -> Self {
        self.table_name = Some(name.into());
        self
    }

    /// Replaces the seed orders.
    pub fn orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = Some(orders);
        self
    }

    /// Adds a single order to the configured rows.
    pub fn order(mut self, order: Order) -> Self {
        self.orders.get_or_insert_with(Vec::new).push(order);
        self
    }

    /// Builds the `SandboxConfig`.
    ///
    /// Unset values fall back to the defaults. Returns an error if the
    /// result does not validate.
    pub fn build(self) -> Result<SandboxConfig, SandboxError> {
        let config = SandboxConfig {
            table_name: self
                .table_name
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            orders: self.orders.unwrap_or_else(seed_orders),
        };

        config.validate()?;
        Ok(config)
    }
}
