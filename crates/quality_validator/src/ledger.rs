//! Monthly expense ledger.
//!
//! An explicit, caller-owned list of expenses with the derived figures a
//! monthly budget view needs: total, average per day and the largest items.

use crate::LedgerError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Days used to turn a monthly total into a daily average.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Number of items listed in an [`ExpenseSummary`].
pub const SUMMARY_TOP: usize = 3;

/// A single expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Spending category (e.g., "Rent")
    pub category: String,
    /// Amount spent, always positive
    pub amount: f64,
}

impl Expense {
    /// Creates a checked expense.
    ///
    /// The category is trimmed and must not be empty; the amount must be a
    /// finite number greater than zero.
    pub fn new(category: impl AsRef<str>, amount: f64) -> Result<Self, LedgerError> {
        let category = category.as_ref().trim();
        if category.is_empty() {
            return Err(LedgerError::EmptyCategory);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(amount));
        }
        Ok(Self {
            category: category.to_string(),
            amount,
        })
    }
}

/// Derived figures for a ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    /// Sum of all amounts
    pub total: f64,
    /// Total divided by [`DAYS_PER_MONTH`]
    pub average_daily: f64,
    /// Largest expenses, descending
    pub top: Vec<Expense>,
}

/// An ordered list of expenses.
///
/// # Example
///
/// ```rust
/// use quality_validator::ExpenseLedger;
///
/// let mut ledger = ExpenseLedger::new();
/// ledger.add("Rent", 1200.0).unwrap();
/// ledger.add("Food", 300.0).unwrap();
///
/// assert_eq!(ledger.total(), 1500.0);
/// assert_eq!(ledger.average_daily(), 50.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
}

impl ExpenseLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger, checking every expense.
    pub fn from_expenses(
        expenses: impl IntoIterator<Item = Expense>,
    ) -> Result<Self, LedgerError> {
        let mut ledger = Self::new();
        for expense in expenses {
            ledger.add(&expense.category, expense.amount)?;
        }
        Ok(ledger)
    }

    /// Appends an expense and returns its position.
    pub fn add(&mut self, category: impl AsRef<str>, amount: f64) -> Result<usize, LedgerError> {
        let expense = Expense::new(category, amount)?;
        debug!(category = %expense.category, amount, "Adding expense");
        self.expenses.push(expense);
        Ok(self.expenses.len() - 1)
    }

    /// Replaces the expense at `index`.
    pub fn update(
        &mut self,
        index: usize,
        category: impl AsRef<str>,
        amount: f64,
    ) -> Result<(), LedgerError> {
        let len = self.expenses.len();
        let slot = self
            .expenses
            .get_mut(index)
            .ok_or(LedgerError::IndexOutOfRange { index, len })?;
        *slot = Expense::new(category, amount)?;
        Ok(())
    }

    /// Removes and returns the expense at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Expense, LedgerError> {
        if index >= self.expenses.len() {
            return Err(LedgerError::IndexOutOfRange {
                index,
                len: self.expenses.len(),
            });
        }
        Ok(self.expenses.remove(index))
    }

    /// Returns the expenses in insertion order.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Returns the number of expenses.
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Returns true if the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Sum of all amounts.
    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Total spread over a 30-day month.
    pub fn average_daily(&self) -> f64 {
        self.total() / DAYS_PER_MONTH
    }

    /// The `n` largest expenses, descending. Ties keep insertion order.
    pub fn top(&self, n: usize) -> Vec<&Expense> {
        let mut sorted: Vec<&Expense> = self.expenses.iter().collect();
        sorted.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        sorted.truncate(n);
        sorted
    }

    /// Computes the summary figures.
    pub fn summary(&self) -> Result<ExpenseSummary, LedgerError> {
        if self.is_empty() {
            return Err(LedgerError::EmptyLedger);
        }
        Ok(ExpenseSummary {
            total: self.total(),
            average_daily: self.average_daily(),
            top: self.top(SUMMARY_TOP).into_iter().cloned().collect(),
        })
    }
}
