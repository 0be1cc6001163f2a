//! Dashboard service
//!
//! All-time income/expense totals, the running balance, and the most recent
//! transactions for the summary view.

use crate::error::WalletResult;
use crate::models::{Money, Transaction};
use crate::storage::Storage;

/// Default number of transactions in the recent list
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Service for dashboard summaries
pub struct DashboardService<'a> {
    storage: &'a Storage,
}

impl<'a> DashboardService<'a> {
    /// Create a new dashboard service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Total of all income transactions
    pub fn total_income(&self) -> WalletResult<Money> {
        let transactions = self.storage.transactions.list()?;
        Ok(transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum())
    }

    /// Total of all expense transactions
    pub fn total_expenses(&self) -> WalletResult<Money> {
        let transactions = self.storage.transactions.list()?;
        Ok(transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum())
    }

    /// Income minus expenses; negative when spending outruns income
    pub fn balance(&self) -> WalletResult<Money> {
        let transactions = self.storage.transactions.list()?;
        Ok(transactions.iter().map(|t| t.signed_amount()).sum())
    }

    /// The most recent transactions, newest first
    pub fn recent_transactions(&self, limit: usize) -> WalletResult<Vec<Transaction>> {
        let mut transactions = self.storage.transactions.list()?;
        transactions.truncate(limit);
        Ok(transactions)
    }
}
