//! Budget repository for JSON storage
//!
//! Keyed by period: saving a budget replaces whatever was stored for that
//! (month, year), so at most one budget exists per period.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::WalletError;
use crate::models::{Budget, Period};

use super::file_io::{read_json, write_json_atomic};

/// Serializable budget data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<Budget>,
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    data: RwLock<HashMap<Period, Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load budgets from disk
    ///
    /// If the file holds several records for one period (hand-edited data),
    /// the most recently created one wins, matching the replace semantics of
    /// `upsert`.
    pub fn load(&self) -> Result<(), WalletError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| WalletError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for budget in file_data.budgets {
            let newer = match data.get(&budget.period) {
                Some(existing) => budget.created_at > existing.created_at,
                None => true,
            };
            if newer {
                data.insert(budget.period, budget);
            }
        }

        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), WalletError> {
        let data = self
            .data
            .read()
            .map_err(|e| WalletError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut budgets: Vec<_> = data.values().cloned().collect();
        budgets.sort_by(|a, b| a.period.cmp(&b.period));

        let file_data = BudgetData { budgets };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get the budget for a period
    pub fn get(&self, period: Period) -> Result<Option<Budget>, WalletError> {
        let data = self
            .data
            .read()
            .map_err(|e| WalletError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&period).cloned())
    }

    /// Insert or replace the budget for its period
    pub fn upsert(&self, budget: Budget) -> Result<(), WalletError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| WalletError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(budget.period, budget);
        Ok(())
    }

    /// Get all budgets, earliest period first
    pub fn list(&self) -> Result<Vec<Budget>, WalletError> {
        let data = self
            .data
            .read()
            .map_err(|e| WalletError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut budgets: Vec<_> = data.values().cloned().collect();
        budgets.sort_by(|a, b| a.period.cmp(&b.period));
        Ok(budgets)
    }

    /// Replace the whole record set (used by backup import)
    pub fn replace_all(&self, budgets: Vec<Budget>) -> Result<(), WalletError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| WalletError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for budget in budgets {
            data.insert(budget.period, budget);
        }
        Ok(())
    }

    /// Delete every budget, returning how many were removed
    pub fn clear(&self) -> Result<usize, WalletError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| WalletError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let removed = data.len();
        data.clear();
        Ok(removed)
    }

    /// Count budgets
    pub fn count(&self) -> Result<usize, WalletError> {
        let data = self
            .data
            .read()
            .map_err(|e| WalletError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}
