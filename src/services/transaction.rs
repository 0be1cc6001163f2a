//! Transaction service
//!
//! Validating CRUD in front of the transaction store. All mutations validate
//! first, then write through and persist, so invalid records never reach the
//! file.

use tracing::debug;

use crate::error::{WalletError, WalletResult};
use crate::models::{Transaction, TransactionId};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new transaction
    pub fn add(&self, txn: Transaction) -> WalletResult<Transaction> {
        txn.validate()
            .map_err(|e| WalletError::Validation(e.to_string()))?;

        let id = self.storage.transactions.add(txn.clone())?;
        self.storage.transactions.save()?;

        debug!(%id, kind = %txn.kind, amount = txn.amount.cents(), "transaction added");
        Ok(txn)
    }

    /// Replace an existing transaction wholesale
    pub fn update(&self, mut txn: Transaction) -> WalletResult<Transaction> {
        txn.validate()
            .map_err(|e| WalletError::Validation(e.to_string()))?;

        txn.touch();
        if !self.storage.transactions.update(txn.clone())? {
            return Err(WalletError::transaction_not_found(txn.id.to_string()));
        }
        self.storage.transactions.save()?;

        debug!(id = %txn.id, "transaction updated");
        Ok(txn)
    }

    /// Delete a transaction by id
    pub fn delete(&self, id: TransactionId) -> WalletResult<()> {
        if !self.storage.transactions.delete(id)? {
            return Err(WalletError::transaction_not_found(id.to_string()));
        }
        self.storage.transactions.save()?;

        debug!(%id, "transaction deleted");
        Ok(())
    }

    /// Get a transaction by id; absence is a normal outcome, not an error
    pub fn get(&self, id: TransactionId) -> WalletResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// All transactions, most recent date first
    pub fn list(&self) -> WalletResult<Vec<Transaction>> {
        self.storage.transactions.list()
    }
}
