//! Backup manager for wallet-cli
//!
//! Exports both stores into a single dated JSON archive and restores from
//! one. Import is all-or-nothing: the archive is parsed and validated before
//! either store is touched.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{WalletError, WalletResult};
use crate::models::{Budget, Transaction};
use crate::storage::Storage;

const BACKUP_PREFIX: &str = "wallet-backup-";
const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Backup archive format
#[derive(Debug, Serialize, Deserialize)]
pub struct BackupArchive {
    /// Schema version for migration support
    pub schema_version: u32,
    /// When the backup was created
    pub exported_at: DateTime<Utc>,
    /// All transactions
    pub transactions: Vec<Transaction>,
    /// All budgets
    pub budgets: Vec<Budget>,
}

/// Metadata about a backup file
#[derive(Debug, Clone)]
pub struct BackupInfo {
    /// Backup filename
    pub filename: String,
    /// Full path to backup
    pub path: PathBuf,
    /// When the backup was created (from the filename)
    pub created_at: DateTime<Utc>,
    /// Size in bytes
    pub size_bytes: u64,
}

/// Manages backup creation and restore
pub struct BackupManager<'a> {
    storage: &'a Storage,
    backup_dir: PathBuf,
}

impl<'a> BackupManager<'a> {
    /// Create a new BackupManager
    pub fn new(storage: &'a Storage) -> Self {
        let backup_dir = storage.paths().backup_dir();
        Self {
            storage,
            backup_dir,
        }
    }

    /// Export both stores into a dated archive
    ///
    /// Returns the path to the created backup file.
    pub fn export(&self) -> WalletResult<PathBuf> {
        fs::create_dir_all(&self.backup_dir)
            .map_err(|e| WalletError::Io(format!("Failed to create backup directory: {}", e)))?;

        let now = Utc::now();
        let archive = BackupArchive {
            schema_version: 1,
            exported_at: now,
            transactions: self.storage.transactions.list()?,
            budgets: self.storage.budgets.list()?,
        };

        let filename = format!("{}{}.json", BACKUP_PREFIX, now.format(TIMESTAMP_FORMAT));
        let backup_path = self.backup_dir.join(&filename);

        let json = serde_json::to_string_pretty(&archive)
            .map_err(|e| WalletError::Backup(format!("Failed to serialize backup: {}", e)))?;

        fs::write(&backup_path, json)
            .map_err(|e| WalletError::Io(format!("Failed to write backup file: {}", e)))?;

        info!(
            path = %backup_path.display(),
            transactions = archive.transactions.len(),
            budgets = archive.budgets.len(),
            "backup exported"
        );
        Ok(backup_path)
    }

    /// Restore both stores from an archive, replacing all current data
    ///
    /// Returns the number of (transactions, budgets) restored.
    pub fn import<P: AsRef<Path>>(&self, path: P) -> WalletResult<(usize, usize)> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            WalletError::Backup(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let archive: BackupArchive = serde_json::from_str(&contents).map_err(|e| {
            WalletError::Backup(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        for txn in &archive.transactions {
            txn.validate().map_err(|e| {
                WalletError::Backup(format!("Invalid transaction in archive: {}", e))
            })?;
        }

        let txn_count = archive.transactions.len();
        let budget_count = archive.budgets.len();

        self.storage.transactions.replace_all(archive.transactions)?;
        self.storage.budgets.replace_all(archive.budgets)?;
        self.storage.save_all()?;

        info!(
            path = %path.display(),
            transactions = txn_count,
            budgets = budget_count,
            "backup imported"
        );
        Ok((txn_count, budget_count))
    }

    /// List all available backups, newest first
    pub fn list_backups(&self) -> WalletResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir)
            .map_err(|e| WalletError::Io(format!("Failed to read backup directory: {}", e)))?
        {
            let entry = entry
                .map_err(|e| WalletError::Io(format!("Failed to read directory entry: {}", e)))?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(info) = parse_backup_info(&path) {
                    backups.push(info);
                }
            }
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(backups)
    }

    /// Delete all transactions and budgets
    pub fn clear_all_data(&self) -> WalletResult<(usize, usize)> {
        let txn_count = self.storage.transactions.clear()?;
        let budget_count = self.storage.budgets.clear()?;
        self.storage.save_all()?;

        info!(transactions = txn_count, budgets = budget_count, "all data cleared");
        Ok((txn_count, budget_count))
    }
}

/// Parse backup info from a backup file path
fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();

    let stamp = filename
        .strip_prefix(BACKUP_PREFIX)?
        .strip_suffix(".json")?;
    let created_at = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
        .ok()?
        .and_utc();

    let metadata = fs::metadata(path).ok()?;

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        created_at,
        size_bytes: metadata.len(),
    })
}
