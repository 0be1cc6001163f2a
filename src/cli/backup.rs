//! Backup CLI commands

use clap::Subcommand;

use crate::backup::BackupManager;
use crate::error::{WalletError, WalletResult};
use crate::storage::Storage;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Export all data to a dated backup file
    Export,

    /// Restore all data from a backup file, replacing current data
    Import {
        /// Path to the backup file
        file: String,
    },

    /// List available backups
    List,

    /// Delete all transactions and budgets
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        force: bool,
    },
}

/// Handle a backup command
pub fn handle_backup_command(storage: &Storage, cmd: BackupCommands) -> WalletResult<()> {
    let manager = BackupManager::new(storage);

    match cmd {
        BackupCommands::Export => {
            let path = manager.export()?;
            println!("Backup written to {}", path.display());
        }

        BackupCommands::Import { file } => {
            let (txns, budgets) = manager.import(&file)?;
            println!("Restored {} transactions and {} budgets", txns, budgets);
        }

        BackupCommands::List => {
            let backups = manager.list_backups()?;
            if backups.is_empty() {
                println!("No backups found.");
                return Ok(());
            }

            for info in backups {
                println!(
                    "{}  {}  {} bytes",
                    info.created_at.format("%Y-%m-%d %H:%M:%S"),
                    info.filename,
                    info.size_bytes
                );
            }
        }

        BackupCommands::Clear { force } => {
            if !force {
                return Err(WalletError::Validation(
                    "This deletes all data; re-run with --force to confirm".into(),
                ));
            }
            let (txns, budgets) = manager.clear_all_data()?;
            println!("Deleted {} transactions and {} budgets", txns, budgets);
        }
    }

    Ok(())
}
