//! Transaction CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_signed_amount, format_transaction_register, CurrencyDisplay};
use crate::error::{WalletError, WalletResult};
use crate::models::{Category, Transaction, TransactionId, TransactionKind};
use crate::services::TransactionService;
use crate::storage::Storage;

use super::{parse_amount, parse_date_or_today, parse_period_or_current};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Short label, e.g. "Groceries"
        title: String,
        /// Amount (e.g. "42" or "42.50")
        amount: String,
        /// Category label (unknown labels fall back to "other")
        #[arg(short, long, default_value = "other")]
        category: String,
        /// Kind: "income" or "expense"
        #[arg(short, long, default_value = "expense")]
        kind: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Optional note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List transactions, most recent first
    List {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Restrict to a period (YYYY-MM)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Edit an existing transaction
    Edit {
        /// Transaction id
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New amount
        #[arg(long)]
        amount: Option<String>,
        /// New category
        #[arg(long)]
        category: Option<String>,
        /// New kind: "income" or "expense"
        #[arg(long)]
        kind: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// New note
        #[arg(long)]
        note: Option<String>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction id
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> WalletResult<()> {
    let service = TransactionService::new(storage);
    let currency = CurrencyDisplay::from_settings(settings);

    match cmd {
        TransactionCommands::Add {
            title,
            amount,
            category,
            kind,
            date,
            note,
        } => {
            let amount = parse_amount(&amount)?;
            let kind: TransactionKind = kind.parse().map_err(WalletError::Validation)?;
            let date = parse_date_or_today(date.as_deref())?;

            let mut txn = Transaction::new(title, amount, Category::parse(&category), kind, date);
            if let Some(note) = note {
                txn = txn.with_note(note);
            }

            let txn = service.add(txn)?;
            println!(
                "Added {} {} ({}) on {}",
                txn.id,
                format_signed_amount(&txn, &currency),
                txn.category,
                txn.date.format("%Y-%m-%d")
            );
        }

        TransactionCommands::List { limit, period } => {
            let mut transactions = service.list()?;

            if let Some(period) = period {
                let period = parse_period_or_current(Some(period.as_str()))?;
                transactions.retain(|t| period.contains(t.date));
            }
            transactions.truncate(limit);

            print!("{}", format_transaction_register(&transactions, &currency));
        }

        TransactionCommands::Edit {
            id,
            title,
            amount,
            category,
            kind,
            date,
            note,
        } => {
            let id = resolve_transaction_id(&service, &id)?;
            let mut txn = service
                .get(id)?
                .ok_or_else(|| WalletError::transaction_not_found(id.to_string()))?;

            if let Some(title) = title {
                txn.title = title;
            }
            if let Some(amount) = amount {
                txn.amount = parse_amount(&amount)?;
            }
            if let Some(category) = category {
                txn.category = Category::parse(&category);
            }
            if let Some(kind) = kind {
                txn.kind = kind.parse().map_err(WalletError::Validation)?;
            }
            if let Some(date) = date {
                txn.date = parse_date_or_today(Some(date.as_str()))?;
            }
            if let Some(note) = note {
                txn.note = note;
            }

            let txn = service.update(txn)?;
            println!("Updated {}", txn.id);
        }

        TransactionCommands::Delete { id } => {
            let id = resolve_transaction_id(&service, &id)?;
            service.delete(id)?;
            println!("Deleted {}", id);
        }
    }

    Ok(())
}

/// Resolve an id argument: a full UUID, or the short "txn-xxxxxxxx" form the
/// register prints
fn resolve_transaction_id(service: &TransactionService, s: &str) -> WalletResult<TransactionId> {
    if let Ok(id) = s.parse::<TransactionId>() {
        return Ok(id);
    }

    let prefix = s.strip_prefix("txn-").unwrap_or(s);
    let matches: Vec<TransactionId> = service
        .list()?
        .iter()
        .map(|t| t.id)
        .filter(|id| id.as_uuid().to_string().starts_with(prefix))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(WalletError::transaction_not_found(s)),
        _ => Err(WalletError::Validation(format!(
            "Ambiguous transaction id prefix: {}",
            s
        ))),
    }
}
