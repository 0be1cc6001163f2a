//! Terminal display formatting
//!
//! Formats amounts, transactions, and budget status for terminal output. The
//! display currency is an explicit value built from settings and passed into
//! every call; nothing here reads global state.

use crate::config::Settings;
use crate::models::{BudgetProgress, Money, Transaction, TransactionKind};

/// Display currency derived from settings
#[derive(Debug, Clone)]
pub struct CurrencyDisplay {
    pub code: String,
    pub symbol: String,
}

impl CurrencyDisplay {
    /// Build the display currency from user settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            code: settings.currency_code.clone(),
            symbol: settings.currency_symbol.clone(),
        }
    }
}

impl Default for CurrencyDisplay {
    fn default() -> Self {
        Self {
            code: "USD".to_string(),
            symbol: "$".to_string(),
        }
    }
}

/// Format an amount with the currency symbol and thousands grouping
///
/// `Money::from_cents(123_456_789)` formats as "$1,234,567.89".
pub fn format_amount(amount: Money, currency: &CurrencyDisplay) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!(
        "{}{}{}.{:02}",
        sign,
        currency.symbol,
        group_thousands(amount.units().abs()),
        amount.cents_part()
    )
}

/// Format an amount with an explicit +/- prefix based on the kind
pub fn format_signed_amount(txn: &Transaction, currency: &CurrencyDisplay) -> String {
    let prefix = match txn.kind {
        TransactionKind::Income => "+",
        TransactionKind::Expense => "-",
    };
    format!("{}{}", prefix, format_amount(txn.amount, currency))
}

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, currency: &CurrencyDisplay) -> String {
    format!(
        "{} {:12} {:24} {:14} {:>12}",
        txn.id,
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.title, 24),
        txn.category.as_str(),
        format_signed_amount(txn, currency)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(
    transactions: &[Transaction],
    currency: &CurrencyDisplay,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:12} {:24} {:14} {:>12}\n",
        "Id", "Date", "Title", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(78));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, currency));
        output.push('\n');
    }

    output
}

/// Format a budget progress snapshot for the status view
pub fn format_progress(progress: &BudgetProgress, currency: &CurrencyDisplay) -> String {
    let mut output = String::new();

    match &progress.budget {
        Some(budget) => {
            output.push_str(&format!("Budget for {}\n", budget.period));
            output.push_str(&format!(
                "  Budget:    {}\n",
                format_amount(budget.amount, currency)
            ));
            output.push_str(&format!(
                "  Spent:     {}\n",
                format_amount(progress.spending, currency)
            ));
            output.push_str(&format!(
                "  Remaining: {}\n",
                format_amount(progress.remaining(), currency)
            ));
            output.push_str(&format!(
                "  Used:      {:.0}%  {}\n",
                progress.progress * 100.0,
                progress_bar(progress.progress, 20)
            ));
        }
        None => {
            output.push_str("No budget set for this period.\n");
            output.push_str(&format!(
                "  Spent so far: {}\n",
                format_amount(progress.spending, currency)
            ));
        }
    }

    output
}

/// Warning lines for a progress snapshot, if any apply
pub fn progress_alerts(progress: &BudgetProgress) -> Vec<String> {
    let mut alerts = Vec::new();
    if progress.is_exceeded {
        alerts.push("Budget exceeded!".to_string());
    } else if progress.is_warning {
        alerts.push(format!(
            "Warning: {:.0}% of budget used",
            progress.progress * 100.0
        ));
    }
    alerts
}

/// Render a fixed-width text progress bar
fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Group a non-negative integer with comma separators every three digits
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// Truncate a string to a maximum width, appending an ellipsis when cut
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
