//! Report CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_amount, format_transaction_register, CurrencyDisplay};
use crate::error::WalletResult;
use crate::models::Money;
use crate::services::{BudgetService, DashboardService, DEFAULT_RECENT_LIMIT};
use crate::storage::Storage;

use super::parse_period_or_current;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Overall income, expenses, balance and recent activity
    Summary,

    /// Per-category expense totals for a period
    Categories {
        /// Period (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> WalletResult<()> {
    let currency = CurrencyDisplay::from_settings(settings);

    match cmd {
        ReportCommands::Summary => {
            let service = DashboardService::new(storage);

            println!("Summary");
            println!("{}", "=".repeat(40));
            println!(
                "  Income:   {}",
                format_amount(service.total_income()?, &currency)
            );
            println!(
                "  Expenses: {}",
                format_amount(service.total_expenses()?, &currency)
            );
            println!(
                "  Balance:  {}",
                format_amount(service.balance()?, &currency)
            );

            let recent = service.recent_transactions(DEFAULT_RECENT_LIMIT)?;
            if !recent.is_empty() {
                println!();
                println!("Recent transactions");
                print!("{}", format_transaction_register(&recent, &currency));
            }
        }

        ReportCommands::Categories { period } => {
            let period = parse_period_or_current(period.as_deref())?;
            let service = BudgetService::new(storage);
            let breakdown = service.spending_by_category(period)?;

            println!("Spending by category: {}", period);
            println!("{}", "=".repeat(40));

            if breakdown.is_empty() {
                println!("No expenses recorded for this period.");
                return Ok(());
            }

            let total: Money = breakdown.values().copied().sum();
            let mut rows: Vec<_> = breakdown.into_iter().collect();
            rows.sort_by(|a, b| b.1.cmp(&a.1));

            for (category, amount) in rows {
                let share = amount.cents() as f64 / total.cents() as f64 * 100.0;
                println!(
                    "  {:14} {:>12}  {:>5.1}%",
                    category.as_str(),
                    format_amount(amount, &currency),
                    share
                );
            }
            println!("{}", "-".repeat(40));
            println!("  {:14} {:>12}", "Total", format_amount(total, &currency));
        }
    }

    Ok(())
}
