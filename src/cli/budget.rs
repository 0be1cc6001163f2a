//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_amount, format_progress, progress_alerts, CurrencyDisplay};
use crate::error::WalletResult;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::{parse_amount, parse_period_or_current};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the budget for a period, replacing any existing one
    Set {
        /// Budget amount (e.g. "1000" or "1000.00")
        amount: String,
        /// Budget period (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Show budget progress for a period
    Status {
        /// Budget period (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> WalletResult<()> {
    let service = BudgetService::new(storage);
    let currency = CurrencyDisplay::from_settings(settings);

    match cmd {
        BudgetCommands::Set { amount, period } => {
            let amount = parse_amount(&amount)?;
            let period = parse_period_or_current(period.as_deref())?;

            let budget = service.set_budget(amount, period)?;
            println!(
                "Budget for {} set to {}",
                budget.period,
                format_amount(budget.amount, &currency)
            );
        }

        BudgetCommands::Status { period } => {
            let period = parse_period_or_current(period.as_deref())?;
            let progress = service.progress_for(period)?;

            print!("{}", format_progress(&progress, &currency));

            if settings.budget_alerts_enabled {
                for alert in progress_alerts(&progress) {
                    println!("{}", alert);
                }
            }
        }
    }

    Ok(())
}
