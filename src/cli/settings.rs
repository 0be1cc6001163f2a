//! Settings CLI commands

use clap::Subcommand;

use crate::config::{Settings, WalletPaths};
use crate::error::WalletResult;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings
    Show,

    /// Set the display currency
    SetCurrency {
        /// Currency code, e.g. "EUR"
        code: String,
        /// Currency symbol, e.g. "€"
        symbol: String,
    },

    /// Enable or disable budget alerts in status output
    SetAlerts {
        /// "on" or "off"
        value: String,
    },
}

/// Handle a settings command
pub fn handle_settings_command(
    paths: &WalletPaths,
    settings: &mut Settings,
    cmd: SettingsCommands,
) -> WalletResult<()> {
    match cmd {
        SettingsCommands::Show => {
            println!("Settings");
            println!("{}", "=".repeat(40));
            println!("  Currency:      {} ({})", settings.currency_code, settings.currency_symbol);
            println!("  Date format:   {}", settings.date_format);
            println!(
                "  Budget alerts: {}",
                if settings.budget_alerts_enabled { "on" } else { "off" }
            );
        }

        SettingsCommands::SetCurrency { code, symbol } => {
            settings.set_currency(code, symbol);
            settings.save(paths)?;
            println!(
                "Display currency set to {} ({})",
                settings.currency_code, settings.currency_symbol
            );
        }

        SettingsCommands::SetAlerts { value } => {
            settings.budget_alerts_enabled = matches!(value.as_str(), "on" | "true" | "yes");
            settings.save(paths)?;
            println!(
                "Budget alerts {}",
                if settings.budget_alerts_enabled { "on" } else { "off" }
            );
        }
    }

    Ok(())
}
