//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod backup;
pub mod budget;
pub mod report;
pub mod settings;
pub mod transaction;

pub use backup::{handle_backup_command, BackupCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{handle_report_command, ReportCommands};
pub use settings::{handle_settings_command, SettingsCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::error::{WalletError, WalletResult};
use crate::models::{Money, Period};

/// Parse an amount argument
pub(crate) fn parse_amount(s: &str) -> WalletResult<Money> {
    Money::parse(s).map_err(|e| WalletError::Validation(e.to_string()))
}

/// Parse a period argument, defaulting to the current period
pub(crate) fn parse_period_or_current(period: Option<&str>) -> WalletResult<Period> {
    match period {
        Some(s) => Period::parse(s).map_err(|e| WalletError::Validation(e.to_string())),
        None => Ok(Period::current()),
    }
}

/// Parse a date argument (YYYY-MM-DD), defaulting to today
pub(crate) fn parse_date_or_today(date: Option<&str>) -> WalletResult<chrono::NaiveDate> {
    match date {
        Some(s) => chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| WalletError::Validation(format!("Invalid date '{}': expected YYYY-MM-DD", s))),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("10.50").unwrap().cents(), 1050);
        assert!(matches!(
            parse_amount("ten"),
            Err(WalletError::Validation(_))
        ));
    }

    #[test]
    fn test_parse_period_or_current() {
        let parsed = parse_period_or_current(Some("2025-03")).unwrap();
        assert_eq!(parsed, Period::new(2025, 3).unwrap());

        let current = parse_period_or_current(None).unwrap();
        assert_eq!(current, Period::current());

        assert!(parse_period_or_current(Some("2025-13")).is_err());
    }

    #[test]
    fn test_parse_date_or_today() {
        let parsed = parse_date_or_today(Some("2025-01-15")).unwrap();
        assert_eq!(parsed, chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());

        assert!(parse_date_or_today(Some("15/01/2025")).is_err());
        assert!(parse_date_or_today(None).is_ok());
    }
}
