//! Core data models for wallet-cli

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::{Budget, BudgetProgress};
pub use category::Category;
pub use ids::{BudgetId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use period::{Period, PeriodParseError};
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
