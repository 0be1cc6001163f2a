//! Business logic layer
//!
//! Services borrow `Storage` and hold no state of their own, so they are
//! reentrant: every call reads fresh snapshots from the stores.

pub mod budget;
pub mod dashboard;
pub mod transaction;

pub use budget::BudgetService;
pub use dashboard::{DashboardService, DEFAULT_RECENT_LIMIT};
pub use transaction::TransactionService;
