//! Budget model and derived progress report
//!
//! A budget is a spending ceiling for one period. `BudgetProgress` is derived
//! on demand from the current budget and the period's expense total; it is
//! never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::BudgetId;
use super::money::Money;
use super::period::Period;

/// A monthly spending ceiling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// The spending ceiling for the period
    pub amount: Money,

    /// The (month, year) this budget applies to
    pub period: Period,

    /// When the budget was saved
    pub created_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget for a period
    pub fn new(amount: Money, period: Period) -> Self {
        Self {
            id: BudgetId::new(),
            amount,
            period,
            created_at: Utc::now(),
        }
    }
}

/// Derived snapshot of budget consumption for one period
#[derive(Debug, Clone)]
pub struct BudgetProgress {
    /// The period's budget, if one is set
    pub budget: Option<Budget>,

    /// Sum of expense amounts within the period
    pub spending: Money,

    /// Fraction of the budget consumed, clamped to [0, 1]
    pub progress: f64,

    /// Whether spending has reached the warning threshold
    pub is_warning: bool,

    /// Whether spending has reached or passed the budget
    pub is_exceeded: bool,
}

impl BudgetProgress {
    /// Fraction of the budget at which a warning is raised
    pub const WARNING_THRESHOLD: f64 = 0.8;

    /// Derive a progress snapshot from a budget and the period's spending
    ///
    /// With no budget, progress is 0 and no flags are raised. A budget whose
    /// amount is not positive cannot be divided by; it counts as fully
    /// consumed, which keeps progress inside [0, 1] and matches
    /// `spending >= amount` being true for any non-negative spending.
    pub fn compute(budget: Option<Budget>, spending: Money) -> Self {
        let progress = match &budget {
            Some(b) if b.amount.is_positive() => {
                (spending.cents() as f64 / b.amount.cents() as f64).clamp(0.0, 1.0)
            }
            Some(_) => 1.0,
            None => 0.0,
        };

        Self {
            budget,
            spending,
            progress,
            is_warning: progress >= Self::WARNING_THRESHOLD,
            is_exceeded: progress >= 1.0,
        }
    }

    /// The amount left before the budget is used up, floored at zero
    pub fn remaining(&self) -> Money {
        match &self.budget {
            Some(b) if b.amount > self.spending => b.amount - self.spending,
            _ => Money::zero(),
        }
    }
}
