//! Budget service
//!
//! Derives budget progress, remaining budget, and per-category spending
//! breakdowns from the two stores. Every call reads fresh snapshots; nothing
//! is cached, so a saved budget is visible to the very next read.
//!
//! A store failure propagates as an error. "No budget set" is a valid state
//! (`budget: None`, zero progress), never a substitute for a failed read.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::error::{WalletError, WalletResult};
use crate::models::{Budget, BudgetProgress, Category, Money, Period};
use crate::storage::Storage;

/// Service for budget management and progress reporting
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Save the budget for a period, replacing any existing one
    ///
    /// Rejects non-positive amounts before touching the store.
    pub fn set_budget(&self, amount: Money, period: Period) -> WalletResult<Budget> {
        if !amount.is_positive() {
            return Err(WalletError::Validation(format!(
                "Budget amount must be greater than zero, got {}",
                amount
            )));
        }

        let budget = Budget::new(amount, period);
        self.storage.budgets.upsert(budget.clone())?;
        self.storage.budgets.save()?;

        info!(%period, amount = amount.cents(), "budget saved");
        Ok(budget)
    }

    /// The budget for a period, if one is set
    pub fn budget_for(&self, period: Period) -> WalletResult<Option<Budget>> {
        self.storage.budgets.get(period)
    }

    /// Sum of expense amounts dated within the period
    pub fn spending_for(&self, period: Period) -> WalletResult<Money> {
        let transactions = self.storage.transactions.list()?;

        Ok(transactions
            .iter()
            .filter(|t| t.is_expense() && period.contains(t.date))
            .map(|t| t.amount)
            .sum())
    }

    /// Derive the progress snapshot for a period
    pub fn progress_for(&self, period: Period) -> WalletResult<BudgetProgress> {
        let budget = self.storage.budgets.get(period)?;
        let spending = self.spending_for(period)?;

        let progress = BudgetProgress::compute(budget, spending);
        debug!(
            %period,
            spending = spending.cents(),
            progress = progress.progress,
            "computed budget progress"
        );
        Ok(progress)
    }

    /// Progress for the current period
    pub fn current_progress(&self) -> WalletResult<BudgetProgress> {
        self.progress_for(Period::current())
    }

    /// Per-category expense totals for a period
    ///
    /// Every category with at least one expense in the period appears exactly
    /// once; sums are exact integer-cent arithmetic.
    pub fn spending_by_category(&self, period: Period) -> WalletResult<BTreeMap<Category, Money>> {
        let transactions = self.storage.transactions.list()?;

        let mut breakdown: BTreeMap<Category, Money> = BTreeMap::new();
        for txn in transactions
            .iter()
            .filter(|t| t.is_expense() && period.contains(t.date))
        {
            *breakdown.entry(txn.category).or_insert_with(Money::zero) += txn.amount;
        }

        Ok(breakdown)
    }

    /// The amount left before the period's budget is used up, floored at zero
    ///
    /// Zero when no budget is set for the period.
    pub fn remaining_budget(&self, period: Period) -> WalletResult<Money> {
        Ok(self.progress_for(period)?.remaining())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::WalletPaths;
    use crate::models::{Transaction, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn jan() -> Period {
        Period::new(2025, 1).unwrap()
    }

    fn add_txn(
        storage: &Storage,
        title: &str,
        cents: i64,
        category: Category,
        kind: TransactionKind,
        date: NaiveDate,
    ) {
        let txn = Transaction::new(title, Money::from_cents(cents), category, kind, date);
        storage.transactions.add(txn).unwrap();
    }

    fn jan_date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn test_set_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let budget = service.set_budget(Money::from_cents(100_000), jan()).unwrap();
        assert_eq!(budget.amount.cents(), 100_000);
        assert_eq!(budget.period, jan());

        // The saved budget is immediately visible
        let stored = service.budget_for(jan()).unwrap().unwrap();
        assert_eq!(stored.id, budget.id);
    }

    #[test]
    fn test_set_budget_rejects_non_positive() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        assert!(matches!(
            service.set_budget(Money::zero(), jan()),
            Err(WalletError::Validation(_))
        ));
        assert!(matches!(
            service.set_budget(Money::from_cents(-100), jan()),
            Err(WalletError::Validation(_))
        ));
        // Nothing reached the store
        assert!(service.budget_for(jan()).unwrap().is_none());
    }

    #[test]
    fn test_set_budget_replaces_per_period() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set_budget(Money::from_cents(100_000), jan()).unwrap();
        service.set_budget(Money::from_cents(120_000), jan()).unwrap();

        assert_eq!(storage.budgets.count().unwrap(), 1);
        assert_eq!(
            service.budget_for(jan()).unwrap().unwrap().amount.cents(),
            120_000
        );
    }

    #[test]
    fn test_set_budget_idempotent_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set_budget(Money::from_cents(100_000), jan()).unwrap();
        service.set_budget(Money::from_cents(100_000), jan()).unwrap();

        assert_eq!(storage.budgets.count().unwrap(), 1);
        assert_eq!(
            service.budget_for(jan()).unwrap().unwrap().amount.cents(),
            100_000
        );
    }

    #[test]
    fn test_spending_counts_only_period_expenses() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        add_txn(&storage, "Lunch", 1000, Category::Food, TransactionKind::Expense, jan_date(10));
        add_txn(&storage, "Salary", 500_000, Category::Salary, TransactionKind::Income, jan_date(1));
        // Different period
        add_txn(
            &storage,
            "Feb lunch",
            2000,
            Category::Food,
            TransactionKind::Expense,
            NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
        );

        assert_eq!(service.spending_for(jan()).unwrap().cents(), 1000);
    }

    #[test]
    fn test_progress_scenario_under_budget() {
        // budget = 1000, expenses 200 Food + 150 Transport, income 5000
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set_budget(Money::from_units(1000), jan()).unwrap();
        add_txn(&storage, "Food run", 20_000, Category::Food, TransactionKind::Expense, jan_date(5));
        add_txn(&storage, "Metro card", 15_000, Category::Transport, TransactionKind::Expense, jan_date(8));
        add_txn(&storage, "Salary", 500_000, Category::Salary, TransactionKind::Income, jan_date(1));

        let progress = service.progress_for(jan()).unwrap();
        assert_eq!(progress.spending.cents(), 35_000);
        assert!((progress.progress - 0.35).abs() < 1e-12);
        assert!(!progress.is_warning);
        assert!(!progress.is_exceeded);

        let breakdown = service.spending_by_category(jan()).unwrap();
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[&Category::Food].cents(), 20_000);
        assert_eq!(breakdown[&Category::Transport].cents(), 15_000);
    }

    #[test]
    fn test_progress_scenario_no_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        add_txn(&storage, "Lunch", 5_000, Category::Food, TransactionKind::Expense, jan_date(10));

        let progress = service.progress_for(jan()).unwrap();
        assert!(progress.budget.is_none());
        assert_eq!(progress.spending.cents(), 5_000);
        assert_eq!(progress.progress, 0.0);
        assert!(!progress.is_warning);
        assert!(!progress.is_exceeded);
    }

    #[test]
    fn test_progress_scenario_warning() {
        // budget = 100, expense 90 => progress 0.9, warning only
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set_budget(Money::from_units(100), jan()).unwrap();
        add_txn(&storage, "Concert", 9_000, Category::Entertainment, TransactionKind::Expense, jan_date(12));

        let progress = service.progress_for(jan()).unwrap();
        assert!((progress.progress - 0.9).abs() < 1e-12);
        assert!(progress.is_warning);
        assert!(!progress.is_exceeded);
    }

    #[test]
    fn test_progress_boundary_spending_equals_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set_budget(Money::from_units(100), jan()).unwrap();
        add_txn(&storage, "Rent share", 10_000, Category::Housing, TransactionKind::Expense, jan_date(1));

        let progress = service.progress_for(jan()).unwrap();
        assert_eq!(progress.progress, 1.0);
        assert!(progress.is_warning);
        assert!(progress.is_exceeded);
    }

    #[test]
    fn test_progress_clamped_when_over() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set_budget(Money::from_units(100), jan()).unwrap();
        add_txn(&storage, "Splurge", 25_000, Category::Shopping, TransactionKind::Expense, jan_date(20));

        let progress = service.progress_for(jan()).unwrap();
        assert_eq!(progress.progress, 1.0);
        assert!(progress.is_exceeded);
        assert!(service.remaining_budget(jan()).unwrap().is_zero());
    }

    #[test]
    fn test_breakdown_totals_match_spending() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        add_txn(&storage, "Food A", 1_234, Category::Food, TransactionKind::Expense, jan_date(3));
        add_txn(&storage, "Food B", 4_321, Category::Food, TransactionKind::Expense, jan_date(9));
        add_txn(&storage, "Bus", 275, Category::Transport, TransactionKind::Expense, jan_date(9));
        add_txn(&storage, "Gift", 10_000, Category::Other, TransactionKind::Expense, jan_date(18));
        add_txn(&storage, "Salary", 300_000, Category::Salary, TransactionKind::Income, jan_date(1));

        let breakdown = service.spending_by_category(jan()).unwrap();
        let breakdown_total: Money = breakdown.values().copied().sum();
        assert_eq!(breakdown_total, service.spending_for(jan()).unwrap());

        // Same-category amounts are folded into one entry
        assert_eq!(breakdown[&Category::Food].cents(), 5_555);
    }

    #[test]
    fn test_breakdown_empty_period() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        assert!(service.spending_by_category(jan()).unwrap().is_empty());
        assert!(service.spending_for(jan()).unwrap().is_zero());
    }

    #[test]
    fn test_remaining_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        // No budget: remaining is zero
        assert!(service.remaining_budget(jan()).unwrap().is_zero());

        service.set_budget(Money::from_units(1000), jan()).unwrap();
        add_txn(&storage, "Food run", 35_000, Category::Food, TransactionKind::Expense, jan_date(5));

        assert_eq!(service.remaining_budget(jan()).unwrap().cents(), 65_000);
    }

    #[test]
    fn test_current_progress_uses_todays_period() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let today = chrono::Local::now().date_naive();
        service.set_budget(Money::from_units(100), Period::current()).unwrap();
        add_txn(&storage, "Lunch", 2_500, Category::Food, TransactionKind::Expense, today);

        let progress = service.current_progress().unwrap();
        assert!(progress.budget.is_some());
        assert_eq!(progress.spending.cents(), 2_500);
        assert!((progress.progress - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_saved_budget_visible_to_next_progress_call() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        add_txn(&storage, "Lunch", 40_000, Category::Food, TransactionKind::Expense, jan_date(4));

        service.set_budget(Money::from_units(500), jan()).unwrap();
        let progress = service.progress_for(jan()).unwrap();
        assert_eq!(
            progress.budget.as_ref().unwrap().amount,
            Money::from_units(500)
        );
        assert!((progress.progress - 0.8).abs() < 1e-12);
        assert!(progress.is_warning);

        // Replacing the budget changes the very next snapshot
        service.set_budget(Money::from_units(1000), jan()).unwrap();
        let progress = service.progress_for(jan()).unwrap();
        assert!((progress.progress - 0.4).abs() < 1e-12);
        assert!(!progress.is_warning);
    }
}
