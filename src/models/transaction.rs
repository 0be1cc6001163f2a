//! Transaction model
//!
//! Represents a single income or expense record. Amounts are positive
//! magnitudes; the kind determines the sign when computing balances.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// Whether a transaction adds to or draws from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!(
                "Invalid kind '{}': expected 'income' or 'expense'",
                other
            )),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Short label, e.g. "Groceries at the corner shop"
    pub title: String,

    /// Positive magnitude of the transaction
    pub amount: Money,

    /// Spending/income category
    pub category: Category,

    /// Income or expense
    pub kind: TransactionKind,

    /// Calendar date the transaction is attributed to
    pub date: NaiveDate,

    /// Optional free-form note
    #[serde(default)]
    pub note: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        category: Category,
        kind: TransactionKind,
        date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            title: title.into(),
            amount,
            category,
            kind,
            date,
            note: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create an income transaction
    pub fn income(
        title: impl Into<String>,
        amount: Money,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self::new(title, amount, category, TransactionKind::Income, date)
    }

    /// Create an expense transaction
    pub fn expense(
        title: impl Into<String>,
        amount: Money,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self::new(title, amount, category, TransactionKind::Expense, date)
    }

    /// Attach a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The amount with the sign implied by the kind (income +, expense -)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// Bump the modification timestamp after an edit
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.title.trim().is_empty() {
            return Err(TransactionValidationError::EmptyTitle);
        }
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.title,
            self.signed_amount()
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyTitle,
    NonPositiveAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Title cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero, got {}", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::expense("Groceries", Money::from_cents(5000), Category::Food, test_date());
        assert_eq!(txn.title, "Groceries");
        assert_eq!(txn.amount, Money::from_cents(5000));
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert!(txn.note.is_empty());
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_income_expense_checks() {
        let income = Transaction::income("Salary", Money::from_cents(500_000), Category::Salary, test_date());
        assert!(income.is_income());
        assert!(!income.is_expense());

        let expense = Transaction::expense("Bus", Money::from_cents(250), Category::Transport, test_date());
        assert!(expense.is_expense());
        assert!(!expense.is_income());
    }

    #[test]
    fn test_signed_amount() {
        let income = Transaction::income("Salary", Money::from_cents(1000), Category::Salary, test_date());
        assert_eq!(income.signed_amount().cents(), 1000);

        let expense = Transaction::expense("Lunch", Money::from_cents(1000), Category::Food, test_date());
        assert_eq!(expense.signed_amount().cents(), -1000);
    }

    #[test]
    fn test_validate_empty_title() {
        let txn = Transaction::expense("   ", Money::from_cents(100), Category::Other, test_date());
        assert_eq!(txn.validate(), Err(TransactionValidationError::EmptyTitle));
    }

    #[test]
    fn test_validate_non_positive_amount() {
        let txn = Transaction::expense("Lunch", Money::zero(), Category::Food, test_date());
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::NonPositiveAmount(_))
        ));

        let txn = Transaction::expense("Lunch", Money::from_cents(-100), Category::Food, test_date());
        assert!(txn.validate().is_err());
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!("Expense".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_with_note() {
        let txn = Transaction::expense("Lunch", Money::from_cents(900), Category::Food, test_date())
            .with_note("team offsite");
        assert_eq!(txn.note, "team offsite");
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::expense("Groceries", Money::from_cents(5000), Category::Food, test_date())
            .with_note("weekly run");

        let json = serde_json::to_string(&txn).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn.id, deserialized.id);
        assert_eq!(txn.amount, deserialized.amount);
        assert_eq!(txn.category, deserialized.category);
        assert_eq!(txn.kind, deserialized.kind);
        assert_eq!(txn.note, deserialized.note);
    }

    #[test]
    fn test_display() {
        let txn = Transaction::expense("Groceries", Money::from_cents(5000), Category::Food, test_date());
        assert_eq!(format!("{}", txn), "2025-01-15 Groceries -50.00");
    }
}
