//! Transaction categories
//!
//! A closed tag set with an `Other` fallback. Parsing is total: any label the
//! set does not recognize maps to `Other`, so user input and imported data
//! never fail on a category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category tag for a transaction
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Housing,
    Utilities,
    Entertainment,
    Health,
    Shopping,
    Salary,
    #[default]
    Other,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 9] = [
        Category::Food,
        Category::Transport,
        Category::Housing,
        Category::Utilities,
        Category::Entertainment,
        Category::Health,
        Category::Shopping,
        Category::Salary,
        Category::Other,
    ];

    /// The display label for this category
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Housing => "Housing",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Shopping => "Shopping",
            Category::Salary => "Salary",
            Category::Other => "Other",
        }
    }

    /// Parse a label, falling back to `Other` for anything unrecognized
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "food" | "groceries" => Category::Food,
            "transport" | "transportation" => Category::Transport,
            "housing" | "rent" => Category::Housing,
            "utilities" => Category::Utilities,
            "entertainment" => Category::Entertainment,
            "health" | "medical" => Category::Health,
            "shopping" => Category::Shopping,
            "salary" | "income" => Category::Salary,
            _ => Category::Other,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::parse(s))
    }
}
