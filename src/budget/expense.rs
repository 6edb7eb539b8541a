use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single logged expense from the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(amount: f64, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            category: category.into(),
            date,
        }
    }
}
