use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Expense;

/// A point-in-time snapshot of a student's budget.
///
/// Field names follow the camelCase snapshot JSON written by the companion
/// front end. The top-level totals and the per-category table are supplied
/// independently and are never reconciled against each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRecord {
    pub total_budget: f64,
    pub total_spent: f64,
    pub categories: BTreeMap<String, CategoryBudget>,
    #[serde(default)]
    pub recent_expenses: Vec<Expense>,
}

/// Planned versus actual spend for a single category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryBudget {
    pub budget: f64,
    pub spent: f64,
}

impl CategoryBudget {
    pub fn new(budget: f64, spent: f64) -> Self {
        Self { budget, spent }
    }

    /// Percentage of the budget already spent.
    ///
    /// A zero budget has no meaningful ratio: nothing spent reads as 0 %,
    /// while any spend against it reads as infinite utilization and is
    /// classified as high spending downstream.
    pub fn utilization_pct(&self) -> f64 {
        if self.budget == 0.0 {
            if self.spent == 0.0 {
                0.0
            } else {
                f64::INFINITY
            }
        } else {
            self.spent / self.budget * 100.0
        }
    }

    /// Budget left for the period; negative when overspent.
    pub fn remaining(&self) -> f64 {
        self.budget - self.spent
    }
}
