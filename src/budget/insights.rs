use std::collections::BTreeMap;

use serde::Serialize;

/// Derived metrics for one budget snapshot.
///
/// Built fresh per analysis call; plain value semantics, no identity.
/// Monetary fields are expressed in the report currency, utilization and
/// rate figures in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetInsights {
    pub total_budget_converted: f64,
    pub total_spent_converted: f64,
    pub remaining_converted: f64,
    /// Percentage of the total budget left unspent; `None` when the total
    /// budget is zero and the rate is undefined.
    pub savings_rate: Option<f64>,
    /// Categories above 80 % utilization, in category-map order.
    pub high_spending_categories: Vec<String>,
    /// Categories below 30 % utilization, in category-map order.
    pub low_spending_categories: Vec<String>,
    pub average_expense_converted: f64,
    /// Category with the largest raw spend; `None` for an empty table.
    pub most_expensive_category: Option<String>,
    pub budget_utilization_by_category: BTreeMap<String, f64>,
    pub remaining_by_category: BTreeMap<String, f64>,
}
