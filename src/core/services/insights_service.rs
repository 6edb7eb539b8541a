use std::collections::BTreeMap;

use crate::budget::{BudgetInsights, BudgetRecord};
use crate::currency::ConversionRate;

/// Utilization above this percentage flags a category as high spending.
const HIGH_UTILIZATION_PCT: f64 = 80.0;
/// Utilization below this percentage flags a category as low spending.
const LOW_UTILIZATION_PCT: f64 = 30.0;

pub struct InsightsService;

impl InsightsService {
    /// Derives the full metrics record for one snapshot.
    ///
    /// Pure and stateless: the same record and rate always produce an
    /// identical insights value. Category iteration follows the map's
    /// lexicographic key order, which also fixes classification order and
    /// the tie-break for the most expensive category (first key wins).
    pub fn analyze(record: &BudgetRecord, rate: &ConversionRate) -> BudgetInsights {
        let mut utilization = BTreeMap::new();
        let mut remaining = BTreeMap::new();
        let mut high = Vec::new();
        let mut low = Vec::new();
        let mut most_expensive: Option<(&str, f64)> = None;

        for (name, line) in &record.categories {
            let pct = line.utilization_pct();
            utilization.insert(name.clone(), pct);
            remaining.insert(name.clone(), rate.convert(line.remaining()));
            if pct > HIGH_UTILIZATION_PCT {
                high.push(name.clone());
            } else if pct < LOW_UTILIZATION_PCT {
                low.push(name.clone());
            }
            // Strict comparison keeps the first category on ties.
            match most_expensive {
                Some((_, max)) if line.spent <= max => {}
                _ => most_expensive = Some((name, line.spent)),
            }
        }

        // The savings rate deliberately uses the top-level totals; they are
        // supplied independently of the category table.
        let savings_rate = if record.total_budget == 0.0 {
            None
        } else {
            Some((record.total_budget - record.total_spent) / record.total_budget * 100.0)
        };

        let average_expense_converted = if record.recent_expenses.is_empty() {
            0.0
        } else {
            let total: f64 = record
                .recent_expenses
                .iter()
                .map(|expense| rate.convert(expense.amount))
                .sum();
            total / record.recent_expenses.len() as f64
        };

        BudgetInsights {
            total_budget_converted: rate.convert(record.total_budget),
            total_spent_converted: rate.convert(record.total_spent),
            remaining_converted: rate.convert(record.total_budget - record.total_spent),
            savings_rate,
            high_spending_categories: high,
            low_spending_categories: low,
            average_expense_converted,
            most_expensive_category: most_expensive.map(|(name, _)| name.to_string()),
            budget_utilization_by_category: utilization,
            remaining_by_category: remaining,
        }
    }
}
