use crate::budget::BudgetInsights;

/// Savings rates below this percentage trigger the generic warning.
const LOW_SAVINGS_RATE_PCT: f64 = 20.0;
/// Average expenses above this amount (report currency) trigger the
/// budget-friendly-alternatives note.
const HIGH_AVERAGE_EXPENSE: f64 = 1000.0;

pub struct RecommendationService;

impl RecommendationService {
    /// Produces the ordered recommendation list for one insights record.
    ///
    /// Rules run in a fixed order and never suppress each other. An unknown
    /// savings rate contributes nothing.
    pub fn recommend(insights: &BudgetInsights) -> Vec<String> {
        let mut recommendations = Vec::new();

        if let Some(rate) = insights.savings_rate {
            if rate < LOW_SAVINGS_RATE_PCT {
                recommendations.push(
                    "Consider reducing expenses in high-spending categories to improve your savings rate."
                        .to_string(),
                );
            }
        }

        for category in &insights.high_spending_categories {
            recommendations.push(format!(
                "You're spending heavily on {category}. Consider setting stricter limits."
            ));
        }

        for category in &insights.low_spending_categories {
            recommendations.push(format!(
                "You have room to spend more on {category} if needed."
            ));
        }

        if insights.average_expense_converted > HIGH_AVERAGE_EXPENSE {
            recommendations.push(
                "Your average expense is quite high. Try to find more budget-friendly alternatives."
                    .to_string(),
            );
        }

        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn insights() -> BudgetInsights {
        BudgetInsights {
            total_budget_converted: 99_600.0,
            total_spent_converted: 56_440.0,
            remaining_converted: 43_160.0,
            savings_rate: Some(43.33),
            high_spending_categories: Vec::new(),
            low_spending_categories: Vec::new(),
            average_expense_converted: 0.0,
            most_expensive_category: None,
            budget_utilization_by_category: BTreeMap::new(),
            remaining_by_category: BTreeMap::new(),
        }
    }

    #[test]
    fn healthy_budget_yields_no_recommendations() {
        assert!(RecommendationService::recommend(&insights()).is_empty());
    }

    #[test]
    fn rules_fire_in_fixed_order() {
        let mut record = insights();
        record.savings_rate = Some(15.0);
        record.high_spending_categories = vec!["Food".to_string()];
        record.average_expense_converted = 1200.0;
        let recommendations = RecommendationService::recommend(&record);
        assert_eq!(recommendations.len(), 3);
        assert!(recommendations[0].contains("savings rate"));
        assert!(recommendations[1].contains("Food"));
        assert!(recommendations[2].contains("budget-friendly"));
    }

    #[test]
    fn each_flagged_category_gets_its_own_entry() {
        let mut record = insights();
        record.high_spending_categories = vec!["Food".to_string(), "Rent".to_string()];
        record.low_spending_categories = vec!["Books".to_string()];
        let recommendations = RecommendationService::recommend(&record);
        assert_eq!(recommendations.len(), 3);
        assert!(recommendations[0].contains("Food"));
        assert!(recommendations[1].contains("Rent"));
        assert!(recommendations[2].contains("room to spend more on Books"));
    }

    #[test]
    fn unknown_savings_rate_contributes_nothing() {
        let mut record = insights();
        record.savings_rate = None;
        assert!(RecommendationService::recommend(&record).is_empty());
    }

    #[test]
    fn boundary_values_do_not_trigger_rules() {
        let mut record = insights();
        record.savings_rate = Some(20.0);
        record.average_expense_converted = 1000.0;
        assert!(RecommendationService::recommend(&record).is_empty());
    }
}
