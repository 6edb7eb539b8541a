use std::collections::BTreeMap;
use std::fs;

use budget_insights::budget::{BudgetRecord, CategoryBudget};
use budget_insights::chart::{save_chart, spending_charts};
use tempfile::tempdir;

fn sample_snapshot() -> BudgetRecord {
    BudgetRecord {
        total_budget: 750.0,
        total_spent: 450.0,
        categories: BTreeMap::from([
            ("Food".to_string(), CategoryBudget::new(400.0, 280.0)),
            ("Transport".to_string(), CategoryBudget::new(200.0, 150.0)),
            ("Entertainment".to_string(), CategoryBudget::new(150.0, 20.0)),
        ]),
        recent_expenses: Vec::new(),
    }
}

#[test]
fn chart_file_is_written() {
    let temp = tempdir().expect("create temp dir");
    let path = temp.path().join("budget_analysis.svg");
    let document = spending_charts(&sample_snapshot());
    save_chart(&document, &path).expect("write chart");
    let rendered = fs::read_to_string(&path).expect("read chart file");
    assert!(rendered.contains("<svg"), "not an svg file: {rendered}");
    assert!(rendered.contains("</svg>"));
}

#[test]
fn every_category_is_labelled_in_both_panels() {
    let rendered = spending_charts(&sample_snapshot()).to_string();
    for name in ["Food", "Transport", "Entertainment"] {
        let occurrences = rendered.matches(name).count();
        assert!(
            occurrences >= 2,
            "{name} should appear in both panels, found {occurrences}"
        );
    }
    assert!(rendered.contains("Spending Distribution by Category"));
    assert!(rendered.contains("Budget Utilization by Category"));
}

#[test]
fn overspent_and_zero_budget_bars_stay_finite() {
    let mut record = sample_snapshot();
    record
        .categories
        .insert("Misc".to_string(), CategoryBudget::new(0.0, 30.0));
    record
        .categories
        .insert("Rent".to_string(), CategoryBudget::new(100.0, 400.0));
    let rendered = spending_charts(&record).to_string();
    assert!(!rendered.contains("inf"), "unclamped bar: {rendered}");
    assert!(!rendered.contains("NaN"), "NaN leaked into chart: {rendered}");
}

#[test]
fn zero_spend_snapshot_renders_empty_share_bars() {
    let record = BudgetRecord {
        total_budget: 300.0,
        total_spent: 0.0,
        categories: BTreeMap::from([("Food".to_string(), CategoryBudget::new(300.0, 0.0))]),
        recent_expenses: Vec::new(),
    };
    let rendered = spending_charts(&record).to_string();
    assert!(rendered.contains("0.0%"));
    assert!(!rendered.contains("NaN"));
}
