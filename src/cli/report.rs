use std::env;
use std::path::PathBuf;

use crate::budget::BudgetInsights;
use crate::chart;
use crate::cli::output;
use crate::config::ConfigManager;
use crate::core::services::{InsightsService, RecommendationService};
use crate::core::utils::default_snapshot_file;
use crate::currency::{format_amount, ConversionRate};
use crate::errors::InsightsError;
use crate::utils::persistence::load_snapshot_from_file;

const USAGE: &str = "usage: budget_insights_cli [snapshot.json] [--chart <path>] [--no-chart]";

#[derive(Debug)]
struct CliArgs {
    snapshot: Option<PathBuf>,
    chart: Option<PathBuf>,
    no_chart: bool,
}

/// Generates the full budget report: analysis summary, recommendations, and
/// the chart artifact.
pub fn run_cli() -> Result<(), InsightsError> {
    let args = parse_args(env::args().skip(1))?;
    let config = ConfigManager::new()?.load()?;
    let rate = config.conversion_rate();

    let snapshot_path = args.snapshot.unwrap_or_else(default_snapshot_file);
    tracing::info!(snapshot = %snapshot_path.display(), "generating budget report");
    let record = load_snapshot_from_file(&snapshot_path)?;

    let insights = InsightsService::analyze(&record, &rate);
    let recommendations = RecommendationService::recommend(&insights);
    print_report(&insights, &recommendations, &rate);

    if !args.no_chart {
        let chart_path = args.chart.unwrap_or_else(|| config.chart_path());
        let document = chart::spending_charts(&record);
        chart::save_chart(&document, &chart_path)?;
        output::info(format!("Charts written to {}", chart_path.display()));
    }
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs, InsightsError> {
    let mut snapshot = None;
    let mut chart = None;
    let mut no_chart = false;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--chart" => {
                let value = args.next().ok_or_else(|| {
                    InsightsError::InvalidArgs(format!("--chart needs a path\n{USAGE}"))
                })?;
                chart = Some(PathBuf::from(value));
            }
            "--no-chart" => no_chart = true,
            other if other.starts_with('-') => {
                return Err(InsightsError::InvalidArgs(format!(
                    "unexpected flag `{other}`\n{USAGE}"
                )));
            }
            other if snapshot.is_none() => snapshot = Some(PathBuf::from(other)),
            other => {
                return Err(InsightsError::InvalidArgs(format!(
                    "unexpected argument `{other}`\n{USAGE}"
                )));
            }
        }
    }
    Ok(CliArgs {
        snapshot,
        chart,
        no_chart,
    })
}

fn print_report(insights: &BudgetInsights, recommendations: &[String], rate: &ConversionRate) {
    let currency = rate.to.as_str();
    output::section("STUDENT BUDGET ANALYSIS");
    output::info(format!(
        "Total Budget ({currency}): {}",
        format_amount(rate, insights.total_budget_converted)
    ));
    output::info(format!(
        "Total Spent ({currency}): {}",
        format_amount(rate, insights.total_spent_converted)
    ));
    output::info(format!(
        "Remaining ({currency}): {}",
        format_amount(rate, insights.remaining_converted)
    ));
    match insights.savings_rate {
        Some(savings_rate) => output::info(format!("Savings Rate: {savings_rate:.1}%")),
        None => output::info("Savings Rate: n/a (no budget set)"),
    }
    output::info(format!(
        "Average Expense ({currency}): {}",
        format_amount(rate, insights.average_expense_converted)
    ));
    if let Some(category) = &insights.most_expensive_category {
        output::info(format!("Most Expensive Category: {category}"));
    }

    output::section("BUDGET UTILIZATION");
    for (category, pct) in &insights.budget_utilization_by_category {
        let remaining = insights.remaining_by_category.get(category).copied();
        let utilization = if pct.is_finite() {
            format!("{pct:.1}%")
        } else {
            "overspent (no budget)".to_string()
        };
        match remaining {
            Some(remaining) => output::info(format!(
                "{category}: {utilization} used, {} left",
                format_amount(rate, remaining)
            )),
            None => output::info(format!("{category}: {utilization} used")),
        }
    }

    output::section("RECOMMENDATIONS");
    if recommendations.is_empty() {
        output::success("Spending is on track. No recommendations.");
    }
    for (i, recommendation) in recommendations.iter().enumerate() {
        output::info(format!("{}. {recommendation}", i + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, InsightsError> {
        parse_args(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn snapshot_path_is_positional() {
        let args = parse(&["budget.json"]).expect("valid args");
        assert_eq!(args.snapshot, Some(PathBuf::from("budget.json")));
        assert_eq!(args.chart, None);
        assert!(!args.no_chart);
    }

    #[test]
    fn chart_flag_takes_a_path() {
        let args = parse(&["budget.json", "--chart", "out.svg"]).expect("valid args");
        assert_eq!(args.chart, Some(PathBuf::from("out.svg")));
    }

    #[test]
    fn chart_flag_without_path_is_rejected() {
        let err = parse(&["budget.json", "--chart"]).expect_err("missing value");
        assert!(matches!(err, InsightsError::InvalidArgs(_)));
    }

    #[test]
    fn unknown_flags_are_rejected() {
        let err = parse(&["--frobnicate"]).expect_err("unknown flag");
        assert!(format!("{err}").contains("--frobnicate"));
    }

    #[test]
    fn second_positional_argument_is_rejected() {
        let err = parse(&["a.json", "b.json"]).expect_err("extra positional");
        assert!(format!("{err}").contains("b.json"));
    }

    #[test]
    fn no_arguments_fall_back_to_defaults() {
        let args = parse(&[]).expect("valid args");
        assert_eq!(args.snapshot, None);
    }
}
