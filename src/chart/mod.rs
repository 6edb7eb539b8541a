//! Chart rendering for budget snapshots.
//!
//! Every call builds a standalone SVG document from the record it is given;
//! there is no shared figure state between calls, so the same snapshot
//! always renders the same artifact.

use std::path::Path;

use svg::node::element::{Group, Line, Rectangle, Text};
use svg::node::Text as TextNode;
use svg::Document;

use crate::budget::BudgetRecord;
use crate::errors::InsightsError;

const PANEL_WIDTH: f64 = 460.0;
const PANEL_HEIGHT: f64 = 320.0;
const MARGIN: f64 = 40.0;
const TITLE_HEIGHT: f64 = 30.0;
const LABEL_COLUMN: f64 = 130.0;
const BAR_GAP: f64 = 8.0;
/// Bars for utilization beyond this percentage (overspent or zero-budget
/// categories) are clamped to the panel ceiling.
const UTILIZATION_CEILING_PCT: f64 = 150.0;
const REFERENCE_PCT: f64 = 100.0;

const COLORS: &[&str] = &[
    "#e4572e", "#29a19c", "#4062bb", "#f2a541", "#7f557d", "#52b788", "#c5283d",
];

/// Builds the two-panel budget chart: spend-share breakdown on the left,
/// per-category utilization bars on the right.
pub fn spending_charts(record: &BudgetRecord) -> Document {
    let width = 2.0 * PANEL_WIDTH + 3.0 * MARGIN;
    let height = PANEL_HEIGHT + 2.0 * MARGIN;
    let background = Rectangle::new()
        .set("x", 0.0)
        .set("y", 0.0)
        .set("width", width)
        .set("height", height)
        .set("fill", "white");
    Document::new()
        .set("viewBox", (0.0, 0.0, width, height))
        .add(background)
        .add(share_panel(record).set("transform", translate(MARGIN, MARGIN)))
        .add(utilization_panel(record).set("transform", translate(2.0 * MARGIN + PANEL_WIDTH, MARGIN)))
}

/// Writes the rendered document to disk; the file handle is released before
/// returning.
pub fn save_chart(document: &Document, path: &Path) -> Result<(), InsightsError> {
    svg::save(path, document)?;
    Ok(())
}

fn share_panel(record: &BudgetRecord) -> Group {
    let total_spent: f64 = record.categories.values().map(|line| line.spent).sum();
    let rows = record.categories.len().max(1) as f64;
    let row_height = (PANEL_HEIGHT - TITLE_HEIGHT) / rows;
    let bar_span = PANEL_WIDTH - LABEL_COLUMN - 60.0;

    let mut panel = Group::new().add(panel_title("Spending Distribution by Category"));
    for (i, (name, line)) in record.categories.iter().enumerate() {
        let share_pct = if total_spent == 0.0 {
            0.0
        } else {
            line.spent / total_spent * 100.0
        };
        let y = TITLE_HEIGHT + i as f64 * row_height;
        let bar_width = share_pct / 100.0 * bar_span;
        let bar = Rectangle::new()
            .set("x", LABEL_COLUMN)
            .set("y", y + BAR_GAP / 2.0)
            .set("width", bar_width)
            .set("height", row_height - BAR_GAP)
            .set("fill", COLORS[i % COLORS.len()]);
        let label = small_text(name, 0.0, y + row_height / 2.0 + 4.0);
        let value = small_text(
            &format!("{share_pct:.1}%"),
            LABEL_COLUMN + bar_width + 6.0,
            y + row_height / 2.0 + 4.0,
        );
        panel = panel.add(bar).add(label).add(value);
    }
    panel
}

fn utilization_panel(record: &BudgetRecord) -> Group {
    let baseline = PANEL_HEIGHT - 50.0;
    let plot_height = baseline - TITLE_HEIGHT;
    let columns = record.categories.len().max(1) as f64;
    let column_width = PANEL_WIDTH / columns;
    let reference_y = baseline - REFERENCE_PCT / UTILIZATION_CEILING_PCT * plot_height;

    let axis = Line::new()
        .set("x1", 0.0)
        .set("y1", baseline)
        .set("x2", PANEL_WIDTH)
        .set("y2", baseline)
        .set("stroke", "black")
        .set("stroke-width", 1.0);
    let reference = Line::new()
        .set("x1", 0.0)
        .set("y1", reference_y)
        .set("x2", PANEL_WIDTH)
        .set("y2", reference_y)
        .set("stroke", "#888888")
        .set("stroke-width", 1.0)
        .set("stroke-dasharray", "4 3");

    let mut panel = Group::new()
        .add(panel_title("Budget Utilization by Category (%)"))
        .add(reference)
        .add(axis);
    for (i, (name, line)) in record.categories.iter().enumerate() {
        let pct = line.utilization_pct().min(UTILIZATION_CEILING_PCT);
        let bar_height = pct / UTILIZATION_CEILING_PCT * plot_height;
        let x = i as f64 * column_width + BAR_GAP;
        let bar = Rectangle::new()
            .set("x", x)
            .set("y", baseline - bar_height)
            .set("width", column_width - 2.0 * BAR_GAP)
            .set("height", bar_height)
            .set("fill", COLORS[i % COLORS.len()]);
        let label_x = x + (column_width - 2.0 * BAR_GAP) / 2.0;
        let label = small_text(name, label_x, baseline + 14.0).set(
            "transform",
            format!("rotate(-35 {label_x} {})", baseline + 14.0),
        );
        panel = panel.add(bar).add(label);
    }
    panel
}

fn panel_title(title: &str) -> Text {
    Text::new()
        .set("x", PANEL_WIDTH / 2.0)
        .set("y", 14.0)
        .set("text-anchor", "middle")
        .set("font-family", "sans-serif")
        .set("font-size", 14)
        .set("font-weight", "bold")
        .add(TextNode::new(escape_label(title)))
}

fn small_text(content: &str, x: f64, y: f64) -> Text {
    Text::new()
        .set("x", x)
        .set("y", y)
        .set("font-family", "sans-serif")
        .set("font-size", 10)
        .add(TextNode::new(escape_label(content)))
}

fn translate(x: f64, y: f64) -> String {
    format!("translate({x} {y})")
}

// The svg crate writes text nodes verbatim.
fn escape_label(label: &str) -> String {
    label
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
