use super::adapter::Point;
use super::{present, Dashboard, Renderer, Series, TerminalRenderer};

use std::collections::HashSet;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::engine::{aggregate, filter};
use crate::models::fixtures::create_scenario_dataset;
use crate::models::FilterCriteria;

fn render_to_string(dashboard: &Dashboard, show_details: bool) -> Result<String> {
    let mut renderer = TerminalRenderer::new(Vec::new()).with_bar_width(10);
    dashboard.render(&mut renderer, show_details)?;

    Ok(String::from_utf8(renderer.into_inner())?)
}

fn series(points: &[(&str, i64)]) -> Series {
    Series {
        title: "Test Chart",
        label_column: "label",
        value_column: "value",
        points: points.iter()
            .map(|(label, value)| Point {
                label: label.to_string(),
                value: Decimal::from(*value),
                value_label: value.to_string()
            })
            .collect()
    }
}

#[test]
fn test_adapter_formats_metrics_with_labels_and_separators() -> Result<()> {
    let dataset = create_scenario_dataset()?;
    let criteria = FilterCriteria::unrestricted(&dataset);
    let view = filter(&dataset, &criteria);
    let dashboard = present(&dataset, &criteria, &view, &aggregate(&view));

    let metrics: Vec<_> = dashboard.metrics.iter()
        .map(|metric| (metric.label, metric.value.as_str()))
        .collect();

    assert_eq!(metrics, vec![
        ("Total Sales (Rp)", "1,600,000"),
        ("Total Orders", "3"),
        ("Total Quantity", "8"),
        ("Avg Order Value (Rp)", "533,333"),
    ]);

    Ok(())
}

#[test]
fn test_adapter_shapes_chart_tables_in_result_order() -> Result<()> {
    let dataset = create_scenario_dataset()?;
    let criteria = FilterCriteria::unrestricted(&dataset);
    let view = filter(&dataset, &criteria);
    let dashboard = present(&dataset, &criteria, &view, &aggregate(&view));

    let trend: Vec<_> = dashboard.sales_trend.points.iter()
        .map(|point| (point.label.as_str(), point.value_label.as_str()))
        .collect();
    let products: Vec<_> = dashboard.top_products.points.iter()
        .map(|point| (point.label.as_str(), point.value_label.as_str()))
        .collect();
    let genders: Vec<_> = dashboard.gender_distribution.points.iter()
        .map(|point| (point.label.as_str(), point.value_label.as_str()))
        .collect();

    assert_eq!(trend, vec![("2024-01", "1,500,000"), ("2024-02", "100,000")]);
    assert_eq!(products, vec![("Chain", "5"), ("Roadster", "3")]);
    assert_eq!(genders, vec![("M", "2"), ("F", "1")]);
    assert_eq!(dashboard.details.rows[2], vec!["3", "2024-02-01", "Parts", "Chain", "5", "100000", "M"]);

    Ok(())
}

#[test]
fn test_terminal_renderer_draws_every_section() -> Result<()> {
    let dataset = create_scenario_dataset()?;
    let criteria = FilterCriteria::unrestricted(&dataset);
    let view = filter(&dataset, &criteria);
    let output = render_to_string(&present(&dataset, &criteria, &view, &aggregate(&view)), false)?;

    assert!(output.contains("# Bee Cycle Sales Dashboard"));
    assert!(output.contains("Showing 3 transactions from 2024-01-05 to 2024-02-01"));
    assert!(output.contains("Total Sales (Rp)"));
    assert!(output.contains("1,600,000"));
    assert!(output.contains("## Monthly Sales Trend"));
    assert!(output.contains("## Top 10 Best Selling Products"));
    assert!(output.contains("## Customer Distribution by Gender"));
    assert!(!output.contains("## Transaction Data"));

    Ok(())
}

#[test]
fn test_terminal_renderer_draws_details_only_on_demand() -> Result<()> {
    let dataset = create_scenario_dataset()?;
    let criteria = FilterCriteria::unrestricted(&dataset);
    let view = filter(&dataset, &criteria);
    let output = render_to_string(&present(&dataset, &criteria, &view, &aggregate(&view)), true)?;

    assert!(output.contains("## Transaction Data"));
    assert!(output.contains("order_detail_id"));
    assert!(output.contains("Roadster"));

    Ok(())
}

#[test]
fn test_terminal_renderer_degrades_gracefully_for_empty_view() -> Result<()> {
    let dataset = create_scenario_dataset()?;
    let criteria = FilterCriteria { categories: HashSet::new(), ..FilterCriteria::unrestricted(&dataset) };
    let view = filter(&dataset, &criteria);
    let output = render_to_string(&present(&dataset, &criteria, &view, &aggregate(&view)), true)?;

    assert!(output.contains("Showing 0 transactions"));
    assert_eq!(output.matches("No data for the current filters").count(), 4);

    Ok(())
}

#[test]
fn test_bar_chart_scales_bars_to_the_largest_value() -> Result<()> {
    let mut renderer = TerminalRenderer::new(Vec::new()).with_bar_width(10);
    renderer.render_bar_chart(&series(&[("a", 10), ("b", 5), ("c", 0)]))?;
    let output = String::from_utf8(renderer.into_inner())?;

    assert!(output.contains(&"█".repeat(10)));
    assert!(output.contains(&format!(" {} ", "█".repeat(5))));
    assert!(!output.contains(&"█".repeat(11)));

    Ok(())
}

#[test]
fn test_pie_chart_reports_share_of_total() -> Result<()> {
    let mut renderer = TerminalRenderer::new(Vec::new());
    renderer.render_pie_chart(&series(&[("M", 3), ("F", 1)]))?;
    let output = String::from_utf8(renderer.into_inner())?;

    assert!(output.contains("75.0%"));
    assert!(output.contains("25.0%"));

    Ok(())
}
