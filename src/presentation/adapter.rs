use crate::engine::{AggregationResult, FilteredView};
use crate::models::FilterCriteria;
use crate::storage::Dataset;
use crate::types::Thousands;
use rust_decimal::Decimal;

pub const DASHBOARD_TITLE: &str = "Bee Cycle Sales Dashboard";

/// A labelled scalar KPI, already formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String
}

/// One row of a two-column chart table. `value` sizes the mark; `value_label` is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub label: String,
    pub value: Decimal,
    pub value_label: String
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub title: &'static str,
    pub label_column: &'static str,
    pub value_column: &'static str,
    pub points: Vec<Point>
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub title: &'static str,
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>
}

/// Everything the renderer draws for one evaluation of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub summary: String,
    pub metrics: Vec<Metric>,
    pub sales_trend: Series,
    pub top_products: Series,
    pub gender_distribution: Series,
    pub details: Table
}

/// Shapes an aggregation result, and the view it came from, into renderer inputs.
///
/// An empty dataset has no date range, so its summary reports that instead of bounds.
pub fn present(dataset: &Dataset, criteria: &FilterCriteria, view: &FilteredView<'_>, result: &AggregationResult) -> Dashboard {
    let kpis = &result.kpis;

    let metrics = vec![
        Metric { label: "Total Sales (Rp)", value: Thousands(kpis.total_sales).to_string() },
        Metric { label: "Total Orders", value: Thousands::from(kpis.total_orders).to_string() },
        Metric { label: "Total Quantity", value: Thousands::from(kpis.total_quantity).to_string() },
        Metric { label: "Avg Order Value (Rp)", value: Thousands(kpis.average_order_value).to_string() },
    ];

    let sales_trend = Series {
        title: "Monthly Sales Trend",
        label_column: "year_month",
        value_column: "totalprice_rupiah",
        points: result.monthly_trend.iter()
            .map(|month| point(month.year_month.to_string(), month.revenue))
            .collect()
    };

    let top_products = Series {
        title: "Top 10 Best Selling Products",
        label_column: "product_name",
        value_column: "quantity",
        points: result.top_products.iter()
            .map(|product| point(product.product_name.clone(), Decimal::from(product.quantity)))
            .collect()
    };

    let gender_distribution = Series {
        title: "Customer Distribution by Gender",
        label_column: "gender",
        value_column: "count",
        points: result.gender_distribution.iter()
            .map(|gender| point(gender.gender.clone(), Decimal::from(gender.count)))
            .collect()
    };

    let details = Table {
        title: "Transaction Data",
        columns: vec!["order_detail_id", "order_date", "category", "product_name", "quantity", "totalprice_rupiah", "gender"],
        rows: view.iter()
            .map(|record| vec![
                record.order_detail_id.clone(),
                record.order_date.to_string(),
                record.category.clone(),
                record.product_name.clone(),
                record.quantity.to_string(),
                record.total_price.to_string(),
                record.gender.clone(),
            ])
            .collect()
    };

    Dashboard {
        summary: summary(dataset, criteria, view),
        metrics,
        sales_trend,
        top_products,
        gender_distribution,
        details
    }
}

fn summary(dataset: &Dataset, criteria: &FilterCriteria, view: &FilteredView<'_>) -> String {
    if dataset.is_empty() {
        return "No transactions available in the dataset".to_string();
    }

    format!("Showing {} transactions from {} to {}", view.len(), criteria.start, criteria.end)
}

fn point(label: String, value: Decimal) -> Point {
    Point {
        label,
        value,
        value_label: Thousands(value).to_string()
    }
}
