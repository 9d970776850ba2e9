use crate::engine::FilteredView;
use crate::types::{Quantity, YearMonth};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap, HashSet};

pub const TOP_PRODUCT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Kpis {
    pub total_sales: Decimal,
    /// Distinct order line identifiers.
    pub total_orders: usize,
    pub total_quantity: Quantity,
    /// `total_sales / total_orders`, or zero when there are no orders.
    pub average_order_value: Decimal
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRevenue {
    pub year_month: YearMonth,
    pub revenue: Decimal
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuantity {
    pub product_name: String,
    pub quantity: Quantity
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenderCount {
    pub gender: String,
    pub count: usize
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregationResult {
    pub kpis: Kpis,
    /// One entry per month present in the view, oldest first.
    pub monthly_trend: Vec<MonthlyRevenue>,
    /// At most [`TOP_PRODUCT_LIMIT`] products, highest quantity first, ties by name.
    pub top_products: Vec<ProductQuantity>,
    /// In the order each gender is first encountered.
    pub gender_distribution: Vec<GenderCount>
}

pub fn aggregate(view: &FilteredView<'_>) -> AggregationResult {
    AggregationResult {
        kpis: kpis(view),
        monthly_trend: monthly_trend(view),
        top_products: top_products(view),
        gender_distribution: gender_distribution(view)
    }
}

fn kpis(view: &FilteredView<'_>) -> Kpis {
    let total_sales = view.iter()
        .fold(Decimal::ZERO, |total, record| total.saturating_add(record.total_price));

    let total_orders = view.iter()
        .map(|record| record.order_detail_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    let total_quantity = view.iter()
        .fold(0, |total: Quantity, record| total.saturating_add(record.quantity));

    let average_order_value = if total_orders == 0 {
        Decimal::ZERO
    } else {
        total_sales / Decimal::from(total_orders)
    };

    Kpis {
        total_sales,
        total_orders,
        total_quantity,
        average_order_value
    }
}

fn monthly_trend(view: &FilteredView<'_>) -> Vec<MonthlyRevenue> {
    let mut months = BTreeMap::<YearMonth, Decimal>::new();

    for record in view.iter() {
        let revenue = months.entry(record.order_date.year_month()).or_insert(Decimal::ZERO);
        *revenue = revenue.saturating_add(record.total_price);
    }

    months.into_iter()
        .map(|(year_month, revenue)| MonthlyRevenue { year_month, revenue })
        .collect()
}

fn top_products(view: &FilteredView<'_>) -> Vec<ProductQuantity> {
    let mut quantities = HashMap::<&str, Quantity>::new();

    for record in view.iter() {
        let quantity = quantities.entry(record.product_name.as_str()).or_insert(0);
        *quantity = quantity.saturating_add(record.quantity);
    }

    let mut products: Vec<_> = quantities.into_iter().collect();

    products.sort_by(|(left_name, left_quantity), (right_name, right_quantity)| {
        right_quantity.cmp(left_quantity).then_with(|| left_name.cmp(right_name))
    });
    products.truncate(TOP_PRODUCT_LIMIT);

    products.into_iter()
        .map(|(product_name, quantity)| ProductQuantity { product_name: product_name.to_string(), quantity })
        .collect()
}

fn gender_distribution(view: &FilteredView<'_>) -> Vec<GenderCount> {
    let mut positions = HashMap::<&str, usize>::new();
    let mut distribution = Vec::<GenderCount>::new();

    for record in view.iter() {
        match positions.get(record.gender.as_str()) {
            Some(&position) => distribution[position].count += 1,
            None => {
                positions.insert(record.gender.as_str(), distribution.len());
                distribution.push(GenderCount { gender: record.gender.clone(), count: 1 });
            }
        }
    }

    distribution
}
