use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::models::Transaction;
use crate::storage::Dataset;
use crate::types::{OrderDate, Quantity};

pub fn create_transaction(
    order_detail_id: &str,
    order_date: &str,
    category: &str,
    product_name: &str,
    quantity: Quantity,
    total_price: &str,
    gender: &str
) -> Result<Transaction> {
    Ok(Transaction {
        order_detail_id: order_detail_id.to_string(),
        order_date: OrderDate::from_str(order_date)?,
        category: category.to_string(),
        product_name: product_name.to_string(),
        quantity,
        total_price: Decimal::from_str(total_price)?,
        gender: gender.to_string()
    })
}

/// The three order lines used throughout the dashboard scenarios.
pub fn create_scenario_dataset() -> Result<Dataset> {
    Ok(Dataset::new(vec![
        create_transaction("1", "2024-01-05", "Bike", "Roadster", 2, "1000000", "M")?,
        create_transaction("2", "2024-01-20", "Bike", "Roadster", 1, "500000", "F")?,
        create_transaction("3", "2024-02-01", "Parts", "Chain", 5, "100000", "M")?,
    ]))
}
