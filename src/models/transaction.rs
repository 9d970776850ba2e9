use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::{OrderDate, OrderDetailId, Quantity};

/// Represents a single order line from the input CSV file.
///
/// Records are read once by the loader and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// Unique key of the order line.
    pub order_detail_id: OrderDetailId,
    /// When the order was placed. Coerced from text at load time.
    pub order_date: OrderDate,
    /// Low cardinality product grouping, e.g. "Bike".
    pub category: String,
    pub product_name: String,
    pub quantity: Quantity,
    /// Line total in Rupiah.
    #[serde(rename = "totalprice_rupiah", with = "rust_decimal::serde::str")]
    pub total_price: Decimal,
    pub gender: String
}
