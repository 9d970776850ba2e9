use std::collections::HashSet;
use std::slice::Iter;

use chrono::NaiveDate;

use crate::models::Transaction;

/// Immutable in-memory snapshot of the transaction file.
///
/// Alongside the records it keeps the values the filter widgets are seeded with:
/// the first and last order date, plus the distinct categories and product names
/// in the order they first appear.
#[derive(Debug)]
pub struct Dataset {
    records: Vec<Transaction>,
    categories: Vec<String>,
    products: Vec<String>,
    date_range: Option<(NaiveDate, NaiveDate)>
}

impl Dataset {
    pub fn new(records: Vec<Transaction>) -> Self {
        let categories = distinct(records.iter().map(|record| record.category.as_str()));
        let products = distinct(records.iter().map(|record| record.product_name.as_str()));

        let dates = records.iter().map(|record| record.order_date.date());
        let date_range = dates.clone().min().zip(dates.max());

        Self {
            records,
            categories,
            products,
            date_range
        }
    }

    pub fn iter(&self) -> Iter<'_, Transaction> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn products(&self) -> &[String] {
        &self.products
    }

    /// Earliest and latest order date, `None` for an empty dataset.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.date_range
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|known| known == category)
    }

    pub fn has_product(&self, product_name: &str) -> bool {
        self.products.iter().any(|known| known == product_name)
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();

    values
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}
