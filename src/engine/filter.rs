use crate::models::{FilterCriteria, Transaction};
use crate::storage::Dataset;
use std::slice::Iter;
use tracing::debug;

/// The records of a dataset that satisfy one set of criteria, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    records: Vec<&'a Transaction>
}

impl<'a> FilteredView<'a> {
    pub fn new(records: Vec<&'a Transaction>) -> Self {
        Self { records }
    }

    pub fn iter(&self) -> Iter<'_, &'a Transaction> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Selects the records dated within `[start, end]` (calendar date only, both ends
/// inclusive) whose category is selected and whose product matches the selection.
///
/// An empty category selection or a start after the end yields an empty view.
pub fn filter<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> FilteredView<'a> {
    let records: Vec<_> = dataset.iter()
        .filter(|record| admits(criteria, record))
        .collect();

    debug!("Filter kept {} of {} transactions", records.len(), dataset.len());

    FilteredView::new(records)
}

fn admits(criteria: &FilterCriteria, record: &Transaction) -> bool {
    let date = record.order_date.date();

    date >= criteria.start
        && date <= criteria.end
        && criteria.categories.contains(&record.category)
        && criteria.product.admits(&record.product_name)
}
