use std::collections::HashSet;
use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::storage::Dataset;

pub const ALL_PRODUCTS: &str = "All";

/// The user's current filter constraints.
///
/// `start > end` is representable on purpose; it simply selects nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Categories to keep. Empty keeps nothing.
    pub categories: HashSet<String>,
    pub product: ProductSelection
}

impl FilterCriteria {
    #[cfg(test)]
    pub fn new(start: NaiveDate, end: NaiveDate, categories: HashSet<String>, product: ProductSelection) -> Self {
        Self {
            start,
            end,
            categories,
            product
        }
    }

    /// Criteria matching every record of the dataset: its full date range, every known
    /// category, and no product restriction.
    pub fn unrestricted(dataset: &Dataset) -> Self {
        let (start, end) = dataset.date_range().unwrap_or((NaiveDate::MIN, NaiveDate::MAX));

        Self {
            start,
            end,
            categories: dataset.categories().iter().cloned().collect(),
            product: ProductSelection::All
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub enum ProductSelection {
    #[default]
    All,
    Only(String)
}

impl ProductSelection {
    /// Interprets a product chooser value, treating the "All" sentinel as no restriction.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();

        if value == ALL_PRODUCTS {
            ProductSelection::All
        } else {
            ProductSelection::Only(value.to_string())
        }
    }

    pub fn admits(&self, product_name: &str) -> bool {
        match self {
            ProductSelection::All => true,
            ProductSelection::Only(selected) => selected == product_name
        }
    }
}

impl Display for ProductSelection {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ProductSelection::All => write!(formatter, "{}", ALL_PRODUCTS),
            ProductSelection::Only(product_name) => write!(formatter, "{}", product_name)
        }
    }
}
