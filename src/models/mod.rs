mod criteria;
#[cfg(test)]
pub(crate) mod fixtures;
mod transaction;

pub use criteria::{FilterCriteria, ProductSelection, ALL_PRODUCTS};
pub use transaction::Transaction;
