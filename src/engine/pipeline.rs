use crate::engine::{aggregate, filter};
use crate::models::FilterCriteria;
use crate::presentation::{present, Dashboard};
use crate::storage::Dataset;

/// Runs filter, aggregate and present over the snapshot in one pass.
///
/// Called afresh on every criteria change; nothing is carried between calls.
pub fn evaluate(dataset: &Dataset, criteria: &FilterCriteria) -> Dashboard {
    let view = filter(dataset, criteria);
    let result = aggregate(&view);

    present(dataset, criteria, &view, &result)
}
