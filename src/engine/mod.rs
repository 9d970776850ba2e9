mod aggregate;
mod filter;
mod pipeline;

pub use aggregate::{aggregate, AggregationResult};
pub use filter::{filter, FilteredView};
pub use pipeline::evaluate;
