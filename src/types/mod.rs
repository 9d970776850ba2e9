mod errors;
mod order_date;
mod thousands;

pub use order_date::{OrderDate, YearMonth};
pub use thousands::Thousands;

pub type OrderDetailId = String;
pub type Quantity = u64;
