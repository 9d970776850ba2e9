use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderDateError {
    #[error("Order date error: Value is an empty string")]
    Empty,
    #[error("Order date error: Unrecognised date '{0}'")]
    Unparseable(String)
}
