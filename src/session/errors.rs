use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command [{0}], type 'help' for the list of commands")]
    UnknownCommand(String),
    #[error("Command [{command}] expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str
    },
    #[error("Invalid date [{value}], expected YYYY-MM-DD")]
    InvalidDate {
        value: String
    },
    #[error("Date [{date}] is outside the dataset range [{first}] to [{last}]")]
    DateOutOfRange {
        date: NaiveDate,
        first: NaiveDate,
        last: NaiveDate
    },
    #[error("Unknown category [{0}]")]
    UnknownCategory(String),
    #[error("Unknown product [{0}]")]
    UnknownProduct(String)
}
