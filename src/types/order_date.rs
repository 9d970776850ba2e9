use crate::types::errors::OrderDateError;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DATE_TIME_FORMATS: [&str; 4] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// The moment an order line was placed, as coerced from the dataset's textual column.
///
/// Filtering only ever looks at the calendar date; the time of day is kept so the
/// detail table can show the value as it appeared in the source.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct OrderDate(NaiveDateTime);

impl OrderDate {
    pub fn from_date(date: NaiveDate) -> Self {
        OrderDate(date.and_time(NaiveTime::MIN))
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth {
            year: self.0.year(),
            month: self.0.month()
        }
    }
}

impl Display for OrderDate {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        if self.0.num_seconds_from_midnight() == 0 {
            write!(formatter, "{}", self.0.format("%Y-%m-%d"))
        } else {
            write!(formatter, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
        }
    }
}

impl FromStr for OrderDate {
    type Err = OrderDateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(OrderDateError::Empty);
        }

        for format in DATE_TIME_FORMATS {
            if let Ok(date_time) = NaiveDateTime::parse_from_str(value, format) {
                return Ok(OrderDate(date_time));
            }
        }

        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(value, format) {
                return Ok(OrderDate::from_date(date));
            }
        }

        Err(OrderDateError::Unparseable(value.to_string()))
    }
}

impl<'de> Deserialize<'de> for OrderDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        OrderDate::from_str(&value).map_err(de::Error::custom)
    }
}

/// Calendar month bucket used by the monthly revenue trend. Orders chronologically.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32
}

impl Display for YearMonth {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:04}-{:02}", self.year, self.month)
    }
}
