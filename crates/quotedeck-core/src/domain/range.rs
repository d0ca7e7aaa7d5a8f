use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::error::ValidationError;

const FORMAT_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Inclusive `[start, end]` window of calendar dates.
///
/// An inverted range (`start > end`) is representable on purpose: a
/// transient UI selection must degrade to an empty view instead of
/// erroring, so [`DateRange::contains`] simply never matches in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    pub const fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    pub fn parse(start: &str, end: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(parse_date(start)?, parse_date(end)?))
    }

    pub const fn start(self) -> Date {
        self.start
    }

    pub const fn end(self) -> Date {
        self.end
    }

    pub fn is_inverted(self) -> bool {
        self.start > self.end
    }

    pub fn contains(self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Result<Date, ValidationError> {
    Date::parse(input.trim(), FORMAT_DATE).map_err(|_| ValidationError::InvalidDate {
        value: input.to_owned(),
    })
}
