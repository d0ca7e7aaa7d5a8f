use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Time};

use crate::error::ValidationError;

const FORMAT_DATETIME: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const FORMAT_DATETIME_SPACED: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
const FORMAT_DATETIME_MINUTES: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");
const FORMAT_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Naive observation timestamp, totally ordered.
///
/// The flat record source carries no zone information, so no offset is
/// implied or validated. Accepted input forms, tried in order:
/// `2024-01-02T09:30:00`, `2024-01-02 09:30:00`, `2024-01-02T09:30`,
/// and a bare `2024-01-02` (midnight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(PrimitiveDateTime);

impl Timestamp {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();

        for format in [FORMAT_DATETIME, FORMAT_DATETIME_SPACED, FORMAT_DATETIME_MINUTES] {
            if let Ok(parsed) = PrimitiveDateTime::parse(trimmed, format) {
                return Ok(Self(parsed));
            }
        }

        if let Ok(parsed) = Date::parse(trimmed, FORMAT_DATE) {
            return Ok(Self(PrimitiveDateTime::new(parsed, Time::MIDNIGHT)));
        }

        Err(ValidationError::InvalidTimestamp {
            value: input.to_owned(),
        })
    }

    /// Calendar-date portion used by range filtering.
    pub const fn date(self) -> Date {
        self.0.date()
    }

    pub fn format_iso8601(self) -> String {
        self.0
            .format(FORMAT_DATETIME)
            .expect("timestamp must be ISO-8601 formattable")
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // pad() keeps width/alignment specs working for table output.
        f.pad(&self.format_iso8601())
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso8601())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso8601_timestamp() {
        let parsed = Timestamp::parse("2024-01-02T09:30:00").expect("must parse");
        assert_eq!(parsed.format_iso8601(), "2024-01-02T09:30:00");
    }

    #[test]
    fn parses_space_separated_timestamp() {
        let parsed = Timestamp::parse("2024-01-02 09:30:00").expect("must parse");
        assert_eq!(parsed.format_iso8601(), "2024-01-02T09:30:00");
    }

    #[test]
    fn parses_minute_precision_timestamp() {
        let parsed = Timestamp::parse("2024-01-02T09:30").expect("must parse");
        assert_eq!(parsed.format_iso8601(), "2024-01-02T09:30:00");
    }

    #[test]
    fn bare_date_parses_as_midnight() {
        let parsed = Timestamp::parse("2024-01-02").expect("must parse");
        assert_eq!(parsed.format_iso8601(), "2024-01-02T00:00:00");
    }

    #[test]
    fn rejects_garbage() {
        let err = Timestamp::parse("bad").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidTimestamp { .. }));
    }

    #[test]
    fn display_honors_width_and_alignment() {
        let ts = Timestamp::parse("2024-01-02T09:30:00").expect("must parse");
        assert_eq!(format!("{ts:<21}"), "2024-01-02T09:30:00  ");
    }

    #[test]
    fn orders_chronologically() {
        let earlier = Timestamp::parse("2024-01-01T09:00:00").expect("must parse");
        let later = Timestamp::parse("2024-01-02T09:00:00").expect("must parse");
        assert!(earlier < later);
    }
}
