use std::fmt;

use time::{
    format_description::{well_known::Rfc3339, BorrowedFormatItem},
    macros::format_description,
    Date, OffsetDateTime,
};

// All timestamps are stored as unix timestamps in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("Invalid timestamp")]
pub struct TimestampParseError;

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    pub fn to_rfc3339(self) -> String {
        OffsetDateTime::from(self)
            .format(&Rfc3339)
            .expect("RFC 3339 timestamp")
    }

    pub fn parse_rfc3339(s: &str) -> Result<Self, TimestampParseError> {
        OffsetDateTime::parse(s, &Rfc3339)
            .map(Into::into)
            .map_err(|_| TimestampParseError)
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(from.0) * 1_000_000)
            .expect("timestamp within range")
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(&self.to_rfc3339())
    }
}

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("Invalid calendar date")]
pub struct DateParseError;

/// Parses an ISO-8601 calendar date (`YYYY-MM-DD`).
pub fn parse_date(s: &str) -> Result<Date, DateParseError> {
    Date::parse(s.trim(), DATE_FORMAT).map_err(|_| DateParseError)
}

pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).expect("ISO 8601 calendar date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_round_trip() {
        let t1 = Timestamp::now();
        let t2 = Timestamp::from_millis(t1.as_millis());
        assert_eq!(t1, t2);
    }

    #[test]
    fn rfc3339_round_trip() {
        let t1 = Timestamp::from_millis(1_714_521_600_123);
        let t2 = Timestamp::parse_rfc3339(&t1.to_rfc3339()).unwrap();
        assert_eq!(t1, t2);
    }

    #[test]
    fn parse_and_format_calendar_date() {
        let date = parse_date("2024-05-01").unwrap();
        assert_eq!(format_date(date), "2024-05-01");
        assert!(parse_date("01.05.2024").is_err());
        assert!(parse_date("").is_err());
    }
}
