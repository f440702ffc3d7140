use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::id::Id;

/// ISO 3166-1 alpha-2 country code.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CountryCode(String);

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("A country code consists of exactly two letters")]
pub struct CountryCodeParseError;

impl CountryCode {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for CountryCode {
    type Err = CountryCodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.chars().count() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CountryCodeParseError);
        }
        Ok(Self(trimmed.to_uppercase()))
    }
}

impl From<CountryCode> for String {
    fn from(from: CountryCode) -> Self {
        from.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

/// A country visited during a trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub id: Id,
    pub trip_id: Id,
    pub code: CountryCode,
    pub name: String,
}
