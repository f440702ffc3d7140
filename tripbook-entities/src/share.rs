use std::{borrow::Borrow, fmt, str::FromStr};

use uuid::Uuid;

/// Opaque, unguessable token that grants read-only access to a trip's
/// rendered book. Not tied to any account.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ShareToken(String);

impl ShareToken {
    pub fn new() -> Self {
        Self(Uuid::new_v4().as_simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for ShareToken {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for ShareToken {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for ShareToken {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<ShareToken> for String {
    fn from(from: ShareToken) -> Self {
        from.0
    }
}

impl FromStr for ShareToken {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl Borrow<str> for ShareToken {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ShareToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}
