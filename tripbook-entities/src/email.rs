use std::{fmt, str::FromStr};

use thiserror::Error;

/// A syntactically plausible e-mail address.
///
/// Verification of ownership is delegated to the external identity
/// provider, only the basic shape is checked here.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EmailAddress(String);

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("Invalid e-mail address")]
pub struct EmailAddressParseError;

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Skips the syntax check, e.g. when loading from the database.
    pub fn new_unchecked(from: String) -> Self {
        Self(from)
    }
}

impl FromStr for EmailAddress {
    type Err = EmailAddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut parts = s.split('@');
        let (local, domain) = (parts.next(), parts.next());
        if parts.next().is_some() {
            return Err(EmailAddressParseError);
        }
        match (local, domain) {
            (Some(local), Some(domain))
                if !local.is_empty() && domain.contains('.') && !domain.starts_with('.') =>
            {
                Ok(Self(s.to_owned()))
            }
            _ => Err(EmailAddressParseError),
        }
    }
}

impl From<EmailAddress> for String {
    fn from(from: EmailAddress) -> Self {
        from.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}
