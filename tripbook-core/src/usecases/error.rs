use thiserror::Error;

use crate::repositories;
use tripbook_entities::{
    country::CountryCodeParseError, email::EmailAddressParseError, layout::PhotoGroupKind,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The title must not be empty")]
    Title,
    #[error("The location must not be empty")]
    Location,
    #[error("Invalid start date")]
    StartDate,
    #[error("Invalid end date")]
    EndDate,
    #[error("The photo URL must not be empty")]
    PhotoUrl,
    #[error("Invalid country code")]
    CountryCode,
    #[error("The country name must not be empty")]
    CountryName,
    #[error("The note content must not be empty")]
    NoteContent,
    #[error("Invalid note type")]
    NoteKind,
    #[error("Invalid e-mail address")]
    EmailAddress,
    #[error("A {kind} group holds at most {capacity} photos")]
    PhotoGroupCapacity {
        kind: PhotoGroupKind,
        capacity: usize,
    },
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<CountryCodeParseError> for Error {
    fn from(_: CountryCodeParseError) -> Self {
        Self::CountryCode
    }
}

impl From<EmailAddressParseError> for Error {
    fn from(_: EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}
