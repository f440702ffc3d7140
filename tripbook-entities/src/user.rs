use crate::{email::EmailAddress, id::Id};

/// A locally mirrored account of the external identity provider.
///
/// The `id` is the provider's stable subject identifier, profile
/// attributes are refreshed on every authenticated write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Id,
    pub email: EmailAddress,
    pub name: String,
}
