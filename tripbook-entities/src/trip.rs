use time::Date;

use crate::{id::Id, share::ShareToken, time::Timestamp};

/// The top-level unit a user creates to group photos, notes, countries
/// and a book layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub id: Id,
    pub owner: Id,
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub share_token: ShareToken,
    pub created_at: Timestamp,
}

impl Trip {
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner.as_str() == user_id
    }
}
