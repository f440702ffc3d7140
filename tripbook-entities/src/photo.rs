use crate::{id::Id, time::Timestamp};

/// An uploaded photo. The binary lives on the external image CDN,
/// only its URL and metadata are kept here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: Id,
    pub trip_id: Id,
    pub url: String,
    pub caption: Option<String>,
    pub taken_at: Option<Timestamp>,
    /// Manual position within the trip's photo grid.
    /// `None` until the photos have been reordered for the first time.
    pub sort_order: Option<i64>,
    pub created_at: Timestamp,
}
