// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    /// Inserts the user or refreshes the profile attributes of an
    /// existing row with the same id.
    fn create_or_update_user(&self, user: &User) -> Result<()>;

    fn try_get_user(&self, id: &str) -> Result<Option<User>>;
}

pub trait TripRepo {
    fn create_trip(&self, trip: &Trip) -> Result<()>;

    fn get_trip(&self, id: &str) -> Result<Trip>;
    fn get_trip_by_share_token(&self, token: &str) -> Result<Trip>;

    // Ordered by start date, newest first.
    fn trips_of_user(&self, user_id: &str) -> Result<Vec<Trip>>;
}

pub trait PhotoRepo {
    fn create_photo(&self, photo: &Photo) -> Result<()>;

    // Ordered by creation time, newest first.
    fn photos_of_trip(&self, trip_id: &str) -> Result<Vec<Photo>>;

    /// Sets the manual position of a single photo. The update is scoped
    /// to the given trip, a photo id from another trip is `NotFound`.
    fn update_photo_sort_order(&self, trip_id: &str, photo_id: &str, sort_order: i64)
        -> Result<()>;
}

pub trait CountryRepo {
    fn create_country(&self, country: &Country) -> Result<()>;

    fn countries_of_trip(&self, trip_id: &str) -> Result<Vec<Country>>;

    /// Deletes a country, but only if it belongs to the given trip.
    fn delete_country(&self, trip_id: &str, country_id: &str) -> Result<()>;
}

pub trait NoteRepo {
    fn create_note(&self, note: &Note) -> Result<()>;

    // Ordered by date, newest first.
    fn notes_of_trip(&self, trip_id: &str) -> Result<Vec<Note>>;

    /// Deletes a note, but only if it belongs to the given trip.
    fn delete_note(&self, trip_id: &str, note_id: &str) -> Result<()>;
}

pub trait LayoutRepo {
    /// Wholesale upsert: creates the layout row for the trip or replaces
    /// its entire section document.
    fn save_layout(&self, trip_id: &Id, sections: &[Section], updated_at: Timestamp)
        -> Result<Layout>;

    fn try_get_layout(&self, trip_id: &str) -> Result<Option<Layout>>;
}
