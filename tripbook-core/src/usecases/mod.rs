mod add_country;
mod add_note;
mod add_photo;
mod authorize;
mod create_trip;
mod delete_country;
mod delete_note;
mod error;
mod get_trip;
mod list_notes;
mod list_trips;
mod load_layout;
mod reorder_photos;
mod save_layout;
mod shared_book;

#[cfg(test)]
pub mod tests;

pub use self::{
    add_country::*, add_note::*, add_photo::*, authorize::*, create_trip::*, delete_country::*,
    delete_note::*, error::Error, get_trip::*, list_notes::*, list_trips::*, load_layout::*,
    reorder_photos::*, save_layout::*, shared_book::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::repositories::Error as RepoError;
    pub use crate::{entities::*, repositories::*};
    pub use time::Date;
}
