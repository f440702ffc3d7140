pub mod book;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use tripbook_entities::{
        country::*, email::*, id::Id, layout::*, note::*, photo::*, share::*, time::*, trip::*,
        user::*,
    };
}
