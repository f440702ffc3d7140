use strum::{Display, EnumString};

use crate::{id::Id, time::Timestamp};

/// Freeform text attached to a trip, rendered either as a pull-quote
/// or as a longer summary paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum NoteKind {
    Quote,
    Summary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: Id,
    pub trip_id: Id,
    pub kind: NoteKind,
    pub content: String,
    pub date: Timestamp,
}
