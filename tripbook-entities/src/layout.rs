use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{id::Id, note::NoteKind, photo::Photo, time::Timestamp};

/// The persisted book document of a trip.
///
/// The section tree is the single source of truth for presentation
/// order. Photo and note rows remain the source of truth for existence
/// and metadata: a photo stub may reference a photo that has since been
/// deleted, consumers have to tolerate such orphans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub id: Id,
    pub trip_id: Id,
    pub sections: Vec<Section>,
    pub updated_at: Timestamp,
}

/// One chapter of the book: a title and an ordered list of content blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: Id,
    pub title: String,
    pub content: Vec<ContentBlock>,
}

/// Size class of a photo group, determines how many photos it can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PhotoGroupKind {
    Single,
    Double,
    Triple,
}

impl PhotoGroupKind {
    pub const fn capacity(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
        }
    }
}

/// Denormalized copy of a photo embedded in the document.
///
/// `taken_at` is carried verbatim as the client submitted it; the
/// document is opaque presentation data and must round-trip losslessly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoStub {
    pub id: Id,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taken_at: Option<String>,
}

impl From<&Photo> for PhotoStub {
    fn from(from: &Photo) -> Self {
        Self {
            id: from.id.clone(),
            url: from.url.clone(),
            caption: from.caption.clone(),
            taken_at: from.taken_at.map(Timestamp::to_rfc3339),
        }
    }
}

/// One element of a section, discriminated by its `type` tag.
///
/// Every consumer has to handle all variants exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Single {
        id: Id,
        photos: Vec<PhotoStub>,
    },
    Double {
        id: Id,
        photos: Vec<PhotoStub>,
    },
    Triple {
        id: Id,
        photos: Vec<PhotoStub>,
    },
    Quote {
        id: Id,
        content: String,
        date: String,
    },
    Summary {
        id: Id,
        content: String,
        date: String,
    },
}

impl ContentBlock {
    pub fn photo_group(id: Id, kind: PhotoGroupKind, photos: Vec<PhotoStub>) -> Self {
        match kind {
            PhotoGroupKind::Single => Self::Single { id, photos },
            PhotoGroupKind::Double => Self::Double { id, photos },
            PhotoGroupKind::Triple => Self::Triple { id, photos },
        }
    }

    pub fn text(id: Id, kind: NoteKind, content: String, date: String) -> Self {
        match kind {
            NoteKind::Quote => Self::Quote { id, content, date },
            NoteKind::Summary => Self::Summary { id, content, date },
        }
    }

    pub fn id(&self) -> &Id {
        match self {
            Self::Single { id, .. }
            | Self::Double { id, .. }
            | Self::Triple { id, .. }
            | Self::Quote { id, .. }
            | Self::Summary { id, .. } => id,
        }
    }

    pub fn photo_group_kind(&self) -> Option<PhotoGroupKind> {
        match self {
            Self::Single { .. } => Some(PhotoGroupKind::Single),
            Self::Double { .. } => Some(PhotoGroupKind::Double),
            Self::Triple { .. } => Some(PhotoGroupKind::Triple),
            Self::Quote { .. } | Self::Summary { .. } => None,
        }
    }

    pub fn photos(&self) -> Option<&[PhotoStub]> {
        match self {
            Self::Single { photos, .. }
            | Self::Double { photos, .. }
            | Self::Triple { photos, .. } => Some(photos),
            Self::Quote { .. } | Self::Summary { .. } => None,
        }
    }

    pub fn photos_mut(&mut self) -> Option<&mut Vec<PhotoStub>> {
        match self {
            Self::Single { photos, .. }
            | Self::Double { photos, .. }
            | Self::Triple { photos, .. } => Some(photos),
            Self::Quote { .. } | Self::Summary { .. } => None,
        }
    }
}
