//! Entity -> JSON conversions.

use tripbook_entities::{country, note, photo, time, trip};

use super::*;

impl From<trip::Trip> for Trip {
    fn from(from: trip::Trip) -> Self {
        let trip::Trip {
            id,
            owner,
            title,
            description,
            location,
            start_date,
            end_date,
            share_token,
            created_at,
        } = from;
        Self {
            id: id.into(),
            user_id: owner.into(),
            title,
            description,
            location,
            start_date: time::format_date(start_date),
            end_date: end_date.map(time::format_date),
            share_link: share_token.into(),
            created_at: created_at.to_rfc3339(),
        }
    }
}

impl From<photo::Photo> for Photo {
    fn from(from: photo::Photo) -> Self {
        let photo::Photo {
            id,
            trip_id,
            url,
            caption,
            taken_at,
            sort_order,
            created_at,
        } = from;
        Self {
            id: id.into(),
            trip_id: trip_id.into(),
            url,
            caption,
            taken_at: taken_at.map(time::Timestamp::to_rfc3339),
            order: sort_order,
            created_at: created_at.to_rfc3339(),
        }
    }
}

impl From<country::Country> for Country {
    fn from(from: country::Country) -> Self {
        let country::Country {
            id,
            trip_id,
            code,
            name,
        } = from;
        Self {
            id: id.into(),
            trip_id: trip_id.into(),
            code: code.into(),
            name,
        }
    }
}

impl From<note::Note> for Note {
    fn from(from: note::Note) -> Self {
        let note::Note {
            id,
            trip_id,
            kind,
            content,
            date,
        } = from;
        Self {
            id: id.into(),
            trip_id: trip_id.into(),
            content,
            kind: kind.to_string(),
            date: date.to_rfc3339(),
        }
    }
}

impl From<tripbook_entities::layout::Layout> for Layout {
    fn from(from: tripbook_entities::layout::Layout) -> Self {
        let tripbook_entities::layout::Layout {
            id,
            trip_id,
            sections,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            trip_id: trip_id.into(),
            content: sections,
            updated_at: updated_at.to_rfc3339(),
        }
    }
}
