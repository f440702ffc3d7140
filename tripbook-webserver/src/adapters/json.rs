pub use tripbook_boundary::*;

use tripbook_core::{entities as e, usecases};

pub mod from_json {
    //! JSON -> use case parameters

    use super::*;

    // NOTE:
    // We cannot impl TryFrom<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn try_new_trip(t: NewTrip) -> Result<usecases::NewTrip, usecases::Error> {
        let NewTrip {
            title,
            description,
            location,
            start_date,
            end_date,
            user_id: _,
        } = t;
        let start_date = e::parse_date(&start_date).map_err(|_| usecases::Error::StartDate)?;
        let end_date = end_date
            .as_deref()
            .filter(|date| !date.trim().is_empty())
            .map(|date| e::parse_date(date).map_err(|_| usecases::Error::EndDate))
            .transpose()?;
        Ok(usecases::NewTrip {
            title,
            description,
            location,
            start_date,
            end_date,
        })
    }

    pub fn new_photo(p: NewPhoto) -> usecases::NewPhoto {
        let NewPhoto {
            url,
            caption,
            trip_id,
        } = p;
        usecases::NewPhoto {
            trip_id: trip_id.into(),
            url,
            caption,
        }
    }

    pub fn try_new_note(n: NewNote) -> Result<usecases::NewNote, usecases::Error> {
        let NewNote { content, kind } = n;
        let kind = kind
            .parse::<e::NoteKind>()
            .map_err(|_| usecases::Error::NoteKind)?;
        Ok(usecases::NewNote { kind, content })
    }

    pub fn new_country(c: NewCountry) -> usecases::NewCountry {
        let NewCountry { code, name } = c;
        usecases::NewCountry { code, name }
    }

    pub fn photo_sort_orders(r: ReorderPhotos) -> Vec<usecases::PhotoSortOrder> {
        r.photos
            .into_iter()
            .map(|PhotoOrder { id, order }| usecases::PhotoSortOrder {
                photo_id: id.into(),
                sort_order: order,
            })
            .collect()
    }
}

pub mod to_json {
    //! Use case results -> JSON

    use super::*;

    pub fn trip_details(details: usecases::TripDetails) -> TripDetails {
        let usecases::TripDetails {
            trip,
            photos,
            countries,
        } = details;
        TripDetails {
            trip: trip.into(),
            photos: photos.into_iter().map(Into::into).collect(),
            countries: countries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn shared_book(book: usecases::SharedBook) -> SharedBook {
        let usecases::SharedBook {
            trip,
            countries,
            sections,
        } = book;
        SharedBook {
            title: trip.title,
            location: trip.location,
            start_date: e::format_date(trip.start_date),
            end_date: trip.end_date.map(e::format_date),
            countries: countries.into_iter().map(Into::into).collect(),
            sections,
        }
    }
}
