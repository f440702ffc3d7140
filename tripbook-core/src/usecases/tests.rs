use std::cell::{Cell, RefCell};

use time::macros::date;

use super::prelude::*;

type RepoResult<T> = std::result::Result<T, RepoError>;

/// In-memory stand-in for the SQLite repositories.
#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub trips: RefCell<Vec<Trip>>,
    pub photos: RefCell<Vec<Photo>>,
    pub countries: RefCell<Vec<Country>>,
    pub notes: RefCell<Vec<Note>>,
    pub layouts: RefCell<Vec<Layout>>,
    clock: Cell<i64>,
}

impl MockDb {
    pub fn user(id: &str) -> User {
        User {
            id: id.into(),
            email: format!("{id}@example.com").parse().unwrap(),
            name: id.to_owned(),
        }
    }

    fn tick(&self) -> Timestamp {
        let millis = self.clock.get() + 1;
        self.clock.set(millis);
        Timestamp::from_millis(millis)
    }

    pub fn seed_trip(&self, id: &str, owner: &str) -> Trip {
        let trip = Trip {
            id: id.into(),
            owner: owner.into(),
            title: format!("Trip {id}"),
            description: None,
            location: "Somewhere".into(),
            start_date: date!(2024 - 05 - 01),
            end_date: None,
            share_token: ShareToken::new(),
            created_at: self.tick(),
        };
        self.trips.borrow_mut().push(trip.clone());
        trip
    }

    pub fn seed_photo(&self, id: &str, trip_id: &str) -> Photo {
        let photo = Photo {
            id: id.into(),
            trip_id: trip_id.into(),
            url: format!("https://cdn.example.com/{id}.jpg"),
            caption: None,
            taken_at: None,
            sort_order: None,
            created_at: self.tick(),
        };
        self.photos.borrow_mut().push(photo.clone());
        photo
    }

    pub fn seed_country(&self, id: &str, trip_id: &str, code: &str, name: &str) -> Country {
        let country = Country {
            id: id.into(),
            trip_id: trip_id.into(),
            code: code.parse().unwrap(),
            name: name.into(),
        };
        self.countries.borrow_mut().push(country.clone());
        country
    }

    pub fn seed_note(&self, id: &str, trip_id: &str, kind: NoteKind) -> Note {
        let note = Note {
            id: id.into(),
            trip_id: trip_id.into(),
            kind,
            content: format!("note {id}"),
            date: self.tick(),
        };
        self.notes.borrow_mut().push(note.clone());
        note
    }
}

impl UserRepo for MockDb {
    fn create_or_update_user(&self, user: &User) -> RepoResult<()> {
        let mut users = self.users.borrow_mut();
        if let Some(pos) = users.iter().position(|u| u.id == user.id) {
            users[pos] = user.clone();
        } else {
            users.push(user.clone());
        }
        Ok(())
    }

    fn try_get_user(&self, id: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.id.as_str() == id)
            .cloned())
    }
}

impl TripRepo for MockDb {
    fn create_trip(&self, trip: &Trip) -> RepoResult<()> {
        let mut trips = self.trips.borrow_mut();
        if trips.iter().any(|t| t.id == trip.id) {
            return Err(RepoError::AlreadyExists);
        }
        trips.push(trip.clone());
        Ok(())
    }

    fn get_trip(&self, id: &str) -> RepoResult<Trip> {
        self.trips
            .borrow()
            .iter()
            .find(|t| t.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn get_trip_by_share_token(&self, token: &str) -> RepoResult<Trip> {
        self.trips
            .borrow()
            .iter()
            .find(|t| t.share_token.as_str() == token)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn trips_of_user(&self, user_id: &str) -> RepoResult<Vec<Trip>> {
        let mut trips: Vec<_> = self
            .trips
            .borrow()
            .iter()
            .filter(|t| t.is_owned_by(user_id))
            .cloned()
            .collect();
        trips.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(trips)
    }
}

impl PhotoRepo for MockDb {
    fn create_photo(&self, photo: &Photo) -> RepoResult<()> {
        let mut photos = self.photos.borrow_mut();
        if photos.iter().any(|p| p.id == photo.id) {
            return Err(RepoError::AlreadyExists);
        }
        photos.push(photo.clone());
        Ok(())
    }

    fn photos_of_trip(&self, trip_id: &str) -> RepoResult<Vec<Photo>> {
        let mut photos: Vec<_> = self
            .photos
            .borrow()
            .iter()
            .filter(|p| p.trip_id.as_str() == trip_id)
            .cloned()
            .collect();
        photos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(photos)
    }

    fn update_photo_sort_order(
        &self,
        trip_id: &str,
        photo_id: &str,
        sort_order: i64,
    ) -> RepoResult<()> {
        let mut photos = self.photos.borrow_mut();
        let photo = photos
            .iter_mut()
            .find(|p| p.id.as_str() == photo_id && p.trip_id.as_str() == trip_id)
            .ok_or(RepoError::NotFound)?;
        photo.sort_order = Some(sort_order);
        Ok(())
    }
}

impl CountryRepo for MockDb {
    fn create_country(&self, country: &Country) -> RepoResult<()> {
        self.countries.borrow_mut().push(country.clone());
        Ok(())
    }

    fn countries_of_trip(&self, trip_id: &str) -> RepoResult<Vec<Country>> {
        Ok(self
            .countries
            .borrow()
            .iter()
            .filter(|c| c.trip_id.as_str() == trip_id)
            .cloned()
            .collect())
    }

    fn delete_country(&self, trip_id: &str, country_id: &str) -> RepoResult<()> {
        let mut countries = self.countries.borrow_mut();
        let pos = countries
            .iter()
            .position(|c| c.id.as_str() == country_id && c.trip_id.as_str() == trip_id)
            .ok_or(RepoError::NotFound)?;
        countries.remove(pos);
        Ok(())
    }
}

impl NoteRepo for MockDb {
    fn create_note(&self, note: &Note) -> RepoResult<()> {
        self.notes.borrow_mut().push(note.clone());
        Ok(())
    }

    fn notes_of_trip(&self, trip_id: &str) -> RepoResult<Vec<Note>> {
        let mut notes: Vec<_> = self
            .notes
            .borrow()
            .iter()
            .filter(|n| n.trip_id.as_str() == trip_id)
            .cloned()
            .collect();
        notes.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(notes)
    }

    fn delete_note(&self, trip_id: &str, note_id: &str) -> RepoResult<()> {
        let mut notes = self.notes.borrow_mut();
        let pos = notes
            .iter()
            .position(|n| n.id.as_str() == note_id && n.trip_id.as_str() == trip_id)
            .ok_or(RepoError::NotFound)?;
        notes.remove(pos);
        Ok(())
    }
}

impl LayoutRepo for MockDb {
    fn save_layout(
        &self,
        trip_id: &Id,
        sections: &[Section],
        updated_at: Timestamp,
    ) -> RepoResult<Layout> {
        let mut layouts = self.layouts.borrow_mut();
        if let Some(existing) = layouts.iter_mut().find(|l| &l.trip_id == trip_id) {
            existing.sections = sections.to_vec();
            existing.updated_at = updated_at;
            return Ok(existing.clone());
        }
        let layout = Layout {
            id: Id::new(),
            trip_id: trip_id.clone(),
            sections: sections.to_vec(),
            updated_at,
        };
        layouts.push(layout.clone());
        Ok(layout)
    }

    fn try_get_layout(&self, trip_id: &str) -> RepoResult<Option<Layout>> {
        Ok(self
            .layouts
            .borrow()
            .iter()
            .find(|l| l.trip_id.as_str() == trip_id)
            .cloned())
    }
}
