use super::prelude::*;
use crate::book;

#[derive(Debug, Clone)]
pub struct SharedBook {
    pub trip: Trip,
    pub countries: Vec<Country>,
    pub sections: Vec<Section>,
}

/// Resolves the public, read-only book view behind a share token.
///
/// A saved layout is rendered verbatim. Without one, a default
/// arrangement is synthesized from the trip's photos and notes.
pub fn shared_book<R>(repo: &R, share_token: &str) -> Result<SharedBook>
where
    R: TripRepo + PhotoRepo + CountryRepo + NoteRepo + LayoutRepo,
{
    let trip = repo.get_trip_by_share_token(share_token)?;
    let countries = repo.countries_of_trip(trip.id.as_str())?;
    let sections = match repo.try_get_layout(trip.id.as_str())? {
        Some(layout) => layout.sections,
        None => {
            let photos = repo.photos_of_trip(trip.id.as_str())?;
            let notes = repo.notes_of_trip(trip.id.as_str())?;
            book::default_sections(&photos, &notes)
        }
    };
    Ok(SharedBook {
        trip,
        countries,
        sections,
    })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn unknown_token_is_not_found() {
        let db = MockDb::default();
        db.seed_trip("t1", "alice");
        assert!(matches!(
            shared_book(&db, "no-such-token"),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn without_layout_a_default_section_is_synthesized() {
        let db = MockDb::default();
        let trip = db.seed_trip("t1", "alice");
        db.seed_photo("p1", "t1");
        db.seed_photo("p2", "t1");
        db.seed_note("n1", "t1", NoteKind::Quote);

        let book = shared_book(&db, trip.share_token.as_str()).unwrap();
        assert_eq!(book.sections.len(), 1);

        let content = &book.sections[0].content;
        assert_eq!(content.len(), 2);
        assert_eq!(
            content[0].photo_group_kind(),
            Some(PhotoGroupKind::Triple)
        );
        assert_eq!(content[0].photos().unwrap().len(), 2);
        assert!(matches!(content[1], ContentBlock::Quote { .. }));
    }

    #[test]
    fn saved_layout_is_rendered_verbatim() {
        let db = MockDb::default();
        let trip = db.seed_trip("t1", "alice");
        db.seed_photo("p1", "t1");
        let sections = vec![Section {
            id: "s1".into(),
            title: "Handpicked".into(),
            content: vec![],
        }];
        db.save_layout(&"t1".into(), &sections, Timestamp::now())
            .unwrap();

        let book = shared_book(&db, trip.share_token.as_str()).unwrap();
        assert_eq!(book.sections, sections);
    }
}
