use super::prelude::*;

/// Replaces the trip's book document wholesale.
///
/// Last write wins: there is no version check, two concurrent editors
/// silently overwrite each other's document.
pub fn save_layout<R>(
    repo: &R,
    trip_id: &str,
    user_id: &str,
    sections: Vec<Section>,
) -> Result<Layout>
where
    R: TripRepo + LayoutRepo,
{
    let trip = super::authorize_trip_owner(repo, trip_id, user_id)?;

    for block in sections.iter().flat_map(|section| section.content.iter()) {
        if let Some(kind) = block.photo_group_kind() {
            let capacity = kind.capacity();
            let photos = block.photos().map(<[PhotoStub]>::len).unwrap_or_default();
            if photos > capacity {
                return Err(Error::PhotoGroupCapacity { kind, capacity });
            }
        }
    }

    Ok(repo.save_layout(&trip.id, &sections, Timestamp::now())?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn stub(id: &str) -> PhotoStub {
        PhotoStub {
            id: id.into(),
            url: format!("https://cdn.example.com/{id}.jpg"),
            caption: None,
            taken_at: None,
        }
    }

    fn single_section(blocks: Vec<ContentBlock>) -> Vec<Section> {
        vec![Section {
            id: "s1".into(),
            title: "Day one".into(),
            content: blocks,
        }]
    }

    #[test]
    fn saved_document_reads_back_deep_equal() {
        let db = MockDb::default();
        db.seed_trip("t1", "alice");
        let sections = single_section(vec![
            ContentBlock::photo_group(
                "b1".into(),
                PhotoGroupKind::Double,
                vec![stub("p1"), stub("p2")],
            ),
            ContentBlock::text("b2".into(), NoteKind::Quote, "Bonjour".into(), "2024-05-01".into()),
        ]);

        let layout = save_layout(&db, "t1", "alice", sections.clone()).unwrap();
        assert_eq!(layout.sections, sections);
        assert_eq!(
            super::super::load_layout(&db, "t1", Some("alice"), None).unwrap(),
            sections
        );
    }

    #[test]
    fn saving_again_replaces_the_document() {
        let db = MockDb::default();
        db.seed_trip("t1", "alice");
        let first = single_section(vec![ContentBlock::photo_group(
            "b1".into(),
            PhotoGroupKind::Single,
            vec![stub("p1")],
        )]);
        let second = single_section(vec![]);

        let first_saved = save_layout(&db, "t1", "alice", first).unwrap();
        let second_saved = save_layout(&db, "t1", "alice", second.clone()).unwrap();
        assert_eq!(first_saved.id, second_saved.id);
        assert_eq!(second_saved.sections, second);
        assert_eq!(db.layouts.borrow().len(), 1);
    }

    #[test]
    fn reject_overfull_photo_group() {
        let db = MockDb::default();
        db.seed_trip("t1", "alice");
        let sections = single_section(vec![ContentBlock::photo_group(
            "b1".into(),
            PhotoGroupKind::Single,
            vec![stub("p1"), stub("p2")],
        )]);

        assert!(matches!(
            save_layout(&db, "t1", "alice", sections),
            Err(Error::PhotoGroupCapacity {
                kind: PhotoGroupKind::Single,
                capacity: 1,
            })
        ));
        // Nothing was written.
        assert!(db.layouts.borrow().is_empty());
    }
}
