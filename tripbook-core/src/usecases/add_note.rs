use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewNote {
    pub kind: NoteKind,
    pub content: String,
}

pub fn add_note<R>(repo: &R, trip_id: &str, user_id: &str, new_note: NewNote) -> Result<Note>
where
    R: TripRepo + NoteRepo,
{
    let content = new_note.content.trim().to_owned();
    if content.is_empty() {
        return Err(Error::NoteContent);
    }
    let trip = super::authorize_trip_owner(repo, trip_id, user_id)?;

    let note = Note {
        id: Id::new(),
        trip_id: trip.id,
        kind: new_note.kind,
        content,
        date: Timestamp::now(),
    };
    repo.create_note(&note)?;
    Ok(note)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn add_note_rejects_empty_content() {
        let db = MockDb::default();
        db.seed_trip("t1", "alice");

        let empty = NewNote {
            kind: NoteKind::Quote,
            content: "\n".into(),
        };
        assert!(matches!(
            add_note(&db, "t1", "alice", empty),
            Err(Error::NoteContent)
        ));

        let note = add_note(
            &db,
            "t1",
            "alice",
            NewNote {
                kind: NoteKind::Summary,
                content: "A week of sunshine".into(),
            },
        )
        .unwrap();
        assert_eq!(note.kind, NoteKind::Summary);
    }
}
