use super::*;

impl<'a> NoteRepo for DbReadOnly<'a> {
    fn create_note(&self, _note: &Note) -> Result<()> {
        unreachable!();
    }

    fn notes_of_trip(&self, trip_id: &str) -> Result<Vec<Note>> {
        notes_of_trip(&mut self.conn.borrow_mut(), trip_id)
    }

    fn delete_note(&self, _trip_id: &str, _note_id: &str) -> Result<()> {
        unreachable!();
    }
}

impl<'a> NoteRepo for DbReadWrite<'a> {
    fn create_note(&self, note: &Note) -> Result<()> {
        create_note(&mut self.conn.borrow_mut(), note)
    }

    fn notes_of_trip(&self, trip_id: &str) -> Result<Vec<Note>> {
        notes_of_trip(&mut self.conn.borrow_mut(), trip_id)
    }

    fn delete_note(&self, trip_id: &str, note_id: &str) -> Result<()> {
        delete_note(&mut self.conn.borrow_mut(), trip_id, note_id)
    }
}

impl<'a> NoteRepo for DbConnection<'a> {
    fn create_note(&self, note: &Note) -> Result<()> {
        create_note(&mut self.conn.borrow_mut(), note)
    }

    fn notes_of_trip(&self, trip_id: &str) -> Result<Vec<Note>> {
        notes_of_trip(&mut self.conn.borrow_mut(), trip_id)
    }

    fn delete_note(&self, trip_id: &str, note_id: &str) -> Result<()> {
        delete_note(&mut self.conn.borrow_mut(), trip_id, note_id)
    }
}

fn create_note(conn: &mut SqliteConnection, n: &Note) -> Result<()> {
    let new_note = models::NewNote::from(n);
    diesel::insert_into(schema::notes::table)
        .values(&new_note)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn notes_of_trip(conn: &mut SqliteConnection, trip_id: &str) -> Result<Vec<Note>> {
    use schema::notes::dsl;
    dsl::notes
        .filter(dsl::trip_id.eq(trip_id))
        .order(dsl::date.desc())
        .load::<models::NoteEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|entity| entity.try_into().map_err(repo::Error::Other))
        .collect()
}

fn delete_note(conn: &mut SqliteConnection, trip_id: &str, note_id: &str) -> Result<()> {
    use schema::notes::dsl;
    let count = diesel::delete(
        dsl::notes
            .filter(dsl::id.eq(note_id))
            .filter(dsl::trip_id.eq(trip_id)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
