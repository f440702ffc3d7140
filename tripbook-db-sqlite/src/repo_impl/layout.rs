use super::*;

impl<'a> LayoutRepo for DbReadOnly<'a> {
    fn save_layout(
        &self,
        _trip_id: &Id,
        _sections: &[Section],
        _updated_at: Timestamp,
    ) -> Result<Layout> {
        unreachable!();
    }

    fn try_get_layout(&self, trip_id: &str) -> Result<Option<Layout>> {
        try_get_layout(&mut self.conn.borrow_mut(), trip_id)
    }
}

impl<'a> LayoutRepo for DbReadWrite<'a> {
    fn save_layout(
        &self,
        trip_id: &Id,
        sections: &[Section],
        updated_at: Timestamp,
    ) -> Result<Layout> {
        save_layout(&mut self.conn.borrow_mut(), trip_id, sections, updated_at)
    }

    fn try_get_layout(&self, trip_id: &str) -> Result<Option<Layout>> {
        try_get_layout(&mut self.conn.borrow_mut(), trip_id)
    }
}

impl<'a> LayoutRepo for DbConnection<'a> {
    fn save_layout(
        &self,
        trip_id: &Id,
        sections: &[Section],
        updated_at: Timestamp,
    ) -> Result<Layout> {
        save_layout(&mut self.conn.borrow_mut(), trip_id, sections, updated_at)
    }

    fn try_get_layout(&self, trip_id: &str) -> Result<Option<Layout>> {
        try_get_layout(&mut self.conn.borrow_mut(), trip_id)
    }
}

fn save_layout(
    conn: &mut SqliteConnection,
    trip_id: &Id,
    sections: &[Section],
    updated_at: Timestamp,
) -> Result<Layout> {
    use schema::layouts::dsl;
    let content =
        serde_json::to_string(sections).map_err(|err| repo::Error::Other(err.into()))?;
    let id = Id::new();
    let new_layout = models::NewLayout {
        id: id.as_str(),
        trip_id: trip_id.as_str(),
        content: &content,
        updated_at: updated_at.as_millis(),
    };
    diesel::insert_into(schema::layouts::table)
        .values(&new_layout)
        .on_conflict(dsl::trip_id)
        .do_update()
        .set((
            dsl::content.eq(&content),
            dsl::updated_at.eq(updated_at.as_millis()),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    try_get_layout(conn, trip_id.as_str())?.ok_or(repo::Error::NotFound)
}

fn try_get_layout(conn: &mut SqliteConnection, trip_id: &str) -> Result<Option<Layout>> {
    use schema::layouts::dsl;
    dsl::layouts
        .filter(dsl::trip_id.eq(trip_id))
        .first::<models::LayoutEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(|entity| entity.try_into().map_err(repo::Error::Other))
        .transpose()
}
