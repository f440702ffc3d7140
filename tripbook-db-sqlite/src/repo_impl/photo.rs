use super::*;

impl<'a> PhotoRepo for DbReadOnly<'a> {
    fn create_photo(&self, _photo: &Photo) -> Result<()> {
        unreachable!();
    }

    fn photos_of_trip(&self, trip_id: &str) -> Result<Vec<Photo>> {
        photos_of_trip(&mut self.conn.borrow_mut(), trip_id)
    }

    fn update_photo_sort_order(
        &self,
        _trip_id: &str,
        _photo_id: &str,
        _sort_order: i64,
    ) -> Result<()> {
        unreachable!();
    }
}

impl<'a> PhotoRepo for DbReadWrite<'a> {
    fn create_photo(&self, photo: &Photo) -> Result<()> {
        create_photo(&mut self.conn.borrow_mut(), photo)
    }

    fn photos_of_trip(&self, trip_id: &str) -> Result<Vec<Photo>> {
        photos_of_trip(&mut self.conn.borrow_mut(), trip_id)
    }

    fn update_photo_sort_order(
        &self,
        trip_id: &str,
        photo_id: &str,
        sort_order: i64,
    ) -> Result<()> {
        update_photo_sort_order(&mut self.conn.borrow_mut(), trip_id, photo_id, sort_order)
    }
}

impl<'a> PhotoRepo for DbConnection<'a> {
    fn create_photo(&self, photo: &Photo) -> Result<()> {
        create_photo(&mut self.conn.borrow_mut(), photo)
    }

    fn photos_of_trip(&self, trip_id: &str) -> Result<Vec<Photo>> {
        photos_of_trip(&mut self.conn.borrow_mut(), trip_id)
    }

    fn update_photo_sort_order(
        &self,
        trip_id: &str,
        photo_id: &str,
        sort_order: i64,
    ) -> Result<()> {
        update_photo_sort_order(&mut self.conn.borrow_mut(), trip_id, photo_id, sort_order)
    }
}

fn create_photo(conn: &mut SqliteConnection, p: &Photo) -> Result<()> {
    let new_photo = models::NewPhoto::from(p);
    diesel::insert_into(schema::photos::table)
        .values(&new_photo)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn photos_of_trip(conn: &mut SqliteConnection, trip_id: &str) -> Result<Vec<Photo>> {
    use schema::photos::dsl;
    Ok(dsl::photos
        .filter(dsl::trip_id.eq(trip_id))
        .order(dsl::created_at.desc())
        .load::<models::PhotoEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn update_photo_sort_order(
    conn: &mut SqliteConnection,
    trip_id: &str,
    photo_id: &str,
    sort_order: i64,
) -> Result<()> {
    use schema::photos::dsl;
    // The additional trip id filter guards against cross-trip tampering.
    let count = diesel::update(
        dsl::photos
            .filter(dsl::id.eq(photo_id))
            .filter(dsl::trip_id.eq(trip_id)),
    )
    .set(dsl::sort_order.eq(Some(sort_order)))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
