use super::*;

impl<'a> TripRepo for DbReadOnly<'a> {
    fn create_trip(&self, _trip: &Trip) -> Result<()> {
        unreachable!();
    }

    fn get_trip(&self, id: &str) -> Result<Trip> {
        get_trip(&mut self.conn.borrow_mut(), id)
    }

    fn get_trip_by_share_token(&self, token: &str) -> Result<Trip> {
        get_trip_by_share_token(&mut self.conn.borrow_mut(), token)
    }

    fn trips_of_user(&self, user_id: &str) -> Result<Vec<Trip>> {
        trips_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> TripRepo for DbReadWrite<'a> {
    fn create_trip(&self, trip: &Trip) -> Result<()> {
        create_trip(&mut self.conn.borrow_mut(), trip)
    }

    fn get_trip(&self, id: &str) -> Result<Trip> {
        get_trip(&mut self.conn.borrow_mut(), id)
    }

    fn get_trip_by_share_token(&self, token: &str) -> Result<Trip> {
        get_trip_by_share_token(&mut self.conn.borrow_mut(), token)
    }

    fn trips_of_user(&self, user_id: &str) -> Result<Vec<Trip>> {
        trips_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> TripRepo for DbConnection<'a> {
    fn create_trip(&self, trip: &Trip) -> Result<()> {
        create_trip(&mut self.conn.borrow_mut(), trip)
    }

    fn get_trip(&self, id: &str) -> Result<Trip> {
        get_trip(&mut self.conn.borrow_mut(), id)
    }

    fn get_trip_by_share_token(&self, token: &str) -> Result<Trip> {
        get_trip_by_share_token(&mut self.conn.borrow_mut(), token)
    }

    fn trips_of_user(&self, user_id: &str) -> Result<Vec<Trip>> {
        trips_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

fn create_trip(conn: &mut SqliteConnection, t: &Trip) -> Result<()> {
    let new_trip = models::NewTrip::from(t);
    diesel::insert_into(schema::trips::table)
        .values(&new_trip)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_trip(conn: &mut SqliteConnection, id: &str) -> Result<Trip> {
    use schema::trips::dsl;
    dsl::trips
        .filter(dsl::id.eq(id))
        .first::<models::TripEntity>(conn)
        .map_err(from_diesel_err)?
        .try_into()
        .map_err(repo::Error::Other)
}

fn get_trip_by_share_token(conn: &mut SqliteConnection, token: &str) -> Result<Trip> {
    use schema::trips::dsl;
    dsl::trips
        .filter(dsl::share_token.eq(token))
        .first::<models::TripEntity>(conn)
        .map_err(from_diesel_err)?
        .try_into()
        .map_err(repo::Error::Other)
}

fn trips_of_user(conn: &mut SqliteConnection, user_id: &str) -> Result<Vec<Trip>> {
    use schema::trips::dsl;
    dsl::trips
        .filter(dsl::user_id.eq(user_id))
        .order(dsl::start_date.desc())
        .load::<models::TripEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|entity| entity.try_into().map_err(repo::Error::Other))
        .collect()
}
