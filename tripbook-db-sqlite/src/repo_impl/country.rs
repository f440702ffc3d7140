use super::*;

impl<'a> CountryRepo for DbReadOnly<'a> {
    fn create_country(&self, _country: &Country) -> Result<()> {
        unreachable!();
    }

    fn countries_of_trip(&self, trip_id: &str) -> Result<Vec<Country>> {
        countries_of_trip(&mut self.conn.borrow_mut(), trip_id)
    }

    fn delete_country(&self, _trip_id: &str, _country_id: &str) -> Result<()> {
        unreachable!();
    }
}

impl<'a> CountryRepo for DbReadWrite<'a> {
    fn create_country(&self, country: &Country) -> Result<()> {
        create_country(&mut self.conn.borrow_mut(), country)
    }

    fn countries_of_trip(&self, trip_id: &str) -> Result<Vec<Country>> {
        countries_of_trip(&mut self.conn.borrow_mut(), trip_id)
    }

    fn delete_country(&self, trip_id: &str, country_id: &str) -> Result<()> {
        delete_country(&mut self.conn.borrow_mut(), trip_id, country_id)
    }
}

impl<'a> CountryRepo for DbConnection<'a> {
    fn create_country(&self, country: &Country) -> Result<()> {
        create_country(&mut self.conn.borrow_mut(), country)
    }

    fn countries_of_trip(&self, trip_id: &str) -> Result<Vec<Country>> {
        countries_of_trip(&mut self.conn.borrow_mut(), trip_id)
    }

    fn delete_country(&self, trip_id: &str, country_id: &str) -> Result<()> {
        delete_country(&mut self.conn.borrow_mut(), trip_id, country_id)
    }
}

fn create_country(conn: &mut SqliteConnection, c: &Country) -> Result<()> {
    let new_country = models::NewCountry::from(c);
    diesel::insert_into(schema::countries::table)
        .values(&new_country)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn countries_of_trip(conn: &mut SqliteConnection, trip_id: &str) -> Result<Vec<Country>> {
    use schema::countries::dsl;
    dsl::countries
        .filter(dsl::trip_id.eq(trip_id))
        .load::<models::CountryEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|entity| entity.try_into().map_err(repo::Error::Other))
        .collect()
}

fn delete_country(conn: &mut SqliteConnection, trip_id: &str, country_id: &str) -> Result<()> {
    use schema::countries::dsl;
    let count = diesel::delete(
        dsl::countries
            .filter(dsl::id.eq(country_id))
            .filter(dsl::trip_id.eq(trip_id)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
