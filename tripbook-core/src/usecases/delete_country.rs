use super::prelude::*;

/// Deletes a country from a trip. The country has to belong to the
/// named trip, otherwise nothing is deleted and `NotFound` is returned.
pub fn delete_country<R>(repo: &R, trip_id: &str, country_id: &str, user_id: &str) -> Result<()>
where
    R: TripRepo + CountryRepo,
{
    super::authorize_trip_owner(repo, trip_id, user_id)?;
    Ok(repo.delete_country(trip_id, country_id)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn country_of_another_trip_is_not_found_and_kept() {
        let db = MockDb::default();
        db.seed_trip("t1", "alice");
        db.seed_trip("t2", "alice");
        db.seed_country("c1", "t2", "IT", "Italy");

        assert!(matches!(
            delete_country(&db, "t1", "c1", "alice"),
            Err(Error::Repo(RepoError::NotFound))
        ));
        assert_eq!(db.countries.borrow().len(), 1);

        delete_country(&db, "t2", "c1", "alice").unwrap();
        assert!(db.countries.borrow().is_empty());
    }
}
