use super::prelude::*;

/// Loads the trip and asserts that the given user owns it.
///
/// The single ownership guard applied by every trip-scoped operation:
/// a missing trip is `NotFound`, a foreign trip is `Unauthorized`.
pub fn authorize_trip_owner<R: TripRepo>(repo: &R, trip_id: &str, user_id: &str) -> Result<Trip> {
    let trip = repo.get_trip(trip_id)?;
    if !trip.is_owned_by(user_id) {
        log::debug!("User {user_id} does not own trip {trip_id}");
        return Err(Error::Unauthorized);
    }
    Ok(trip)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn owner_passes_others_are_rejected() {
        let db = MockDb::default();
        let trip = db.seed_trip("t1", "alice");

        assert_eq!(
            authorize_trip_owner(&db, "t1", "alice").unwrap().id,
            trip.id
        );
        assert!(matches!(
            authorize_trip_owner(&db, "t1", "bob"),
            Err(Error::Unauthorized)
        ));
        assert!(matches!(
            authorize_trip_owner(&db, "nope", "alice"),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
