use super::prelude::*;

/// All trips of the caller, most recently started first.
pub fn list_trips<R: TripRepo>(repo: &R, user_id: &str) -> Result<Vec<Trip>> {
    Ok(repo.trips_of_user(user_id)?)
}
