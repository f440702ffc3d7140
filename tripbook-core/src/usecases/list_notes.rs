use super::prelude::*;

/// All notes of a trip, newest first. Restricted to the trip's owner.
pub fn list_notes<R>(repo: &R, trip_id: &str, user_id: &str) -> Result<Vec<Note>>
where
    R: TripRepo + NoteRepo,
{
    super::authorize_trip_owner(repo, trip_id, user_id)?;
    Ok(repo.notes_of_trip(trip_id)?)
}
