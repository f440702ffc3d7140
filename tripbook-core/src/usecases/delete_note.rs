use super::prelude::*;

/// Deletes a note, scoped to the given trip.
pub fn delete_note<R>(repo: &R, trip_id: &str, note_id: &str, user_id: &str) -> Result<()>
where
    R: TripRepo + NoteRepo,
{
    super::authorize_trip_owner(repo, trip_id, user_id)?;
    Ok(repo.delete_note(trip_id, note_id)?)
}
