use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewTrip {
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
}

/// Creates a trip owned by the caller.
///
/// The caller's account is mirrored into the local user table first, so
/// the first authenticated action implicitly registers the user.
pub fn create_trip<R>(repo: &R, owner: User, new_trip: NewTrip) -> Result<Trip>
where
    R: UserRepo + TripRepo,
{
    let NewTrip {
        title,
        description,
        location,
        start_date,
        end_date,
    } = new_trip;

    let title = title.trim().to_owned();
    if title.is_empty() {
        return Err(Error::Title);
    }
    let location = location.trim().to_owned();
    if location.is_empty() {
        return Err(Error::Location);
    }

    repo.create_or_update_user(&owner)?;

    let trip = Trip {
        id: Id::new(),
        owner: owner.id,
        title,
        description: description.filter(|d| !d.trim().is_empty()),
        location,
        start_date,
        end_date,
        share_token: ShareToken::new(),
        created_at: Timestamp::now(),
    };
    log::debug!("Creating trip '{}' for user {}", trip.title, trip.owner);
    repo.create_trip(&trip)?;
    Ok(trip)
}
