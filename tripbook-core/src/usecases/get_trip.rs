use super::prelude::*;

#[derive(Debug, Clone)]
pub struct TripDetails {
    pub trip: Trip,
    pub photos: Vec<Photo>,
    pub countries: Vec<Country>,
}

/// Loads a single trip with its photos (newest first) and countries.
pub fn get_trip<R>(repo: &R, trip_id: &str, user_id: &str) -> Result<TripDetails>
where
    R: TripRepo + PhotoRepo + CountryRepo,
{
    let trip = super::authorize_trip_owner(repo, trip_id, user_id)?;
    let photos = repo.photos_of_trip(trip_id)?;
    let countries = repo.countries_of_trip(trip_id)?;
    Ok(TripDetails {
        trip,
        photos,
        countries,
    })
}
