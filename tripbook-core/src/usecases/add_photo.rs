use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewPhoto {
    pub trip_id: Id,
    pub url: String,
    pub caption: Option<String>,
}

/// Registers an uploaded photo with its trip.
///
/// The upload widget only reports the CDN URL, so `taken_at` is stamped
/// with the time of registration.
pub fn add_photo<R>(repo: &R, user_id: &str, new_photo: NewPhoto) -> Result<Photo>
where
    R: TripRepo + PhotoRepo,
{
    let NewPhoto {
        trip_id,
        url,
        caption,
    } = new_photo;

    let url = url.trim().to_owned();
    if url.is_empty() {
        return Err(Error::PhotoUrl);
    }
    let trip = super::authorize_trip_owner(repo, trip_id.as_str(), user_id)?;

    let now = Timestamp::now();
    let photo = Photo {
        id: Id::new(),
        trip_id: trip.id,
        url,
        caption: caption.filter(|c| !c.trim().is_empty()),
        taken_at: Some(now),
        sort_order: None,
        created_at: now,
    };
    repo.create_photo(&photo)?;
    Ok(photo)
}
