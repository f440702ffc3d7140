use super::prelude::*;

#[derive(Debug, Clone)]
pub struct PhotoSortOrder {
    pub photo_id: Id,
    pub sort_order: i64,
}

/// Applies a new manual order to the listed photos of a trip.
///
/// Each update is additionally scoped to the trip id, so a photo id
/// belonging to another trip aborts with `NotFound`. The caller is
/// expected to run this inside a single database transaction, turning
/// an abort into a rollback of the whole batch.
pub fn reorder_photos<R>(
    repo: &R,
    trip_id: &str,
    user_id: &str,
    orders: &[PhotoSortOrder],
) -> Result<usize>
where
    R: TripRepo + PhotoRepo,
{
    super::authorize_trip_owner(repo, trip_id, user_id)?;
    for order in orders {
        repo.update_photo_sort_order(trip_id, order.photo_id.as_str(), order.sort_order)?;
    }
    Ok(orders.len())
}
