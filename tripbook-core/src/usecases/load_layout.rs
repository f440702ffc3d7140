use super::prelude::*;

/// Returns the trip's book document, or an empty list of sections when
/// none has been saved yet.
///
/// Readable by the trip's owner, or by anyone presenting the trip's
/// share token (the read-only book view fetches through this path).
pub fn load_layout<R>(
    repo: &R,
    trip_id: &str,
    user_id: Option<&str>,
    share_token: Option<&str>,
) -> Result<Vec<Section>>
where
    R: TripRepo + LayoutRepo,
{
    let trip = repo.get_trip(trip_id)?;
    let is_owner = user_id.is_some_and(|id| trip.is_owned_by(id));
    let is_shared = share_token.is_some_and(|token| trip.share_token.as_str() == token);
    if !is_owner && !is_shared {
        return Err(Error::Unauthorized);
    }
    Ok(repo
        .try_get_layout(trip_id)?
        .map(|layout| layout.sections)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn missing_layout_reads_as_empty_sections() {
        let db = MockDb::default();
        db.seed_trip("t1", "alice");
        assert_eq!(load_layout(&db, "t1", Some("alice"), None).unwrap(), []);
    }

    #[test]
    fn share_token_grants_read_access() {
        let db = MockDb::default();
        let trip = db.seed_trip("t1", "alice");

        assert!(matches!(
            load_layout(&db, "t1", Some("bob"), None),
            Err(Error::Unauthorized)
        ));
        assert!(matches!(
            load_layout(&db, "t1", None, Some("wrong-token")),
            Err(Error::Unauthorized)
        ));
        assert!(load_layout(&db, "t1", None, Some(trip.share_token.as_str())).is_ok());
    }
}
