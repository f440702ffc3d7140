use super::*;

fn account_user(account: &Account) -> result::Result<e::User, ApiError> {
    let email = account
        .email()
        .ok_or(ParameterError::EmailAddress)?
        .parse::<e::EmailAddress>()
        .map_err(ParameterError::from)?;
    Ok(e::User {
        id: account.id().into(),
        email,
        name: account.name().unwrap_or_default().to_owned(),
    })
}

#[post("/trips", format = "application/json", data = "<new_trip>")]
pub fn post_trip(
    db: sqlite::Connections,
    account: Account,
    new_trip: JsonResult<json::NewTrip>,
) -> Result<json::Trip> {
    let new_trip = from_json::try_new_trip(new_trip?.into_inner())?;
    let owner = account_user(&account)?;
    let trip = usecases::create_trip(&db.exclusive()?, owner, new_trip)?;
    Ok(Json(trip.into()))
}

#[get("/trips")]
pub fn get_trips(db: sqlite::Connections, account: Account) -> Result<Vec<json::Trip>> {
    let trips = usecases::list_trips(&db.shared()?, account.id())?;
    Ok(Json(trips.into_iter().map(Into::into).collect()))
}

#[get("/trips/<trip_id>")]
pub fn get_trip(
    db: sqlite::Connections,
    account: Account,
    trip_id: String,
) -> Result<json::TripDetails> {
    let details = usecases::get_trip(&db.shared()?, &trip_id, account.id())?;
    Ok(Json(to_json::trip_details(details)))
}
