use super::*;

#[post(
    "/trips/<trip_id>/countries",
    format = "application/json",
    data = "<new_country>"
)]
pub fn post_country(
    db: sqlite::Connections,
    account: Account,
    trip_id: String,
    new_country: JsonResult<json::NewCountry>,
) -> Result<json::Country> {
    let new_country = from_json::new_country(new_country?.into_inner());
    let country = usecases::add_country(&db.exclusive()?, &trip_id, account.id(), new_country)?;
    Ok(Json(country.into()))
}

#[delete("/trips/<trip_id>/countries/<country_id>")]
pub fn delete_country(
    db: sqlite::Connections,
    account: Account,
    trip_id: String,
    country_id: String,
) -> Result<()> {
    usecases::delete_country(&db.exclusive()?, &trip_id, &country_id, account.id())?;
    Ok(Json(()))
}
