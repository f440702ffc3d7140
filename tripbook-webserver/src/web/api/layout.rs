use super::*;

#[put(
    "/trips/<trip_id>/layout",
    format = "application/json",
    data = "<layout>"
)]
pub fn put_layout(
    db: sqlite::Connections,
    account: Account,
    trip_id: String,
    layout: JsonResult<json::SaveLayout>,
) -> Result<json::Layout> {
    let sections = layout
        .map_err(|err| {
            debug!("Invalid layout document: {err:?}");
            err
        })?
        .into_inner()
        .sections;
    let saved = usecases::save_layout(&db.exclusive()?, &trip_id, account.id(), sections)?;
    Ok(Json(saved.into()))
}

#[get("/trips/<trip_id>/layout?<token>")]
pub fn get_layout(
    db: sqlite::Connections,
    auth: Auth,
    trip_id: String,
    token: Option<String>,
) -> Result<Vec<json::Section>> {
    let sections = usecases::load_layout(
        &db.shared()?,
        &trip_id,
        auth.user_id().ok(),
        token.as_deref(),
    )?;
    Ok(Json(sections))
}
