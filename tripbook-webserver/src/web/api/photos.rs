use super::*;

#[post("/photos", format = "application/json", data = "<new_photo>")]
pub fn post_photo(
    db: sqlite::Connections,
    account: Account,
    new_photo: JsonResult<json::NewPhoto>,
) -> Result<json::Photo> {
    let new_photo = from_json::new_photo(new_photo?.into_inner());
    let photo = usecases::add_photo(&db.exclusive()?, account.id(), new_photo)?;
    Ok(Json(photo.into()))
}

#[put(
    "/trips/<trip_id>/photos/reorder",
    format = "application/json",
    data = "<reorder>"
)]
pub fn put_photos_reorder(
    db: sqlite::Connections,
    account: Account,
    trip_id: String,
    reorder: JsonResult<json::ReorderPhotos>,
) -> result::Result<String, ApiError> {
    let orders = from_json::photo_sort_orders(reorder?.into_inner());
    let mut db = db.exclusive()?;
    // All updates apply atomically, a single failure reverts the batch.
    db.transaction(|conn| usecases::reorder_photos(conn, &trip_id, account.id(), &orders))?;
    Ok("Photos reordered successfully".to_string())
}
