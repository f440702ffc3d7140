use super::*;

pub fn routes() -> Vec<Route> {
    routes![get_shared_book]
}

/// Public, read-only book view behind the trip's share token.
#[get("/<token>")]
pub fn get_shared_book(db: sqlite::Connections, token: String) -> Result<json::SharedBook> {
    let book = usecases::shared_book(&db.shared()?, &token)?;
    Ok(Json(to_json::shared_book(book)))
}
