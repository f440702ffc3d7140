use anyhow::anyhow;
use rocket::FromForm;

use super::*;

#[post(
    "/trips/<trip_id>/notes",
    format = "application/json",
    data = "<new_note>"
)]
pub fn post_note(
    db: sqlite::Connections,
    account: Account,
    trip_id: String,
    new_note: JsonResult<json::NewNote>,
) -> Result<json::Note> {
    let new_note = from_json::try_new_note(new_note?.into_inner())?;
    let note = usecases::add_note(&db.exclusive()?, &trip_id, account.id(), new_note)?;
    Ok(Json(note.into()))
}

#[get("/trips/<trip_id>/notes")]
pub fn get_notes(
    db: sqlite::Connections,
    account: Account,
    trip_id: String,
) -> Result<Vec<json::Note>> {
    let notes = usecases::list_notes(&db.shared()?, &trip_id, account.id())?;
    Ok(Json(notes.into_iter().map(Into::into).collect()))
}

#[derive(Debug, FromForm)]
pub struct NoteQuery {
    #[field(name = "noteId")]
    note_id: Option<String>,
}

#[delete("/trips/<trip_id>/notes?<query..>")]
pub fn delete_note(
    db: sqlite::Connections,
    account: Account,
    trip_id: String,
    query: NoteQuery,
) -> StatusResult {
    let Some(note_id) = query.note_id else {
        return Err(ApiError::OtherWithStatus(
            anyhow!("Note ID is required"),
            Status::BadRequest,
        ));
    };
    usecases::delete_note(&db.exclusive()?, &trip_id, &note_id, account.id())?;
    Ok(Status::NoContent)
}
