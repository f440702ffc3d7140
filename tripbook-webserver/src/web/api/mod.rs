use std::{fmt::Display, result};

use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::Status,
    post, put,
    response::{self, Responder},
    routes, Route,
};

use super::{guards::*, sqlite};
use crate::adapters::json::{self, from_json, to_json};
use tripbook_boundary::Error as JsonErrorResponse;
use tripbook_core::{entities as e, usecases};

mod countries;
mod error;
mod layout;
mod notes;
mod photos;
pub mod share;
mod trips;

pub use self::error::Error as ApiError;
use self::error::ParameterError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type StatusResult = result::Result<Status, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   trips   --- //
        trips::post_trip,
        trips::get_trips,
        trips::get_trip,
        // ---   photos   --- //
        photos::post_photo,
        photos::put_photos_reorder,
        // ---   countries   --- //
        countries::post_country,
        countries::delete_country,
        // ---   notes   --- //
        notes::post_note,
        notes::get_notes,
        notes::delete_note,
        // ---   layout   --- //
        layout::put_layout,
        layout::get_layout,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
