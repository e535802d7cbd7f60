pub mod articles;
pub mod authors;

use crate::presentation::http::error::{HttpError, HttpResult};
use axum::{
    Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
};

/// A body that cannot be parsed into the expected shape is a 400 before any
/// use-case call is made.
fn decode<T>(payload: Result<Json<T>, JsonRejection>) -> HttpResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|_| HttpError::bad_request("invalid or missing request body"))
}

/// Same for a path id that is not an integer.
fn decode_id(id: Result<Path<i64>, PathRejection>, entity: &str) -> HttpResult<i64> {
    id.map(|Path(id)| id)
        .map_err(|_| HttpError::bad_request(format!("invalid {entity} id")))
}
