//! Route handlers and the JSON envelopes they reply with.

pub mod courses;
pub mod health;
pub mod metrics;
pub mod students;

use axum::http::StatusCode;
use domain::{Registrar, Status};
use serde::Serialize;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub registrar: Registrar,
}

/// Reply to a listing endpoint.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub status: u16,
    pub total_count: usize,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn ok(data: Vec<T>) -> Self {
        Self {
            status: Status::Ok.code(),
            total_count: data.len(),
            data,
        }
    }
}

/// Reply carrying a status tag and a payload.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub status: u16,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(status: Status, data: T) -> Self {
        Self {
            status: status.code(),
            data,
        }
    }
}

/// Maps a registrar status tag onto the HTTP status line.
pub fn status_code(status: Status) -> StatusCode {
    match status {
        Status::Ok => StatusCode::OK,
        Status::Created => StatusCode::CREATED,
        Status::NoContent => StatusCode::NO_CONTENT,
        Status::Forbidden => StatusCode::FORBIDDEN,
    }
}
