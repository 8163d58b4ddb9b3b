use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body for documented API operations.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error family, e.g. "InternalError"
    pub name: String,
    /// Code-style message key, e.g. "repository.unavailable"
    pub message: String,
}

/// Maps a domain error onto an HTTP status and error body.
pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
