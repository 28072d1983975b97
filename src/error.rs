use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const NOT_FOUND_BODY: &str = "404 page not found";

/// Request-level errors
///
/// None of the handlers can fail on their own; these cover the requests the
/// router cannot dispatch and handlers that panic.
#[derive(Debug)]
pub enum ApiError {
    /// No route matches the request method and path
    NotFound,
    /// A handler panicked; carries the panic payload when it was a string
    Panic(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response(),
            ApiError::Panic(details) => {
                tracing::error!("Handler panicked: {}", details);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Turns a caught panic into a 500 response. Used by `CatchPanicLayer`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Panic(details).into_response()
}
