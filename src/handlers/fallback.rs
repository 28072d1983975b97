use crate::error::ApiError;
use crate::routes;
use axum::{
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

/// Fallback for every request no route matches
///
/// A path with one trailing slash whose trimmed form is registered for the
/// method is redirected there: 301 for GET, 307 otherwise so the client
/// repeats the same method. Anything else is a plain 404, including a known
/// path requested with an unregistered method.
pub async fn not_found(method: Method, uri: Uri) -> Response {
    match trailing_slash_redirect(&method, &uri) {
        Some(location) => {
            let status = if method == Method::GET {
                StatusCode::MOVED_PERMANENTLY
            } else {
                StatusCode::TEMPORARY_REDIRECT
            };
            tracing::debug!("Redirecting {} {} to {}", method, uri, location);
            (status, [(header::LOCATION, location)]).into_response()
        }
        None => {
            tracing::debug!("No route for {} {}", method, uri);
            ApiError::NotFound.into_response()
        }
    }
}

fn trailing_slash_redirect(method: &Method, uri: &Uri) -> Option<String> {
    let path = uri.path();
    if path == "/" {
        return None;
    }

    let trimmed = path.strip_suffix('/')?;
    if !routes::is_registered(method, trimmed) {
        return None;
    }

    Some(match uri.query() {
        Some(query) => format!("{}?{}", trimmed, query),
        None => trimmed.to_string(),
    })
}
