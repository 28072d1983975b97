use axum::{
    Router,
    http::Method,
    routing::{MethodFilter, get},
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::error::handle_panic;
use crate::handlers::{delete_ping, get_ping, not_found, post_ping};

// Route path constants - single source of truth for all API paths

pub const PING: &str = "/ping";

/// Methods with a handler on `PING`. HEAD is not one of them.
pub const PING_METHODS: [Method; 3] = [Method::GET, Method::DELETE, Method::POST];

/// Returns true when `method` has a handler registered on `path`.
pub fn is_registered(method: &Method, path: &str) -> bool {
    match path {
        PING => PING_METHODS.contains(method),
        _ => false,
    }
}

/// Build the application router.
///
/// Every unmatched request, including a known path with an unregistered
/// method, goes to the not-found fallback. HEAD is routed there explicitly,
/// otherwise axum would answer it with the GET handler. Request logging and panic
/// recovery wrap all of it.
pub fn router() -> Router {
    let routes = Router::new()
        .route(
            PING,
            get(get_ping)
                .delete(delete_ping)
                .post(post_ping)
                .on(MethodFilter::HEAD, not_found)
                .fallback(not_found),
        )
        .fallback(not_found);

    with_default_middleware(routes)
}

/// Attach request logging and panic recovery.
pub fn with_default_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}
