use utoipa::OpenApi;

use crate::handlers;
use crate::models::MessageResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "pong-server API",
        version = "0.1.0",
        description = "Answers GET, DELETE and POST on /ping with a fixed pong message"
    ),
    paths(
        handlers::ping::get_ping,
        handlers::ping::delete_ping,
        handlers::ping::post_ping
    ),
    components(schemas(MessageResponse)),
    tags(
        (name = "ping", description = "Ping operations")
    )
)]
pub struct ApiDoc;

/// Log every documented route, one line per method.
pub fn log_routes() {
    for (method, path) in documented_routes() {
        tracing::info!("Route registered: {:<6} {}", method, path);
    }
}

fn documented_routes() -> Vec<(&'static str, String)> {
    let doc = ApiDoc::openapi();
    let mut routes = Vec::new();

    for (path, item) in doc.paths.paths.iter() {
        let methods = [
            ("GET", item.get.is_some()),
            ("DELETE", item.delete.is_some()),
            ("POST", item.post.is_some()),
        ];
        for (method, present) in methods {
            if present {
                routes.push((method, path.clone()));
            }
        }
    }

    routes
}
