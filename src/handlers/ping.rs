use crate::models::MessageResponse;
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET /ping handler
///
/// Answers with status 100. The code is unusual for a final response but is
/// part of the route contract and is kept as is. Over a real HTTP/1.1
/// connection hyper replaces a final 1xx with an empty 500.
#[utoipa::path(
    get,
    path = routes::PING,
    responses(
        (status = 100, description = "Pong", body = MessageResponse)
    ),
    tag = "ping"
)]
pub async fn get_ping() -> (StatusCode, Json<MessageResponse>) {
    (StatusCode::CONTINUE, Json(MessageResponse::pong()))
}

/// DELETE /ping handler
#[utoipa::path(
    delete,
    path = routes::PING,
    responses(
        (status = 400, description = "Pong", body = MessageResponse)
    ),
    tag = "ping"
)]
pub async fn delete_ping() -> (StatusCode, Json<MessageResponse>) {
    (StatusCode::BAD_REQUEST, Json(MessageResponse::pong()))
}

/// POST /ping handler
#[utoipa::path(
    post,
    path = routes::PING,
    responses(
        (status = 500, description = "Pong", body = MessageResponse)
    ),
    tag = "ping"
)]
pub async fn post_ping() -> (StatusCode, Json<MessageResponse>) {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(MessageResponse::pong()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Method, Request},
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        Router::new().route(
            routes::PING,
            get(get_ping).delete(delete_ping).post(post_ping),
        )
    }

    async fn assert_pong(method: Method, expected: StatusCode) {
        let response = setup_test_app()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri("/ping")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), expected);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"message":"pong"}"#);
    }

    #[tokio::test]
    async fn test_get_ping_returns_continue() {
        assert_pong(Method::GET, StatusCode::CONTINUE).await;
    }

    #[tokio::test]
    async fn test_delete_ping_returns_bad_request() {
        assert_pong(Method::DELETE, StatusCode::BAD_REQUEST).await;
    }

    #[tokio::test]
    async fn test_post_ping_returns_internal_server_error() {
        assert_pong(Method::POST, StatusCode::INTERNAL_SERVER_ERROR).await;
    }

    #[tokio::test]
    async fn test_handlers_ignore_request_body_and_query() {
        let response = setup_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/ping?verbose=true")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"message":"ping"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: MessageResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json, MessageResponse::pong());
    }
}
