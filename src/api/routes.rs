//! API Routes
//!
//! Configures the Axum router with all inventory endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_item, delete_item, get_item, health_handler, obtain_token, stats_handler, update_item,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /items/` - Create an item
/// - `GET|PUT|DELETE /items/:item_id/` - Read, replace or delete an item
/// - `POST /get_jwt_token/` - Exchange credentials for an access token
/// - `GET /stats` - Item cache statistics
/// - `GET /health` - Health check endpoint
///
/// Item and token paths answer with or without the trailing slash.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let item_detail = || get(get_item).put(update_item).delete(delete_item);

    Router::new()
        .route("/items", post(create_item))
        .route("/items/", post(create_item))
        .route("/items/:item_id", item_detail())
        .route("/items/:item_id/", item_detail())
        .route("/get_jwt_token", post(obtain_token))
        .route("/get_jwt_token/", post(obtain_token))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::issue_token;
    use crate::config::Config;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> (Router, String) {
        let config = Config::default();
        let token = issue_token(&config.jwt_secret, "tester", 60).unwrap();
        (create_router(AppState::from_config(&config)), token)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (app, _) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_items_require_token() {
        let (app, _) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/items/1/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_create_without_trailing_slash() {
        let (app, token) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items")
                    .header("authorization", format!("Bearer {token}"))
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"name":"Widget","description":"A widget","stock_count":10}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let (app, token) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/items/42")
                    .header("authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
