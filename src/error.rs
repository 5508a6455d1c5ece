//! Error types for the inventory API
//!
//! Every handler failure funnels through `InventoryError`, whose
//! `IntoResponse` impl fixes the status code and body shape clients see.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::ItemSnapshot;
use crate::store::StoreError;

// == Inventory Error Enum ==
/// Unified error type for the inventory API.
#[derive(Error, Debug)]
pub enum InventoryError {
    /// No bearer token on the request
    #[error("Authentication credentials were not provided.")]
    NotAuthenticated,

    /// Bearer token present but unusable (bad signature, expired, wrong type)
    #[error("Given token not valid for any token type")]
    InvalidToken,

    /// Token endpoint rejected the username/password pair
    #[error("No active account found with the given credentials")]
    InvalidCredentials,

    /// Create payload failed a field rule
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Create collided with an existing item name
    #[error("Item already exists: {}", .0.name)]
    AlreadyExists(ItemSnapshot),

    /// Unknown item id, or a detail payload failed a field rule
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Entity store failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        match self {
            InventoryError::NotAuthenticated
            | InventoryError::InvalidToken
            | InventoryError::InvalidCredentials => {
                let body = Json(json!({ "detail": self.to_string() }));
                (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, "Bearer")],
                    body,
                )
                    .into_response()
            }
            InventoryError::InvalidPayload(msg) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "INVALID_PAYLOAD": msg })),
            )
                .into_response(),
            InventoryError::AlreadyExists(snapshot) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "item_already_exists": snapshot })),
            )
                .into_response(),
            InventoryError::InvalidRequest(msg) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "INVALID_REQUEST": msg })),
            )
                .into_response(),
            InventoryError::Store(err) => {
                tracing::error!("entity store failure: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
            InventoryError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": msg })),
            )
                .into_response(),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the inventory API.
pub type Result<T> = std::result::Result<T, InventoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_authenticated_response() {
        let response = InventoryError::NotAuthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[header::WWW_AUTHENTICATE], "Bearer");

        let json = body_json(response).await;
        assert_eq!(
            json["detail"],
            "Authentication credentials were not provided."
        );
    }

    #[tokio::test]
    async fn test_invalid_payload_response() {
        let response =
            InventoryError::InvalidPayload("name key is missing in the payload.".into())
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["INVALID_PAYLOAD"], "name key is missing in the payload.");
    }

    #[tokio::test]
    async fn test_already_exists_carries_snapshot() {
        let snapshot = ItemSnapshot {
            id: 3,
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            stock_count: 10,
        };
        let response = InventoryError::AlreadyExists(snapshot).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["item_already_exists"]["id"], 3);
        assert_eq!(json["item_already_exists"]["name"], "Widget");
    }

    #[tokio::test]
    async fn test_invalid_request_is_not_found() {
        let response = InventoryError::InvalidRequest("Item not found.".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["INVALID_REQUEST"], "Item not found.");
    }

    #[tokio::test]
    async fn test_store_error_hides_detail() {
        let err = StoreError::Unexpected(anyhow::anyhow!("disk on fire"));
        let response = InventoryError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], "internal server error");
    }
}
