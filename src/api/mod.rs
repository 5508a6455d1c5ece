//! API Module
//!
//! HTTP handlers and routing for the inventory REST API.
//!
//! # Endpoints
//! - `POST /items/` - Create an item
//! - `GET /items/:item_id/` - Item details (cache first)
//! - `PUT /items/:item_id/` - Replace an item's fields
//! - `DELETE /items/:item_id/` - Delete an item
//! - `POST /get_jwt_token/` - Obtain an access token
//! - `GET /stats` - Item cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
