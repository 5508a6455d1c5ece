//! Inventory API - inventory management REST service
//!
//! JWT-protected CRUD over inventory items, backed by an entity store and a
//! read-through snapshot cache keyed by item id.

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;
pub mod validation;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
