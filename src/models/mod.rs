//! Domain and transport models for the inventory API
//!
//! `item` holds the inventory entity and its serialized snapshot, while
//! `requests`/`responses` define the HTTP bodies.

pub mod item;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use item::{InventoryItem, ItemSnapshot, NewItem};
pub use requests::{ItemPayload, PayloadError, TokenRequest};
pub use responses::{
    HealthResponse, ItemDetailsResponse, StatsResponse, SuccessResponse, TokenResponse,
    UpdatedItemResponse,
};
