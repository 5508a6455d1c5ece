//! Request DTOs for the inventory API
//!
//! Item bodies are kept loosely typed so the payload validator can tell a
//! missing field apart from one with the wrong JSON type.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::NewItem;

/// Why an item request body could not be read as a payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Malformed JSON payload.")]
    Malformed,
    #[error("Payload should be a JSON object.")]
    NotAnObject,
}

/// Request body for item create (POST /items/) and update (PUT /items/:id/)
///
/// A field that is absent or explicitly `null` is `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPayload {
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub stock_count: Option<Value>,
}

impl ItemPayload {
    /// Reads a raw request body.
    ///
    /// An empty body is an empty object. Anything other than a JSON object
    /// is rejected; the Content-Type header is not consulted.
    pub fn from_body(body: &[u8]) -> Result<Self, PayloadError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let value: Value = serde_json::from_slice(body).map_err(|_| PayloadError::Malformed)?;
        Self::try_from(value)
    }

    /// Typed field values, or `None` if any field is absent or mistyped.
    ///
    /// Only meaningful after the payload has passed validation; this does
    /// not check emptiness or sign.
    pub fn item_fields(&self) -> Option<NewItem> {
        let name = self.name.as_ref()?.as_str()?;
        let description = self.description.as_ref()?.as_str()?;
        let stock_count = self.stock_count.as_ref()?.as_i64()?;
        Some(NewItem::new(name, description, stock_count))
    }
}

impl TryFrom<Value> for ItemPayload {
    type Error = PayloadError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(mut fields) = value else {
            return Err(PayloadError::NotAnObject);
        };
        Ok(Self {
            name: take_field(&mut fields, "name"),
            description: take_field(&mut fields, "description"),
            stock_count: take_field(&mut fields, "stock_count"),
        })
    }
}

fn take_field(fields: &mut Map<String, Value>, key: &str) -> Option<Value> {
    fields.remove(key).filter(|value| !value.is_null())
}

/// Request body for the token endpoint (POST /get_jwt_token/)
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}
