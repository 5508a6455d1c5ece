//! Payload Validator
//!
//! Field-level checks for item requests. Callers choose which fields to
//! check; each field reports its first failing rule and nothing more.
//! Name uniqueness is not a validation rule; the create handler owns it.

use std::fmt;

use serde_json::Value;
use tracing::info;

use crate::models::ItemPayload;
use crate::store::{ItemStore, StoreResult};

pub const ITEM_NOT_FOUND: &str = "Item not found.";

/// A field the validator knows how to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
    StockCount,
    ItemId,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::StockCount => "stock_count",
            Field::ItemId => "item_id",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields checked when creating an item
pub const CREATE_FIELDS: &[Field] = &[Field::Name, Field::Description, Field::StockCount];
/// Fields checked when updating an item
pub const UPDATE_FIELDS: &[Field] = &[
    Field::Name,
    Field::Description,
    Field::StockCount,
    Field::ItemId,
];
/// Fields checked when reading or deleting an item
pub const LOOKUP_FIELDS: &[Field] = &[Field::ItemId];

/// Outcome per requested field, in request order. `None` means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    results: Vec<(Field, Option<String>)>,
}

impl ValidationReport {
    /// Result for one field; `None` if the field was not requested.
    #[cfg(test)]
    pub fn get(&self, field: Field) -> Option<Option<&str>> {
        self.results
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, err)| err.as_deref())
    }

    /// Message of the first failing field, in request order.
    pub fn first_error(&self) -> Option<&str> {
        self.results.iter().find_map(|(_, err)| err.as_deref())
    }

    #[cfg(test)]
    pub fn is_valid(&self) -> bool {
        self.first_error().is_none()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (Field, Option<&str>)> + '_ {
        self.results.iter().map(|(f, err)| (*f, err.as_deref()))
    }
}

pub struct PayloadValidator<'a> {
    name: Option<&'a Value>,
    description: Option<&'a Value>,
    stock_count: Option<&'a Value>,
    item_id: Option<&'a str>,
}

impl<'a> PayloadValidator<'a> {
    pub fn new(payload: &'a ItemPayload) -> Self {
        Self {
            name: payload.name.as_ref(),
            description: payload.description.as_ref(),
            stock_count: payload.stock_count.as_ref(),
            item_id: None,
        }
    }

    /// Validator for requests that only carry a path id.
    pub fn for_item_id(item_id: &'a str) -> Self {
        Self {
            name: None,
            description: None,
            stock_count: None,
            item_id: Some(item_id),
        }
    }

    pub fn with_item_id(mut self, item_id: &'a str) -> Self {
        self.item_id = Some(item_id);
        self
    }

    /// Runs the rule for each requested field.
    ///
    /// Only `item_id` touches the store; a store failure aborts validation
    /// instead of being reported as an invalid field.
    pub async fn validate(
        &self,
        store: &dyn ItemStore,
        fields: &[Field],
    ) -> StoreResult<ValidationReport> {
        let mut results = Vec::with_capacity(fields.len());
        for &field in fields {
            let outcome = match field {
                Field::Name => validate_text(self.name, TextField::NAME),
                Field::Description => validate_text(self.description, TextField::DESCRIPTION),
                Field::StockCount => validate_stock_count(self.stock_count),
                Field::ItemId => self.validate_item_id(store).await?,
            };
            results.push((field, outcome.map(str::to_string)));
        }
        Ok(ValidationReport { results })
    }

    async fn validate_item_id(&self, store: &dyn ItemStore) -> StoreResult<Option<&'static str>> {
        let Some(id) = self.item_id.and_then(parse_item_id) else {
            return Ok(Some(ITEM_NOT_FOUND));
        };
        let exists = store.get(id).await?.is_some();
        Ok((!exists).then_some(ITEM_NOT_FOUND))
    }
}

/// Parses a path segment into an item id.
pub fn parse_item_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

struct TextField {
    label: &'static str,
    missing: &'static str,
    wrong_type: &'static str,
    empty: &'static str,
}

impl TextField {
    const NAME: TextField = TextField {
        label: "name",
        missing: "name key is missing in the payload.",
        wrong_type: "Item name should be in string.",
        empty: "Please provide an item name.",
    };

    const DESCRIPTION: TextField = TextField {
        label: "description",
        missing: "description key is missing in the payload.",
        wrong_type: "Item description should be in string.",
        empty: "Please provide an item description.",
    };
}

fn validate_text(value: Option<&Value>, rules: TextField) -> Option<&'static str> {
    info!("validating {} :: {:?}", rules.label, value);
    match value {
        None => Some(rules.missing),
        Some(Value::String(text)) if text.is_empty() => Some(rules.empty),
        Some(Value::String(_)) => None,
        Some(_) => Some(rules.wrong_type),
    }
}

fn validate_stock_count(value: Option<&Value>) -> Option<&'static str> {
    info!("validating stock count :: {:?}", value);
    let Some(value) = value else {
        return Some("stock_count key is missing in the payload.");
    };
    // Booleans and floats (even 10.0) are not integers
    match value.as_i64() {
        None => Some("Item's stock_count should be in integers."),
        Some(count) if count < 0 => Some("Please provide valid item stock count."),
        Some(_) => None,
    }
}
