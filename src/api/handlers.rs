//! API Handlers
//!
//! HTTP request handlers for the inventory endpoints.
//!
//! Every item handler takes `AuthenticatedUser` first, so authentication is
//! settled before the body is parsed or any store/cache call is made.
//! Item bodies arrive as raw bytes so that unreadable bodies are reported
//! through `InventoryError` like any other invalid payload.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::auth::{issue_token, AuthSettings, AuthenticatedUser};
use crate::cache::{CacheStore, ItemCache};
use crate::config::Config;
use crate::error::{InventoryError, Result};
use crate::models::{
    HealthResponse, InventoryItem, ItemDetailsResponse, ItemPayload, ItemSnapshot, NewItem,
    StatsResponse, SuccessResponse, TokenRequest, TokenResponse, UpdatedItemResponse,
};
use crate::store::{ItemStore, MemoryItemStore, StoreError};
use crate::validation::{
    parse_item_id, PayloadValidator, CREATE_FIELDS, ITEM_NOT_FOUND, LOOKUP_FIELDS, UPDATE_FIELDS,
};

/// Application state shared across all handlers.
///
/// The entity store and cache are injected here rather than reached as
/// process globals, so tests can swap in their own implementations.
#[derive(Clone)]
pub struct AppState {
    /// Inventory table
    pub store: Arc<dyn ItemStore>,
    /// Snapshot cache keyed by item id
    pub cache: ItemCache,
    /// Token verification settings
    pub auth: Arc<AuthSettings>,
}

impl AppState {
    pub fn new(store: Arc<dyn ItemStore>, cache: CacheStore, auth: AuthSettings) -> Self {
        Self {
            store,
            cache: ItemCache::new(Arc::new(RwLock::new(cache))),
            auth: Arc::new(auth),
        }
    }

    /// Builds state with an in-memory store and a cache sized from `config`.
    pub fn from_config(config: &Config) -> Self {
        let cache = CacheStore::new(config.cache_max_entries, config.cache_default_ttl);
        Self::new(
            Arc::new(MemoryItemStore::new()),
            cache,
            AuthSettings::from_config(config),
        )
    }
}

fn item_not_found() -> InventoryError {
    InventoryError::InvalidRequest(ITEM_NOT_FOUND.to_string())
}

fn name_taken(name: &str) -> InventoryError {
    InventoryError::InvalidPayload(format!("An item named '{}' already exists.", name))
}

fn validated_fields(payload: &ItemPayload) -> Result<NewItem> {
    payload
        .item_fields()
        .ok_or_else(|| InventoryError::Internal("validated payload has no item fields".into()))
}

/// Validates a path id on its own and returns it parsed.
async fn lookup_item_id(state: &AppState, raw_id: &str) -> Result<i64> {
    let report = PayloadValidator::for_item_id(raw_id)
        .validate(state.store.as_ref(), LOOKUP_FIELDS)
        .await?;
    if let Some(msg) = report.first_error() {
        error!("invalid item id :: {}", raw_id);
        return Err(InventoryError::InvalidRequest(msg.to_string()));
    }
    parse_item_id(raw_id).ok_or_else(item_not_found)
}

/// Cache-first snapshot of an item that is known to exist.
///
/// On a miss the freshly serialized snapshot is cached before returning.
async fn cached_snapshot(cache: &ItemCache, item: &InventoryItem) -> ItemSnapshot {
    if let Some(snapshot) = cache.get(item.id).await {
        debug!("fetching item details from cache for item id :: {}", item.id);
        return snapshot;
    }
    let snapshot = item.snapshot();
    cache.put(&snapshot).await;
    snapshot
}

/// Handler for POST /items/
///
/// Creates an item unless one with the same name exists, in which case the
/// existing item's snapshot is returned as a 400.
pub async fn create_item(
    user: AuthenticatedUser,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<SuccessResponse>)> {
    info!("create_item requested by {}", user.username);
    let payload = ItemPayload::from_body(&body).map_err(|err| {
        error!("unreadable create payload: {}", err);
        InventoryError::InvalidPayload(err.to_string())
    })?;

    let report = PayloadValidator::new(&payload)
        .validate(state.store.as_ref(), CREATE_FIELDS)
        .await?;
    if let Some(msg) = report.first_error() {
        error!("invalid payload provided: {}", msg);
        return Err(InventoryError::InvalidPayload(msg.to_string()));
    }
    let fields = validated_fields(&payload)?;

    if let Some(existing) = state.store.find_by_name(&fields.name).await? {
        let snapshot = cached_snapshot(&state.cache, &existing).await;
        return Err(InventoryError::AlreadyExists(snapshot));
    }

    match state.store.create(fields).await {
        Ok(item) => {
            info!("created inventory item id={} name={}", item.id, item.name);
            Ok((StatusCode::CREATED, Json(SuccessResponse::item_created())))
        }
        // Lost a race against a concurrent create of the same name
        Err(StoreError::Conflict(name)) => {
            warn!("create conflict on name '{}'", name);
            let existing = state
                .store
                .find_by_name(&name)
                .await?
                .ok_or_else(|| name_taken(&name))?;
            let snapshot = cached_snapshot(&state.cache, &existing).await;
            Err(InventoryError::AlreadyExists(snapshot))
        }
        Err(err) => Err(err.into()),
    }
}

/// Handler for GET /items/:item_id/
pub async fn get_item(
    user: AuthenticatedUser,
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<ItemDetailsResponse>> {
    info!("get_item {} requested by {}", item_id, user.username);
    let id = lookup_item_id(&state, &item_id).await?;

    if let Some(snapshot) = state.cache.get(id).await {
        debug!("fetching item details from cache for item id :: {}", id);
        return Ok(Json(ItemDetailsResponse {
            inventory_item_details: snapshot,
        }));
    }

    let item = state.store.get(id).await?.ok_or_else(item_not_found)?;
    let snapshot = item.snapshot();
    debug!("setting up cache for item id :: {}", id);
    state.cache.put(&snapshot).await;

    Ok(Json(ItemDetailsResponse {
        inventory_item_details: snapshot,
    }))
}

/// Handler for PUT /items/:item_id/
///
/// Full replace: all three fields are required. Any validation failure,
/// including a partial payload, is reported as 404 alongside unknown ids.
pub async fn update_item(
    user: AuthenticatedUser,
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    body: Bytes,
) -> Result<Json<UpdatedItemResponse>> {
    info!("update_item {} requested by {}", item_id, user.username);
    let payload = ItemPayload::from_body(&body).map_err(|err| {
        error!("unreadable update payload for item {}: {}", item_id, err);
        InventoryError::InvalidRequest(err.to_string())
    })?;

    let report = PayloadValidator::new(&payload)
        .with_item_id(&item_id)
        .validate(state.store.as_ref(), UPDATE_FIELDS)
        .await?;
    if let Some(msg) = report.first_error() {
        error!("invalid update for item {}: {}", item_id, msg);
        return Err(InventoryError::InvalidRequest(msg.to_string()));
    }
    let id = parse_item_id(&item_id).ok_or_else(item_not_found)?;
    let fields = validated_fields(&payload)?;

    let mut item = state.store.get(id).await?.ok_or_else(item_not_found)?;
    item.apply(fields);

    // Invalidate before the write so no reader sees the old snapshot
    // once the response goes out.
    state.cache.invalidate(id).await;

    let item = match state.store.update(item).await {
        Ok(item) => item,
        Err(StoreError::Conflict(name)) => return Err(name_taken(&name)),
        Err(StoreError::NotFound(_)) => return Err(item_not_found()),
        Err(err) => return Err(err.into()),
    };
    info!("updated inventory item id={}", id);

    Ok(Json(UpdatedItemResponse {
        updated_item_details: item.snapshot(),
    }))
}

/// Handler for DELETE /items/:item_id/
pub async fn delete_item(
    user: AuthenticatedUser,
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<SuccessResponse>> {
    info!("delete_item {} requested by {}", item_id, user.username);
    let id = lookup_item_id(&state, &item_id).await?;

    let item = state.store.get(id).await?.ok_or_else(item_not_found)?;
    state.cache.invalidate(item.id).await;

    match state.store.delete(item.id).await {
        Ok(()) => {}
        Err(StoreError::NotFound(_)) => return Err(item_not_found()),
        Err(err) => return Err(err.into()),
    }
    info!("deleted inventory item id={}", id);

    Ok(Json(SuccessResponse::item_deleted()))
}

/// Handler for POST /get_jwt_token/
///
/// Exchanges the configured admin credentials for an access token.
pub async fn obtain_token(
    State(state): State<AppState>,
    Json(req): Json<TokenRequest>,
) -> Result<Json<TokenResponse>> {
    if !state.auth.check_credentials(&req.username, &req.password) {
        warn!("token request rejected for user {}", req.username);
        return Err(InventoryError::InvalidCredentials);
    }

    let token = issue_token(&state.auth.secret, &req.username, state.auth.token_ttl)
        .map_err(|err| InventoryError::Internal(format!("failed to issue token: {}", err)))?;
    info!("issued access token for {}", req.username);

    Ok(Json(TokenResponse::bearer(token, state.auth.token_ttl)))
}

/// Handler for GET /stats
pub async fn stats_handler(
    _user: AuthenticatedUser,
    State(state): State<AppState>,
) -> Json<StatsResponse> {
    Json(StatsResponse::from(&state.cache.stats().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
