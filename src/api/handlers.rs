//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::cache::BoundedLruCache;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    DeleteResponse, GetResponse, HealthResponse, KeysResponse, PutRequest, PutResponse,
    StatsResponse,
};

/// Shared cache holding arbitrary JSON documents.
pub type JsonCache = BoundedLruCache<String, Value>;

/// Application state shared across all handlers.
///
/// The cache does its own locking, so the state only needs an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<JsonCache>,
}

impl AppState {
    pub fn new(cache: Arc<JsonCache>) -> Self {
        Self { cache }
    }

    /// Creates a new AppState with a cache sized from the Config.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(BoundedLruCache::new(config.cache_capacity)))
    }
}

/// Handler for PUT /cache
///
/// Stores a JSON value under a key.
pub async fn put_handler(
    State(state): State<AppState>,
    Json(req): Json<PutRequest>,
) -> Result<Json<PutResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    state.cache.put(req.key.clone(), req.value);

    Ok(Json(PutResponse::new(req.key)))
}

/// Handler for GET /cache/:key
///
/// A hit also marks the key as most recently used.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let value = state
        .cache
        .get(key.as_str())
        .ok_or_else(|| ApiError::NotFound(key.clone()))?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for DELETE /cache/:key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<DeleteResponse> {
    let removed = state.cache.remove(key.as_str());
    Json(DeleteResponse::new(key, removed))
}

/// Handler for GET /cache
///
/// Lists keys from most to least recently used.
pub async fn keys_handler(State(state): State<AppState>) -> Json<KeysResponse> {
    let keys = state.cache.keys();
    Json(KeysResponse::new(keys, state.cache.capacity().get()))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
