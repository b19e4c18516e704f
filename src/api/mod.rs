//! API Module
//!
//! HTTP handlers and routing for the cache server.
//!
//! # Endpoints
//! - `PUT /cache` - Store a key-value pair
//! - `GET /cache` - List keys, most recently used first
//! - `GET /cache/:key` - Retrieve a value by key
//! - `DELETE /cache/:key` - Remove a key
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
