//! API Module
//!
//! HTTP handlers and routing for the cache administration surface.
//!
//! # Endpoints
//! - `GET /stats` - Cache snapshot: configuration plus counters
//! - `POST /clear` - Empty the cache and reset counters
//! - `PUT /config` - Partial update of enabled/ttl/max_size
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
