//! API Module
//!
//! HTTP handlers and routing for the mirror index service.
//!
//! # Endpoints
//! - `POST /events` - Apply a relay event
//! - `GET /mirrors` - List mirrors in recency order
//! - `GET /mirrors/:source` - Resolve a mirror
//! - `DELETE /mirrors` - Clear the index
//! - `GET /stats` - Index statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
