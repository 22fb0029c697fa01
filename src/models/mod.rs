//! Request and Response models for the index API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.
//! Relay events and actions are their own DTOs (see [`crate::relay`]).

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::ListQuery;
pub use responses::{
    ClearResponse, HealthResponse, MirrorListResponse, MirrorResponse, StatsResponse,
};
