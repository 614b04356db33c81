//! Request and Response models for the greeting service API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request parameters and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{NameParam, NAME_MAX_LENGTH, NAME_MIN_LENGTH};
pub use responses::{ErrorResponse, HealthResponse};
