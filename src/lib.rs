//! Hello Redis - A minimal greeting HTTP service
//!
//! Exposes a greeting echo, set-name and get-name route backed by an
//! external Redis key-value store, plus liveness/readiness probes.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use store::{MemoryStore, RedisStore, Store};
