//! API Module
//!
//! HTTP handlers and routing for the greeting service.
//!
//! # Endpoints
//! - `GET /` - Fixed greeting string
//! - `POST /hello/:name` - Store a name (3-10 characters)
//! - `GET /hello` - Retrieve the stored name
//! - `GET /liveness` - Liveness probe
//! - `GET /readiness` - Readiness probe

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
