//! # TimeFlow API
//!
//! The axum HTTP server exposing the dashboard's JSON API: events, the
//! create/edit sheet, scheduling suggestions, reminders, and auth.
//!
//! ## Architecture
//! - Owns the `AppContext` dependency container and the binary entry point
//! - Wires `timeflow-infra` adapters into `timeflow-core` services
//! - Handlers never panic; failures surface as JSON error bodies

pub mod context;
pub mod routes;
pub mod seed;
pub mod session;

pub use context::AppContext;
pub use routes::router;
