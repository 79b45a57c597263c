//! # TimeFlow Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client plumbing (timeouts, bounded retry)
//! - The generative-model suggestion provider
//! - The identity-provider client with centralized error-code mapping
//! - Configuration loading (environment first, file fallback)
//!
//! ## Architecture
//! - Implements traits defined in `timeflow-core`
//! - Depends on `timeflow-domain` and `timeflow-core`
//! - Contains all "impure" code (network I/O)

pub mod config;
pub mod errors;
pub mod http;
pub mod identity;
pub mod integrations;

// Re-export commonly used items
pub use http::{HttpClient, HttpClientBuilder};
pub use identity::{AuthSession, IdentityClient, IdentityError, IdentityErrorCode};
pub use integrations::genai::GenAiClient;
