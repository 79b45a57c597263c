//! Identity-provider client
//!
//! REST client for an email/password identity provider, with a closed set of
//! provider error codes mapped to user-facing titles and descriptions.

pub mod client;
pub mod codes;

pub use client::{AuthSession, IdentityClient};
pub use codes::{IdentityError, IdentityErrorCode};
