//! External service integrations

pub mod genai;
