//! Generative-model suggestion provider
//!
//! Calls a chat-completions API with a strict JSON schema so the model can
//! only answer with a `suggestedTime` / `reasoning` pair.

pub mod client;
pub mod types;

pub use client::GenAiClient;
