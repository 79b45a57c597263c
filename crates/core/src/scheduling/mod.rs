//! AI-assisted scheduling suggestion pipeline
//!
//! validate -> serialize -> external call -> apply. Slot-finding itself is
//! entirely delegated to the external service behind [`ports::SuggestionProvider`];
//! this module only validates the request, builds the input contract, checks
//! the output contract, and applies the result to the form.

pub mod applier;
pub mod ports;
pub mod serializer;
pub mod service;
pub mod task;
pub mod validator;
