//! Event store, form handling, and the edit-sheet state machine

pub mod controller;
pub mod form;
pub mod sheet;
pub mod store;
