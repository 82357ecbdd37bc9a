//! Command handlers
//!
//! Each handler opens a [`session::Session`] for the scene file, runs one use
//! case and renders the result as text or NDJSON.

pub mod add;
pub mod clean;
pub mod import;
pub mod list;
pub mod remove;
pub mod session;
pub mod status;
pub mod update;
