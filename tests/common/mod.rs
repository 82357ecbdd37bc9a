//! Common test utilities for wardrobe CLI tests.
//!
//! - `TestEnv`: a scene in a temp directory plus an isolated config home
//! - Fixtures: scene documents shared across tests

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
