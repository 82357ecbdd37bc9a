//! Property tests for wardrobe.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "one state per item" and "round-trips".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/builder.rs"]
mod builder;

#[path = "properties/object_path.rs"]
mod object_path;

#[path = "properties/selection.rs"]
mod selection;
