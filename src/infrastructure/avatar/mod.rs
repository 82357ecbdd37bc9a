//! File-backed host avatar
//!
//! `SceneDocument` implements the avatar store ports in memory; the TOML
//! repository in `repositories::scene` moves it to and from disk.

mod document;

pub use document::{
    SceneContent, SceneDocument, StoredClip, StoredLayer, StoredMenu, StoredParameter,
};
