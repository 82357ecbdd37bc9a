//! Import command handler
//!
//! Accepts the `;`-joined list older tools stored, with paths relative to
//! the avatar root and no escaping.

use std::path::Path;

use anyhow::{bail, Result};

use wardrobe::domain::ports::AvatarScene;
use wardrobe::presentation::factory;
use wardrobe::presentation::output::render_add;

use super::session::Session;
use crate::ui::json::{emit_event, events::*};

pub fn cmd_import(scene: &Path, legacy: &str, json: bool) -> Result<()> {
    let session = Session::open(scene, json)?;
    let mut loaded = session.load_selection()?;

    let result = factory::create_selection_use_case().import_legacy(
        &mut loaded.selection,
        session.scene.hierarchy(),
        session.scene.avatar_root(),
        legacy,
    );

    if !result.added.is_empty() {
        session.save_selection(&loaded.selection)?;
    }

    if json {
        for item in &result.added {
            emit_event(&AddedEvent::new(item.name()))?;
        }
        for rejected in &result.rejected {
            emit_event(&RejectedEvent::new(
                rejected.path.clone(),
                rejected.error.to_string(),
            ))?;
        }
    } else {
        print!("{}", render_add(&result));
    }

    if !result.is_success() {
        bail!("{} legacy path(s) could not be imported", result.rejected.len());
    }
    Ok(())
}
