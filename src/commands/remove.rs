//! Remove command handler

use std::path::Path;

use anyhow::{Context, Result};

use wardrobe::WardrobeError;

use super::session::Session;
use crate::ui::json::{emit_event, events::RemovedItemEvent};

pub fn cmd_remove(scene: &Path, position: usize, json: bool) -> Result<()> {
    let session = Session::open(scene, json)?;
    let mut loaded = session.load_selection()?;

    let len = loaded.selection.len();
    let item = position
        .checked_sub(1)
        .ok_or(WardrobeError::IndexOutOfRange { index: 0, len })
        .and_then(|index| loaded.selection.remove_at(index))
        .map_err(|_| WardrobeError::IndexOutOfRange {
            index: position,
            len,
        })
        .context("nothing removed; positions start at 1 as shown by `list`")?;
    session.save_selection(&loaded.selection)?;

    if json {
        emit_event(&RemovedItemEvent::new(position, item.name()))?;
    } else {
        println!("✓ removed {} (was position {position})", item.name());
        if position <= loaded.selection.len() {
            println!("  items after it moved up one value");
        }
    }
    Ok(())
}
