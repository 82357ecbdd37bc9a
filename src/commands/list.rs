//! List command handler

use std::path::Path;

use anyhow::Result;

use wardrobe::domain::ports::AvatarScene;
use wardrobe::presentation::output::{list_rows, render_list};

use super::session::Session;
use crate::ui::json::{emit_event, events::*};

pub fn cmd_list(scene: &Path, json: bool) -> Result<()> {
    let session = Session::open(scene, json)?;
    let loaded = session.load_selection()?;
    let rows = list_rows(
        &loaded.selection,
        session.scene.hierarchy(),
        session.scene.avatar_root(),
    )?;

    if json {
        for row in &rows {
            emit_event(&ItemEvent::from(row))?;
        }
        for path in &loaded.missing {
            emit_event(&MissingItemEvent::new(path.to_string()))?;
        }
    } else {
        print!("{}", render_list(session.avatar(), &rows));
        for path in &loaded.missing {
            println!("  ✗ missing {path}");
        }
    }
    Ok(())
}
