//! Add command handler

use std::path::Path;

use anyhow::{bail, Result};

use wardrobe::application::{add_paths, RejectedPath};
use wardrobe::domain::ports::AvatarScene;
use wardrobe::domain::value_objects::ObjectPath;
use wardrobe::presentation::output::render_add;

use super::session::Session;
use crate::ui::json::{emit_event, events::*};

pub fn cmd_add(scene: &Path, raw_paths: &[String], json: bool) -> Result<()> {
    let session = Session::open(scene, json)?;
    let mut loaded = session.load_selection()?;

    let mut unparsed = Vec::new();
    let mut paths = Vec::new();
    for raw in raw_paths {
        match ObjectPath::parse(raw) {
            Ok(path) => paths.push(path),
            Err(error) => unparsed.push((raw.as_str(), error)),
        }
    }

    let result = add_paths(
        &mut loaded.selection,
        session.scene.hierarchy(),
        session.scene.avatar_root(),
        &paths,
    );

    if !result.added.is_empty() {
        session.save_selection(&loaded.selection)?;
    }

    if json {
        for item in &result.added {
            emit_event(&AddedEvent::new(item.name()))?;
        }
        for RejectedPath { path, error } in &result.rejected {
            emit_event(&RejectedEvent::new(path.clone(), error.to_string()))?;
        }
        for (raw, error) in &unparsed {
            emit_event(&RejectedEvent::new(raw.to_string(), error.to_string()))?;
        }
    } else {
        print!("{}", render_add(&result));
        for (raw, error) in &unparsed {
            println!("✗ {raw}: {error}");
        }
    }

    let rejected = result.rejected.len() + unparsed.len();
    if rejected > 0 {
        bail!("{rejected} of {} path(s) rejected", raw_paths.len());
    }
    Ok(())
}
