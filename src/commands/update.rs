//! Update command handler

use std::path::Path;

use anyhow::{Context, Result};

use wardrobe::application::{UpdateOptions, UpdateResult};
use wardrobe::presentation::factory;
use wardrobe::presentation::output::render_update;

use super::session::Session;
use crate::ui::json::{emit_event, events::*};

pub fn cmd_update(scene: &Path, dry_run: bool, json: bool, verbose: u8) -> Result<()> {
    let mut session = Session::open(scene, json)?;
    let loaded = session.load_selection()?;
    let ledger = session.load_ledger()?;

    let use_case = factory::create_update_use_case(&session.config);
    let options = UpdateOptions::new().with_dry_run(dry_run);
    let result = use_case
        .execute(&mut session.scene, &loaded.selection, &ledger, &options)
        .context("update failed; scene left unchanged")?;

    if !result.dry_run {
        session.commit(&result.ledger)?;
    }

    if json {
        emit_update(&result)?;
    } else {
        print!("{}", render_update(&result, verbose));
    }
    Ok(())
}

fn emit_update(result: &UpdateResult) -> Result<()> {
    for artifact in &result.removal.removed {
        emit_event(&ArtifactEvent::removed(artifact, result.dry_run))?;
    }
    for artifact in &result.removal.missing {
        emit_event(&ArtifactEvent::missing(artifact))?;
    }
    emit_event(&UpdateEvent::from(result))?;
    Ok(())
}
