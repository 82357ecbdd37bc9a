//! Clean command handler
//!
//! Removes generated content tracked in the ledger.

use std::path::Path;

use anyhow::Result;

use wardrobe::application::CleanOptions;
use wardrobe::presentation::factory;
use wardrobe::presentation::output::render_clean;

use super::session::Session;
use crate::ui::json::{emit_event, events::*};

pub fn cmd_clean(scene: &Path, dry_run: bool, json: bool) -> Result<()> {
    let mut session = Session::open(scene, json)?;
    let ledger = session.load_ledger()?;

    let options = CleanOptions::new().with_dry_run(dry_run);
    let result = factory::create_clean_use_case().execute(&mut session.scene, &ledger, &options)?;

    if !result.dry_run && result.has_changes() {
        session.commit(&result.ledger)?;
    }

    if json {
        for artifact in &result.removal.removed {
            emit_event(&ArtifactEvent::removed(artifact, result.dry_run))?;
        }
        for artifact in &result.removal.missing {
            emit_event(&ArtifactEvent::missing(artifact))?;
        }
        emit_event(&CleanEvent::from(&result))?;
    } else {
        print!("{}", render_clean(&result));
    }
    Ok(())
}
