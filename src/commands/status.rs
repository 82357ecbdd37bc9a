//! Status command handler

use std::path::Path;

use anyhow::Result;

use wardrobe::presentation::factory;
use wardrobe::presentation::output::render_status;

use super::session::Session;
use crate::ui::json::{emit_event, events::StatusEvent};

pub fn cmd_status(scene: &Path, json: bool) -> Result<()> {
    let session = Session::open(scene, json)?;
    let loaded = session.load_selection()?;
    let ledger = session.load_ledger()?;

    let report = factory::create_status_query(&session.config).execute(
        &session.scene,
        &loaded,
        &ledger,
    )?;

    if json {
        emit_event(&StatusEvent::from(&report))?;
    } else {
        print!("{}", render_status(&report));
    }
    Ok(())
}
