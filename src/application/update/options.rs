//! Update options

/// Options for the update command
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    /// Build and report only; the scene is not modified
    pub dry_run: bool,
}

impl UpdateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
