//! SceneRepository port - loads and stores the host avatar scene

use std::path::Path;

use crate::error::WardrobeResult;

use super::avatar_stores::AvatarScene;

/// Abstract repository for scene persistence
pub trait SceneRepository {
    /// Scene type produced by this repository
    type Scene: AvatarScene;

    fn load(&self, path: &Path) -> WardrobeResult<Self::Scene>;

    fn save(&self, scene: &Self::Scene, path: &Path) -> WardrobeResult<()>;
}
