//! Update Use Case
//!
//! Orchestration only: the build itself lives in the domain builder and the
//! stores are reached through the `AvatarScene` port.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::application::clean::remove_recorded;
use crate::domain::entities::{BuildResult, GeneratedArtifacts, Ledger, Selection};
use crate::domain::ports::AvatarScene;
use crate::domain::services::ExclusiveSelectorBuilder;
use crate::error::WardrobeResult;

use super::options::UpdateOptions;
use super::result::UpdateResult;

/// Update use case - replaces the installed selector with a fresh build
#[derive(Debug, Clone, Default)]
pub struct UpdateUseCase {
    builder: ExclusiveSelectorBuilder,
}

impl UpdateUseCase {
    pub fn new(builder: ExclusiveSelectorBuilder) -> Self {
        Self { builder }
    }

    pub fn builder(&self) -> &ExclusiveSelectorBuilder {
        &self.builder
    }

    /// Run the update against `scene`.
    ///
    /// On error the in-memory scene may already be partially changed; the
    /// caller must not persist it. On success the caller saves the scene,
    /// then `result.ledger`.
    pub fn execute<S: AvatarScene>(
        &self,
        scene: &mut S,
        selection: &Selection,
        ledger: &Ledger,
        options: &UpdateOptions,
    ) -> WardrobeResult<UpdateResult> {
        let build = self
            .builder
            .build(selection, scene.hierarchy(), scene.avatar_root())?;

        let removal = remove_recorded(scene, ledger.artifacts(), options.dry_run)?;

        if options.dry_run {
            debug!(items = build.item_count(), "dry run, scene left unchanged");
            return Ok(UpdateResult {
                build,
                removal,
                installed: GeneratedArtifacts::default(),
                ledger: ledger.clone(),
                dry_run: true,
            });
        }

        let mut next = Ledger::new(ledger.avatar());

        if selection.is_empty() {
            debug!("selection is empty, nothing to install");
            return Ok(UpdateResult {
                build,
                removal,
                installed: GeneratedArtifacts::default(),
                ledger: next,
                dry_run: false,
            });
        }

        let installed = install(scene, &build)?;
        next.record(
            installed.clone(),
            build.fingerprint(),
            build.item_count(),
            Utc::now(),
        );
        info!(
            items = build.item_count(),
            artifacts = installed.len(),
            "installed wardrobe"
        );

        Ok(UpdateResult {
            build,
            removal,
            installed,
            ledger: next,
            dry_run: false,
        })
    }
}

/// Install in dependency order. A failure removes what this call added.
fn install<S: AvatarScene>(scene: &mut S, build: &BuildResult) -> WardrobeResult<GeneratedArtifacts> {
    let mut installed = GeneratedArtifacts::default();
    match install_into(scene, build, &mut installed) {
        Ok(()) => Ok(installed),
        Err(err) => {
            rollback(scene, &installed);
            Err(err)
        }
    }
}

fn install_into<S: AvatarScene>(
    scene: &mut S,
    build: &BuildResult,
    installed: &mut GeneratedArtifacts,
) -> WardrobeResult<()> {
    installed.parameter = Some(scene.add_parameter(&build.parameter)?);
    for clip in &build.clips {
        installed.clips.push(scene.add_clip(clip)?);
    }
    installed.menu = Some(scene.add_sub_menu(&build.menu)?);
    installed.layer = Some(scene.add_layer(&build.state_machine)?);
    Ok(())
}

fn rollback<S: AvatarScene>(scene: &mut S, installed: &GeneratedArtifacts) {
    for (kind, id) in installed.entries() {
        match scene.remove_artifact(kind, id) {
            Ok(_) => debug!(kind = kind.as_str(), %id, "rolled back"),
            Err(err) => warn!(kind = kind.as_str(), %id, error = %err, "rollback failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Hierarchy, Item, MenuSpec, NodeId};
    use crate::domain::ports::{MenuStore, ParameterStore};
    use crate::domain::value_objects::ArtifactKind;
    use crate::error::WardrobeError;
    use crate::infrastructure::avatar::{SceneContent, SceneDocument};

    struct Rig {
        scene: SceneDocument,
        items: Vec<NodeId>,
    }

    fn rig() -> Rig {
        let mut hierarchy = Hierarchy::new();
        let root = hierarchy.add_root("Avatar");
        let hips = hierarchy.add_child(root, "Hips").unwrap();
        let items = vec![
            hierarchy.add_child(hips, "Shirt").unwrap(),
            hierarchy.add_child(root, "Jacket").unwrap(),
            hierarchy.add_child(root, "Hat").unwrap(),
        ];
        Rig {
            scene: SceneDocument::new(hierarchy, root).unwrap(),
            items,
        }
    }

    fn select(scene: &SceneDocument, nodes: &[NodeId]) -> Selection {
        let hierarchy = scene.hierarchy();
        let mut selection = Selection::new();
        for node in nodes {
            selection
                .validate_and_add(
                    Item::from_node(hierarchy, *node).unwrap(),
                    hierarchy,
                    scene.avatar_root(),
                )
                .unwrap();
        }
        selection
    }

    #[test]
    fn first_update_installs_everything() {
        let mut rig = rig();
        let selection = select(&rig.scene, &rig.items);

        let result = UpdateUseCase::default()
            .execute(&mut rig.scene, &selection, &Ledger::new("Avatar"), &UpdateOptions::new())
            .unwrap();

        assert_eq!(result.item_count(), 3);
        assert_eq!(result.installed.clips.len(), 3);
        assert_eq!(result.installed.len(), 6);
        assert!(result.removal.is_empty());
        assert_eq!(result.ledger.artifacts(), &result.installed);
        assert_eq!(result.ledger.fingerprint(), Some(&result.build.fingerprint()));

        let content = rig.scene.content();
        assert_eq!(content.parameters.len(), 1);
        assert_eq!(content.clips.len(), 3);
        assert_eq!(content.layers[0].machine.states.len(), 4);
        assert_eq!(content.menus[0].menu.entries.len(), 3);
    }

    #[test]
    fn second_update_replaces_previous_install() {
        let mut rig = rig();
        let use_case = UpdateUseCase::default();
        let all = select(&rig.scene, &rig.items);
        let first = use_case
            .execute(&mut rig.scene, &all, &Ledger::new("Avatar"), &UpdateOptions::new())
            .unwrap();

        let fewer = select(&rig.scene, &rig.items[..1]);
        let second = use_case
            .execute(&mut rig.scene, &fewer, &first.ledger, &UpdateOptions::new())
            .unwrap();

        assert_eq!(second.removal.removed.len(), first.installed.len());
        let content = rig.scene.content();
        assert_eq!(content.parameters.len(), 1);
        assert_eq!(content.clips.len(), 1);
        assert_eq!(content.layers.len(), 1);
        assert_eq!(content.parameters[0].parameter.max, 1);
        for (kind, id) in first.installed.entries() {
            assert!(!rig.scene.resolves(kind, id));
        }
    }

    #[test]
    fn empty_selection_only_cleans_up() {
        let mut rig = rig();
        let use_case = UpdateUseCase::default();
        let all = select(&rig.scene, &rig.items);
        let first = use_case
            .execute(&mut rig.scene, &all, &Ledger::new("Avatar"), &UpdateOptions::new())
            .unwrap();

        let result = use_case
            .execute(&mut rig.scene, &Selection::new(), &first.ledger, &UpdateOptions::new())
            .unwrap();

        assert!(result.is_cleanup_only());
        assert!(result.installed.is_empty());
        assert!(result.ledger.is_empty());
        assert_eq!(rig.scene.content(), &SceneContent::default());
    }

    #[test]
    fn dry_run_does_not_touch_the_scene() {
        let mut rig = rig();
        let before = rig.scene.clone();
        let selection = select(&rig.scene, &rig.items);

        let result = UpdateUseCase::default()
            .execute(
                &mut rig.scene,
                &selection,
                &Ledger::new("Avatar"),
                &UpdateOptions::new().with_dry_run(true),
            )
            .unwrap();

        assert!(result.dry_run);
        assert_eq!(result.item_count(), 3);
        assert!(result.installed.is_empty());
        assert_eq!(rig.scene, before);
    }

    #[test]
    fn unowned_menu_conflicts_and_rolls_back() {
        let mut rig = rig();
        rig.scene
            .add_sub_menu(&MenuSpec {
                name: "Wardrobe".to_string(),
                entries: Vec::new(),
            })
            .unwrap();
        let before = rig.scene.content().clone();
        let selection = select(&rig.scene, &rig.items);

        let err = UpdateUseCase::default()
            .execute(&mut rig.scene, &selection, &Ledger::new("Avatar"), &UpdateOptions::new())
            .unwrap_err();

        assert!(matches!(err, WardrobeError::MenuConflict { ref name } if name == "Wardrobe"));
        assert_eq!(rig.scene.content(), &before);
    }

    #[test]
    fn stale_ledger_handles_are_reported_not_fatal() {
        let mut rig = rig();
        let use_case = UpdateUseCase::default();
        let selection = select(&rig.scene, &rig.items);
        let first = use_case
            .execute(&mut rig.scene, &selection, &Ledger::new("Avatar"), &UpdateOptions::new())
            .unwrap();
        let parameter = first.installed.parameter.unwrap();
        rig.scene.remove_parameter(parameter).unwrap();

        let second = use_case
            .execute(&mut rig.scene, &selection, &first.ledger, &UpdateOptions::new())
            .unwrap();

        assert_eq!(second.removal.missing.len(), 1);
        assert_eq!(second.removal.missing[0].kind, ArtifactKind::Parameter);
        assert_eq!(rig.scene.content().parameters.len(), 1);
    }

    #[test]
    fn identical_selection_keeps_fingerprint() {
        let mut rig = rig();
        let use_case = UpdateUseCase::default();
        let selection = select(&rig.scene, &rig.items);
        let first = use_case
            .execute(&mut rig.scene, &selection, &Ledger::new("Avatar"), &UpdateOptions::new())
            .unwrap();
        let second = use_case
            .execute(&mut rig.scene, &selection, &first.ledger, &UpdateOptions::new())
            .unwrap();

        assert_eq!(first.ledger.fingerprint(), second.ledger.fingerprint());
        assert_ne!(first.installed, second.installed);
    }
}
