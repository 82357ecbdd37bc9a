//! Integration tests for `status`.

mod common;

use common::*;
use wardrobe::domain::ports::{AnimationStore, SceneRepository};
use wardrobe::infrastructure::TomlSceneRepository;

#[test]
fn fresh_scene_is_up_to_date_with_nothing_selected() {
    let env = TestEnv::basic();

    let result = env.run(&["status"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(
        result.stdout,
        "Avatar: Avatar\nItems: 0\nInstalled: no\nState: up to date\n"
    );
}

#[test]
fn selection_without_update_is_not_installed() {
    let env = TestEnv::basic();
    env.run(&["add", "Avatar/Hat"]);

    let result = env.run(&["status"]);

    assert!(result.stdout.contains("Items: 1"));
    assert!(result.stdout.contains("State: not installed"), "{}", result.stdout);
}

#[test]
fn status_tracks_freshness_across_edits() {
    let env = TestEnv::basic();
    env.run(&["add", "Avatar/Hat"]);
    env.run(&["update"]);

    let result = env.run(&["status"]);
    assert!(result.stdout.contains("Installed: yes"));
    assert!(result.stdout.contains("✓ all handles resolve"));
    assert!(result.stdout.contains("State: up to date"), "{}", result.stdout);

    env.run(&["add", "Avatar/Jacket"]);
    let result = env.run(&["status"]);
    assert!(result.stdout.contains("State: stale"), "{}", result.stdout);

    env.run(&["update"]);
    let result = env.run(&["status"]);
    assert!(result.stdout.contains("State: up to date"), "{}", result.stdout);
}

#[test]
fn status_reports_dangling_handles() {
    let env = TestEnv::basic();
    env.run(&["add", "Avatar/Hat"]);
    env.run(&["update"]);

    let path = env.scene_path();
    let mut scene = env.scene();
    let layer = scene.layer_named("Wardrobe").unwrap().id;
    scene.remove_layer(layer).unwrap();
    TomlSceneRepository::new().save(&scene, &path).unwrap();

    let result = env.run(&["status"]);

    assert!(result.is_success());
    assert!(result.stdout.contains("✗ 1 handle(s) no longer resolve"), "{}", result.stdout);
    assert!(result.stdout.contains(&format!("layer {layer}")));
}

#[test]
fn status_lists_missing_saved_items() {
    let env = TestEnv::basic();
    env.write_file(
        ".wardrobe/scene.Avatar.selection.toml",
        "version = 1\navatar = \"Avatar\"\nitems = [\"Cape\"]\n",
    );

    let result = env.run(&["status"]);

    assert!(result.stdout.contains("Items: 0"));
    assert!(result.stdout.contains("✗ missing Cape"));
}

#[test]
fn storage_state_dir_moves_state_files() {
    let env = TestEnv::basic();
    env.write_file(".wardrobe/config.toml", "[storage]\nstate_dir = \"state\"\n");

    env.run(&["add", "Avatar/Hat"]);
    let result = env.run(&["update"]);
    assert!(result.is_success(), "{}", result.combined_output());

    assert!(env.path("state/scene.Avatar.selection.toml").exists());
    assert!(env.path("state/scene.Avatar.lock").exists());
    assert!(!env.selection_path().exists());
}
