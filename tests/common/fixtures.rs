//! Test fixtures - scene documents reused across tests.

/// Avatar with a nested shirt, a jacket, a hat and a prop outside the avatar.
pub const BASIC_SCENE: &str = r#"version = 1
avatar = "Avatar"

[[objects]]
name = "Avatar"

[[objects.children]]
name = "Hips"

[[objects.children.children]]
name = "Shirt"

[[objects.children]]
name = "Jacket"

[[objects.children]]
name = "Hat"

[[objects]]
name = "Props"

[[objects.children]]
name = "Sword"
"#;

/// Avatar whose only outfit has a slash in its name.
pub const SLASHED_SCENE: &str = r#"version = 1
avatar = "Avatar"

[[objects]]
name = "Avatar"

[[objects.children]]
name = "Tops"

[[objects.children.children]]
name = "Shirt/Red"
"#;

/// A scene-local config renaming the generated content.
pub const RENAMED_CONFIG: &str = r#"[generation]
parameter_name = "Outfit"
layer_name = "Outfit Layer"
menu_name = "Outfits"
clip_prefix = "Outfit_"
"#;
