//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--scene, --json, --verbose) are inherited by all subcommands
//! - Paths given to `add` are scene-absolute and use the encoded form
//!   (`\/` for a slash inside a name, `\\` for a backslash)

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// wardrobe - mutually-exclusive selector generator for avatar scenes
#[derive(Parser, Debug)]
#[command(name = "wardrobe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Scene document to operate on
    #[arg(long, global = true, default_value = "scene.toml")]
    pub scene: PathBuf,

    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append items to the selection
    Add {
        /// Scene-absolute object paths, e.g. `Avatar/Hips/Shirt`
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<String>,
    },

    /// Remove the item at a position shown by `list`
    Remove {
        /// 1-based position
        #[arg(value_name = "POSITION")]
        position: usize,
    },

    /// Show the selection with the value that selects each item
    List,

    /// Build the selector and install it into the scene
    Update {
        /// Show what would be installed without touching the scene
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove everything a previous update installed
    Clean {
        /// Show what would be removed without touching the scene
        #[arg(long)]
        dry_run: bool,
    },

    /// Compare the selection with what is installed
    Status,

    /// Add items from a legacy `;`-joined path list
    Import {
        /// Paths relative to the avatar root, joined with `;`
        #[arg(value_name = "LEGACY")]
        legacy: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["wardrobe", "list", "--json", "-vv", "--scene", "a.toml"])
            .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.scene, PathBuf::from("a.toml"));
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn scene_defaults_to_scene_toml() {
        let cli = Cli::try_parse_from(["wardrobe", "status"]).unwrap();
        assert_eq!(cli.scene, PathBuf::from("scene.toml"));
    }

    #[test]
    fn add_requires_a_path() {
        assert!(Cli::try_parse_from(["wardrobe", "add"]).is_err());

        let cli = Cli::try_parse_from(["wardrobe", "add", "Avatar/Shirt", "Avatar/Hat"]).unwrap();
        match cli.command {
            Commands::Add { paths } => assert_eq!(paths, ["Avatar/Shirt", "Avatar/Hat"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn update_dry_run_flag() {
        let cli = Cli::try_parse_from(["wardrobe", "update", "--dry-run"]).unwrap();
        assert!(matches!(cli.command, Commands::Update { dry_run: true }));
    }

    #[test]
    fn remove_takes_a_number() {
        assert!(Cli::try_parse_from(["wardrobe", "remove", "two"]).is_err());
        let cli = Cli::try_parse_from(["wardrobe", "remove", "2"]).unwrap();
        assert!(matches!(cli.command, Commands::Remove { position: 2 }));
    }
}
