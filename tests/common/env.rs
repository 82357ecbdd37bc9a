//! Test environment for isolated wardrobe runs.
//!
//! Provides `TestEnv` - a temp directory holding a scene document, an
//! isolated user config home, and helpers to run the wardrobe binary there.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use wardrobe::infrastructure::repositories::parse_scene;
use wardrobe::infrastructure::SceneDocument;

use super::fixtures::BASIC_SCENE;

/// Result of running a wardrobe command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as a JSON event
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("not a JSON event: {line}: {e}"))
            })
            .collect()
    }
}

/// Isolated scene directory with its own config home.
pub struct TestEnv {
    pub root: TempDir,
    pub config_home: TempDir,
}

impl TestEnv {
    /// Environment holding `scene.toml` with the given content.
    pub fn with_scene(scene: &str) -> Self {
        let env = Self {
            root: TempDir::new().expect("Failed to create scene temp dir"),
            config_home: TempDir::new().expect("Failed to create config temp dir"),
        };
        env.write_file("scene.toml", scene);
        env
    }

    /// Environment holding the basic avatar scene.
    pub fn basic() -> Self {
        Self::with_scene(BASIC_SCENE)
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn scene_path(&self) -> PathBuf {
        self.path("scene.toml")
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.path(".wardrobe/scene.Avatar.lock")
    }

    pub fn selection_path(&self) -> PathBuf {
        self.path(".wardrobe/scene.Avatar.selection.toml")
    }

    /// Write a file below the scene directory
    pub fn write_file(&self, relative: &str, content: &str) {
        let full = self.path(relative);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full, content).expect("Failed to write file");
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }

    /// Load the scene document as the binary left it
    pub fn scene(&self) -> SceneDocument {
        let path = self.scene_path();
        let content = std::fs::read_to_string(&path).expect("Failed to read scene");
        parse_scene(&content, &path).expect("Scene should parse")
    }

    /// Run wardrobe from the scene directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run wardrobe from the scene directory with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_wardrobe"));
        cmd.current_dir(cwd)
            .args(args)
            .env("WARDROBE_CONFIG_HOME", self.config_home.path())
            .env_remove("RUST_LOG")
            .env_remove("WARDROBE_PARAMETER_NAME")
            .env_remove("WARDROBE_LAYER_NAME")
            .env_remove("WARDROBE_MENU_NAME")
            .env_remove("WARDROBE_CLIP_PREFIX")
            .env_remove("WARDROBE_SAVED");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute wardrobe");
        to_result(output)
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
