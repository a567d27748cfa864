//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/shapelab/shapelab.toml`
//! 3. Local config: `<dir>/.shapelab.toml`
//! 4. Environment variables: `SHAPELAB_*` prefix

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Default name of the round-trip shape file.
pub const DEFAULT_SHAPE_FILE: &str = "Shape.txt";

/// Unified configuration for shapelab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// File name used by the round trip (default: Shape.txt)
    pub shape_file: String,
    /// Directory for the round-trip file (default: a fresh temp dir)
    pub work_dir: Option<PathBuf>,
    /// Keep the shape file after reading it back
    pub keep_file: bool,
    /// Wait for Enter before exiting
    pub pause_on_exit: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shape_file: DEFAULT_SHAPE_FILE.to_string(),
            work_dir: None,
            keep_file: false,
            pause_on_exit: false,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub shape_file: Option<String>,
    pub work_dir: Option<PathBuf>,
    pub keep_file: Option<bool>,
    pub pause_on_exit: Option<bool>,
}

/// Get the XDG config directory for shapelab.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "shapelab").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("shapelab.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".shapelab.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            shape_file: overlay
                .shape_file
                .clone()
                .unwrap_or_else(|| self.shape_file.clone()),
            work_dir: overlay.work_dir.clone().or_else(|| self.work_dir.clone()),
            keep_file: overlay.keep_file.unwrap_or(self.keep_file),
            pause_on_exit: overlay.pause_on_exit.unwrap_or(self.pause_on_exit),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.shapelab.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()?;

        Ok(current)
    }

    /// Apply SHAPELAB_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("SHAPELAB")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("shape_file") {
            settings.shape_file = val;
        }
        if let Ok(val) = config.get_string("work_dir") {
            settings.work_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_bool("keep_file") {
            settings.keep_file = val;
        }
        if let Ok(val) = config.get_bool("pause_on_exit") {
            settings.pause_on_exit = val;
        }

        Ok(settings)
    }

    /// The shape file must be a bare file name: not empty, no separators,
    /// not `.` or `..`.
    fn validate(&self) -> Result<(), ApplicationError> {
        let bare = Path::new(&self.shape_file).file_name() == Some(OsStr::new(&self.shape_file));
        if !bare {
            return Err(ApplicationError::Config {
                message: format!("shape_file must be a plain file name: '{}'", self.shape_file),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# shapelab configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/shapelab/shapelab.toml
#   Local:  <dir>/.shapelab.toml
#   Env:    SHAPELAB_* environment variables
#
# The local config directory itself comes from -C/--config-dir or
# SHAPELAB_CONFIG_DIR.

# File name written and read back by `shapelab roundtrip`
# shape_file = "Shape.txt"

# Directory for the round-trip file (default: a fresh temporary directory)
# work_dir = "/tmp/shapes"

# Keep the shape file instead of deleting it after the read-back
# keep_file = false

# Wait for Enter before exiting
# pause_on_exit = false
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
