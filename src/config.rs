//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/fasttree/fasttree.toml`
//! 3. Explicit config file (e.g. `--config` on the command line)
//! 4. Environment variables: `FASTTREE_*` prefix (`FASTTREE_ICONS__CORNER` for nested keys)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::domain::{TreeError, TreeResult};

/// Connector glyphs drawn in front of rendered nodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Icons {
    /// Continues the line of a non-last ancestor
    pub vertical: String,
    /// Connector of a node with later siblings
    pub branch: String,
    /// Connector of the last sibling
    pub corner: String,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            vertical: "│".into(),
            branch: "├".into(),
            corner: "└".into(),
        }
    }
}

/// Raw icons for intermediate parsing (fields are Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawIcons {
    pub vertical: Option<String>,
    pub branch: Option<String>,
    pub corner: Option<String>,
}

impl Icons {
    fn merge(&self, overlay: &RawIcons) -> Self {
        Self {
            vertical: overlay.vertical.clone().unwrap_or_else(|| self.vertical.clone()),
            branch: overlay.branch.clone().unwrap_or_else(|| self.branch.clone()),
            corner: overlay.corner.clone().unwrap_or_else(|| self.corner.clone()),
        }
    }
}

/// Engine configuration: parent-reference field, spacer token and glyphs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TreeConfig {
    /// Field holding the parent id (default: `pid`)
    pub pid_name: String,
    /// Indentation token appended per level (default: `&nbsp;`)
    pub nbsp: String,
    /// Connector glyphs
    pub icons: Icons,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            pid_name: "pid".into(),
            nbsp: "&nbsp;".into(),
            icons: Icons::default(),
        }
    }
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawTreeConfig {
    pub pid_name: Option<String>,
    pub nbsp: Option<String>,
    pub icons: RawIcons,
}

/// Get the XDG config directory for fasttree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "fasttree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("fasttree.toml"))
}

/// Load a TOML file into RawTreeConfig for manual merging.
fn load_raw_config(path: &Path) -> TreeResult<RawTreeConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| TreeError::config(format!("read {}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| TreeError::config(format!("parse {}: {}", path.display(), e)))
}

impl TreeConfig {
    /// Reject configurations the engine cannot work with.
    pub fn validate(&self) -> TreeResult<()> {
        if self.pid_name.trim().is_empty() {
            return Err(TreeError::config("parent field name must not be empty"));
        }
        let icons = &self.icons;
        if icons.vertical.is_empty() || icons.branch.is_empty() || icons.corner.is_empty() {
            return Err(TreeError::config("connector glyphs must not be empty"));
        }
        Ok(())
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawTreeConfig) -> Self {
        Self {
            pid_name: overlay
                .pid_name
                .clone()
                .unwrap_or_else(|| self.pid_name.clone()),
            nbsp: overlay.nbsp.clone().unwrap_or_else(|| self.nbsp.clone()),
            icons: self.icons.merge(&overlay.icons),
        }
    }

    /// Load configuration from all layers.
    ///
    /// A missing global file is skipped; a missing explicit file is an error.
    pub fn load(config_file: Option<&Path>) -> TreeResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                tracing::debug!("loading global config: {}", global_path.display());
                let raw = load_raw_config(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(path) = config_file {
            tracing::debug!("loading config: {}", path.display());
            let raw = load_raw_config(path)?;
            current = current.merge_with(&raw);
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()?;
        Ok(current)
    }

    /// Apply FASTTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> TreeResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("FASTTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("pid_name") {
            settings.pid_name = val;
        }
        if let Ok(val) = config.get_string("nbsp") {
            settings.nbsp = val;
        }
        if let Ok(val) = config.get_string("icons.vertical") {
            settings.icons.vertical = val;
        }
        if let Ok(val) = config.get_string("icons.branch") {
            settings.icons.branch = val;
        }
        if let Ok(val) = config.get_string("icons.corner") {
            settings.icons.corner = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> TreeResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| TreeError::config(format!("serialize config: {e}")))
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# fasttree configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/fasttree/fasttree.toml
#   Explicit: --config <file>
#   Env:      FASTTREE_* environment variables (FASTTREE_ICONS__CORNER for [icons])

# Field holding the parent id
# pid_name = "pid"

# Indentation token appended per tree level
# nbsp = "&nbsp;"

[icons]
# vertical = "│"
# branch = "├"
# corner = "└"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> TreeError {
    TreeError::config(e.to_string())
}
