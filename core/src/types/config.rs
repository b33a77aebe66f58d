use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};


/// Horizontal footprint of a single node box.
pub const NODE_WIDTH: f64 = 300.0;
/// Minimum gap between neighbouring sibling subtrees.
pub const MIN_HORIZONTAL_SPACING: f64 = 150.0;
/// Distance between depth levels.
pub const VERTICAL_SPACING: f64 = 350.0;
/// The x-coordinate the laid-out tree is centered on.
pub const CANVAS_CENTER_X: f64 = 600.0;

/// Name of the settings file inside the config directory.
pub const SETTINGS_FILE: &str = "settings.yaml";


/// Geometry used by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    #[serde(default = "default_node_width")]
    pub node_width: f64,
    #[serde(default = "default_min_horizontal_spacing")]
    pub min_horizontal_spacing: f64,
    #[serde(default = "default_vertical_spacing")]
    pub vertical_spacing: f64,
    #[serde(default = "default_canvas_center_x")]
    pub canvas_center_x: f64,
}

fn default_node_width() -> f64 {
    NODE_WIDTH
}

fn default_min_horizontal_spacing() -> f64 {
    MIN_HORIZONTAL_SPACING
}

fn default_vertical_spacing() -> f64 {
    VERTICAL_SPACING
}

fn default_canvas_center_x() -> f64 {
    CANVAS_CENTER_X
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            node_width: default_node_width(),
            min_horizontal_spacing: default_min_horizontal_spacing(),
            vertical_spacing: default_vertical_spacing(),
            canvas_center_x: default_canvas_center_x(),
        }
    }
}


/// User settings, read from `settings.yaml` in the config directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Pretty-print JSON output unless a command says otherwise. Default: false.
    #[serde(default)]
    pub pretty: bool,
}


impl Settings {
    /// Parse settings from YAML text. Empty text yields defaults.
    pub fn from_yaml(input: &str) -> Result<Settings> {
        if input.trim().is_empty() {
            return Ok(Settings::default());
        }
        Ok(serde_yaml::from_str(input)?)
    }

    /// Load `settings.yaml` from a config directory. A missing file yields defaults.
    pub fn load(config_dir: &Path) -> Result<Settings> {
        let path = config_dir.join(SETTINGS_FILE);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "loading settings");
                Self::from_yaml(&content)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                Ok(Settings::default())
            }
            Err(source) => Err(Error::Io { path, source }),
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
