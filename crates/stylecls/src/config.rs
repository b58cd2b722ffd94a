//! Build configuration.
//!
//! A [`StyleConfig`] describes everything the table builder needs. Every
//! section is optional; an empty config yields the built-in scales only.
//!
//! # YAML Schema
//!
//! ```yaml
//! sizes:                 # scale overrides (alias: scale)
//!   steps: 7
//!   spacing: { base: 4, multiplier: 2 }
//!   sizing: { base: 16, multiplier: 2 }
//!   radius: { base: 2, multiplier: 2 }
//!   fontRem: 16
//!
//! colors:
//!   palette:
//!     green: "#00FF00"
//!     light_green: "#00FF00"
//!
//! fonts:
//!   iowan: Iowan Old Style
//!
//! styles:                # custom fragments, override built-ins
//!   custom:
//!     backgroundColor: blue
//!
//! shortcuts:             # merged at build time
//!   title: b red
//!
//! clsPropName: cls       # node property holding the class string
//! ```
//!
//! JSON documents with the same shape are accepted by [`StyleConfig::from_json`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::fragment::StyleFragment;
use crate::scale::Progression;

/// Recognized config file extensions, in priority order.
pub const CONFIG_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// Default node property holding the class string.
pub const DEFAULT_CLS_PROP: &str = "cls";

/// Configuration compiled by [`TableBuilder`](crate::TableBuilder).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleConfig {
    /// Scale family overrides.
    #[serde(alias = "scale")]
    pub sizes: ScaleConfig,
    pub colors: ColorsConfig,
    /// Font alias -> family name.
    pub fonts: BTreeMap<String, String>,
    /// Custom fragments, registered after the generated families.
    pub styles: BTreeMap<String, StyleFragment>,
    /// Shortcut name -> space-separated token string.
    pub shortcuts: BTreeMap<String, String>,
    /// Node property the rewriter reads class strings from.
    #[serde(alias = "cls_prop_name")]
    pub cls_prop_name: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            sizes: ScaleConfig::default(),
            colors: ColorsConfig::default(),
            fonts: BTreeMap::new(),
            styles: BTreeMap::new(),
            shortcuts: BTreeMap::new(),
            cls_prop_name: DEFAULT_CLS_PROP.to_string(),
        }
    }
}

/// Palette configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Color name -> literal color value.
    pub palette: BTreeMap<String, String>,
}

/// Scale parameters for the generated families.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScaleConfig {
    /// Highest index generated for each progression.
    pub steps: u32,
    pub spacing: Progression,
    pub sizing: Progression,
    pub radius: Progression,
    /// Multiplier applied to the type-scale ratios.
    #[serde(alias = "font_rem")]
    pub font_rem: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            steps: 7,
            spacing: Progression::new(4.0, 2.0),
            sizing: Progression::new(16.0, 2.0),
            radius: Progression::new(2.0, 2.0),
            font_rem: 16.0,
        }
    }
}

impl StyleConfig {
    /// Parses a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Loads a configuration file, choosing the parser by extension.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedExtension`] for extensions outside
    /// [`CONFIG_EXTENSIONS`], [`ConfigError::Load`] if the file cannot be read
    /// and [`ConfigError::Parse`] (with the path) if it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_ascii_lowercase()))
            .filter(|e| CONFIG_EXTENSIONS.contains(&e.as_str()))
            .ok_or_else(|| ConfigError::UnsupportedExtension {
                path: path.to_path_buf(),
            })?;

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Load {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;

        let parsed = if extension == ".json" {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        };

        parsed.map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }
}
