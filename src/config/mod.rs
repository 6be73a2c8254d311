//! Plugin option management.
//!
//! # Fields
//!
//! | Field            | Purpose                                          |
//! |------------------|--------------------------------------------------|
//! | `mode`           | Target output: html, svelte, react, vue, metadata |
//! | `include`        | Glob patterns of sources to process               |
//! | `exclude`        | Glob patterns of sources to skip                  |
//! | `theme`          | Single arborium theme name                        |
//! | `themes`         | Light/dark theme pair (exclusive with `theme`)    |
//! | `components`     | Component name -> import path registry             |
//! | `components_dir` | Directory to auto-discover components from        |
//!
//! # Example
//!
//! ```toml
//! mode = "svelte"
//! include = ["content/**/*.norg"]
//! components_dir = "src/components"
//!
//! [themes]
//! light = "forest-light"
//! dark = "forest-dark"
//!
//! [components]
//! Chart = "$lib/Chart.svelte"
//! ```
//!
//! Options deserialize leniently; [`PluginOptions::validate`] turns them
//! into a [`PluginConfig`], rejecting on the first violation before any
//! source file is touched.

pub mod defaults;
mod error;
mod filter;

pub use error::ConfigError;
pub use filter::Filter;

use crate::types::Framework;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fmt, fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Mode
// ============================================================================

/// Target output mode. A closed enumeration: every generator dispatch
/// matches on it exhaustively, so adding a mode is a compile-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Html,
    Svelte,
    React,
    Vue,
    /// Metadata-only modules, no markup output.
    Metadata,
}

impl Mode {
    /// The component framework of this mode, if it has one.
    ///
    /// `Html` and `Metadata` have none: inline component modules do not
    /// exist in those modes.
    pub fn framework(self) -> Option<Framework> {
        match self {
            Self::Svelte => Some(Framework::Svelte),
            Self::React => Some(Framework::React),
            Self::Vue => Some(Framework::Vue),
            Self::Html | Self::Metadata => None,
        }
    }

    /// Extension appended to canonical inline component module ids.
    pub fn inline_extension(self) -> Option<&'static str> {
        self.framework().map(Framework::extension)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Html => "html",
            Self::Svelte => "svelte",
            Self::React => "react",
            Self::Vue => "vue",
            Self::Metadata => "metadata",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Options (as deserialized)
// ============================================================================

/// A light/dark theme pair, applied via `prefers-color-scheme`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemePair {
    pub light: String,
    pub dark: String,
}

/// Raw plugin options, as authored.
///
/// `theme` and `themes` are both optional here so deserialization never
/// hides the mutual-exclusion rule; [`PluginOptions::validate`] enforces it.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PluginOptions {
    #[serde(default = "defaults::mode")]
    #[educe(Default = defaults::mode())]
    pub mode: Mode,

    /// Glob patterns of sources to process. Empty means all `.norg` files.
    #[serde(default = "defaults::empty_patterns")]
    pub include: Vec<String>,

    /// Glob patterns of sources to skip. Exclusion wins over inclusion.
    #[serde(default = "defaults::empty_patterns")]
    pub exclude: Vec<String>,

    /// Single theme name.
    #[serde(default)]
    pub theme: Option<String>,

    /// Light/dark theme pair. Mutually exclusive with `theme`.
    #[serde(default)]
    pub themes: Option<ThemePair>,

    /// Explicit component name -> import path registry. Entries here win
    /// over auto-discovered components of the same name.
    #[serde(default)]
    pub components: BTreeMap<String, String>,

    /// Directory to auto-discover components from, scanned once at plugin
    /// construction for files with the active framework extension.
    #[serde(default)]
    pub components_dir: Option<PathBuf>,
}

impl PluginOptions {
    /// Parse options from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load options from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Validate eagerly, rejecting on the first violation.
    pub fn validate(self) -> Result<PluginConfig, ConfigError> {
        let theme = match (self.theme, self.themes) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingThemes),
            (None, None) => return Err(ConfigError::MissingTheme),
            (Some(name), None) => ThemeSpec::Single(name),
            (None, Some(pair)) => ThemeSpec::LightDark {
                light: pair.light,
                dark: pair.dark,
            },
        };

        let filter = Filter::new(&self.include, &self.exclude)?;

        if let Some(dir) = &self.components_dir
            && !dir.is_dir()
        {
            return Err(ConfigError::ComponentsDir(dir.clone()));
        }

        Ok(PluginConfig {
            mode: self.mode,
            filter,
            theme,
            components: self.components,
            components_dir: self.components_dir,
        })
    }
}

// ============================================================================
// Validated configuration
// ============================================================================

/// Normalized theme specification, exactly one of the two shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSpec {
    Single(String),
    LightDark { light: String, dark: String },
}

/// Validated plugin configuration. Construction of this type is the only
/// way options enter the pipeline.
#[derive(Debug, Clone)]
pub struct PluginConfig {
    pub mode: Mode,
    pub filter: Filter,
    pub theme: ThemeSpec,
    pub components: BTreeMap<String, String>,
    pub components_dir: Option<PathBuf>,
}

// ============================================================================
// Tests
// ============================================================================
