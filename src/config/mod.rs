// SPDX-License-Identifier: MPL-2.0
//! Loading and saving overlay preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[appearance]` - Accent colour
//! - `[timing]` - Default lifetimes per overlay kind
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `EPHEMERA_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use ephemera::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.appearance.accent = Some("#10b981".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr") used for default labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Visual settings shared by every overlay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceConfig {
    /// Accent colour as `#rrggbb`.
    #[serde(default = "default_accent", skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            accent: default_accent(),
        }
    }
}

/// Default lifetimes, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    /// Lifetime of toasts and of anything without a kind-specific default.
    #[serde(
        default = "default_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_ms: Option<u64>,

    #[serde(
        default = "default_snackbar_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub snackbar_duration_ms: Option<u64>,

    #[serde(
        default = "default_tooltip_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub tooltip_duration_ms: Option<u64>,

    #[serde(
        default = "default_badge_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub badge_duration_ms: Option<u64>,

    #[serde(
        default = "default_highlight_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub highlight_duration_ms: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: default_duration_ms(),
            snackbar_duration_ms: default_snackbar_duration_ms(),
            tooltip_duration_ms: default_tooltip_duration_ms(),
            badge_duration_ms: default_badge_duration_ms(),
            highlight_duration_ms: default_highlight_duration_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Overlay configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub appearance: AppearanceConfig,

    #[serde(default)]
    pub timing: TimingConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_accent() -> Option<String> {
    Some(DEFAULT_ACCENT_HEX.to_string())
}

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_DURATION_MS)
}

fn default_snackbar_duration_ms() -> Option<u64> {
    Some(DEFAULT_SNACKBAR_DURATION_MS)
}

fn default_tooltip_duration_ms() -> Option<u64> {
    Some(DEFAULT_TOOLTIP_DURATION_MS)
}

fn default_badge_duration_ms() -> Option<u64> {
    Some(DEFAULT_BADGE_DURATION_MS)
}

fn default_highlight_duration_ms() -> Option<u64> {
    Some(DEFAULT_HIGHLIGHT_DURATION_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
