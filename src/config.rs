//! TOML configuration file support, layered with figment.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Format, Serialized, Toml};
use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::capture::default_destination;
use crate::color::parse_color;

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading/writing file
    Io(std::io::Error),
    /// TOML parsing error
    Parse(toml::de::Error),
    /// TOML serialization error
    Serialize(toml::ser::Error),
    /// Layered extraction failed
    Extract(Box<figment::Error>),
    /// Invalid color format
    InvalidColor(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "TOML parse error: {}", e),
            Self::Serialize(e) => write!(f, "TOML serialize error: {}", e),
            Self::Extract(e) => write!(f, "Configuration error: {}", e),
            Self::InvalidColor(s) => write!(f, "Invalid color: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Extract(Box::new(e))
    }
}

/// Root configuration structure for TOML files.
///
/// Every leaf is optional and skipped when unset, so a partially filled value
/// can be layered over another one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub gallery: GallerySettings,
    pub appearance: AppearanceSettings,
    pub camera: CameraSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GallerySettings {
    /// Component id selected at startup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSettings {
    /// Accent color (any CSS color format)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Recording destination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl GalleryConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Defaults, then the TOML file (if any), then `overrides`.
    ///
    /// An explicitly named file that does not exist is an error.
    pub fn layered(path: Option<&Path>, overrides: &GalleryConfig) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(GalleryConfig::default()));
        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("config file not found: {}", path.display()),
                )));
            }
            figment = figment.merge(Toml::file(path));
        }
        let config: Self = figment.merge(Serialized::defaults(overrides)).extract()?;
        config.accent_rgb()?;
        Ok(config)
    }

    /// Parsed accent color, if one is configured.
    pub fn accent_rgb(&self) -> Result<Option<Srgb<u8>>, ConfigError> {
        self.appearance
            .accent
            .as_deref()
            .map(|s| parse_color(s).map_err(ConfigError::InvalidColor))
            .transpose()
    }

    /// Recording destination, defaulting to `<temp>/output.mov`.
    pub fn camera_output(&self) -> PathBuf {
        self.camera
            .output
            .clone()
            .unwrap_or_else(default_destination)
    }

    pub fn initial(&self) -> Option<&str> {
        self.gallery.initial.as_deref()
    }
}
