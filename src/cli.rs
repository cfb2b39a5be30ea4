//! CLI argument parsing and command handling.

use serde::Serialize;

use crate::config::{AppearanceSettings, CameraSettings, GalleryConfig, GallerySettings};
use crate::host::GalleryHost;
use crate::registry::ComponentRegistry;

pub use crate::cli_args::{Cli, OutputFormat};

/// Error type for the non-interactive commands.
#[derive(Debug)]
pub enum CommandError {
    /// No component with this id
    UnknownComponent(String),
    /// YAML serialization error
    Yaml(serde_yaml::Error),
    /// JSON serialization error
    Json(serde_json::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownComponent(id) => write!(f, "Unknown component id: {}", id),
            Self::Yaml(e) => write!(f, "YAML error: {}", e),
            Self::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<serde_yaml::Error> for CommandError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml(e)
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl Cli {
    /// True when no one-shot action was requested.
    pub fn wants_tui(&self) -> bool {
        !self.list
            && self.render.is_none()
            && !self.platform_version
            && self.completions.is_none()
    }

    /// Convert flat CLI args to a nested GalleryConfig for Figment merging.
    ///
    /// Only fields that are explicitly set on the CLI end up in the
    /// serialized value, so file settings survive where the CLI is silent.
    pub fn to_config_overrides(&self) -> GalleryConfig {
        GalleryConfig {
            gallery: GallerySettings {
                initial: self.initial.clone(),
            },
            appearance: AppearanceSettings {
                accent: self.accent.clone(),
            },
            camera: CameraSettings {
                output: self.camera_output.clone(),
            },
        }
    }
}

fn serialize<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, CommandError> {
    Ok(match format {
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(value)?;
            json.push('\n');
            json
        }
    })
}

/// The catalog as a list of descriptors.
pub fn render_registry(
    registry: &ComponentRegistry,
    format: OutputFormat,
) -> Result<String, CommandError> {
    serialize(&registry.list(), format)
}

/// Default settings form and preview of one component.
pub fn render_component(
    registry: &ComponentRegistry,
    id: &str,
    format: OutputFormat,
) -> Result<String, CommandError> {
    if registry.find(id).is_none() {
        return Err(CommandError::UnknownComponent(id.to_string()));
    }
    let host = GalleryHost::with_initial(registry, Some(id));
    serialize(&host.detail(), format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn bare_invocation_starts_tui() {
        let cli = Cli::parse_from(["control-gallery"]);
        assert!(cli.wants_tui());
        assert_eq!(cli.to_config_overrides(), GalleryConfig::default());
    }

    #[test]
    fn one_shot_actions_skip_tui() {
        for args in [
            &["control-gallery", "--list"][..],
            &["control-gallery", "--render", "slider"],
            &["control-gallery", "--platform-version"],
            &["control-gallery", "--completions", "bash"],
        ] {
            let cli = Cli::parse_from(args.iter().copied());
            assert!(!cli.wants_tui(), "{args:?} should not start the TUI");
        }

        // Saving the config is not an action; the TUI still starts.
        let cli = Cli::parse_from(["control-gallery", "--save-config", "out.toml"]);
        assert!(cli.wants_tui());
    }

    #[test]
    fn actions_are_mutually_exclusive() {
        let result = Cli::try_parse_from(["control-gallery", "--list", "--render", "text"]);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_accent_is_rejected_by_parser() {
        let result = Cli::try_parse_from(["control-gallery", "--accent", "nope-color"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_component_is_an_error() {
        let registry = ComponentRegistry::builtin();
        let err = render_component(&registry, "carousel", OutputFormat::Yaml).unwrap_err();
        assert_eq!(err.to_string(), "Unknown component id: carousel");
    }
}
