//! CLI argument definitions (build.rs compatible).
//!
//! This module contains only struct/enum definitions with no dependencies on
//! other crate modules, allowing it to be included from build.rs for man page
//! generation.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML format (default)
    #[default]
    Yaml,
    /// JSON format
    Json,
}

/// Terminal gallery of UI-control configurators with live previews.
#[derive(Parser, Debug, Clone)]
#[command(name = "control-gallery")]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("action")
        .args(["list", "render", "platform_version", "completions"])
        .multiple(false)
))]
pub struct Cli {
    /// Print the component catalog and exit
    #[arg(long)]
    pub list: bool,

    /// Print the default settings and preview of one component and exit
    #[arg(long, value_name = "ID")]
    pub render: Option<String>,

    /// Output format for --list and --render
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// Print the host platform version and exit
    #[arg(long)]
    pub platform_version: bool,

    /// Component id selected when the gallery opens (default: first entry)
    #[arg(long, value_name = "ID")]
    pub initial: Option<String>,

    /// Load configuration from TOML file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Save current configuration to TOML file
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Recording destination for the camera page (default: <temp>/output.mov)
    #[arg(long, value_name = "FILE")]
    pub camera_output: Option<PathBuf>,

    /// Accent color in any CSS format (hex, rgb(), hsl(), named)
    #[arg(
        long,
        value_name = "COLOR",
        value_parser = |s: &str| s.parse::<csscolorparser::Color>().map(|_| s.to_string()).map_err(|e| e.to_string())
    )]
    pub accent: Option<String>,

    /// Log file path (default: control-gallery.log)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (default: info)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}
