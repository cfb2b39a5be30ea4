//! Terminal gallery of UI-control configurators.
//!
//! A fixed registry of control kinds, one configurator panel per kind (a
//! settings form plus a live preview), a master-detail host, a camera page
//! over a pluggable capture service and an interactive TUI around them.

pub mod capture;
pub mod cli;
pub mod cli_args;
pub mod color;
pub mod config;
pub mod host;
pub mod logging;
pub mod panels;
pub mod platform;
pub mod registry;
pub mod tui;
