//! CLI entry point for control-gallery.

use std::io;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr};

use control_gallery::cli::{Cli, render_component, render_registry};
use control_gallery::config::GalleryConfig;
use control_gallery::logging::init_logging;
use control_gallery::platform::{GET_PLATFORM_VERSION, PlatformChannel};
use control_gallery::registry::ComponentRegistry;
use control_gallery::tui;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "control-gallery", &mut io::stdout());
        return Ok(());
    }

    let config = GalleryConfig::layered(cli.config.as_deref(), &cli.to_config_overrides())
        .wrap_err("Failed to load configuration")?;

    if let Some(ref path) = cli.save_config {
        config
            .save(path)
            .wrap_err_with(|| format!("Failed to save config to {}", path.display()))?;
        eprintln!("Saved configuration to {}", path.display());
    }

    let registry = ComponentRegistry::builtin();

    if cli.wants_tui() {
        let _guard = init_logging(cli.log_file.as_deref(), Some(&cli.log_level));
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting gallery");
        return tui::run(&config, registry);
    }

    if cli.platform_version {
        let version = PlatformChannel
            .handle(GET_PLATFORM_VERSION)
            .wrap_err("Platform query failed")?;
        println!("{version}");
    } else if cli.list {
        print!("{}", render_registry(&registry, cli.format)?);
    } else if let Some(ref id) = cli.render {
        let output = render_component(&registry, id, cli.format)
            .wrap_err_with(|| format!("Failed to render '{id}'"))?;
        print!("{output}");
    }

    Ok(())
}
