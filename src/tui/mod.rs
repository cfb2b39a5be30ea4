//! Interactive TUI: the gallery master-detail screen and the camera page.
//!
//! Each screen is an activity owning its own tui-realm `Application`; the
//! registry, host, camera page and theme travel between them in a shared
//! [`activity::Context`].

mod activities;
mod activity;
mod components;
mod theme;

use std::io::{Stdout, stdout};
use std::sync::LazyLock;

use color_eyre::eyre::{Result, WrapErr};
use crossterm_actions::{
    ActionBinding, ActionConfig, AppEvent, EditingMode, TuiEvent, TuiRealmDispatcher,
    defaults, keys,
};
use ratatui::{
    Terminal,
    crossterm::ExecutableCommand,
    crossterm::terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
    prelude::CrosstermBackend,
};

use crate::capture::{CameraPage, CaptureService, UnavailableCapture};
use crate::config::GalleryConfig;
use crate::host::GalleryHost;
use crate::registry::ComponentRegistry;

pub use theme::Theme;

use activities::Msg;
use activity::{ActivityManager, Context};

/// Everything a key press can mean, across both screens.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum AppAction {
    /// Standard bindings (navigation, input, selection, app)
    Tui(TuiEvent),
    /// Toggle between the gallery and the camera page
    Camera,
    ValueIncrementSmall,
    ValueDecrementSmall,
    /// Five steps at once
    ValueIncrementLarge,
    ValueDecrementLarge,
}

/// Single-character bindings layered over the emacs defaults.
const CUSTOM_BINDINGS: [(AppAction, char, &str); 5] = [
    (AppAction::Camera, 'c', "Camera page"),
    (AppAction::ValueDecrementSmall, '[', "Decrease value"),
    (AppAction::ValueIncrementSmall, ']', "Increase value"),
    (AppAction::ValueDecrementLarge, '{', "Decrease value (5x)"),
    (AppAction::ValueIncrementLarge, '}', "Increase value (5x)"),
];

fn build_dispatcher() -> TuiRealmDispatcher<AppAction> {
    let mut config = ActionConfig::new(EditingMode::Emacs);

    for binding in defaults::emacs_defaults().bindings() {
        config.bind(ActionBinding {
            action: AppAction::Tui(binding.action),
            keys: binding.keys.clone(),
            description: binding.description.clone(),
        });
    }

    for (app_action, key, description) in CUSTOM_BINDINGS {
        config.bind(
            ActionBinding::builder()
                .action(app_action)
                .key(keys::char(key))
                .description(description)
                .build(),
        );
    }

    config.compile();
    TuiRealmDispatcher::new(config)
}

static DISPATCHER: LazyLock<TuiRealmDispatcher<AppAction>> = LazyLock::new(build_dispatcher);

/// Key dispatcher shared by every component.
pub fn dispatcher() -> &'static TuiRealmDispatcher<AppAction> {
    &DISPATCHER
}

/// Actions every component answers the same way.
pub fn handle_global_app_events(action: &AppAction) -> Option<Msg> {
    match action {
        AppAction::Tui(TuiEvent::App(AppEvent::Quit)) => Some(Msg::Quit),
        AppAction::Tui(TuiEvent::App(AppEvent::Help)) => Some(Msg::ShowHelp),
        AppAction::Camera => Some(Msg::SwitchToCamera),
        _ => None,
    }
}

/// Raw mode plus alternate screen, undone on drop so errors and panics
/// leave a usable shell behind.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn start() -> Result<Self> {
        enable_raw_mode().wrap_err("Failed to enable raw mode")?;
        stdout().execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            tracing::warn!(error = %e, "failed to leave raw mode");
        }
        if let Err(e) = stdout().execute(LeaveAlternateScreen) {
            tracing::warn!(error = %e, "failed to leave alternate screen");
        }
    }
}

/// Run the gallery until the user quits.
pub fn run(config: &GalleryConfig, registry: ComponentRegistry) -> Result<()> {
    let theme = Theme::from_config(config).wrap_err("Invalid appearance settings")?;
    let host = GalleryHost::with_initial(&registry, config.initial());
    // No platform capture backend is linked in; recording attempts report it.
    let service: Box<dyn CaptureService> = Box::new(UnavailableCapture);
    let camera = CameraPage::new(service, config.camera_output());

    let context = Context {
        registry,
        host,
        camera,
        theme,
        show_help: false,
        message: None,
    };

    let mut session = TerminalSession::start()?;
    let result = ActivityManager::new(context).run(&mut session.terminal);
    drop(session);

    tracing::info!(ok = result.is_ok(), "gallery closed");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_bindings_have_help_entries() {
        let entries = dispatcher().config().help_entries();
        for (app_action, _, description) in CUSTOM_BINDINGS {
            let entry = entries
                .get(&app_action)
                .unwrap_or_else(|| panic!("{app_action:?} is not bound"));
            assert_eq!(entry.description, Some(description));
        }
    }

    #[test]
    fn camera_key_is_global() {
        assert_eq!(
            handle_global_app_events(&AppAction::Camera),
            Some(Msg::SwitchToCamera)
        );
        assert_eq!(handle_global_app_events(&AppAction::ValueIncrementSmall), None);
    }
}
