//! Gallery activity - component list on the left, live configurator on the right.

use std::io::Stdout;
use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::{
    Frame, Terminal,
    crossterm::event::{self, Event},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{Application, EventListenerCfg, PollStrategy, State, StateValue};

use crate::host::PLACEHOLDER_MESSAGE;
use crate::panels::FieldEdit;
use crate::tui::activity::{Activity, Context, ExitReason};
use crate::tui::components::{
    Catalog, FieldList, GALLERY_FOOTER_ACTIONS, HelpScreen, PreviewPane, closes_help,
    format_footer, render_help,
};

// ============================================================================
// Component identifiers (scoped to GalleryActivity)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    Catalog,
    Settings,
    Controls,
    Preview,
}

// ============================================================================
// Messages (scoped to GalleryActivity)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // Application control
    Quit,
    ShowHelp,

    // Focus/Navigation
    FocusNext,
    FocusPrev,

    // Catalog selection
    SelectNext,
    SelectPrev,

    // Field edits, from either the settings form or the preview controls
    FieldEdited { key: &'static str, edit: FieldEdit },
    InvalidInput(String),

    // Activity transition
    SwitchToCamera,
}

// ============================================================================
// User events (required by tui-realm, currently unused)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {}

// ============================================================================
// Focus management (scoped to GalleryActivity)
// ============================================================================

/// All focusable component IDs in order.
const ALL_FOCUS_IDS: &[Id] = &[Id::Catalog, Id::Settings, Id::Controls];

/// Tab navigation over the focusable panes, skipping empty ones.
pub struct FocusManager {
    current_idx: usize,
}

impl FocusManager {
    pub fn new() -> Self {
        Self { current_idx: 0 }
    }

    pub fn current_focus(&self) -> Id {
        ALL_FOCUS_IDS
            .get(self.current_idx)
            .copied()
            .unwrap_or(Id::Catalog)
    }

    /// Move to the next pane that `available` accepts. The catalog is always
    /// available, so this terminates.
    pub fn focus_next(&mut self, available: impl Fn(Id) -> bool) -> Id {
        self.step(1, available)
    }

    pub fn focus_prev(&mut self, available: impl Fn(Id) -> bool) -> Id {
        self.step(ALL_FOCUS_IDS.len() - 1, available)
    }

    fn step(&mut self, delta: usize, available: impl Fn(Id) -> bool) -> Id {
        for _ in 0..ALL_FOCUS_IDS.len() {
            self.current_idx = (self.current_idx + delta) % ALL_FOCUS_IDS.len();
            let id = self.current_focus();
            if id == Id::Catalog || available(id) {
                return id;
            }
        }
        self.current_idx = 0;
        Id::Catalog
    }

    /// Fall back to the catalog when the focused pane disappeared.
    pub fn revalidate(&mut self, available: impl Fn(Id) -> bool) -> Id {
        let id = self.current_focus();
        if id != Id::Catalog && !available(id) {
            self.current_idx = 0;
        }
        self.current_focus()
    }
}

impl Default for FocusManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Field counts of the mounted lists; a list with no fields takes no focus.
#[derive(Debug, Clone, Copy, Default)]
struct Counts {
    settings: usize,
    controls: usize,
}

impl Counts {
    fn available(self) -> impl Fn(Id) -> bool {
        move |id| match id {
            Id::Settings => self.settings > 0,
            Id::Controls => self.controls > 0,
            _ => true,
        }
    }
}

// ============================================================================
// GalleryActivity
// ============================================================================

#[derive(Default)]
pub struct GalleryActivity {
    app: Option<Application<Id, Msg, UserEvent>>,
    focus: FocusManager,
    counts: Counts,
    context: Option<Context>,
    exit_reason: Option<ExitReason>,
}

impl GalleryActivity {
    /// Create and configure the tui-realm application.
    fn create_application() -> Application<Id, Msg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }

    /// Mount every component from the current host state. `cursors` are the
    /// selected rows of the settings and controls lists.
    fn mount_components(
        app: &mut Application<Id, Msg, UserEvent>,
        context: &Context,
        cursors: (usize, usize),
    ) -> Result<Counts> {
        let theme = context.theme;
        let selected = context
            .host
            .selection()
            .and_then(|id| context.registry.position(id));
        let catalog = Catalog::new(context.registry.list(), selected, theme);
        app.mount(Id::Catalog, Box::new(catalog), vec![])?;

        let view = context.host.configurator().map(|c| c.render());
        let (title, settings, controls, items) = match view {
            Some(view) => (
                view.settings.title,
                view.settings.fields,
                view.preview.controls,
                view.preview.items,
            ),
            None => ("Settings".to_string(), Vec::new(), Vec::new(), Vec::new()),
        };
        let counts = Counts {
            settings: settings.len(),
            controls: controls.len(),
        };

        let settings = FieldList::new(title, settings, cursors.0, theme);
        app.mount(Id::Settings, Box::new(settings), vec![])?;

        let controls = FieldList::new("Controls", controls, cursors.1, theme);
        app.mount(Id::Controls, Box::new(controls), vec![])?;

        let preview = PreviewPane::new(items, theme);
        app.mount(Id::Preview, Box::new(preview), vec![])?;

        Ok(counts)
    }

    fn cursor(app: &Application<Id, Msg, UserEvent>, id: &Id) -> usize {
        match app.state(id) {
            Ok(State::One(StateValue::Usize(index))) => index,
            _ => 0,
        }
    }

    /// Remount everything after the host changed. List cursors survive an
    /// edit but reset when the selection moves.
    fn sync_components(
        app: &mut Application<Id, Msg, UserEvent>,
        context: &Context,
        focus: &mut FocusManager,
        keep_cursors: bool,
    ) -> Counts {
        let cursors = if keep_cursors {
            (
                Self::cursor(app, &Id::Settings),
                Self::cursor(app, &Id::Controls),
            )
        } else {
            (0, 0)
        };

        for id in [Id::Catalog, Id::Settings, Id::Controls, Id::Preview] {
            let _ = app.umount(&id);
        }
        let counts = match Self::mount_components(app, context, cursors) {
            Ok(counts) => counts,
            Err(e) => {
                tracing::error!("Failed to remount components: {}", e);
                Counts::default()
            }
        };

        // Restore focus after remounting
        let target = focus.revalidate(counts.available());
        let _ = app.active(&target);
        counts
    }

    fn render_detail_header(frame: &mut Frame, context: &Context, area: Rect) {
        let Some(descriptor) = context.host.descriptor() else {
            return;
        };
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{} ", descriptor.icon),
                    Style::default().fg(context.theme.accent),
                ),
                Span::styled(
                    descriptor.display_name,
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                descriptor.description,
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_placeholder(frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([Constraint::Length(1)])
            .flex(ratatui::layout::Flex::Center)
            .split(inner);
        let message = Paragraph::new(PLACEHOLDER_MESSAGE)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(message, rows[0]);
    }
}

impl Activity for GalleryActivity {
    fn on_create(&mut self, context: Context) {
        let mut app = Self::create_application();

        match Self::mount_components(&mut app, &context, (0, 0)) {
            Ok(counts) => self.counts = counts,
            Err(e) => tracing::error!("Failed to mount components: {}", e),
        }
        if let Err(e) = app.active(&Id::Catalog) {
            tracing::error!("Failed to focus catalog: {}", e);
        }

        self.context = Some(context);
        self.app = Some(app);
    }

    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let (Some(app), Some(context)) = (self.app.as_mut(), self.context.as_mut()) else {
            return Ok(());
        };
        let counts = self.counts;

        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            let main_rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Title
                    Constraint::Min(10),   // Content
                    Constraint::Length(1), // Status
                ])
                .split(area);

            // Title bar
            let title = match context.host.descriptor() {
                Some(descriptor) => format!(" Control Gallery - {} ", descriptor.display_name),
                None => " Control Gallery ".to_string(),
            };
            let title_widget =
                Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD));
            frame.render_widget(title_widget, main_rows[0]);

            // Content: catalog | detail
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
                .split(main_rows[1]);

            app.view(&Id::Catalog, frame, cols[0]);

            if context.host.descriptor().is_some() {
                let controls_height = if counts.controls > 0 {
                    FieldList::height(counts.controls)
                } else {
                    0
                };
                let detail_rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(2), // Header
                        Constraint::Length(FieldList::height(counts.settings)),
                        Constraint::Length(controls_height),
                        Constraint::Min(5), // Preview
                    ])
                    .split(cols[1]);

                Self::render_detail_header(frame, context, detail_rows[0]);
                app.view(&Id::Settings, frame, detail_rows[1]);
                if counts.controls > 0 {
                    app.view(&Id::Controls, frame, detail_rows[2]);
                }
                app.view(&Id::Preview, frame, detail_rows[3]);
            } else {
                Self::render_placeholder(frame, cols[1]);
            }

            // Status bar
            let status = context.message.clone().unwrap_or_else(|| {
                format_footer(
                    GALLERY_FOOTER_ACTIONS,
                    &[("adjust", "←→ []/{}"), ("edit", "Enter")],
                )
            });
            let status_widget =
                Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(status_widget, main_rows[2]);

            // Help modal overlay
            if context.show_help {
                render_help(frame, HelpScreen::Gallery, &context.theme);
            }
        })?;

        // Handle help modal events separately (intercepts all input when visible)
        if context.show_help {
            if let Event::Key(key) = event::read()?
                && closes_help(key.code)
            {
                context.show_help = false;
            }
            return Ok(());
        }

        // Use tick() - the canonical tui-realm heartbeat
        match app.tick(PollStrategy::Once) {
            Ok(messages) => {
                let mut sync: Option<bool> = None;

                for msg in messages {
                    match msg {
                        Msg::Quit => {
                            self.exit_reason = Some(ExitReason::Quit);
                            return Ok(());
                        }
                        Msg::SwitchToCamera => {
                            self.exit_reason = Some(ExitReason::SwitchToCamera);
                            return Ok(());
                        }
                        Msg::ShowHelp => context.show_help = true,
                        Msg::FocusNext => {
                            let next = self.focus.focus_next(self.counts.available());
                            let _ = app.active(&next);
                        }
                        Msg::FocusPrev => {
                            let prev = self.focus.focus_prev(self.counts.available());
                            let _ = app.active(&prev);
                        }
                        Msg::SelectNext => {
                            context.host.select_next(&context.registry);
                            context.message = None;
                            sync = Some(false);
                        }
                        Msg::SelectPrev => {
                            context.host.select_prev(&context.registry);
                            context.message = None;
                            sync = Some(false);
                        }
                        Msg::FieldEdited { key, edit } => {
                            context.host.apply(key, edit);
                            context.message = None;
                            sync = Some(sync.unwrap_or(true));
                        }
                        Msg::InvalidInput(message) => {
                            tracing::debug!(%message, "input rejected");
                            context.message = Some(message);
                        }
                    }
                }

                if let Some(keep_cursors) = sync {
                    self.counts =
                        Self::sync_components(app, context, &mut self.focus, keep_cursors);
                }
            }
            Err(_) => {
                // Timeout is fine, just continue
            }
        }

        Ok(())
    }

    fn will_umount(&self) -> Option<&ExitReason> {
        self.exit_reason.as_ref()
    }

    fn on_destroy(&mut self) -> Option<Context> {
        self.app = None;
        self.context.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_skips_empty_panes() {
        let mut focus = FocusManager::new();
        let counts = Counts {
            settings: 4,
            controls: 0,
        };
        assert_eq!(focus.focus_next(counts.available()), Id::Settings);
        assert_eq!(focus.focus_next(counts.available()), Id::Catalog);
        assert_eq!(focus.focus_prev(counts.available()), Id::Settings);
    }

    #[test]
    fn focus_wraps_through_all_panes() {
        let mut focus = FocusManager::new();
        let counts = Counts {
            settings: 2,
            controls: 1,
        };
        assert_eq!(focus.focus_prev(counts.available()), Id::Controls);
        assert_eq!(focus.focus_next(counts.available()), Id::Catalog);
    }

    #[test]
    fn revalidate_returns_to_catalog_when_pane_empties() {
        let mut focus = FocusManager::new();
        let full = Counts {
            settings: 2,
            controls: 1,
        };
        focus.focus_next(full.available());
        focus.focus_next(full.available());
        assert_eq!(focus.current_focus(), Id::Controls);

        assert_eq!(focus.revalidate(Counts::default().available()), Id::Catalog);
    }
}
