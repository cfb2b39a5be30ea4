//! Camera activity - starts and stops a recording and reports its outcome.

use std::io::Stdout;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{Local, TimeDelta};
use color_eyre::eyre::Result;
use crossterm_actions::{InputEvent, TuiEvent};
use ratatui::{
    Terminal,
    crossterm::event::{self, Event as CrosstermEvent},
    layout::{Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{
    Application, Component, Event, EventListenerCfg, MockComponent, PollStrategy, State,
    command::{Cmd, CmdResult},
    props::{AttrValue, Attribute, Props},
};

use crate::capture::{CameraPage, CaptureService, RecordingFinished, RecordingState};
use crate::tui::Theme;
use crate::tui::activity::{Activity, Context, ExitReason};
use crate::tui::components::{
    CAMERA_FOOTER_ACTIONS, HelpScreen, closes_help, format_footer, render_help,
};
use crate::tui::{AppAction, dispatcher, handle_global_app_events};

// ============================================================================
// Component identifiers (scoped to CameraActivity)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    Recorder,
}

// ============================================================================
// Messages (scoped to CameraActivity)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Quit,
    Back,
    ShowHelp,
    ToggleRecording,
}

// ============================================================================
// User events (required by tui-realm)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {}

/// `mm:ss` of a running recording.
fn format_elapsed(elapsed: TimeDelta) -> String {
    let secs = elapsed.num_seconds().max(0);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

// ============================================================================
// Recorder Component
// ============================================================================

/// Snapshot of the camera page for display.
struct Recorder {
    props: Props,
    state: RecordingState,
    destination: PathBuf,
    status: Option<String>,
    last: Option<RecordingFinished>,
    theme: Theme,
}

impl Recorder {
    fn new<S: CaptureService>(page: &CameraPage<S>, theme: Theme) -> Self {
        Self {
            props: Props::default(),
            state: page.state().clone(),
            destination: page.destination().to_path_buf(),
            status: page.status().map(str::to_string),
            last: page.last_finished().cloned(),
            theme,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(Color::DarkGray);

        let state_line = match &self.state {
            RecordingState::Idle => Line::from(vec![
                Span::styled("State: ", bold),
                Span::styled("○ Idle", dim),
            ]),
            RecordingState::Recording { .. } => Line::from(vec![
                Span::styled("State: ", bold),
                Span::styled(
                    "● Recording",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  {}", format_elapsed(self.state.elapsed(Local::now())))),
            ]),
        };

        let mut lines = vec![
            state_line,
            Line::from(vec![
                Span::styled("Destination: ", bold),
                Span::raw(self.destination.display().to_string()),
            ]),
            Line::from(""),
        ];

        if let Some(status) = &self.status {
            lines.push(Line::from(Span::styled(
                status.clone(),
                Style::default().fg(self.theme.accent),
            )));
        }

        match &self.last {
            Some(RecordingFinished {
                location,
                error: None,
            }) => lines.push(Line::from(vec![
                Span::styled("Last recording: ", bold),
                Span::raw(location.display().to_string()),
            ])),
            Some(RecordingFinished {
                error: Some(error), ..
            }) => lines.push(Line::from(vec![
                Span::styled("Last recording failed: ", bold),
                Span::styled(error.to_string(), Style::default().fg(Color::Red)),
            ])),
            None => {}
        }

        lines.push(Line::from(""));
        let action = if self.state.is_recording() {
            "Press Enter to stop recording"
        } else {
            "Press Enter to start recording"
        };
        lines.push(Line::from(Span::styled(action, dim)));
        lines
    }
}

impl MockComponent for Recorder {
    fn view(&mut self, frame: &mut ratatui::Frame, area: Rect) {
        let block = Block::default()
            .title(" Camera ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(self.lines()), inner);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, UserEvent> for Recorder {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        // Handle Esc for going back (not mapped in dispatcher)
        if key_event.code == tuirealm::event::Key::Esc {
            return Some(Msg::Back);
        }

        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            // Convert global Msg to our local Msg
            return match msg {
                crate::tui::activities::Msg::Quit => Some(Msg::Quit),
                crate::tui::activities::Msg::ShowHelp => Some(Msg::ShowHelp),
                crate::tui::activities::Msg::SwitchToCamera => Some(Msg::Back), // Toggle back
                _ => None,
            };
        }

        match action {
            AppAction::Tui(TuiEvent::Input(InputEvent::Confirm)) => Some(Msg::ToggleRecording),
            _ => None,
        }
    }
}

// ============================================================================
// CameraActivity
// ============================================================================

#[derive(Default)]
pub struct CameraActivity {
    app: Option<Application<Id, Msg, UserEvent>>,
    context: Option<Context>,
    exit_reason: Option<ExitReason>,
}

impl CameraActivity {
    fn create_application() -> Application<Id, Msg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }

    fn update_recorder(app: &mut Application<Id, Msg, UserEvent>, context: &Context) {
        let _ = app.umount(&Id::Recorder);
        let recorder = Recorder::new(&context.camera, context.theme);
        if let Err(e) = app.mount(Id::Recorder, Box::new(recorder), vec![]) {
            tracing::error!("Failed to mount recorder: {}", e);
        }
        let _ = app.active(&Id::Recorder);
    }
}

impl Activity for CameraActivity {
    fn on_create(&mut self, context: Context) {
        let mut app = Self::create_application();
        Self::update_recorder(&mut app, &context);
        self.context = Some(context);
        self.app = Some(app);
    }

    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let (Some(app), Some(context)) = (self.app.as_mut(), self.context.as_mut()) else {
            return Ok(());
        };

        // Completion notifications arrive between frames.
        if context.camera.poll() {
            Self::update_recorder(app, context);
        }

        terminal.draw(|frame| {
            let area = frame.area();

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Title
                    Constraint::Min(8),    // Recorder
                    Constraint::Length(1), // Status
                ])
                .split(area);

            let title_widget = Paragraph::new(" Control Gallery - Camera ")
                .style(Style::default().add_modifier(Modifier::BOLD));
            frame.render_widget(title_widget, rows[0]);

            app.view(&Id::Recorder, frame, rows[1]);

            let status = format_footer(
                CAMERA_FOOTER_ACTIONS,
                &[("record", "Enter"), ("back", "Esc")],
            );
            let status_widget =
                Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(status_widget, rows[2]);

            if context.show_help {
                render_help(frame, HelpScreen::Camera, &context.theme);
            }
        })?;

        if context.show_help {
            if let CrosstermEvent::Key(key) = event::read()?
                && closes_help(key.code)
            {
                context.show_help = false;
            }
            return Ok(());
        }

        // Process events through tui-realm
        match app.tick(PollStrategy::Once) {
            Ok(messages) => {
                for msg in messages {
                    match msg {
                        Msg::Quit => {
                            self.exit_reason = Some(ExitReason::Quit);
                            return Ok(());
                        }
                        Msg::Back => {
                            self.exit_reason = Some(ExitReason::SwitchToGallery);
                            return Ok(());
                        }
                        Msg::ShowHelp => context.show_help = true,
                        Msg::ToggleRecording => {
                            context.camera.toggle_recording();
                            Self::update_recorder(app, context);
                        }
                    }
                }
            }
            Err(_) => {
                // Timeout, continue
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
    use crate::capture::{UnavailableCapture, default_destination};

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn elapsed_is_minutes_and_seconds() {
        assert_eq!(format_elapsed(TimeDelta::seconds(75)), "01:15");
        assert_eq!(format_elapsed(TimeDelta::seconds(-3)), "00:00");
    }

    #[test]
    fn failed_start_is_shown_on_the_recorder() {
        let mut page = CameraPage::new(UnavailableCapture, default_destination());
        page.toggle_recording();

        let lines = text(&Recorder::new(&page, Theme::default()).lines());
        assert_eq!(lines[0], "State: ○ Idle");
        assert!(
            lines.contains(&"Could not start recording: No camera device available".to_string())
        );
        assert_eq!(lines.last().map(String::as_str), Some("Press Enter to start recording"));
    }
}
