//! Help overlay and footer hints, both derived from the dispatcher bindings.

use crossterm_actions::{AppEvent, NavigationEvent, SelectionEvent, TuiEvent};
use ratatui::{
    Frame,
    crossterm::event::KeyCode,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::tui::{AppAction, Theme, dispatcher};

/// Which screen the overlay describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpScreen {
    Gallery,
    Camera,
}

/// Bindings that are not dispatcher actions.
#[derive(Debug, Clone, Copy)]
struct RawKey {
    keys: &'static str,
    description: &'static str,
}

enum Entry {
    Action(AppAction),
    Raw(RawKey),
}

struct Section {
    title: &'static str,
    entries: &'static [Entry],
}

const fn raw(keys: &'static str, description: &'static str) -> Entry {
    Entry::Raw(RawKey { keys, description })
}

const COMMON: Section = Section {
    title: "Global",
    entries: &[
        Entry::Action(AppAction::Tui(TuiEvent::App(AppEvent::Quit))),
        Entry::Action(AppAction::Tui(TuiEvent::App(AppEvent::Help))),
        Entry::Action(AppAction::Camera),
    ],
};

const GALLERY_SECTIONS: &[Section] = &[
    COMMON,
    Section {
        title: "Panes",
        entries: &[
            Entry::Action(AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next))),
            Entry::Action(AppAction::Tui(TuiEvent::Selection(SelectionEvent::Prev))),
            Entry::Action(AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up))),
            Entry::Action(AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down))),
        ],
    },
    Section {
        title: "Settings",
        entries: &[
            Entry::Action(AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Left))),
            Entry::Action(AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Right))),
            Entry::Action(AppAction::ValueDecrementSmall),
            Entry::Action(AppAction::ValueIncrementSmall),
            Entry::Action(AppAction::ValueDecrementLarge),
            Entry::Action(AppAction::ValueIncrementLarge),
            raw("Enter", "Type a value or step a choice"),
            raw("Esc", "Cancel typing"),
            raw("Shift+Enter", "New line in multi-line text"),
        ],
    },
];

const CAMERA_SECTIONS: &[Section] = &[
    COMMON,
    Section {
        title: "Recording",
        entries: &[raw("Enter", "Start or stop recording"), raw("Esc", "Back to gallery")],
    },
];

/// Actions shown in the gallery footer.
pub const GALLERY_FOOTER_ACTIONS: &[AppAction] = &[
    AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)),
    AppAction::Camera,
    AppAction::Tui(TuiEvent::App(AppEvent::Help)),
    AppAction::Tui(TuiEvent::App(AppEvent::Quit)),
];

/// Actions shown in the camera page footer.
pub const CAMERA_FOOTER_ACTIONS: &[AppAction] = &[
    AppAction::Tui(TuiEvent::App(AppEvent::Help)),
    AppAction::Tui(TuiEvent::App(AppEvent::Quit)),
];

/// Column width of the description in the overlay.
const DESCRIPTION_WIDTH: usize = 30;

/// `(keys, description)` for a dispatcher action, if it is bound.
fn action_row(action: &AppAction) -> Option<(String, String)> {
    let entries = dispatcher().config().help_entries();
    let entry = entries.get(action)?;
    let keys = entry
        .keys
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Some((keys, entry.description.unwrap_or("").to_string()))
}

/// Footer text, e.g. `next: Tab | help: ? | record: Enter`.
///
/// Each action is labelled with the first word of its description.
pub fn format_footer(actions: &[AppAction], extras: &[(&str, &str)]) -> String {
    let entries = dispatcher().config().help_entries();
    let bound = actions.iter().filter_map(|action| {
        let entry = entries.get(action)?;
        let key = entry.keys.first()?;
        let word = entry.description?.split_whitespace().next()?;
        Some(format!("{}: {key}", word.to_lowercase()))
    });
    let extra = extras.iter().map(|(desc, key)| format!("{desc}: {key}"));
    bound.chain(extra).collect::<Vec<_>>().join(" | ")
}

/// Overlay lines for one screen.
fn help_lines(screen: HelpScreen) -> Vec<Line<'static>> {
    let sections = match screen {
        HelpScreen::Gallery => GALLERY_SECTIONS,
        HelpScreen::Camera => CAMERA_SECTIONS,
    };
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let keys_style = Style::default().fg(Color::Gray);

    let mut lines = Vec::new();
    for section in sections {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(section.title, heading)));
        for entry in section.entries {
            let (keys, description) = match entry {
                Entry::Action(action) => match action_row(action) {
                    Some(row) => row,
                    None => continue,
                },
                Entry::Raw(key) => (key.keys.to_string(), key.description.to_string()),
            };
            lines.push(Line::from(vec![
                Span::raw(format!("  {description:<DESCRIPTION_WIDTH$}")),
                Span::styled(keys, keys_style),
            ]));
        }
    }
    lines
}

/// Centered rectangle of at most `width` x `height` cells.
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let vertical =
        Layout::vertical([Constraint::Length(height.min(area.height))]).flex(Flex::Center);
    let horizontal =
        Layout::horizontal([Constraint::Length(width.min(area.width))]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

/// Keys that close the overlay.
pub fn closes_help(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?')
    )
}

/// Render the help overlay for `screen`.
pub fn render_help(frame: &mut Frame, screen: HelpScreen, theme: &Theme) {
    let lines = help_lines(screen);
    // Content, blank line, hint, borders.
    let height = lines.len() as u16 + 4;
    let area = popup_area(frame.area(), 60, height);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Keys ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content, hint] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
    frame.render_widget(Paragraph::new(lines), content);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Esc, ? or Enter closes",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center),
        hint,
    );
}
