//! Editable list of form fields, used for both the settings form and the
//! interactive controls of a preview.

use crossterm_actions::{InputEvent, NavigationEvent, SelectionEvent, TuiEvent};
use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    event::{Key, KeyEvent, KeyModifiers},
    props::{AttrValue, Attribute, Props},
};

use super::track;
use crate::panels::{FieldEdit, FieldValue, FormField, Nudge};
use crate::tui::activities::{Msg, gallery::UserEvent};
use crate::tui::{AppAction, Theme, dispatcher, handle_global_app_events};

/// Width of the label column.
const LABEL_WIDTH: u16 = 18;

/// Stand-in for a line break on a single-row field.
const NEWLINE_GLYPH: &str = "⏎";

/// Shift/Alt+Enter or Ctrl-J insert a line break into multi-line text.
fn is_line_break(key: &KeyEvent) -> bool {
    match key.code {
        Key::Enter => key
            .modifiers
            .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT),
        Key::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn single_row(text: &str) -> String {
    text.replace('\n', NEWLINE_GLYPH)
}

pub struct FieldList {
    props: Props,
    title: String,
    fields: Vec<FormField>,
    selected: usize,
    /// Typed input while a text or number field is being edited
    edit_buffer: Option<String>,
    theme: Theme,
}

impl FieldList {
    pub fn new(
        title: impl Into<String>,
        fields: Vec<FormField>,
        cursor: usize,
        theme: Theme,
    ) -> Self {
        let selected = cursor.min(fields.len().saturating_sub(1));
        Self {
            props: Props::default(),
            title: title.into(),
            fields,
            selected,
            edit_buffer: None,
            theme,
        }
    }

    /// Rows needed to show every field inside the border.
    pub fn height(fields: usize) -> u16 {
        fields.max(1) as u16 + 2
    }

    fn current(&self) -> Option<&FormField> {
        self.fields.get(self.selected)
    }

    fn edited(&self, edit: FieldEdit) -> Option<Msg> {
        let key = self.current()?.key;
        Some(Msg::FieldEdited { key, edit })
    }

    fn nudge(&self, nudge: Nudge) -> Option<Msg> {
        let edit = self.current()?.nudge(nudge)?;
        self.edited(edit)
    }

    fn start_editing(&mut self) -> bool {
        let Some(field) = self.current() else {
            return false;
        };
        if !field.accepts_typing() {
            return false;
        }
        let initial = match &field.value {
            FieldValue::Text { value, .. } => value.clone(),
            other => other.display(),
        };
        self.edit_buffer = Some(initial);
        true
    }

    fn confirm_editing(&mut self) -> Option<Msg> {
        let input = self.edit_buffer.take()?;
        let field = self.current()?;
        match field.parse_input(&input) {
            Some(edit) => self.edited(edit),
            None => Some(Msg::InvalidInput(format!(
                "Invalid value for {}: {}",
                field.label, input
            ))),
        }
    }

    fn value_spans(&self, field: &FormField, index: usize, width: usize) -> Vec<Span<'static>> {
        let active = index == self.selected && self.is_focused();
        let accent = if field.enabled {
            self.theme.accent
        } else {
            Color::DarkGray
        };
        let text_style = if field.enabled {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };

        if active && let Some(buffer) = &self.edit_buffer {
            return vec![
                Span::styled(single_row(buffer), Style::default().fg(self.theme.accent)),
                Span::styled(
                    "▏",
                    Style::default()
                        .fg(self.theme.accent)
                        .add_modifier(Modifier::SLOW_BLINK),
                ),
            ];
        }

        match &field.value {
            FieldValue::Number {
                value, min, max, ..
            } => {
                let label = format!(" {}", field.value.display());
                let track_width = width.saturating_sub(label.chars().count());
                let span = max - min;
                let fraction = if span.abs() > f64::EPSILON {
                    (value - min) / span
                } else {
                    0.0
                };
                let handle = if active { Color::White } else { Color::Gray };
                let fill = if active { accent } else { Color::DarkGray };
                let mut spans = track::slider(fraction, track_width, fill, handle);
                spans.push(Span::styled(label, text_style));
                spans
            }
            FieldValue::Toggle { on } => {
                let (mark, tone) = if *on {
                    ("● on", accent)
                } else {
                    ("○ off", Color::DarkGray)
                };
                vec![Span::styled(mark, Style::default().fg(tone))]
            }
            FieldValue::Choice { .. } => {
                let arrow = Style::default().fg(accent);
                vec![
                    Span::styled("◂ ", arrow),
                    Span::styled(field.value.display(), text_style),
                    Span::styled(" ▸", arrow),
                ]
            }
            FieldValue::Text { value, .. } if value.is_empty() => vec![Span::styled(
                field.value.display(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )],
            FieldValue::Text { .. } | FieldValue::DateTime { .. } => {
                vec![Span::styled(single_row(&field.value.display()), text_style)]
            }
        }
    }

    fn is_focused(&self) -> bool {
        self.props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag()
    }
}

impl MockComponent for FieldList {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.is_focused();

        let border_style = if focused {
            Style::default().fg(self.theme.accent)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.fields.is_empty() {
            let empty = Paragraph::new("No settings").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, inner);
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(1); self.fields.len()])
            .split(inner);

        for (index, (field, row)) in self.fields.iter().zip(rows.iter()).enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(LABEL_WIDTH), Constraint::Min(10)])
                .split(*row);

            let label_style = if index == self.selected && focused {
                self.theme.focused()
            } else if field.enabled {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let label = Paragraph::new(format!("{}:", field.label)).style(label_style);
            frame.render_widget(label, cols[0]);

            let value = Line::from(self.value_spans(field, index, cols[1].width as usize));
            frame.render_widget(Paragraph::new(value), cols[1]);
        }
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        // Losing focus abandons a half-typed value.
        if attr == Attribute::Focus && matches!(value, AttrValue::Flag(false)) {
            self.edit_buffer = None;
        }
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.selected))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(CmdDirection::Up) => {
                self.selected = self.selected.saturating_sub(1);
                CmdResult::Changed(self.state())
            }
            Cmd::Move(CmdDirection::Down) => {
                if self.selected + 1 < self.fields.len() {
                    self.selected += 1;
                }
                CmdResult::Changed(self.state())
            }
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for FieldList {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        if !self.is_focused() {
            return None;
        }

        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        // Handle editing mode separately (raw key input)
        if self.edit_buffer.is_some() {
            let multiline = self.current().is_some_and(FormField::is_multiline);
            let buffer = self.edit_buffer.as_mut()?;
            if multiline && is_line_break(&key_event) {
                buffer.push('\n');
                return None;
            }
            match key_event.code {
                Key::Enter => return self.confirm_editing(),
                Key::Esc => {
                    self.edit_buffer = None;
                    return None;
                }
                Key::Backspace => {
                    buffer.pop();
                    return None;
                }
                Key::Char(c) => {
                    buffer.push(c);
                    return None;
                }
                _ => return None,
            }
        }

        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            return Some(msg);
        }

        match action {
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)) => Some(Msg::FocusNext),
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Prev)) => Some(Msg::FocusPrev),
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)) => {
                self.perform(Cmd::Move(CmdDirection::Up));
                None
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)) => {
                self.perform(Cmd::Move(CmdDirection::Down));
                None
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Left)) => self.nudge(Nudge::Less),
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Right)) => {
                self.nudge(Nudge::More)
            }

            // Enter types into text and number fields and steps the rest
            AppAction::Tui(TuiEvent::Input(InputEvent::Confirm)) => {
                if self.start_editing() {
                    None
                } else {
                    self.nudge(Nudge::More)
                }
            }

            AppAction::ValueDecrementSmall => self.nudge(Nudge::Less),
            AppAction::ValueIncrementSmall => self.nudge(Nudge::More),
            AppAction::ValueDecrementLarge => self.nudge(Nudge::MuchLess),
            AppAction::ValueIncrementLarge => self.nudge(Nudge::MuchMore),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> FieldList {
        FieldList::new(
            "Settings",
            vec![
                FormField::text("title", "Title", "Tap me"),
                FormField::number("size", "Size", 28.0, 12.0..=64.0, 1.0),
                FormField::toggle("italic", "Italic", false),
            ],
            0,
            Theme::default(),
        )
    }

    #[test]
    fn cursor_is_clamped_to_fields() {
        let fields = vec![FormField::toggle("a", "A", true)];
        let list = FieldList::new("Controls", fields, 7, Theme::default());
        assert_eq!(list.state(), State::One(StateValue::Usize(0)));
    }

    #[test]
    fn typed_number_becomes_an_edit() {
        let mut list = list();
        list.perform(Cmd::Move(CmdDirection::Down));
        assert!(list.start_editing());
        assert_eq!(list.edit_buffer.as_deref(), Some("28"));

        list.edit_buffer = Some("40".into());
        assert_eq!(
            list.confirm_editing(),
            Some(Msg::FieldEdited {
                key: "size",
                edit: FieldEdit::Number(40.0)
            })
        );
        assert_eq!(list.edit_buffer, None);
    }

    fn type_into(list: &mut FieldList, keys: &[KeyEvent]) -> Vec<Option<Msg>> {
        keys.iter()
            .map(|key| list.on(Event::Keyboard(*key)))
            .collect()
    }

    #[test]
    fn shift_enter_breaks_lines_in_multiline_text() {
        let fields = vec![FormField::text("text", "Input", "").multiline(true)];
        let mut list = FieldList::new("Controls", fields, 0, Theme::default());
        list.attr(Attribute::Focus, AttrValue::Flag(true));
        assert!(list.start_editing());

        let replies = type_into(
            &mut list,
            &[
                KeyEvent::new(Key::Char('a'), KeyModifiers::NONE),
                KeyEvent::new(Key::Enter, KeyModifiers::SHIFT),
                KeyEvent::new(Key::Char('b'), KeyModifiers::NONE),
                KeyEvent::new(Key::Char('j'), KeyModifiers::CONTROL),
                KeyEvent::new(Key::Char('c'), KeyModifiers::NONE),
            ],
        );
        assert!(replies.iter().all(Option::is_none));
        assert_eq!(list.edit_buffer.as_deref(), Some("a\nb\nc"));

        // Plain Enter still confirms.
        assert_eq!(
            list.on(Event::Keyboard(KeyEvent::new(Key::Enter, KeyModifiers::NONE))),
            Some(Msg::FieldEdited {
                key: "text",
                edit: FieldEdit::Text("a\nb\nc".into())
            })
        );
    }

    #[test]
    fn single_line_text_confirms_on_shift_enter() {
        let fields = vec![FormField::text("title", "Title", "")];
        let mut list = FieldList::new("Settings", fields, 0, Theme::default());
        list.attr(Attribute::Focus, AttrValue::Flag(true));
        assert!(list.start_editing());

        type_into(&mut list, &[KeyEvent::new(Key::Char('x'), KeyModifiers::NONE)]);
        assert_eq!(
            list.on(Event::Keyboard(KeyEvent::new(Key::Enter, KeyModifiers::SHIFT))),
            Some(Msg::FieldEdited {
                key: "title",
                edit: FieldEdit::Text("x".into())
            })
        );
        assert_eq!(list.edit_buffer, None);
    }

    #[test]
    fn line_breaks_render_on_one_row() {
        assert_eq!(single_row("a\nb"), "a⏎b");
    }

    #[test]
    fn garbage_number_reports_invalid_input() {
        let mut list = list();
        list.perform(Cmd::Move(CmdDirection::Down));
        list.edit_buffer = Some("big".into());
        assert_eq!(
            list.confirm_editing(),
            Some(Msg::InvalidInput("Invalid value for Size: big".into()))
        );
    }

    #[test]
    fn toggles_are_stepped_not_typed() {
        let mut list = list();
        list.perform(Cmd::Move(CmdDirection::Down));
        list.perform(Cmd::Move(CmdDirection::Down));
        list.perform(Cmd::Move(CmdDirection::Down));
        assert!(!list.start_editing());
        assert_eq!(
            list.nudge(Nudge::More),
            Some(Msg::FieldEdited {
                key: "italic",
                edit: FieldEdit::Toggle(true)
            })
        );
    }

    #[test]
    fn height_includes_borders() {
        assert_eq!(FieldList::height(5), 7);
        assert_eq!(FieldList::height(0), 3);
    }
}
