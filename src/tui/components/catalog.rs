//! Master list of registry entries.

use crossterm_actions::{InputEvent, NavigationEvent, SelectionEvent, TuiEvent};
use ratatui::Frame;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult},
    props::{AttrValue, Attribute, Props},
};

use crate::registry::ComponentDescriptor;
use crate::tui::activities::{Msg, gallery::UserEvent};
use crate::tui::{AppAction, Theme, dispatcher, handle_global_app_events};

/// Rows used by one entry: name line plus description line.
const ENTRY_HEIGHT: usize = 2;

pub struct Catalog {
    props: Props,
    entries: Vec<ComponentDescriptor>,
    selected: Option<usize>,
    theme: Theme,
}

impl Catalog {
    pub fn new(entries: &[ComponentDescriptor], selected: Option<usize>, theme: Theme) -> Self {
        Self {
            props: Props::default(),
            entries: entries.to_vec(),
            selected,
            theme,
        }
    }

    /// First entry index that keeps the selection visible in `rows` lines.
    fn scroll_offset(&self, rows: usize) -> usize {
        let visible = (rows / ENTRY_HEIGHT).max(1);
        match self.selected {
            Some(index) if index >= visible => index + 1 - visible,
            _ => 0,
        }
    }
}

impl MockComponent for Catalog {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        let border_style = if focused {
            Style::default().fg(self.theme.accent)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .title(" Components ")
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let offset = self.scroll_offset(inner.height as usize);
        let mut lines = Vec::new();
        for (index, entry) in self.entries.iter().enumerate().skip(offset) {
            let is_selected = self.selected == Some(index);
            let marker = if is_selected { "▸ " } else { "  " };
            let name_style = match (is_selected, focused) {
                (true, true) => self.theme.focused(),
                (true, false) => Style::default().add_modifier(Modifier::BOLD),
                _ => Style::default(),
            };
            lines.push(Line::from(vec![
                Span::styled(marker, name_style),
                Span::styled(format!("{:<3}", entry.icon), name_style),
                Span::styled(entry.display_name, name_style),
            ]));
            lines.push(Line::from(Span::styled(
                format!("     {}", entry.description),
                Style::default().fg(Color::DarkGray),
            )));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        match self.selected {
            Some(index) => State::One(StateValue::Usize(index)),
            None => State::None,
        }
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, UserEvent> for Catalog {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        if !focused {
            return None;
        }

        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            return Some(msg);
        }

        // The host owns the selection; the list is remounted after it moves.
        match action {
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)) => Some(Msg::FocusNext),
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Prev)) => Some(Msg::FocusPrev),
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)) => Some(Msg::SelectPrev),
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)) => Some(Msg::SelectNext),
            AppAction::Tui(TuiEvent::Input(InputEvent::Confirm)) => Some(Msg::FocusNext),
            _ => None,
        }
    }
}
