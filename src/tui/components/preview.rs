//! Live preview pane: draws the items a configurator describes.

use chrono::{Datelike, Months, NaiveDate};
use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tuirealm::{
    Component, Event, MockComponent, State,
    command::{Cmd, CmdResult},
    props::{AttrValue, Attribute, Props},
};

use super::track;
use crate::color::PickedColor;
use crate::panels::{ButtonStyle, PickerDisplay, PreviewItem};
use crate::tui::Theme;
use crate::tui::activities::{Msg, gallery::UserEvent};

/// Rows of a multi-line text input.
const MULTILINE_ROWS: u16 = 3;

const WEEKDAY_HEADER: &str = "Mo Tu We Th Fr Sa Su";

/// Display-only preview of the live configurator.
pub struct PreviewPane {
    props: Props,
    items: Vec<PreviewItem>,
    theme: Theme,
    /// Advances every draw; drives indeterminate progress.
    frame: u64,
}

impl PreviewPane {
    pub fn new(items: Vec<PreviewItem>, theme: Theme) -> Self {
        Self {
            props: Props::default(),
            items,
            theme,
            frame: 0,
        }
    }
}

/// Swatch cell size for a preview size in points. Cells are about twice as
/// tall as they are wide.
fn swatch_cells(size: f64) -> (u16, u16) {
    let rows = (size / 30.0).round().clamp(2.0, 8.0) as u16;
    (rows * 2, rows)
}

/// Rows an item occupies (borders included).
fn item_height(item: &PreviewItem) -> u16 {
    match item {
        PreviewItem::Options {
            options,
            display: PickerDisplay::RadioGroup,
            ..
        } => options.len().max(1) as u16,
        PreviewItem::Calendar { date } => 2 + calendar_weeks(*date).len() as u16,
        PreviewItem::Input {
            multiline,
            bordered,
            ..
        } => {
            let rows = if *multiline { MULTILINE_ROWS } else { 1 };
            if *bordered { rows + 2 } else { rows }
        }
        PreviewItem::Swatch { size, .. } => swatch_cells(*size).1,
        _ => 1,
    }
}

/// Day numbers of the month containing `date`, laid out Monday-first.
fn calendar_weeks(date: NaiveDate) -> Vec<[Option<u32>; 7]> {
    let Some(first) = date.with_day(1) else {
        return Vec::new();
    };
    let last_day = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28);
    let lead = first.weekday().num_days_from_monday() as usize;

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = lead;
    for day in 1..=last_day {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

fn calendar_lines(date: NaiveDate, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            date.format("%B %Y").to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            WEEKDAY_HEADER,
            Style::default().fg(Color::DarkGray),
        )),
    ];
    for week in calendar_weeks(date) {
        let mut spans = Vec::new();
        for (i, day) in week.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            match day {
                Some(d) if *d == date.day() => spans.push(Span::styled(
                    format!("{d:>2}"),
                    Style::default()
                        .fg(Color::Black)
                        .bg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )),
                Some(d) => spans.push(Span::raw(format!("{d:>2}"))),
                None => spans.push(Span::raw("  ")),
            }
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn button_line(
    label: &str,
    icon: Option<&str>,
    style: ButtonStyle,
    enabled: bool,
    theme: &Theme,
) -> Line<'static> {
    let text = match icon {
        Some(icon) => format!("{icon} {label}"),
        None => label.to_string(),
    };
    if !enabled {
        let dim = Style::default().fg(Color::DarkGray);
        return match style {
            ButtonStyle::Bordered => Line::from(Span::styled(format!("[ {text} ]"), dim)),
            _ => Line::from(Span::styled(format!(" {text} "), dim)),
        };
    }
    let accent = Style::default().fg(theme.accent);
    match style {
        ButtonStyle::Automatic => Line::from(Span::styled(format!(" {text} "), accent)),
        ButtonStyle::Bordered => Line::from(Span::styled(format!("[ {text} ]"), accent)),
        ButtonStyle::Prominent => Line::from(Span::styled(
            format!(" {text} "),
            Style::default()
                .fg(Color::Black)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        ButtonStyle::Link => Line::from(Span::styled(
            text,
            accent.add_modifier(Modifier::UNDERLINED),
        )),
    }
}

fn options_lines(
    options: &[String],
    selected: usize,
    display: PickerDisplay,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let current = options.get(selected).cloned().unwrap_or_default();
    match display {
        PickerDisplay::Menu => vec![Line::from(vec![
            Span::raw(current),
            Span::styled(" ▾", Style::default().fg(theme.accent)),
        ])],
        PickerDisplay::Segmented => {
            let mut spans = Vec::new();
            for (i, option) in options.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
                }
                let style = if i == selected {
                    Style::default().fg(Color::Black).bg(theme.accent)
                } else {
                    Style::default()
                };
                spans.push(Span::styled(format!(" {option} "), style));
            }
            vec![Line::from(spans)]
        }
        PickerDisplay::RadioGroup => options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                if i == selected {
                    Line::from(vec![
                        Span::styled("◉ ", Style::default().fg(theme.accent)),
                        Span::raw(option.clone()),
                    ])
                } else {
                    Line::from(vec![
                        Span::styled("○ ", Style::default().fg(Color::DarkGray)),
                        Span::raw(option.clone()),
                    ])
                }
            })
            .collect(),
    }
}

fn swatch_lines(color: PickedColor, size: f64, theme: &Theme) -> Vec<Line<'static>> {
    let (cols, rows) = swatch_cells(size);
    let fill = Style::default().fg(theme.swatch(color));
    (0..rows)
        .map(|_| Line::from(Span::styled("█".repeat(cols as usize), fill)))
        .collect()
}

fn item_lines(item: &PreviewItem, width: usize, frame: u64, theme: &Theme) -> Vec<Line<'static>> {
    match item {
        PreviewItem::Label { text, style } => {
            vec![Line::from(Span::styled(text.clone(), theme.text(*style)))]
        }
        PreviewItem::Button {
            label,
            icon,
            style,
            enabled,
        } => vec![button_line(label, icon.as_deref(), *style, *enabled, theme)],
        PreviewItem::Switch { label, on, tint } => {
            let switch = if *on {
                Span::styled("━━●", Style::default().fg(theme.named(*tint)))
            } else {
                Span::styled("●──", Style::default().fg(Color::DarkGray))
            };
            vec![Line::from(vec![
                Span::raw(label.clone()),
                Span::raw("  "),
                switch,
            ])]
        }
        PreviewItem::Track { fraction } => vec![Line::from(track::slider(
            *fraction,
            width,
            theme.accent,
            Color::White,
        ))],
        PreviewItem::Progress { fraction, tint } => {
            let fill = theme.named(*tint);
            let spans = match fraction {
                Some(f) => track::progress(*f, width, fill),
                None => track::marquee(frame, width, fill),
            };
            vec![Line::from(spans)]
        }
        PreviewItem::Options {
            options,
            selected,
            display,
        } => options_lines(options, *selected, *display, theme),
        PreviewItem::Calendar { date } => calendar_lines(*date, theme),
        PreviewItem::Input {
            text, placeholder, ..
        } => {
            if text.is_empty() {
                vec![Line::from(Span::styled(
                    placeholder.clone(),
                    Style::default().fg(Color::DarkGray),
                ))]
            } else {
                text.lines().map(|l| Line::from(l.to_string())).collect()
            }
        }
        PreviewItem::Swatch { color, size } => swatch_lines(*color, *size, theme),
    }
}

impl MockComponent for PreviewPane {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        self.frame = self.frame.wrapping_add(1);

        let block = Block::default()
            .title(" Preview ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let constraints: Vec<Constraint> = self
            .items
            .iter()
            .map(|item| Constraint::Length(item_height(item)))
            .chain(std::iter::once(Constraint::Min(0)))
            .collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .spacing(1)
            .split(inner);

        for (item, row) in self.items.iter().zip(rows.iter()) {
            let mut area = *row;
            let mut width = area.width as usize;
            if let PreviewItem::Input { bordered: true, .. } = item {
                let border = Block::default().borders(Borders::ALL);
                area = border.inner(*row);
                width = area.width as usize;
                frame.render_widget(border, *row);
            }
            let lines = item_lines(item, width, self.frame, &self.theme);
            let mut paragraph = Paragraph::new(lines);
            if let PreviewItem::Input {
                multiline: true, ..
            } = item
            {
                paragraph = paragraph.wrap(Wrap { trim: false });
            }
            frame.render_widget(paragraph, area);
        }
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

impl Component<Msg, UserEvent> for PreviewPane {
    fn on(&mut self, _ev: Event<UserEvent>) -> Option<Msg> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NamedColor;
    use crate::panels::TextStyle;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn calendar_starts_on_the_right_weekday() {
        // March 1st 2024 was a Friday.
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date");
        let weeks = calendar_weeks(date);
        assert_eq!(weeks[0][..4], [None; 4]);
        assert_eq!(weeks[0][4..], [Some(1), Some(2), Some(3)]);
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[4][6], Some(31));

        let lines = calendar_lines(date, &Theme::default());
        assert_eq!(text(&lines)[0], "March 2024");
        assert_eq!(text(&lines)[1], WEEKDAY_HEADER);
    }

    #[test]
    fn disabled_button_is_dimmed() {
        let line = button_line("Tap me", None, ButtonStyle::Prominent, false, &Theme::default());
        assert_eq!(line.spans[0].style.fg, Some(Color::DarkGray));
        assert_eq!(line.spans[0].style.bg, None);
    }

    #[test]
    fn radio_group_draws_one_row_per_option() {
        let item = PreviewItem::Options {
            options: vec!["Rust".into(), "Swift".into()],
            selected: 1,
            display: PickerDisplay::RadioGroup,
        };
        assert_eq!(item_height(&item), 2);
        let lines = item_lines(&item, 20, 0, &Theme::default());
        assert_eq!(text(&lines), vec!["○ Rust", "◉ Swift"]);
    }

    #[test]
    fn empty_input_shows_placeholder() {
        let item = PreviewItem::Input {
            text: String::new(),
            placeholder: "Enter content".into(),
            multiline: true,
            bordered: true,
        };
        assert_eq!(item_height(&item), MULTILINE_ROWS + 2);
        assert_eq!(
            text(&item_lines(&item, 20, 0, &Theme::default())),
            vec!["Enter content"]
        );
    }

    #[test]
    fn swatch_scales_with_size() {
        assert_eq!(swatch_cells(120.0), (8, 4));
        assert_eq!(swatch_cells(60.0), (4, 2));
        assert_eq!(swatch_cells(240.0), (16, 8));
    }

    #[test]
    fn label_uses_tone_color() {
        let item = PreviewItem::label("Status: on", TextStyle::toned(crate::panels::Tone::Success));
        let lines = item_lines(&item, 20, 0, &Theme::default());
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Green));

        let switch = PreviewItem::Switch {
            label: "Wi-Fi".into(),
            on: true,
            tint: NamedColor::Pink,
        };
        assert_eq!(
            text(&item_lines(&switch, 20, 0, &Theme::default())),
            vec!["Wi-Fi  ━━●"]
        );
    }
}
