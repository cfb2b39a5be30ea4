//! Date and time picker configurator.

use chrono::{Local, NaiveDateTime, Timelike};

use super::form::{FieldEdit, Form, FormField};
use super::preview::{Preview, PreviewItem, TextStyle};
use super::{Panel, ignored};

pub const SELECTION: &str = "selection";
pub const MODE: &str = "mode";
pub const GRAPHICAL: &str = "graphical";

const SUMMARY_FORMAT: &str = "%b %-d, %Y at %-I:%M %p";

/// Which components of the selection are editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatePickerMode {
    Date,
    Time,
    #[default]
    DateAndTime,
}

impl DatePickerMode {
    pub const ALL: [DatePickerMode; 3] = [
        DatePickerMode::Date,
        DatePickerMode::Time,
        DatePickerMode::DateAndTime,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Time => "Time",
            Self::DateAndTime => "Date and time",
        }
    }

    pub fn edits_date(self) -> bool {
        matches!(self, Self::Date | Self::DateAndTime)
    }

    pub fn edits_time(self) -> bool {
        matches!(self, Self::Time | Self::DateAndTime)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatePickerPanel {
    selection: NaiveDateTime,
    mode: DatePickerMode,
    graphical: bool,
}

impl Default for DatePickerPanel {
    fn default() -> Self {
        Self::at(Local::now().naive_local())
    }
}

/// Drop seconds and below; the picker works in whole minutes.
fn to_minute(value: NaiveDateTime) -> NaiveDateTime {
    value
        .with_second(0)
        .and_then(|v| v.with_nanosecond(0))
        .unwrap_or(value)
}

impl DatePickerPanel {
    /// Panel whose selection starts at `selection`.
    pub fn at(selection: NaiveDateTime) -> Self {
        Self {
            selection: to_minute(selection),
            mode: DatePickerMode::default(),
            graphical: false,
        }
    }

    pub fn selection(&self) -> NaiveDateTime {
        self.selection
    }

    pub fn mode(&self) -> DatePickerMode {
        self.mode
    }

    /// Graphical layout only applies to date-only mode.
    pub fn is_graphical(&self) -> bool {
        self.graphical && self.mode == DatePickerMode::Date
    }

    pub fn set_mode(&mut self, mode: DatePickerMode) {
        self.mode = mode;
        if mode != DatePickerMode::Date {
            self.graphical = false;
        }
    }

    pub fn set_graphical(&mut self, on: bool) {
        self.graphical = on && self.mode == DatePickerMode::Date;
    }

    /// Take the editable components from `value` and keep the rest.
    pub fn set_selection(&mut self, value: NaiveDateTime) {
        let date = if self.mode.edits_date() {
            value.date()
        } else {
            self.selection.date()
        };
        let time = if self.mode.edits_time() {
            value.time()
        } else {
            self.selection.time()
        };
        self.selection = to_minute(NaiveDateTime::new(date, time));
    }

    pub fn summary(&self) -> String {
        self.selection.format(SUMMARY_FORMAT).to_string()
    }
}

impl Panel for DatePickerPanel {
    fn settings(&self) -> Form {
        Form::new("Properties")
            .with(FormField::choice(
                MODE,
                "Mode",
                DatePickerMode::ALL
                    .iter()
                    .map(|m| m.display_name().to_string())
                    .collect(),
                DatePickerMode::ALL
                    .iter()
                    .position(|m| *m == self.mode)
                    .unwrap_or(0),
            ))
            .with(
                FormField::toggle(GRAPHICAL, "Graphical style (date only)", self.is_graphical())
                    .enabled(self.mode == DatePickerMode::Date),
            )
    }

    fn preview(&self) -> Preview {
        let mut items = Vec::new();
        if self.is_graphical() {
            items.push(PreviewItem::Calendar {
                date: self.selection.date(),
            });
        }
        items.push(PreviewItem::label(self.summary(), TextStyle::headline()));

        let label = if self.is_graphical() {
            "Date"
        } else {
            "Date/time"
        };
        Preview {
            controls: vec![FormField::date_time(
                SELECTION,
                label,
                self.selection,
                self.mode.edits_date(),
                self.mode.edits_time(),
            )],
            items,
        }
    }

    fn apply(&mut self, key: &str, edit: FieldEdit) {
        match (key, edit) {
            (SELECTION, FieldEdit::DateTime(value)) => self.set_selection(value),
            (MODE, FieldEdit::Choice(index)) => {
                if let Some(mode) = DatePickerMode::ALL.get(index) {
                    self.set_mode(*mode);
                }
            }
            (GRAPHICAL, FieldEdit::Toggle(on)) => self.set_graphical(on),
            (key, edit) => ignored(key, &edit),
        }
    }
}
