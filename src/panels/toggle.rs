//! Toggle switch configurator.

use super::form::{FieldEdit, Form, FormField};
use super::preview::{Preview, PreviewItem, TextStyle, Tone};
use super::{Panel, ignored};
use crate::color::NamedColor;

pub const LABEL: &str = "label";
pub const TINT: &str = "tint";
pub const SHOW_STATUS: &str = "show_status";
pub const IS_ON: &str = "is_on";

pub const FALLBACK_LABEL: &str = "Untitled toggle";

#[derive(Debug, Clone, PartialEq)]
pub struct TogglePanel {
    label: String,
    is_on: bool,
    tint: NamedColor,
    show_status: bool,
}

impl Default for TogglePanel {
    fn default() -> Self {
        Self {
            label: "Enable advanced features".to_string(),
            is_on: true,
            tint: NamedColor::Accent,
            show_status: true,
        }
    }
}

impl TogglePanel {
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    fn display_label(&self) -> &str {
        if self.label.is_empty() {
            FALLBACK_LABEL
        } else {
            &self.label
        }
    }

    pub fn status_text(&self) -> &'static str {
        if self.is_on {
            "Status: on"
        } else {
            "Status: off"
        }
    }
}

impl Panel for TogglePanel {
    fn settings(&self) -> Form {
        Form::new("Properties")
            .with(
                FormField::text(LABEL, "Label", self.label.clone())
                    .with_placeholder("Toggle label"),
            )
            .with(FormField::choice(
                TINT,
                "Tint",
                NamedColor::options(),
                self.tint.index(),
            ))
            .with(FormField::toggle(SHOW_STATUS, "Show status", self.show_status))
    }

    fn preview(&self) -> Preview {
        let mut items = vec![PreviewItem::Switch {
            label: self.display_label().to_string(),
            on: self.is_on,
            tint: self.tint,
        }];
        if self.show_status {
            let tone = if self.is_on {
                Tone::Success
            } else {
                Tone::Secondary
            };
            items.push(PreviewItem::label(
                self.status_text(),
                TextStyle::toned(tone),
            ));
        }

        Preview {
            controls: vec![FormField::toggle(IS_ON, self.display_label(), self.is_on)],
            items,
        }
    }

    fn apply(&mut self, key: &str, edit: FieldEdit) {
        match (key, edit) {
            (LABEL, FieldEdit::Text(label)) => self.label = label,
            (TINT, FieldEdit::Choice(index)) => {
                if let Some(tint) = NamedColor::from_index(index) {
                    self.tint = tint;
                }
            }
            (SHOW_STATUS, FieldEdit::Toggle(on)) => self.show_status = on,
            (IS_ON, FieldEdit::Toggle(on)) => self.is_on = on,
            (key, edit) => ignored(key, &edit),
        }
    }
}
