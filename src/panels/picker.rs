//! Single-choice picker configurator.

use super::form::{FieldEdit, Form, FormField};
use super::preview::{PickerDisplay, Preview, PreviewItem, TextStyle, Tone};
use super::{Panel, ignored};

pub const SELECTION: &str = "selection";
pub const DISPLAY: &str = "display";
pub const SHOW_SUMMARY: &str = "show_summary";

pub const OPTIONS: [&str; 4] = ["Rust", "Swift", "Kotlin", "TypeScript"];

#[derive(Debug, Clone, PartialEq)]
pub struct PickerPanel {
    selected: usize,
    display: PickerDisplay,
    show_summary: bool,
}

impl Default for PickerPanel {
    fn default() -> Self {
        Self {
            selected: 0,
            display: PickerDisplay::Menu,
            show_summary: true,
        }
    }
}

impl PickerPanel {
    pub fn selected(&self) -> &'static str {
        OPTIONS[self.selected]
    }

    pub fn display(&self) -> PickerDisplay {
        self.display
    }

    fn options() -> Vec<String> {
        OPTIONS.iter().map(|o| o.to_string()).collect()
    }
}

impl Panel for PickerPanel {
    fn settings(&self) -> Form {
        Form::new("Display")
            .with(FormField::choice(
                DISPLAY,
                "Style",
                PickerDisplay::ALL
                    .iter()
                    .map(|d| d.display_name().to_string())
                    .collect(),
                PickerDisplay::ALL
                    .iter()
                    .position(|d| *d == self.display)
                    .unwrap_or(0),
            ))
            .with(FormField::toggle(SHOW_SUMMARY, "Show summary", self.show_summary))
    }

    fn preview(&self) -> Preview {
        let mut items = vec![PreviewItem::Options {
            options: Self::options(),
            selected: self.selected,
            display: self.display,
        }];
        if self.show_summary {
            items.push(PreviewItem::label(
                format!("Selected: {}", self.selected()),
                TextStyle::toned(Tone::Secondary),
            ));
        }

        Preview {
            controls: vec![FormField::choice(
                SELECTION,
                "Language",
                Self::options(),
                self.selected,
            )],
            items,
        }
    }

    fn apply(&mut self, key: &str, edit: FieldEdit) {
        match (key, edit) {
            (SELECTION, FieldEdit::Choice(index)) if index < OPTIONS.len() => {
                self.selected = index;
            }
            (DISPLAY, FieldEdit::Choice(index)) => {
                if let Some(display) = PickerDisplay::ALL.get(index) {
                    self.display = *display;
                }
            }
            (SHOW_SUMMARY, FieldEdit::Toggle(on)) => self.show_summary = on,
            (key, edit) => ignored(key, &edit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mode_keeps_selection() {
        let mut panel = PickerPanel::default();
        panel.apply(SELECTION, FieldEdit::Choice(2));
        for index in 0..PickerDisplay::ALL.len() {
            panel.apply(DISPLAY, FieldEdit::Choice(index));
            assert_eq!(panel.selected(), "Kotlin");
        }
        assert_eq!(panel.display(), PickerDisplay::RadioGroup);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut panel = PickerPanel::default();
        panel.apply(SELECTION, FieldEdit::Choice(OPTIONS.len()));
        assert_eq!(panel.selected(), "Rust");
    }

    #[test]
    fn summary_names_the_selection() {
        let mut panel = PickerPanel::default();
        panel.apply(SELECTION, FieldEdit::Choice(3));
        assert!(panel.preview().items.contains(&PreviewItem::label(
            "Selected: TypeScript",
            TextStyle::toned(Tone::Secondary)
        )));
    }
}
