//! Progress indicator configurator.

use super::form::{FieldEdit, Form, FormField};
use super::preview::{Preview, PreviewItem, TextStyle, Tone};
use super::{Panel, ignored};
use crate::color::NamedColor;

pub const DETERMINATE: &str = "determinate";
pub const PROGRESS: &str = "progress";
pub const TINT: &str = "tint";
pub const SHOW_LABEL: &str = "show_label";

pub const INDETERMINATE_LABEL: &str = "Please wait…";

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressPanel {
    progress: f64,
    determinate: bool,
    show_label: bool,
    tint: NamedColor,
}

impl Default for ProgressPanel {
    fn default() -> Self {
        Self {
            progress: 0.4,
            determinate: true,
            show_label: true,
            tint: NamedColor::Accent,
        }
    }
}

impl ProgressPanel {
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn set_progress(&mut self, value: f64) {
        if value.is_finite() {
            self.progress = value.clamp(0.0, 1.0);
        }
    }

    /// Text under the bar: percentage when determinate.
    pub fn label(&self) -> String {
        if self.determinate {
            format!("Processing: {:.0}%", self.progress * 100.0)
        } else {
            INDETERMINATE_LABEL.to_string()
        }
    }
}

impl Panel for ProgressPanel {
    fn settings(&self) -> Form {
        let mut form = Form::new("Properties").with(FormField::toggle(
            DETERMINATE,
            "Determinate",
            self.determinate,
        ));
        if self.determinate {
            form = form.with(FormField::number(
                PROGRESS,
                "Progress",
                self.progress,
                0.0..=1.0,
                0.01,
            ));
        }
        form.with(FormField::choice(
            TINT,
            "Tint",
            NamedColor::options(),
            self.tint.index(),
        ))
        .with(FormField::toggle(SHOW_LABEL, "Show label", self.show_label))
    }

    fn preview(&self) -> Preview {
        let mut items = vec![PreviewItem::Progress {
            fraction: self.determinate.then_some(self.progress),
            tint: self.tint,
        }];
        if self.show_label {
            items.push(PreviewItem::label(
                self.label(),
                TextStyle::toned(Tone::Secondary),
            ));
        }
        Preview {
            controls: Vec::new(),
            items,
        }
    }

    fn apply(&mut self, key: &str, edit: FieldEdit) {
        match (key, edit) {
            (DETERMINATE, FieldEdit::Toggle(on)) => self.determinate = on,
            (PROGRESS, FieldEdit::Number(value)) => self.set_progress(value),
            (TINT, FieldEdit::Choice(index)) => {
                if let Some(tint) = NamedColor::from_index(index) {
                    self.tint = tint;
                }
            }
            (SHOW_LABEL, FieldEdit::Toggle(on)) => self.show_label = on,
            (key, edit) => ignored(key, &edit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determinate_label_is_a_percentage() {
        let panel = ProgressPanel::default();
        assert_eq!(panel.label(), "Processing: 40%");
    }

    #[test]
    fn indeterminate_hides_the_fraction() {
        let mut panel = ProgressPanel::default();
        panel.apply(DETERMINATE, FieldEdit::Toggle(false));

        assert!(panel.settings().field(PROGRESS).is_none());
        assert_eq!(panel.label(), INDETERMINATE_LABEL);
        assert!(matches!(
            panel.preview().items.first(),
            Some(PreviewItem::Progress { fraction: None, .. })
        ));
    }

    #[test]
    fn progress_is_clamped() {
        let mut panel = ProgressPanel::default();
        panel.apply(PROGRESS, FieldEdit::Number(1.7));
        assert_eq!(panel.progress(), 1.0);
        assert_eq!(panel.label(), "Processing: 100%");
    }
}
