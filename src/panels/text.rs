//! Text label configurator.

use std::ops::RangeInclusive;

use super::form::{FieldEdit, Form, FormField};
use super::preview::{FontWeight, Preview, PreviewItem, TextStyle, Tone};
use super::{Panel, ignored};
use crate::color::NamedColor;

pub const CONTENT: &str = "content";
pub const SIZE: &str = "size";
pub const WEIGHT: &str = "weight";
pub const COLOR: &str = "color";
pub const ITALIC: &str = "italic";

pub const SIZE_RANGE: RangeInclusive<f64> = 12.0..=64.0;

/// Shown in the preview while the content is empty.
pub const EMPTY_TEXT: &str = "Enter some text";

#[derive(Debug, Clone, PartialEq)]
pub struct TextPanel {
    content: String,
    size: f64,
    weight: FontWeight,
    color: NamedColor,
    italic: bool,
}

impl Default for TextPanel {
    fn default() -> Self {
        Self {
            content: "Text preview".to_string(),
            size: 28.0,
            weight: FontWeight::Regular,
            color: NamedColor::Accent,
            italic: false,
        }
    }
}

impl TextPanel {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Set the font size, clamped to [`SIZE_RANGE`] in whole points.
    pub fn set_size(&mut self, size: f64) {
        if !size.is_finite() {
            return;
        }
        self.size = size.round().clamp(*SIZE_RANGE.start(), *SIZE_RANGE.end());
    }

    /// Text drawn by the preview.
    pub fn display_text(&self) -> &str {
        if self.content.is_empty() {
            EMPTY_TEXT
        } else {
            &self.content
        }
    }
}

impl Panel for TextPanel {
    fn settings(&self) -> Form {
        Form::new("Properties")
            .with(
                FormField::text(CONTENT, "Content", self.content.clone())
                    .with_placeholder("Text content")
                    .multiline(true),
            )
            .with(FormField::number(SIZE, "Font size", self.size, SIZE_RANGE, 1.0))
            .with(FormField::choice(
                WEIGHT,
                "Weight",
                FontWeight::ALL
                    .iter()
                    .map(|w| w.display_name().to_string())
                    .collect(),
                FontWeight::ALL
                    .iter()
                    .position(|w| *w == self.weight)
                    .unwrap_or(0),
            ))
            .with(FormField::choice(
                COLOR,
                "Color",
                NamedColor::options(),
                self.color.index(),
            ))
            .with(FormField::toggle(ITALIC, "Italic", self.italic))
    }

    fn preview(&self) -> Preview {
        Preview {
            controls: Vec::new(),
            items: vec![
                PreviewItem::label(
                    self.display_text(),
                    TextStyle {
                        size: Some(self.size),
                        weight: self.weight,
                        tone: Tone::Named(self.color),
                        italic: self.italic,
                    },
                ),
                PreviewItem::label(
                    format!("Current font size: {}pt", self.size),
                    TextStyle::toned(Tone::Secondary),
                ),
            ],
        }
    }

    fn apply(&mut self, key: &str, edit: FieldEdit) {
        match (key, edit) {
            (CONTENT, FieldEdit::Text(content)) => self.content = content,
            (SIZE, FieldEdit::Number(size)) => self.set_size(size),
            (WEIGHT, FieldEdit::Choice(index)) => {
                if let Some(weight) = FontWeight::ALL.get(index) {
                    self.weight = *weight;
                }
            }
            (COLOR, FieldEdit::Choice(index)) => {
                if let Some(color) = NamedColor::from_index(index) {
                    self.color = color;
                }
            }
            (ITALIC, FieldEdit::Toggle(on)) => self.italic = on,
            (key, edit) => ignored(key, &edit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_previews_placeholder() {
        let mut panel = TextPanel::default();
        panel.apply(CONTENT, FieldEdit::Text(String::new()));

        let preview = panel.preview();
        let Some(PreviewItem::Label { text, .. }) = preview.items.first() else {
            panic!("first preview item should be the label");
        };
        assert_eq!(text, EMPTY_TEXT);
    }

    #[test]
    fn font_size_is_bounded() {
        let mut panel = TextPanel::default();
        panel.apply(SIZE, FieldEdit::Number(4.0));
        assert_eq!(panel.size(), 12.0);
        panel.apply(SIZE, FieldEdit::Number(99.6));
        assert_eq!(panel.size(), 64.0);
        panel.apply(SIZE, FieldEdit::Number(f64::NAN));
        assert_eq!(panel.size(), 64.0);
    }

    #[test]
    fn style_is_applied_live() {
        let mut panel = TextPanel::default();
        panel.apply(WEIGHT, FieldEdit::Choice(3));
        panel.apply(COLOR, FieldEdit::Choice(3));
        panel.apply(ITALIC, FieldEdit::Toggle(true));

        let Some(PreviewItem::Label { style, .. }) = panel.preview().items.first().cloned() else {
            panic!("first preview item should be the label");
        };
        assert_eq!(style.weight, FontWeight::Bold);
        assert_eq!(style.tone, Tone::Named(NamedColor::Pink));
        assert!(style.italic);
    }

    #[test]
    fn mismatched_edit_is_ignored() {
        let mut panel = TextPanel::default();
        panel.apply(SIZE, FieldEdit::Text("huge".into()));
        panel.apply("unknown", FieldEdit::Toggle(true));
        assert_eq!(panel, TextPanel::default());
    }
}
