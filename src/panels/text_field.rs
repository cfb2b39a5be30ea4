//! Text input configurator with a character limit.

use std::ops::RangeInclusive;

use super::form::{FieldEdit, Form, FormField};
use super::preview::{Preview, PreviewItem, TextStyle, Tone};
use super::{Panel, ignored};

pub const TEXT: &str = "text";
pub const PLACEHOLDER: &str = "placeholder";
pub const MULTILINE: &str = "multiline";
pub const CHARACTER_LIMIT: &str = "character_limit";
pub const SHOW_COUNTER: &str = "show_counter";
pub const SHOW_BORDER: &str = "show_border";

pub const CHARACTER_LIMIT_RANGE: RangeInclusive<usize> = 5..=500;
const CHARACTER_LIMIT_STEP: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct TextFieldPanel {
    text: String,
    placeholder: String,
    multiline: bool,
    character_limit: usize,
    show_counter: bool,
    show_border: bool,
}

impl Default for TextFieldPanel {
    fn default() -> Self {
        Self {
            text: String::new(),
            placeholder: "Enter content".to_string(),
            multiline: false,
            character_limit: 50,
            show_counter: true,
            show_border: true,
        }
    }
}

/// First `limit` characters of `input`.
fn truncate_chars(input: &str, limit: usize) -> &str {
    match input.char_indices().nth(limit) {
        Some((end, _)) => &input[..end],
        None => input,
    }
}

impl TextFieldPanel {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn character_limit(&self) -> usize {
        self.character_limit
    }

    /// Store new input, truncated to the character limit.
    pub fn set_text(&mut self, input: &str) {
        self.text = truncate_chars(input, self.character_limit).to_string();
    }

    /// Change the limit. Existing text is kept even when it now exceeds the
    /// limit; the counter reports it instead.
    pub fn set_character_limit(&mut self, limit: usize) {
        self.character_limit =
            limit.clamp(*CHARACTER_LIMIT_RANGE.start(), *CHARACTER_LIMIT_RANGE.end());
    }

    pub fn character_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_over_limit(&self) -> bool {
        self.character_count() > self.character_limit
    }

    /// Counter text, e.g. `5/50`.
    pub fn counter(&self) -> String {
        format!("{}/{}", self.character_count(), self.character_limit)
    }
}

impl Panel for TextFieldPanel {
    fn settings(&self) -> Form {
        Form::new("Properties")
            .with(FormField::text(
                PLACEHOLDER,
                "Placeholder",
                self.placeholder.clone(),
            ))
            .with(FormField::toggle(MULTILINE, "Multi-line", self.multiline))
            .with(FormField::number(
                CHARACTER_LIMIT,
                "Character limit",
                self.character_limit as f64,
                *CHARACTER_LIMIT_RANGE.start() as f64..=*CHARACTER_LIMIT_RANGE.end() as f64,
                CHARACTER_LIMIT_STEP,
            ))
            .with(FormField::toggle(SHOW_COUNTER, "Show counter", self.show_counter))
            .with(FormField::toggle(SHOW_BORDER, "Show border", self.show_border))
    }

    fn preview(&self) -> Preview {
        let mut items = vec![PreviewItem::Input {
            text: self.text.clone(),
            placeholder: self.placeholder.clone(),
            multiline: self.multiline,
            bordered: self.show_border,
        }];
        if self.show_counter {
            let tone = if self.is_over_limit() {
                Tone::Warning
            } else {
                Tone::Secondary
            };
            items.push(PreviewItem::label(
                format!("Characters: {}", self.counter()),
                TextStyle::toned(tone),
            ));
        }

        Preview {
            controls: vec![
                FormField::text(TEXT, "Input", self.text.clone())
                    .with_placeholder(self.placeholder.clone())
                    .multiline(self.multiline),
            ],
            items,
        }
    }

    fn apply(&mut self, key: &str, edit: FieldEdit) {
        match (key, edit) {
            (TEXT, FieldEdit::Text(input)) => self.set_text(&input),
            (PLACEHOLDER, FieldEdit::Text(placeholder)) => self.placeholder = placeholder,
            (MULTILINE, FieldEdit::Toggle(on)) => self.multiline = on,
            (CHARACTER_LIMIT, FieldEdit::Number(limit)) if limit.is_finite() => {
                self.set_character_limit(limit.round().max(0.0) as usize);
            }
            (SHOW_COUNTER, FieldEdit::Toggle(on)) => self.show_counter = on,
            (SHOW_BORDER, FieldEdit::Toggle(on)) => self.show_border = on,
            (key, edit) => ignored(key, &edit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w");
        assert_eq!(truncate_chars("abc", 7), "abc");
        assert_eq!(truncate_chars("", 0), "");
    }

    #[test]
    fn lowering_the_limit_keeps_text_and_warns() {
        let mut panel = TextFieldPanel::default();
        panel.set_text("twelve chars");
        panel.apply(CHARACTER_LIMIT, FieldEdit::Number(5.0));

        assert_eq!(panel.text(), "twelve chars");
        assert!(panel.is_over_limit());
        assert!(panel.preview().items.iter().any(|item| matches!(
            item,
            PreviewItem::Label { style, .. } if style.tone == Tone::Warning
        )));
    }

    #[test]
    fn limit_is_clamped_to_range() {
        let mut panel = TextFieldPanel::default();
        panel.apply(CHARACTER_LIMIT, FieldEdit::Number(-40.0));
        assert_eq!(panel.character_limit(), 5);
        panel.apply(CHARACTER_LIMIT, FieldEdit::Number(9000.0));
        assert_eq!(panel.character_limit(), 500);
    }

    #[test]
    fn multiline_swaps_the_input_control() {
        let mut panel = TextFieldPanel::default();
        panel.apply(MULTILINE, FieldEdit::Toggle(true));
        let preview = panel.preview();
        assert!(matches!(
            preview.items.first(),
            Some(PreviewItem::Input {
                multiline: true,
                ..
            })
        ));
    }
}
