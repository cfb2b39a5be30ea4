//! Button configurator.

use super::form::{FieldEdit, Form, FormField};
use super::preview::{ButtonStyle, Preview, PreviewItem};
use super::{Panel, ignored};

pub const TITLE: &str = "title";
pub const STYLE: &str = "style";
pub const SHOW_ICON: &str = "show_icon";
pub const DISABLED: &str = "disabled";

/// Label used when the title is empty.
pub const FALLBACK_TITLE: &str = "Button";
pub const ICON: &str = "☝";

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonPanel {
    title: String,
    style: ButtonStyle,
    show_icon: bool,
    disabled: bool,
}

impl Default for ButtonPanel {
    fn default() -> Self {
        Self {
            title: "Tap me".to_string(),
            style: ButtonStyle::Automatic,
            show_icon: true,
            disabled: false,
        }
    }
}

impl ButtonPanel {
    pub fn label(&self) -> &str {
        if self.title.is_empty() {
            FALLBACK_TITLE
        } else {
            &self.title
        }
    }
}

impl Panel for ButtonPanel {
    fn settings(&self) -> Form {
        Form::new("Properties")
            .with(
                FormField::text(TITLE, "Title", self.title.clone())
                    .with_placeholder("Button title"),
            )
            .with(FormField::choice(
                STYLE,
                "Style",
                ButtonStyle::ALL
                    .iter()
                    .map(|s| s.display_name().to_string())
                    .collect(),
                ButtonStyle::ALL
                    .iter()
                    .position(|s| *s == self.style)
                    .unwrap_or(0),
            ))
            .with(FormField::toggle(SHOW_ICON, "Show icon", self.show_icon))
            .with(FormField::toggle(DISABLED, "Disabled", self.disabled))
    }

    fn preview(&self) -> Preview {
        Preview {
            controls: Vec::new(),
            items: vec![PreviewItem::Button {
                label: self.label().to_string(),
                icon: self.show_icon.then(|| ICON.to_string()),
                style: self.style,
                enabled: !self.disabled,
            }],
        }
    }

    fn apply(&mut self, key: &str, edit: FieldEdit) {
        match (key, edit) {
            (TITLE, FieldEdit::Text(title)) => self.title = title,
            (STYLE, FieldEdit::Choice(index)) => {
                if let Some(style) = ButtonStyle::ALL.get(index) {
                    self.style = *style;
                }
            }
            (SHOW_ICON, FieldEdit::Toggle(on)) => self.show_icon = on,
            (DISABLED, FieldEdit::Toggle(on)) => self.disabled = on,
            (key, edit) => ignored(key, &edit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(panel: &ButtonPanel) -> PreviewItem {
        panel
            .preview()
            .items
            .into_iter()
            .next()
            .expect("button preview has one item")
    }

    #[test]
    fn empty_title_falls_back() {
        let mut panel = ButtonPanel::default();
        panel.apply(TITLE, FieldEdit::Text(String::new()));
        let PreviewItem::Button { label, .. } = button(&panel) else {
            panic!("expected a button item");
        };
        assert_eq!(label, FALLBACK_TITLE);
    }

    #[test]
    fn disabled_flag_blocks_interaction() {
        let mut panel = ButtonPanel::default();
        panel.apply(DISABLED, FieldEdit::Toggle(true));
        assert!(matches!(
            button(&panel),
            PreviewItem::Button { enabled: false, .. }
        ));
    }

    #[test]
    fn icon_follows_flag() {
        let mut panel = ButtonPanel::default();
        assert!(matches!(
            button(&panel),
            PreviewItem::Button { icon: Some(_), .. }
        ));
        panel.apply(SHOW_ICON, FieldEdit::Toggle(false));
        assert!(matches!(
            button(&panel),
            PreviewItem::Button { icon: None, .. }
        ));
    }
}
