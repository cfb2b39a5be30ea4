//! Color picker configurator.

use std::ops::RangeInclusive;

use super::form::{FieldEdit, Form, FormField};
use super::preview::{Preview, PreviewItem, TextStyle, Tone};
use super::{Panel, ignored};
use crate::color::{PickedColor, hex_string};

pub const COLOR: &str = "color";
pub const OPACITY: &str = "opacity";
pub const SUPPORTS_OPACITY: &str = "supports_opacity";
pub const PREVIEW_SIZE: &str = "preview_size";
pub const SHOW_HEX: &str = "show_hex";

pub const PREVIEW_SIZE_RANGE: RangeInclusive<f64> = 60.0..=240.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ColorPickerPanel {
    color: PickedColor,
    supports_opacity: bool,
    preview_size: f64,
    show_hex: bool,
}

impl Default for ColorPickerPanel {
    fn default() -> Self {
        Self {
            color: PickedColor::default(),
            supports_opacity: true,
            preview_size: 120.0,
            show_hex: true,
        }
    }
}

impl ColorPickerPanel {
    pub fn color(&self) -> PickedColor {
        self.color
    }

    /// New color; its alpha is dropped unless opacity is supported.
    pub fn set_color(&mut self, color: PickedColor) {
        self.color = if self.supports_opacity {
            color
        } else {
            color.with_opacity(1.0)
        };
    }

    pub fn set_supports_opacity(&mut self, on: bool) {
        self.supports_opacity = on;
        if !on {
            self.color = self.color.with_opacity(1.0);
        }
    }

    pub fn set_preview_size(&mut self, size: f64) {
        if size.is_finite() {
            self.preview_size = size
                .round()
                .clamp(*PREVIEW_SIZE_RANGE.start(), *PREVIEW_SIZE_RANGE.end());
        }
    }

    pub fn hex(&self) -> String {
        hex_string(self.color)
    }
}

impl Panel for ColorPickerPanel {
    fn settings(&self) -> Form {
        Form::new("Properties")
            .with(FormField::toggle(
                SUPPORTS_OPACITY,
                "Support opacity",
                self.supports_opacity,
            ))
            .with(FormField::number(
                PREVIEW_SIZE,
                "Preview size",
                self.preview_size,
                PREVIEW_SIZE_RANGE,
                10.0,
            ))
            .with(FormField::toggle(SHOW_HEX, "Show HEX", self.show_hex))
    }

    fn preview(&self) -> Preview {
        let mut items = vec![PreviewItem::Swatch {
            color: self.color,
            size: self.preview_size,
        }];
        if self.show_hex {
            items.push(PreviewItem::label(
                format!("Approx. HEX: {}", self.hex()),
                TextStyle::toned(Tone::Secondary),
            ));
        }

        Preview {
            controls: vec![
                FormField::text(COLOR, "Color", self.color.to_css())
                    .with_placeholder("CSS color or accent/primary/secondary/pink/green"),
                FormField::number(OPACITY, "Opacity", self.color.opacity(), 0.0..=1.0, 0.05)
                    .enabled(self.supports_opacity),
            ],
            items,
        }
    }

    fn apply(&mut self, key: &str, edit: FieldEdit) {
        match (key, edit) {
            (COLOR, FieldEdit::Text(input)) => match PickedColor::parse(&input) {
                Some(color) => self.set_color(color),
                None => tracing::debug!(%input, "unparsable color ignored"),
            },
            (OPACITY, FieldEdit::Number(value)) if self.supports_opacity => {
                self.color = self.color.with_opacity(value);
            }
            (SUPPORTS_OPACITY, FieldEdit::Toggle(on)) => self.set_supports_opacity(on),
            (PREVIEW_SIZE, FieldEdit::Number(size)) => self.set_preview_size(size),
            (SHOW_HEX, FieldEdit::Toggle(on)) => self.show_hex = on,
            (key, edit) => ignored(key, &edit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{HEX_SENTINEL, NamedColor};

    #[test]
    fn default_swatch_is_opaque_blue() {
        let panel = ColorPickerPanel::default();
        assert_eq!(panel.hex(), "#007AFF");
    }

    #[test]
    fn disabling_opacity_forces_alpha() {
        let mut panel = ColorPickerPanel::default();
        panel.apply(OPACITY, FieldEdit::Number(0.5));
        assert_eq!(panel.hex(), "#007AFF80");

        panel.apply(SUPPORTS_OPACITY, FieldEdit::Toggle(false));
        assert_eq!(panel.hex(), "#007AFF");
        assert!(!panel.preview().control(OPACITY).expect("opacity").enabled);

        panel.apply(COLOR, FieldEdit::Text("rgba(255, 0, 0, 0.2)".into()));
        assert_eq!(panel.hex(), "#FF0000");
    }

    #[test]
    fn system_colors_have_no_exact_hex() {
        let mut panel = ColorPickerPanel::default();
        panel.apply(COLOR, FieldEdit::Text("accent".into()));
        assert_eq!(panel.color(), PickedColor::System(NamedColor::Accent));
        assert_eq!(panel.hex(), HEX_SENTINEL);
    }

    #[test]
    fn garbage_color_is_ignored() {
        let mut panel = ColorPickerPanel::default();
        panel.apply(COLOR, FieldEdit::Text("not a color".into()));
        assert_eq!(panel, ColorPickerPanel::default());
    }

    #[test]
    fn preview_size_is_bounded() {
        let mut panel = ColorPickerPanel::default();
        panel.apply(PREVIEW_SIZE, FieldEdit::Number(1000.0));
        assert!(panel.preview().items.contains(&PreviewItem::Swatch {
            color: panel.color(),
            size: 240.0,
        }));
    }
}
