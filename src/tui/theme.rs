//! Terminal colors for preview tones and the configured accent.

use palette::{LinSrgb, Mix, Srgb};
use ratatui::style::{Color, Modifier, Style};

use crate::color::{NamedColor, PickedColor};
use crate::config::{ConfigError, GalleryConfig};
use crate::panels::{TextStyle, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Focus highlight and the `accent` named color
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
        }
    }
}

impl Theme {
    pub fn from_config(config: &GalleryConfig) -> Result<Self, ConfigError> {
        Ok(match config.accent_rgb()? {
            Some(rgb) => Self {
                accent: rgb_color(rgb),
            },
            None => Self::default(),
        })
    }

    pub fn named(&self, color: NamedColor) -> Color {
        match color {
            NamedColor::Primary => Color::Reset,
            NamedColor::Secondary => Color::Gray,
            NamedColor::Accent => self.accent,
            NamedColor::Pink | NamedColor::Green => {
                color.fixed_rgb().map(rgb_color).unwrap_or(Color::Reset)
            }
        }
    }

    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Default => Color::Reset,
            Tone::Secondary => Color::DarkGray,
            Tone::Success => Color::Green,
            Tone::Warning => Color::Red,
            Tone::Named(color) => self.named(color),
        }
    }

    /// Terminal approximation of a text style. Font size has no terminal
    /// equivalent and is left to the label text.
    pub fn text(&self, style: TextStyle) -> Style {
        let mut out = Style::default().fg(self.tone(style.tone));
        if style.weight.is_heavy() {
            out = out.add_modifier(Modifier::BOLD);
        }
        if style.italic {
            out = out.add_modifier(Modifier::ITALIC);
        }
        out
    }

    /// Label style of the focused row.
    pub fn focused(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Picked color composited over a black background.
    pub fn swatch(&self, color: PickedColor) -> Color {
        let Some(rgba) = color.resolve() else {
            return match color {
                PickedColor::System(named) => self.named(named),
                PickedColor::Rgba(_) => Color::Reset,
            };
        };
        let alpha = f32::from(rgba.alpha) / 255.0;
        let linear: LinSrgb<f32> = Srgb::new(rgba.red, rgba.green, rgba.blue)
            .into_format::<f32>()
            .into_linear();
        let over_black = LinSrgb::new(0.0, 0.0, 0.0).mix(linear, alpha);
        let srgb: Srgb<f32> = Srgb::from_linear(over_black);
        rgb_color(srgb.into_format())
    }
}

fn rgb_color(rgb: Srgb<u8>) -> Color {
    Color::Rgb(rgb.red, rgb.green, rgb.blue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppearanceSettings;
    use palette::Srgba;

    #[test]
    fn configured_accent_becomes_rgb() {
        let config = GalleryConfig {
            appearance: AppearanceSettings {
                accent: Some("#ff8800".into()),
            },
            ..GalleryConfig::default()
        };
        let theme = Theme::from_config(&config).expect("valid accent");
        assert_eq!(theme.accent, Color::Rgb(255, 136, 0));
        assert_eq!(theme.named(NamedColor::Accent), Color::Rgb(255, 136, 0));
    }

    #[test]
    fn opaque_swatch_keeps_its_channels() {
        let color = PickedColor::Rgba(Srgba::new(0, 122, 255, 255));
        assert_eq!(Theme::default().swatch(color), Color::Rgb(0, 122, 255));
    }

    #[test]
    fn transparent_swatch_is_black() {
        let color = PickedColor::Rgba(Srgba::new(200, 10, 10, 0));
        assert_eq!(Theme::default().swatch(color), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn warning_tone_is_red() {
        assert_eq!(Theme::default().tone(Tone::Warning), Color::Red);
    }
}
