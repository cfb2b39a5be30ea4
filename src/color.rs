//! Named colors and the approximate hex readout used by the color picker.

use csscolorparser::Color as CssColor;
use palette::{Srgb, Srgba};
use serde::{Serialize, Serializer};

/// Shown instead of a hex code when a color has no fixed device RGB value.
pub const HEX_SENTINEL: &str = "#------";

/// Colors offered by the tint and text-color pickers.
///
/// Primary, secondary and accent follow the terminal/appearance settings and
/// have no fixed RGB value; pink and green are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedColor {
    Primary,
    Secondary,
    #[default]
    Accent,
    Pink,
    Green,
}

impl NamedColor {
    pub const ALL: [NamedColor; 5] = [
        NamedColor::Primary,
        NamedColor::Secondary,
        NamedColor::Accent,
        NamedColor::Pink,
        NamedColor::Green,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Accent => "Accent",
            Self::Pink => "Pink",
            Self::Green => "Green",
        }
    }

    /// Keyword accepted by [`PickedColor::parse`].
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Pink => "pink",
            Self::Green => "green",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Display names in picker order.
    pub fn options() -> Vec<String> {
        Self::ALL
            .iter()
            .map(|c| c.display_name().to_string())
            .collect()
    }

    /// Fixed sRGB value, or `None` for appearance-dependent colors.
    pub fn fixed_rgb(self) -> Option<Srgb<u8>> {
        match self {
            Self::Pink => Some(Srgb::new(255, 45, 85)),
            Self::Green => Some(Srgb::new(52, 199, 89)),
            Self::Primary | Self::Secondary | Self::Accent => None,
        }
    }
}

/// A color chosen in the color picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickedColor {
    Rgba(Srgba<u8>),
    System(NamedColor),
}

impl Default for PickedColor {
    fn default() -> Self {
        Self::Rgba(Srgba::new(0, 122, 255, 255))
    }
}

impl PickedColor {
    /// Parse a named-color keyword or any CSS color string.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if let Some(named) = NamedColor::ALL
            .iter()
            .find(|c| c.keyword().eq_ignore_ascii_case(trimmed))
        {
            return Some(Self::System(*named));
        }

        let css: CssColor = trimmed.parse().ok()?;
        let [r, g, b, a] = css.to_rgba8();
        Some(Self::Rgba(Srgba::new(r, g, b, a)))
    }

    /// Device RGBA value, if the color has one.
    pub fn resolve(self) -> Option<Srgba<u8>> {
        match self {
            Self::Rgba(color) => Some(color),
            Self::System(named) => named
                .fixed_rgb()
                .map(|rgb| Srgba::new(rgb.red, rgb.green, rgb.blue, 255)),
        }
    }

    /// Opacity in `[0, 1]`. Appearance-dependent colors are opaque.
    pub fn opacity(self) -> f64 {
        self.resolve()
            .map(|c| f64::from(c.alpha) / 255.0)
            .unwrap_or(1.0)
    }

    /// Same color with a new opacity. Appearance-dependent colors have no
    /// channel values to carry an alpha and are returned unchanged.
    pub fn with_opacity(self, opacity: f64) -> Self {
        if !opacity.is_finite() {
            return self;
        }
        let Some(color) = self.resolve() else {
            return self;
        };
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::Rgba(Srgba::new(color.red, color.green, color.blue, alpha))
    }

    /// Text form suitable for the color input field.
    pub fn to_css(self) -> String {
        match self {
            Self::System(named) => named.keyword().to_string(),
            Self::Rgba(_) => hex_string(self),
        }
    }
}

impl Serialize for PickedColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

/// Approximate hex code for display: `#RRGGBB`, or `#RRGGBBAA` when the color
/// is translucent. Colors without a device RGB value yield [`HEX_SENTINEL`].
pub fn hex_string(color: PickedColor) -> String {
    let Some(c) = color.resolve() else {
        return HEX_SENTINEL.to_string();
    };
    if c.alpha < 255 {
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            c.red, c.green, c.blue, c.alpha
        )
    } else {
        format!("#{:02X}{:02X}{:02X}", c.red, c.green, c.blue)
    }
}

/// Parse a CSS color into an opaque sRGB value.
pub fn parse_color(input: &str) -> Result<Srgb<u8>, String> {
    let css_color: CssColor = input
        .parse()
        .map_err(|e| format!("Invalid color '{}': {}", input, e))?;
    let [r, g, b, _a] = css_color.to_rgba8();
    Ok(Srgb::new(r, g, b))
}
