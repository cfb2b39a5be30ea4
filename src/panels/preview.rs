//! Output description of a configurator's live preview.

use chrono::NaiveDate;
use serde::Serialize;

use super::form::{Form, FormField};
use crate::color::{NamedColor, PickedColor};

/// Color role of a piece of preview text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Default,
    Secondary,
    Success,
    Warning,
    Named(NamedColor),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    pub const ALL: [FontWeight; 4] = [
        FontWeight::Regular,
        FontWeight::Medium,
        FontWeight::Semibold,
        FontWeight::Bold,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Medium => "Medium",
            Self::Semibold => "Semibold",
            Self::Bold => "Bold",
        }
    }

    pub fn is_heavy(self) -> bool {
        matches!(self, Self::Semibold | Self::Bold)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TextStyle {
    pub size: Option<f64>,
    pub weight: FontWeight,
    pub tone: Tone,
    pub italic: bool,
}

impl TextStyle {
    pub fn toned(tone: Tone) -> Self {
        Self {
            tone,
            ..Self::default()
        }
    }

    pub fn headline() -> Self {
        Self {
            weight: FontWeight::Semibold,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    #[default]
    Automatic,
    Bordered,
    Prominent,
    Link,
}

impl ButtonStyle {
    pub const ALL: [ButtonStyle; 4] = [
        ButtonStyle::Automatic,
        ButtonStyle::Bordered,
        ButtonStyle::Prominent,
        ButtonStyle::Link,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Automatic => "Automatic",
            Self::Bordered => "Bordered",
            Self::Prominent => "Prominent",
            Self::Link => "Link",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PickerDisplay {
    #[default]
    Menu,
    Segmented,
    RadioGroup,
}

impl PickerDisplay {
    pub const ALL: [PickerDisplay; 3] = [
        PickerDisplay::Menu,
        PickerDisplay::Segmented,
        PickerDisplay::RadioGroup,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Menu => "Menu",
            Self::Segmented => "Segmented",
            Self::RadioGroup => "Radio group",
        }
    }
}

/// One drawn element of a preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PreviewItem {
    Label {
        text: String,
        style: TextStyle,
    },
    Button {
        label: String,
        icon: Option<String>,
        style: ButtonStyle,
        enabled: bool,
    },
    Switch {
        label: String,
        on: bool,
        tint: NamedColor,
    },
    /// Position of a slider thumb within its track, in `[0, 1]`.
    Track {
        fraction: f64,
    },
    /// `None` fraction means an indeterminate, looping indicator.
    Progress {
        fraction: Option<f64>,
        tint: NamedColor,
    },
    Options {
        options: Vec<String>,
        selected: usize,
        display: PickerDisplay,
    },
    Calendar {
        date: NaiveDate,
    },
    Input {
        text: String,
        placeholder: String,
        multiline: bool,
        bordered: bool,
    },
    Swatch {
        color: PickedColor,
        size: f64,
    },
}

impl PreviewItem {
    pub fn label(text: impl Into<String>, style: TextStyle) -> Self {
        Self::Label {
            text: text.into(),
            style,
        }
    }
}

/// Interactive controls plus the drawn items of a preview.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Preview {
    pub controls: Vec<FormField>,
    pub items: Vec<PreviewItem>,
}

impl Preview {
    pub fn control(&self, key: &str) -> Option<&FormField> {
        self.controls.iter().find(|f| f.key == key)
    }
}

/// Everything a host needs to draw one configurator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub settings: Form,
    pub preview: Preview,
}
