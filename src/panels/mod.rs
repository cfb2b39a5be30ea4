//! Configurator panels: one settings form plus live preview per control kind.
//!
//! Each panel owns its settings and validates every edit (clamping,
//! truncation, normalization). `render()` is a pure function of the current
//! settings, so the preview can never go stale.

pub mod button;
pub mod color_picker;
pub mod date_picker;
pub mod form;
pub mod picker;
pub mod preview;
pub mod progress;
pub mod slider;
pub mod stepper;
pub mod text;
pub mod text_field;
pub mod toggle;

pub use button::ButtonPanel;
pub use color_picker::ColorPickerPanel;
pub use date_picker::{DatePickerMode, DatePickerPanel};
pub use form::{FieldEdit, FieldValue, Form, FormField, Nudge};
pub use picker::PickerPanel;
pub use preview::{
    ButtonStyle, FontWeight, PanelView, PickerDisplay, Preview, PreviewItem, TextStyle, Tone,
};
pub use progress::ProgressPanel;
pub use slider::SliderPanel;
pub use stepper::StepperPanel;
pub use text::TextPanel;
pub use text_field::TextFieldPanel;
pub use toggle::TogglePanel;

use crate::registry::ComponentKind;

/// Contract shared by all configurator panels.
pub trait Panel {
    /// The editable settings section.
    fn settings(&self) -> Form;

    /// The live preview section.
    fn preview(&self) -> Preview;

    /// Apply one edit. Unknown keys and mismatched edit types are ignored.
    fn apply(&mut self, key: &str, edit: FieldEdit);

    fn render(&self) -> PanelView {
        PanelView {
            settings: self.settings(),
            preview: self.preview(),
        }
    }
}

/// A live configurator of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Configurator {
    Text(TextPanel),
    TextField(TextFieldPanel),
    Button(ButtonPanel),
    Toggle(TogglePanel),
    Slider(SliderPanel),
    Picker(PickerPanel),
    DatePicker(DatePickerPanel),
    Stepper(StepperPanel),
    Progress(ProgressPanel),
    ColorPicker(ColorPickerPanel),
}

impl Configurator {
    /// Fresh panel with default settings for the given kind.
    pub fn new(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Text => Self::Text(TextPanel::default()),
            ComponentKind::TextField => Self::TextField(TextFieldPanel::default()),
            ComponentKind::Button => Self::Button(ButtonPanel::default()),
            ComponentKind::Toggle => Self::Toggle(TogglePanel::default()),
            ComponentKind::Slider => Self::Slider(SliderPanel::default()),
            ComponentKind::Picker => Self::Picker(PickerPanel::default()),
            ComponentKind::DatePicker => Self::DatePicker(DatePickerPanel::default()),
            ComponentKind::Stepper => Self::Stepper(StepperPanel::default()),
            ComponentKind::Progress => Self::Progress(ProgressPanel::default()),
            ComponentKind::ColorPicker => Self::ColorPicker(ColorPickerPanel::default()),
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Text(_) => ComponentKind::Text,
            Self::TextField(_) => ComponentKind::TextField,
            Self::Button(_) => ComponentKind::Button,
            Self::Toggle(_) => ComponentKind::Toggle,
            Self::Slider(_) => ComponentKind::Slider,
            Self::Picker(_) => ComponentKind::Picker,
            Self::DatePicker(_) => ComponentKind::DatePicker,
            Self::Stepper(_) => ComponentKind::Stepper,
            Self::Progress(_) => ComponentKind::Progress,
            Self::ColorPicker(_) => ComponentKind::ColorPicker,
        }
    }

    fn panel(&self) -> &dyn Panel {
        match self {
            Self::Text(p) => p,
            Self::TextField(p) => p,
            Self::Button(p) => p,
            Self::Toggle(p) => p,
            Self::Slider(p) => p,
            Self::Picker(p) => p,
            Self::DatePicker(p) => p,
            Self::Stepper(p) => p,
            Self::Progress(p) => p,
            Self::ColorPicker(p) => p,
        }
    }

    fn panel_mut(&mut self) -> &mut dyn Panel {
        match self {
            Self::Text(p) => p,
            Self::TextField(p) => p,
            Self::Button(p) => p,
            Self::Toggle(p) => p,
            Self::Slider(p) => p,
            Self::Picker(p) => p,
            Self::DatePicker(p) => p,
            Self::Stepper(p) => p,
            Self::Progress(p) => p,
            Self::ColorPicker(p) => p,
        }
    }

    pub fn render(&self) -> PanelView {
        self.panel().render()
    }

    pub fn apply(&mut self, key: &str, edit: FieldEdit) {
        tracing::debug!(kind = ?self.kind(), key, ?edit, "applying edit");
        self.panel_mut().apply(key, edit);
    }
}

fn ignored(key: &str, edit: &FieldEdit) {
    tracing::debug!(key, ?edit, "edit ignored");
}
