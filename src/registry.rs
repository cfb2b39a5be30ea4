//! Component registry: the ordered catalog of selectable control kinds.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::panels::Configurator;

/// The fixed set of control kinds the gallery knows how to configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    Text,
    TextField,
    Button,
    Toggle,
    Slider,
    Picker,
    DatePicker,
    Stepper,
    Progress,
    ColorPicker,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 10] = [
        ComponentKind::Text,
        ComponentKind::TextField,
        ComponentKind::Button,
        ComponentKind::Toggle,
        ComponentKind::Slider,
        ComponentKind::Picker,
        ComponentKind::DatePicker,
        ComponentKind::Stepper,
        ComponentKind::Progress,
        ComponentKind::ColorPicker,
    ];

    /// Stable id used for lookup and on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextField => "textField",
            Self::Button => "button",
            Self::Toggle => "toggle",
            Self::Slider => "slider",
            Self::Picker => "picker",
            Self::DatePicker => "datePicker",
            Self::Stepper => "stepper",
            Self::Progress => "progress",
            Self::ColorPicker => "colorPicker",
        }
    }

    fn descriptor(self) -> ComponentDescriptor {
        let (display_name, description, icon) = match self {
            Self::Text => ("Text", "Display text and adjust its style", "Aa"),
            Self::TextField => (
                "TextField",
                "Single/multi-line input with placeholder and limit",
                "I_",
            ),
            Self::Button => ("Button", "Configure title, style and state", "[]"),
            Self::Toggle => ("Toggle", "Switch with label and tint", "◐"),
            Self::Slider => ("Slider", "Numeric range, step and value label", "━●"),
            Self::Picker => (
                "Picker",
                "Choose from options with different layouts",
                "☰",
            ),
            Self::DatePicker => ("DatePicker", "Pick a date/time and its components", "▦"),
            Self::Stepper => ("Stepper", "Counter range and step", "±"),
            Self::Progress => ("ProgressView", "Determinate / indeterminate progress", "▰"),
            Self::ColorPicker => ("ColorPicker", "Pick a color and preview opacity", "◉"),
        };
        ComponentDescriptor {
            id: self.id(),
            display_name,
            description,
            icon,
            kind: self,
        }
    }
}

/// Immutable metadata plus factory for one selectable component kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    #[serde(skip)]
    pub kind: ComponentKind,
}

impl ComponentDescriptor {
    /// Fresh configurator with default settings.
    pub fn make_configurator(&self) -> Configurator {
        Configurator::new(self.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    DuplicateId(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateId(id) => write!(f, "Duplicate component id: {}", id),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Ordered, id-unique list of descriptors. Order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRegistry {
    descriptors: Vec<ComponentDescriptor>,
}

impl ComponentRegistry {
    /// Build a registry, rejecting duplicate ids.
    pub fn new(descriptors: Vec<ComponentDescriptor>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for descriptor in &descriptors {
            if !seen.insert(descriptor.id) {
                return Err(RegistryError::DuplicateId(descriptor.id.to_string()));
            }
        }
        Ok(Self { descriptors })
    }

    /// All ten built-in control kinds in catalog order.
    pub fn builtin() -> Self {
        Self {
            descriptors: ComponentKind::ALL.iter().map(|k| k.descriptor()).collect(),
        }
    }

    pub fn list(&self) -> &[ComponentDescriptor] {
        &self.descriptors
    }

    pub fn find(&self, id: &str) -> Option<&ComponentDescriptor> {
        self.descriptors.iter().find(|d| d.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.descriptors.iter().position(|d| d.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&ComponentDescriptor> {
        self.descriptors.get(index)
    }

    pub fn first(&self) -> Option<&ComponentDescriptor> {
        self.descriptors.first()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids_are_unique() {
        let registry = ComponentRegistry::builtin();
        let rebuilt = ComponentRegistry::new(registry.list().to_vec());
        assert_eq!(rebuilt, Ok(registry));
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let text = ComponentKind::Text.descriptor();
        let err = ComponentRegistry::new(vec![text, ComponentKind::Button.descriptor(), text])
            .expect_err("duplicate must fail");
        assert_eq!(err, RegistryError::DuplicateId("text".into()));
        assert_eq!(err.to_string(), "Duplicate component id: text");
    }

    #[test]
    fn descriptor_builds_matching_configurator() {
        for kind in ComponentKind::ALL {
            assert_eq!(kind.descriptor().make_configurator().kind(), kind);
        }
    }
}
