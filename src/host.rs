//! Master-detail selection host.
//!
//! The host owns the current selection and the single live configurator.
//! It does not hold on to the registry; every lookup takes it explicitly so
//! the host can live next to the registry in the same owner.

use serde::Serialize;
use tracing::instrument;

use crate::panels::{Configurator, FieldEdit, PanelView};
use crate::registry::{ComponentDescriptor, ComponentRegistry};

pub const PLACEHOLDER_MESSAGE: &str = "Select a component from the list";

/// What the detail area shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Detail {
    Panel {
        descriptor: ComponentDescriptor,
        view: PanelView,
    },
    Placeholder {
        message: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct Live {
    descriptor: ComponentDescriptor,
    configurator: Configurator,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryHost {
    selection: Option<String>,
    live: Option<Live>,
}

impl GalleryHost {
    /// Host with the first registry entry selected.
    pub fn new(registry: &ComponentRegistry) -> Self {
        Self::with_initial(registry, None)
    }

    /// Host with `initial` selected, or the first entry when `None`.
    pub fn with_initial(registry: &ComponentRegistry, initial: Option<&str>) -> Self {
        let mut host = Self::default();
        match initial.or_else(|| registry.first().map(|d| d.id)) {
            Some(id) => host.select(registry, id),
            None => host.clear(),
        }
        host
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Select `id`. A known id gets a fresh panel with default settings; an
    /// unknown id shows the placeholder. Reselecting the current id keeps the
    /// live panel.
    #[cfg_attr(debug_assertions, instrument(skip(self, registry)))]
    pub fn select(&mut self, registry: &ComponentRegistry, id: &str) {
        if self.selection.as_deref() == Some(id) && self.live.is_some() {
            return;
        }
        self.selection = Some(id.to_string());
        self.live = registry.find(id).map(|descriptor| Live {
            descriptor: *descriptor,
            configurator: descriptor.make_configurator(),
        });
        match &self.live {
            Some(_) => tracing::info!(id, "component selected"),
            None => tracing::warn!(id, "unknown component id, showing placeholder"),
        }
    }

    pub fn clear(&mut self) {
        self.selection = None;
        self.live = None;
        tracing::info!("selection cleared");
    }

    /// Move to the next entry, wrapping. With no valid selection this picks
    /// the first entry.
    pub fn select_next(&mut self, registry: &ComponentRegistry) {
        self.step(registry, 1);
    }

    /// Move to the previous entry, wrapping. With no valid selection this
    /// picks the last entry.
    pub fn select_prev(&mut self, registry: &ComponentRegistry) {
        self.step(registry, -1);
    }

    fn step(&mut self, registry: &ComponentRegistry, delta: isize) {
        let len = registry.len();
        if len == 0 {
            return;
        }
        let current = self.selection().and_then(|id| registry.position(id));
        let next = match current {
            Some(index) => (index as isize + delta).rem_euclid(len as isize) as usize,
            None if delta < 0 => len - 1,
            None => 0,
        };
        if let Some(descriptor) = registry.get(next) {
            self.select(registry, descriptor.id);
        }
    }

    pub fn descriptor(&self) -> Option<&ComponentDescriptor> {
        self.live.as_ref().map(|live| &live.descriptor)
    }

    pub fn configurator(&self) -> Option<&Configurator> {
        self.live.as_ref().map(|live| &live.configurator)
    }

    pub fn detail(&self) -> Detail {
        match &self.live {
            Some(live) => Detail::Panel {
                descriptor: live.descriptor,
                view: live.configurator.render(),
            },
            None => Detail::Placeholder {
                message: PLACEHOLDER_MESSAGE,
            },
        }
    }

    /// Forward an edit to the live panel. No-op on the placeholder.
    #[cfg_attr(debug_assertions, instrument(skip(self)))]
    pub fn apply(&mut self, key: &str, edit: FieldEdit) {
        if let Some(live) = &mut self.live {
            live.configurator.apply(key, edit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_registry_shows_placeholder() {
        let registry = ComponentRegistry::new(Vec::new()).expect("empty registry");
        let mut host = GalleryHost::new(&registry);
        host.select_next(&registry);

        assert_eq!(host.selection(), None);
        assert!(matches!(host.detail(), Detail::Placeholder { .. }));
    }

    #[test]
    fn navigation_wraps() {
        let registry = ComponentRegistry::builtin();
        let mut host = GalleryHost::new(&registry);
        host.select_prev(&registry);
        assert_eq!(host.selection(), Some("colorPicker"));
        host.select_next(&registry);
        assert_eq!(host.selection(), Some("text"));
    }

    #[test]
    fn stale_selection_recovers_through_navigation() {
        let registry = ComponentRegistry::builtin();
        let mut host = GalleryHost::new(&registry);
        host.select(&registry, "nope");
        assert_eq!(host.selection(), Some("nope"));
        host.select_next(&registry);
        assert_eq!(host.selection(), Some("text"));
    }
}
