use control_gallery::panels::{Configurator, DatePickerPanel, Panel};
use control_gallery::registry::{ComponentKind, ComponentRegistry};

#[test]
fn test_builtin_catalog_order() {
    let registry = ComponentRegistry::builtin();
    let ids: Vec<&str> = registry.list().iter().map(|d| d.id).collect();
    assert_eq!(
        ids,
        vec![
            "text",
            "textField",
            "button",
            "toggle",
            "slider",
            "picker",
            "datePicker",
            "stepper",
            "progress",
            "colorPicker",
        ]
    );
    assert_eq!(registry.first().map(|d| d.id), Some("text"));
}

#[test]
fn test_find_known_and_unknown_ids() {
    let registry = ComponentRegistry::builtin();

    let stepper = registry.find("stepper").expect("stepper is registered");
    assert_eq!(stepper.display_name, "Stepper");
    assert_eq!(stepper.icon, "±");

    assert!(registry.find("carousel").is_none());
    assert!(registry.find("").is_none());
    // Lookup is exact, not case-insensitive.
    assert!(registry.find("Text").is_none());
}

#[test]
fn test_progress_is_listed_as_progress_view() {
    let registry = ComponentRegistry::builtin();
    let progress = registry.find("progress").expect("progress is registered");
    assert_eq!(progress.display_name, "ProgressView");
}

#[test]
fn test_every_descriptor_builds_its_own_kind() {
    let registry = ComponentRegistry::builtin();
    for (descriptor, kind) in registry.list().iter().zip(ComponentKind::ALL) {
        assert_eq!(descriptor.kind, kind);
        assert_eq!(descriptor.id, kind.id());
        let configurator = descriptor.make_configurator();
        assert_eq!(configurator.kind(), kind);
        match configurator {
            // Defaults to the current minute, so rebuild at the same instant.
            Configurator::DatePicker(panel) => {
                assert_eq!(panel, DatePickerPanel::at(panel.selection()))
            }
            other => assert_eq!(other, Configurator::new(kind)),
        }
    }
}

#[test]
fn test_every_panel_renders_a_settings_form() {
    let registry = ComponentRegistry::builtin();
    for descriptor in registry.list() {
        let view = descriptor.make_configurator().render();
        assert!(
            !view.settings.fields.is_empty(),
            "{} has no settings",
            descriptor.id
        );
        assert!(
            !view.preview.items.is_empty(),
            "{} has an empty preview",
            descriptor.id
        );
    }
}

#[test]
fn test_panel_trait_matches_configurator_render() {
    let panel = control_gallery::panels::ButtonPanel::default();
    assert_eq!(
        Configurator::Button(panel.clone()).render(),
        Panel::render(&panel)
    );
}
