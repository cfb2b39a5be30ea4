use control_gallery::host::{Detail, GalleryHost, PLACEHOLDER_MESSAGE};
use control_gallery::panels::{Configurator, FieldEdit, slider, text};
use control_gallery::registry::ComponentRegistry;

#[test]
fn test_initial_selection_is_first_entry() {
    let registry = ComponentRegistry::builtin();
    let host = GalleryHost::new(&registry);

    assert_eq!(host.selection(), Some("text"));
    match host.detail() {
        Detail::Panel { descriptor, view } => {
            assert_eq!(descriptor.id, "text");
            assert_eq!(view.settings.title, "Properties");
        }
        Detail::Placeholder { .. } => panic!("expected the text panel"),
    }
}

#[test]
fn test_configured_initial_selection() {
    let registry = ComponentRegistry::builtin();
    let host = GalleryHost::with_initial(&registry, Some("slider"));
    assert_eq!(host.descriptor().map(|d| d.id), Some("slider"));
}

#[test]
fn test_unknown_id_shows_placeholder() {
    let registry = ComponentRegistry::builtin();
    let mut host = GalleryHost::new(&registry);
    host.select(&registry, "carousel");

    assert_eq!(host.selection(), Some("carousel"));
    assert!(host.configurator().is_none());
    assert_eq!(
        host.detail(),
        Detail::Placeholder {
            message: PLACEHOLDER_MESSAGE
        }
    );
}

#[test]
fn test_clear_shows_placeholder() {
    let registry = ComponentRegistry::builtin();
    let mut host = GalleryHost::new(&registry);
    host.clear();
    assert_eq!(host.selection(), None);
    assert!(matches!(host.detail(), Detail::Placeholder { .. }));

    // Edits on the placeholder are no-ops.
    host.apply(text::CONTENT, FieldEdit::Text("ignored".into()));
    assert!(host.configurator().is_none());
}

#[test]
fn test_selecting_away_and_back_resets_settings() {
    let registry = ComponentRegistry::builtin();
    let mut host = GalleryHost::new(&registry);

    host.apply(text::CONTENT, FieldEdit::Text("Hello".into()));
    let Some(Configurator::Text(panel)) = host.configurator() else {
        panic!("text panel expected");
    };
    assert_eq!(panel.content(), "Hello");

    host.select(&registry, "button");
    host.select(&registry, "text");
    let Some(Configurator::Text(panel)) = host.configurator() else {
        panic!("text panel expected");
    };
    assert_eq!(panel.content(), "Text preview");
}

#[test]
fn test_reselecting_current_id_keeps_edits() {
    let registry = ComponentRegistry::builtin();
    let mut host = GalleryHost::with_initial(&registry, Some("slider"));
    host.apply(slider::VALUE, FieldEdit::Number(75.0));
    host.select(&registry, "slider");

    let Some(Configurator::Slider(panel)) = host.configurator() else {
        panic!("slider panel expected");
    };
    assert_eq!(panel.value(), 75.0);
}

#[test]
fn test_navigation_visits_every_entry() {
    let registry = ComponentRegistry::builtin();
    let mut host = GalleryHost::new(&registry);
    let mut seen = vec![host.selection().map(str::to_string)];
    for _ in 1..registry.len() {
        host.select_next(&registry);
        seen.push(host.selection().map(str::to_string));
    }
    let expected: Vec<Option<String>> = registry
        .list()
        .iter()
        .map(|d| Some(d.id.to_string()))
        .collect();
    assert_eq!(seen, expected);

    host.select_next(&registry);
    assert_eq!(host.selection(), Some("text"));
}
