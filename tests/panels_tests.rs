use approx::assert_relative_eq;
use control_gallery::panels::{
    Configurator, FieldEdit, FieldValue, Nudge, Panel, PreviewItem, SliderPanel, StepperPanel,
    TextFieldPanel, slider, stepper, text, text_field, toggle,
};
use control_gallery::registry::ComponentKind;

fn number(configurator: &Configurator, key: &str) -> f64 {
    match configurator.render().settings.field(key).map(|f| &f.value) {
        Some(FieldValue::Number { value, .. }) => *value,
        other => panic!("{key} is not a number field: {other:?}"),
    }
}

#[test]
fn test_slider_value_follows_shrinking_bounds() {
    let mut panel = SliderPanel::default();
    panel.set_upper_bound(40.0);
    assert_relative_eq!(panel.value(), 40.0);
    assert_eq!(panel.effective_range(), (0.0, 40.0));

    panel.set_lower_bound(45.0);
    // Bounds entered out of order still form a range.
    assert_eq!(panel.effective_range(), (40.0, 45.0));
    assert!(panel.value() >= 40.0 && panel.value() <= 45.0);
}

#[test]
fn test_slider_fraction_of_empty_range_is_zero() {
    let mut panel = SliderPanel::default();
    panel.set_lower_bound(10.0);
    panel.set_upper_bound(10.0);
    assert_relative_eq!(panel.fraction(), 0.0);
}

#[test]
fn test_text_field_input_is_truncated_to_limit() {
    let mut panel = TextFieldPanel::default();
    panel.set_character_limit(5);
    panel.set_text("abcdefgh");
    assert_eq!(panel.text(), "abcde");
    assert_eq!(panel.counter(), "5/5");
    assert!(!panel.is_over_limit());
}

#[test]
fn test_text_field_lowering_limit_keeps_text() {
    let mut panel = TextFieldPanel::default();
    panel.set_text("twelve chars");
    panel.set_character_limit(5);
    assert_eq!(panel.text(), "twelve chars");
    assert!(panel.is_over_limit());
    assert_eq!(panel.counter(), "12/5");
}

#[test]
fn test_text_field_counts_characters_not_bytes() {
    let mut panel = TextFieldPanel::default();
    panel.set_character_limit(5);
    panel.set_text("héllo wörld");
    assert_eq!(panel.text(), "héllo");
    assert_eq!(panel.character_count(), 5);
}

#[test]
fn test_stepper_upper_bound_is_capped() {
    let mut panel = StepperPanel::default();
    panel.set_lower_bound(3);
    panel.set_upper_bound(15);
    assert_eq!(panel.upper_bound(), stepper::UPPER_CEILING);
    assert_eq!(panel.lower_bound(), 3);

    panel.set_value(-4);
    assert_eq!(panel.value(), 3);
}

#[test]
fn test_unknown_keys_are_ignored() {
    for kind in ComponentKind::ALL {
        let mut configurator = Configurator::new(kind);
        let before = configurator.clone();
        configurator.apply("no_such_setting", FieldEdit::Toggle(true));
        assert_eq!(configurator, before, "{} changed", kind.id());
    }
}

#[test]
fn test_mismatched_edit_type_is_ignored() {
    let mut configurator = Configurator::new(ComponentKind::Text);
    let before = configurator.clone();
    configurator.apply(text::SIZE, FieldEdit::Text("huge".into()));
    assert_eq!(configurator, before);
}

#[test]
fn test_nudged_field_round_trips_through_apply() {
    let mut configurator = Configurator::new(ComponentKind::Text);
    let size = configurator
        .render()
        .settings
        .field(text::SIZE)
        .cloned()
        .expect("text has a size field");

    let edit = size.nudge(Nudge::More).expect("number fields can be nudged");
    configurator.apply(text::SIZE, edit);
    assert_relative_eq!(number(&configurator, text::SIZE), 29.0);

    // Stepping past the top is clamped.
    for _ in 0..100 {
        let field = configurator
            .render()
            .settings
            .field(text::SIZE)
            .cloned()
            .expect("text has a size field");
        if let Some(edit) = field.nudge(Nudge::MuchMore) {
            configurator.apply(text::SIZE, edit);
        }
    }
    assert_relative_eq!(number(&configurator, text::SIZE), *text::SIZE_RANGE.end());
}

#[test]
fn test_toggle_preview_tracks_state() {
    let mut configurator = Configurator::new(ComponentKind::Toggle);
    configurator.apply(toggle::IS_ON, FieldEdit::Toggle(false));

    let view = configurator.render();
    assert!(view.preview.items.iter().any(|item| matches!(
        item,
        PreviewItem::Switch { on: false, .. }
    )));
    assert_eq!(
        view.preview.control(toggle::IS_ON).map(|f| &f.value),
        Some(&FieldValue::Toggle { on: false })
    );
}

#[test]
fn test_text_field_preview_shows_counter() {
    let mut configurator = Configurator::new(ComponentKind::TextField);
    configurator.apply(text_field::TEXT, FieldEdit::Text("hello".into()));

    let labels: Vec<String> = configurator
        .render()
        .preview
        .items
        .into_iter()
        .filter_map(|item| match item {
            PreviewItem::Label { text, .. } => Some(text),
            _ => None,
        })
        .collect();
    assert!(labels.contains(&"Characters: 5/50".to_string()), "{labels:?}");
}

#[test]
fn test_slider_settings_reflect_applied_value() {
    let mut panel = SliderPanel::default();
    panel.apply(slider::VALUE, FieldEdit::Number(12.5));
    let view = panel.render();
    assert_eq!(
        view.preview.control(slider::VALUE).map(|f| f.key),
        Some(slider::VALUE)
    );
    assert_relative_eq!(panel.value(), 12.5);
}
