//! Range slider configurator.

use super::form::{FieldEdit, Form, FormField};
use super::preview::{Preview, PreviewItem, TextStyle, Tone};
use super::{Panel, ignored};

pub const VALUE: &str = "value";
pub const LOWER_BOUND: &str = "lower_bound";
pub const UPPER_BOUND: &str = "upper_bound";
pub const STEP: &str = "step";
pub const SHOW_VALUE_LABEL: &str = "show_value_label";

pub const STEP_OPTIONS: [f64; 5] = [0.1, 0.5, 1.0, 5.0, 10.0];
const DEFAULT_STEP_INDEX: usize = 2;

/// Bounds are kept within `±BOUND_LIMIT`.
pub const BOUND_LIMIT: f64 = 1_000_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SliderPanel {
    value: f64,
    lower_bound: f64,
    upper_bound: f64,
    step_index: usize,
    show_value_label: bool,
}

impl Default for SliderPanel {
    fn default() -> Self {
        Self {
            value: 50.0,
            lower_bound: 0.0,
            upper_bound: 100.0,
            step_index: DEFAULT_STEP_INDEX,
            show_value_label: true,
        }
    }
}

fn bound(value: f64) -> Option<f64> {
    value
        .is_finite()
        .then(|| value.clamp(-BOUND_LIMIT, BOUND_LIMIT))
}

impl SliderPanel {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn step(&self) -> f64 {
        STEP_OPTIONS[self.step_index]
    }

    /// `(min, max)` of the two bounds, whichever order they were entered in.
    pub fn effective_range(&self) -> (f64, f64) {
        (
            self.lower_bound.min(self.upper_bound),
            self.lower_bound.max(self.upper_bound),
        )
    }

    pub fn set_value(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        let (min, max) = self.effective_range();
        self.value = value.clamp(min, max);
    }

    pub fn set_lower_bound(&mut self, value: f64) {
        if let Some(lower) = bound(value) {
            self.lower_bound = lower;
            self.reclamp();
        }
    }

    pub fn set_upper_bound(&mut self, value: f64) {
        if let Some(upper) = bound(value) {
            self.upper_bound = upper;
            self.reclamp();
        }
    }

    fn reclamp(&mut self) {
        self.set_value(self.value);
    }

    /// Thumb position in `[0, 1]`; an empty range pins it to the start.
    pub fn fraction(&self) -> f64 {
        let (min, max) = self.effective_range();
        let span = max - min;
        if span <= 0.0 {
            0.0
        } else {
            ((self.value - min) / span).clamp(0.0, 1.0)
        }
    }
}

impl Panel for SliderPanel {
    fn settings(&self) -> Form {
        Form::new("Range")
            .with(FormField::number(
                LOWER_BOUND,
                "Lower bound",
                self.lower_bound,
                -BOUND_LIMIT..=BOUND_LIMIT,
                1.0,
            ))
            .with(FormField::number(
                UPPER_BOUND,
                "Upper bound",
                self.upper_bound,
                -BOUND_LIMIT..=BOUND_LIMIT,
                1.0,
            ))
            .with(FormField::choice(
                STEP,
                "Step",
                STEP_OPTIONS.iter().map(|s| s.to_string()).collect(),
                self.step_index,
            ))
            .with(FormField::toggle(
                SHOW_VALUE_LABEL,
                "Show value label",
                self.show_value_label,
            ))
    }

    fn preview(&self) -> Preview {
        let (min, max) = self.effective_range();
        let mut items = vec![PreviewItem::Track {
            fraction: self.fraction(),
        }];
        if self.show_value_label {
            items.push(PreviewItem::label(
                format!("Current value: {:.2}", self.value),
                TextStyle::toned(Tone::Secondary),
            ));
        }

        Preview {
            controls: vec![
                FormField::number(VALUE, "Value", self.value, min..=max, self.step())
                    .with_precision(2),
            ],
            items,
        }
    }

    fn apply(&mut self, key: &str, edit: FieldEdit) {
        match (key, edit) {
            (VALUE, FieldEdit::Number(value)) => self.set_value(value),
            (LOWER_BOUND, FieldEdit::Number(value)) => self.set_lower_bound(value),
            (UPPER_BOUND, FieldEdit::Number(value)) => self.set_upper_bound(value),
            (STEP, FieldEdit::Choice(index)) if index < STEP_OPTIONS.len() => {
                self.step_index = index;
            }
            (SHOW_VALUE_LABEL, FieldEdit::Toggle(on)) => self.show_value_label = on,
            (key, edit) => ignored(key, &edit),
        }
    }
}
