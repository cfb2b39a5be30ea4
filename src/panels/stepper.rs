//! Integer stepper configurator.

use super::form::{FieldEdit, Form, FormField};
use super::preview::{Preview, PreviewItem, TextStyle, Tone};
use super::{Panel, ignored};

pub const LABEL: &str = "label";
pub const VALUE: &str = "value";
pub const LOWER_BOUND: &str = "lower_bound";
pub const UPPER_BOUND: &str = "upper_bound";
pub const STEP: &str = "step";

pub const STEP_OPTIONS: [i64; 3] = [1, 2, 5];

/// Hard ceiling for the upper bound.
pub const UPPER_CEILING: i64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct StepperPanel {
    label: String,
    value: i64,
    lower_bound: i64,
    upper_bound: i64,
    step_index: usize,
}

impl Default for StepperPanel {
    fn default() -> Self {
        Self {
            label: "Quantity".to_string(),
            value: 5,
            lower_bound: 0,
            upper_bound: UPPER_CEILING,
            step_index: 0,
        }
    }
}

/// Whole number from a numeric edit; non-finite input is rejected.
fn whole(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.round() as i64)
}

impl StepperPanel {
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn lower_bound(&self) -> i64 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> i64 {
        self.upper_bound
    }

    pub fn step(&self) -> i64 {
        STEP_OPTIONS[self.step_index]
    }

    fn effective_range(&self) -> (i64, i64) {
        (
            self.lower_bound.min(self.upper_bound),
            self.lower_bound.max(self.upper_bound),
        )
    }

    pub fn set_value(&mut self, value: i64) {
        let (min, max) = self.effective_range();
        self.value = value.clamp(min, max);
    }

    /// Lower bound is kept within `[0, upper]`.
    pub fn set_lower_bound(&mut self, value: i64) {
        self.lower_bound = value.clamp(0, self.upper_bound);
        self.set_value(self.value);
    }

    /// Upper bound is kept within `[lower, UPPER_CEILING]`.
    pub fn set_upper_bound(&mut self, value: i64) {
        self.upper_bound = value.clamp(self.lower_bound, UPPER_CEILING);
        self.set_value(self.value);
    }
}

impl Panel for StepperPanel {
    fn settings(&self) -> Form {
        Form::new("Properties")
            .with(
                FormField::text(LABEL, "Title", self.label.clone())
                    .with_placeholder("Stepper title"),
            )
            .with(FormField::number(
                LOWER_BOUND,
                "Lower bound",
                self.lower_bound as f64,
                0.0..=self.upper_bound as f64,
                1.0,
            ))
            .with(FormField::number(
                UPPER_BOUND,
                "Upper bound",
                self.upper_bound as f64,
                self.lower_bound as f64..=UPPER_CEILING as f64,
                1.0,
            ))
            .with(FormField::choice(
                STEP,
                "Step",
                STEP_OPTIONS.iter().map(|s| s.to_string()).collect(),
                self.step_index,
            ))
    }

    fn preview(&self) -> Preview {
        let (min, max) = self.effective_range();
        Preview {
            controls: vec![FormField::number(
                VALUE,
                format!("{}: {}", self.label, self.value),
                self.value as f64,
                min as f64..=max as f64,
                self.step() as f64,
            )],
            items: vec![PreviewItem::label(
                format!("Current value: {}", self.value),
                TextStyle::toned(Tone::Secondary),
            )],
        }
    }

    fn apply(&mut self, key: &str, edit: FieldEdit) {
        match (key, edit) {
            (LABEL, FieldEdit::Text(label)) => self.label = label,
            (VALUE, FieldEdit::Number(value)) => {
                if let Some(value) = whole(value) {
                    self.set_value(value);
                }
            }
            (LOWER_BOUND, FieldEdit::Number(value)) => {
                if let Some(value) = whole(value) {
                    self.set_lower_bound(value);
                }
            }
            (UPPER_BOUND, FieldEdit::Number(value)) => {
                if let Some(value) = whole(value) {
                    self.set_upper_bound(value);
                }
            }
            (STEP, FieldEdit::Choice(index)) if index < STEP_OPTIONS.len() => {
                self.step_index = index;
            }
            (key, edit) => ignored(key, &edit),
        }
    }
}
