//! Settings form model shared by every configurator panel.

use std::ops::RangeInclusive;

use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

/// Current value of a form field together with its constraints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldValue {
    Text {
        value: String,
        placeholder: String,
        multiline: bool,
    },
    Number {
        value: f64,
        min: f64,
        max: f64,
        step: f64,
        precision: usize,
    },
    Toggle {
        on: bool,
    },
    Choice {
        options: Vec<String>,
        selected: usize,
    },
    DateTime {
        value: NaiveDateTime,
        date: bool,
        time: bool,
    },
}

/// An edit requested by the user for one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Text(String),
    Number(f64),
    Toggle(bool),
    Choice(usize),
    DateTime(NaiveDateTime),
}

/// Relative adjustment of a field from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nudge {
    Less,
    More,
    MuchLess,
    MuchMore,
}

impl Nudge {
    fn sign(self) -> i64 {
        match self {
            Self::Less | Self::MuchLess => -1,
            Self::More | Self::MuchMore => 1,
        }
    }

    fn is_large(self) -> bool {
        matches!(self, Self::MuchLess | Self::MuchMore)
    }
}

/// Multiplier applied to a numeric step for large nudges.
const LARGE_STEP_FACTOR: f64 = 5.0;

impl FieldValue {
    /// Compute the edit a nudge produces, if the field supports nudging.
    ///
    /// Numbers move by their step (or five steps) and stay inside their range,
    /// toggles flip, choices cycle. Date-times move by the finest editable unit
    /// for small nudges and the coarsest for large ones.
    pub fn nudge(&self, nudge: Nudge) -> Option<FieldEdit> {
        match self {
            Self::Text { .. } => None,
            Self::Number {
                value,
                min,
                max,
                step,
                ..
            } => {
                let factor = if nudge.is_large() {
                    LARGE_STEP_FACTOR
                } else {
                    1.0
                };
                let delta = step * factor * nudge.sign() as f64;
                let next = (value + delta).clamp(min.min(*max), max.max(*min));
                Some(FieldEdit::Number(next))
            }
            Self::Toggle { on } => Some(FieldEdit::Toggle(!on)),
            Self::Choice { options, selected } => {
                if options.is_empty() {
                    return None;
                }
                let len = options.len();
                let next = match nudge.sign() {
                    s if s < 0 => (selected + len - 1) % len,
                    _ => (selected + 1) % len,
                };
                Some(FieldEdit::Choice(next))
            }
            Self::DateTime { value, date, time } => {
                let delta = match (nudge.is_large(), *date, *time) {
                    (false, _, true) => TimeDelta::minutes(1),
                    (false, true, false) => TimeDelta::days(1),
                    (true, true, _) => TimeDelta::days(1),
                    (true, false, true) => TimeDelta::hours(1),
                    (_, false, false) => return None,
                };
                let shifted = if nudge.sign() < 0 {
                    value.checked_sub_signed(delta)
                } else {
                    value.checked_add_signed(delta)
                }?;
                Some(FieldEdit::DateTime(shifted))
            }
        }
    }

    /// Human-readable value used by list renderers.
    pub fn display(&self) -> String {
        match self {
            Self::Text {
                value, placeholder, ..
            } => {
                if value.is_empty() {
                    placeholder.clone()
                } else {
                    value.clone()
                }
            }
            Self::Number {
                value, precision, ..
            } => format!("{:.*}", precision, value),
            Self::Toggle { on } => if *on { "on" } else { "off" }.to_string(),
            Self::Choice { options, selected } => {
                options.get(*selected).cloned().unwrap_or_default()
            }
            Self::DateTime { value, date, time } => match (date, time) {
                (true, true) => value.format("%Y-%m-%d %H:%M").to_string(),
                (true, false) => value.format("%Y-%m-%d").to_string(),
                (false, _) => value.format("%H:%M").to_string(),
            },
        }
    }
}

/// One labelled, editable entry of a form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormField {
    pub key: &'static str,
    pub label: String,
    pub value: FieldValue,
    pub enabled: bool,
}

impl FormField {
    fn new(key: &'static str, label: impl Into<String>, value: FieldValue) -> Self {
        Self {
            key,
            label: label.into(),
            value,
            enabled: true,
        }
    }

    pub fn text(key: &'static str, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(
            key,
            label,
            FieldValue::Text {
                value: value.into(),
                placeholder: String::new(),
                multiline: false,
            },
        )
    }

    pub fn number(
        key: &'static str,
        label: impl Into<String>,
        value: f64,
        range: RangeInclusive<f64>,
        step: f64,
    ) -> Self {
        Self::new(
            key,
            label,
            FieldValue::Number {
                value,
                min: *range.start(),
                max: *range.end(),
                step,
                precision: precision_for(step),
            },
        )
    }

    pub fn toggle(key: &'static str, label: impl Into<String>, on: bool) -> Self {
        Self::new(key, label, FieldValue::Toggle { on })
    }

    pub fn choice(
        key: &'static str,
        label: impl Into<String>,
        options: Vec<String>,
        selected: usize,
    ) -> Self {
        Self::new(key, label, FieldValue::Choice { options, selected })
    }

    pub fn date_time(
        key: &'static str,
        label: impl Into<String>,
        value: NaiveDateTime,
        date: bool,
        time: bool,
    ) -> Self {
        Self::new(key, label, FieldValue::DateTime { value, date, time })
    }

    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        if let FieldValue::Text { placeholder, .. } = &mut self.value {
            *placeholder = text.into();
        }
        self
    }

    pub fn multiline(mut self, enabled: bool) -> Self {
        if let FieldValue::Text { multiline, .. } = &mut self.value {
            *multiline = enabled;
        }
        self
    }

    pub fn with_precision(mut self, digits: usize) -> Self {
        if let FieldValue::Number { precision, .. } = &mut self.value {
            *precision = digits;
        }
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Edit produced by a nudge; disabled fields never produce one.
    pub fn nudge(&self, nudge: Nudge) -> Option<FieldEdit> {
        if !self.enabled {
            return None;
        }
        self.value.nudge(nudge)
    }

    /// Whether the field takes typed input (text or a number).
    pub fn accepts_typing(&self) -> bool {
        self.enabled
            && matches!(
                self.value,
                FieldValue::Text { .. } | FieldValue::Number { .. }
            )
    }

    /// Text field that accepts line breaks.
    pub fn is_multiline(&self) -> bool {
        matches!(self.value, FieldValue::Text { multiline: true, .. })
    }

    /// Turn typed input into an edit for this field.
    pub fn parse_input(&self, input: &str) -> Option<FieldEdit> {
        match self.value {
            FieldValue::Text { .. } => Some(FieldEdit::Text(input.to_string())),
            FieldValue::Number { .. } => input.trim().parse().ok().map(FieldEdit::Number),
            _ => None,
        }
    }
}

/// Number of decimals needed to show values of the given step.
fn precision_for(step: f64) -> usize {
    let mut scaled = step.abs();
    let mut digits = 0;
    while digits < 4 && (scaled - scaled.round()).abs() > 1e-9 {
        scaled *= 10.0;
        digits += 1;
    }
    digits
}

/// A titled list of fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Form {
    pub title: String,
    pub fields: Vec<FormField>,
}

impl Form {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn with(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field(&self, key: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(h, m, 0))
            .expect("valid date")
    }

    #[test]
    fn number_nudge_stays_in_range() {
        let field = FormField::number("v", "Value", 9.0, 0.0..=10.0, 1.0);
        assert_eq!(field.nudge(Nudge::More), Some(FieldEdit::Number(10.0)));
        assert_eq!(field.nudge(Nudge::MuchMore), Some(FieldEdit::Number(10.0)));
        assert_eq!(field.nudge(Nudge::MuchLess), Some(FieldEdit::Number(4.0)));
    }

    #[test]
    fn choice_nudge_wraps() {
        let field = FormField::choice("c", "Choice", vec!["a".into(), "b".into()], 0);
        assert_eq!(field.nudge(Nudge::Less), Some(FieldEdit::Choice(1)));
        assert_eq!(field.nudge(Nudge::More), Some(FieldEdit::Choice(1)));
    }

    #[test]
    fn disabled_field_ignores_nudges() {
        let field = FormField::toggle("t", "Toggle", false).enabled(false);
        assert_eq!(field.nudge(Nudge::More), None);
        assert!(!field.accepts_typing());
    }

    #[test]
    fn date_time_nudge_uses_editable_units() {
        let both = FieldValue::DateTime {
            value: at(10, 30),
            date: true,
            time: true,
        };
        assert_eq!(
            both.nudge(Nudge::More),
            Some(FieldEdit::DateTime(at(10, 31)))
        );

        let date_only = FieldValue::DateTime {
            value: at(10, 30),
            date: true,
            time: false,
        };
        let Some(FieldEdit::DateTime(next)) = date_only.nudge(Nudge::Less) else {
            panic!("date nudge should produce a date-time edit");
        };
        assert_eq!(next.format("%Y-%m-%d").to_string(), "2024-03-08");

        let time_only = FieldValue::DateTime {
            value: at(10, 30),
            date: false,
            time: true,
        };
        assert_eq!(
            time_only.nudge(Nudge::MuchMore),
            Some(FieldEdit::DateTime(at(11, 30)))
        );
    }

    #[test]
    fn precision_follows_step() {
        assert_eq!(precision_for(1.0), 0);
        assert_eq!(precision_for(0.5), 1);
        assert_eq!(precision_for(0.01), 2);
        assert_eq!(precision_for(0.05), 2);
    }

    #[test]
    fn typed_numbers_are_parsed() {
        let field = FormField::number("v", "Value", 1.0, 0.0..=10.0, 0.5);
        match field.parse_input(" 2.5 ") {
            Some(FieldEdit::Number(v)) => assert_relative_eq!(v, 2.5),
            other => panic!("unexpected edit {other:?}"),
        }
        assert_eq!(field.parse_input("abc"), None);
    }
}
