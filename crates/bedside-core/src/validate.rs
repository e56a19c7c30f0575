//! Field-level validation.
//!
//! Failures are soft: the evaluator treats a blocked field as
//! "insufficient data" for that pass and the caller decides whether to
//! surface a warning. Nothing here raises across the evaluator boundary.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::{FieldSpec, InputKind};
use crate::values::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum FieldCheck {
    Ok,
    MissingRequired,
    TypeMismatch,
    /// Outside the hard bounds; blocks calculation for this field.
    OutOfRange {
        min: Option<f64>,
        max: Option<f64>,
    },
    /// Inside the hard bounds but physiologically unusual; calculation
    /// proceeds, display warns.
    OutOfTypicalRange {
        warn_min: Option<f64>,
        warn_max: Option<f64>,
    },
}

impl FieldCheck {
    /// Whether this outcome withholds the field's value from formulas.
    pub fn blocks(&self) -> bool {
        !matches!(self, FieldCheck::Ok | FieldCheck::OutOfTypicalRange { .. })
    }
}

pub fn validate_field(spec: &FieldSpec, value: Option<&Value>) -> FieldCheck {
    let Some(value) = value else {
        return if spec.required {
            FieldCheck::MissingRequired
        } else {
            FieldCheck::Ok
        };
    };

    match spec.input {
        InputKind::Number => {
            let number = match value {
                Value::Number(n) => Some(*n),
                Value::Text(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            };
            match number {
                Some(n) if n.is_finite() => check_bounds(spec, n),
                _ => FieldCheck::TypeMismatch,
            }
        }
        InputKind::Checkbox => match value {
            Value::Flag(_) => FieldCheck::Ok,
            _ => FieldCheck::TypeMismatch,
        },
        InputKind::Radio | InputKind::Select | InputKind::Date => match value {
            Value::Text(s) if s.is_empty() && spec.required => FieldCheck::MissingRequired,
            Value::Text(_) => FieldCheck::Ok,
            _ => FieldCheck::TypeMismatch,
        },
    }
}

fn check_bounds(spec: &FieldSpec, n: f64) -> FieldCheck {
    let below = spec.min.is_some_and(|min| n < min);
    let above = spec.max.is_some_and(|max| n > max);
    if below || above {
        return FieldCheck::OutOfRange {
            min: spec.min,
            max: spec.max,
        };
    }
    let unusual =
        spec.warn_min.is_some_and(|min| n < min) || spec.warn_max.is_some_and(|max| n > max);
    if unusual {
        return FieldCheck::OutOfTypicalRange {
            warn_min: spec.warn_min,
            warn_max: spec.warn_max,
        };
    }
    FieldCheck::Ok
}
