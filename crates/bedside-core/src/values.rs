//! The resolved value map: everything the evaluator sees.
//!
//! Each calculator instance owns one `ValueMap`. The auto-population
//! resolver writes untouched entries into it; manual edits mark entries
//! touched, and a touched entry is never overwritten by a later
//! resolution pass.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::StalenessAnnotation;

/// A single field's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Value {
    Number(f64),
    Text(String),
    Flag(bool),
    Rows(Vec<WeightedRow>),
}

/// One row of a dynamic weighted list (item, per-unit value, factor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeightedRow {
    pub label: String,
    pub value: f64,
    pub factor: f64,
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Provenance {
    Manual,
    AutoPopulated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResolvedValue {
    pub value: Value,
    pub provenance: Provenance,
    /// Timestamp of the source observation, when auto-populated.
    pub observed_at: Option<jiff::Timestamp>,
    pub staleness: Option<StalenessAnnotation>,
    /// Set once the user edits this field. Touched entries take
    /// precedence over any later auto-population.
    pub touched: bool,
}

impl ResolvedValue {
    pub fn manual(value: Value) -> Self {
        ResolvedValue {
            value,
            provenance: Provenance::Manual,
            observed_at: None,
            staleness: None,
            touched: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValueMap {
    entries: HashMap<String, ResolvedValue>,
}

impl ValueMap {
    pub fn new() -> Self {
        ValueMap::default()
    }

    /// Record a user edit. Marks the field touched.
    pub fn set_manual(&mut self, id: impl Into<String>, value: Value) {
        self.entries.insert(id.into(), ResolvedValue::manual(value));
    }

    /// Record a resolver-produced value for a field the user has not
    /// touched. A touched entry wins over any late-arriving resolution.
    pub fn set_resolved(&mut self, id: impl Into<String>, resolved: ResolvedValue) {
        let id = id.into();
        if self.is_touched(&id) {
            return;
        }
        self.entries.insert(id, resolved);
    }

    /// Merge a batch of resolver updates, skipping touched fields.
    pub fn apply_updates(&mut self, updates: ValueMap) {
        for (id, resolved) in updates.entries {
            if !self.is_touched(&id) {
                self.entries.insert(id, resolved);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&ResolvedValue> {
        self.entries.get(id)
    }

    pub fn is_touched(&self, id: &str) -> bool {
        self.entries.get(id).is_some_and(|v| v.touched)
    }

    /// Finite numeric value of a field, if it has one.
    pub fn number(&self, id: &str) -> Option<f64> {
        match self.entries.get(id)?.value {
            Value::Number(n) if n.is_finite() => Some(n),
            _ => None,
        }
    }

    /// Numeric value only when strictly positive. Formulas use this for
    /// every denominator term so a zero or missing input yields "no
    /// result" instead of an infinity.
    pub fn positive(&self, id: &str) -> Option<f64> {
        self.number(id).filter(|n| *n > 0.0)
    }

    /// Checkbox / yes-no state. Absent means unchecked.
    pub fn flag(&self, id: &str) -> bool {
        matches!(
            self.entries.get(id).map(|v| &v.value),
            Some(Value::Flag(true))
        )
    }

    /// Selected option id of a radio/select field.
    pub fn choice(&self, id: &str) -> Option<&str> {
        match &self.entries.get(id)?.value {
            Value::Text(s) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Rows of a dynamic weighted list. An absent field is an empty list.
    pub fn rows(&self, id: &str) -> &[WeightedRow] {
        match self.entries.get(id).map(|v| &v.value) {
            Some(Value::Rows(rows)) => rows,
            _ => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ResolvedValue)> {
        self.entries.iter()
    }
}
