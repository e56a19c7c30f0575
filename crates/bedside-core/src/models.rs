//! Result-side and annotation types shared across the engine.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Presentation severity attached to interpretations and alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Success,
    Warning,
    Danger,
    Info,
}

/// Freshness verdict for an auto-populated observation. Advisory only:
/// it annotates a value for display and never blocks population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StalenessVerdict {
    Fresh,
    Aging,
    Stale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StalenessAnnotation {
    pub verdict: StalenessVerdict,
    pub age_days: i64,
    /// Human-readable age, e.g. "3 months ago".
    pub description: String,
}

/// One raw row produced by a custom formula, before display rounding.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormulaRow {
    pub label: String,
    pub value: f64,
    pub unit: Option<String>,
    /// Display decimals, applied by the result assembler only.
    pub decimals: u8,
    pub interpretation: Option<String>,
    pub severity: Severity,
    /// Free-form payload forwarded untouched to the renderer.
    pub payload: Option<serde_json::Value>,
}

/// One presentation-ready line of a calculation result. Values are already
/// formatted; this is the last internal representation before rendering.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResultItem {
    pub label: String,
    pub value: String,
    pub unit: Option<String>,
    pub interpretation: Option<String>,
    pub severity: Severity,
    pub payload: Option<serde_json::Value>,
}

/// Output of one calculation pass. A fresh list every time; result items
/// are never mutated incrementally.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculationResult {
    pub items: Vec<ResultItem>,
    /// Set when required inputs are missing or a scored section is
    /// unanswered; the renderer may suppress the result box.
    pub incomplete: bool,
}
