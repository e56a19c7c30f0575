//! Calculator configuration: the static, declarative description the
//! whole engine is driven by.
//!
//! Scoring behavior is a tagged union over the five evaluation modes, so
//! the evaluator is an exhaustive match: a calculator cannot silently
//! fall through to a wrong default mode. Mode selection is static per
//! calculator; modes are never mixed at runtime.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use bedside_units::QuantityKind;

use crate::error::ConfigError;
use crate::models::{FormulaRow, Severity};
use crate::values::ValueMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InputKind {
    #[default]
    Number,
    Radio,
    Select,
    Checkbox,
    Date,
}

/// Where the resolver may fill a field from before the user types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum AutoSource {
    /// Most recent observation for a code (e.g. a LOINC code).
    Observation { code: String },
    /// Checked when the patient carries any of these condition codes.
    Condition { codes: Vec<String> },
    /// Patient age in whole years.
    PatientAge,
    /// Sets the field to one of two declared values by recorded sex.
    PatientSex {
        male_value: String,
        female_value: String,
    },
}

/// An input field of a calculator. Defined statically, immutable at
/// runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldSpec {
    pub id: String,
    pub label: String,
    pub input: InputKind,
    /// Unit the engine computes in. Alternate accepted units are
    /// converted to this one before anything else sees the value.
    pub standard_unit: Option<String>,
    pub accepted_units: Vec<String>,
    pub quantity: Option<QuantityKind>,
    pub source: Option<AutoSource>,
    pub required: bool,
    /// Hard bounds: values outside block calculation for this field.
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Soft bounds: values outside warrant a double-check warning but
    /// never block calculation.
    pub warn_min: Option<f64>,
    pub warn_max: Option<f64>,
    /// Display decimals, applied only by the result assembler.
    pub decimals: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringOption {
    pub id: String,
    pub label: String,
    /// Point weight. May be negative ("alternative diagnosis as likely"
    /// subtracts).
    pub points: f64,
    pub description: Option<String>,
    /// Condition code that auto-checks this option when present.
    pub condition_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionSpec {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub options: Vec<ScoringOption>,
}

/// A yes/no question: "yes" contributes `points`, "no" contributes 0.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionSpec {
    pub id: String,
    pub label: String,
    pub points: f64,
    pub description: Option<String>,
    pub condition_code: Option<String>,
}

/// Declared post-sum adjustment: when every listed option is checked,
/// add `delta` (usually negative, to undo double-counted brackets).
/// Applied after the base sum, in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdjustmentRule {
    pub when_all: Vec<String>,
    pub delta: f64,
    pub note: Option<String>,
}

/// A labeled score range with its interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskLevel {
    pub min_score: f64,
    pub max_score: f64,
    pub label: String,
    pub severity: Severity,
    pub recommendation: Option<String>,
}

/// Selectable item of a dynamic weighted list, carrying its multiplying
/// factor (e.g. an opioid and its morphine-equivalent factor).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeightedItemOption {
    pub id: String,
    pub label: String,
    pub factor: f64,
}

/// A custom formula: a pure, deterministic function over the resolved
/// value map. Returns an empty list (never a NaN, infinity, or panic)
/// when required inputs are missing or outside the formula's domain.
pub type FormulaFn = fn(&ValueMap) -> Vec<FormulaRow>;

/// The five evaluation modes.
#[derive(Debug, Clone)]
pub enum ScoringRules {
    /// Sum of checked options' points, then declared adjustments.
    CheckboxSum {
        sections: Vec<SectionSpec>,
        adjustments: Vec<AdjustmentRule>,
    },
    /// Exactly one option per section contributes; an unanswered section
    /// contributes 0 and marks the result incomplete.
    RadioSum { sections: Vec<SectionSpec> },
    /// Radio-sum specialized to yes/no questions.
    YesNoSum { questions: Vec<QuestionSpec> },
    /// Open-ended list of (item, value, factor) rows; score is
    /// Σ value × factor. An empty list is a valid score of 0.
    WeightedList {
        /// Value-map field the runtime rows live under.
        field: String,
        item_label: String,
        value_label: String,
        value_unit: Option<String>,
        result_label: String,
        result_unit: Option<String>,
        options: Vec<WeightedItemOption>,
    },
    /// Arbitrary pure function over the value map.
    Formula { compute: FormulaFn },
}

#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    pub id: String,
    pub title: String,
    pub description: String,
    pub fields: Vec<FieldSpec>,
    pub rules: ScoringRules,
    /// Sorted, gap-free score buckets for the sum modes. May be empty
    /// for formula calculators that interpret per row.
    pub risk_levels: Vec<RiskLevel>,
    pub score_label: String,
    pub score_unit: Option<String>,
    pub score_decimals: u8,
    /// Smallest score step a calculator can produce; the risk table may
    /// not leave a gap this size or larger between adjacent levels.
    pub granularity: f64,
    pub references: Vec<String>,
}

impl CalculatorConfig {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        rules: ScoringRules,
    ) -> Self {
        CalculatorConfig {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            fields: Vec::new(),
            rules,
            risk_levels: Vec::new(),
            score_label: "Total Score".to_string(),
            score_unit: Some("points".to_string()),
            score_decimals: 0,
            granularity: 1.0,
            references: Vec::new(),
        }
    }

    fn sections(&self) -> &[SectionSpec] {
        match &self.rules {
            ScoringRules::CheckboxSum { sections, .. } | ScoringRules::RadioSum { sections } => {
                sections
            }
            _ => &[],
        }
    }

    /// The lowest and highest score the sum modes can produce. `None`
    /// for formula calculators, whose outputs are unbounded by config.
    pub fn score_bounds(&self) -> Option<(f64, f64)> {
        match &self.rules {
            ScoringRules::CheckboxSum {
                sections,
                adjustments,
            } => {
                let mut min = 0.0;
                let mut max = 0.0;
                for opt in sections.iter().flat_map(|s| &s.options) {
                    if opt.points < 0.0 {
                        min += opt.points;
                    } else {
                        max += opt.points;
                    }
                }
                for adj in adjustments {
                    if adj.delta < 0.0 {
                        min += adj.delta;
                    } else {
                        max += adj.delta;
                    }
                }
                Some((min, max))
            }
            ScoringRules::RadioSum { sections } => {
                let mut min = 0.0;
                let mut max = 0.0;
                for section in sections {
                    let lo = section
                        .options
                        .iter()
                        .map(|o| o.points)
                        .fold(f64::INFINITY, f64::min);
                    let hi = section
                        .options
                        .iter()
                        .map(|o| o.points)
                        .fold(f64::NEG_INFINITY, f64::max);
                    // Unanswered sections contribute 0.
                    min += lo.min(0.0);
                    max += hi.max(0.0);
                }
                Some((min, max))
            }
            ScoringRules::YesNoSum { questions } => {
                let mut min = 0.0;
                let mut max = 0.0;
                for q in questions {
                    min += q.points.min(0.0);
                    max += q.points.max(0.0);
                }
                Some((min, max))
            }
            ScoringRules::WeightedList { .. } | ScoringRules::Formula { .. } => None,
        }
    }

    /// Validate the configuration. Run once at registration; a failure
    /// here means the calculator is refused, not degraded.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check_fields()?;
        self.check_rules()?;
        self.check_risk_table()?;
        Ok(())
    }

    fn check_fields(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.id.as_str()) {
                return Err(ConfigError::DuplicateFieldId {
                    calculator: self.id.clone(),
                    id: field.id.clone(),
                });
            }
            let declared_units = field
                .standard_unit
                .iter()
                .chain(field.accepted_units.iter());
            for unit in declared_units {
                let Some(kind) = field.quantity else {
                    return Err(ConfigError::MissingQuantityKind {
                        calculator: self.id.clone(),
                        field: field.id.clone(),
                        unit: unit.clone(),
                    });
                };
                if !bedside_units::supports(kind, unit) {
                    return Err(ConfigError::UnsupportedUnit {
                        calculator: self.id.clone(),
                        field: field.id.clone(),
                        unit: unit.clone(),
                    });
                }
            }
            if let (Some(min), Some(max)) = (field.min, field.max)
                && min >= max
            {
                return Err(ConfigError::InvalidBounds {
                    calculator: self.id.clone(),
                    field: field.id.clone(),
                });
            }
        }
        Ok(())
    }

    fn check_rules(&self) -> Result<(), ConfigError> {
        let mut section_ids = HashSet::new();
        let mut option_ids = HashSet::new();
        for section in self.sections() {
            if !section_ids.insert(section.id.as_str()) {
                return Err(ConfigError::DuplicateSectionId {
                    calculator: self.id.clone(),
                    id: section.id.clone(),
                });
            }
            for opt in &section.options {
                if !option_ids.insert(opt.id.as_str()) {
                    return Err(ConfigError::DuplicateOptionId {
                        calculator: self.id.clone(),
                        id: opt.id.clone(),
                    });
                }
            }
        }

        match &self.rules {
            ScoringRules::CheckboxSum { adjustments, .. } => {
                for target in adjustments.iter().flat_map(|a| &a.when_all) {
                    if !option_ids.contains(target.as_str()) {
                        return Err(ConfigError::UnknownAdjustmentTarget {
                            calculator: self.id.clone(),
                            option_id: target.clone(),
                        });
                    }
                }
            }
            ScoringRules::YesNoSum { questions } => {
                let mut seen = HashSet::new();
                for q in questions {
                    if !seen.insert(q.id.as_str()) {
                        return Err(ConfigError::DuplicateQuestionId {
                            calculator: self.id.clone(),
                            id: q.id.clone(),
                        });
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn check_risk_table(&self) -> Result<(), ConfigError> {
        let scored = matches!(
            self.rules,
            ScoringRules::CheckboxSum { .. }
                | ScoringRules::RadioSum { .. }
                | ScoringRules::YesNoSum { .. }
        );
        if self.risk_levels.is_empty() {
            if scored {
                return Err(ConfigError::EmptyRiskTable {
                    calculator: self.id.clone(),
                });
            }
            return Ok(());
        }

        for (i, level) in self.risk_levels.iter().enumerate() {
            if level.min_score > level.max_score {
                return Err(ConfigError::InvertedRiskLevel {
                    calculator: self.id.clone(),
                    position: i,
                });
            }
        }
        for (i, pair) in self.risk_levels.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.min_score < prev.min_score {
                return Err(ConfigError::UnsortedRiskTable {
                    calculator: self.id.clone(),
                    position: i + 1,
                });
            }
            // A reachable score could land strictly between adjacent
            // intervals if they are more than one granularity step apart.
            if next.min_score - prev.max_score > self.granularity {
                return Err(ConfigError::RiskTableGap {
                    calculator: self.id.clone(),
                    upper: prev.max_score,
                    lower: next.min_score,
                });
            }
        }
        Ok(())
    }
}
