//! Rule evaluation: an exhaustive match over the five scoring modes.
//!
//! Evaluation is a pure function of (rules, value map). A calculator's
//! mode is static, so the match cannot fall through to a wrong default;
//! adding a sixth mode is a compile error everywhere until handled.

use serde::Serialize;
use tracing::{debug, warn};
use ts_rs::TS;

use bedside_core::config::{
    AdjustmentRule, CalculatorConfig, FormulaFn, QuestionSpec, RiskLevel, ScoringRules, SectionSpec,
};
use bedside_core::models::FormulaRow;
use bedside_core::values::ValueMap;

use crate::risk::resolve_level;

/// Per-section subtotal, for calculators that display a breakdown.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct SectionScore {
    pub section_id: String,
    pub title: String,
    pub score: f64,
}

/// What one evaluation pass produced.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Evaluation {
    /// A scored mode produced a total.
    Score {
        total: f64,
        sections: Vec<SectionScore>,
        /// A scored section went unanswered; the total is a lower bound.
        incomplete: bool,
        level: Option<RiskLevel>,
    },
    /// A formula produced result rows directly.
    Rows { rows: Vec<FormulaRow> },
    /// Required inputs were missing or outside the formula's domain.
    Insufficient,
}

pub fn evaluate(config: &CalculatorConfig, values: &ValueMap) -> Evaluation {
    match &config.rules {
        ScoringRules::CheckboxSum {
            sections,
            adjustments,
        } => checkbox_sum(config, sections, adjustments, values),
        ScoringRules::RadioSum { sections } => radio_sum(config, sections, values),
        ScoringRules::YesNoSum { questions } => yes_no_sum(config, questions, values),
        ScoringRules::WeightedList { field, .. } => weighted_list(config, field, values),
        ScoringRules::Formula { compute } => formula(config, *compute, values),
    }
}

fn score(config: &CalculatorConfig, total: f64, sections: Vec<SectionScore>, incomplete: bool) -> Evaluation {
    let level = resolve_level(&config.risk_levels, total).cloned();
    debug!(calculator = %config.id, total, incomplete, "evaluated");
    Evaluation::Score {
        total,
        sections,
        incomplete,
        level,
    }
}

fn checkbox_sum(
    config: &CalculatorConfig,
    sections: &[SectionSpec],
    adjustments: &[AdjustmentRule],
    values: &ValueMap,
) -> Evaluation {
    let mut subtotals = Vec::with_capacity(sections.len());
    let mut total = 0.0;
    for section in sections {
        let section_score: f64 = section
            .options
            .iter()
            .filter(|opt| values.flag(&opt.id))
            .map(|opt| opt.points)
            .sum();
        total += section_score;
        subtotals.push(SectionScore {
            section_id: section.id.clone(),
            title: section.title.clone(),
            score: section_score,
        });
    }
    // Declared adjustments run after the base sum, in declaration order.
    for adjustment in adjustments {
        if adjustment.when_all.iter().all(|id| values.flag(id)) {
            total += adjustment.delta;
            debug!(
                calculator = %config.id,
                delta = adjustment.delta,
                "adjustment applied"
            );
        }
    }
    score(config, total, subtotals, false)
}

fn radio_sum(config: &CalculatorConfig, sections: &[SectionSpec], values: &ValueMap) -> Evaluation {
    let mut subtotals = Vec::with_capacity(sections.len());
    let mut total = 0.0;
    let mut incomplete = false;
    for section in sections {
        let selected = values
            .choice(&section.id)
            .and_then(|choice| section.options.iter().find(|opt| opt.id == choice));
        if let Some(choice) = values.choice(&section.id)
            && selected.is_none()
        {
            warn!(
                calculator = %config.id,
                section = %section.id,
                choice,
                "selected option is not in the section, treating as unanswered"
            );
        }
        // An unanswered section contributes 0 and flags the total as a
        // lower bound rather than a final score.
        let section_score = match selected {
            Some(opt) => opt.points,
            None => {
                incomplete = true;
                0.0
            }
        };
        total += section_score;
        subtotals.push(SectionScore {
            section_id: section.id.clone(),
            title: section.title.clone(),
            score: section_score,
        });
    }
    score(config, total, subtotals, incomplete)
}

fn yes_no_sum(config: &CalculatorConfig, questions: &[QuestionSpec], values: &ValueMap) -> Evaluation {
    // An unchecked question is "no": yes/no calculators are complete by
    // construction, unlike radio sections.
    let total: f64 = questions
        .iter()
        .filter(|q| values.flag(&q.id))
        .map(|q| q.points)
        .sum();
    score(config, total, Vec::new(), false)
}

fn weighted_list(config: &CalculatorConfig, field: &str, values: &ValueMap) -> Evaluation {
    let mut total = 0.0;
    for row in values.rows(field) {
        let product = row.value * row.factor;
        if !product.is_finite() {
            warn!(
                calculator = %config.id,
                item = %row.label,
                "non-finite row skipped"
            );
            continue;
        }
        total += product;
    }
    // An empty list is a valid total of 0, not an incomplete result.
    score(config, total, Vec::new(), false)
}

fn formula(config: &CalculatorConfig, compute: FormulaFn, values: &ValueMap) -> Evaluation {
    let mut rows = compute(values);
    rows.retain(|row| {
        if row.value.is_finite() {
            true
        } else {
            warn!(
                calculator = %config.id,
                row = %row.label,
                "formula produced a non-finite value, row dropped"
            );
            false
        }
    });
    if rows.is_empty() {
        return Evaluation::Insufficient;
    }
    Evaluation::Rows { rows }
}
