//! Result assembly.
//!
//! The single place where display rounding happens. Everything upstream
//! carries full-precision values; items leave here as formatted strings
//! ready for rendering.

use bedside_core::config::{CalculatorConfig, ScoringRules};
use bedside_core::models::{CalculationResult, ResultItem, Severity};

use crate::evaluate::Evaluation;

pub fn assemble(config: &CalculatorConfig, evaluation: Evaluation) -> CalculationResult {
    match evaluation {
        Evaluation::Score {
            total,
            incomplete,
            level,
            ..
        } => {
            let (label, unit) = match &config.rules {
                ScoringRules::WeightedList {
                    result_label,
                    result_unit,
                    ..
                } => (result_label.clone(), result_unit.clone()),
                _ => (config.score_label.clone(), config.score_unit.clone()),
            };
            let mut items = vec![ResultItem {
                label,
                value: format_value(total, config.score_decimals),
                unit,
                interpretation: level.as_ref().map(|l| l.label.clone()),
                severity: level.as_ref().map_or(Severity::Info, |l| l.severity),
                payload: None,
            }];
            if let Some(recommendation) = level.and_then(|l| l.recommendation) {
                items.push(ResultItem {
                    label: "Recommendation".to_string(),
                    value: recommendation,
                    unit: None,
                    interpretation: None,
                    severity: Severity::Info,
                    payload: None,
                });
            }
            CalculationResult { items, incomplete }
        }
        Evaluation::Rows { rows } => CalculationResult {
            items: rows
                .into_iter()
                .map(|row| ResultItem {
                    label: row.label,
                    value: format_value(row.value, row.decimals),
                    unit: row.unit,
                    interpretation: row.interpretation,
                    severity: row.severity,
                    payload: row.payload,
                })
                .collect(),
            incomplete: false,
        },
        Evaluation::Insufficient => CalculationResult {
            items: Vec::new(),
            incomplete: true,
        },
    }
}

fn format_value(value: f64, decimals: u8) -> String {
    format!("{value:.prec$}", prec = decimals as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_applies_the_declared_decimals() {
        assert_eq!(format_value(1.26, 1), "1.3");
        assert_eq!(format_value(3.0, 0), "3");
        assert_eq!(format_value(0.666, 2), "0.67");
    }
}
