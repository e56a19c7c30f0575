//! Evaluator behavior across the five scoring modes.

use bedside_core::config::{
    AdjustmentRule, CalculatorConfig, QuestionSpec, RiskLevel, ScoringOption, ScoringRules,
    SectionSpec,
};
use bedside_core::models::{FormulaRow, Severity};
use bedside_core::values::{Value, ValueMap, WeightedRow};
use bedside_engine::{Evaluation, assemble, evaluate};

fn option(id: &str, points: f64) -> ScoringOption {
    ScoringOption {
        id: id.to_string(),
        label: id.to_string(),
        points,
        description: None,
        condition_code: None,
    }
}

fn section(id: &str, options: Vec<ScoringOption>) -> SectionSpec {
    SectionSpec {
        id: id.to_string(),
        title: id.to_string(),
        subtitle: None,
        options,
    }
}

fn level(min: f64, max: f64, label: &str, severity: Severity) -> RiskLevel {
    RiskLevel {
        min_score: min,
        max_score: max,
        label: label.to_string(),
        severity,
        recommendation: None,
    }
}

fn checkbox_config() -> CalculatorConfig {
    let mut config = CalculatorConfig::new(
        "checkbox",
        "Checkbox",
        "test fixture",
        ScoringRules::CheckboxSum {
            sections: vec![section(
                "criteria",
                vec![option("a", 1.0), option("b", 1.0), option("c", 2.0)],
            )],
            adjustments: vec![],
        },
    );
    config.risk_levels = vec![
        level(0.0, 1.0, "low", Severity::Success),
        level(2.0, 4.0, "high", Severity::Danger),
    ];
    config
}

fn total_of(evaluation: &Evaluation) -> f64 {
    match evaluation {
        Evaluation::Score { total, .. } => *total,
        other => panic!("expected a score, got {other:?}"),
    }
}

#[test]
fn checked_options_sum() {
    let config = checkbox_config();
    let mut values = ValueMap::new();
    values.set_manual("a", Value::Flag(true));
    values.set_manual("c", Value::Flag(true));

    let evaluation = evaluate(&config, &values);
    assert_eq!(total_of(&evaluation), 3.0);

    let Evaluation::Score { level, incomplete, .. } = evaluation else {
        unreachable!()
    };
    assert!(!incomplete);
    assert_eq!(level.unwrap().label, "high");
}

#[test]
fn checking_more_options_never_lowers_a_nonnegative_score() {
    let config = checkbox_config();
    let mut values = ValueMap::new();
    let mut previous = total_of(&evaluate(&config, &values));
    for id in ["a", "b", "c"] {
        values.set_manual(id, Value::Flag(true));
        let current = total_of(&evaluate(&config, &values));
        assert!(current >= previous);
        previous = current;
    }
}

#[test]
fn adjustment_fires_only_when_every_listed_option_is_checked() {
    let mut config = checkbox_config();
    let ScoringRules::CheckboxSum { adjustments, .. } = &mut config.rules else {
        unreachable!()
    };
    adjustments.push(AdjustmentRule {
        when_all: vec!["a".to_string(), "b".to_string()],
        delta: -1.0,
        note: None,
    });

    let mut values = ValueMap::new();
    values.set_manual("a", Value::Flag(true));
    assert_eq!(total_of(&evaluate(&config, &values)), 1.0);

    values.set_manual("b", Value::Flag(true));
    assert_eq!(total_of(&evaluate(&config, &values)), 1.0); // 2 - 1
}

#[test]
fn an_unanswered_radio_section_marks_the_result_incomplete() {
    let mut config = CalculatorConfig::new(
        "radio",
        "Radio",
        "test fixture",
        ScoringRules::RadioSum {
            sections: vec![
                section("history", vec![option("h0", 0.0), option("h2", 2.0)]),
                section("ecg", vec![option("e0", 0.0), option("e2", 2.0)]),
            ],
        },
    );
    config.risk_levels = vec![level(0.0, 4.0, "any", Severity::Info)];

    let mut values = ValueMap::new();
    values.set_manual("history", Value::Text("h2".to_string()));

    let Evaluation::Score { total, incomplete, .. } = evaluate(&config, &values) else {
        panic!("expected a score")
    };
    assert_eq!(total, 2.0);
    assert!(incomplete);

    values.set_manual("ecg", Value::Text("e0".to_string()));
    let Evaluation::Score { incomplete, .. } = evaluate(&config, &values) else {
        panic!("expected a score")
    };
    assert!(!incomplete);
}

#[test]
fn yes_no_questions_support_negative_points() {
    let mut config = CalculatorConfig::new(
        "yesno",
        "YesNo",
        "test fixture",
        ScoringRules::YesNoSum {
            questions: vec![
                QuestionSpec {
                    id: "q1".to_string(),
                    label: "q1".to_string(),
                    points: 1.0,
                    description: None,
                    condition_code: None,
                },
                QuestionSpec {
                    id: "q2".to_string(),
                    label: "q2".to_string(),
                    points: -2.0,
                    description: None,
                    condition_code: None,
                },
            ],
        },
    );
    config.risk_levels = vec![level(-2.0, 1.0, "any", Severity::Info)];

    let mut values = ValueMap::new();
    values.set_manual("q1", Value::Flag(true));
    values.set_manual("q2", Value::Flag(true));
    assert_eq!(total_of(&evaluate(&config, &values)), -1.0);
}

fn weighted_config() -> CalculatorConfig {
    CalculatorConfig {
        score_decimals: 1,
        ..CalculatorConfig::new(
            "weighted",
            "Weighted",
            "test fixture",
            ScoringRules::WeightedList {
                field: "doses".to_string(),
                item_label: "Drug".to_string(),
                value_label: "Dose".to_string(),
                value_unit: Some("mg".to_string()),
                result_label: "Total equivalent".to_string(),
                result_unit: Some("mg".to_string()),
                options: vec![],
            },
        )
    }
}

#[test]
fn an_empty_weighted_list_scores_zero_not_incomplete() {
    let config = weighted_config();
    let Evaluation::Score { total, incomplete, .. } = evaluate(&config, &ValueMap::new()) else {
        panic!("expected a score")
    };
    assert_eq!(total, 0.0);
    assert!(!incomplete);
}

#[test]
fn weighted_rows_sum_value_times_factor() {
    let config = weighted_config();
    let mut values = ValueMap::new();
    values.set_manual(
        "doses",
        Value::Rows(vec![
            WeightedRow {
                label: "lorazepam".to_string(),
                value: 2.0,
                factor: 5.0,
            },
            WeightedRow {
                label: "alprazolam".to_string(),
                value: 0.5,
                factor: 10.0,
            },
        ]),
    );
    assert_eq!(total_of(&evaluate(&config, &values)), 15.0);

    let result = assemble(&config, evaluate(&config, &values));
    assert_eq!(result.items[0].label, "Total equivalent");
    assert_eq!(result.items[0].value, "15.0");
    assert_eq!(result.items[0].unit.as_deref(), Some("mg"));
}

#[test]
fn a_formula_with_missing_inputs_is_insufficient() {
    let config = CalculatorConfig::new(
        "formula",
        "Formula",
        "test fixture",
        ScoringRules::Formula {
            compute: |values| {
                let Some(n) = values.positive("n") else {
                    return vec![];
                };
                vec![FormulaRow {
                    label: "Result".to_string(),
                    value: 100.0 / n,
                    unit: None,
                    decimals: 1,
                    interpretation: None,
                    severity: Severity::Info,
                    payload: None,
                }]
            },
        },
    );

    assert!(matches!(
        evaluate(&config, &ValueMap::new()),
        Evaluation::Insufficient
    ));
    let result = assemble(&config, evaluate(&config, &ValueMap::new()));
    assert!(result.items.is_empty());
    assert!(result.incomplete);

    let mut values = ValueMap::new();
    values.set_manual("n", Value::Number(4.0));
    let result = assemble(&config, evaluate(&config, &values));
    assert_eq!(result.items[0].value, "25.0");
    assert!(!result.incomplete);
}

#[test]
fn a_score_above_the_table_reads_as_the_top_level() {
    let mut config = checkbox_config();
    let ScoringRules::CheckboxSum { sections, .. } = &mut config.rules else {
        unreachable!()
    };
    sections[0].options.push(option("d", 9.0));

    let mut values = ValueMap::new();
    for id in ["a", "b", "c", "d"] {
        values.set_manual(id, Value::Flag(true));
    }
    let Evaluation::Score { total, level, .. } = evaluate(&config, &values) else {
        panic!("expected a score")
    };
    assert_eq!(total, 13.0);
    assert_eq!(level.unwrap().label, "high");
}

#[test]
fn recommendation_becomes_its_own_result_item() {
    let mut config = checkbox_config();
    config.risk_levels[1].recommendation = Some("Consider imaging".to_string());

    let mut values = ValueMap::new();
    values.set_manual("c", Value::Flag(true));

    let result = assemble(&config, evaluate(&config, &values));
    assert_eq!(result.items.len(), 2);
    assert_eq!(result.items[0].value, "2");
    assert_eq!(result.items[0].interpretation.as_deref(), Some("high"));
    assert_eq!(result.items[0].severity, Severity::Danger);
    assert_eq!(result.items[1].label, "Recommendation");
    assert_eq!(result.items[1].value, "Consider imaging");
}
