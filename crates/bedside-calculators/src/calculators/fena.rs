use bedside_core::CalculatorConfig;
use bedside_core::config::{AutoSource, FieldSpec, ScoringRules};
use bedside_core::models::{FormulaRow, Severity};
use bedside_core::values::ValueMap;
use bedside_units::QuantityKind;

// LOINC codes for the four inputs.
const URINE_SODIUM: &str = "2955-3";
const SERUM_SODIUM: &str = "2951-2";
const URINE_CREATININE: &str = "2161-8";
const SERUM_CREATININE: &str = "2160-0";

/// Fractional excretion of sodium: differentiates prerenal azotemia from
/// intrinsic renal injury in AKI.
pub fn config() -> CalculatorConfig {
    let lab = |id: &str, label: &str, kind: QuantityKind, units: (&str, &str), code: &str| {
        FieldSpec {
            id: id.to_string(),
            label: label.to_string(),
            standard_unit: Some(units.0.to_string()),
            accepted_units: vec![units.1.to_string()],
            quantity: Some(kind),
            source: Some(AutoSource::Observation {
                code: code.to_string(),
            }),
            required: true,
            min: Some(0.0),
            ..FieldSpec::default()
        }
    };

    let mut config = CalculatorConfig::new(
        "fena",
        "Fractional Excretion of Sodium (FENa)",
        "Determines if renal failure is due to prerenal or intrinsic pathology. \
         Unreliable in patients on diuretics; consider FEUrea instead.",
        ScoringRules::Formula { compute },
    );
    config.fields = vec![
        lab(
            "urine_sodium",
            "Urine Sodium",
            QuantityKind::Sodium,
            ("mmol/L", "mEq/L"),
            URINE_SODIUM,
        ),
        lab(
            "serum_sodium",
            "Serum Sodium",
            QuantityKind::Sodium,
            ("mmol/L", "mEq/L"),
            SERUM_SODIUM,
        ),
        lab(
            "urine_creatinine",
            "Urine Creatinine",
            QuantityKind::Creatinine,
            ("mg/dL", "µmol/L"),
            URINE_CREATININE,
        ),
        lab(
            "serum_creatinine",
            "Serum Creatinine",
            QuantityKind::Creatinine,
            ("mg/dL", "µmol/L"),
            SERUM_CREATININE,
        ),
    ];
    config.references = vec![
        "Espinel CH. The FENa test: use in the differential diagnosis of acute \
         renal failure. JAMA. 1976;236(6):579-581."
            .to_string(),
    ];
    config
}

fn compute(values: &ValueMap) -> Vec<FormulaRow> {
    // Both denominator terms go through `positive`; a zero serum sodium or
    // urine creatinine yields no result rather than an infinity.
    let (Some(urine_na), Some(serum_na), Some(urine_cr), Some(serum_cr)) = (
        values.number("urine_sodium"),
        values.positive("serum_sodium"),
        values.positive("urine_creatinine"),
        values.number("serum_creatinine"),
    ) else {
        return vec![];
    };

    let fena = (urine_na * serum_cr) / (serum_na * urine_cr) * 100.0;
    let (interpretation, severity) = if fena < 1.0 {
        ("Prerenal AKI (< 1%)", Severity::Success)
    } else if fena > 2.0 {
        ("Intrinsic/ATN (> 2%)", Severity::Danger)
    } else {
        ("Indeterminate (1-2%)", Severity::Warning)
    };

    vec![FormulaRow {
        label: "FENa".to_string(),
        value: fena,
        unit: Some("%".to_string()),
        decimals: 2,
        interpretation: Some(interpretation.to_string()),
        severity,
        payload: None,
    }]
}
