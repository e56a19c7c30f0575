use bedside_core::CalculatorConfig;
use bedside_core::config::{AutoSource, FieldSpec, InputKind, ScoringRules};
use bedside_core::models::{FormulaRow, Severity};
use bedside_core::values::ValueMap;
use bedside_units::QuantityKind;

const BODY_WEIGHT: &str = "29463-7";
const SERUM_CREATININE: &str = "2160-0";

/// Cockcroft-Gault creatinine clearance. Age and sex come from the
/// patient record; weight and creatinine from observations.
pub fn config() -> CalculatorConfig {
    let mut config = CalculatorConfig::new(
        "crcl",
        "Creatinine Clearance (Cockcroft-Gault)",
        "Estimates creatinine clearance for renal medication dosing. \
         Estimates clearance, not GFR.",
        ScoringRules::Formula { compute },
    );
    config.fields = vec![
        FieldSpec {
            id: "sex".to_string(),
            label: "Sex".to_string(),
            input: InputKind::Radio,
            source: Some(AutoSource::PatientSex {
                male_value: "male".to_string(),
                female_value: "female".to_string(),
            }),
            required: true,
            ..FieldSpec::default()
        },
        FieldSpec {
            id: "age".to_string(),
            label: "Age".to_string(),
            source: Some(AutoSource::PatientAge),
            required: true,
            min: Some(18.0),
            max: Some(120.0),
            ..FieldSpec::default()
        },
        FieldSpec {
            id: "weight".to_string(),
            label: "Weight".to_string(),
            standard_unit: Some("kg".to_string()),
            accepted_units: vec!["lb".to_string()],
            quantity: Some(QuantityKind::Weight),
            source: Some(AutoSource::Observation {
                code: BODY_WEIGHT.to_string(),
            }),
            required: true,
            min: Some(0.5),
            max: Some(500.0),
            ..FieldSpec::default()
        },
        FieldSpec {
            id: "creatinine".to_string(),
            label: "Serum Creatinine".to_string(),
            standard_unit: Some("mg/dL".to_string()),
            accepted_units: vec!["µmol/L".to_string()],
            quantity: Some(QuantityKind::Creatinine),
            source: Some(AutoSource::Observation {
                code: SERUM_CREATININE.to_string(),
            }),
            required: true,
            min: Some(0.05),
            max: Some(40.0),
            warn_min: Some(0.3),
            warn_max: Some(10.0),
            ..FieldSpec::default()
        },
    ];
    config.references = vec![
        "Cockcroft DW, Gault MH. Prediction of creatinine clearance from serum \
         creatinine. Nephron. 1976;16(1):31-41."
            .to_string(),
    ];
    config
}

fn category(crcl: f64) -> (&'static str, Severity) {
    if crcl >= 90.0 {
        ("Normal kidney function", Severity::Success)
    } else if crcl >= 60.0 {
        ("Mild reduction", Severity::Success)
    } else if crcl >= 30.0 {
        ("Moderate reduction", Severity::Warning)
    } else if crcl >= 15.0 {
        ("Severe reduction", Severity::Danger)
    } else {
        ("Kidney failure", Severity::Danger)
    }
}

fn compute(values: &ValueMap) -> Vec<FormulaRow> {
    let (Some(age), Some(weight), Some(creatinine), Some(sex)) = (
        values.positive("age"),
        values.positive("weight"),
        values.positive("creatinine"),
        values.choice("sex"),
    ) else {
        return vec![];
    };

    let mut crcl = ((140.0 - age) * weight) / (72.0 * creatinine);
    if sex == "female" {
        crcl *= 0.85;
    }
    if !crcl.is_finite() || crcl < 0.0 {
        return vec![];
    }

    let (interpretation, severity) = category(crcl);
    vec![FormulaRow {
        label: "Creatinine Clearance".to_string(),
        value: crcl,
        unit: Some("mL/min".to_string()),
        decimals: 1,
        interpretation: Some(interpretation.to_string()),
        severity,
        payload: None,
    }]
}
