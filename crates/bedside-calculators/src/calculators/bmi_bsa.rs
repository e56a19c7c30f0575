use bedside_core::CalculatorConfig;
use bedside_core::config::{AutoSource, FieldSpec, ScoringRules};
use bedside_core::models::{FormulaRow, Severity};
use bedside_core::values::ValueMap;
use bedside_units::QuantityKind;

const BODY_WEIGHT: &str = "29463-7";
const BODY_HEIGHT: &str = "8302-2";

/// BMI and body surface area (Du Bois), for clinical assessment and
/// medication dosing.
pub fn config() -> CalculatorConfig {
    let mut config = CalculatorConfig::new(
        "bmi-bsa",
        "BMI & Body Surface Area (BSA)",
        "Calculates Body Mass Index (BMI) and Body Surface Area (BSA) for \
         clinical assessment and medication dosing.",
        ScoringRules::Formula { compute },
    );
    config.fields = vec![
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
            id: "height".to_string(),
            label: "Height".to_string(),
            standard_unit: Some("cm".to_string()),
            accepted_units: vec!["in".to_string()],
            quantity: Some(QuantityKind::Height),
            source: Some(AutoSource::Observation {
                code: BODY_HEIGHT.to_string(),
            }),
            required: true,
            min: Some(20.0),
            max: Some(280.0),
            ..FieldSpec::default()
        },
    ];
    config.references = vec![
        "Du Bois D, Du Bois EF. A formula to estimate the approximate surface \
         area if height and weight be known. Arch Intern Med. 1916;17:863-871."
            .to_string(),
    ];
    config
}

fn bmi_category(bmi: f64) -> (&'static str, Severity) {
    if bmi < 18.5 {
        ("Underweight", Severity::Warning)
    } else if bmi < 25.0 {
        ("Normal weight", Severity::Success)
    } else if bmi < 30.0 {
        ("Overweight", Severity::Warning)
    } else if bmi < 35.0 {
        ("Obese (Class I)", Severity::Danger)
    } else if bmi < 40.0 {
        ("Obese (Class II)", Severity::Danger)
    } else {
        ("Obese (Class III)", Severity::Danger)
    }
}

fn compute(values: &ValueMap) -> Vec<FormulaRow> {
    let (Some(weight_kg), Some(height_cm)) =
        (values.positive("weight"), values.positive("height"))
    else {
        return vec![];
    };

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    // Du Bois formula.
    let bsa = 0.007184 * weight_kg.powf(0.425) * height_cm.powf(0.725);
    let (category, severity) = bmi_category(bmi);

    vec![
        FormulaRow {
            label: "Body Mass Index (BMI)".to_string(),
            value: bmi,
            unit: Some("kg/m²".to_string()),
            decimals: 1,
            interpretation: Some(category.to_string()),
            severity,
            payload: None,
        },
        FormulaRow {
            label: "Body Surface Area (BSA)".to_string(),
            value: bsa,
            unit: Some("m²".to_string()),
            decimals: 2,
            interpretation: None,
            severity: Severity::Info,
            payload: None,
        },
    ]
}
