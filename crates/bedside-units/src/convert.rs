//! Conversion tables.
//!
//! Each kind has a table of `(unit, scale)` entries where the scale maps a
//! value in that unit onto the kind's canonical unit. The first entry is
//! the canonical unit itself. Converting A→B goes A→canonical→B, which
//! keeps every pair invertible: affine transforms (temperature) invert
//! exactly, linear factors invert through their reciprocal.
//!
//! Mass↔molar factors (creatinine, bilirubin, glucose, …) are the
//! substance-specific constants in clinical use; they are listed once, in
//! the molar unit's entry, so the reciprocal is never hand-maintained.

use crate::error::ConversionError;
use crate::kind::QuantityKind;

/// How a unit maps onto its kind's canonical unit.
#[derive(Debug, Clone, Copy)]
enum Scale {
    /// canonical = value * factor
    Linear(f64),
    /// canonical = value * factor + offset
    Affine { factor: f64, offset: f64 },
}

impl Scale {
    fn to_canonical(self, value: f64) -> f64 {
        match self {
            Scale::Linear(factor) => value * factor,
            Scale::Affine { factor, offset } => value * factor + offset,
        }
    }

    fn from_canonical(self, value: f64) -> f64 {
        match self {
            Scale::Linear(factor) => value / factor,
            Scale::Affine { factor, offset } => (value - offset) / factor,
        }
    }
}

type Table = &'static [(&'static str, Scale)];

const WEIGHT: Table = &[
    ("kg", Scale::Linear(1.0)),
    ("lb", Scale::Linear(0.45359237)),
    ("g", Scale::Linear(0.001)),
];

const HEIGHT: Table = &[
    ("cm", Scale::Linear(1.0)),
    ("m", Scale::Linear(100.0)),
    ("in", Scale::Linear(2.54)),
    ("ft", Scale::Linear(30.48)),
];

// °F → °C is (F − 32) × 5/9, i.e. factor 5/9 with offset −160/9. The offset
// is what makes temperature affine rather than linear; a plain factor would
// silently produce garbage.
const TEMPERATURE: Table = &[
    ("C", Scale::Linear(1.0)),
    (
        "F",
        Scale::Affine {
            factor: 5.0 / 9.0,
            offset: -160.0 / 9.0,
        },
    ),
];

const HEART_RATE: Table = &[("bpm", Scale::Linear(1.0)), ("/min", Scale::Linear(1.0))];

const RESPIRATORY_RATE: Table = &[
    ("breaths/min", Scale::Linear(1.0)),
    ("/min", Scale::Linear(1.0)),
];

const BLOOD_PRESSURE: Table = &[("mmHg", Scale::Linear(1.0))];

const OXYGEN_SATURATION: Table = &[("%", Scale::Linear(1.0))];

const CREATININE: Table = &[
    ("mg/dL", Scale::Linear(1.0)),
    ("µmol/L", Scale::Linear(1.0 / 88.4)),
];

const ELECTROLYTE: Table = &[
    ("mmol/L", Scale::Linear(1.0)),
    ("mEq/L", Scale::Linear(1.0)),
];

const GLUCOSE: Table = &[
    ("mg/dL", Scale::Linear(1.0)),
    ("mmol/L", Scale::Linear(18.018)),
];

const CHOLESTEROL: Table = &[
    ("mg/dL", Scale::Linear(1.0)),
    ("mmol/L", Scale::Linear(38.67)),
];

const TRIGLYCERIDES: Table = &[
    ("mg/dL", Scale::Linear(1.0)),
    ("mmol/L", Scale::Linear(88.57)),
];

const CALCIUM: Table = &[
    ("mg/dL", Scale::Linear(1.0)),
    ("mmol/L", Scale::Linear(4.008)),
];

const ALBUMIN: Table = &[("g/dL", Scale::Linear(1.0)), ("g/L", Scale::Linear(0.1))];

const BILIRUBIN: Table = &[
    ("mg/dL", Scale::Linear(1.0)),
    ("µmol/L", Scale::Linear(1.0 / 17.1)),
];

const HEMOGLOBIN: Table = &[
    ("g/dL", Scale::Linear(1.0)),
    ("g/L", Scale::Linear(0.1)),
    ("mmol/L", Scale::Linear(1.611)),
];

const BUN: Table = &[
    ("mg/dL", Scale::Linear(1.0)),
    ("mmol/L", Scale::Linear(2.801)),
];

const CELL_COUNT: Table = &[
    ("×10⁹/L", Scale::Linear(1.0)),
    ("×10³/µL", Scale::Linear(1.0)),
    ("K/µL", Scale::Linear(1.0)),
];

const D_DIMER: Table = &[
    ("mg/L", Scale::Linear(1.0)),
    ("µg/mL", Scale::Linear(1.0)),
    ("ng/mL", Scale::Linear(0.001)),
];

const FIBRINOGEN: Table = &[("g/L", Scale::Linear(1.0)), ("mg/dL", Scale::Linear(0.01))];

const INR: Table = &[("ratio", Scale::Linear(1.0))];

fn table(kind: QuantityKind) -> Table {
    match kind {
        QuantityKind::Weight => WEIGHT,
        QuantityKind::Height => HEIGHT,
        QuantityKind::Temperature => TEMPERATURE,
        QuantityKind::HeartRate => HEART_RATE,
        QuantityKind::RespiratoryRate => RESPIRATORY_RATE,
        QuantityKind::BloodPressure => BLOOD_PRESSURE,
        QuantityKind::OxygenSaturation => OXYGEN_SATURATION,
        QuantityKind::Creatinine => CREATININE,
        QuantityKind::Sodium | QuantityKind::Potassium => ELECTROLYTE,
        QuantityKind::Glucose => GLUCOSE,
        QuantityKind::Cholesterol => CHOLESTEROL,
        QuantityKind::Triglycerides => TRIGLYCERIDES,
        QuantityKind::Calcium => CALCIUM,
        QuantityKind::Albumin => ALBUMIN,
        QuantityKind::Bilirubin => BILIRUBIN,
        QuantityKind::Hemoglobin => HEMOGLOBIN,
        QuantityKind::Bun => BUN,
        QuantityKind::Platelets | QuantityKind::Wbc => CELL_COUNT,
        QuantityKind::DDimer => D_DIMER,
        QuantityKind::Fibrinogen => FIBRINOGEN,
        QuantityKind::Inr => INR,
    }
}

/// Collapse the unit spellings seen in the wild (EHR feeds are not
/// consistent about `µ` vs `u`, degree signs, or UCUM bracket forms) onto
/// the spellings the tables use.
pub fn normalize_unit(unit: &str) -> &str {
    match unit.trim() {
        "umol/L" => "µmol/L",
        "ug/mL" => "µg/mL",
        "lbs" | "[lb_av]" => "lb",
        "inches" | "[in_i]" => "in",
        "°C" | "Cel" => "C",
        "°F" | "[degF]" => "F",
        "mm[Hg]" => "mmHg",
        "10*9/L" | "x10^9/L" => "×10⁹/L",
        "10*3/uL" | "x10^3/uL" => "×10³/µL",
        "K/uL" => "K/µL",
        other => other,
    }
}

/// All units the conversion table recognizes for a kind. The first entry
/// is the canonical unit.
pub fn supported_units(kind: QuantityKind) -> Vec<&'static str> {
    table(kind).iter().map(|(unit, _)| *unit).collect()
}

/// Whether a unit (after alias normalization) is in the kind's table.
pub fn supports(kind: QuantityKind, unit: &str) -> bool {
    let unit = normalize_unit(unit);
    table(kind).iter().any(|(u, _)| *u == unit)
}

/// Convert `value` from one unit to another within a quantity kind.
///
/// Same-unit conversion is a no-op. An unknown pair is an error, never a
/// silent 1:1 fallback. The output is deliberately not rounded; display
/// rounding happens once, in the result assembler.
pub fn convert(
    value: f64,
    from: &str,
    to: &str,
    kind: QuantityKind,
) -> Result<f64, ConversionError> {
    let from = normalize_unit(from);
    let to = normalize_unit(to);
    if from == to {
        return Ok(value);
    }

    let entries = table(kind);
    let unsupported = || ConversionError::UnsupportedUnit {
        kind,
        from: from.to_string(),
        to: to.to_string(),
    };
    let from_scale = entries
        .iter()
        .find(|(u, _)| *u == from)
        .map(|(_, s)| *s)
        .ok_or_else(unsupported)?;
    let to_scale = entries
        .iter()
        .find(|(u, _)| *u == to)
        .map(|(_, s)| *s)
        .ok_or_else(unsupported)?;

    Ok(to_scale.from_canonical(from_scale.to_canonical(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_unit_is_a_noop() {
        let v = convert(1.37, "mg/dL", "mg/dL", QuantityKind::Creatinine).unwrap();
        assert_eq!(v, 1.37);
    }

    #[test]
    fn temperature_is_affine_not_linear() {
        let f = convert(37.0, "C", "F", QuantityKind::Temperature).unwrap();
        assert!((f - 98.6).abs() < 1e-9, "37°C should be 98.6°F, got {f}");

        let c = convert(98.6, "°F", "°C", QuantityKind::Temperature).unwrap();
        assert!((c - 37.0).abs() < 1e-9);
    }

    #[test]
    fn creatinine_mass_to_molar() {
        let umol = convert(1.0, "mg/dL", "µmol/L", QuantityKind::Creatinine).unwrap();
        assert!((umol - 88.4).abs() < 1e-9);
    }

    #[test]
    fn weight_pounds_to_kilograms() {
        let kg = convert(154.0, "lbs", "kg", QuantityKind::Weight).unwrap();
        assert!((kg - 69.853).abs() < 1e-2);
    }

    #[test]
    fn unknown_pair_is_an_error() {
        let err = convert(1.0, "mg/dL", "furlongs", QuantityKind::Creatinine).unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedUnit { .. }));
    }

    #[test]
    fn unit_from_wrong_kind_is_an_error() {
        assert!(convert(1.0, "kg", "cm", QuantityKind::Weight).is_err());
    }

    #[test]
    fn every_pair_round_trips() {
        use QuantityKind::*;
        let kinds = [
            Weight,
            Height,
            Temperature,
            HeartRate,
            RespiratoryRate,
            BloodPressure,
            OxygenSaturation,
            Creatinine,
            Sodium,
            Potassium,
            Glucose,
            Cholesterol,
            Triglycerides,
            Calcium,
            Albumin,
            Bilirubin,
            Hemoglobin,
            Bun,
            Platelets,
            Wbc,
            DDimer,
            Fibrinogen,
            Inr,
        ];
        for kind in kinds {
            let units = supported_units(kind);
            for a in &units {
                for b in &units {
                    for x in [0.7, 37.0, 140.0] {
                        let there = convert(x, a, b, kind).unwrap();
                        let back = convert(there, b, a, kind).unwrap();
                        let rel = (back - x).abs() / x;
                        assert!(rel < 1e-6, "{kind}: {x} {a}→{b}→{a} drifted to {back}");
                    }
                }
            }
        }
    }

    #[test]
    fn aliases_normalize() {
        assert_eq!(normalize_unit("umol/L"), "µmol/L");
        assert_eq!(normalize_unit("°C"), "C");
        assert!(supports(QuantityKind::Platelets, "10*9/L"));
    }
}
