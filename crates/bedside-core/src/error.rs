use thiserror::Error;

/// Configuration defects are programmer errors: a calculator that trips
/// one of these is refused at registration time instead of misbehaving
/// at calculation time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("calculator '{calculator}': duplicate field id '{id}'")]
    DuplicateFieldId { calculator: String, id: String },

    #[error("calculator '{calculator}': duplicate section id '{id}'")]
    DuplicateSectionId { calculator: String, id: String },

    #[error("calculator '{calculator}': duplicate option id '{id}'")]
    DuplicateOptionId { calculator: String, id: String },

    #[error("calculator '{calculator}': duplicate question id '{id}'")]
    DuplicateQuestionId { calculator: String, id: String },

    #[error(
        "calculator '{calculator}': field '{field}' declares unit '{unit}' without a quantity kind"
    )]
    MissingQuantityKind {
        calculator: String,
        field: String,
        unit: String,
    },

    #[error(
        "calculator '{calculator}': field '{field}' declares unit '{unit}' its quantity kind does not support"
    )]
    UnsupportedUnit {
        calculator: String,
        field: String,
        unit: String,
    },

    #[error("calculator '{calculator}': field '{field}' has min >= max")]
    InvalidBounds { calculator: String, field: String },

    #[error(
        "calculator '{calculator}': adjustment rule references undeclared option '{option_id}'"
    )]
    UnknownAdjustmentTarget {
        calculator: String,
        option_id: String,
    },

    #[error("calculator '{calculator}': scored mode requires a non-empty risk table")]
    EmptyRiskTable { calculator: String },

    #[error("calculator '{calculator}': risk level {position} has min_score > max_score")]
    InvertedRiskLevel { calculator: String, position: usize },

    #[error("calculator '{calculator}': risk levels not sorted ascending at position {position}")]
    UnsortedRiskTable { calculator: String, position: usize },

    #[error(
        "calculator '{calculator}': risk table leaves a reachable gap between {upper} and {lower}"
    )]
    RiskTableGap {
        calculator: String,
        upper: f64,
        lower: f64,
    },

    #[error("calculator '{id}' is already registered")]
    DuplicateCalculator { id: String },
}
