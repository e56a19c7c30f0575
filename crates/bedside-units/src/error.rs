use thiserror::Error;

use crate::kind::QuantityKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("no conversion from '{from}' to '{to}' for {kind}")]
    UnsupportedUnit {
        kind: QuantityKind,
        from: String,
        to: String,
    },
}
