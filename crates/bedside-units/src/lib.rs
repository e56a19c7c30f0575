//! bedside-units
//!
//! Unit handling for clinical quantities. Pure conversion tables: no I/O,
//! no rounding. Every supported unit maps onto a per-kind canonical unit,
//! so any supported pair converts through the canonical form and
//! round-trips within floating tolerance.

pub mod convert;
pub mod error;
pub mod kind;

pub use convert::{convert, normalize_unit, supported_units, supports};
pub use error::ConversionError;
pub use kind::QuantityKind;
