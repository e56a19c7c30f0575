//! bedside-core
//!
//! Shared vocabulary of the calculator engine: calculator configuration,
//! resolved values, field validation, and the result types handed to the
//! presentation layer. No I/O; this crate is pure data and checks.

pub mod config;
pub mod error;
pub mod models;
pub mod validate;
pub mod values;

pub use config::{CalculatorConfig, ScoringRules};
pub use error::ConfigError;
pub use values::{Value, ValueMap};
