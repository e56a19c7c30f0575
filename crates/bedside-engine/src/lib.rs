//! bedside-engine
//!
//! The evaluator: turns a calculator's declared rules plus a resolved
//! value map into a score or formula rows, resolves the score against the
//! risk table, and assembles presentation-ready result items. Evaluation
//! is pure and synchronous; all I/O happened upstream in resolution.

pub mod assemble;
pub mod evaluate;
pub mod risk;

pub use assemble::assemble;
pub use evaluate::{Evaluation, SectionScore, evaluate};
pub use risk::resolve_level;
