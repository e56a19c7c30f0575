//! bedside-calculators
//!
//! Builtin calculator definitions. Pure data plus formula functions: no
//! I/O here; auto-population sources are declared on the fields and
//! resolved elsewhere.

pub mod calculators;
pub mod registry;

pub use calculators::{all_calculators, get_calculator};
pub use registry::Registry;
