//! bedside-fhir
//!
//! Clinical-data side of the engine: the observation gateway contract,
//! the per-session observation cache, staleness classification, and the
//! auto-population resolver that fills calculator fields before the user
//! types. The wire protocol behind the gateway is someone else's problem;
//! this crate only consumes `{value, unit, timestamp}` answers.

pub mod cache;
pub mod error;
pub mod gateway;
pub mod patient;
pub mod resolver;
pub mod staleness;

pub use error::GatewayError;
pub use gateway::{Observation, ObservationGateway, StaticGateway};
pub use patient::{PatientContext, Sex};
pub use resolver::ResolverSession;
