//! The observation gateway contract.
//!
//! The engine treats the clinical-data source as an opaque capability
//! answering two idempotent, side-effect-free queries. Implementations
//! live with whatever client library talks to the EHR.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// The most recent recorded observation for a code, as the gateway
/// reports it. Units arrive in whatever spelling the source uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub value: f64,
    pub unit: Option<String>,
    pub observed_at: Option<Timestamp>,
}

#[async_trait]
pub trait ObservationGateway: Send + Sync {
    /// Most recent observation for a code, or `None` when the patient has
    /// none on record.
    async fn most_recent_observation(
        &self,
        code: &str,
    ) -> Result<Option<Observation>, GatewayError>;

    /// Whether the patient carries any of the given condition codes.
    async fn has_condition(&self, codes: &[String]) -> Result<bool, GatewayError>;
}

/// In-memory gateway. Backs tests, and manual-entry mode when there is
/// no EHR launch context (every calculator stays usable without one).
#[derive(Debug, Clone, Default)]
pub struct StaticGateway {
    observations: HashMap<String, Observation>,
    conditions: HashSet<String>,
}

impl StaticGateway {
    pub fn new() -> Self {
        StaticGateway::default()
    }

    pub fn with_observation(mut self, code: impl Into<String>, observation: Observation) -> Self {
        self.observations.insert(code.into(), observation);
        self
    }

    pub fn with_condition(mut self, code: impl Into<String>) -> Self {
        self.conditions.insert(code.into());
        self
    }
}

#[async_trait]
impl ObservationGateway for StaticGateway {
    async fn most_recent_observation(
        &self,
        code: &str,
    ) -> Result<Option<Observation>, GatewayError> {
        Ok(self.observations.get(code).cloned())
    }

    async fn has_condition(&self, codes: &[String]) -> Result<bool, GatewayError> {
        Ok(codes.iter().any(|code| self.conditions.contains(code)))
    }
}
