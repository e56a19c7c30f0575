use thiserror::Error;

/// A gateway failure degrades the calculator to manual-entry mode; it is
/// logged by the resolver and never surfaced as a blocking error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    #[error("no patient launch context")]
    NoContext,

    #[error("gateway request failed: {0}")]
    Request(String),
}
