//! Error taxonomy for the session client.
//!
//! Transport failures and decode failures propagate to the caller with the
//! failing operation's name; missing unit arrays are absorbed as "no units"
//! and never reach this enum. Nothing is retried internally.

use thiserror::Error;

use crate::session::Phase;

/// Failures surfaced to the caller.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection failure or non-success status from the backend.
    #[error("failed to {op}: {status}")]
    Transport { op: &'static str, status: String },

    /// Response body did not match the expected shape.
    #[error("failed to {op}: {source}")]
    Decode {
        op: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A `reset`/`step` response carried no `state` object.
    #[error("no state data returned from the server")]
    MissingState,

    /// A scene without configuration was passed where `size` is required.
    /// This is a usage error, not a transport failure.
    #[error("scene configuration is missing")]
    MissingSceneConfig,

    /// Operation invalid for the session handle's current phase.
    #[error("session is {actual:?}, operation requires {expected:?}")]
    Phase { expected: Phase, actual: Phase },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_mentions_operation_and_status() {
        let err = ClientError::Transport {
            op: "initialize game",
            status: "503 Service Unavailable".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("initialize"));
        assert!(msg.contains("503"));
    }

    #[test]
    fn phase_error_names_both_phases() {
        let err = ClientError::Phase {
            expected: Phase::Active,
            actual: Phase::Closed,
        };
        let msg = err.to_string();
        assert!(msg.contains("Active"));
        assert!(msg.contains("Closed"));
    }
}
