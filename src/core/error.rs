//! Error type for the fallible edges of the client.
//!
//! Gestures and queries never fail; these errors only come from decoding
//! server payloads, loading configuration, and choosing a player count.

use thiserror::Error;

/// Errors reported by the client core.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("player count {requested} is not one of {allowed:?}")]
    InvalidPlayerCount { requested: u8, allowed: Vec<u8> },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("failed to decode payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        ClientError::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ClientError::InvalidPlayerCount {
            requested: 7,
            allowed: vec![2, 3, 4],
        };
        assert_eq!(err.to_string(), "player count 7 is not one of [2, 3, 4]");

        let err = ClientError::config("max_included_cards must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid configuration: max_included_cards must be at least 1"
        );
    }

    #[test]
    fn test_decode_from_serde() {
        let parse: Result<u8, ClientError> =
            serde_json::from_str::<u8>("not json").map_err(ClientError::from);
        assert!(matches!(parse, Err(ClientError::Decode(_))));
    }
}
