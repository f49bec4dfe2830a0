//! Client configuration.
//!
//! `ClientConfig` holds the few tunables of the setup screen and selection
//! cycle. Defaults match the standard game: ten kingdom cards, two to four
//! players, two players pre-selected.

use serde::{Deserialize, Serialize};

use super::error::ClientError;

/// Number of kingdom cards a game is played with.
pub const DEFAULT_MAX_INCLUDED_CARDS: usize = 10;

/// Client configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Cap on cards the player can include in a custom setup, between 1 and
    /// `DEFAULT_MAX_INCLUDED_CARDS`. Toggling a neutral card past the cap
    /// excludes it instead.
    pub max_included_cards: usize,

    /// Player counts offered on the setup screen.
    pub player_count_options: Vec<u8>,

    /// Player count selected when a session starts.
    pub default_player_count: u8,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            max_included_cards: DEFAULT_MAX_INCLUDED_CARDS,
            player_count_options: vec![2, 3, 4],
            default_player_count: 2,
        }
    }
}

impl ClientConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ClientError> {
        let config: ClientConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the inclusion cap.
    #[must_use]
    pub fn with_max_included_cards(mut self, max: usize) -> Self {
        self.max_included_cards = max;
        self
    }

    /// Set the offered player counts.
    #[must_use]
    pub fn with_player_count_options(mut self, options: Vec<u8>) -> Self {
        self.player_count_options = options;
        self
    }

    /// Set the pre-selected player count.
    #[must_use]
    pub fn with_default_player_count(mut self, count: u8) -> Self {
        self.default_player_count = count;
        self
    }

    /// Check if `count` is one of the offered player counts.
    #[must_use]
    pub fn allows_player_count(&self, count: u8) -> bool {
        self.player_count_options.contains(&count)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.max_included_cards == 0 {
            return Err(ClientError::config("max_included_cards must be at least 1"));
        }
        if self.max_included_cards > DEFAULT_MAX_INCLUDED_CARDS {
            return Err(ClientError::config(format!(
                "max_included_cards {} exceeds the kingdom size {}",
                self.max_included_cards, DEFAULT_MAX_INCLUDED_CARDS
            )));
        }
        if self.player_count_options.is_empty() {
            return Err(ClientError::config("player_count_options must not be empty"));
        }
        if let Some(&bad) = self.player_count_options.iter().find(|&&n| n == 0) {
            return Err(ClientError::config(format!(
                "player count option {} is out of range",
                bad
            )));
        }
        if !self.allows_player_count(self.default_player_count) {
            return Err(ClientError::config(format!(
                "default_player_count {} is not among player_count_options",
                self.default_player_count
            )));
        }
        Ok(())
    }
}
