use serde::{Deserialize, Serialize};

use crate::training_engine::{
    adaptive::DEFAULT_MAX_ATTEMPTS, error::TrainerError, models::TrainingMode, range::Range,
};

/// Starter custom range for players who have never edited one.
pub const DEFAULT_CUSTOM_RANGE: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77",
    "AKs", "AQs", "AJs", "ATs", "KQs", "KJs", "QJs", "JTs", "T9s", "98s", "87s",
    "AKo", "AQo",
];

/// Session settings. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub mode: TrainingMode,
    pub adaptive: bool,
    /// Retry bound for adaptive rejection sampling.
    pub max_draw_attempts: u32,
    pub custom_range: Range,
}

impl Default for SessionConfig {
    fn default() -> SessionConfig {
        SessionConfig {
            mode: TrainingMode::Rfi,
            adaptive: false,
            max_draw_attempts: DEFAULT_MAX_ATTEMPTS,
            custom_range: Range::new(DEFAULT_CUSTOM_RANGE.iter().copied()),
        }
    }
}

impl SessionConfig {
    pub fn from_json(json: &str) -> Result<SessionConfig, TrainerError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = SessionConfig::from_json("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.custom_range.tokens().len(), 21);
    }

    #[test]
    fn fields_override_defaults() {
        let config = SessionConfig::from_json(
            r#"{"mode":"vs_3bet","adaptive":true,"custom_range":["22+"]}"#,
        )
        .unwrap();
        assert_eq!(config.mode, TrainingMode::Vs3Bet);
        assert!(config.adaptive);
        assert_eq!(config.max_draw_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.custom_range.tokens(), ["22+"]);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(SessionConfig::from_json(r#"{"mode":"omaha"}"#).is_err());
    }
}
