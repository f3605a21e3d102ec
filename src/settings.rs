//! Game settings
//!
//! Loaded from JSON; any missing field falls back to its default.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::highlight::DEFAULT_GLOW_FRAMES;
use crate::sim::{BoardError, Engine, PegHit, PhysicsTuning, TuningError};

/// Settings that cannot build an engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsError {
    Board(BoardError),
    Tuning(TuningError),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Board(e) => write!(f, "{e}"),
            SettingsError::Tuning(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Board(e) => Some(e),
            SettingsError::Tuning(e) => Some(e),
        }
    }
}

impl From<BoardError> for SettingsError {
    fn from(e: BoardError) -> Self {
        SettingsError::Board(e)
    }
}

impl From<TuningError> for SettingsError {
    fn from(e: TuningError) -> Self {
        SettingsError::Tuning(e)
    }
}

/// Drop game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub board_width: f32,
    pub board_height: f32,
    /// Fixed seed for reproducible drops (None = entropy)
    pub seed: Option<u64>,
    /// Frames a caller is willing to run before giving up on a drop
    pub max_frames: u32,
    /// How long a hit peg glows, in frames
    pub glow_frames: u64,
    pub tuning: PhysicsTuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            seed: None,
            max_frames: MAX_DROP_FRAMES,
            glow_frames: DEFAULT_GLOW_FRAMES,
            tuning: PhysicsTuning::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Build an engine from these settings
    ///
    /// Tuning is checked before the board so bad physics never reaches a
    /// drop.
    pub fn build_engine(
        &self,
        on_peg_hit: impl FnMut(&PegHit) + 'static,
    ) -> Result<Engine, SettingsError> {
        self.tuning.validate()?;
        let engine = match self.seed {
            Some(seed) => Engine::seeded(self.board_width, self.board_height, seed, on_peg_hit)?,
            None => Engine::new(self.board_width, self.board_height, on_peg_hit)?,
        };
        Ok(engine.with_tuning(self.tuning)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.board_width, 600.0);
        assert_eq!(settings.board_height, 800.0);
        assert!(settings.seed.is_none());
        assert_eq!(settings.max_frames, MAX_DROP_FRAMES);
    }

    #[test]
    fn test_partial_json() {
        let settings =
            Settings::from_json(r#"{ "seed": 7, "tuning": { "bounce": 0.4 } }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.tuning.bounce, 0.4);
        assert_eq!(settings.tuning.gravity, GRAVITY);
        assert_eq!(settings.board_width, DEFAULT_BOARD_WIDTH);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(99),
            max_frames: 500,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_build_engine_applies_tuning() {
        let settings = Settings {
            seed: Some(1),
            tuning: PhysicsTuning {
                gravity: 0.3,
                ..Default::default()
            },
            ..Default::default()
        };
        let engine = settings.build_engine(|_: &PegHit| {}).unwrap();
        assert_eq!(engine.tuning().gravity, 0.3);
        assert_eq!(engine.board().width(), settings.board_width);
    }

    #[test]
    fn test_build_engine_rejects_bad_board() {
        let settings = Settings {
            board_width: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.build_engine(|_: &PegHit| {}),
            Err(SettingsError::Board(_))
        ));
    }

    #[test]
    fn test_build_engine_rejects_bad_tuning() {
        let settings =
            Settings::from_json(r#"{ "tuning": { "gravity": -0.25, "friction": 1.5 } }"#)
                .unwrap();
        let err = settings.build_engine(|_: &PegHit| {}).err().unwrap();
        assert!(matches!(
            err,
            SettingsError::Tuning(TuningError::OutOfRange { field: "gravity", .. })
        ));
        assert!(err.to_string().contains("gravity"));
    }

    #[test]
    fn test_build_engine_rejects_non_finite_tuning() {
        let settings = Settings {
            tuning: PhysicsTuning {
                bounce: f32::NAN,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            settings.build_engine(|_: &PegHit| {}),
            Err(SettingsError::Tuning(TuningError::NonFinite { field: "bounce" }))
        ));
    }
}
