//! Game tuning and preferences
//!
//! Persisted separately from the highscore in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// When the obstacle speed ramps up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpeedRamp {
    /// Ramp only when the milestone score is reached (and is a multiple of
    /// the ramp interval). This is how the game has always played.
    #[default]
    MilestoneOnly,
    /// Ramp on every positive multiple of the ramp interval
    EveryInterval,
}

/// Game settings/tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Player ===
    /// Downward acceleration per player tick
    pub gravity: f32,
    /// Upward impulse applied on jump (negative = up)
    pub jump_force: f32,
    /// Height of the floor the player rests on
    pub ground_level: f32,
    /// Fixed horizontal offset of the player
    pub player_left: f32,
    /// Player kinematics period (ms)
    pub frame_interval_ms: f64,

    // === Obstacles ===
    /// Obstacle speed at the start of each run (units per advancement tick)
    pub base_obstacle_speed: f32,
    /// Obstacle advancement period (ms)
    pub advance_interval_ms: f64,
    /// Lower bound of the delay between spawns (ms, inclusive)
    pub spawn_delay_min_ms: f64,
    /// Upper bound of the delay between spawns (ms, exclusive)
    pub spawn_delay_max_ms: f64,
    /// Forgiveness margin applied to obstacle hitboxes
    pub collision_margin: f32,

    // === Scoring ===
    /// Score that reveals the secret message
    pub milestone_score: u32,
    /// Speed added on each ramp
    pub speed_increment: f32,
    /// Ramp every N points (see `speed_ramp`)
    pub ramp_interval: u32,
    pub speed_ramp: SpeedRamp,

    // === Audio ===
    /// Volume (0.0 - 1.0)
    pub volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            jump_force: -9.0,
            ground_level: 10.0,
            player_left: 50.0,
            frame_interval_ms: 1000.0 / 60.0,

            base_obstacle_speed: 3.0,
            advance_interval_ms: 20.0,
            spawn_delay_min_ms: 5000.0,
            spawn_delay_max_ms: 9000.0,
            collision_margin: 10.0,

            milestone_score: 10,
            speed_increment: 0.5,
            ramp_interval: 5,
            speed_ramp: SpeedRamp::MilestoneOnly,

            volume: 0.8,
            muted: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that would break the simulation
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |msg: &str| Err(GameError::InvalidSettings(msg.to_string()));

        if !(self.gravity > 0.0) {
            return invalid("gravity must be positive");
        }
        if !(self.jump_force < 0.0) {
            return invalid("jump_force must be negative (upward)");
        }
        if !(self.base_obstacle_speed > 0.0) {
            return invalid("base_obstacle_speed must be positive");
        }
        if self.speed_increment < 0.0 {
            return invalid("speed_increment must not be negative");
        }
        if !(self.frame_interval_ms > 0.0) || !(self.advance_interval_ms > 0.0) {
            return invalid("tick periods must be positive");
        }
        if !(self.spawn_delay_min_ms > 0.0) || !(self.spawn_delay_max_ms > self.spawn_delay_min_ms) {
            return invalid("spawn delay bounds must satisfy 0 < min < max");
        }
        if self.collision_margin < 0.0 {
            return invalid("collision_margin must not be negative");
        }
        if self.ramp_interval == 0 {
            return invalid("ramp_interval must be at least 1");
        }
        Ok(())
    }

    /// Effective playback volume (respects mute)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume.clamp(0.0, 1.0)
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "love_runner_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native builds always play with the defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{"collision_margin": 4.0, "speed_ramp": "EveryInterval"}"#)
            .expect("valid settings");
        assert_eq!(settings.collision_margin, 4.0);
        assert_eq!(settings.speed_ramp, SpeedRamp::EveryInterval);
        assert_eq!(settings.gravity, 0.5);
        assert_eq!(settings.spawn_delay_min_ms, 5000.0);
    }

    #[test]
    fn test_rejects_inverted_spawn_bounds() {
        let settings = Settings {
            spawn_delay_min_ms: 9000.0,
            spawn_delay_max_ms: 5000.0,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(GameError::InvalidSettings(_))));
    }

    #[test]
    fn test_rejects_downward_jump() {
        let json = r#"{"jump_force": 9.0}"#;
        assert!(Settings::from_json(json).is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
        assert_eq!(settings.effective_volume(), 0.0);
    }
}
