//! Game tuning
//!
//! Every gameplay constant can be overridden from JSON. Missing fields fall
//! back to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading a tuning override
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub gravity: f32,
    pub terminal_velocity: f32,
    pub jump_velocity: f32,
    pub player_speed_x: f32,
    pub scroll_speed: f32,
    pub death_y: f32,
    pub respawn_threshold: f32,
    pub respawn_y: f32,
    pub slot_min: i32,
    pub slot_max: i32,
    pub slot_spacing: f32,
    pub base_width: f32,
    pub ledge_width: f32,
    pub share_base_url: String,
    pub game_url: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            terminal_velocity: TERMINAL_VELOCITY,
            jump_velocity: JUMP_VELOCITY,
            player_speed_x: PLAYER_SPEED_X,
            scroll_speed: SCROLL_SPEED,
            death_y: DEATH_Y,
            respawn_threshold: RESPAWN_THRESHOLD,
            respawn_y: RESPAWN_Y,
            slot_min: SLOT_MIN,
            slot_max: SLOT_MAX,
            slot_spacing: SLOT_SPACING,
            base_width: BASE_WIDTH,
            ledge_width: LEDGE_WIDTH,
            share_base_url: SHARE_BASE_URL.to_string(),
            game_url: GAME_URL.to_string(),
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gravity <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "gravity",
                reason: "must be positive",
            });
        }
        if self.terminal_velocity <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "terminal_velocity",
                reason: "must be positive",
            });
        }
        if self.jump_velocity >= 0.0 {
            return Err(ConfigError::Invalid {
                field: "jump_velocity",
                reason: "must be negative (upward)",
            });
        }
        if self.slot_min > self.slot_max {
            return Err(ConfigError::Invalid {
                field: "slot_min",
                reason: "must not exceed slot_max",
            });
        }
        if self.scroll_speed < 0.0 {
            return Err(ConfigError::Invalid {
                field: "scroll_speed",
                reason: "must not be negative",
            });
        }
        if self.slot_spacing <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "slot_spacing",
                reason: "must be positive",
            });
        }
        // Otherwise a respawned platform is already past the threshold
        if self.respawn_threshold <= self.respawn_y {
            return Err(ConfigError::Invalid {
                field: "respawn_threshold",
                reason: "must be below respawn_y on screen (greater y)",
            });
        }
        if self.death_y <= self.respawn_y {
            return Err(ConfigError::Invalid {
                field: "death_y",
                reason: "must be below respawn_y on screen (greater y)",
            });
        }
        Ok(())
    }

    /// All x positions a respawned ledge may take
    pub fn slot_positions(&self) -> impl Iterator<Item = f32> + '_ {
        (self.slot_min..=self.slot_max).map(|slot| slot as f32 * self.slot_spacing)
    }

    /// Load overrides embedded in the page (WASM only)
    ///
    /// Looks for `<script id="game-config" type="application/json">`. A
    /// missing element means defaults; a malformed one is logged and ignored.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("game-config"))
            .and_then(|el| el.text_content());

        match text {
            Some(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded game config overrides");
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring game config: {}", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
