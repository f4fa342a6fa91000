//! Game state and core simulation types
//!
//! Everything a Play session mutates lives in [`GameState`], owned by the
//! scene manager and handed to the per-frame update by reference.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::*;

/// Number of platforms alive at once (base + four ledges)
pub const PLATFORM_COUNT: usize = 5;

/// The bouncing player sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Player {
    pub fn new(speed_x: f32) -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            vel: Vec2::new(speed_x, 0.0),
        }
    }

    /// Standing on a platform (vertical velocity exactly zero)
    pub fn is_resting(&self) -> bool {
        self.vel.y == 0.0
    }

    /// Jump if resting. Returns whether the jump was honored.
    pub fn request_jump(&mut self, jump_velocity: f32) -> bool {
        if self.is_resting() {
            self.vel.y = jump_velocity;
            true
        } else {
            false
        }
    }
}

/// Platform kinds (they differ only in sprite and width)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformKind {
    /// Full-width floor the player starts on
    Base,
    /// Narrower ledge
    Ledge,
}

/// A scrolling platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub kind: PlatformKind,
    /// Top-left corner
    pub pos: Vec2,
    /// Horizontal extent used for overlap tests
    pub width: f32,
}

impl Platform {
    pub fn new(kind: PlatformKind, pos: Vec2, width: f32) -> Self {
        Self { kind, pos, width }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }
}

/// Complete state of one Play session
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    #[serde(skip)]
    pub config: GameConfig,
    #[serde(skip)]
    rng: Pcg32,
    pub player: Player,
    /// Base first, then ledges from bottom to top
    pub platforms: [Platform; PLATFORM_COUNT],
    /// Frames survived
    pub score: u64,
}

impl GameState {
    /// Create a new session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, GameConfig::default())
    }

    pub fn with_config(seed: u64, config: GameConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let base = Platform::new(
            PlatformKind::Base,
            Vec2::new(BASE_START.0, BASE_START.1),
            config.base_width,
        );
        let ledges = LEDGE_START_YS.map(|y| {
            let x = random_slot_x(&mut rng, &config);
            Platform::new(PlatformKind::Ledge, Vec2::new(x, y), config.ledge_width)
        });

        Self {
            seed,
            player: Player::new(config.player_speed_x),
            platforms: [base, ledges[0], ledges[1], ledges[2], ledges[3]],
            score: 0,
            rng,
            config,
        }
    }

    /// Jump request from a tap; honored only while resting
    pub fn request_jump(&mut self) -> bool {
        let jumped = self.player.request_jump(self.config.jump_velocity);
        if jumped {
            log::trace!("Jump at y={:.1}", self.player.pos.y);
        }
        jumped
    }

    /// Draw a fresh x from the discrete slot set
    pub fn next_slot_x(&mut self) -> f32 {
        random_slot_x(&mut self.rng, &self.config)
    }

    /// Rightmost x the player's left edge may reach
    pub fn right_bound(&self) -> f32 {
        FIELD_WIDTH - PLAYER_WIDTH
    }
}

fn random_slot_x(rng: &mut Pcg32, config: &GameConfig) -> f32 {
    rng.random_range(config.slot_min..=config.slot_max) as f32 * config.slot_spacing
}
