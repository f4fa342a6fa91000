//! Just Jump - a tap-to-jump platform arcade game
//!
//! Core modules:
//! - `sim`: Per-frame physics, collisions and game state
//! - `scene`: Start / Play / End scene state machine
//! - `ui`: Buttons, labels and the share link
//! - `renderer`: Canvas 2D drawing of the active scene
//! - `platform`: Browser plumbing (assets, viewport sizing)
//! - `config`: Data-driven game tuning

pub mod config;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod sim;
pub mod ui;

pub use config::{ConfigError, GameConfig};
pub use scene::{SceneKind, SceneManager, TapOutcome};

/// Game configuration constants
///
/// All distances are in logical units of the fixed 500x750 play field.
pub mod consts {
    /// Logical play field size
    pub const FIELD_WIDTH: f32 = 500.0;
    pub const FIELD_HEIGHT: f32 = 750.0;

    /// Player sprite width (anchor is top-left)
    pub const PLAYER_WIDTH: f32 = 60.0;
    /// Spawn position of the player
    pub const PLAYER_START_X: f32 = 250.0;
    pub const PLAYER_START_Y: f32 = 530.0;
    /// Horizontal drift speed (units per frame)
    pub const PLAYER_SPEED_X: f32 = 5.0;

    /// Gravity added to vy each frame while below the terminal cap
    pub const GRAVITY: f32 = 0.3;
    pub const TERMINAL_VELOCITY: f32 = 9.0;
    /// vy applied on an honored jump
    pub const JUMP_VELOCITY: f32 = -15.0;

    /// Player falls out of the session once y reaches this
    pub const DEATH_Y: f32 = 800.0;

    /// Landing band, measured from the player's top edge
    pub const LANDING_BAND_TOP: f32 = 54.0;
    pub const LANDING_BAND_BOTTOM: f32 = 68.0;
    /// Player y relative to a platform's top while resting on it
    pub const REST_OFFSET: f32 = 59.0;

    /// Platform scroll speed (units per frame, downward)
    pub const SCROLL_SPEED: f32 = 1.5;
    pub const BASE_WIDTH: f32 = 500.0;
    pub const LEDGE_WIDTH: f32 = 350.0;
    pub const BASE_START: (f32, f32) = (0.0, 590.0);
    pub const LEDGE_START_YS: [f32; 4] = [380.0, 170.0, -40.0, -250.0];
    /// Platforms past this y wrap back to the top
    pub const RESPAWN_THRESHOLD: f32 = 800.0;
    pub const RESPAWN_Y: f32 = -40.0;
    /// Respawn x is `slot * SLOT_SPACING` for slot in `SLOT_MIN..=SLOT_MAX`
    pub const SLOT_MIN: i32 = -5;
    pub const SLOT_MAX: i32 = 5;
    pub const SLOT_SPACING: f32 = 50.0;

    /// Vertical margin subtracted from the page height when sizing the canvas
    pub const VIEWPORT_MARGIN: f64 = 30.0;

    pub const SHARE_BASE_URL: &str = "http://twitter.com/intent/tweet";
    pub const GAME_URL: &str = "https://aomeyu.github.io/Jumpgame/";
}
