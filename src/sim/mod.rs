//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - One tick per rendered frame, no wall-clock time
//! - Seeded RNG only
//! - Fixed platform order (base first)

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{in_landing_band, landing, overlaps_horizontally, rest_y};
pub use state::{GameState, PLATFORM_COUNT, Platform, PlatformKind, Player};
pub use tick::{TickOutcome, tick};
