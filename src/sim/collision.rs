//! Landing detection between the player and a platform
//!
//! This is a one-directional band test rather than a general AABB resolver:
//! the player only lands while falling (or resting), and only when the
//! platform's top edge sits inside a thin band near the player's feet.

use glam::Vec2;

use super::state::Platform;
use crate::consts::{LANDING_BAND_BOTTOM, LANDING_BAND_TOP, PLAYER_WIDTH, REST_OFFSET};

/// Whether the platform's top edge is inside the player's landing band
#[inline]
pub fn in_landing_band(player_pos: Vec2, platform: &Platform) -> bool {
    let top = platform.pos.y;
    top < player_pos.y + LANDING_BAND_BOTTOM && player_pos.y + LANDING_BAND_TOP < top
}

/// Whether the player and platform overlap horizontally (edges inclusive)
#[inline]
pub fn overlaps_horizontally(player_pos: Vec2, platform: &Platform) -> bool {
    platform.pos.x <= player_pos.x + PLAYER_WIDTH && player_pos.x <= platform.right()
}

/// Player y that rests exactly on top of the platform
#[inline]
pub fn rest_y(platform: &Platform) -> f32 {
    platform.pos.y - REST_OFFSET
}

/// Check for a landing. Returns the snapped player y if the player lands.
pub fn landing(player_pos: Vec2, player_vy: f32, platform: &Platform) -> Option<f32> {
    if player_vy < 0.0 {
        return None;
    }
    if in_landing_band(player_pos, platform) && overlaps_horizontally(player_pos, platform) {
        Some(rest_y(platform))
    } else {
        None
    }
}
