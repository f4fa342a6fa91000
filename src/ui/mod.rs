//! UI widgets: display list, buttons, share link
//!
//! Widget positions are in logical play-field units.

pub mod button;
pub mod share;
pub mod stage;

pub use button::{BUTTON_ALPHA, Button, TapRegion, Tappable};
pub use share::{encode_uri_component, share_message, share_url};
pub use stage::{Anchor, DisplayObject, NodeId, Stage, TextStyle};

use glam::Vec2;

pub const BUTTON_SIZE: Vec2 = Vec2::new(100.0, 60.0);
pub const START_BUTTON_POS: Vec2 = Vec2::new(190.0, 550.0);
pub const RETRY_BUTTON_POS: Vec2 = Vec2::new(100.0, 600.0);
pub const SHARE_BUTTON_POS: Vec2 = Vec2::new(300.0, 600.0);
/// Top-center of the title / result headline
pub const HEADLINE_POS: Vec2 = Vec2::new(250.0, 300.0);

pub const RED: u32 = 0xff0000;
pub const BLUE: u32 = 0x0000ff;

pub const TITLE: &str = "Just Jump";

/// In-game score readout
pub fn score_label(score: u64) -> String {
    format!("SCORE:{score}m")
}

/// Headline on the end screen
pub fn result_label(score: u64) -> String {
    format!("SCORE:{score}m reached!")
}
