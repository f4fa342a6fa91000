//! Scene state machine
//!
//! Exactly one scene is live at a time. A scene owns its display list, its
//! tap targets, and at most one per-frame callback; replacing the scene
//! drops all three.

mod build;
pub mod manager;

pub use manager::{SceneManager, TapOutcome};

use std::fmt;

use crate::sim::{GameState, TickOutcome};
use crate::ui::{Stage, TapRegion};

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Start,
    Play,
    End,
}

/// What a tap target asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    StartGame,
    Retry,
    Share { score: u64 },
    Jump,
}

/// Per-frame work of a scene. Receives the session and the scene's own stage.
pub type FrameCallback = Box<dyn FnMut(&mut GameState, &mut Stage) -> TickOutcome>;

/// A live scene
pub struct Scene {
    pub(crate) kind: SceneKind,
    pub(crate) stage: Stage,
    /// Checked top-most (last) first
    pub(crate) taps: Vec<TapRegion<UiAction>>,
    pub(crate) on_frame: Option<FrameCallback>,
}

impl Scene {
    pub fn kind(&self) -> SceneKind {
        self.kind
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn taps(&self) -> &[TapRegion<UiAction>] {
        &self.taps
    }

    pub fn has_frame_callback(&self) -> bool {
        self.on_frame.is_some()
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("kind", &self.kind)
            .field("nodes", &self.stage.len())
            .field("taps", &self.taps.len())
            .field("on_frame", &self.on_frame.is_some())
            .finish()
    }
}
