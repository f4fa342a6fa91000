//! Platform abstraction layer
//!
//! Handles browser plumbing around the simulation:
//! - Image asset manifest and preloading
//! - Canvas display sizing
//! - Pointer position to play-field coordinates

pub mod assets;
pub mod viewport;

pub use assets::{AssetError, AssetId, AssetManifest};
pub use viewport::{DisplaySize, display_size, to_logical};
