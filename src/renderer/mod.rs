//! Canvas 2D rendering module
//!
//! Draws the active scene's display list onto the canvas each frame.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod color;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use color::{BACKGROUND, SHADOW, css_rgba};
