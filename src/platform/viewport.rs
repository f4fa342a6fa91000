//! Canvas display sizing
//!
//! The game always simulates on a fixed 500x750 field. Only the CSS size of
//! the canvas follows the page: height from the available vertical space,
//! width at 2:3.

use glam::Vec2;

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH, VIEWPORT_MARGIN};

/// CSS pixel size of the canvas element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySize {
    pub width: f64,
    pub height: f64,
}

/// Display size for a page whose body is `client_height` pixels tall
pub fn display_size(client_height: f64) -> DisplaySize {
    let height = (client_height - VIEWPORT_MARGIN).max(0.0);
    DisplaySize {
        width: height * 2.0 / 3.0,
        height,
    }
}

/// Map a pointer offset inside the canvas (CSS pixels) to field units
pub fn to_logical(offset_x: f64, offset_y: f64, display: DisplaySize) -> Vec2 {
    if display.width <= 0.0 || display.height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (offset_x * FIELD_WIDTH as f64 / display.width) as f32,
        (offset_y * FIELD_HEIGHT as f64 / display.height) as f32,
    )
}

/// Resize the canvas element to fit the page body
#[cfg(target_arch = "wasm32")]
pub fn fit_canvas(canvas: &web_sys::HtmlCanvasElement) -> DisplaySize {
    let client_height = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .map(|b| b.client_height() as f64)
        .unwrap_or(FIELD_HEIGHT as f64 + VIEWPORT_MARGIN);
    let size = display_size(client_height);

    let style = canvas.style();
    let _ = style.set_property("height", &format!("{}px", size.height));
    let _ = style.set_property("width", &format!("{}px", size.width));
    size
}
