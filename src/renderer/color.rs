//! Color helpers

/// Canvas clear color
pub const BACKGROUND: u32 = 0xffffff;
/// Text drop shadow
pub const SHADOW: u32 = 0x000000;

/// CSS `rgba()` string for a 0xRRGGBB color
pub fn css_rgba(rgb: u32, alpha: f32) -> String {
    let r = (rgb >> 16) & 0xff;
    let g = (rgb >> 8) & 0xff;
    let b = rgb & 0xff;
    format!("rgba({}, {}, {}, {})", r, g, b, alpha.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_rgba() {
        assert_eq!(css_rgba(0xfcbb08, 1.0), "rgba(252, 187, 8, 1)");
        assert_eq!(css_rgba(0xff0000, 0.6), "rgba(255, 0, 0, 0.6)");
        assert_eq!(css_rgba(0x0000ff, 2.0), "rgba(0, 0, 255, 1)");
    }
}
