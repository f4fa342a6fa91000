//! Canvas 2D renderer

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::color::{BACKGROUND, SHADOW, css_rgba};
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::platform::assets::{AssetError, Assets};
use crate::ui::{Anchor, DisplayObject, Stage};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    assets: Assets,
}

impl CanvasRenderer {
    /// Bind to the canvas; its backing store is fixed to the logical field
    pub fn new(canvas: &HtmlCanvasElement, assets: Assets) -> Result<Self, AssetError> {
        canvas.set_width(FIELD_WIDTH as u32);
        canvas.set_height(FIELD_HEIGHT as u32);

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(AssetError::Environment("no 2d canvas context"))?;

        Ok(Self { ctx, assets })
    }

    pub fn render(&self, stage: &Stage) {
        let ctx = &self.ctx;
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(&css_rgba(BACKGROUND, 1.0));
        ctx.fill_rect(0.0, 0.0, FIELD_WIDTH as f64, FIELD_HEIGHT as f64);

        for object in stage.iter() {
            match object {
                DisplayObject::Sprite { asset, pos } => {
                    let image = self.assets.get(*asset);
                    if let Err(e) =
                        ctx.draw_image_with_html_image_element(image, pos.x as f64, pos.y as f64)
                    {
                        log::warn!("drawImage failed for {:?}: {:?}", asset, e);
                    }
                }
                DisplayObject::Rect {
                    pos,
                    size,
                    color,
                    alpha,
                } => {
                    ctx.set_fill_style_str(&css_rgba(*color, *alpha));
                    ctx.fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
                }
                DisplayObject::Text {
                    text,
                    pos,
                    style,
                    anchor,
                } => {
                    ctx.set_font(&format!("{}px Arial", style.font_size));
                    let (align, baseline) = match anchor {
                        Anchor::TopLeft => ("left", "top"),
                        Anchor::TopCenter => ("center", "top"),
                        Anchor::Center => ("center", "middle"),
                    };
                    ctx.set_text_align(align);
                    ctx.set_text_baseline(baseline);

                    let (x, y) = (pos.x as f64, pos.y as f64);
                    if style.drop_shadow > 0.0 {
                        let offset = style.drop_shadow as f64;
                        ctx.set_fill_style_str(&css_rgba(SHADOW, 1.0));
                        let _ = ctx.fill_text(text, x + offset, y + offset);
                    }
                    ctx.set_fill_style_str(&css_rgba(style.fill, 1.0));
                    let _ = ctx.fill_text(text, x, y);
                }
            }
        }
    }
}
