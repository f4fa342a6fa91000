//! Translucent rectangle buttons
//!
//! A button knows nothing about scenes: it carries an opaque action value of
//! the caller's choosing and hands it back when tapped.

use glam::Vec2;

use super::stage::{Anchor, DisplayObject, Stage, TextStyle};

/// Background opacity of every button
pub const BUTTON_ALPHA: f32 = 0.6;

/// Something that can be hit by a pointer
pub trait Tappable {
    type Action;

    fn contains(&self, point: Vec2) -> bool;
    fn action(&self) -> Self::Action;

    /// The action if `point` hits this region
    fn hit(&self, point: Vec2) -> Option<Self::Action> {
        self.contains(point).then(|| self.action())
    }
}

/// Axis-aligned tap target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapRegion<A> {
    pub pos: Vec2,
    pub size: Vec2,
    pub action: A,
}

impl<A: Copy> TapRegion<A> {
    pub fn new(pos: Vec2, size: Vec2, action: A) -> Self {
        Self { pos, size, action }
    }
}

impl<A: Copy> Tappable for TapRegion<A> {
    type Action = A;

    fn contains(&self, point: Vec2) -> bool {
        let max = self.pos + self.size;
        point.x >= self.pos.x && point.y >= self.pos.y && point.x <= max.x && point.y <= max.y
    }

    fn action(&self) -> A {
        self.action
    }
}

/// A labeled button
#[derive(Debug, Clone, PartialEq)]
pub struct Button<A> {
    pub label: String,
    /// 0xRRGGBB
    pub color: u32,
    pub region: TapRegion<A>,
}

impl<A: Copy> Button<A> {
    pub fn new(label: impl Into<String>, size: Vec2, color: u32, action: A) -> Self {
        Self {
            label: label.into(),
            color,
            region: TapRegion::new(Vec2::ZERO, size, action),
        }
    }

    /// Place the button's top-left corner
    pub fn at(mut self, pos: Vec2) -> Self {
        self.region.pos = pos;
        self
    }

    /// Add the background and centered label to the stage and return the
    /// tap target
    pub fn build(self, stage: &mut Stage) -> TapRegion<A> {
        let TapRegion { pos, size, .. } = self.region;
        stage.add(DisplayObject::Rect {
            pos,
            size,
            color: self.color,
            alpha: BUTTON_ALPHA,
        });
        stage.text(self.label, pos + size / 2.0, TextStyle::LABEL, Anchor::Center);
        self.region
    }
}

impl<A: Copy> Tappable for Button<A> {
    type Action = A;

    fn contains(&self, point: Vec2) -> bool {
        self.region.contains(point)
    }

    fn action(&self) -> A {
        self.region.action
    }
}
