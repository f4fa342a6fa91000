//! Retained display list for one scene
//!
//! A scene builds its visuals into a [`Stage`] once; the per-frame callback
//! only moves sprites and rewrites text through [`NodeId`] handles. Dropping
//! the stage drops every visual the scene owned.

use glam::Vec2;

use crate::platform::assets::AssetId;

/// Text styling, in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    /// 0xRRGGBB
    pub fill: u32,
    /// Shadow offset down-right; 0 disables it
    pub drop_shadow: f32,
}

impl TextStyle {
    /// Small white HUD / button text
    pub const LABEL: Self = Self {
        font_size: 20.0,
        fill: 0xffffff,
        drop_shadow: 2.0,
    };

    /// Large orange headline
    pub const HEADLINE: Self = Self {
        font_size: 32.0,
        fill: 0xfcbb08,
        drop_shadow: 2.0,
    };
}

/// Which point of the text box `pos` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    Center,
}

/// One drawable element
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayObject {
    Sprite {
        asset: AssetId,
        /// Top-left corner
        pos: Vec2,
    },
    Rect {
        pos: Vec2,
        size: Vec2,
        /// 0xRRGGBB
        color: u32,
        alpha: f32,
    },
    Text {
        text: String,
        pos: Vec2,
        style: TextStyle,
        anchor: Anchor,
    },
}

/// Handle to a node added to a [`Stage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Ordered display list; later nodes draw on top
#[derive(Debug, Default)]
pub struct Stage {
    nodes: Vec<DisplayObject>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: DisplayObject) -> NodeId {
        self.nodes.push(object);
        NodeId(self.nodes.len() - 1)
    }

    pub fn sprite(&mut self, asset: AssetId, pos: Vec2) -> NodeId {
        self.add(DisplayObject::Sprite { asset, pos })
    }

    pub fn text(
        &mut self,
        text: impl Into<String>,
        pos: Vec2,
        style: TextStyle,
        anchor: Anchor,
    ) -> NodeId {
        self.add(DisplayObject::Text {
            text: text.into(),
            pos,
            style,
            anchor,
        })
    }

    pub fn get(&self, id: NodeId) -> Option<&DisplayObject> {
        self.nodes.get(id.0)
    }

    /// Move a sprite, rect or text node
    pub fn set_position(&mut self, id: NodeId, new_pos: Vec2) {
        match self.nodes.get_mut(id.0) {
            Some(DisplayObject::Sprite { pos, .. })
            | Some(DisplayObject::Rect { pos, .. })
            | Some(DisplayObject::Text { pos, .. }) => *pos = new_pos,
            None => log::warn!("set_position on missing node {:?}", id),
        }
    }

    /// Replace a text node's string (no-op for other node kinds)
    pub fn set_text(&mut self, id: NodeId, new_text: &str) {
        if let Some(DisplayObject::Text { text, .. }) = self.nodes.get_mut(id.0) {
            if text != new_text {
                text.clear();
                text.push_str(new_text);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DisplayObject> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Text of every text node, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|n| match n {
            DisplayObject::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
