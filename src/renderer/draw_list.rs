//! Recording renderer
//!
//! Stores every command of the current frame instead of drawing it. Used by
//! the headless runner and by tests that inspect what a frame would show.
//! Serializes to JSON for frame dumps.

use glam::Vec2;
use serde::Serialize;

use super::{Renderer, Rgba, Sprite, TextAlign, TextSize};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Sprite {
        sprite: Sprite,
        pos: Vec2,
        rotation: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Text {
        text: String,
        pos: Vec2,
        color: Rgba,
        size: TextSize,
        align: TextAlign,
    },
}

/// Command buffer for one frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
    /// Frames presented so far
    pub frames: u64,
    /// Commands in the last presented frame
    pub last_frame_len: usize,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All text strings in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Positions of every sprite of the given kind
    pub fn sprites(&self, kind: Sprite) -> impl Iterator<Item = Vec2> + '_ {
        self.commands.iter().filter_map(move |c| match c {
            DrawCommand::Sprite { sprite, pos, .. } if *sprite == kind => Some(*pos),
            _ => None,
        })
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

impl Renderer for DrawList {
    fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2, rotation: f32) {
        self.commands.push(DrawCommand::Sprite {
            sprite,
            pos,
            rotation,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, color: Rgba, size: TextSize, align: TextAlign) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            color,
            size,
            align,
        });
    }

    fn present(&mut self) {
        self.frames += 1;
        self.last_frame_len = self.commands.len();
    }
}
