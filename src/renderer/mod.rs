//! Rendering seam
//!
//! The core never touches pixels. Each frame `render_frame` walks the game
//! state and issues draw commands (sprites, circles, text) to a `Renderer`,
//! with every position already shifted by the current screen-shake offset.

pub mod draw_list;
pub mod frame;

pub use draw_list::{DrawCommand, DrawList};
pub use frame::render_frame;

use glam::Vec2;
use serde::Serialize;

/// Sprite assets the renderer is expected to provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sprite {
    /// Full-screen backdrop
    Background,
    /// One tile of the ground strip (screen width × ground height)
    Ground,
    PipeTop,
    PipeBottom,
    /// Bird wing frame: 0 = wings up, 1 = wings down
    Bird { frame: usize },
}

/// Straight (non-premultiplied) RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

/// Font sizes used by the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextSize {
    /// 24 px bold (high score, popups, record banner)
    Small,
    /// 32 px bold (score, game over)
    Large,
}

/// Horizontal anchoring of a text position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAlign {
    /// Position is the top-left corner
    Left,
    /// Position is the top-centre
    Center,
}

/// Something that can put the frame on screen
pub trait Renderer {
    /// Draw a sprite whose unrotated top-left corner is `pos`, rotated by
    /// `rotation` degrees (counter-clockwise) about its own centre
    fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2, rotation: f32);
    /// Filled circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn draw_text(&mut self, text: &str, pos: Vec2, color: Rgba, size: TextSize, align: TextAlign);
    /// Flip the finished frame
    fn present(&mut self);
}

/// Colors for game elements
pub mod colors {
    use super::Rgba;

    pub const SCORE: Rgba = Rgba(255, 255, 255, 255);
    pub const HIGH_SCORE: Rgba = Rgba(255, 215, 0, 255);
    pub const GAME_OVER: Rgba = Rgba(255, 0, 0, 255);
    pub const NEW_RECORD: Rgba = Rgba(255, 215, 0, 255);
    pub const POPUP: Rgba = Rgba(255, 255, 255, 255);
}
