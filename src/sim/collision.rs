//! Axis-aligned collision detection
//!
//! Everything in the playfield is a box: the bird, and the two pieces of every
//! pipe pair. Detection is discrete (one overlap test per tick); at 2 px/tick
//! scroll and the bird's capped jump speed a thin pipe edge could in theory be
//! skipped, which is accepted.

use glam::Vec2;

use super::state::{Bird, Pipe};
use crate::consts::*;

/// Integer rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect of the given size centred on `(cx, cy)`
    pub fn from_center(cx: i32, cy: i32, w: i32, h: i32) -> Self {
        Self::new(cx - w / 2, cy - h / 2, w, h)
    }

    /// Rect whose bottom edge midpoint sits at `(cx, bottom)`
    pub fn from_mid_bottom(cx: i32, bottom: i32, w: i32, h: i32) -> Self {
        Self::new(cx - w / 2, bottom - h, w, h)
    }

    /// Rect whose top edge midpoint sits at `(cx, top)`
    pub fn from_mid_top(cx: i32, top: i32, w: i32, h: i32) -> Self {
        Self::new(cx - w / 2, top, w, h)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    #[inline]
    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x() as f32, self.center_y() as f32)
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// Strict overlap test; touching edges and empty rects never intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.w <= 0 || self.h <= 0 || other.w <= 0 || other.h <= 0 {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// What the bird crashed into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    Ground,
    Pipe,
}

/// A terminal collision and where the debris should come from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crash {
    pub cause: CrashCause,
    /// Impact point (particle burst origin)
    pub point: Vec2,
}

/// Whether the bird's box has reached the ground line
pub fn ground_contact(bird: &Rect) -> bool {
    bird.bottom() >= GROUND_Y
}

/// Whether the bird's box overlaps either piece of a pipe pair
pub fn pipe_contact(bird: &Rect, pipe: &Pipe) -> bool {
    let (top, bottom) = pipe.rects();
    bird.intersects(&top) || bird.intersects(&bottom)
}

/// Every terminal collision this tick, ground first
///
/// The two checks are independent: a bird sinking into the ground beside a
/// pipe reports both, and the caller applies both in order.
pub fn detect_crashes(bird: &Bird, pipes: &[Pipe]) -> Vec<Crash> {
    let rect = &bird.rect;
    let mut crashes = Vec::new();

    if ground_contact(rect) {
        crashes.push(Crash {
            cause: CrashCause::Ground,
            point: Vec2::new(rect.center_x() as f32, rect.bottom() as f32),
        });
    }

    if pipes.iter().any(|pipe| pipe_contact(rect, pipe)) {
        crashes.push(Crash {
            cause: CrashCause::Pipe,
            point: rect.center(),
        });
    }

    crashes
}
