//! Visual effects: particle bursts, score popups and screen shake
//!
//! None of this feeds back into gameplay. Particles and popups are
//! self-expiring: `update` returns whether the entity is still alive and the
//! owning `Vec` drops it via `retain` on the same tick its lifetime hits zero.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

/// Opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Build a colour from loosely typed channels
    ///
    /// Fewer than three channels yields white; each channel is clamped into
    /// 0-255. Extra channels are ignored.
    pub fn from_channels(channels: &[i64]) -> Rgb {
        match channels {
            [r, g, b, ..] => Rgb(clamp_channel(*r), clamp_channel(*g), clamp_channel(*b)),
            _ => Rgb::WHITE,
        }
    }
}

#[inline]
fn clamp_channel(v: i64) -> u8 {
    v.clamp(0, 255) as u8
}

/// Alpha proportional to remaining life, clamped into 0-255
#[inline]
fn fade_alpha(lifetime: i32, full: f32) -> u8 {
    ((lifetime as f32 / full) * 255.0).clamp(0.0, 255.0) as u8
}

/// Debris palettes for crash bursts: (count, colour)
pub const GROUND_DEBRIS: &[(usize, Rgb)] = &[(30, Rgb(139, 69, 19))];
pub const PIPE_DEBRIS: &[(usize, Rgb)] = &[
    (20, Rgb(0, 255, 0)),
    (15, Rgb(144, 238, 144)),
    (15, Rgb(0, 200, 0)),
];

/// A particle for crash bursts
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Rgb,
    /// Diameter in pixels
    pub size: i32,
    /// Ticks left to live
    pub lifetime: i32,
    pub alpha: u8,
}

impl Particle {
    /// Spawn at `pos` flying off in a random direction
    pub fn new(pos: Vec2, color: Rgb, rng: &mut impl Rng) -> Self {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let speed = rng.random_range(PARTICLE_MIN_SPEED..PARTICLE_MAX_SPEED);
        Self {
            pos,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            color,
            size: rng.random_range(PARTICLE_MIN_SIZE..=PARTICLE_MAX_SIZE),
            lifetime: rng.random_range(PARTICLE_MIN_LIFETIME..=PARTICLE_MAX_LIFETIME),
            alpha: 255,
        }
    }

    /// Integrate one tick; returns false once expired
    pub fn update(&mut self) -> bool {
        self.pos += self.vel;
        self.vel.y += PARTICLE_GRAVITY;
        self.lifetime -= 1;
        self.alpha = fade_alpha(self.lifetime, PARTICLE_FADE_TICKS);
        self.lifetime > 0
    }
}

/// Spawn `count` particles of one colour at `pos`
pub fn spawn_burst(
    particles: &mut Vec<Particle>,
    pos: Vec2,
    count: usize,
    color: Rgb,
    rng: &mut impl Rng,
) {
    particles.extend((0..count).map(|_| Particle::new(pos, color, rng)));
}

/// Floating "+N" text shown when a pipe is cleared
#[derive(Debug, Clone)]
pub struct ScorePopup {
    pub pos: Vec2,
    pub value: u32,
    pub lifetime: i32,
    pub alpha: u8,
}

impl ScorePopup {
    pub fn new(pos: Vec2, value: u32) -> Self {
        Self {
            pos,
            value,
            lifetime: POPUP_LIFETIME,
            alpha: 255,
        }
    }

    /// Drift upward one tick; returns false once expired
    pub fn update(&mut self) -> bool {
        self.pos.y -= POPUP_RISE_SPEED;
        self.lifetime -= 1;
        self.alpha = fade_alpha(self.lifetime, POPUP_LIFETIME as f32);
        self.lifetime > 0
    }

    pub fn label(&self) -> String {
        format!("+{}", self.value)
    }
}

/// Screen shake state; the offset is applied to draw positions only
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenShake {
    /// Ticks of shaking left
    pub duration: u32,
    /// Max offset in pixels on each axis
    pub intensity: i32,
    pub offset: Vec2,
}

impl ScreenShake {
    /// Begin (or restart) a shake burst
    pub fn start(&mut self, duration: u32, intensity: i32) {
        self.duration = duration;
        self.intensity = intensity;
    }

    /// Advance one tick, resampling the offset while active
    pub fn update(&mut self, rng: &mut impl Rng) {
        if self.duration > 0 {
            self.duration -= 1;
            let i = self.intensity.abs();
            self.offset = Vec2::new(
                rng.random_range(-i..=i) as f32,
                rng.random_range(-i..=i) as f32,
            );
        } else {
            self.offset = Vec2::ZERO;
        }
    }

    pub fn is_active(&self) -> bool {
        self.duration > 0
    }
}
