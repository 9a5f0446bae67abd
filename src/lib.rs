//! Flappy Sim - a single-screen "flap through the pipes" arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, collisions, effects)
//! - `session`: Owns the simulation and wires it to audio/persistence
//! - `renderer`: Draw-command seam plus the per-frame scene builder
//! - `audio`: Sound effect ids and the playback seam
//! - `platform`: Input mapping, frame pacing, demo autopilot
//! - `highscores` / `persistence` / `settings`: Everything that touches disk

pub mod audio;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscores::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore};
pub use session::{FrameOutcome, Session};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (one tick per rendered frame)
    pub const SIM_HZ: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / SIM_HZ as f32;

    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: i32 = 400;
    pub const SCREEN_HEIGHT: i32 = 600;
    pub const GROUND_HEIGHT: i32 = 100;
    /// Top edge of the ground strip
    pub const GROUND_Y: i32 = SCREEN_HEIGHT - GROUND_HEIGHT;
    /// Ground strip scroll speed (pixels per tick)
    pub const GROUND_SPEED: i32 = 2;

    /// Bird sprite box and spawn point (box centre)
    pub const BIRD_WIDTH: i32 = 40;
    pub const BIRD_HEIGHT: i32 = 30;
    pub const BIRD_START: (i32, i32) = (100, 300);
    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a flap (negative = up)
    pub const JUMP_VELOCITY: f32 = -8.0;
    /// Nose-up angle while ascending (degrees)
    pub const MAX_ANGLE: f32 = 30.0;
    /// Nose-down limit while falling (degrees)
    pub const MIN_ANGLE: f32 = -90.0;
    /// Nose-down rotation per tick while falling (degrees)
    pub const ANGLE_DECAY: f32 = 4.0;
    /// Wing flap period in seconds
    pub const WING_FLAP_SECS: f32 = 0.15;
    /// Ticks between wing frame toggles (9 at 60 Hz)
    pub const WING_FLAP_TICKS: u32 = (WING_FLAP_SECS * SIM_HZ as f32) as u32;

    /// Pipe geometry
    pub const PIPE_WIDTH: i32 = 52;
    pub const PIPE_HEIGHT: i32 = 320;
    /// Vertical gap between top and bottom pieces
    pub const PIPE_GAP: i32 = 150;
    /// Minimum clearance above the gap and between gap and ground
    pub const PIPE_MARGIN: i32 = 100;
    /// Horizontal distance the tail pipe must travel before the next spawns
    pub const PIPE_DISTANCE: i32 = 250;
    /// Spawn x (pipe centre), just past the right edge
    pub const PIPE_SPAWN_X: i32 = SCREEN_WIDTH + 50;
    /// Pipe scroll speed (pixels per tick)
    pub const PIPE_SPEED: i32 = 2;
    /// Pipes at or left of this x are fully offscreen and dropped
    pub const PIPE_CULL_X: i32 = -80;

    /// Particle tuning
    pub const PARTICLE_GRAVITY: f32 = 0.2;
    pub const PARTICLE_MIN_SPEED: f32 = 4.0;
    pub const PARTICLE_MAX_SPEED: f32 = 8.0;
    pub const PARTICLE_MIN_LIFETIME: i32 = 30;
    pub const PARTICLE_MAX_LIFETIME: i32 = 50;
    /// Lifetime that maps to full opacity
    pub const PARTICLE_FADE_TICKS: f32 = 40.0;
    pub const PARTICLE_MIN_SIZE: i32 = 3;
    pub const PARTICLE_MAX_SIZE: i32 = 6;

    /// Score popup tuning
    pub const POPUP_LIFETIME: i32 = 60;
    pub const POPUP_RISE_SPEED: f32 = 2.0;
    /// Popups spawn this far above the bird centre
    pub const POPUP_OFFSET_Y: i32 = 30;

    /// Screen shake bursts (duration ticks, intensity pixels)
    pub const GROUND_SHAKE: (u32, i32) = (15, 8);
    pub const PIPE_SHAKE: (u32, i32) = (12, 6);
}
