//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per frame
//! - Seeded RNG only
//! - Side effects leave as `GameEvent`s through an explicit sink
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod effects;
pub mod state;
pub mod tick;

pub use collision::{Crash, CrashCause, Rect, detect_crashes};
pub use effects::{Particle, Rgb, ScorePopup, ScreenShake};
pub use state::{Bird, EventSink, GameEvent, GamePhase, GameState, Ground, Pipe};
pub use tick::{TickInput, tick};
