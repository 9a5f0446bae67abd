//! Platform abstraction layer
//!
//! Everything between the host and the session:
//! - Input events mapped to game commands
//! - Frame pacing for the native loop
//! - Autopilot, a scripted input source for demos and soak runs

pub mod autopilot;
pub mod input;
pub mod time;

pub use autopilot::Autopilot;
pub use input::{Command, InputEvent, Key, map_event, map_events};
pub use time::FrameLimiter;
