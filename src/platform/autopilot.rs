//! Autopilot - scripted player for demos and headless soak runs
//!
//! Tracks the gap of the next uncleared pipe: flap whenever the bird is
//! falling and its bottom edge has sunk close to the gap's lower lip. After a
//! crash it waits for the debris to settle, then restarts.

use super::input::Command;
use crate::consts::*;
use crate::sim::{GamePhase, GameState, Pipe};

/// Flap once the bird's bottom is this close to the gap bottom
const JUMP_MARGIN: i32 = 20;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Ticks to linger on the game-over screen before resetting
    pub reset_delay: u32,
    waited: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(SIM_HZ)
    }
}

impl Autopilot {
    pub fn new(reset_delay: u32) -> Self {
        Self {
            reset_delay,
            waited: 0,
        }
    }

    /// Next pipe the bird still has to get through
    fn target(state: &GameState) -> Option<&Pipe> {
        let bird_left = state.bird.rect.left();
        state
            .pipes
            .iter()
            .find(|p| p.x + PIPE_WIDTH / 2 >= bird_left)
    }

    /// Command to issue this frame, if any
    pub fn command(&mut self, state: &GameState) -> Option<Command> {
        match state.phase {
            GamePhase::Running => {
                self.waited = 0;
                let floor = match Self::target(state) {
                    Some(pipe) => pipe.height + PIPE_GAP,
                    None => GROUND_Y - PIPE_MARGIN,
                };
                let bird = &state.bird;
                (bird.velocity >= 0.0 && bird.rect.bottom() > floor - JUMP_MARGIN)
                    .then_some(Command::Jump)
            }
            GamePhase::GameOver => {
                self.waited += 1;
                if self.waited >= self.reset_delay && state.particles.is_empty() {
                    self.waited = 0;
                    Some(Command::Reset)
                } else {
                    None
                }
            }
        }
    }
}
