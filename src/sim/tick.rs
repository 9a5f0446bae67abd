//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation by exactly one frame.

use glam::Vec2;

use super::collision::{Crash, CrashCause, detect_crashes};
use super::effects::{GROUND_DEBRIS, PIPE_DEBRIS, ScorePopup, spawn_burst};
use super::state::{EventSink, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Flap (ignored unless running)
    pub jump: bool,
    /// Start a new run (ignored unless game over)
    pub reset: bool,
}

/// Advance the game state by one tick
///
/// Order: input, bird physics, ground/pipe scroll, cull, spawn, collision,
/// scoring, high score (crash frame only), popups. Particles and screen
/// shake run in every phase so a crash burst finishes animating on the
/// game-over screen.
pub fn tick(state: &mut GameState, input: &TickInput, events: &mut impl EventSink) {
    match state.phase {
        GamePhase::Running if input.jump => state.bird.jump(events),
        GamePhase::GameOver if input.reset => {
            log::info!("New run (previous score {})", state.score);
            state.reset();
        }
        _ => {}
    }

    state.time_ticks += 1;

    if state.is_running() {
        state.bird.update();
        state.ground.update();

        for pipe in &mut state.pipes {
            pipe.update();
        }
        state.pipes.retain(|p| p.is_visible());
        state.spawn_pipe();

        let crashes = detect_crashes(&state.bird, &state.pipes);
        for &crash in &crashes {
            handle_crash(state, crash);
        }
        if let Some(last) = crashes.last() {
            events.emit(GameEvent::Crashed { cause: last.cause });
        }
        // A pipe cleared on the crash frame still counts
        update_score(state, events);
        if !crashes.is_empty() {
            settle_high_score(state, events);
        }

        state.popups.retain_mut(|p| p.update());
    }

    state.particles.retain_mut(|p| p.update());
    state.shake.update(&mut state.rng);
}

/// Mark every newly passed pipe and bump the score once per pipe
fn update_score(state: &mut GameState, events: &mut impl EventSink) {
    let bird_x = state.bird.rect.center_x();
    for pipe in &mut state.pipes {
        if !pipe.passed && pipe.x < bird_x {
            pipe.passed = true;
            state.score += 1;

            let popup_pos = Vec2::new(
                bird_x as f32,
                (state.bird.rect.center_y() - POPUP_OFFSET_Y) as f32,
            );
            state.popups.push(ScorePopup::new(popup_pos, 1));
            events.emit(GameEvent::Scored { score: state.score });
        }
    }
}

/// End the run: kill the bird and kick off effects
///
/// Applied once per collision kind; a later call restarts the shake, so a
/// pipe hit overrides the ground shake on a double crash.
fn handle_crash(state: &mut GameState, crash: Crash) {
    state.bird.alive = false;
    state.phase = GamePhase::GameOver;

    let ((duration, intensity), debris) = match crash.cause {
        CrashCause::Ground => (GROUND_SHAKE, GROUND_DEBRIS),
        CrashCause::Pipe => (PIPE_SHAKE, PIPE_DEBRIS),
    };
    state.shake.start(duration, intensity);
    for &(count, color) in debris {
        spawn_burst(&mut state.particles, crash.point, count, color, &mut state.rng);
    }
}

/// Compare the final score of the run against the best so far
fn settle_high_score(state: &mut GameState, events: &mut impl EventSink) {
    log::info!("Run over with score {} (best {})", state.score, state.high_score);

    if state.score > state.high_score {
        state.high_score = state.score;
        state.new_record = true;
        events.emit(GameEvent::NewHighScore { score: state.score });
    }
}
