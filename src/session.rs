//! Game session
//!
//! Owns the simulation plus its side-effect collaborators. Each frame takes
//! the commands sampled from input, advances the simulation one tick and
//! fans the resulting events out to audio and high-score storage.

use crate::audio::{AudioSink, SoundEffect};
use crate::highscores::HighScoreStore;
use crate::platform::Command;
use crate::renderer::{Renderer, render_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Whether the host loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

pub struct Session<A: AudioSink, S: HighScoreStore> {
    state: GameState,
    audio: A,
    store: S,
    /// Events raised during the last frame
    events: Vec<GameEvent>,
}

impl<A: AudioSink, S: HighScoreStore> Session<A, S> {
    /// Start a session, seeding the high score from `store`
    pub fn new(seed: u64, audio: A, store: S) -> Self {
        let high_score = store.load_high_score();
        log::info!("Session started (seed {}, high score {})", seed, high_score);
        Self {
            state: GameState::new(seed, high_score),
            audio,
            store,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for hosts that script scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn last_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Run one frame with this frame's commands
    pub fn frame(&mut self, commands: &[Command]) -> FrameOutcome {
        if commands.contains(&Command::Quit) {
            log::info!(
                "Quit requested (score {}, best {})",
                self.state.score,
                self.state.high_score
            );
            return FrameOutcome::Quit;
        }

        let input = TickInput {
            jump: commands.contains(&Command::Jump),
            reset: commands.contains(&Command::Reset),
        };

        self.events.clear();
        tick(&mut self.state, &input, &mut self.events);

        for event in &self.events {
            for &effect in SoundEffect::for_event(event) {
                self.audio.play(effect);
            }
            if let GameEvent::NewHighScore { score } = *event {
                if let Err(e) = self.store.save_high_score(score) {
                    log::warn!("Failed to save high score {}: {}", score, e);
                }
            }
        }

        FrameOutcome::Continue
    }

    /// Draw the current state
    pub fn render(&self, settings: &Settings, renderer: &mut impl Renderer) {
        render_frame(&self.state, settings, renderer);
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::consts::*;
    use crate::highscores::{FileHighScoreStore, MemoryHighScoreStore};
    use crate::renderer::DrawList;
    use crate::sim::{GamePhase, Pipe};

    type TestSession = Session<Vec<SoundEffect>, MemoryHighScoreStore>;

    fn session(high_score: u32) -> TestSession {
        Session::new(5, Vec::new(), MemoryHighScoreStore::new(high_score))
    }

    /// Put the bird one frame away from hitting the ground
    fn doom(state: &mut GameState) {
        state.bird.rect.y = GROUND_Y - BIRD_HEIGHT - 1;
        state.bird.velocity = 5.0;
    }

    struct FailingStore;

    impl HighScoreStore for FailingStore {
        fn load_high_score(&self) -> u32 {
            0
        }

        fn save_high_score(&mut self, _score: u32) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    #[test]
    fn test_loads_high_score() {
        let s = session(12);
        assert_eq!(s.state().high_score, 12);
        assert_eq!(s.state().phase, GamePhase::Running);
    }

    #[test]
    fn test_quit_stops_without_ticking() {
        let mut s = session(0);
        let outcome = s.frame(&[Command::Jump, Command::Quit]);
        assert_eq!(outcome, FrameOutcome::Quit);
        assert_eq!(s.state().time_ticks, 0);
        assert!(s.audio().is_empty());
    }

    #[test]
    fn test_jump_plays_sound() {
        let mut s = session(0);
        assert_eq!(s.frame(&[Command::Jump]), FrameOutcome::Continue);
        assert_eq!(s.last_events(), &[GameEvent::Jumped]);
        assert_eq!(s.audio(), &vec![SoundEffect::Jump]);
        assert!(s.state().bird.velocity < 0.0);
    }

    #[test]
    fn test_reset_ignored_while_running() {
        let mut s = session(0);
        s.frame(&[]);
        s.state_mut().score = 2;
        s.frame(&[Command::Reset]);
        assert_eq!(s.state().score, 2);
    }

    #[test]
    fn test_crash_sounds_and_no_record() {
        let mut s = session(10);
        s.state_mut().score = 4;
        doom(s.state_mut());
        s.frame(&[]);

        assert_eq!(s.state().phase, GamePhase::GameOver);
        assert_eq!(s.audio(), &vec![SoundEffect::Hit, SoundEffect::Die]);
        assert_eq!(s.store().saves, 0);
        assert_eq!(s.state().high_score, 10);
    }

    #[test]
    fn test_new_record_is_persisted_once() {
        let mut s = session(3);
        s.state_mut().score = 5;
        doom(s.state_mut());
        s.frame(&[]);

        assert!(s.state().new_record);
        assert_eq!(s.store().value, 5);
        assert_eq!(s.store().saves, 1);

        // Idling on the game-over screen does not save again
        for _ in 0..30 {
            s.frame(&[Command::Jump]);
        }
        assert_eq!(s.store().saves, 1);
    }

    #[test]
    fn test_saved_record_includes_crash_frame_point() {
        let mut s = session(0);
        s.state_mut().pipes[0] = Pipe {
            x: 101,
            height: 250,
            passed: false,
        };
        s.state_mut().bird.rect.y = 200;
        s.frame(&[]);

        assert_eq!(s.state().phase, GamePhase::GameOver);
        assert_eq!(s.store().value, 1);
        assert_eq!(s.store().saves, 1);
        assert_eq!(
            s.audio(),
            &vec![SoundEffect::Hit, SoundEffect::Die, SoundEffect::Score]
        );
    }

    #[test]
    fn test_tying_the_record_is_not_new() {
        let mut s = session(5);
        s.state_mut().score = 5;
        doom(s.state_mut());
        s.frame(&[]);
        assert!(!s.state().new_record);
        assert_eq!(s.store().saves, 0);
    }

    #[test]
    fn test_save_failure_is_not_fatal() {
        let mut s = Session::new(1, Vec::new(), FailingStore);
        s.state_mut().score = 2;
        doom(s.state_mut());
        assert_eq!(s.frame(&[]), FrameOutcome::Continue);
        assert_eq!(s.state().high_score, 2);
    }

    #[test]
    fn test_reset_after_game_over() {
        let mut s = session(0);
        doom(s.state_mut());
        s.frame(&[]);
        assert_eq!(s.state().phase, GamePhase::GameOver);

        s.frame(&[Command::Reset]);
        let state = s.state();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.pipes.len(), 1);
        assert!(state.bird.alive);
    }

    #[test]
    fn test_record_survives_new_session() {
        let path = std::env::temp_dir().join(format!("flappy-session-{}.txt", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let mut s = Session::new(1, Vec::new(), FileHighScoreStore::new(&path));
        s.state_mut().score = 7;
        doom(s.state_mut());
        s.frame(&[]);

        let reopened = Session::new(2, Vec::new(), FileHighScoreStore::new(&path));
        assert_eq!(reopened.state().high_score, 7);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_render_presents_a_frame() {
        let s = session(0);
        let mut list = DrawList::new();
        s.render(&Settings::default(), &mut list);
        assert_eq!(list.frames, 1);
        assert!(list.texts().any(|t| t == "High Score: 0"));
    }
}
