//! Game state and core simulation types

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{CrashCause, Rect};
use super::effects::{Particle, ScorePopup, ScreenShake};
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Bird is flying, pipes scroll
    Running,
    /// Bird crashed; only effects keep animating until reset
    GameOver,
}

/// Things the simulation wants the outside world to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Bird flapped
    Jumped,
    /// A pipe was cleared; carries the new score
    Scored { score: u32 },
    /// Run ended
    Crashed { cause: CrashCause },
    /// The run that just ended beat the stored high score
    NewHighScore { score: u32 },
}

/// Receiver for simulation events
///
/// Passed explicitly into anything that produces side effects (sounds,
/// persistence) so entities never reach for global state.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// The player's bird
#[derive(Debug, Clone)]
pub struct Bird {
    /// Bounding box (y grows downward)
    pub rect: Rect,
    /// Vertical velocity in pixels/tick (positive = falling)
    pub velocity: f32,
    /// Sprite rotation in degrees (positive = nose up)
    pub angle: f32,
    pub alive: bool,
    /// Wing sprite: 0 = wings up, 1 = wings down
    pub frame: usize,
    /// Ticks since the last wing toggle
    pub anim_ticks: u32,
    /// Next toggle goes to wings-down
    flap_down_next: bool,
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

impl Bird {
    pub fn new() -> Self {
        Self {
            rect: Rect::from_center(BIRD_START.0, BIRD_START.1, BIRD_WIDTH, BIRD_HEIGHT),
            velocity: 0.0,
            angle: 0.0,
            alive: true,
            frame: 0,
            anim_ticks: 0,
            flap_down_next: true,
        }
    }

    /// Flap: override velocity with the jump impulse
    pub fn jump(&mut self, sink: &mut impl EventSink) {
        if !self.alive {
            return;
        }
        self.velocity = JUMP_VELOCITY;
        self.angle = MAX_ANGLE;
        sink.emit(GameEvent::Jumped);
    }

    /// Advance one tick of gravity, wing animation and rotation
    pub fn update(&mut self) {
        self.velocity += GRAVITY;
        // Truncate toward zero, sub-pixel motion is dropped every tick
        self.rect.y += self.velocity as i32;

        if self.alive {
            self.anim_ticks += 1;
            if self.anim_ticks >= WING_FLAP_TICKS {
                self.anim_ticks = 0;
                self.frame = if self.flap_down_next { 1 } else { 0 };
                self.flap_down_next = !self.flap_down_next;
            }
        }

        if self.velocity < 0.0 {
            self.angle = MAX_ANGLE;
        } else {
            self.angle = (self.angle - ANGLE_DECAY).max(MIN_ANGLE);
        }

        // Ceiling: stop dead, no bounce
        if self.rect.top() < 0 {
            self.rect.y = 0;
            self.velocity = 0.0;
        }
    }
}

/// A pipe pair with a gap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipe {
    /// Horizontal centre of both pieces
    pub x: i32,
    /// Y of the gap's top edge (bottom of the top piece)
    pub height: i32,
    /// Already counted toward the score
    pub passed: bool,
}

impl Pipe {
    /// New pipe at `x` with a random gap that always fits above the ground
    pub fn new(x: i32, rng: &mut impl Rng) -> Self {
        Self {
            x,
            height: rng.random_range(Self::MIN_HEIGHT..=Self::MAX_HEIGHT),
            passed: false,
        }
    }

    /// Lowest gap top (highest on screen)
    pub const MIN_HEIGHT: i32 = PIPE_MARGIN;
    /// Highest gap top that still leaves the margin above the ground
    pub const MAX_HEIGHT: i32 = GROUND_Y - PIPE_GAP - PIPE_MARGIN;

    /// Collision boxes: (top piece, bottom piece)
    pub fn rects(&self) -> (Rect, Rect) {
        (
            Rect::from_mid_bottom(self.x, self.height, PIPE_WIDTH, PIPE_HEIGHT),
            Rect::from_mid_top(self.x, self.height + PIPE_GAP, PIPE_WIDTH, PIPE_HEIGHT),
        )
    }

    /// Y of the gap's vertical centre
    pub fn gap_center(&self) -> i32 {
        self.height + PIPE_GAP / 2
    }

    pub fn update(&mut self) {
        self.x -= PIPE_SPEED;
    }

    /// Still (partly) on screen
    pub fn is_visible(&self) -> bool {
        self.x > PIPE_CULL_X
    }
}

/// Scrolling ground strip (two tiles drawn side by side)
#[derive(Debug, Clone, Default)]
pub struct Ground {
    pub x: i32,
}

impl Ground {
    pub fn update(&mut self) {
        self.x -= GROUND_SPEED;
        if self.x <= -SCREEN_WIDTH {
            self.x = 0;
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub bird: Bird,
    pub ground: Ground,
    /// Pipes in spawn order (tail = most recent)
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub high_score: u32,
    /// The last terminal event raised the high score
    pub new_record: bool,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub popups: Vec<ScorePopup>,
    pub shake: ScreenShake,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new running game with one pipe already queued
    pub fn new(seed: u64, high_score: u32) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            bird: Bird::new(),
            ground: Ground::default(),
            pipes: Vec::new(),
            score: 0,
            high_score,
            new_record: false,
            particles: Vec::new(),
            popups: Vec::new(),
            shake: ScreenShake::default(),
            time_ticks: 0,
        };
        state.spawn_pipe();
        state
    }

    /// Start a fresh run, keeping the high score and RNG stream
    pub fn reset(&mut self) {
        self.phase = GamePhase::Running;
        self.bird = Bird::new();
        self.pipes.clear();
        self.score = 0;
        self.new_record = false;
        self.particles.clear();
        self.popups.clear();
        self.shake = ScreenShake::default();
        self.spawn_pipe();
    }

    /// Append a pipe if there are none or the tail has moved far enough in
    pub fn spawn_pipe(&mut self) {
        let due = match self.pipes.last() {
            None => true,
            Some(tail) => tail.x < SCREEN_WIDTH - PIPE_DISTANCE,
        };
        if due {
            let pipe = Pipe::new(PIPE_SPAWN_X, &mut self.rng);
            self.pipes.push(pipe);
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Number of pipes currently marked as passed
    pub fn passed_pipes(&self) -> usize {
        self.pipes.iter().filter(|p| p.passed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(42, 7);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.pipes.len(), 1);
        assert_eq!(state.pipes[0].x, PIPE_SPAWN_X);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 7);
        assert!(state.bird.alive);
    }

    #[test]
    fn test_bird_update_from_rest() {
        let mut bird = Bird::new();
        let y = bird.rect.y;
        bird.update();
        assert_eq!(bird.velocity, 0.5);
        assert_eq!(bird.rect.y, y);
        bird.update();
        assert_eq!(bird.velocity, 1.0);
        assert_eq!(bird.rect.y, y + 1);
    }

    #[test]
    fn test_jump_sets_impulse_and_emits() {
        let mut bird = Bird::new();
        let mut events: Vec<GameEvent> = Vec::new();
        bird.jump(&mut events);
        assert_eq!(bird.velocity, JUMP_VELOCITY);
        assert_eq!(bird.angle, MAX_ANGLE);
        assert_eq!(events, vec![GameEvent::Jumped]);
    }

    #[test]
    fn test_dead_bird_cannot_jump() {
        let mut bird = Bird::new();
        bird.alive = false;
        let mut events: Vec<GameEvent> = Vec::new();
        bird.jump(&mut events);
        assert_eq!(bird.velocity, 0.0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_rotation_decays_without_overshoot() {
        let mut bird = Bird::new();
        let mut events: Vec<GameEvent> = Vec::new();
        bird.jump(&mut events);
        bird.update();
        assert_eq!(bird.angle, MAX_ANGLE);

        for _ in 0..200 {
            bird.update();
            bird.rect.y = 200; // keep it airborne, ceiling aside
            assert!(bird.angle >= MIN_ANGLE);
        }
        assert_eq!(bird.angle, MIN_ANGLE);
    }

    #[test]
    fn test_ceiling_clamp() {
        let mut bird = Bird::new();
        bird.rect.y = 3;
        bird.velocity = -8.0;
        bird.update();
        assert_eq!(bird.rect.top(), 0);
        assert_eq!(bird.velocity, 0.0);
        assert!(bird.alive);
    }

    #[test]
    fn test_wing_animation_toggles() {
        let mut bird = Bird::new();
        assert_eq!(bird.frame, 0);
        for _ in 0..WING_FLAP_TICKS {
            bird.update();
            bird.rect.y = 200;
        }
        assert_eq!(bird.frame, 1);
        for _ in 0..WING_FLAP_TICKS {
            bird.update();
            bird.rect.y = 200;
        }
        assert_eq!(bird.frame, 0);
    }

    #[test]
    fn test_pipe_height_bounds() {
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..500 {
            let pipe = Pipe::new(0, &mut rng);
            assert!((Pipe::MIN_HEIGHT..=Pipe::MAX_HEIGHT).contains(&pipe.height));
            // Gap and margin always fit above the ground
            assert!(pipe.height + PIPE_GAP + PIPE_MARGIN <= GROUND_Y);
        }
    }

    #[test]
    fn test_spawn_waits_for_distance() {
        let mut state = GameState::new(3, 0);
        assert_eq!(state.pipes[0].x, 450);

        state.pipes[0].x = 150;
        state.spawn_pipe();
        assert_eq!(state.pipes.len(), 1);

        state.pipes[0].x = 149;
        state.spawn_pipe();
        assert_eq!(state.pipes.len(), 2);
        assert_eq!(state.pipes[1].x, PIPE_SPAWN_X);
    }

    #[test]
    fn test_ground_wraps() {
        let mut ground = Ground::default();
        for _ in 0..(SCREEN_WIDTH / GROUND_SPEED - 1) {
            ground.update();
        }
        assert_eq!(ground.x, -SCREEN_WIDTH + GROUND_SPEED);
        ground.update();
        assert_eq!(ground.x, 0);
    }
}
