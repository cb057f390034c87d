//! Game state and core simulation types
//!
//! Everything the tick loop mutates and the render layer snapshots lives here.

use glam::Vec2;

use super::field::ObstacleField;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen; nothing simulates
    Menu,
    /// Player hovers idle, waiting for the first flap
    Ready,
    /// Active gameplay
    Playing,
    /// Run ended
    GameOver,
}

/// Discrete cue emitted by the simulation for the platform collaborators
/// (score sink, audio, persistence). Drained by the glue after every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Upward impulse applied
    Flap,
    /// Score incremented to the contained value
    Scored(u32),
    /// Terminal collision registered
    Hit,
    /// Game-over sting (the audio collaborator staggers its own tones)
    Died,
    /// New run armed (Menu/GameOver -> Ready)
    Swoosh,
    /// Best score exceeded; the persistence collaborator writes it immediately
    NewBest(u32),
}

/// Cosmetic obstacle style, chosen uniformly at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleVariant {
    Brick,
    Pipe,
}

/// A gap obstacle scrolling right-to-left
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Left edge; decreases by `SCROLL_SPEED` every Playing tick
    pub x: f32,
    /// Top of the gap; the bottom segment starts at `gap_y + GAP_HEIGHT`
    pub gap_y: f32,
    /// Scoring guard, set exactly once when the trailing edge passes the player
    pub passed: bool,
    pub variant: ObstacleVariant,
}

impl Obstacle {
    /// Trailing (right) edge
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + OBSTACLE_WIDTH
    }
}

/// The player's aircraft
///
/// Horizontal position is fixed; only the vertical axis simulates.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    /// Vertical velocity in units per tick (positive = down, screen coords)
    pub vel: f32,
    /// Visual tilt in radians, derived from velocity; no feedback into physics
    pub rotation: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, GAME_HEIGHT / 2.0),
            vel: 0.0,
            rotation: 0.0,
        }
    }

    /// Back to vertical center with zero velocity (new run)
    pub fn reset(&mut self) {
        self.pos = Vec2::new(PLAYER_X, GAME_HEIGHT / 2.0);
        self.vel = 0.0;
        self.rotation = 0.0;
    }

    /// Apply the upward impulse. Overrides the current velocity outright.
    pub fn flap(&mut self) {
        self.vel = FLAP_IMPULSE;
    }

    /// Integrate one tick of gravity and refresh the derived tilt.
    /// Returns true on ground contact (terminal); the ceiling is a soft stop.
    pub fn apply_gravity(&mut self) -> bool {
        self.vel += GRAVITY;
        self.pos.y += self.vel;
        self.rotation = (self.vel * ROTATION_SCALE).clamp(ROTATION_MIN, ROTATION_MAX);

        if self.pos.y + PLAYER_HEIGHT / 2.0 > FLOOR_Y {
            self.pos.y = FLOOR_Y - PLAYER_HEIGHT / 2.0;
            return true;
        }

        if self.pos.y - PLAYER_HEIGHT / 2.0 < 0.0 {
            self.pos.y = PLAYER_HEIGHT / 2.0;
            self.vel = 0.0;
        }

        false
    }

    /// Idle bob while waiting for the first flap (Ready phase only)
    pub fn hover(&mut self, ticks: u64) {
        let t = ticks as f32;
        self.pos.y = GAME_HEIGHT / 2.0 + (t * HOVER_BOB_RATE).sin() * HOVER_BOB_AMPLITUDE;
        self.rotation = (t * HOVER_TILT_RATE).sin() * HOVER_TILT_AMPLITUDE;
    }
}

/// Complete game session state (deterministic given seed + input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Obstacles cleared this run
    pub score: u32,
    /// Highest score across sessions, seeded from the persistence collaborator
    pub best_score: u32,
    /// Elapsed update ticks since construction
    pub time_ticks: u64,
    /// Background day/night cycle fraction in [0, 1)
    pub day_progress: f32,
    pub player: Player,
    pub field: ObstacleField,
    /// Cues for the platform collaborators, cleared at the start of each tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session on the title screen. A missing stored best degrades
    /// to 0 with no special-casing.
    pub fn new(seed: u64, best_score: u32) -> Self {
        Self {
            phase: GamePhase::Menu,
            score: 0,
            best_score,
            time_ticks: 0,
            day_progress: 0.0,
            player: Player::new(),
            field: ObstacleField::new(seed),
            events: Vec::new(),
        }
    }

    /// Arm a new run: Menu/GameOver -> Ready with a full reset.
    /// Ignored from Ready and Playing; Ready is never skipped.
    pub fn start_new_game(&mut self, seed: u64) {
        match self.phase {
            GamePhase::Menu | GamePhase::GameOver => {}
            GamePhase::Ready | GamePhase::Playing => return,
        }
        self.player.reset();
        self.field.reset(seed);
        self.score = 0;
        self.phase = GamePhase::Ready;
        self.events.push(GameEvent::Swoosh);
        log::info!("new run armed with seed {seed}");
    }

    /// Register a terminal collision. Idempotent: re-entering GameOver is a no-op.
    pub fn game_over(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::Hit);
        self.events.push(GameEvent::Died);
        log::info!(
            "game over at tick {} with score {}",
            self.time_ticks,
            self.score
        );
    }

    /// Credit one cleared obstacle and track the running best
    pub fn add_point(&mut self) {
        self.score += 1;
        self.events.push(GameEvent::Scored(self.score));
        if self.score > self.best_score {
            self.best_score = self.score;
            self.events.push(GameEvent::NewBest(self.best_score));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flap_overrides_velocity() {
        let mut player = Player::new();
        player.vel = 6.0;
        player.flap();
        assert_eq!(player.vel, FLAP_IMPULSE);

        // A second flap mid-climb does not stack
        player.flap();
        assert_eq!(player.vel, FLAP_IMPULSE);
    }

    #[test]
    fn test_rotation_clamp_is_asymmetric() {
        let mut player = Player::new();
        player.vel = -100.0;
        player.apply_gravity();
        assert!((player.rotation - ROTATION_MIN).abs() < 1e-6);

        let mut player = Player::new();
        player.vel = 100.0;
        player.apply_gravity();
        assert!((player.rotation - ROTATION_MAX).abs() < 1e-6);
    }

    #[test]
    fn test_ground_contact_clamps_and_reports() {
        let mut player = Player::new();
        player.pos.y = FLOOR_Y - PLAYER_HEIGHT / 2.0 - 0.1;
        player.vel = 3.0;
        assert!(player.apply_gravity());
        assert!((player.pos.y + PLAYER_HEIGHT / 2.0 - FLOOR_Y).abs() < 1e-6);
    }

    #[test]
    fn test_ceiling_is_soft() {
        let mut player = Player::new();
        player.pos.y = PLAYER_HEIGHT / 2.0 + 1.0;
        player.vel = -10.0;
        assert!(!player.apply_gravity());
        assert!((player.pos.y - PLAYER_HEIGHT / 2.0).abs() < 1e-6);
        assert_eq!(player.vel, 0.0);
    }

    #[test]
    fn test_hover_stays_near_center() {
        let mut player = Player::new();
        for t in 0..500u64 {
            player.hover(t);
            assert!((player.pos.y - GAME_HEIGHT / 2.0).abs() <= HOVER_BOB_AMPLITUDE + 1e-3);
        }
    }

    #[test]
    fn test_start_new_game_resets_session() {
        let mut state = GameState::new(1, 12);
        state.score = 7;
        state.phase = GamePhase::GameOver;
        state.start_new_game(2);

        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 12);
        assert!(state.field.obstacles.is_empty());
        assert!(state.events.contains(&GameEvent::Swoosh));
    }

    #[test]
    fn test_start_new_game_ignored_while_playing() {
        let mut state = GameState::new(1, 0);
        state.phase = GamePhase::Playing;
        state.score = 3;
        state.start_new_game(2);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 3);
    }

    #[test]
    fn test_game_over_is_idempotent() {
        let mut state = GameState::new(1, 0);
        state.phase = GamePhase::Playing;
        state.game_over();
        state.game_over();
        let hits = state
            .events
            .iter()
            .filter(|e| **e == GameEvent::Hit)
            .count();
        assert_eq!(hits, 1);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_add_point_tracks_best_immediately() {
        let mut state = GameState::new(1, 1);
        state.add_point();
        assert_eq!(state.score, 1);
        assert_eq!(state.best_score, 1);
        assert!(!state.events.iter().any(|e| matches!(e, GameEvent::NewBest(_))));

        state.add_point();
        assert_eq!(state.best_score, 2);
        assert!(state.events.contains(&GameEvent::NewBest(2)));
    }
}
