//! Flappy Fury - a single-screen arcade flier
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `render`: Canvas snapshot painter (wasm)
//! - `audio`: Web Audio cue synthesis (wasm)
//! - `highscores`: Persisted best score and medal tiers
//! - `settings`: Sound preferences

pub mod highscores;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod render;

pub use highscores::{BestScore, Medal};
pub use settings::Settings;

/// Game tuning constants
///
/// All motion constants are per tick, not per second: the tick rate is
/// assumed to track the display refresh (one update per animation frame).
pub mod consts {
    /// Playfield dimensions in logical units (portrait)
    pub const GAME_WIDTH: f32 = 400.0;
    pub const GAME_HEIGHT: f32 = 600.0;
    /// Height of the ground band at the bottom of the playfield
    pub const GROUND_HEIGHT: f32 = 80.0;
    /// Top of the ground band; the playfield floor
    pub const FLOOR_Y: f32 = GAME_HEIGHT - GROUND_HEIGHT;

    /// Player sprite: fixed horizontal position, fixed size
    pub const PLAYER_X: f32 = 80.0;
    pub const PLAYER_WIDTH: f32 = 48.0;
    pub const PLAYER_HEIGHT: f32 = 32.0;

    /// Vertical physics
    pub const GRAVITY: f32 = 0.5;
    /// Flap impulse; overrides the current velocity, never accumulates
    pub const FLAP_IMPULSE: f32 = -8.0;

    /// Tilt derived from velocity: a climb caps at a shallow nose-up,
    /// a dive rotates all the way to vertical. The asymmetry is deliberate.
    pub const ROTATION_SCALE: f32 = 0.04;
    pub const ROTATION_MIN: f32 = -0.5;
    pub const ROTATION_MAX: f32 = std::f32::consts::FRAC_PI_2;

    /// Obstacle geometry and pacing
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const GAP_HEIGHT: f32 = 150.0;
    pub const SCROLL_SPEED: f32 = 2.5;
    pub const SPAWN_INTERVAL_TICKS: u32 = 100;
    /// Margin the gap keeps from the top edge and from the ground band
    pub const SPAWN_MARGIN: f32 = 80.0;
    pub const MIN_GAP_Y: f32 = SPAWN_MARGIN;
    pub const MAX_GAP_Y: f32 = FLOOR_Y - GAP_HEIGHT - SPAWN_MARGIN;
    /// Obstacles are retired once their trailing edge crosses this x
    pub const RETIRE_X: f32 = -20.0;

    /// Collision forgiveness: segment boxes widened, player box shrunk
    pub const COLLISION_PAD: f32 = 5.0;
    pub const HITBOX_SCALE: f32 = 0.6;

    /// Day/night cycle fraction advance per Playing tick (~2 min full cycle)
    pub const DAY_CYCLE_STEP: f32 = 0.0001;

    /// Ready-state idle hover
    pub const HOVER_BOB_RATE: f32 = 0.05;
    pub const HOVER_BOB_AMPLITUDE: f32 = 10.0;
    pub const HOVER_TILT_RATE: f32 = 0.03;
    pub const HOVER_TILT_AMPLITUDE: f32 = 0.1;
}
