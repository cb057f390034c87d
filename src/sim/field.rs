//! Obstacle spawning, scrolling, and pass-through scoring
//!
//! The field owns its seeded RNG, so a fixed seed replays the exact same
//! obstacle sequence. Obstacles spawn in increasing x order and only ever
//! move left, which keeps the list sorted and retirement FIFO.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Obstacle, ObstacleVariant};
use crate::consts::*;

/// The stream of gap obstacles
#[derive(Debug, Clone)]
pub struct ObstacleField {
    /// Active obstacles, spawn order = left-to-right screen order
    pub obstacles: Vec<Obstacle>,
    spawn_timer: u32,
    rng: Pcg32,
}

impl ObstacleField {
    pub fn new(seed: u64) -> Self {
        Self {
            obstacles: Vec::new(),
            spawn_timer: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Drop all obstacles and re-seed the RNG for a new run
    pub fn reset(&mut self, seed: u64) {
        self.obstacles.clear();
        self.spawn_timer = 0;
        self.rng = Pcg32::seed_from_u64(seed);
    }

    /// Advance the field one tick: maybe spawn, scroll, score, retire.
    /// Returns how many obstacles the player cleared this tick.
    pub fn tick(&mut self, player_x: f32) -> u32 {
        self.spawn_timer += 1;
        if self.spawn_timer >= SPAWN_INTERVAL_TICKS {
            self.spawn();
            self.spawn_timer = 0;
        }

        let mut cleared = 0;
        for obs in &mut self.obstacles {
            obs.x -= SCROLL_SPEED;
            if !obs.passed && obs.trailing_edge() < player_x {
                obs.passed = true;
                cleared += 1;
            }
        }

        // Fully past the left edge
        self.obstacles
            .retain(|o| o.trailing_edge() >= RETIRE_X);

        cleared
    }

    fn spawn(&mut self) {
        let gap_y = self.rng.random_range(MIN_GAP_Y..=MAX_GAP_Y);
        let variant = if self.rng.random_bool(0.5) {
            ObstacleVariant::Brick
        } else {
            ObstacleVariant::Pipe
        };
        self.obstacles.push(Obstacle {
            x: GAME_WIDTH + OBSTACLE_WIDTH,
            gap_y,
            passed: false,
            variant,
        });
    }
}
