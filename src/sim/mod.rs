//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Logical tick counters only, no wall clock
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod state;
pub mod tick;

pub use collision::{Aabb, check_collision, obstacle_segments, player_hitbox};
pub use field::ObstacleField;
pub use state::{GameEvent, GamePhase, GameState, Obstacle, ObstacleVariant, Player};
pub use tick::{TickInput, tick};
