//! Axis-aligned collision between the player and obstacle segments
//!
//! Forgiveness tuning: each obstacle's segment boxes are widened a few units
//! past the sprite, while the player's box is shrunk to a fraction of its
//! silhouette, so near-misses against the visual edges stay misses.

use glam::Vec2;

use super::state::{Obstacle, Player};
use crate::consts::*;

/// Axis-aligned box, top-left anchored (screen coordinates, +y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            w,
            h,
        }
    }

    /// Standard AABB overlap test
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.min.x + other.w
            && self.min.x + self.w > other.min.x
            && self.min.y < other.min.y + other.h
            && self.min.y + self.h > other.min.y
    }
}

/// The player's collision box: `HITBOX_SCALE` of the sprite, centered on it
pub fn player_hitbox(player: &Player) -> Aabb {
    let w = PLAYER_WIDTH * HITBOX_SCALE;
    let h = PLAYER_HEIGHT * HITBOX_SCALE;
    Aabb::new(player.pos.x - w / 2.0, player.pos.y - h / 2.0, w, h)
}

/// The two solid segments of an obstacle, widened by the forgiveness pad.
/// Top spans the screen top down to the gap; bottom spans gap end to floor.
pub fn obstacle_segments(obs: &Obstacle) -> (Aabb, Aabb) {
    let x = obs.x - COLLISION_PAD;
    let w = OBSTACLE_WIDTH + 2.0 * COLLISION_PAD;
    let top = Aabb::new(x, 0.0, w, obs.gap_y);
    let bottom_y = obs.gap_y + GAP_HEIGHT;
    let bottom = Aabb::new(x, bottom_y, w, FLOOR_Y - bottom_y);
    (top, bottom)
}

/// Scan the field against the player's shrunk box. First hit wins; any
/// overlap with either segment of any obstacle is terminal.
pub fn check_collision(player: &Player, obstacles: &[Obstacle]) -> bool {
    let hitbox = player_hitbox(player);
    for obs in obstacles {
        let (top, bottom) = obstacle_segments(obs);
        if hitbox.overlaps(&top) || hitbox.overlaps(&bottom) {
            return true;
        }
    }
    false
}
