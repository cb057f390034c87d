//! Per-frame simulation tick
//!
//! One call per scheduled frame. Update order is fixed: events cleared,
//! elapsed time, day cycle, player, obstacle field, collisions. Rendering
//! happens after the tick as a pure read of the state.

use super::collision::check_collision;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (one-shot flags, cleared by the caller)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap impulse (Space/ArrowUp/click/tap). Honored in Ready and Playing;
    /// the first flap of a run is what moves Ready into Playing.
    pub flap: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    if input.flap {
        match state.phase {
            GamePhase::Ready => {
                state.phase = GamePhase::Playing;
                state.player.flap();
                state.events.push(GameEvent::Flap);
            }
            GamePhase::Playing => {
                state.player.flap();
                state.events.push(GameEvent::Flap);
            }
            // No transition from Menu or GameOver on flap; Ready is mandatory
            GamePhase::Menu | GamePhase::GameOver => {}
        }
    }

    match state.phase {
        GamePhase::Playing => {
            // Day/night advances only during live play
            state.day_progress = (state.day_progress + DAY_CYCLE_STEP) % 1.0;

            if state.player.apply_gravity() {
                state.game_over();
                return;
            }

            let cleared = state.field.tick(state.player.pos.x);
            for _ in 0..cleared {
                state.add_point();
            }

            if check_collision(&state.player, &state.field.obstacles) {
                state.game_over();
            }
        }
        GamePhase::Ready => {
            state.player.hover(state.time_ticks);
        }
        GamePhase::Menu | GamePhase::GameOver => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Obstacle, ObstacleVariant};

    const FLAP: TickInput = TickInput { flap: true };
    const COAST: TickInput = TickInput { flap: false };

    /// Fresh session ticked into Playing with an empty field
    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed, 0);
        state.start_new_game(seed);
        tick(&mut state, &FLAP);
        assert_eq!(state.phase, GamePhase::Playing);
        state
    }

    fn obstacle_at(x: f32, gap_y: f32) -> Obstacle {
        Obstacle {
            x,
            gap_y,
            passed: false,
            variant: ObstacleVariant::Brick,
        }
    }

    #[test]
    fn test_menu_ignores_flap() {
        let mut state = GameState::new(1, 0);
        let y0 = state.player.pos.y;
        tick(&mut state, &FLAP);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.player.pos.y, y0);
    }

    #[test]
    fn test_ready_holds_until_first_flap() {
        let mut state = GameState::new(1, 0);
        state.start_new_game(1);

        for _ in 0..50 {
            tick(&mut state, &COAST);
        }
        assert_eq!(state.phase, GamePhase::Ready);
        // Hover idles near center, never under gravity
        assert!((state.player.pos.y - GAME_HEIGHT / 2.0).abs() <= HOVER_BOB_AMPLITUDE);
        // No obstacles spawn outside Playing
        assert!(state.field.obstacles.is_empty());

        tick(&mut state, &FLAP);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.events.contains(&GameEvent::Flap));
    }

    #[test]
    fn test_game_over_ignores_flap() {
        let mut state = playing_state(1);
        state.game_over();
        tick(&mut state, &FLAP);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_free_fall_reaches_ground_with_zero_score() {
        let mut state = playing_state(5);
        let mut prev_y = state.player.pos.y;
        let mut prev_vel = state.player.vel;

        let mut ticks = 0;
        while state.phase == GamePhase::Playing {
            tick(&mut state, &COAST);
            ticks += 1;
            assert!(ticks < 2_000, "free fall never terminated");

            if state.phase == GamePhase::Playing {
                // Plain gravity integration: v += g, y += v
                assert!((state.player.vel - (prev_vel + GRAVITY)).abs() < 1e-4);
                assert!((state.player.pos.y - (prev_y + state.player.vel)).abs() < 1e-4);
                prev_y = state.player.pos.y;
                prev_vel = state.player.vel;
            }
        }

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, 0);
        assert!((state.player.pos.y + PLAYER_HEIGHT / 2.0 - FLOOR_Y).abs() < 1e-4);
    }

    #[test]
    fn test_ground_transition_fires_once() {
        let mut state = playing_state(5);
        while state.phase == GamePhase::Playing {
            tick(&mut state, &COAST);
        }
        assert!(state.events.contains(&GameEvent::Hit));

        // Further ticks re-check nothing and emit nothing
        for _ in 0..10 {
            tick(&mut state, &COAST);
            assert!(state.events.is_empty());
            assert_eq!(state.phase, GamePhase::GameOver);
        }
    }

    #[test]
    fn test_flap_through_centered_gap_scores_once() {
        let mut state = playing_state(2);
        // Obstacle straddling the player, gap centered on them, trailing
        // edge about to cross the player's x
        let gap_y = state.player.pos.y - GAP_HEIGHT / 2.0;
        state
            .field
            .obstacles
            .push(obstacle_at(PLAYER_X - OBSTACLE_WIDTH + 2.0, gap_y));

        tick(&mut state, &FLAP);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 1);
        assert!(state.events.contains(&GameEvent::Scored(1)));

        // Coast until the obstacle retires; the passed flag keeps the score at 1
        while !state.field.obstacles.is_empty() && state.phase == GamePhase::Playing {
            tick(&mut state, &COAST);
        }
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_first_hit_wins_over_later_obstacles() {
        let mut state = playing_state(3);
        // Player drifts into the first obstacle's top segment; the second
        // obstacle is right behind it and would also overlap eventually
        state.player.pos.y = 280.0;
        state.field.obstacles.push(obstacle_at(PLAYER_X - 10.0, 290.0));
        state
            .field
            .obstacles
            .push(obstacle_at(PLAYER_X - 10.0 + OBSTACLE_WIDTH * 2.0, 290.0));

        tick(&mut state, &COAST);
        assert_eq!(state.phase, GamePhase::GameOver);
        let hits = state
            .events
            .iter()
            .filter(|e| **e == GameEvent::Hit)
            .count();
        assert_eq!(hits, 1);
        // The trailing obstacle was never scored or consumed
        assert!(!state.field.obstacles[1].passed);
    }

    #[test]
    fn test_day_cycle_advances_only_while_playing() {
        let mut state = GameState::new(4, 0);
        state.start_new_game(4);
        for _ in 0..10 {
            tick(&mut state, &COAST);
        }
        assert_eq!(state.day_progress, 0.0);

        tick(&mut state, &FLAP);
        assert!((state.day_progress - DAY_CYCLE_STEP).abs() < 1e-9);
    }

    #[test]
    fn test_score_exceeding_best_emits_new_best() {
        let mut state = playing_state(6);
        state.best_score = 0;
        let gap_y = state.player.pos.y - GAP_HEIGHT / 2.0;
        state
            .field
            .obstacles
            .push(obstacle_at(PLAYER_X - OBSTACLE_WIDTH + 2.0, gap_y));

        tick(&mut state, &FLAP);
        assert_eq!(state.best_score, 1);
        assert!(state.events.contains(&GameEvent::NewBest(1)));
    }

    #[test]
    fn test_determinism() {
        // Same seed, same scripted inputs: identical trajectories
        let script = |t: u64| TickInput { flap: t % 30 == 0 };

        let mut a = GameState::new(1234, 0);
        let mut b = GameState::new(1234, 0);
        a.start_new_game(777);
        b.start_new_game(777);

        for t in 0..1_500u64 {
            let input = script(t);
            tick(&mut a, &input);
            tick(&mut b, &input);
        }

        assert_eq!(a.phase, b.phase);
        assert_eq!(a.score, b.score);
        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.player.pos.y, b.player.pos.y);
        assert_eq!(a.player.vel, b.player.vel);
        assert_eq!(a.field.obstacles.len(), b.field.obstacles.len());
        for (oa, ob) in a.field.obstacles.iter().zip(&b.field.obstacles) {
            assert_eq!(oa.x, ob.x);
            assert_eq!(oa.gap_y, ob.gap_y);
            assert_eq!(oa.passed, ob.passed);
            assert_eq!(oa.variant, ob.variant);
        }
    }
}
