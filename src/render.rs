//! Canvas rendering of the simulation snapshot
//!
//! A pure read of `GameState`: gameplay state is never mutated here. The only
//! mutable piece is the renderer's own cosmetic ground-scroll accumulator.

use web_sys::CanvasRenderingContext2d;

use crate::consts::*;
use crate::sim::{GamePhase, GameState, Obstacle, ObstacleVariant};

type Rgb = (u8, u8, u8);

/// (top, bottom) sky colors per day phase
const DAWN: (Rgb, Rgb) = ((0xFF, 0x6B, 0x6B), (0xFF, 0xE6, 0x6D));
const DAY: (Rgb, Rgb) = ((0x87, 0xCE, 0xEB), (0xB0, 0xE0, 0xE6));
const DUSK: (Rgb, Rgb) = ((0xFF, 0x8C, 0x42), (0xFF, 0xD7, 0x00));
const NIGHT: (Rgb, Rgb) = ((0x0D, 0x1B, 0x2A), (0x1B, 0x26, 0x3B));

/// Ground tile pitch for the scroll pattern
const GROUND_TILE: f32 = 24.0;

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
    ground_offset: f32,
}

impl Renderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            ground_offset: 0.0,
        }
    }

    /// Paint one frame from the current snapshot
    pub fn draw(&mut self, state: &GameState) {
        self.draw_sky(state.day_progress);
        for obs in &state.field.obstacles {
            self.draw_obstacle(obs);
        }
        self.draw_ground(state.phase);
        if state.phase != GamePhase::Menu {
            self.draw_player(state);
        }
        if state.phase == GamePhase::Ready {
            self.draw_ready_prompt(state.time_ticks);
        }
    }

    fn draw_sky(&self, day_progress: f32) {
        let (top, bottom) = sky_colors(day_progress);
        let gradient = self
            .ctx
            .create_linear_gradient(0.0, 0.0, 0.0, GAME_HEIGHT as f64);
        let _ = gradient.add_color_stop(0.0, &css(top));
        let _ = gradient.add_color_stop(1.0, &css(bottom));
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx
            .fill_rect(0.0, 0.0, GAME_WIDTH as f64, GAME_HEIGHT as f64);
    }

    fn draw_obstacle(&self, obs: &Obstacle) {
        let (body, edge) = match obs.variant {
            ObstacleVariant::Brick => ("#C84C0C", "#8B2500"),
            ObstacleVariant::Pipe => ("#5BA35B", "#3D7A3D"),
        };
        let x = obs.x as f64;
        let w = OBSTACLE_WIDTH as f64;
        let cap = 20.0;
        let gap_top = obs.gap_y as f64;
        let gap_bottom = (obs.gap_y + GAP_HEIGHT) as f64;

        // Top segment, cap flush with the gap
        self.ctx.set_fill_style_str(body);
        self.ctx.fill_rect(x, 0.0, w, gap_top);
        self.ctx.set_fill_style_str(edge);
        self.ctx.fill_rect(x - 4.0, gap_top - cap, w + 8.0, cap);

        // Bottom segment
        self.ctx.set_fill_style_str(body);
        self.ctx
            .fill_rect(x, gap_bottom, w, FLOOR_Y as f64 - gap_bottom);
        self.ctx.set_fill_style_str(edge);
        self.ctx.fill_rect(x - 4.0, gap_bottom, w + 8.0, cap);
    }

    fn draw_ground(&mut self, phase: GamePhase) {
        if matches!(phase, GamePhase::Ready | GamePhase::Playing) {
            self.ground_offset = (self.ground_offset + SCROLL_SPEED) % GROUND_TILE;
        }

        let floor = FLOOR_Y as f64;

        // Grass strip
        self.ctx.set_fill_style_str("#5BA35B");
        self.ctx.fill_rect(0.0, floor, GAME_WIDTH as f64, 20.0);

        // Dirt body
        self.ctx.set_fill_style_str("#C4A35A");
        self.ctx
            .fill_rect(0.0, floor + 20.0, GAME_WIDTH as f64, GROUND_HEIGHT as f64 - 20.0);

        // Scrolling tile seams
        self.ctx.set_fill_style_str("#A68B4B");
        let mut x = -self.ground_offset as f64;
        while x < GAME_WIDTH as f64 {
            self.ctx.fill_rect(x, floor + 20.0, 4.0, GROUND_HEIGHT as f64 - 20.0);
            x += GROUND_TILE as f64;
        }

        // Top border
        self.ctx.set_fill_style_str("#3D5A3D");
        self.ctx.fill_rect(0.0, floor, GAME_WIDTH as f64, 3.0);
    }

    fn draw_player(&self, state: &GameState) {
        let ctx = &self.ctx;
        ctx.save();
        let _ = ctx.translate(state.player.pos.x as f64, state.player.pos.y as f64);
        let _ = ctx.rotate(state.player.rotation as f64);

        // Fuselage silhouette
        ctx.set_fill_style_str("#3d3d3d");
        ctx.begin_path();
        ctx.move_to(24.0, 0.0);
        ctx.line_to(10.0, -8.0);
        ctx.line_to(-20.0, -6.0);
        ctx.line_to(-24.0, 0.0);
        ctx.line_to(-20.0, 6.0);
        ctx.line_to(10.0, 8.0);
        ctx.close_path();
        ctx.fill();

        // Wings
        ctx.set_fill_style_str("#4a4a4a");
        ctx.begin_path();
        ctx.move_to(-5.0, -6.0);
        ctx.line_to(-15.0, -14.0);
        ctx.line_to(-20.0, -12.0);
        ctx.line_to(-18.0, -6.0);
        ctx.close_path();
        ctx.fill();
        ctx.begin_path();
        ctx.move_to(-5.0, 6.0);
        ctx.line_to(-15.0, 14.0);
        ctx.line_to(-20.0, 12.0);
        ctx.line_to(-18.0, 6.0);
        ctx.close_path();
        ctx.fill();

        // Cockpit
        ctx.set_fill_style_str("#1a1a1a");
        ctx.begin_path();
        ctx.move_to(16.0, 0.0);
        ctx.line_to(8.0, -4.0);
        ctx.line_to(-4.0, -4.0);
        ctx.line_to(-4.0, 4.0);
        ctx.line_to(8.0, 4.0);
        ctx.close_path();
        ctx.fill();

        ctx.restore();
    }

    fn draw_ready_prompt(&self, ticks: u64) {
        self.ctx.set_fill_style_str("rgba(0, 0, 0, 0.4)");
        self.ctx.set_font("16px monospace");
        self.ctx.set_text_align("center");
        let bob = ((ticks as f64) * 0.1).sin() * 5.0;
        let _ = self.ctx.fill_text(
            "TAP TO FLY",
            GAME_WIDTH as f64 / 2.0,
            GAME_HEIGHT as f64 / 2.0 + 80.0 + bob,
        );
        self.ctx.set_text_align("left");
    }
}

fn sky_colors(day_progress: f32) -> (Rgb, Rgb) {
    let p = day_progress;
    let (from, to, t) = if p < 0.15 {
        (DAWN, DAY, p / 0.15)
    } else if p < 0.4 {
        (DAY, DAY, 0.0)
    } else if p < 0.55 {
        (DAY, DUSK, (p - 0.4) / 0.15)
    } else if p < 0.7 {
        (DUSK, NIGHT, (p - 0.55) / 0.15)
    } else if p < 0.9 {
        (NIGHT, NIGHT, 0.0)
    } else {
        (NIGHT, DAWN, (p - 0.9) / 0.1)
    };
    (
        lerp_rgb(from.0, to.0, t),
        lerp_rgb(from.1, to.1, t),
    )
}

fn lerp_rgb(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let lerp = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    (lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

fn css(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.0, rgb.1, rgb.2)
}
