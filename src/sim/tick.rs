//! Per-frame simulation tick
//!
//! One discrete step of the whole game. Order matters: the scheduled
//! respawn fires first, paddles move before the ball, and the miss check
//! runs before the paddle check so a point and a return can never be
//! credited from the same tick.

use super::collision::paddle_bounce_dx;
use super::state::{GameState, PendingReset};
use crate::config::SimConfig;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Player control signal in `[-1, 1]`; `None` means no input (0)
    pub control: Option<f32>,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, config: &SimConfig, input: &TickInput) {
    state.time_ticks += 1;

    // Execute a due respawn before anything else moves
    if let Some(reset) = state.pending_reset
        && reset.fire_at_tick <= state.time_ticks
    {
        state.ball.respawn(config, reset.serve_dy);
        state.pending_reset = None;
        log::debug!(
            "ball respawned at tick {} (serve dy {})",
            state.time_ticks,
            reset.serve_dy
        );
    }

    // Stale or absent input reads as "stay put", never as a fault
    let control = input.control.unwrap_or(0.0);
    let control = if control.is_finite() {
        control.clamp(-1.0, 1.0)
    } else {
        0.0
    };
    state.player.dx = config.player_max_speed * control;
    state.opponent.dx = state
        .ai
        .velocity(&state.opponent.rect, &state.ball.rect, config.opponent_max_speed);

    move_paddles(state, config);
    move_ball(state, config);
}

/// Move both paddles by their current velocity, clamped to the playfield
fn move_paddles(state: &mut GameState, config: &SimConfig) {
    let min_x = config.paddle_min_x();
    let max_x = config.paddle_max_x();

    state.opponent.rect.pos.x = (state.opponent.rect.pos.x + state.opponent.dx).clamp(min_x, max_x);
    state.player.rect.pos.x = (state.player.rect.pos.x + state.player.dx).clamp(min_x, max_x);
}

/// Move the ball and resolve walls, misses and paddle hits, in that order
fn move_ball(state: &mut GameState, config: &SimConfig) {
    // Inert between a miss and its scheduled respawn
    if state.ball.resetting {
        return;
    }

    state.ball.rect.pos += state.ball.vel;

    check_wall_collision(state, config);
    check_miss(state, config);
    check_paddle_hit(state, config);
}

/// Reflect the ball off the side walls (x axis only, never vertically)
fn check_wall_collision(state: &mut GameState, config: &SimConfig) {
    let ball = &mut state.ball;
    let left_wall = config.wall_margin;
    let right_wall = config.field_width - config.wall_margin;

    if ball.rect.left() < left_wall {
        ball.rect.pos.x = left_wall;
        ball.vel.x = -ball.vel.x;
    } else if ball.rect.right() > right_wall {
        ball.rect.pos.x = right_wall - ball.rect.size.x;
        ball.vel.x = -ball.vel.x;
    }
}

/// Score a point if the ball left the field vertically
///
/// Exactly one counter moves per miss; the `resetting` flag holds the
/// ball inert until the scheduled respawn, so a pending point can never
/// score twice. The respawn serves toward the side that just lost.
fn check_miss(state: &mut GameState, config: &SimConfig) {
    if state.ball.resetting {
        return;
    }
    let out_top = state.ball.rect.top() < 0.0;
    let out_bottom = state.ball.rect.top() > config.field_height;
    if !out_top && !out_bottom {
        return;
    }

    state.ball.resetting = true;
    let serve_dy = if out_top {
        // Opponent failed to defend the top
        state.player_score += 1;
        -config.ball_speed
    } else {
        state.opponent_score += 1;
        config.ball_speed
    };
    state.ai.retarget(&mut state.rng, config.paddle_width);
    state.pending_reset = Some(PendingReset {
        fire_at_tick: state.time_ticks + config.reset_delay_ticks,
        serve_dy,
    });
    log::debug!(
        "point at tick {}: opponent {} - player {}",
        state.time_ticks,
        state.opponent_score,
        state.player_score
    );
}

/// Bounce the ball off a paddle it overlaps
///
/// Opponent first; at most one paddle is credited per tick. The ball is
/// repositioned flush against the paddle's far edge so the same contact
/// cannot trigger again next tick.
fn check_paddle_hit(state: &mut GameState, config: &SimConfig) {
    let ball = &mut state.ball;
    if ball.resetting {
        return;
    }

    if ball.rect.overlaps(&state.opponent.rect) {
        ball.vel.x = paddle_bounce_dx(&ball.rect, &state.opponent.rect, config.ball_speed);
        ball.vel.y = -ball.vel.y;
        ball.rect.pos.y = state.opponent.rect.bottom();
        // Fresh aim error for the next exchange
        state.ai.retarget(&mut state.rng, config.paddle_width);
    } else if ball.rect.overlaps(&state.player.rect) {
        ball.vel.x = paddle_bounce_dx(&ball.rect, &state.player.rect, config.ball_speed);
        ball.vel.y = -ball.vel.y;
        ball.rect.pos.y = state.player.rect.top() - ball.rect.size.y;
    }
}
