//! Per-frame simulation step
//!
//! One call per animation frame. Sub-phases run in a fixed order because
//! later phases read positions written by earlier ones.

use super::ai;
use super::kinematics::{
    advance, bounce_angle, bounce_velocity, circle_rect_overlap, contact_offset, reflect_vertical,
};
use super::state::{Direction, GameEvent, GameState, Score, Side};

/// Vertical direction for held-key movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalDir {
    Up,
    Down,
}

impl VerticalDir {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            VerticalDir::Up => -1.0,
            VerticalDir::Down => 1.0,
        }
    }
}

/// A player input, queued between frames and applied at the tick boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerCommand {
    /// Start moving at paddle speed (persists until `Stop`)
    Move(VerticalDir),
    /// Clear the velocity intent
    Stop,
    /// Center the paddle on an absolute y (pointer/touch)
    SetCenter(f32),
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<PlayerCommand>,
}

impl TickInput {
    pub fn push(&mut self, command: PlayerCommand) {
        self.commands.push(command);
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

/// Receives the running tally whenever a counter changes
pub trait ScoreSink {
    fn score_changed(&mut self, score: Score);
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput, sink: &mut dyn ScoreSink) {
    state.events.clear();
    state.time_ticks += 1;

    // 1. Player paddle
    move_player(state, input);

    // 2. Computer paddle
    let field_height = state.surface.height;
    let ball_y = state.entities.ball.pos.y;
    ai::track(
        &mut state.entities.computer,
        ball_y,
        state.tuning.ease_factor,
        field_height,
    );

    // 3. Ball
    let ball = &mut state.entities.ball;
    ball.pos = advance(ball.pos, ball.vel);

    // 4. Top/bottom walls (mutually exclusive, top wins)
    resolve_walls(state);

    // 5. Player paddle (scores)
    if resolve_paddle_hit(state, Side::Left) {
        state.score.success += 1;
        sink.score_changed(state.score);
    }

    // 6. Computer paddle (not scored)
    resolve_paddle_hit(state, Side::Right);

    // 7. Out events
    check_exits(state, sink);
}

/// Apply queued commands, then the velocity intent unless the pointer
/// placed the paddle this tick
fn move_player(state: &mut GameState, input: &TickInput) {
    let field_height = state.surface.height;
    let speed = state.tuning.paddle_speed;
    let paddle = &mut state.entities.player;

    let mut placed = false;
    for command in &input.commands {
        match *command {
            PlayerCommand::Move(dir) => paddle.dy = dir.sign() * speed,
            PlayerCommand::Stop => paddle.dy = 0.0,
            PlayerCommand::SetCenter(y) => {
                paddle.set_center(y, field_height);
                placed = true;
            }
        }
    }

    if !placed {
        paddle.y += paddle.dy;
    }
    paddle.clamp_to(field_height);
}

fn resolve_walls(state: &mut GameState) {
    let field_height = state.surface.height;
    let ball = &mut state.entities.ball;

    if ball.pos.y - ball.radius < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = reflect_vertical(ball.vel.y);
    } else if ball.pos.y + ball.radius > field_height {
        ball.pos.y = field_height - ball.radius;
        ball.vel.y = reflect_vertical(ball.vel.y);
    } else {
        return;
    }
    state.events.push(GameEvent::WallBounce);
}

/// Bounce the ball off the paddle guarding `side`; true on a hit
fn resolve_paddle_hit(state: &mut GameState, side: Side) -> bool {
    let paddle = match side {
        Side::Left => state.entities.player,
        Side::Right => state.entities.computer,
    };
    let ball = &mut state.entities.ball;

    if !circle_rect_overlap(ball, &paddle, side) {
        return false;
    }

    // Park the ball just clear of the paddle face so it can't stick
    ball.pos.x = match side {
        Side::Left => paddle.x + paddle.width + ball.radius,
        Side::Right => paddle.x - ball.radius,
    };

    let angle = bounce_angle(contact_offset(ball.pos.y, &paddle));
    ball.vel = bounce_velocity(ball.speed, angle, side);

    state.events.push(GameEvent::PaddleHit { side });
    true
}

/// Left exits count against the player and serve right; right exits are
/// free and serve left
fn check_exits(state: &mut GameState, sink: &mut dyn ScoreSink) {
    let ball = state.entities.ball;

    if ball.pos.x - ball.radius < 0.0 {
        state.score.errors += 1;
        sink.score_changed(state.score);
        state.events.push(GameEvent::Miss);
        log::debug!("Miss #{} at y={:.1}", state.score.errors, ball.pos.y);
        state.serve(Some(Direction::Right));
    }

    let ball = state.entities.ball;
    if ball.pos.x + ball.radius > state.surface.width {
        state.serve(Some(Direction::Left));
    }
}
