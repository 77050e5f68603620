//! Ball kinematics and paddle collision math
//!
//! Pure functions, no state. One tick is one call to `advance`; there is no
//! delta-time scaling, the frame callback is the clock.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};
use crate::consts::MAX_BOUNCE_ANGLE;

/// Euler step: position after one tick at `velocity`
#[inline]
pub fn advance(position: Vec2, velocity: Vec2) -> Vec2 {
    position + velocity
}

/// Flip vertical velocity on top/bottom wall contact
#[inline]
pub fn reflect_vertical(dy: f32) -> f32 {
    -dy
}

/// Ball-vs-paddle overlap test
///
/// This is an edge/point test, not a true circle-rectangle distance check.
/// On x, the ball's leading edge must be past the paddle's face while the
/// ball's center is still short of the paddle's back edge. On y, the ball's
/// center must lie strictly between the paddle's top and bottom.
///
/// `side` is the side of the field the paddle guards: a `Left` paddle faces
/// right, a `Right` paddle faces left.
pub fn circle_rect_overlap(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let within_x = match side {
        Side::Left => {
            ball.pos.x - ball.radius < paddle.x + paddle.width && ball.pos.x > paddle.x
        }
        Side::Right => {
            ball.pos.x + ball.radius > paddle.x && ball.pos.x < paddle.x + paddle.width
        }
    };

    within_x && ball.pos.y > paddle.y && ball.pos.y < paddle.y + paddle.height
}

/// Where on the paddle the ball struck, normalized by half-height
///
/// 0 is dead center, -1 the top edge, 1 the bottom edge.
pub fn contact_offset(ball_y: f32, paddle: &Paddle) -> f32 {
    let half = paddle.height / 2.0;
    (ball_y - paddle.center_y()) / half
}

/// Deflection angle for a given contact offset fraction
#[inline]
pub fn bounce_angle(contact_offset_fraction: f32) -> f32 {
    contact_offset_fraction * MAX_BOUNCE_ANGLE
}

/// Outgoing velocity after striking the paddle guarding `side`
///
/// The magnitude is always `speed`. The horizontal sign is forced away from
/// the paddle, so the ball can never continue into the paddle it just left.
pub fn bounce_velocity(speed: f32, angle: f32, side: Side) -> Vec2 {
    let dx = (speed * angle.cos()).abs();
    let dy = speed * angle.sin();
    Vec2::new(dx * side.outward().sign(), dy)
}
