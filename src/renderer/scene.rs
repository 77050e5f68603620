//! Game state to triangle list
//!
//! Kept free of GPU types so the draw order can be tested headless.

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::{Entities, Surface};

/// Net line width (px)
pub const NET_WIDTH: f32 = 2.0;
/// Net dash length (px)
pub const NET_DASH: f32 = 8.0;
/// Net gap length (px)
pub const NET_GAP: f32 = 16.0;
/// Ball tessellation
pub const BALL_SEGMENTS: u32 = 32;

/// Build this frame's vertices in field pixel coordinates
///
/// Back to front: net, player paddle, computer paddle, ball. The background
/// is the render pass clear color.
pub fn build(entities: &Entities, surface: &Surface, show_net: bool) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(512);

    if show_net {
        vertices.extend(shapes::dashed_vline(
            surface.width / 2.0,
            surface.height,
            NET_WIDTH,
            NET_DASH,
            NET_GAP,
            colors::NET,
        ));
    }

    for (paddle, color) in [
        (&entities.player, colors::PLAYER_PADDLE),
        (&entities.computer, colors::COMPUTER_PADDLE),
    ] {
        vertices.extend(shapes::rect(
            paddle.x,
            paddle.y,
            paddle.width,
            paddle.height,
            color,
        ));
    }

    let ball = &entities.ball;
    vertices.extend(shapes::circle(
        ball.pos,
        ball.radius,
        colors::BALL,
        BALL_SEGMENTS,
    ));

    vertices
}

/// Map a field-pixel position to normalized device coordinates
///
/// Field origin is top-left with y down; NDC is -1..1 with y up.
#[inline]
pub fn to_ndc(position: [f32; 2], surface: &Surface) -> [f32; 2] {
    [
        position[0] / surface.width * 2.0 - 1.0,
        1.0 - position[1] / surface.height * 2.0,
    ]
}
