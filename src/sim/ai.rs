//! Computer paddle controller
//!
//! Exponential smoothing toward the ball's height. No prediction and no
//! randomness: the paddle position is a pure function of ball history.

use super::state::Paddle;

/// Ease the paddle one tick toward centering on `ball_y`
///
/// Moves a fixed fraction (`ease_factor`) of the remaining distance, then
/// clamps to the field. Lower factors give a laggier, more beatable paddle.
pub fn track(paddle: &mut Paddle, ball_y: f32, ease_factor: f32, field_height: f32) {
    let target = ball_y - paddle.height / 2.0;
    paddle.y += (target - paddle.y) * ease_factor;
    paddle.clamp_to(field_height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Side, Surface};
    use proptest::prelude::*;

    fn computer_paddle() -> (Paddle, Surface) {
        let surface = Surface::new(900.0, 550.0);
        (Paddle::new(Side::Right, &surface), surface)
    }

    #[test]
    fn test_moves_fraction_of_gap() {
        let (mut paddle, surface) = computer_paddle();
        paddle.y = 100.0;
        let ball_y = 100.0 + paddle.height / 2.0 + 100.0; // target is 200

        track(&mut paddle, ball_y, 0.11, surface.height);
        assert!((paddle.y - 111.0).abs() < 1e-3);
    }

    #[test]
    fn test_never_snaps() {
        let (mut paddle, surface) = computer_paddle();
        paddle.y = 0.0;
        let ball_y = 400.0;
        let target = ball_y - paddle.height / 2.0;

        track(&mut paddle, ball_y, 0.11, surface.height);
        assert!(paddle.y > 0.0 && paddle.y < target);
    }

    #[test]
    fn test_converges_on_still_ball() {
        let (mut paddle, surface) = computer_paddle();
        paddle.y = 0.0;
        let ball_y = 300.0;

        for _ in 0..300 {
            track(&mut paddle, ball_y, 0.11, surface.height);
        }
        assert!((paddle.center_y() - ball_y).abs() < 0.01);
    }

    #[test]
    fn test_clamps_at_field_edges() {
        let (mut paddle, surface) = computer_paddle();

        for _ in 0..200 {
            track(&mut paddle, -500.0, 0.5, surface.height);
        }
        assert_eq!(paddle.y, 0.0);

        for _ in 0..200 {
            track(&mut paddle, 5_000.0, 0.5, surface.height);
        }
        assert_eq!(paddle.y, paddle.max_y(surface.height));
    }

    proptest! {
        #[test]
        fn stays_in_range(
            start in 0.0f32..452.0,
            ball_y in -1000.0f32..2000.0,
            ease in 0.01f32..1.0,
        ) {
            let (mut paddle, surface) = computer_paddle();
            paddle.y = start;
            track(&mut paddle, ball_y, ease, surface.height);
            prop_assert!(paddle.y >= 0.0);
            prop_assert!(paddle.y <= paddle.max_y(surface.height));
        }
    }
}
