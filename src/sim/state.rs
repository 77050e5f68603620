//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::clamp_range;
use crate::consts::*;

/// Which side of the field a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human player
    Left,
    /// Computer
    Right,
}

impl Side {
    /// Direction pointing away from this side's edge, into the field
    pub fn outward(self) -> Direction {
        match self {
            Side::Left => Direction::Right,
            Side::Right => Direction::Left,
        }
    }
}

/// Horizontal travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Playing field dimensions, always at least `MIN_SURFACE_DIM` on each axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    /// Build a surface, clamping zero, negative or NaN dimensions
    pub fn new(width: f32, height: f32) -> Self {
        // f32::max returns the non-NaN operand
        Self {
            width: width.max(MIN_SURFACE_DIM),
            height: height.max(MIN_SURFACE_DIM),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A paddle (axis-aligned rectangle, top-left anchored)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge (fixed per side)
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity intent (px/tick)
    pub dy: f32,
}

impl Paddle {
    /// Paddle for `side`, vertically centered on the field
    pub fn new(side: Side, surface: &Surface) -> Self {
        let width = PADDLE_WIDTH_FRAC * surface.width;
        let height = PADDLE_HEIGHT_FRAC * surface.height;
        let offset = PADDLE_EDGE_OFFSET_FRAC * surface.width;
        let x = match side {
            Side::Left => offset,
            Side::Right => surface.width - offset - width,
        };

        Self {
            x,
            y: surface.height / 2.0 - height / 2.0,
            width,
            height,
            dy: 0.0,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Largest valid `y` on a field of `field_height`
    pub fn max_y(&self, field_height: f32) -> f32 {
        field_height - self.height
    }

    /// Pull `y` back into `[0, field_height - height]`
    pub fn clamp_to(&mut self, field_height: f32) {
        self.y = clamp_range(self.y, self.max_y(field_height));
    }

    /// Center the paddle on `center_y`, clamped to the field
    pub fn set_center(&mut self, center_y: f32, field_height: f32) {
        self.y = center_y - self.height / 2.0;
        self.clamp_to(field_height);
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Scalar speed restored on every bounce and serve
    pub speed: f32,
}

impl Ball {
    /// Ball sized for `surface`, resting at its center
    pub fn new(surface: &Surface) -> Self {
        Self {
            pos: surface.center(),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS_FRAC * surface.height,
            speed: (BALL_SPEED_FRAC * surface.width).max(BALL_MIN_SPEED),
        }
    }

    /// Put the ball back at the field center with a fresh velocity
    ///
    /// With no `direction` the horizontal heading is a coin flip. The
    /// vertical component is always random; the horizontal component is
    /// sized so the ball leaves at exactly `speed`.
    pub fn serve(&mut self, surface: &Surface, direction: Option<Direction>, rng: &mut Pcg32) {
        let direction = direction.unwrap_or_else(|| {
            if rng.random_bool(0.5) {
                Direction::Right
            } else {
                Direction::Left
            }
        });
        let dy = rng
            .random_range(-SERVE_DY_RANGE..SERVE_DY_RANGE)
            .clamp(-self.speed, self.speed);
        let dx = (self.speed * self.speed - dy * dy).max(0.0).sqrt();

        self.pos = surface.center();
        self.vel = Vec2::new(dx * direction.sign(), dy);
    }

    pub fn direction(&self) -> Direction {
        if self.vel.x < 0.0 {
            Direction::Left
        } else {
            Direction::Right
        }
    }
}

/// Running tally for the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Player paddle hits
    pub success: u32,
    /// Balls that got past the player
    pub errors: u32,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entities {
    pub player: Paddle,
    pub computer: Paddle,
    pub ball: Ball,
}

/// Build a fresh paddle/paddle/ball set scaled to `surface`
///
/// Paddle geometry depends only on the surface, so calling this twice with
/// the same surface yields identical paddles. The ball heading is random.
pub fn spawn_entities(surface: &Surface, rng: &mut Pcg32) -> Entities {
    let mut ball = Ball::new(surface);
    ball.serve(surface, None, rng);

    Entities {
        player: Paddle::new(Side::Left, surface),
        computer: Paddle::new(Side::Right, surface),
        ball,
    }
}

/// Behaviour knobs the simulation reads every tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Computer paddle smoothing coefficient in (0, 1]
    pub ease_factor: f32,
    /// Player paddle speed while a direction is held (px/tick)
    pub paddle_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ease_factor: COMPUTER_EASE,
            paddle_speed: PADDLE_SPEED,
        }
    }
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom edge
    WallBounce,
    /// Ball bounced off a paddle
    PaddleHit { side: Side },
    /// Ball left through the player's (left) edge
    Miss,
    /// Ball was reset to center
    Served { direction: Direction },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub surface: Surface,
    pub entities: Entities,
    pub score: Score,
    pub tuning: Tuning,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game on a `width` x `height` field
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let surface = Surface::new(width, height);
        let mut rng = Pcg32::seed_from_u64(seed);
        let entities = spawn_entities(&surface, &mut rng);

        Self {
            seed,
            rng,
            surface,
            entities,
            score: Score::default(),
            tuning: Tuning::default(),
            events: Vec::new(),
            time_ticks: 0,
        }
    }

    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Rebuild all entities for a new field size
    ///
    /// Score and RNG stream survive; in-flight motion does not.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.surface = Surface::new(width, height);
        self.entities = spawn_entities(&self.surface, &mut self.rng);
        self.events.clear();
        log::info!(
            "Field resized to {}x{}",
            self.surface.width,
            self.surface.height
        );
    }

    /// Reset the ball to center heading `direction`
    pub fn serve(&mut self, direction: Option<Direction>) {
        self.entities
            .ball
            .serve(&self.surface, direction, &mut self.rng);
        let direction = self.entities.ball.direction();
        log::debug!("Serve {:?}", direction);
        self.events.push(GameEvent::Served { direction });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_clamps_degenerate_sizes() {
        let s = Surface::new(0.0, -50.0);
        assert_eq!(s.width, MIN_SURFACE_DIM);
        assert_eq!(s.height, MIN_SURFACE_DIM);

        let s = Surface::new(f32::NAN, 300.0);
        assert_eq!(s.width, MIN_SURFACE_DIM);
        assert_eq!(s.height, 300.0);
    }

    #[test]
    fn test_paddles_sit_inside_their_edges() {
        let surface = Surface::new(900.0, 550.0);
        let left = Paddle::new(Side::Left, &surface);
        let right = Paddle::new(Side::Right, &surface);

        assert!((left.x - 20.0).abs() < 1e-3);
        assert!((right.x - 868.0).abs() < 1e-3);
        assert!((left.width - 12.0).abs() < 1e-3);
        assert!((left.height - 98.0).abs() < 1e-3);
        assert!((left.center_y() - 275.0).abs() < 1e-3);
        assert_eq!(left.y, right.y);
    }

    #[test]
    fn test_ball_speed_has_a_floor() {
        let big = Ball::new(&Surface::new(900.0, 550.0));
        assert!((big.speed - 7.0).abs() < 1e-3);

        let tiny = Ball::new(&Surface::new(100.0, 60.0));
        assert_eq!(tiny.speed, BALL_MIN_SPEED);
    }

    #[test]
    fn test_serve_respects_direction_and_speed() {
        let surface = Surface::new(900.0, 550.0);
        let mut rng = Pcg32::seed_from_u64(7);
        let mut ball = Ball::new(&surface);

        for _ in 0..50 {
            ball.serve(&surface, Some(Direction::Right), &mut rng);
            assert_eq!(ball.pos, surface.center());
            assert!(ball.vel.x > 0.0);
            assert!(ball.vel.y >= -SERVE_DY_RANGE && ball.vel.y < SERVE_DY_RANGE);
            assert!((ball.vel.length() - ball.speed).abs() < 1e-4);

            ball.serve(&surface, Some(Direction::Left), &mut rng);
            assert!(ball.vel.x < 0.0);
        }
    }

    #[test]
    fn test_random_serve_goes_both_ways() {
        let surface = Surface::new(900.0, 550.0);
        let mut rng = Pcg32::seed_from_u64(42);
        let mut ball = Ball::new(&surface);

        let mut lefts = 0;
        let mut rights = 0;
        for _ in 0..100 {
            ball.serve(&surface, None, &mut rng);
            match ball.direction() {
                Direction::Left => lefts += 1,
                Direction::Right => rights += 1,
            }
        }
        assert!(lefts > 0 && rights > 0);
    }

    #[test]
    fn test_spawn_is_idempotent_for_paddles() {
        let surface = Surface::new(900.0, 550.0);
        let mut rng = Pcg32::seed_from_u64(1);
        let a = spawn_entities(&surface, &mut rng);
        let b = spawn_entities(&surface, &mut rng);

        assert_eq!(a.player, b.player);
        assert_eq!(a.computer, b.computer);
        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.ball.radius, b.ball.radius);
        assert_eq!(a.ball.speed, b.ball.speed);
    }

    #[test]
    fn test_resize_scales_entities_proportionally() {
        let mut state = GameState::new(900.0, 550.0, 3);
        state.score.success = 4;
        let before = state.entities;

        state.resize(450.0, 275.0);
        let after = state.entities;

        for (b, a) in [
            (before.player, after.player),
            (before.computer, after.computer),
        ] {
            assert_eq!(a.x, b.x * 0.5);
            assert_eq!(a.y, b.y * 0.5);
            assert_eq!(a.width, b.width * 0.5);
            assert_eq!(a.height, b.height * 0.5);
            assert_eq!(a.dy, 0.0);
        }
        assert_eq!(after.ball.pos, before.ball.pos * 0.5);
        assert_eq!(after.ball.radius, before.ball.radius * 0.5);
        assert_eq!(state.score.success, 4, "score survives a resize");
    }

    #[test]
    fn test_resize_clears_player_intent() {
        let mut state = GameState::new(900.0, 550.0, 3);
        state.entities.player.dy = 7.0;
        state.entities.player.y = 0.0;

        state.resize(900.0, 550.0);
        assert_eq!(state.entities.player.dy, 0.0);
        assert!((state.entities.player.center_y() - 275.0).abs() < 1e-3);
    }

    #[test]
    fn test_paddle_set_center_clamps() {
        let surface = Surface::new(900.0, 550.0);
        let mut paddle = Paddle::new(Side::Left, &surface);

        paddle.set_center(-100.0, surface.height);
        assert_eq!(paddle.y, 0.0);

        paddle.set_center(10_000.0, surface.height);
        assert_eq!(paddle.y, paddle.max_y(surface.height));

        paddle.set_center(300.0, surface.height);
        assert!((paddle.center_y() - 300.0).abs() < 1e-3);
    }
}
