//! Canvas Pong - player vs. computer paddle game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, AI, scoring)
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Data-driven tuning loaded at startup

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
///
/// Sizes are fractions of the playing field so a resize rescales
/// everything proportionally. The reference field is 900x550.
pub mod consts {
    /// Paddle width as a fraction of field width
    pub const PADDLE_WIDTH_FRAC: f32 = 12.0 / 900.0;
    /// Paddle height as a fraction of field height
    pub const PADDLE_HEIGHT_FRAC: f32 = 98.0 / 550.0;
    /// Gap between a paddle and its field edge, as a fraction of width
    pub const PADDLE_EDGE_OFFSET_FRAC: f32 = 20.0 / 900.0;

    /// Ball radius as a fraction of field height
    pub const BALL_RADIUS_FRAC: f32 = 12.0 / 550.0;
    /// Ball speed (px/tick) as a fraction of field width
    pub const BALL_SPEED_FRAC: f32 = 7.0 / 900.0;
    /// Slowest ball allowed, regardless of field size (px/tick)
    pub const BALL_MIN_SPEED: f32 = 4.0;
    /// Serve vertical velocity is drawn from [-SERVE_DY_RANGE, SERVE_DY_RANGE)
    pub const SERVE_DY_RANGE: f32 = 2.0;

    /// Maximum bounce deflection off a paddle edge (radians)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// Player paddle speed while an arrow key is held (px/tick)
    pub const PADDLE_SPEED: f32 = 7.0;
    /// Computer paddle smoothing coefficient
    pub const COMPUTER_EASE: f32 = 0.11;

    /// Smallest accepted field dimension (px)
    pub const MIN_SURFACE_DIM: f32 = 32.0;
}

/// Clamp `value` into `[0, max]`, treating a negative `max` as 0.
///
/// Unlike `f32::clamp` this never panics, which matters when a tiny
/// field makes the upper bound collapse.
#[inline]
pub fn clamp_range(value: f32, max: f32) -> f32 {
    value.min(max).max(0.0)
}
