//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame callback, no wall clock
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ai;
pub mod kinematics;
pub mod state;
pub mod tick;

pub use kinematics::{
    advance, bounce_angle, bounce_velocity, circle_rect_overlap, contact_offset, reflect_vertical,
};
pub use state::{
    Ball, Direction, Entities, GameEvent, GameState, Paddle, Score, Side, Surface, Tuning,
    spawn_entities,
};
pub use tick::{PlayerCommand, ScoreSink, TickInput, VerticalDir, tick};
