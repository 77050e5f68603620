//! WebGPU rendering module
//!
//! Flat-colored triangle pipeline. `scene` turns game state into vertices,
//! `pipeline` owns the GPU side.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
