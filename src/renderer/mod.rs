//! WebGPU rendering module
//!
//! Snapshot → draw list (`layout`) → triangles (`shapes`) → GPU (`pipeline`).

pub mod layout;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use layout::{DrawCmd, Rect, scene};
pub use pipeline::{RenderInitError, RenderState};
pub use vertex::Vertex;
