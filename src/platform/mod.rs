//! Platform abstraction layer
//!
//! Browser/native differences stay here. The simulation only ever sees the
//! single activate flag produced by [`InputState`].

pub mod input;

pub use input::InputState;
