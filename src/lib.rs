//! Silly Fishing - a one-button timing game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (cursor, target, progress, stage machine)
//! - `tuning`: Data-driven game balance
//! - `platform`: Input aggregation
//! - `renderer`: WebGPU rendering pipeline
//! - `ui`: HUD text

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use sim::{Game, Snapshot, Stage, TickInput, tick};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz; all per-tick rates assume it)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Logical screen size in pixels
    pub const SCREEN_W: f32 = 640.0;
    pub const SCREEN_H: f32 = 480.0;

    /// Outer margin around the play area
    pub const PADDING: f32 = 32.0;
    /// Space between the cursor lane and the progress lane
    pub const GAP: f32 = 32.0;
    /// Lane border stroke width
    pub const BORDER_WIDTH: f32 = 8.0;

    /// Lane height (shared by both lanes)
    pub const FRAME_H: f32 = SCREEN_H - PADDING * 2.0;
    /// Lane width (both lanes are equal)
    pub const BAR_W: f32 = (SCREEN_W - PADDING * 2.0 - GAP) / 2.0;

    pub const WINDOW_TITLE: &str = "Silly Fishing";
}
