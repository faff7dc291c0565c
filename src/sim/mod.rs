//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall-clock reads
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod cursor;
pub mod progress;
pub mod state;
pub mod target;
pub mod tick;

pub use cursor::{BandSize, Cursor, shrink_curve};
pub use progress::Progress;
pub use state::{Game, GameEvent, Snapshot, Stage};
pub use target::Target;
pub use tick::{TickInput, tick};
