//! The player-controlled cursor band
//!
//! The band rises while the player presses and sinks otherwise. Every
//! level-up shrinks it along an exponential curve until it reaches a floor,
//! at which point it latches there for the rest of the run.

use serde::{Deserialize, Serialize};

use super::target::Target;
use crate::tuning::Tuning;

/// Result of evaluating the shrink curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSize {
    /// Band extent along the lane
    pub size: f32,
    /// True once the curve has reached the floor
    pub at_floor: bool,
}

/// Evaluate the shrink curve without touching any state.
///
/// `size = base * r^level` with `r = (1 - reduce)^shrink_rate_level`. A curve
/// value at or below the floor pins the band to the floor and reports the
/// latch as set. An already latched band stays at the floor regardless of level.
pub fn shrink_curve(tuning: &Tuning, level: u32, shrink_rate_level: u32, latched: bool) -> BandSize {
    let floor = tuning.cursor_min_size;
    if latched {
        return BandSize { size: floor, at_floor: true };
    }

    let r = (1.0 - tuning.cursor_reduce_amount).powi(shrink_rate_level as i32);
    let size = tuning.cursor_base_size * r.powi(level as i32);

    if size > floor {
        BandSize { size, at_floor: false }
    } else {
        BandSize { size: floor, at_floor: true }
    }
}

/// The cursor band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cursor {
    /// Offset of the band's leading edge, in `[0, 1 - size]`
    pub position: f32,
    /// Shrink level, raised by the controller on catches
    pub level: u32,
    /// Upgrade counter for the floor (reserved)
    pub min_size_level: u32,
    /// Upgrade counter compounding the per-level reduction
    pub shrink_rate_level: u32,
    /// One-way latch: the band has hit its floor
    pub is_at_min_size: bool,
    /// Result of the last containment test (render color only)
    pub is_colliding: bool,
}

impl Cursor {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            position: tuning.cursor_restart_position,
            level: 0,
            min_size_level: 1,
            shrink_rate_level: 1,
            is_at_min_size: false,
            is_colliding: false,
        }
    }

    /// Current band size
    pub fn size(&self, tuning: &Tuning) -> f32 {
        shrink_curve(tuning, self.level, self.shrink_rate_level, self.is_at_min_size).size
    }

    /// Move one step up (pressing) or down, then clamp into the lane
    pub fn move_band(&mut self, is_pressing: bool, tuning: &Tuning) {
        if is_pressing {
            self.position -= tuning.cursor_step;
        } else {
            self.position += tuning.cursor_step;
        }
        self.clamp(tuning);
    }

    /// Containment test: the target's whole extent must lie inside the band
    pub fn collide(&mut self, target: &Target, tuning: &Tuning) -> bool {
        let t_start = target.position;
        let t_end = target.position + target.size(tuning);

        let c_start = self.position;
        let c_end = self.position + self.size(tuning);

        self.is_colliding = t_start >= c_start && t_end <= c_end;
        self.is_colliding
    }

    /// Raise the shrink level by one
    pub fn level_up(&mut self, tuning: &Tuning) {
        self.level += 1;
        self.refresh_latch(tuning);
    }

    pub fn upgrade_min_size(&mut self) {
        self.min_size_level += 1;
    }

    pub fn upgrade_shrink_rate(&mut self, tuning: &Tuning) {
        self.shrink_rate_level += 1;
        self.refresh_latch(tuning);
    }

    /// Put the band back to its starting offset
    pub fn reposition(&mut self, tuning: &Tuning) {
        self.position = tuning.cursor_restart_position;
        self.clamp(tuning);
    }

    /// Reset for a fresh run. Upgrade counters carry over.
    pub fn restart(&mut self, tuning: &Tuning) {
        self.level = 0;
        self.is_at_min_size = false;
        self.is_colliding = false;
        self.refresh_latch(tuning);
        self.reposition(tuning);
    }

    /// Set the latch if the curve has reached the floor. Never clears it.
    fn refresh_latch(&mut self, tuning: &Tuning) {
        let band = shrink_curve(tuning, self.level, self.shrink_rate_level, self.is_at_min_size);
        self.is_at_min_size = band.at_floor;
    }

    fn clamp(&mut self, tuning: &Tuning) {
        let size = self.size(tuning);
        if self.position > 1.0 - size {
            self.position = 1.0 - size;
        } else if self.position < 0.0 {
            self.position = 0.0;
        }
    }
}
