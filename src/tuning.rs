//! Data-driven game balance
//!
//! Every number that shapes how the game feels lives here. The defaults
//! reproduce the classic tuning; a partial JSON object can override any
//! subset of fields.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a tuning override
#[derive(Debug, Error)]
pub enum TuningError {
    /// The override was not valid JSON for [`Tuning`]
    #[error("malformed tuning override: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the simulation cannot run with
    #[error("tuning field `{field}` is out of range: {value}")]
    OutOfRange { field: &'static str, value: f32 },

    /// The target would not fit inside the smallest cursor band
    #[error("target size {target} does not fit inside the cursor floor {floor}")]
    TargetWiderThanFloor { target: f32, floor: f32 },
}

/// Balance constants for cursor, target, progress and the stage machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Cursor ===
    /// Band size at level 0
    pub cursor_base_size: f32,
    /// Fraction the band loses per level (compounded by shrink-rate level)
    pub cursor_reduce_amount: f32,
    /// Smallest band the shrink curve may reach
    pub cursor_min_size: f32,
    /// Distance moved per tick, up while pressing and down otherwise
    pub cursor_step: f32,
    /// Cursor offset after a start or catch
    pub cursor_restart_position: f32,

    // === Target ===
    /// Target size as a fraction of the cursor floor
    pub target_size_ratio: f32,
    /// Speed at level 0
    pub target_base_speed: f32,
    /// Per-level speed multiplier
    pub target_acceleration: f32,
    /// Speed cap at max-speed level 0
    pub target_base_max_speed: f32,
    /// Per-level multiplier on the speed cap
    pub target_max_speed_factor: f32,
    /// Target offset after a start or catch
    pub target_restart_position: f32,

    // === Progress ===
    pub progress_base_start: f32,
    pub progress_base_gain: f32,
    pub progress_base_loss: f32,
    /// Per-level multiplier on start and gain
    pub progress_growth: f32,
    /// Per-level multiplier on loss
    pub progress_decay: f32,

    // === Session ===
    /// Seconds after a loss during which presses do not restart
    pub restart_debounce_secs: f64,
    /// Score per catch for each point of prestige
    pub score_per_prestige: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            cursor_base_size: 0.7,
            cursor_reduce_amount: 0.05,
            cursor_min_size: 0.1,
            cursor_step: 0.01,
            cursor_restart_position: 0.3,

            target_size_ratio: 0.7,
            target_base_speed: 0.005,
            target_acceleration: 1.0005,
            target_base_max_speed: 0.05,
            target_max_speed_factor: 0.95,
            target_restart_position: 0.35,

            progress_base_start: 0.5,
            progress_base_gain: 0.01,
            progress_base_loss: 0.01,
            progress_growth: 1.05,
            progress_decay: 0.95,

            restart_debounce_secs: 1.0,
            score_per_prestige: 2,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Fixed size of the target marker
    pub fn target_size(&self) -> f32 {
        self.cursor_min_size * self.target_size_ratio
    }

    /// Check that every constant keeps the simulation well-defined
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(TuningError::OutOfRange { field, value })
            }
        }

        // Leading-edge offset of a marker of `size` must keep it in the lane
        fn in_lane(field: &'static str, value: f32, size: f32) -> Result<(), TuningError> {
            const EPS: f32 = 1e-6;
            if value >= 0.0 && value <= 1.0 - size + EPS {
                Ok(())
            } else {
                Err(TuningError::OutOfRange { field, value })
            }
        }

        fn unit_open(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value > 0.0 && value < 1.0 {
                Ok(())
            } else {
                Err(TuningError::OutOfRange { field, value })
            }
        }

        positive("cursor_base_size", self.cursor_base_size)?;
        positive("cursor_min_size", self.cursor_min_size)?;
        positive("cursor_step", self.cursor_step)?;
        unit_open("cursor_reduce_amount", self.cursor_reduce_amount)?;
        if self.cursor_base_size > 1.0 {
            return Err(TuningError::OutOfRange {
                field: "cursor_base_size",
                value: self.cursor_base_size,
            });
        }
        if self.cursor_min_size >= self.cursor_base_size {
            return Err(TuningError::OutOfRange {
                field: "cursor_min_size",
                value: self.cursor_min_size,
            });
        }

        positive("target_size_ratio", self.target_size_ratio)?;
        positive("target_base_speed", self.target_base_speed)?;
        positive("target_acceleration", self.target_acceleration)?;
        positive("target_base_max_speed", self.target_base_max_speed)?;
        positive("target_max_speed_factor", self.target_max_speed_factor)?;
        if self.target_size() > self.cursor_min_size {
            return Err(TuningError::TargetWiderThanFloor {
                target: self.target_size(),
                floor: self.cursor_min_size,
            });
        }

        // A fresh run places the band at its level-0 size
        in_lane(
            "cursor_restart_position",
            self.cursor_restart_position,
            self.cursor_base_size,
        )?;
        in_lane(
            "target_restart_position",
            self.target_restart_position,
            self.target_size(),
        )?;

        positive("progress_base_start", self.progress_base_start)?;
        positive("progress_base_gain", self.progress_base_gain)?;
        positive("progress_base_loss", self.progress_base_loss)?;
        positive("progress_growth", self.progress_growth)?;
        positive("progress_decay", self.progress_decay)?;

        if self.restart_debounce_secs.is_nan() || self.restart_debounce_secs < 0.0 {
            return Err(TuningError::OutOfRange {
                field: "restart_debounce_secs",
                value: self.restart_debounce_secs as f32,
            });
        }

        Ok(())
    }
}
