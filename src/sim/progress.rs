//! Catch progress meter
//!
//! Fills while the target sits inside the cursor and drains otherwise.
//! Start value, gain and loss each follow their own exponential level curve.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progress {
    /// Meter value in `[0, 1]`
    pub value: f32,
    pub start_level: u32,
    pub gain_level: u32,
    pub loss_level: u32,
}

impl Progress {
    pub fn new(tuning: &Tuning) -> Self {
        let mut progress = Self {
            value: 0.0,
            start_level: 1,
            gain_level: 1,
            loss_level: 1,
        };
        progress.reset(tuning);
        progress
    }

    /// Value the meter restarts from, saturating at 1
    pub fn start(&self, tuning: &Tuning) -> f32 {
        let start = tuning.progress_base_start * tuning.progress_growth.powi(self.start_level as i32);
        start.min(1.0)
    }

    /// Fill per tick while catching
    pub fn gain(&self, tuning: &Tuning) -> f32 {
        tuning.progress_base_gain * tuning.progress_growth.powi(self.gain_level as i32)
    }

    /// Drain per tick while not catching. Higher levels drain slower.
    pub fn loss(&self, tuning: &Tuning) -> f32 {
        tuning.progress_base_loss * tuning.progress_decay.powi(self.loss_level as i32)
    }

    pub fn increase(&mut self, tuning: &Tuning) {
        self.value += self.gain(tuning);
        if self.value >= 1.0 {
            self.value = 1.0;
        }
    }

    pub fn decrease(&mut self, tuning: &Tuning) {
        self.value -= self.loss(tuning);
        if self.value < 0.0 {
            self.value = 0.0;
        }
    }

    pub fn is_max(&self) -> bool {
        self.value >= 1.0
    }

    pub fn is_min(&self) -> bool {
        self.value <= 0.0
    }

    pub fn reset(&mut self, tuning: &Tuning) {
        self.value = self.start(tuning);
    }

    pub fn upgrade_start(&mut self) {
        self.start_level += 1;
    }

    pub fn upgrade_gain(&mut self) {
        self.gain_level += 1;
    }

    pub fn upgrade_loss(&mut self) {
        self.loss_level += 1;
    }
}
