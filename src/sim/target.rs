//! The wandering target marker
//!
//! The target walks along the lane in one direction until a randomly drawn
//! distance budget runs out, then turns around and draws a new budget.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// The target marker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    /// Offset of the marker's leading edge, in `[0, 1 - size]`
    pub position: f32,
    /// Travel direction, +1 or -1
    pub direction: f32,
    /// Distance left before the next turn-around
    pub remaining_move_budget: f32,
    /// Speed level, raised by the controller once the cursor is at its floor
    pub level: u32,
    /// Upgrade counter (reserved; speed follows `level`)
    pub acceleration_level: u32,
    /// Upgrade counter lowering the speed cap
    pub max_speed_level: u32,
}

impl Target {
    pub fn new(tuning: &Tuning) -> Self {
        let mut target = Self {
            position: 0.0,
            direction: 1.0,
            remaining_move_budget: 0.0,
            level: 0,
            acceleration_level: 1,
            max_speed_level: 1,
        };
        target.reposition(tuning);
        target
    }

    /// Marker size (fixed, independent of level)
    pub fn size(&self, tuning: &Tuning) -> f32 {
        tuning.target_size()
    }

    /// Speed cap. A higher max-speed level lowers the cap.
    pub fn max_speed(&self, tuning: &Tuning) -> f32 {
        tuning.target_base_max_speed * tuning.target_max_speed_factor.powi(self.max_speed_level as i32)
    }

    /// Distance covered per tick at the current level
    pub fn speed(&self, tuning: &Tuning) -> f32 {
        let speed = tuning.target_base_speed * tuning.target_acceleration.powi(self.level as i32);
        speed.min(self.max_speed(tuning))
    }

    /// Advance one tick.
    ///
    /// With no budget left the target turns around and draws a fresh budget
    /// in `[0, 1)` without moving. Otherwise it steps and spends the distance.
    /// Hitting either end of the lane empties the budget so the next tick
    /// turns around.
    pub fn vobble<R: Rng + ?Sized>(&mut self, rng: &mut R, tuning: &Tuning) {
        if self.remaining_move_budget <= 0.0 {
            self.direction = -self.direction;
            self.remaining_move_budget = rng.random::<f32>();
            return;
        }

        let speed = self.speed(tuning);
        let size = self.size(tuning);

        self.position += speed * self.direction;
        self.remaining_move_budget -= speed;

        if self.position > 1.0 - size {
            self.position = 1.0 - size;
            self.remaining_move_budget = 0.0;
        }

        if self.position < 0.0 {
            self.position = 0.0;
            self.remaining_move_budget = 0.0;
        }
    }

    pub fn level_up(&mut self) {
        self.level += 1;
    }

    pub fn upgrade_max_speed(&mut self) {
        self.max_speed_level += 1;
    }

    pub fn upgrade_acceleration(&mut self) {
        self.acceleration_level += 1;
    }

    /// Put the marker back to its starting offset
    pub fn reposition(&mut self, tuning: &Tuning) {
        self.position = tuning
            .target_restart_position
            .clamp(0.0, 1.0 - self.size(tuning));
    }

    /// Reset for a fresh run. Upgrade counters carry over.
    pub fn restart(&mut self, tuning: &Tuning) {
        self.level = 0;
        self.direction = 1.0;
        self.remaining_move_budget = 0.0;
        self.reposition(tuning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_speed_grows_with_level_until_cap() {
        let tuning = Tuning::default();
        let mut target = Target::new(&tuning);
        let base = target.speed(&tuning);
        assert!((base - 0.005).abs() < 1e-7);

        target.level = 100;
        assert!(target.speed(&tuning) > base);

        // 0.005 * 1.0005^L passes the 0.0475 cap around L = 4500
        target.level = 10_000;
        assert_eq!(target.speed(&tuning), target.max_speed(&tuning));
        assert!((target.max_speed(&tuning) - 0.0475).abs() < 1e-6);
    }

    #[test]
    fn test_max_speed_upgrade_lowers_cap() {
        let tuning = Tuning::default();
        let mut target = Target::new(&tuning);
        let before = target.max_speed(&tuning);
        target.upgrade_max_speed();
        assert!(target.max_speed(&tuning) < before);
        assert_eq!(target.max_speed_level, 2);
    }

    #[test]
    fn test_empty_budget_turns_without_moving() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut target = Target::new(&tuning);
        target.remaining_move_budget = 0.0;

        target.vobble(&mut rng, &tuning);
        assert_eq!(target.direction, -1.0);
        assert!((target.position - 0.35).abs() < 1e-6);
        assert!(target.remaining_move_budget >= 0.0 && target.remaining_move_budget < 1.0);
    }

    #[test]
    fn test_step_spends_budget() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut target = Target::new(&tuning);
        target.remaining_move_budget = 0.5;
        target.direction = -1.0;

        target.vobble(&mut rng, &tuning);
        assert!((target.position - 0.345).abs() < 1e-6);
        assert!((target.remaining_move_budget - 0.495).abs() < 1e-6);
    }

    #[test]
    fn test_wall_hit_forces_turn() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut target = Target::new(&tuning);
        target.position = 0.002;
        target.direction = -1.0;
        target.remaining_move_budget = 0.8;

        target.vobble(&mut rng, &tuning);
        assert_eq!(target.position, 0.0);
        assert_eq!(target.remaining_move_budget, 0.0);

        target.vobble(&mut rng, &tuning);
        assert_eq!(target.direction, 1.0);
        assert_eq!(target.position, 0.0);
    }

    #[test]
    fn test_reposition_stays_in_lane() {
        // Bypasses validation the way a hand-built tuning can
        let tuning = Tuning {
            target_restart_position: 0.98,
            ..Tuning::default()
        };
        let mut target = Target::new(&tuning);
        target.restart(&tuning);
        assert!((target.position - (1.0 - tuning.target_size())).abs() < 1e-6);

        let tuning = Tuning {
            target_restart_position: -0.2,
            ..Tuning::default()
        };
        target.reposition(&tuning);
        assert_eq!(target.position, 0.0);
    }

    #[test]
    fn test_restart_keeps_upgrades() {
        let tuning = Tuning::default();
        let mut target = Target::new(&tuning);
        target.upgrade_acceleration();
        target.level_up();
        target.position = 0.9;
        target.restart(&tuning);
        assert_eq!(target.level, 0);
        assert_eq!(target.acceleration_level, 2);
        assert!((target.position - 0.35).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_vobble_stays_in_lane(seed in any::<u64>(), level in 0u32..20_000, steps in 1usize..400) {
            let tuning = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut target = Target::new(&tuning);
            target.level = level;
            let size = target.size(&tuning);
            for _ in 0..steps {
                target.vobble(&mut rng, &tuning);
                prop_assert!(target.position >= 0.0);
                prop_assert!(target.position <= 1.0 - size);
            }
            let speed = target.speed(&tuning);
            prop_assert!(speed > 0.0 && speed <= target.max_speed(&tuning));
        }
    }
}
