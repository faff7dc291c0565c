//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session by one step.

use super::state::{Game, Stage};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Activate held (key, pointer or touch)
    pub pressing: bool,
}

/// Advance the game by one fixed timestep
pub fn tick(game: &mut Game, input: &TickInput, dt: f32) {
    game.clock += dt as f64;
    game.time_ticks += 1;
    game.is_pressing = input.pressing;

    match game.stage {
        Stage::Intro => {
            if game.is_pressing {
                game.start();
            }
            return;
        }
        Stage::GameOver => {
            // The press that lost the run must not restart it
            if game.is_pressing && game.restart_ready() {
                game.start();
            }
            return;
        }
        Stage::Playing => {}
    }

    game.step_target();
    game.cursor.move_band(game.is_pressing, &game.tuning);

    if game.cursor.collide(&game.target, &game.tuning) {
        game.is_catching = true;
        game.progress.increase(&game.tuning);

        if game.progress.is_max() {
            game.catch();
        }
        return;
    }

    game.progress.decrease(&game.tuning);

    // Draining to zero only loses a run that had made contact
    if game.progress.is_min() && game.is_catching {
        game.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::GameEvent;
    use proptest::prelude::*;

    fn press() -> TickInput {
        TickInput { pressing: true }
    }

    fn release() -> TickInput {
        TickInput::default()
    }

    /// Started game with the target parked where the first tick cannot move it
    fn playing(seed: u64) -> Game {
        let mut game = Game::new(seed);
        tick(&mut game, &press(), SIM_DT);
        assert_eq!(game.stage, Stage::Playing);
        game.drain_events();
        game
    }

    #[test]
    fn test_intro_waits_for_press() {
        let mut game = Game::new(1);
        tick(&mut game, &release(), SIM_DT);
        assert_eq!(game.stage, Stage::Intro);
        assert!((game.target.position - 0.35).abs() < 1e-6);

        tick(&mut game, &press(), SIM_DT);
        assert_eq!(game.stage, Stage::Playing);
        assert_eq!(game.score, 0);
        // The starting press does not also simulate
        assert!((game.cursor.position - 0.3).abs() < 1e-6);
        assert_eq!(game.drain_events(), vec![GameEvent::Started]);
    }

    #[test]
    fn test_catch_from_near_full() {
        let mut game = playing(3);
        game.progress.value = 0.999;

        tick(&mut game, &release(), SIM_DT);

        assert_eq!(game.score, 1);
        assert_eq!(game.record, 1);
        assert_eq!(game.cursor.level, 1);
        assert!((game.progress.value - game.progress.start(&game.tuning)).abs() < 1e-6);
        assert!(!game.is_catching);
        let caught = game
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::Caught { .. }))
            .count();
        assert_eq!(caught, 1);
    }

    #[test]
    fn test_contact_fills_progress() {
        let mut game = playing(3);
        let before = game.progress.value;
        tick(&mut game, &release(), SIM_DT);
        assert!(game.cursor.is_colliding);
        assert!(game.is_catching);
        assert!((game.progress.value - (before + 0.0105)).abs() < 1e-6);
    }

    #[test]
    fn test_idle_drain_is_not_a_loss() {
        let mut game = playing(5);
        game.target.position = 0.0;
        game.progress.value = 0.005;
        assert!(!game.is_catching);

        tick(&mut game, &release(), SIM_DT);

        assert!(game.progress.is_min());
        assert_eq!(game.stage, Stage::Playing);
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_drain_after_contact_is_a_loss() {
        let mut game = playing(5);
        game.target.position = 0.0;
        game.progress.value = 0.005;
        game.is_catching = true;

        tick(&mut game, &release(), SIM_DT);

        assert_eq!(game.stage, Stage::GameOver);
        assert!(!game.is_catching);
        assert_eq!(game.game_over_at, Some(game.clock));
        assert_eq!(
            game.drain_events(),
            vec![GameEvent::GameOver { score: 0, record: 0 }]
        );
    }

    #[test]
    fn test_restart_debounce() {
        let mut game = playing(5);
        game.target.position = 0.0;
        game.progress.value = 0.005;
        game.is_catching = true;
        tick(&mut game, &press(), 0.5);
        assert_eq!(game.stage, Stage::GameOver);

        // 0.5 s after the loss
        tick(&mut game, &press(), 0.5);
        assert_eq!(game.stage, Stage::GameOver);

        // Not pressing at 1.0 s does nothing either
        tick(&mut game, &release(), 0.5);
        assert_eq!(game.stage, Stage::GameOver);

        // 1.5 s
        tick(&mut game, &press(), 0.5);
        assert_eq!(game.stage, Stage::Playing);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_restart_allowed_exactly_at_debounce() {
        let mut game = playing(5);
        game.clock = 10.0;
        game.finish();
        tick(&mut game, &press(), 1.0);
        assert_eq!(game.stage, Stage::Playing);
    }

    #[test]
    fn test_game_over_is_frozen() {
        let mut game = playing(5);
        game.finish();
        let before = game.snapshot();
        for _ in 0..30 {
            tick(&mut game, &release(), SIM_DT);
        }
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_prestige_scales_catch() {
        let mut game = playing(3);
        game.set_prestige(2);
        game.progress.value = 0.999;
        tick(&mut game, &release(), SIM_DT);
        assert_eq!(game.score, 4);
    }

    #[test]
    fn test_determinism() {
        let mut game1 = Game::new(99999);
        let mut game2 = Game::new(99999);

        for i in 0..2_000u32 {
            let input = TickInput {
                pressing: (i / 37) % 3 == 0,
            };
            tick(&mut game1, &input, SIM_DT);
            tick(&mut game2, &input, SIM_DT);
        }

        assert_eq!(game1.time_ticks, game2.time_ticks);
        assert_eq!(game1.snapshot(), game2.snapshot());
        assert_eq!(game1.target.remaining_move_budget, game2.target.remaining_move_budget);
    }

    proptest! {
        #[test]
        fn prop_record_monotonic(seed in any::<u64>(), presses in proptest::collection::vec(any::<bool>(), 1..1500)) {
            let mut game = Game::new(seed);
            let mut last_record = 0;
            for pressing in presses {
                tick(&mut game, &TickInput { pressing }, SIM_DT);
                prop_assert!(game.record >= last_record);
                prop_assert!(game.record >= game.score);
                last_record = game.record;

                let size = game.cursor.size(&game.tuning);
                prop_assert!(game.cursor.position >= 0.0);
                prop_assert!(game.cursor.position <= 1.0 - size);
                prop_assert!((0.0..=1.0).contains(&game.progress.value));
            }
        }
    }
}
