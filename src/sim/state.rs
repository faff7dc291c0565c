//! Session state and stage machine
//!
//! One `Game` owns the cursor, target and progress meter plus everything that
//! outlives a single run (record, prestige, RNG, simulation clock).

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::cursor::Cursor;
use super::progress::Progress;
use super::target::Target;
use crate::tuning::{Tuning, TuningError};

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Rules screen, waiting for the first press
    Intro,
    /// Active run
    Playing,
    /// Run ended, showing score and record
    GameOver,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run began
    Started,
    /// Progress filled up
    Caught { score: u64 },
    /// The session record went up
    NewRecord { record: u64 },
    /// Progress drained after contact
    GameOver { score: u64, record: u64 },
}

/// Read-only view handed to the renderer and HUD
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub stage: Stage,
    pub cursor_position: f32,
    pub cursor_size: f32,
    pub cursor_colliding: bool,
    pub target_position: f32,
    pub target_size: f32,
    pub progress: f32,
    pub score: u64,
    pub record: u64,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct Game {
    /// Balance constants (validated)
    pub tuning: Tuning,
    /// Session seed
    pub seed: u64,
    pub stage: Stage,
    pub cursor: Cursor,
    pub target: Target,
    pub progress: Progress,
    /// Score of the current run
    pub score: u64,
    /// Best score this session, never lowered
    pub record: u64,
    /// External score multiplier (0 unless a meta layer sets it)
    pub prestige: u32,
    /// Combined activate input for the current tick
    pub is_pressing: bool,
    /// The target has been inside the cursor since the last catch
    pub is_catching: bool,
    /// Simulation clock in seconds
    pub clock: f64,
    /// Clock value when the last run ended
    pub game_over_at: Option<f64>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised since the host last drained them
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl Game {
    /// Create a session on the intro screen with default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    /// Create a session with custom tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    fn build(seed: u64, tuning: Tuning) -> Self {
        Self {
            cursor: Cursor::new(&tuning),
            target: Target::new(&tuning),
            progress: Progress::new(&tuning),
            tuning,
            seed,
            stage: Stage::Intro,
            score: 0,
            record: 0,
            prestige: 0,
            is_pressing: false,
            is_catching: false,
            clock: 0.0,
            game_over_at: None,
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Score awarded per catch
    pub fn score_gain(&self) -> u64 {
        (self.tuning.score_per_prestige as u64 * self.prestige as u64).max(1)
    }

    pub fn set_prestige(&mut self, prestige: u32) {
        self.prestige = prestige;
    }

    /// Whether a press on the game-over screen may start a new run
    pub fn restart_ready(&self) -> bool {
        match self.game_over_at {
            Some(at) => self.clock - at >= self.tuning.restart_debounce_secs,
            None => true,
        }
    }

    /// Begin a fresh run
    pub fn start(&mut self) {
        self.score = 0;
        self.is_catching = false;
        self.cursor.restart(&self.tuning);
        self.target.restart(&self.tuning);
        self.progress.reset(&self.tuning);
        self.stage = Stage::Playing;
        self.events.push(GameEvent::Started);
        log::info!("Run started (seed {}, record {})", self.seed, self.record);
    }

    /// Progress filled: score, level up and reposition
    pub fn catch(&mut self) {
        self.progress.reset(&self.tuning);

        if self.cursor.is_at_min_size {
            self.target.level_up();
        } else {
            self.cursor.level_up(&self.tuning);
        }

        self.score += self.score_gain();
        self.events.push(GameEvent::Caught { score: self.score });

        if self.score > self.record {
            self.record = self.score;
            self.events.push(GameEvent::NewRecord { record: self.record });
        }

        // Offsets are fixed and not checked for overlap with a shrunken band
        self.cursor.reposition(&self.tuning);
        self.target.reposition(&self.tuning);
        self.is_catching = false;

        log::debug!(
            "Catch: score {}, cursor level {}, target level {}",
            self.score,
            self.cursor.level,
            self.target.level
        );
    }

    /// End the run
    pub fn finish(&mut self) {
        self.stage = Stage::GameOver;
        self.is_catching = false;
        self.game_over_at = Some(self.clock);
        self.events.push(GameEvent::GameOver {
            score: self.score,
            record: self.record,
        });
        log::info!("Game over: score {}, record {}", self.score, self.record);
    }

    /// Advance the target using the session RNG
    pub(crate) fn step_target(&mut self) {
        self.target.vobble(&mut self.rng, &self.tuning);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            stage: self.stage,
            cursor_position: self.cursor.position,
            cursor_size: self.cursor.size(&self.tuning),
            cursor_colliding: self.cursor.is_colliding,
            target_position: self.target.position,
            target_size: self.target.size(&self.tuning),
            progress: self.progress.value,
            score: self.score,
            record: self.record,
        }
    }
}
