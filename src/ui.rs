//! HUD text for each stage

use crate::sim::{Snapshot, Stage};

/// Rules shown on the intro screen
pub const RULES: &str = "Rules:
- Press Space, Left Mouse Button or touch the screen to move cursor higher
- The cursor drops when nothing is pressed
- Keep the target inside your cursor to fill the progress bar
- When the bar is filled you get a point
- With each point the cursor shrinks by 5%
- Once the cursor is at its smallest, the target speeds up instead
- You lose if the bar drops to zero

Press Space, Left Mouse Button or touch to start";

/// Debug text overlay for the current stage
pub fn hud_text(snapshot: &Snapshot) -> String {
    match snapshot.stage {
        Stage::Intro => RULES.to_string(),
        Stage::Playing => format!("Score: {}", snapshot.score),
        Stage::GameOver => format!(
            "Game Over\nScore: {}\nRecord: {}",
            snapshot.score, snapshot.record
        ),
    }
}
