//! Screen layout for the two lanes
//!
//! Maps the normalized lane coordinates of a [`Snapshot`] onto the logical
//! 640x480 screen. The cursor lane sits on the left, the progress lane on the
//! right, both `FRAME_H` tall with a `GAP` between them.

use glam::Vec2;

use super::vertex::colors;
use crate::consts::*;
use crate::sim::{Snapshot, Stage};

/// Axis-aligned rectangle in screen pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Grow (or shrink, for negative `by`) on every side
    pub fn inflate(&self, by: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(by),
            size: self.size + Vec2::splat(by * 2.0),
        }
    }
}

/// Something to draw, in back-to-front order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCmd {
    Fill { rect: Rect, color: [f32; 4] },
    Stroke { rect: Rect, width: f32, color: [f32; 4] },
}

/// Left lane holding the cursor band and target
pub fn cursor_lane() -> Rect {
    Rect::new(PADDING, PADDING, BAR_W, FRAME_H)
}

/// Right lane holding the progress fill
pub fn progress_lane() -> Rect {
    Rect::new(PADDING + BAR_W + GAP, PADDING, BAR_W, FRAME_H)
}

/// Border around a lane; the stroke is centred half a border outside it
pub fn lane_border(lane: Rect) -> Rect {
    lane.inflate(BORDER_WIDTH / 2.0)
}

pub fn cursor_band(snapshot: &Snapshot) -> Rect {
    let lane = cursor_lane();
    Rect::new(
        lane.min.x,
        lane.min.y + FRAME_H * snapshot.cursor_position,
        BAR_W,
        FRAME_H * snapshot.cursor_size,
    )
}

/// Square marker centred horizontally in the cursor lane
pub fn target_square(snapshot: &Snapshot) -> Rect {
    let lane = cursor_lane();
    let w = FRAME_H * snapshot.target_size;
    Rect::new(
        lane.min.x + BAR_W / 2.0 - w / 2.0,
        lane.min.y + FRAME_H * snapshot.target_position,
        w,
        w,
    )
}

/// Progress fills upward from the bottom of its lane
pub fn progress_fill(snapshot: &Snapshot) -> Rect {
    let lane = progress_lane();
    let h = FRAME_H * snapshot.progress;
    Rect::new(lane.min.x, lane.min.y + FRAME_H - h, BAR_W, h)
}

fn band_color(snapshot: &Snapshot) -> [f32; 4] {
    if snapshot.cursor_colliding {
        colors::BAND_ACTIVE
    } else {
        colors::BAND
    }
}

/// Build the draw list for a frame. Only the playing stage shows the lanes;
/// the other stages are text on the background.
pub fn scene(snapshot: &Snapshot) -> Vec<DrawCmd> {
    let mut cmds = vec![DrawCmd::Fill {
        rect: Rect::new(0.0, 0.0, SCREEN_W, SCREEN_H),
        color: colors::BACKGROUND,
    }];

    if snapshot.stage != Stage::Playing {
        return cmds;
    }

    let band = band_color(snapshot);
    let target = target_square(snapshot);

    cmds.extend([
        DrawCmd::Stroke {
            rect: lane_border(cursor_lane()),
            width: BORDER_WIDTH,
            color: colors::BORDER,
        },
        DrawCmd::Fill {
            rect: cursor_band(snapshot),
            color: band,
        },
        DrawCmd::Fill {
            rect: target,
            color: colors::TARGET,
        },
        DrawCmd::Stroke {
            rect: target,
            width: BORDER_WIDTH,
            color: colors::BORDER,
        },
        DrawCmd::Stroke {
            rect: lane_border(progress_lane()),
            width: BORDER_WIDTH,
            color: colors::BORDER,
        },
        DrawCmd::Fill {
            rect: progress_fill(snapshot),
            color: band,
        },
    ]);

    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Game;

    fn playing_snapshot() -> Snapshot {
        let mut game = Game::new(1);
        game.start();
        game.snapshot()
    }

    #[test]
    fn test_lanes_equal_with_gap() {
        let left = cursor_lane();
        let right = progress_lane();
        assert_eq!(left.size, right.size);
        assert_eq!(left.size, Vec2::new(272.0, 416.0));
        assert_eq!(right.min.x - left.max().x, GAP);
        assert_eq!(left.min.y, right.min.y);
    }

    fn contains(outer: &Rect, inner: &Rect) -> bool {
        inner.min.cmpge(outer.min).all() && inner.max().cmple(outer.max()).all()
    }

    #[test]
    fn test_cursor_and_target_inside_lane() {
        let snapshot = playing_snapshot();
        let lane = cursor_lane();
        // The band ends on the lane edge; allow for rounding
        assert!(contains(&lane.inflate(0.01), &cursor_band(&snapshot)));
        assert!(contains(&lane, &target_square(&snapshot)));

        let target = target_square(&snapshot);
        assert!((target.min.x + target.size.x / 2.0 - (lane.min.x + BAR_W / 2.0)).abs() < 1e-4);
    }

    #[test]
    fn test_progress_fills_from_bottom() {
        let mut snapshot = playing_snapshot();
        snapshot.progress = 0.5;
        let fill = progress_fill(&snapshot);
        assert_eq!(fill.max().y, progress_lane().max().y);
        assert_eq!(fill.size.y, FRAME_H * 0.5);

        snapshot.progress = 0.0;
        assert_eq!(progress_fill(&snapshot).size.y, 0.0);
    }

    #[test]
    fn test_scene_by_stage() {
        let mut snapshot = playing_snapshot();
        assert_eq!(scene(&snapshot).len(), 7);

        snapshot.stage = Stage::GameOver;
        assert_eq!(scene(&snapshot).len(), 1);
    }

    #[test]
    fn test_band_color_follows_collision() {
        let mut snapshot = playing_snapshot();
        snapshot.cursor_colliding = true;
        let cmds = scene(&snapshot);
        assert!(cmds.contains(&DrawCmd::Fill {
            rect: cursor_band(&snapshot),
            color: colors::BAND_ACTIVE,
        }));
    }
}
