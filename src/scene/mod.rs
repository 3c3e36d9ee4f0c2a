//! Read-only view of a game for renderers: where each disk is drawn on the
//! current frame, how the board is tinted, and which disk waits on deck.

mod animation;

pub use animation::{
    disk_pose, drop_progress, resting_position, visual_row, AnimationConfig, DiskPose,
    BOTTOM_ROW_Y, CENTER_COLUMN, COLUMN_SPACING, ROW_SPACING,
};

use arrayvec::ArrayVec;

use crate::game::{GameState, Outcome, PlacedDisk, Player, MAX_DISKS};

/// Board surface selected by the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardTint {
    Neutral,
    YellowWon,
    RedWon,
    Draw,
}

impl From<Outcome> for BoardTint {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::InProgress => BoardTint::Neutral,
            Outcome::Won(Player::Yellow) => BoardTint::YellowWon,
            Outcome::Won(Player::Red) => BoardTint::RedWon,
            Outcome::Draw => BoardTint::Draw,
        }
    }
}

/// Snapshot of everything a renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct Scene {
    pub frame: u64,
    pub tint: BoardTint,
    /// Colour of the disk shown beside the board for the player to move.
    pub on_deck: Player,
    pub disks: ArrayVec<(PlacedDisk, DiskPose), MAX_DISKS>,
}

impl Scene {
    pub fn capture(state: &GameState, animation: &AnimationConfig) -> Self {
        let frame = state.frame();
        Scene {
            frame,
            tint: state.outcome().into(),
            on_deck: state.current_player(),
            disks: state
                .disks()
                .iter()
                .map(|disk| (*disk, disk_pose(disk, frame, animation)))
                .collect(),
        }
    }

    /// True while any disk is still falling.
    pub fn is_animating(&self) -> bool {
        self.disks.iter().any(|(_, pose)| !pose.landed)
    }
}
