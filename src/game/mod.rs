//! Core Connect Four rules: board representation, players, the placed-disk
//! log and the game state machine that drops disks and decides outcomes.

mod board;
mod disk;
mod player;
mod state;

pub use crate::error::MoveError;
pub use board::{Board, Cell, COLS, ROWS, WIN_LENGTH};
pub use disk::{PlacedDisk, MAX_DISKS};
pub use player::{Player, STARTING_PLAYER};
pub use state::{DropResult, GameState, LegalColumns, Outcome};
