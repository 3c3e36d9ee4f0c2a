use arrayvec::ArrayVec;
use tracing::{debug, info, instrument, warn};

use super::board::{Board, DropError, COLS};
use super::disk::{PlacedDisk, MAX_DISKS};
use super::player::{Player, STARTING_PLAYER};
use crate::error::MoveError;

/// Columns (1-indexed) that would currently accept a disk.
pub type LegalColumns = ArrayVec<usize, COLS>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won(Player),
    Draw,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// What an accepted drop produced: the new log entry and the outcome after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropResult {
    pub disk: PlacedDisk,
    pub outcome: Outcome,
}

/// The authoritative Connect Four state.
///
/// Owns the board, the placed-disk log, whose turn it is and the outcome.
/// Hosts mutate it only through [`GameState::drop_disk`],
/// [`GameState::reset`] and [`GameState::advance_frame`]; everything else
/// is a read accessor.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    disks: ArrayVec<PlacedDisk, MAX_DISKS>,
    current_player: Player,
    outcome: Outcome,
    frame: u64,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            disks: ArrayVec::new(),
            current_player: STARTING_PLAYER,
            outcome: Outcome::InProgress,
            frame: 0,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_over()
    }

    /// Every accepted drop since the last reset, in drop order.
    pub fn disks(&self) -> &[PlacedDisk] {
        &self.disks
    }

    pub fn disk_count(&self) -> usize {
        self.disks.len()
    }

    /// Disks stacked in a 1-indexed column, or `None` for a column off the board.
    pub fn column_height(&self, column: usize) -> Option<usize> {
        (1..=COLS)
            .contains(&column)
            .then(|| self.board.height(column - 1))
    }

    /// Get list of legal columns (1-indexed, not full)
    pub fn legal_columns(&self) -> LegalColumns {
        if self.is_terminal() {
            return LegalColumns::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .map(|col| col + 1)
            .collect()
    }

    /// Current tick of the host's render clock.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advance the render clock by one tick. Drops are stamped with this value.
    pub fn advance_frame(&mut self) {
        self.frame += 1;
    }

    /// Drop the current player's disk into a 1-indexed column.
    ///
    /// On success the disk is logged, the outcome re-evaluated around the
    /// new disk, and the turn handed to the other player (also on the move
    /// that ends the game). On error nothing changes.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn drop_disk(&mut self, column: usize) -> Result<DropResult, MoveError> {
        if self.is_terminal() {
            warn!("game over, press 0 or R to play another game");
            return Err(MoveError::GameOver);
        }

        let col = column.wrapping_sub(1);
        let player = self.current_player;
        let row = self
            .board
            .drop_piece(col, player.to_cell())
            .map_err(|e| {
                let err = match e {
                    DropError::ColumnFull => MoveError::ColumnFull { column },
                    DropError::InvalidColumn => MoveError::InvalidColumn { column },
                };
                warn!(error = %err, "drop rejected");
                err
            })?;

        let disk = PlacedDisk {
            order: self.disks.len(),
            column,
            row,
            player,
            key_frame: self.frame,
        };
        // The board accepted the piece, so there are fewer than MAX_DISKS entries.
        self.disks.push(disk);
        debug!(row, order = disk.order, "{} played in column {}", player, column);

        if self.board.check_win(row, col) {
            self.outcome = Outcome::Won(player);
            info!(winner = %player, moves = self.disks.len(), "game won");
        } else if self.disks.len() == MAX_DISKS {
            self.outcome = Outcome::Draw;
            info!("board full, game drawn");
        }

        self.current_player = player.other();

        Ok(DropResult {
            disk,
            outcome: self.outcome,
        })
    }

    /// Start a new game. The frame clock keeps running.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.disks.clear();
        self.current_player = STARTING_PLAYER;
        self.outcome = Outcome::InProgress;
        info!("the board has been reset");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
