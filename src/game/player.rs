use super::board::Cell;

/// The player who moves first after construction or a reset.
pub const STARTING_PLAYER: Player = Player::Yellow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Yellow,
    Red,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Yellow => Player::Red,
            Player::Red => Player::Yellow,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Yellow => Cell::Yellow,
            Player::Red => Cell::Red,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Yellow => "Yellow",
            Player::Red => "Red",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
