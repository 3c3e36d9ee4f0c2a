use super::board::{COLS, ROWS};
use super::player::Player;

/// Most disks a game can hold; the placed-disk log never grows past this.
pub const MAX_DISKS: usize = ROWS * COLS;

/// One accepted drop, as recorded in the engine's append-only log.
///
/// `order` is the disk's position in drop order (0-based) and `key_frame`
/// the engine frame at which it was dropped. Renderers use the latter to
/// time the falling animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedDisk {
    pub order: usize,
    /// 1-indexed, as typed on the keyboard
    pub column: usize,
    /// 0 is the bottom row
    pub row: usize,
    pub player: Player,
    pub key_frame: u64,
}

impl PlacedDisk {
    /// 0-indexed column, for indexing into the board.
    pub fn column_index(&self) -> usize {
        self.column - 1
    }

    /// Frames elapsed since this disk was dropped.
    pub fn age(&self, frame: u64) -> u64 {
        frame.saturating_sub(self.key_frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_index() {
        let disk = PlacedDisk {
            order: 0,
            column: 4,
            row: 0,
            player: Player::Yellow,
            key_frame: 10,
        };
        assert_eq!(disk.column_index(), 3);
    }

    #[test]
    fn test_age_saturates_before_key_frame() {
        let disk = PlacedDisk {
            order: 0,
            column: 1,
            row: 0,
            player: Player::Red,
            key_frame: 10,
        };
        assert_eq!(disk.age(25), 15);
        assert_eq!(disk.age(5), 0);
    }
}
