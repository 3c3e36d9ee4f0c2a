use crate::game::{Player, COLS, ROWS};
use crate::scene::{visual_row, BoardTint, Scene};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Board rows plus one lane above the board where falling disks enter.
pub const LANES: usize = ROWS + 1;

/// Which disk occupies each lane and column on the scene's frame.
/// Lane 0 is the bottom row; lane `ROWS` is above the board. When falling
/// disks share a lane, the one dropped first is shown.
pub fn disk_grid(scene: &Scene) -> [[Option<Player>; COLS]; LANES] {
    let mut grid = [[None; COLS]; LANES];
    for (disk, pose) in &scene.disks {
        let lane = visual_row(disk, pose).min(ROWS);
        let slot = &mut grid[lane][disk.column_index()];
        if slot.is_none() {
            *slot = Some(disk.player);
        }
    }
    grid
}

pub fn player_color(player: Player) -> Color {
    match player {
        Player::Yellow => Color::Yellow,
        Player::Red => Color::Red,
    }
}

pub fn tint_color(tint: BoardTint) -> Color {
    match tint {
        BoardTint::Neutral => Color::Blue,
        BoardTint::YellowWon => Color::Yellow,
        BoardTint::RedWon => Color::Red,
        BoardTint::Draw => Color::Gray,
    }
}

fn disk_span(cell: Option<Player>, empty: &'static str) -> Span<'static> {
    match cell {
        Some(player) => Span::styled(" \u{25cf} ", Style::default().fg(player_color(player))),
        None => Span::styled(empty, Style::default().fg(Color::DarkGray)),
    }
}

/// Render the board, top lane first, framed in the tint colour.
pub fn board_lines(scene: &Scene) -> Vec<Line<'static>> {
    let grid = disk_grid(scene);
    let frame_style = Style::default().fg(tint_color(scene.tint));
    let mut lines = Vec::with_capacity(LANES + 3);

    // Entry lane above the board
    let mut lane = vec![Span::raw("   ")];
    lane.extend(grid[ROWS].iter().map(|&cell| disk_span(cell, "   ")));
    lane.push(Span::raw("  "));
    lines.push(Line::from(lane));

    lines.push(Line::styled("  ╔═════════════════════╗", frame_style));

    for row in (0..ROWS).rev() {
        let mut spans = vec![Span::styled("  ║", frame_style)];
        spans.extend(grid[row].iter().map(|&cell| disk_span(cell, " . ")));
        spans.push(Span::styled("║", frame_style));
        lines.push(Line::from(spans));
    }

    lines.push(Line::styled("  ╚═════════════════════╝", frame_style));

    let mut numbers = vec![Span::raw("   ")];
    numbers.extend((1..=COLS).map(|col| Span::raw(format!(" {col} "))));
    numbers.push(Span::raw("  "));
    lines.push(Line::from(numbers));

    lines
}
