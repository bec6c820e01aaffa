//! Winning line analysis for tic-tac-toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Check if a player has won by having three in a row
pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
    let target = player.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}

/// Find all positions that would immediately win for the player
pub fn winning_moves(cells: &[Cell; 9], player: Player) -> Vec<usize> {
    let mut moves: Vec<usize> = WINNING_LINES
        .iter()
        .filter_map(|line| winning_move_in_line(cells, player, line))
        .collect();
    moves.sort_unstable();
    moves.dedup();
    moves
}

/// Find the winning move position in a specific line, if one exists
fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
    let target = player.to_cell();
    let mut count = 0;
    let mut empty_pos = None;

    for &idx in line {
        match cells[idx] {
            Cell::Empty => {
                if empty_pos.is_some() {
                    // More than one empty cell, not a winning move
                    return None;
                }
                empty_pos = Some(idx);
            }
            c if c == target => count += 1,
            _ => return None, // Opponent piece in line
        }
    }

    if count == 2 { empty_pos } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_from(s: &str) -> [Cell; 9] {
        let mut cells = [Cell::Empty; 9];
        for (i, c) in s.chars().enumerate() {
            cells[i] = Cell::from_char(c).unwrap();
        }
        cells
    }

    #[test]
    fn test_has_won_each_direction() {
        assert!(has_won(&cells_from("XXX......"), Player::X));
        assert!(has_won(&cells_from("O..O..O.."), Player::O));
        assert!(has_won(&cells_from("X...X...X"), Player::X));
        assert!(!has_won(&cells_from("XX.O..O.."), Player::X));
    }

    #[test]
    fn test_winning_moves_single() {
        // X.X on the top row: only position 1 completes it
        let moves = winning_moves(&cells_from("X.X......"), Player::X);
        assert_eq!(moves, vec![1]);
    }

    #[test]
    fn test_winning_moves_multiple() {
        // XX. on the top row and X.. down the left column
        let moves = winning_moves(&cells_from("XX.X....."), Player::X);
        assert_eq!(moves, vec![2, 6]);
    }

    #[test]
    fn test_blocked_line_is_not_winning() {
        let moves = winning_moves(&cells_from("XXO......"), Player::X);
        assert!(moves.is_empty());
    }
}
