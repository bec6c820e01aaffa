//! Board representation and structural operations for the 8-puzzle

use std::fmt;

use serde::{Deserialize, Serialize};

/// The solved configuration, with the blank (0) in the bottom-right corner
pub const GOAL: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// Orthogonal blank moves as (row, col) offsets: up, down, left, right
const DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A 3x3 sliding-tile board
///
/// Tiles are stored row-major; value 0 is the blank. Index `i` maps to
/// `row = i / 3`, `col = i % 3`. Construction via [`PuzzleBoard::from_tiles`]
/// validates that the tiles form a permutation of 0-8, so every value of
/// this type represents a well-formed board.
///
/// The type implements `Copy` (9 bytes), so boards are passed and stored by
/// value throughout the solver. The derived `Ord` is the lexicographic tile
/// order used as the final frontier tie-break.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PuzzleBoard {
    tiles: [u8; 9],
}

impl PuzzleBoard {
    /// Create the solved board
    pub fn goal() -> Self {
        PuzzleBoard { tiles: GOAL }
    }

    /// Create a board from a tile slice, validating the permutation.
    ///
    /// # Errors
    ///
    /// Returns error if the slice does not contain exactly 9 tiles, a tile
    /// value is outside 0-8, or a value appears more than once.
    pub fn from_tiles(tiles: &[u8]) -> Result<Self, crate::Error> {
        let context = || format!("{tiles:?}");

        if tiles.len() != 9 {
            return Err(crate::Error::InvalidTileCount {
                expected: 9,
                got: tiles.len(),
                context: context(),
            });
        }

        let mut seen = [false; 9];
        for &value in tiles {
            if value > 8 {
                return Err(crate::Error::TileOutOfRange {
                    value,
                    context: context(),
                });
            }
            if seen[value as usize] {
                return Err(crate::Error::DuplicateTile {
                    value,
                    context: context(),
                });
            }
            seen[value as usize] = true;
        }

        let mut board = PuzzleBoard { tiles: [0; 9] };
        board.tiles.copy_from_slice(tiles);
        Ok(board)
    }

    /// Parse a board from a string.
    ///
    /// Accepts comma or whitespace separated tile values ("1,2,3,4,5,6,7,8,0")
    /// as well as a bare 9-digit string ("123456780").
    ///
    /// # Errors
    ///
    /// Returns error if a token is not a number or the tiles do not form a
    /// permutation of 0-8.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let tokens: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();

        let mut tiles = Vec::with_capacity(9);
        if tokens.len() == 1 && tokens[0].len() == 9 {
            for c in tokens[0].chars() {
                let value = c.to_digit(10).ok_or_else(|| crate::Error::InvalidTileToken {
                    token: c.to_string(),
                    context: s.to_string(),
                })?;
                tiles.push(value as u8);
            }
        } else {
            for token in tokens {
                let value: u8 = token.parse().map_err(|_| crate::Error::InvalidTileToken {
                    token: token.to_string(),
                    context: s.to_string(),
                })?;
                tiles.push(value);
            }
        }

        Self::from_tiles(&tiles)
    }

    /// Get the underlying tiles
    pub fn tiles(&self) -> &[u8; 9] {
        &self.tiles
    }

    /// Index of the blank cell
    pub fn blank_index(&self) -> usize {
        self.tiles
            .iter()
            .position(|&t| t == 0)
            .expect("validated board always contains a blank")
    }

    /// Check whether the board is in the solved configuration
    pub fn is_goal(&self) -> bool {
        self.tiles == GOAL
    }

    /// Sum of Manhattan distances of every tile from its goal cell.
    ///
    /// The blank does not contribute. This heuristic is admissible (a tile
    /// needs at least its Manhattan distance in moves) and consistent, which
    /// is what gives the A* solver its optimality guarantee.
    pub fn manhattan_distance(&self) -> u32 {
        let mut distance = 0u32;
        for (i, &tile) in self.tiles.iter().enumerate() {
            if tile == 0 {
                continue;
            }
            let goal_index = (tile - 1) as usize;
            let (row, col) = (i / 3, i % 3);
            let (goal_row, goal_col) = (goal_index / 3, goal_index % 3);
            distance += (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32;
        }
        distance
    }

    /// Boards reachable by sliding one adjacent tile into the blank.
    ///
    /// Between 2 (blank in a corner) and 4 (blank in the center) boards are
    /// returned, in the fixed direction order up, down, left, right.
    pub fn neighbors(&self) -> Vec<PuzzleBoard> {
        let blank = self.blank_index();
        let (row, col) = ((blank / 3) as i8, (blank % 3) as i8);

        let mut result = Vec::with_capacity(4);
        for (dr, dc) in DIRECTIONS {
            let (new_row, new_col) = (row + dr, col + dc);
            if (0..3).contains(&new_row) && (0..3).contains(&new_col) {
                let target = (new_row * 3 + new_col) as usize;
                let mut next = *self;
                next.tiles.swap(blank, target);
                result.push(next);
            }
        }
        result
    }

    /// Slide the tile at `index` into the blank, if adjacent.
    ///
    /// This is the manual move a player makes by clicking a tile. Returns
    /// false (board unchanged) when the cell is not orthogonally adjacent to
    /// the blank or out of range.
    pub fn slide(&mut self, index: usize) -> bool {
        if index >= 9 {
            return false;
        }
        let blank = self.blank_index();
        let (row, col) = (index / 3, index % 3);
        let (blank_row, blank_col) = (blank / 3, blank % 3);
        if row.abs_diff(blank_row) + col.abs_diff(blank_col) != 1 {
            return false;
        }
        self.tiles.swap(blank, index);
        true
    }

    /// Number of inverted pairs: tiles `(i, j)` with `i < j`, both non-blank,
    /// and `tiles[i] > tiles[j]`.
    pub fn inversions(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(i, &tile)| {
                self.tiles[i + 1..]
                    .iter()
                    .filter(|&&later| later != 0 && later < tile)
                    .count()
            })
            .sum()
    }

    /// Whether the goal is reachable from this board.
    ///
    /// On a 3x3 board every blank slide preserves inversion parity, and the
    /// goal has zero inversions, so exactly the even-parity half of the
    /// permutations is solvable.
    pub fn is_solvable(&self) -> bool {
        self.inversions().is_multiple_of(2)
    }
}

impl fmt::Display for PuzzleBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let tile = self.tiles[row * 3 + col];
                if tile == 0 {
                    write!(f, " .")?;
                } else {
                    write!(f, " {tile}")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_distance_is_zero() {
        assert_eq!(PuzzleBoard::goal().manhattan_distance(), 0);
    }

    #[test]
    fn test_one_slide_distance() {
        // Blank slid one cell left from the goal: tile 8 is one cell off
        let board = PuzzleBoard::from_tiles(&[1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        assert_eq!(board.manhattan_distance(), 1);
    }

    #[test]
    fn test_distance_decomposes_per_tile() {
        // Moving tile 8 into its goal cell removes exactly its contribution
        let board = PuzzleBoard::from_tiles(&[1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        let delta = board.manhattan_distance() - PuzzleBoard::goal().manhattan_distance();
        assert_eq!(delta, 1);

        // Only tile 1 is displaced, by its full row+col offset of 4
        let far = PuzzleBoard::from_tiles(&[0, 2, 3, 4, 5, 6, 7, 8, 1]).unwrap();
        assert_eq!(far.manhattan_distance(), 4);
    }

    #[test]
    fn test_neighbor_counts() {
        // Corner blank
        let corner = PuzzleBoard::goal();
        assert_eq!(corner.neighbors().len(), 2);

        // Center blank
        let center = PuzzleBoard::from_tiles(&[1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();
        assert_eq!(center.neighbors().len(), 4);

        // Edge blank
        let edge = PuzzleBoard::from_tiles(&[1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(edge.neighbors().len(), 3);
    }

    #[test]
    fn test_neighbors_differ_by_one_adjacent_swap() {
        let board = PuzzleBoard::from_tiles(&[1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();
        let blank = board.blank_index();

        for neighbor in board.neighbors() {
            let diffs: Vec<usize> = (0..9)
                .filter(|&i| board.tiles()[i] != neighbor.tiles()[i])
                .collect();
            assert_eq!(diffs.len(), 2, "neighbor must differ in exactly two cells");
            assert!(diffs.contains(&blank));

            let other = if diffs[0] == blank { diffs[1] } else { diffs[0] };
            let dist = (blank / 3).abs_diff(other / 3) + (blank % 3).abs_diff(other % 3);
            assert_eq!(dist, 1, "swapped cell must be orthogonally adjacent");
        }
    }

    #[test]
    fn test_neighbor_order_is_deterministic() {
        let board = PuzzleBoard::from_tiles(&[1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();
        // Up, down, left, right from the center
        let expected = [
            [1, 0, 3, 4, 2, 5, 6, 7, 8],
            [1, 2, 3, 4, 7, 5, 6, 0, 8],
            [1, 2, 3, 0, 4, 5, 6, 7, 8],
            [1, 2, 3, 4, 5, 0, 6, 7, 8],
        ];
        let neighbors = board.neighbors();
        assert_eq!(neighbors.len(), 4);
        for (neighbor, tiles) in neighbors.iter().zip(expected.iter()) {
            assert_eq!(neighbor.tiles(), tiles);
        }
    }

    #[test]
    fn test_solvability_parity() {
        assert!(PuzzleBoard::goal().is_solvable());

        // Swapping two non-blank tiles flips parity
        let unsolvable = PuzzleBoard::from_tiles(&[2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        assert!(!unsolvable.is_solvable());
        assert_eq!(unsolvable.inversions(), 1);
    }

    #[test]
    fn test_from_tiles_rejects_wrong_count() {
        let result = PuzzleBoard::from_tiles(&[1, 2, 3]);
        assert!(matches!(
            result,
            Err(crate::Error::InvalidTileCount { got: 3, .. })
        ));
    }

    #[test]
    fn test_from_tiles_rejects_out_of_range() {
        let result = PuzzleBoard::from_tiles(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(matches!(
            result,
            Err(crate::Error::TileOutOfRange { value: 9, .. })
        ));
    }

    #[test]
    fn test_from_tiles_rejects_duplicates() {
        let result = PuzzleBoard::from_tiles(&[1, 1, 3, 4, 5, 6, 7, 8, 0]);
        assert!(matches!(
            result,
            Err(crate::Error::DuplicateTile { value: 1, .. })
        ));
    }

    #[test]
    fn test_from_string_formats() {
        let commas = PuzzleBoard::from_string("1,2,3,4,5,6,7,8,0").unwrap();
        let spaces = PuzzleBoard::from_string("1 2 3 4 5 6 7 8 0").unwrap();
        let digits = PuzzleBoard::from_string("123456780").unwrap();
        assert_eq!(commas, PuzzleBoard::goal());
        assert_eq!(spaces, PuzzleBoard::goal());
        assert_eq!(digits, PuzzleBoard::goal());

        assert!(PuzzleBoard::from_string("1,2,x,4,5,6,7,8,0").is_err());
        assert!(PuzzleBoard::from_string("1,2").is_err());
    }

    #[test]
    fn test_slide_adjacent_only() {
        let mut board = PuzzleBoard::goal(); // blank at index 8
        let original = board;

        // Index 0 is not adjacent to the blank
        assert!(!board.slide(0));
        assert_eq!(board, original);

        // Index 5 is directly above the blank
        assert!(board.slide(5));
        assert_eq!(board.tiles(), &[1, 2, 3, 4, 5, 0, 7, 8, 6]);

        // Out of range
        assert!(!board.slide(9));
    }

    #[test]
    fn test_display() {
        let board = PuzzleBoard::goal();
        let display = format!("{board}");
        assert!(display.contains(" 1 2 3"));
        assert!(display.contains(" 7 8 ."));
    }
}
