//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the tic-tac-toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Parse a player token ("X"/"x" or "O"/"o").
    ///
    /// # Errors
    ///
    /// Returns error for any other string.
    pub fn from_str_token(s: &str) -> Result<Player, crate::Error> {
        match s {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            _ => Err(crate::Error::InvalidPlayerString {
                player: s.to_string(),
            }),
        }
    }
}

/// Progress of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Win(Player),
    Draw,
}

/// Mutable tic-tac-toe board: 9 cells, no turn tracking.
///
/// Turn alternation is deliberately the caller's responsibility; the board
/// only refuses placements into occupied cells. This keeps the board a pure
/// value that engines and drivers can share without a protocol for whose
/// move it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameBoard {
    cells: [Cell; 9],
}

impl GameBoard {
    /// Create a new empty board
    pub fn new() -> Self {
        GameBoard {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from a 9-character string of 'X', 'O' and '.'
    /// (whitespace is filtered out).
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 non-whitespace characters are present
    /// or any character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(GameBoard { cells })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions, in increasing index order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Place a mark for `player` at `pos`.
    ///
    /// Returns false (board unchanged) when the position is out of range or
    /// already occupied.
    pub fn place(&mut self, pos: usize, player: Player) -> bool {
        if pos >= 9 || self.cells[pos] != Cell::Empty {
            return false;
        }
        self.cells[pos] = player.to_cell();
        true
    }

    /// Clear all cells for a new game
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if a player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        super::lines::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Current status: ongoing, won, or drawn
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Win(player),
            None if self.is_full() => GameStatus::Draw,
            None => GameStatus::Ongoing,
        }
    }
}

impl Default for GameBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
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
    fn test_new_board_is_empty() {
        let board = GameBoard::new();
        assert_eq!(board.empty_positions().len(), 9);
        assert_eq!(board.status(), GameStatus::Ongoing);
    }

    #[test]
    fn test_place_and_occupied_rejection() {
        let mut board = GameBoard::new();
        assert!(board.place(4, Player::X));
        assert_eq!(board.get(4), Cell::X);

        let before = board;
        assert!(!board.place(4, Player::O), "occupied cell must be rejected");
        assert_eq!(board, before, "failed placement must not change the board");

        assert!(!board.place(9, Player::O), "out of range must be rejected");
        assert_eq!(board, before);
    }

    #[test]
    fn test_reset() {
        let mut board = GameBoard::new();
        board.place(0, Player::X);
        board.place(4, Player::O);
        board.reset();
        assert_eq!(board, GameBoard::new());
    }

    #[test]
    fn test_win_detection_rows_columns_diagonals() {
        let row = GameBoard::from_string("XXX......").unwrap();
        assert!(row.has_won(Player::X));
        assert_eq!(row.status(), GameStatus::Win(Player::X));

        let column = GameBoard::from_string("O..O..O..").unwrap();
        assert!(column.has_won(Player::O));

        let diagonal = GameBoard::from_string("X...X...X").unwrap();
        assert!(diagonal.has_won(Player::X));

        let anti_diagonal = GameBoard::from_string("..O.O.O..").unwrap();
        assert!(anti_diagonal.has_won(Player::O));
    }

    #[test]
    fn test_draw_detection() {
        let board = GameBoard::from_string("XOXXOOOXX").unwrap();
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
        assert_eq!(board.status(), GameStatus::Draw);
    }

    #[test]
    fn test_from_string_rejects_bad_input() {
        assert!(GameBoard::from_string("XO").is_err());
        assert!(GameBoard::from_string("XOZ......").is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        let board = GameBoard::from_string("XOX.O.X..").unwrap();
        let display = format!("{board}");
        assert!(display.contains("XOX"));
        assert!(display.contains(".O."));
        let reparsed = GameBoard::from_string(&display).unwrap();
        assert_eq!(reparsed, board);
    }
}
