//! Random generation of solvable puzzle boards

use rand::{Rng, seq::SliceRandom};

use super::board::PuzzleBoard;

/// Draw a uniformly random solvable board.
///
/// Shuffles the tiles 0-8 and redraws until the inversion count is even,
/// the parity invariant that guarantees the goal is reachable. Half of all
/// permutations are solvable, so the loop terminates almost surely after a
/// couple of draws.
///
/// Takes the RNG explicitly so callers can seed it for reproducible boards.
pub fn solvable_board<R: Rng + ?Sized>(rng: &mut R) -> PuzzleBoard {
    let mut tiles: [u8; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
    loop {
        tiles.shuffle(rng);
        let board = PuzzleBoard::from_tiles(&tiles)
            .expect("shuffled permutation of 0-8 is always a valid board");
        if board.is_solvable() {
            return board;
        }
    }
}
