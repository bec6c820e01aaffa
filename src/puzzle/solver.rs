//! A* search engine for the 8-puzzle

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashSet},
    time::{Duration, Instant},
};

use serde::Serialize;

use super::board::PuzzleBoard;

/// Result of a solve run.
///
/// `path` is the full board sequence from the start state through the goal
/// inclusive, or `None` when the goal is unreachable (odd-parity input).
/// `moves` equals `path.len() - 1` for solved boards and 0 otherwise.
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub path: Option<Vec<PuzzleBoard>>,
    pub moves: usize,
    /// Number of states expanded (closed) during the search
    pub expanded: usize,
    pub elapsed: Duration,
}

/// A frontier entry: estimated total cost, cost so far, the board, and an
/// owned copy of the path leading to it (start inclusive, board exclusive).
#[derive(Debug, Clone)]
struct Node {
    f: u32,
    g: u32,
    board: PuzzleBoard,
    path: Vec<PuzzleBoard>,
}

// BinaryHeap is a max-heap, so the ordering is reversed to pop the cheapest
// entry first. Ties break deterministically: lower f, then lower g, then
// lexicographically smaller board.
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.board.cmp(&self.board))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.g == other.g && self.board == other.board
    }
}

impl Eq for Node {}

/// Solve a puzzle board with A* under the Manhattan-distance heuristic.
///
/// The heuristic is admissible and consistent, so the returned path length
/// is the true minimum move count for the board. A closed set over board
/// values prevents re-expansion; with at most 9!/2 = 181,440 reachable
/// configurations the search always terminates, reporting `path: None` for
/// the unsolvable half of the permutation space.
pub fn solve(start: &PuzzleBoard) -> Solution {
    let timer = Instant::now();

    let mut frontier = BinaryHeap::new();
    frontier.push(Node {
        f: start.manhattan_distance(),
        g: 0,
        board: *start,
        path: Vec::new(),
    });
    let mut closed: HashSet<PuzzleBoard> = HashSet::new();

    while let Some(Node {
        g, board, mut path, ..
    }) = frontier.pop()
    {
        if board.is_goal() {
            path.push(board);
            return Solution {
                moves: path.len() - 1,
                path: Some(path),
                expanded: closed.len(),
                elapsed: timer.elapsed(),
            };
        }

        if !closed.insert(board) {
            continue;
        }
        path.push(board);

        for neighbor in board.neighbors() {
            if closed.contains(&neighbor) {
                continue;
            }
            let next_g = g + 1;
            frontier.push(Node {
                f: next_g + neighbor.manhattan_distance(),
                g: next_g,
                board: neighbor,
                path: path.clone(),
            });
        }
    }

    Solution {
        path: None,
        moves: 0,
        expanded: closed.len(),
        elapsed: timer.elapsed(),
    }
}
