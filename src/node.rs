//! Positions in the search tree

use crate::evaluation::{evaluate, is_win_score};
use crate::grid::{Cell, Grid};
use crate::WIDTH;

/// A node of the search tree
///
/// Holds a grid together with the move that produced it and its depth
/// below the root. The static value is computed once on construction and
/// reused every time the node is visited.
#[derive(Clone, Debug)]
pub struct BoardState {
    grid: Grid,
    originating_move: Option<usize>,
    depth: usize,
    static_value: i32,
}

impl BoardState {
    /// Creates a root node from the live grid
    pub fn new(grid: Grid) -> Self {
        Self {
            static_value: evaluate(&grid),
            grid,
            originating_move: None,
            depth: 0,
        }
    }

    /// Creates a node reached by playing `column` at `depth` plies from the root
    pub fn with_move(grid: Grid, column: usize, depth: usize) -> Self {
        Self {
            static_value: evaluate(&grid),
            grid,
            originating_move: Some(column),
            depth,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The column played to reach this node, `None` for the root
    pub fn originating_move(&self) -> Option<usize> {
        self.originating_move
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn static_value(&self) -> i32 {
        self.static_value
    }

    /// A four-in-a-row has been completed by either side
    pub fn is_terminal(&self) -> bool {
        is_win_score(self.static_value)
    }

    /// Whether the search should stop expanding this node, either
    /// because the depth limit is reached or the game is won
    pub fn is_cutoff(&self, max_depth: usize) -> bool {
        self.is_terminal() || self.depth >= max_depth
    }

    /// The side whose token is dropped from this node: the computer on
    /// even plies, the opponent on odd plies
    pub fn side_to_move(&self) -> Cell {
        if self.depth % 2 == 0 {
            Cell::Computer
        } else {
            Cell::Opponent
        }
    }

    /// Every position reachable in one move, in column order
    ///
    /// Full columns are skipped, so the result is empty only on a full board.
    pub fn legal_successors(&self) -> Vec<BoardState> {
        let side = self.side_to_move();
        (0..WIDTH)
            .filter_map(|column| {
                self.grid
                    .dropped(column, side)
                    .map(|grid| BoardState::with_move(grid, column, self.depth + 1))
            })
            .collect()
    }
}
