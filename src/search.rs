//! A fixed-depth minimax agent for Connect 4

use crate::evaluation::is_win_score;
use crate::grid::Grid;
use crate::node::BoardState;
use crate::WIDTH;

/// Value of a maximizing node that has not found a move yet
pub const NEG_INFINITY: i32 = i32::MIN;
/// Value of a minimizing node that has not found a move yet
pub const INFINITY: i32 = i32::MAX;
/// The action reported by a node with no legal moves
pub const NO_ACTION: usize = 0;

/// A backed-up value and the column that achieves it
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    pub value: i32,
    pub action: usize,
}

impl SearchResult {
    pub fn new(value: i32, action: usize) -> Self {
        Self { value, action }
    }
}

/// An agent choosing moves for the computer by depth-limited minimax
/// with alpha-beta pruning
///
/// # Notes
/// The computer is always the maximizing side and moves at the root. The
/// search walks every line of play to `max_depth` plies, stopping early
/// on positions that are already won, and backs up the static values of
/// the positions it stops at. Among equally valued moves the leftmost
/// column is kept.
#[derive(Clone, Debug)]
pub struct Searcher {
    max_depth: usize,

    /// The number of nodes visited by the last search (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` looking `max_depth` plies ahead
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            node_count: 0,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    // a node the search stops at reports its own value and the move into it
    fn leaf(state: &BoardState) -> SearchResult {
        SearchResult::new(
            state.static_value(),
            state.originating_move().unwrap_or(NO_ACTION),
        )
    }

    /// Value of a node where the computer is to move
    pub fn max_value(&mut self, state: &BoardState, alpha: i32, beta: i32) -> SearchResult {
        self.node_count += 1;

        if state.is_cutoff(self.max_depth) {
            return Self::leaf(state);
        }
        self.expand_max(state, alpha, beta)
    }

    /// Value of a node where the opponent is to move
    pub fn min_value(&mut self, state: &BoardState, alpha: i32, beta: i32) -> SearchResult {
        self.node_count += 1;

        if state.is_cutoff(self.max_depth) {
            return Self::leaf(state);
        }
        self.expand_min(state, alpha, beta)
    }

    fn expand_max(&mut self, state: &BoardState, mut alpha: i32, beta: i32) -> SearchResult {
        let mut best = SearchResult::new(NEG_INFINITY, NO_ACTION);

        for successor in state.legal_successors() {
            let candidate = self.min_value(&successor, alpha, beta);

            // strictly greater, so the leftmost of equal moves is kept
            if candidate.value > best.value {
                best.value = candidate.value;
                best.action = successor.originating_move().unwrap_or(NO_ACTION);
            }

            // the opponent already has a better alternative elsewhere
            // and will never let play reach this position
            if best.value >= beta {
                return best;
            }
            if best.value > alpha {
                alpha = best.value;
            }
        }

        best
    }

    fn expand_min(&mut self, state: &BoardState, alpha: i32, mut beta: i32) -> SearchResult {
        let mut best = SearchResult::new(INFINITY, NO_ACTION);

        for successor in state.legal_successors() {
            let candidate = self.max_value(&successor, alpha, beta);

            if candidate.value < best.value {
                best.value = candidate.value;
                best.action = successor.originating_move().unwrap_or(NO_ACTION);
            }

            // the computer already has a better alternative elsewhere
            if best.value <= alpha {
                return best;
            }
            if best.value < beta {
                beta = best.value;
            }
        }

        best
    }

    /// Performs a full search from `grid`
    ///
    /// The root is always expanded, so the action is a move from `grid`
    /// even at depth 0 or on a position that is already won. A full grid
    /// has no moves and reports column [`NO_ACTION`].
    pub fn search(&mut self, grid: &Grid) -> SearchResult {
        self.node_count = 1;
        let root = BoardState::new(*grid);
        let mut result = self.expand_max(&root, NEG_INFINITY, INFINITY);

        // every move backed up the sentinel value (lines ending in a full
        // board), so the leftmost legal column is the first best move
        if result.value == NEG_INFINITY {
            if let Some(column) = (0..WIDTH).find(|&column| grid.playable(column)) {
                result.action = column;
            }
        }
        result
    }

    /// Calculates the column to play in `grid`
    pub fn choose_move(&mut self, grid: &Grid) -> usize {
        self._choose_move(grid, true)
    }

    /// Calculates the column to play in `grid`, logging the search to stdout
    pub fn choose_move_verbose(&mut self, grid: &Grid) -> usize {
        self._choose_move(grid, false)
    }

    fn _choose_move(&mut self, grid: &Grid, silent: bool) -> usize {
        let result = self.search(grid);

        if !silent {
            println!(
                "Search depth: {}, positions searched: {}, value: {}",
                self.max_depth, self.node_count, result.value
            );
            if is_win_score(result.value) {
                let side = if result.value > 0 { "computer" } else { "opponent" };
                println!("A win for the {} is within the search horizon", side);
            }
        }
        result.action
    }
}
