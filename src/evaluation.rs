//! Static evaluation of a grid from the computer's point of view
//!
//! # Scoring
//! Every run of four consecutive tiles (horizontal, vertical and both
//! diagonals) is scored on its own and the scores are summed. A window
//! holding tokens of only one side is worth that side's entry in
//! [`RUN_UTILITY`], positive for the computer and negative for the
//! opponent. Windows holding tokens of both sides can never be completed
//! and score nothing.

use crate::grid::{Cell, Grid};
use crate::{CONNECT, HEIGHT, WIDTH};

/// Utility of a window by the number of tokens of a single side in it
///
/// The values are cumulative: a window of 3 is worth 100 + 10 + 1, and a
/// completed window 1,000,000 + 100 + 10 + 1.
pub const RUN_UTILITY: [i32; CONNECT + 1] = [0, 1, 11, 111, 1_111_111];

/// Scores beyond this magnitude only arise from a completed four-in-a-row
pub const WIN_THRESHOLD: i32 = 95_000;

/// The four directions a window can run in
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// top-left to bottom-right
    Diagonal,
    /// bottom-left to top-right
    AntiDiagonal,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::Diagonal,
        Orientation::AntiDiagonal,
    ];

    // (row step, column step)
    fn step(&self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::Diagonal => (1, 1),
            Orientation::AntiDiagonal => (-1, 1),
        }
    }

    /// Every window of `CONNECT` tiles running in this direction, as
    /// (row, column) coordinates
    pub fn windows(self) -> impl Iterator<Item = [(usize, usize); CONNECT]> {
        let (rows, columns) = match self {
            Orientation::Horizontal => (0..HEIGHT, 0..WIDTH - CONNECT + 1),
            Orientation::Vertical => (0..HEIGHT - CONNECT + 1, 0..WIDTH),
            Orientation::Diagonal => (0..HEIGHT - CONNECT + 1, 0..WIDTH - CONNECT + 1),
            Orientation::AntiDiagonal => (CONNECT - 1..HEIGHT, 0..WIDTH - CONNECT + 1),
        };
        let (row_step, column_step) = self.step();

        rows.flat_map(move |row| columns.clone().map(move |column| (row, column)))
            .map(move |(row, column)| {
                let mut window = [(0, 0); CONNECT];
                for (i, tile) in window.iter_mut().enumerate() {
                    *tile = (
                        (row as isize + row_step * i as isize) as usize,
                        (column as isize + column_step * i as isize) as usize,
                    );
                }
                window
            })
    }
}

/// Counts the (computer, opponent) tokens in a window
fn tally(grid: &Grid, window: &[(usize, usize); CONNECT]) -> (usize, usize) {
    window
        .iter()
        .fold((0, 0), |(computer, opponent), &(row, column)| {
            match grid.get(row, column) {
                Cell::Computer => (computer + 1, opponent),
                Cell::Opponent => (computer, opponent + 1),
                Cell::Empty => (computer, opponent),
            }
        })
}

/// Utility of a single window holding the given token counts
pub fn window_utility(computer: usize, opponent: usize) -> i32 {
    match (computer, opponent) {
        (computer, 0) => RUN_UTILITY[computer],
        (0, opponent) => -RUN_UTILITY[opponent],
        // blocked by both sides
        _ => 0,
    }
}

fn check(grid: &Grid, orientation: Orientation) -> i32 {
    orientation
        .windows()
        .map(|window| {
            let (computer, opponent) = tally(grid, &window);
            window_utility(computer, opponent)
        })
        .sum()
}

pub fn check_horizontal(grid: &Grid) -> i32 {
    check(grid, Orientation::Horizontal)
}

pub fn check_vertical(grid: &Grid) -> i32 {
    check(grid, Orientation::Vertical)
}

/// Both diagonal directions
pub fn check_diagonal(grid: &Grid) -> i32 {
    check(grid, Orientation::Diagonal) + check(grid, Orientation::AntiDiagonal)
}

/// The static value of a grid, positive values favour the computer
pub fn evaluate(grid: &Grid) -> i32 {
    check_horizontal(grid) + check_vertical(grid) + check_diagonal(grid)
}

/// Whether a static value can only come from a completed four-in-a-row
pub fn is_win_score(score: i32) -> bool {
    score > WIN_THRESHOLD || score < -WIN_THRESHOLD
}

/// The side owning a completed four-in-a-row, if any
pub fn winner(grid: &Grid) -> Option<Cell> {
    Orientation::ALL
        .iter()
        .flat_map(|orientation| orientation.windows())
        .find_map(|window| match tally(grid, &window) {
            (CONNECT, _) => Some(Cell::Computer),
            (_, CONNECT) => Some(Cell::Opponent),
            _ => None,
        })
}
