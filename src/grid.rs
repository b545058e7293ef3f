//! The board grid shared by the search tree and the game session

use anyhow::{anyhow, bail, Result};

use std::fmt;

use crate::{HEIGHT, WIDTH};

/// The occupant of a single board tile, seen from the computer's side
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Computer,
    Opponent,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    /// The token of the other side, `Empty` stays `Empty`
    pub fn other(&self) -> Self {
        match self {
            Cell::Computer => Cell::Opponent,
            Cell::Opponent => Cell::Computer,
            Cell::Empty => Cell::Empty,
        }
    }

    fn symbol(&self) -> char {
        match self {
            Cell::Computer => 'X',
            Cell::Opponent => 'O',
            Cell::Empty => '.',
        }
    }
}

/// A 6x7 Connect 4 grid
///
/// Row 0 is the top of the board and tokens fall towards row `HEIGHT - 1`.
/// Grids are plain values: every move produces a new grid, so positions in
/// different branches of a search never share storage.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Grid {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Builds a grid from rows listed top to bottom
    ///
    /// Fails if there are not exactly `HEIGHT` rows of `WIDTH` cells each.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self> {
        if rows.len() != HEIGHT {
            bail!(
                "Invalid grid, expected {} rows but found {}",
                HEIGHT,
                rows.len()
            );
        }
        let mut grid = Self::new();
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != WIDTH {
                bail!(
                    "Invalid grid, row {} has {} columns, expected {}",
                    row,
                    cells.len(),
                    WIDTH
                );
            }
            grid.cells[row].copy_from_slice(cells);
        }
        Ok(grid)
    }

    /// Builds a grid by playing a string of 1-indexed columns, alternating
    /// sides starting with `first`
    pub fn from_moves<S: AsRef<str>>(moves: S, first: Cell) -> Result<Self> {
        if first.is_empty() {
            bail!("The first player must be the computer or the opponent");
        }
        let mut grid = Self::new();
        let mut player = first;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    grid = grid
                        .dropped(column - 1, player)
                        .ok_or_else(|| anyhow!("Invalid move, column {} full", column))?;
                    player = player.other();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(grid)
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// A column can be played while its top tile is free
    pub fn playable(&self, column: usize) -> bool {
        column < WIDTH && self.cells[0][column].is_empty()
    }

    /// Returns a copy of this grid with `cell` dropped into `column`,
    /// or `None` if the column is full
    pub fn dropped(&self, column: usize, cell: Cell) -> Option<Self> {
        if !self.playable(column) {
            return None;
        }
        // the lowest free tile, scanning up from the floor
        let row = (0..HEIGHT)
            .rev()
            .find(|&row| self.cells[row][column].is_empty())?;

        let mut next = *self;
        next.cells[row][column] = cell;
        Some(next)
    }

    /// Exchanges the computer's and opponent's tokens
    pub fn swapped(&self) -> Self {
        let mut next = *self;
        for cell in next.cells.iter_mut().flat_map(|row| row.iter_mut()) {
            *cell = cell.other();
        }
        next
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| !self.playable(column))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == cell)
            .count()
    }

    pub fn rows(&self) -> &[[Cell; WIDTH]; HEIGHT] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            let line: String = row.iter().map(Cell::symbol).collect();
            writeln!(f, "{}", line)?;
        }
        let ruler: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        write!(f, "{}", ruler)
    }
}
