//! A game of Connect 4 between the computer and an opponent

use anyhow::{anyhow, Result};
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use crate::evaluation::winner;
use crate::grid::{Cell, Grid};
use crate::{HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    ComputerWin,
    OpponentWin,
    Draw,
}

/// The live board of a game along with whose turn it is
#[derive(Clone, Debug)]
pub struct GameSession {
    grid: Grid,
    computer_to_move: bool,
    /// The 1-indexed columns played so far
    pub game: String,
    num_moves: usize,
    pub state: GameState,
}

impl GameSession {
    pub fn new(computer_first: bool) -> Self {
        Self {
            grid: Grid::new(),
            computer_to_move: computer_first,
            game: String::new(),
            num_moves: 0,
            state: GameState::Playing,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn computer_to_move(&self) -> bool {
        self.computer_to_move
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    /// The token of the side to move
    pub fn current_player(&self) -> Cell {
        if self.computer_to_move {
            Cell::Computer
        } else {
            Cell::Opponent
        }
    }

    /// Plays a 1-indexed column for the side to move
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if self.state != GameState::Playing {
            return Err(anyhow!("Invalid move, the game is over"));
        }
        if column_one_indexed < 1 || column_one_indexed > WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                WIDTH
            ));
        }
        let column = column_one_indexed - 1;
        self.grid = self
            .grid
            .dropped(column, self.current_player())
            .ok_or_else(|| anyhow!("Invalid move, column {} full", column_one_indexed))?;

        self.state = match winner(&self.grid) {
            Some(Cell::Computer) => GameState::ComputerWin,
            Some(Cell::Opponent) => GameState::OpponentWin,
            _ if self.grid.is_full() => GameState::Draw,
            _ => GameState::Playing,
        };
        self.game.push_str(&column_one_indexed.to_string());
        self.num_moves += 1;
        self.computer_to_move = !self.computer_to_move;

        Ok(self.state)
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;
        for _ in 0..HEIGHT {
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;

        let (origin_x, origin_y) = crossterm::cursor::position()?;

        for (row, cells) in self.grid.rows().iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                // the bottom row sits on the cursor line
                let (pos_x, pos_y) = (
                    origin_x + column as u16,
                    origin_y - (HEIGHT - 1 - row) as u16,
                );

                stdout
                    .queue(MoveTo(pos_x, pos_y))?
                    .queue(PrintStyledContent(
                        style("O")
                            .attribute(Attribute::Bold)
                            .on(Color::DarkBlue)
                            .with(match cell {
                                Cell::Computer => Color::Red,
                                Cell::Opponent => Color::Yellow,
                                Cell::Empty => Color::DarkBlue,
                            }),
                    ))?;
            }
        }
        stdout
            .queue(MoveTo(origin_x + WIDTH as u16, origin_y))?
            .queue(PrintStyledContent(style("\n")))?;
        stdout.flush()?;
        Ok(())
    }
}
