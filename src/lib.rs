//! A fixed-depth minimax agent for the board game 'Connect 4'
//!
//! This agent walks the game tree to a configured number of plies with
//! alpha-beta pruning, scoring the positions it stops at with a static
//! evaluation of every four-cell window on the board.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{grid::Grid, search::Searcher};
//!
//! let mut searcher = Searcher::new(1);
//! let column = searcher.choose_move(&Grid::new());
//!
//! // the centre column takes part in the most windows
//! assert_eq!(column, 3);
//! ```

use static_assertions::*;
pub use anyhow;

pub mod grid;

pub mod evaluation;

pub mod node;

pub mod search;

pub mod session;

pub mod arena;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of tiles in a row needed to win
pub const CONNECT: usize = 4;

/// The search depth used by the front end when none is given
pub const DEFAULT_DEPTH: usize = 6;

// a winning window must fit on the board in every orientation
const_assert!(WIDTH >= CONNECT && HEIGHT >= CONNECT);
