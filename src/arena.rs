//! Matches between two searchers of different depths

use anyhow::{anyhow, Result};
use indicatif::*;
use rayon::prelude::*;

use std::fmt;
use std::time::Instant;

use crate::search::Searcher;
use crate::session::{GameSession, GameState};
use crate::WIDTH;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    WinA,
    WinB,
    Draw,
}

/// Tally of a finished match
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct MatchReport {
    pub games: usize,
    pub wins_a: usize,
    pub wins_b: usize,
    pub draws: usize,
}

impl MatchReport {
    fn record(mut self, outcome: Outcome) -> Self {
        self.games += 1;
        match outcome {
            Outcome::WinA => self.wins_a += 1,
            Outcome::WinB => self.wins_b += 1,
            Outcome::Draw => self.draws += 1,
        }
        self
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: A won {}, B won {}, {} drawn",
            self.games, self.wins_a, self.wins_b, self.draws
        )
    }
}

/// Every opening of two moves, as 1-indexed column strings
pub fn two_move_openings() -> Vec<String> {
    (1..=WIDTH)
        .flat_map(|first| (1..=WIDTH).map(move |second| format!("{}{}", first, second)))
        .collect()
}

/// Plays searcher A against searcher B from a set of openings
///
/// Every opening is played twice so each side gets to move first. Both
/// searchers see the board from their own side: A plays the computer's
/// tokens and B is handed the grid with the tokens swapped.
#[derive(Clone, Debug)]
pub struct Arena {
    depth_a: usize,
    depth_b: usize,
    openings: Vec<String>,
}

impl Arena {
    pub fn new(depth_a: usize, depth_b: usize) -> Self {
        Self {
            depth_a,
            depth_b,
            openings: two_move_openings(),
        }
    }

    /// Replaces the default openings
    pub fn with_openings(mut self, openings: Vec<String>) -> Self {
        self.openings = openings;
        self
    }

    /// Plays a single game after `opening`, with A moving first if `a_first`
    pub fn play_game(&self, opening: &str, a_first: bool) -> Result<Outcome> {
        let mut searcher_a = Searcher::new(self.depth_a);
        let mut searcher_b = Searcher::new(self.depth_b);
        let mut session = GameSession::new(a_first);

        for column_char in opening.chars() {
            let column = column_char
                .to_digit(10)
                .ok_or_else(|| anyhow!("could not parse '{}' as a valid move", column_char))?;
            session.play_checked(column as usize)?;
        }

        while session.state == GameState::Playing {
            let column = if session.computer_to_move() {
                searcher_a.choose_move(session.grid())
            } else {
                searcher_b.choose_move(&session.grid().swapped())
            };
            session.play_checked(column + 1)?;
        }

        Ok(match session.state {
            GameState::ComputerWin => Outcome::WinA,
            GameState::OpponentWin => Outcome::WinB,
            _ => Outcome::Draw,
        })
    }

    /// Plays the whole match
    pub fn run(&self) -> Result<MatchReport> {
        self._run(true)
    }

    /// Plays the whole match, reporting progress on the terminal
    pub fn run_verbose(&self) -> Result<MatchReport> {
        self._run(false)
    }

    fn _run(&self, silent: bool) -> Result<MatchReport> {
        let start = Instant::now();
        let games: Vec<(&str, bool)> = self
            .openings
            .iter()
            .flat_map(|opening| vec![(opening.as_str(), true), (opening.as_str(), false)])
            .collect();

        let progress = if silent {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(games.len() as u64)
        };
        progress.set_style(
            ProgressStyle::default_bar()
                .template("Playing games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
                .progress_chars("█▓▒░  "),
        );

        let outcomes = games
            .par_iter()
            .map(|&(opening, a_first)| {
                let outcome = self.play_game(opening, a_first);
                progress.inc(1);
                outcome
            })
            .collect::<Result<Vec<Outcome>>>()?;

        progress.finish();

        let report = outcomes
            .into_iter()
            .fold(MatchReport::default(), MatchReport::record);

        if !silent {
            println!(
                "Depth {} against depth {}: {} in {}",
                self.depth_a,
                self.depth_b,
                report,
                HumanDuration(Instant::now() - start)
            );
        }
        Ok(report)
    }
}
