use anyhow::Result;

use std::io::{stdin, stdout, Write};

use connect4_minimax::{arena::Arena, search::Searcher, session::*, DEFAULT_DEPTH};

fn read_line() -> Result<String> {
    stdout().flush().expect("failed to flush to stdout!");
    let mut buffer = String::new();
    stdin().read_line(&mut buffer)?;
    Ok(buffer)
}

// asks until one of the two answers is given
fn prompt_choice(question: &str, yes: char, no: char) -> Result<bool> {
    loop {
        print!("{} {}/{}: ", question, yes, no);
        let buffer = read_line()?;
        match buffer.to_lowercase().chars().next() {
            Some(letter) if letter == yes => return Ok(true),
            Some(letter) if letter == no => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn prompt_depth(question: &str) -> Result<usize> {
    loop {
        print!("{} [{}]: ", question, DEFAULT_DEPTH);
        let buffer = read_line()?;
        let answer = buffer.trim();
        if answer.is_empty() {
            return Ok(DEFAULT_DEPTH);
        }
        match answer.parse::<usize>() {
            Ok(depth) if depth > 0 => return Ok(depth),
            _ => println!("Invalid depth: {}", answer),
        }
    }
}

fn run_match() -> Result<()> {
    let depth_a = prompt_depth("Search depth of engine A")?;
    let depth_b = prompt_depth("Search depth of engine B")?;

    let report = Arena::new(depth_a, depth_b).run_verbose()?;
    println!("{}", report);
    Ok(())
}

fn play_game() -> Result<()> {
    let depth = prompt_depth("Search depth of the computer")?;
    let computer_first = prompt_choice("Does the computer move first?", 'y', 'n')?;

    let mut session = GameSession::new(computer_first);
    let mut searcher = Searcher::new(depth);

    // game loop
    loop {
        session.display().expect("Failed to draw board!");

        match session.state {
            GameState::Playing => {
                let next_move =
                    // AI player
                    if session.computer_to_move() {
                        println!("AI is thinking...");
                        stdout().flush().expect("Failed to flush to stdout!");

                        let best_move = searcher.choose_move_verbose(session.grid());
                        println!("Best move: {}", best_move + 1);
                        best_move + 1

                    // human player
                    } else {
                        print!("Move input > ");
                        let input_str = read_line()?;

                        match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str.trim());
                                continue;
                            }
                            Ok(column) => column,
                        }
                    };

                if let Err(err) = session.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::ComputerWin => {
                println!("The computer wins!");
                break;
            }
            GameState::OpponentWin => {
                println!("You win!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    println!("Moves played: {}", session.game);
    Ok(())
}

fn main() -> Result<()> {
    println!("Welcome to Connect 4\n");

    if prompt_choice("Play against the computer or run an engine match?", 'p', 'm')? {
        play_game()
    } else {
        run_match()
    }
}
