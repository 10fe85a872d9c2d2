//! Octahedron Puzzle
//!
//! Simulates an octahedral twisty puzzle with 8 face turns and 12 vertex
//! turns. Turns are animated over several frames in an interactive 3D viewer,
//! or can be applied headlessly from a move sequence.

mod keymap;
mod visualization;

use clap::{Parser, Subcommand};

use octahedron::engine::Engine;
use octahedron::{moves, notation};

/// Interactive octahedral twisty puzzle.
#[derive(Parser)]
#[command(name = "octahedron")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the puzzle in an interactive 3D viewer.
    Display {
        /// Move sequence to apply before the first frame, e.g. "1 10' 5".
        #[arg(long)]
        scramble: Option<String>,
        /// Animation steps to advance per rendered frame.
        #[arg(long, default_value_t = 1)]
        ticks_per_frame: u32,
    },
    /// Apply a move sequence and print the resulting slot assignment.
    Play {
        /// Whitespace-separated moves: `N`, `N'` (reverse), or `R` (reset).
        sequence: String,
    },
    /// Print the move table.
    Moves,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Display {
            scramble,
            ticks_per_frame,
        }) => run_display(scramble.as_deref(), ticks_per_frame),
        Some(Command::Play { sequence }) => run_play(&sequence),
        Some(Command::Moves) => print!("{}", moves::format_table()),
        None => run_display(None, 1),
    }
}

/// Opens the viewer, optionally with a scramble already applied.
fn run_display(scramble: Option<&str>, ticks_per_frame: u32) {
    let mut engine = Engine::new();
    if let Some(sequence) = scramble {
        match notation::parse_sequence(sequence) {
            Ok(tasks) => {
                for task in tasks {
                    engine.push(task);
                }
                engine.run_to_completion();
            }
            Err(e) => {
                eprintln!("Invalid scramble: {}", e);
                return;
            }
        }
    }

    println!("Controls: {}", keymap::HELP);
    visualization::display(engine, ticks_per_frame.max(1));
}

/// Applies a sequence headlessly and prints the final assignment.
fn run_play(sequence: &str) {
    match play(sequence) {
        Ok(output) => print!("{}", output),
        Err(e) => eprintln!("Invalid sequence: {}", e),
    }
}

/// Runs every move in `sequence` to completion and formats the result.
fn play(sequence: &str) -> Result<String, notation::NotationError> {
    let tasks = notation::parse_sequence(sequence)?;
    let mut engine = Engine::new();
    for &task in &tasks {
        engine.push(task);
    }
    let ticks = engine.run_to_completion();

    let mut output = format!(
        "Applied {} task(s) in {} ticks: {}\n\n",
        tasks.len(),
        ticks,
        notation::format_sequence(&tasks)
    );
    output.push_str(&engine.permutation().to_string());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use octahedron::permutation::Permutation;

    use super::*;

    #[test]
    fn test_scramble_snapshot() {
        let output = play("1 10 12' 5 20' 3 9 14 7' 16").unwrap();
        insta::assert_snapshot!(output);
    }

    #[test]
    fn test_play_rejects_bad_sequence() {
        assert!(play("1 2 banana").is_err());
        assert!(play("22").is_err());
    }

    #[test]
    fn test_play_reset_yields_identity() {
        let output = play("1 2 3 R").unwrap();
        assert!(output.starts_with("Applied 4 task(s) in 1 ticks: 1 2 3 R"));
        assert!(output.ends_with(&Permutation::identity().to_string()));
    }
}
