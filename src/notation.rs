//! Text notation for move sequences.
//!
//! A sequence is a whitespace-separated list of tokens:
//! - `N` turns move code `N` forward,
//! - `N'` turns move code `N` in reverse,
//! - `R` resets the puzzle.

use thiserror::Error;

use crate::engine::Task;
use crate::moves::{Direction, MoveCode, MoveError};

/// Error raised while parsing a move sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid token {0:?}")]
    BadToken(String),
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Parses a single token.
pub fn parse_token(token: &str) -> Result<Task, NotationError> {
    if token.eq_ignore_ascii_case("r") {
        return Ok(Task::Reset);
    }
    let (digits, direction) = match token.strip_suffix('\'') {
        Some(digits) => (digits, Direction::Reverse),
        None => (token, Direction::Forward),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NotationError::BadToken(token.to_owned()));
    }
    let code: u8 = digits
        .parse()
        .map_err(|_| NotationError::BadToken(token.to_owned()))?;
    Ok(Task::Turn(MoveCode::new(code)?, direction))
}

/// Parses a whitespace-separated sequence of tokens.
pub fn parse_sequence(text: &str) -> Result<Vec<Task>, NotationError> {
    text.split_whitespace().map(parse_token).collect()
}

/// Formats tasks back into notation.
pub fn format_sequence(tasks: &[Task]) -> String {
    let tokens: Vec<String> = tasks
        .iter()
        .map(|task| match task {
            Task::Reset => "R".to_owned(),
            Task::Turn(code, Direction::Forward) => code.to_string(),
            Task::Turn(code, Direction::Reverse) => format!("{code}'"),
        })
        .collect();
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(code: u8, direction: Direction) -> Task {
        Task::Turn(MoveCode::new(code).unwrap(), direction)
    }

    #[test]
    fn test_parse_sequence() {
        let tasks = parse_sequence("1 10'  R\t20").unwrap();
        assert_eq!(
            tasks,
            [
                turn(1, Direction::Forward),
                turn(10, Direction::Reverse),
                Task::Reset,
                turn(20, Direction::Forward),
            ]
        );
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(parse_sequence("  "), Ok(vec![]));
    }

    #[test]
    fn test_rejects_bad_tokens() {
        assert_eq!(
            parse_token("x"),
            Err(NotationError::BadToken("x".to_owned()))
        );
        assert_eq!(
            parse_token("'"),
            Err(NotationError::BadToken("'".to_owned()))
        );
        assert_eq!(
            parse_token("-3"),
            Err(NotationError::BadToken("-3".to_owned()))
        );
        assert_eq!(
            parse_token("999"),
            Err(NotationError::BadToken("999".to_owned()))
        );
    }

    #[test]
    fn test_rejects_unknown_codes() {
        assert_eq!(
            parse_token("21"),
            Err(NotationError::Move(MoveError::UnknownMoveCode(21)))
        );
        assert_eq!(
            parse_token("0'"),
            Err(NotationError::Move(MoveError::UnknownMoveCode(0)))
        );
    }

    #[test]
    fn test_format_matches_input() {
        let text = "3 14' R 9";
        assert_eq!(format_sequence(&parse_sequence(text).unwrap()), text);
    }
}
