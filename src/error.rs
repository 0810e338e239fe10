use alloc::string::String;
use core::fmt;

use thiserror::Error;


/// Which of the two endpoint lines a coordinate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::Start => "start",
            Endpoint::End => "end",
        })
    }
}

/// Everything that can go wrong when loading, solving, or rendering a maze.
///
/// Validation variants come out of [`crate::parse`] and carry the offending line or value.
/// `NoGrid` and `NotSolved` are API misuse by the caller.
/// Line numbers are 1-based, counted from the top of the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze must have a name")]
    MissingName,

    #[error("start line {line:?} is not of the form <label>:<row>-<col>")]
    MalformedStart { line: String },

    #[error("end line {line:?} is not of the form <label>:<row>-<col>")]
    MalformedEnd { line: String },

    #[error("{endpoint} coordinate {value:?} is not an integer")]
    NonIntegerCoordinate { endpoint: Endpoint, value: String },

    #[error("line {line}: expected {expected} cells, found {found}; maze is not rectangular")]
    NonRectangularGrid { line: usize, expected: usize, found: usize },

    #[error("line {line}, column {column}: invalid cell symbol {symbol:?}")]
    InvalidCellSymbol { line: usize, column: usize, symbol: String },

    #[error("maze grid cannot be empty")]
    EmptyGrid,

    #[error("start point {row}-{col} is outside the {rows}x{cols} maze")]
    StartOutOfBounds { row: i64, col: i64, rows: usize, cols: usize },

    #[error("end point {row}-{col} is outside the {rows}x{cols} maze")]
    EndOutOfBounds { row: i64, col: i64, rows: usize, cols: usize },

    #[error("start point {row}-{col} is not on a path")]
    StartNotOnPath { row: usize, col: usize },

    #[error("end point {row}-{col} is not on a path")]
    EndNotOnPath { row: usize, col: usize },

    #[error("no maze has been loaded")]
    NoGrid,

    #[error("maze has not been solved yet")]
    NotSolved,
}

impl MazeError {
    /// `true` for errors raised while validating input text, `false` for state errors.
    pub fn is_validation(&self) -> bool {
        !matches!(self, MazeError::NoGrid | MazeError::NotSolved)
    }
}
