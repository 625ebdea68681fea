//! This module defines general error types used throughout the crate.

use thiserror::Error;

/// Error type for converting integers to (C like) enums using TryFrom
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TryFromIntToEnumError {
    /// attempted to convert integer into enum value, but integer was out of bounds
    #[error("attempted to convert integer into enum value, but integer was out of bounds")]
    OutOfBounds,
}

/// Error for a move token that is not part of the published vocabulary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    /// The token does not name any move.
    #[error("no such move: `{0}`")]
    Unrecognized(String),
}

/// Returned when applying a list of tokens skipped some of them. Every recognised token in the
/// list was still applied, in order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("skipped {} unrecognized move(s)", .skipped.len())]
pub struct SkippedMovesError {
    /// Position of each skipped token in the input, along with why it was skipped.
    pub skipped: Vec<(usize, ParseMoveError)>,
}
