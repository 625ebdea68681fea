//! A library which simulates a 3x3x3 twisty puzzle as a set of colored facelets, along with the
//! moves that permute them. Solving is left to whoever consumes the move primitives.

#![deny(missing_docs)]

pub mod cube333;
pub mod error;
pub mod moves;
