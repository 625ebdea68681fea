//! Module for puzzle move generics and related functionality

/// A move, for use in writing expressions or algorithms. It is intended that a term of this trait
/// is a symbol in some group presentation, satisfying laws allowing simplification.
///
/// The only relations assumed here are that every move has an inverse and that some moves commute
/// (e.g. L and R on a 3x3x3). Commutativity relations are encoded in the `commutes_with` method.
/// These relations are all that are assumed for the general `MoveSequence::cancel`.
pub trait Move: Eq + Clone {
    /// Take the inverse of a move. These inverses must satisfy the invertibility conditions of
    /// a group, i.e. that `X X^{-1} = X^{-1} X = e` where `e` is the empty sequence.
    fn inverse(self) -> Self
    where
        Self: Sized;

    /// Returns whether the two moves commute, i.e. can be swapped when adjacent. It is required
    /// that this property is transitive.
    ///
    /// If A and B are moves, then `A.commutes_with(B)` iff
    /// `A B = B A`
    /// moreover, if `B.commutes_with(C)`, then it must be true that `A.commutes_with(C)`
    fn commutes_with(&self, b: &Self) -> bool;

    /// Returns whether `self b` is the empty sequence.
    ///
    /// ```rust
    /// # fn main() {
    /// use facelet_cube::mv;
    /// use facelet_cube::cube333::moves::{Move333, Move333Type};
    /// use facelet_cube::moves::Move;
    ///
    /// assert!(mv!(R).cancels_with(&mv!(R, i)));
    /// assert!(!mv!(R).cancels_with(&mv!(R)));
    /// assert!(!mv!(R).cancels_with(&mv!(L, i)));
    /// # }
    /// ```
    fn cancels_with(&self, b: &Self) -> bool {
        self.clone().inverse() == *b
    }
}

/// A sequence of moves (also known as an algorithm) for some specific type of move.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct MoveSequence<M: Move>(pub Vec<M>);

impl<M: Move> MoveSequence<M> {
    /// Invert a sequence of moves.
    ///
    /// If `X` is a sequence of moves and `X^{-1}` is its inverse and `o` is composition, then
    /// `X o X^{-1} = X^{-1} o X = e` where `e` is the empty sequence.
    pub fn inverse(self) -> Self {
        Self(self.0.into_iter().rev().map(|m| m.inverse()).collect())
    }

    /// Remove every move that cancels with an inverse, including through runs of moves that
    /// commute with it.
    pub fn cancel(mut self) -> Self {
        let mut cancellation: Vec<M> = Vec::new();

        for next_mv in self.0.drain(..) {
            // Walk back over the reduced prefix for as long as `next_mv` could be commuted
            // further left. The first inverse we meet is removed along with `next_mv`.
            let mut cancelled = false;

            for i in (0..cancellation.len()).rev() {
                if cancellation[i].cancels_with(&next_mv) {
                    cancellation.remove(i);
                    cancelled = true;
                    break;
                }

                if !next_mv.commutes_with(&cancellation[i]) {
                    break;
                }
            }

            if !cancelled {
                cancellation.push(next_mv);
            }
        }

        Self(cancellation)
    }

    /// Append another sequence to the end of this one.
    pub fn append(mut self, mut other: Self) -> Self {
        self.0.append(&mut other.0);
        self
    }

    /// The number of moves in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the moves in order.
    pub fn iter(&self) -> std::slice::Iter<'_, M> {
        self.0.iter()
    }
}

impl<M: Move> FromIterator<M> for MoveSequence<M> {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<M: Move> IntoIterator for MoveSequence<M> {
    type Item = M;
    type IntoIter = std::vec::IntoIter<M>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<M: Move + std::fmt::Display> std::fmt::Display for MoveSequence<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for m in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{m}")?;
            first = false;
        }
        Ok(())
    }
}
