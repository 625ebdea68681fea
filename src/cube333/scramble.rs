//! Random scrambles. Every scramble is driven by an explicit seed, so the same seed always gives
//! the same moves.

use super::moves::{Move333, MoveGenerator, Primitive};
use super::FaceletCube;
use crate::moves::MoveSequence;

/// Draw `count` moves independently and uniformly from the move generator `G`.
pub fn random_moves<G: MoveGenerator>(
    rng: &mut fastrand::Rng,
    count: usize,
) -> MoveSequence<Move333> {
    (0..count)
        .map(|_| G::MOVE_LIST[rng.usize(..G::SIZE)])
        .collect()
}

impl FaceletCube {
    /// Apply `count` random layer moves, chosen from a generator seeded with `seed`. Whole cube
    /// turns are never chosen. Returns the moves that were applied.
    pub fn scramble(&mut self, count: usize, seed: u64) -> MoveSequence<Move333> {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mvs = random_moves::<Primitive>(&mut rng, count);
        log::info!("scrambling with {count} moves from seed {seed}");
        self.make_moves(&mvs);
        mvs
    }
}
