//! The move vocabulary of the 3x3x3 and its application to a `FaceletCube`.

use super::FaceletCube;
use crate::error::{ParseMoveError, SkippedMovesError};
use crate::moves::MoveSequence;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// Represents each type of move. Note that the `Move333` struct uses this along with a flag to
/// represent inverted moves such as `ri`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Move333Type {
    /// Left face
    L,
    /// Middle column, turning the same way as L
    M,
    /// Right face
    R,
    /// Up face
    U,
    /// Equatorial row, turning the same way as D
    E,
    /// Down face
    D,
    /// Front face
    F,
    /// Standing layer, turning the same way as F
    S,
    /// Back face
    B,
    /// Turn the whole cube so the front face moves to the left
    TurnLeft,
    /// Turn the whole cube so the front face moves to the right
    TurnRight,
    /// Turn the whole cube so the front face moves up
    TurnUp,
    /// Turn the whole cube so the front face moves down
    TurnDown,
}

/// The category a move type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// An outer layer turn: a slice of the four neighbouring faces and a rotation of the face.
    Face,
    /// An inner layer turn, which rotates no face.
    Slice,
    /// A whole cube reorientation.
    Turn,
}

impl Move333Type {
    /// Which category of move this is.
    pub fn kind(self) -> MoveKind {
        use Move333Type as MT;
        match self {
            MT::L | MT::R | MT::U | MT::D | MT::F | MT::B => MoveKind::Face,
            MT::M | MT::E | MT::S => MoveKind::Slice,
            MT::TurnLeft | MT::TurnRight | MT::TurnUp | MT::TurnDown => MoveKind::Turn,
        }
    }

    /// The short token for this move type.
    pub fn token(self) -> &'static str {
        use Move333Type as MT;
        match self {
            MT::L => "l",
            MT::M => "m",
            MT::R => "r",
            MT::U => "u",
            MT::E => "e",
            MT::D => "d",
            MT::F => "f",
            MT::S => "s",
            MT::B => "b",
            MT::TurnLeft => "tl",
            MT::TurnRight => "tr",
            MT::TurnUp => "tu",
            MT::TurnDown => "td",
        }
    }

    /// The long name for this move type, for front ends listing the vocabulary.
    pub fn name(self) -> &'static str {
        use Move333Type as MT;
        match self {
            MT::L => "left",
            MT::M => "middle",
            MT::R => "right",
            MT::U => "up",
            MT::E => "equatorial",
            MT::D => "down",
            MT::F => "front",
            MT::S => "standing",
            MT::B => "back",
            MT::TurnLeft => "turn-left",
            MT::TurnRight => "turn-right",
            MT::TurnUp => "turn-up",
            MT::TurnDown => "turn-down",
        }
    }
}

/// Stores a move type and whether it is inverted. An inverted move turns anticlockwise, or for
/// whole cube turns, the opposite way to its name.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub struct Move333 {
    pub ty: Move333Type,
    pub inverted: bool,
}

impl Move333 {
    /// The long name of this move, e.g. `front-inverted`.
    pub fn name(self) -> String {
        if self.inverted {
            format!("{}-inverted", self.ty.name())
        } else {
            self.ty.name().to_owned()
        }
    }
}

impl crate::moves::Move for Move333 {
    fn inverse(self) -> Self {
        Self {
            ty: self.ty,
            inverted: !self.inverted,
        }
    }

    fn commutes_with(&self, b: &Self) -> bool {
        self.ty.axis() == b.ty.axis()
    }
}

// I don't want to have the default derive debug for this!
impl std::fmt::Debug for Move333 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

impl std::fmt::Display for Move333 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.ty.token())?;
        if self.inverted {
            f.write_str("i")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Move333 {
    type Err = ParseMoveError;

    /// Parse a token (`fi`) or a long name (`front-inverted`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AllMoves::MOVE_LIST
            .iter()
            .copied()
            .find(|m| m.to_string() == s || m.name() == s)
            .ok_or_else(|| ParseMoveError::Unrecognized(s.to_owned()))
    }
}

/// A trait to classify a type as a move generator. A move generator is a set which can be used to
/// generate a set, i.e. find every combination of moves using moves in the move generator to find
/// unique states.
pub trait MoveGenerator {
    /// The amount of moves that are available in the moveset.
    const SIZE: usize;
    /// A list of all valid moves.
    const MOVE_LIST: &'static [Move333];
}

/// Create a move by specifying a move type and optionally `i` for an inverted move. Note that you
/// do not need to specify for example Move333Type::R, you only need to specify R.
#[macro_export]
macro_rules! mv {
    ($ty:ident) => {
        Move333 {
            ty: Move333Type::$ty,
            inverted: false,
        }
    };
    ($ty:ident, i) => {
        Move333 {
            ty: Move333Type::$ty,
            inverted: true,
        }
    };
}

/// The 18 layer moves, i.e. every move except the whole cube turns.
pub struct Primitive;

impl MoveGenerator for Primitive {
    const SIZE: usize = 18;
    const MOVE_LIST: &'static [Move333] = &[
        mv!(L),
        mv!(M),
        mv!(R),
        mv!(U),
        mv!(E),
        mv!(D),
        mv!(F),
        mv!(S),
        mv!(B),
        mv!(L, i),
        mv!(M, i),
        mv!(R, i),
        mv!(U, i),
        mv!(E, i),
        mv!(D, i),
        mv!(F, i),
        mv!(S, i),
        mv!(B, i),
    ];
}

/// Every published move: the layer moves followed by the whole cube turns.
pub struct AllMoves;

impl MoveGenerator for AllMoves {
    const SIZE: usize = 26;
    const MOVE_LIST: &'static [Move333] = &[
        mv!(L),
        mv!(M),
        mv!(R),
        mv!(U),
        mv!(E),
        mv!(D),
        mv!(F),
        mv!(S),
        mv!(B),
        mv!(L, i),
        mv!(M, i),
        mv!(R, i),
        mv!(U, i),
        mv!(E, i),
        mv!(D, i),
        mv!(F, i),
        mv!(S, i),
        mv!(B, i),
        mv!(TurnLeft),
        mv!(TurnRight),
        mv!(TurnUp),
        mv!(TurnDown),
        mv!(TurnLeft, i),
        mv!(TurnRight, i),
        mv!(TurnUp, i),
        mv!(TurnDown, i),
    ];
}

impl FaceletCube {
    /// Apply a single move. The dirty set is added to, not cleared.
    pub fn make_move(&mut self, mv: Move333) {
        log::trace!("applying {mv}");
        for step in mv.ty.steps() {
            let (plan, inverted) = step.resolve(mv.inverted);
            plan.apply(self, inverted);
        }
    }

    /// Apply an algorithm to a cube, left to right. The dirty set is cleared first, so afterwards
    /// it holds exactly the facelets this algorithm wrote.
    pub fn make_moves(&mut self, mvs: &MoveSequence<Move333>) {
        log::debug!("applying {} moves", mvs.len());
        self.clear_dirty();
        for &mv in mvs.iter() {
            self.make_move(mv);
        }
    }

    /// Parse and apply each token in order. Unrecognized tokens are logged and skipped without
    /// stopping the rest of the batch; if any were skipped they are reported in the error.
    pub fn apply_tokens<I, S>(
        &mut self,
        tokens: I,
    ) -> Result<MoveSequence<Move333>, SkippedMovesError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut applied = Vec::new();
        let mut skipped = Vec::new();

        self.clear_dirty();
        for (position, token) in tokens.into_iter().enumerate() {
            match token.as_ref().parse::<Move333>() {
                Ok(mv) => {
                    self.make_move(mv);
                    applied.push(mv);
                }
                Err(e) => {
                    log::warn!("skipping token {position}: {e}");
                    skipped.push((position, e));
                }
            }
        }
        log::debug!("applied {} moves, skipped {}", applied.len(), skipped.len());

        if skipped.is_empty() {
            Ok(MoveSequence(applied))
        } else {
            Err(SkippedMovesError { skipped })
        }
    }

    /// Apply a whitespace separated list of tokens, e.g. `"f r fi ri"`.
    pub fn apply_str(&mut self, input: &str) -> Result<MoveSequence<Move333>, SkippedMovesError> {
        self.apply_tokens(input.split_whitespace())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube333::{Color, Face, Facelet, FACELET_COUNT};
    use crate::moves::Move;

    fn at(face: Face, column: u8, row: u8) -> Facelet {
        Facelet::new(face, column, row).unwrap()
    }

    fn after(moves: &str) -> FaceletCube {
        let mut cube = FaceletCube::new();
        cube.apply_str(moves).unwrap();
        cube
    }

    #[test]
    fn vocabulary() {
        assert_eq!(Primitive::MOVE_LIST.len(), Primitive::SIZE);
        assert_eq!(AllMoves::MOVE_LIST.len(), AllMoves::SIZE);

        let tokens: Vec<_> = AllMoves::MOVE_LIST.iter().map(|m| m.to_string()).collect();
        assert_eq!(
            tokens.join(" "),
            "l m r u e d f s b li mi ri ui ei di fi si bi tl tr tu td tli tri tui tdi"
        );
        assert!(Primitive::MOVE_LIST
            .iter()
            .all(|m| m.ty.kind() != MoveKind::Turn));
        for m in AllMoves::MOVE_LIST {
            assert_eq!(m.to_string().parse::<Move333>(), Ok(*m));
            assert_eq!(m.name().parse::<Move333>(), Ok(*m));
        }
        assert_eq!("front-inverted".parse::<Move333>(), Ok(mv!(F, i)));
        assert_eq!(
            "x".parse::<Move333>(),
            Err(ParseMoveError::Unrecognized("x".to_owned()))
        );
        assert!("F".parse::<Move333>().is_err());
        assert_eq!(format!("{:?}", mv!(TurnUp, i)), "tui");
    }

    #[test]
    fn quarter_turn_loop() {
        let mut cube = FaceletCube::new();
        for _ in 0..4 {
            cube.make_move(mv!(F));
        }
        assert!(cube.is_solved());
        assert_eq!(after("f f f f"), FaceletCube::new());
    }

    #[test]
    fn no_shorter_cycles() {
        for &m in AllMoves::MOVE_LIST {
            let mut cube = FaceletCube::new();
            for _ in 1..4 {
                cube.make_move(m);
                assert!(!cube.is_solved(), "{m} returned to solved early");
            }
            cube.make_move(m);
            assert!(cube.is_solved());
        }
    }

    #[test]
    fn right_turn() {
        let cube = after("r");
        for i in 0..3 {
            assert_eq!(cube.get(at(Face::Up, 2, i)), Color::Green);
            assert_eq!(cube.get(at(Face::Front, 2, i)), Color::Yellow);
            assert_eq!(cube.get(at(Face::Down, 2, i)), Color::Blue);
            assert_eq!(cube.get(at(Face::Back, 0, i)), Color::White);
            assert_eq!(cube.get(at(Face::Up, 0, i)), Color::White);
        }
        assert!(cube.find(Color::Red).iter().all(|f| f.face() == Face::Right));
        assert_eq!(cube.dirty().len(), 20);
    }

    #[test]
    fn front_turn() {
        let cube = after("f");
        // The bottom row of Up lands on the left column of Right, first facelet on top.
        assert_eq!(cube.get(at(Face::Right, 0, 0)), Color::White);
        assert_eq!(cube.get(at(Face::Up, 2, 2)), Color::Orange);
        assert_eq!(cube.get(at(Face::Down, 0, 0)), Color::Red);
        assert_eq!(cube.get(at(Face::Left, 2, 0)), Color::Yellow);
        assert!(cube.find(Color::Green).iter().all(|f| f.face() == Face::Front));
    }

    #[test]
    fn mixed_sequence() {
        let cube = after("f r fi ri");
        assert!(!cube.is_solved());
        assert_eq!(cube, after("f r fi ri"));

        let moved: Vec<_> = cube
            .facelets()
            .filter(|&(f, c)| f.face().solved_color() != c)
            .map(|(f, _)| f)
            .collect();
        assert_eq!(moved.len(), 12);
        assert_eq!(cube.get(at(Face::Up, 1, 2)), Color::Red);
        assert_eq!(cube.get(at(Face::Up, 2, 2)), Color::Orange);
        assert_eq!(cube.get(at(Face::Front, 0, 0)), Color::Red);
        assert_eq!(cube.get(at(Face::Down, 2, 1)), Color::Green);
        assert_eq!(cube.get(at(Face::Back, 0, 2)), Color::Yellow);

        // the commutator has order 6
        let mut cube = FaceletCube::new();
        for _ in 0..6 {
            cube.apply_str("f r fi ri").unwrap();
        }
        assert!(cube.is_solved());
    }

    #[test]
    fn commutation() {
        assert_eq!(after("f b"), after("b f"));
        assert_eq!(after("l r"), after("r l"));
        assert_eq!(after("u e d"), after("d u e"));
        assert_ne!(after("f r"), after("r f"));
        assert_ne!(after("u f"), after("f u"));
    }

    #[test]
    fn turns_are_layer_moves() {
        assert_eq!(after("tl"), after("u ei di"));
        assert_eq!(after("tr"), after("ui e d"));
        assert_eq!(after("tu"), after("r mi li"));
        assert_eq!(after("td"), after("ri m l"));
        assert_eq!(after("tr"), after("tli"));
        assert_eq!(after("td"), after("tui"));

        let cube = after("tu");
        let center = |face| cube.get(at(face, 1, 1));
        assert_eq!(center(Face::Up), Color::Green);
        assert_eq!(center(Face::Front), Color::Yellow);
        assert_eq!(center(Face::Down), Color::Blue);
        assert_eq!(center(Face::Back), Color::White);
        assert_eq!(center(Face::Left), Color::Orange);
        assert_eq!(center(Face::Right), Color::Red);
    }

    #[test]
    fn dirty_sets() {
        let mut cube = FaceletCube::new();
        cube.apply_str("m").unwrap();
        assert_eq!(cube.dirty().len(), 12);
        assert!(cube.dirty().iter().all(|f| f.column() == 1 || f.face() == Face::Back));

        cube.apply_str("tl").unwrap();
        assert_eq!(cube.dirty().len(), 52);

        cube.apply_str("").unwrap();
        assert!(cube.dirty().is_empty());

        cube.reset();
        assert_eq!(cube.dirty().len(), FACELET_COUNT);
    }

    #[test_log::test]
    fn unrecognized_tokens_are_skipped() {
        let mut cube = FaceletCube::new();
        let err = cube.apply_tokens(["f", "x", "fi", "F"]).unwrap_err();
        assert_eq!(
            err.skipped,
            vec![
                (1, ParseMoveError::Unrecognized("x".to_owned())),
                (3, ParseMoveError::Unrecognized("F".to_owned())),
            ]
        );
        assert_eq!(err.to_string(), "skipped 2 unrecognized move(s)");
        assert!(cube.is_solved());
        assert_eq!(cube.dirty().len(), 20);

        let err = cube.apply_str("r qq ri").unwrap_err();
        assert_eq!(err.skipped.len(), 1);
        assert!(cube.is_solved());
    }

    #[test_log::test]
    fn applied_sequence_is_returned() {
        let mut cube = FaceletCube::new();
        let applied = cube.apply_str("  f\tr  fi ri ").unwrap();
        assert_eq!(applied, MoveSequence(vec![mv!(F), mv!(R), mv!(F, i), mv!(R, i)]));
        assert_eq!(applied.to_string(), "f r fi ri");
        cube.make_moves(&applied.inverse());
        assert!(cube.is_solved());
    }

    use proptest::collection::vec;
    use proptest::prelude::*;

    fn scrambled(mvs: &MoveSequence<Move333>) -> FaceletCube {
        let mut cube = FaceletCube::new();
        cube.make_moves(mvs);
        cube
    }

    proptest! {
        #[test]
        fn colors_are_conserved(mvs in vec(any::<Move333>(), 0..40).prop_map(MoveSequence)) {
            let cube = scrambled(&mvs);
            prop_assert_eq!(cube.count_colors(), [9; 6]);
            let centers: Vec<_> = cube
                .facelets()
                .filter(|(f, _)| f.is_center())
                .map(|(_, c)| c)
                .collect();
            let mut sorted = centers.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), 6);
        }

        #[test]
        fn move_then_inverse(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence), m in any::<Move333>()) {
            let before = scrambled(&mvs);
            let mut cube = before.clone();
            cube.make_move(m);
            cube.make_move(m.inverse());
            prop_assert_eq!(cube, before);
        }

        #[test]
        fn quarter_turns_have_order_four(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence), m in any::<Move333>()) {
            let before = scrambled(&mvs);
            let mut cube = before.clone();
            for _ in 0..4 {
                cube.make_move(m);
            }
            prop_assert_eq!(cube, before);
        }

        #[test]
        fn same_axis_moves_commute(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence), a in any::<Move333>(), b in any::<Move333>()) {
            let start = scrambled(&mvs);
            let mut ab = start.clone();
            ab.make_move(a);
            ab.make_move(b);
            let mut ba = start;
            ba.make_move(b);
            ba.make_move(a);
            if a.commutes_with(&b) {
                prop_assert_eq!(ab, ba);
            }
        }

        #[test]
        fn invert_identity(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence)) {
            let mut cube = scrambled(&mvs);
            cube.make_moves(&mvs.clone().inverse());
            prop_assert!(cube.is_solved());
            let cancelled = mvs.clone().cancel();
            prop_assert!(cancelled.clone().append(cancelled.inverse()).cancel().is_empty());
        }

        #[test]
        fn cancel_same_moves(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.clone().cancel();
            prop_assert!(cancelled.len() <= mvs.len());
            prop_assert_eq!(scrambled(&mvs), scrambled(&cancelled));
        }

        #[test]
        fn cancel_idempotent(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.clone().cancel();
            prop_assert_eq!(cancelled.clone().cancel(), cancelled);
        }
    }
}
