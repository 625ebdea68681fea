//! Permutation plans: the static tables of facelet transfers that define every move.
//!
//! A plan is a list of `(source, destination)` pairs, where the destination receives the color the
//! source held before the plan began. The set of destinations of a plan is always equal to its set
//! of sources, so a plan is a permutation of the facelets it touches. Inverting a plan swaps every
//! pair.

use super::moves::Move333Type;
use super::{Color, Face, Facelet, FaceletCube, SIZE};

/// A single transfer `(source, destination)`.
pub(crate) type Transfer = (Facelet, Facelet);

/// A permutation of facelets.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Plan(&'static [Transfer]);

impl Plan {
    /// The transfers of this plan, with each pair swapped if `inverted`.
    pub(crate) fn transfers(self, inverted: bool) -> impl Iterator<Item = Transfer> {
        self.0
            .iter()
            .map(move |&(src, dst)| if inverted { (dst, src) } else { (src, dst) })
    }

    /// Apply the plan to a cube. Every source is read before any destination is written, so a
    /// pair never observes a color moved by an earlier pair of the same plan.
    pub(crate) fn apply(self, cube: &mut FaceletCube, inverted: bool) {
        let staged: Vec<(Facelet, Color)> = self
            .transfers(inverted)
            .map(|(src, dst)| (dst, cube.get(src)))
            .collect();

        for (dst, color) in staged {
            cube.set(dst, color);
        }
    }
}

/// One plan application within a move.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Step {
    plan: Plan,
    inverted: bool,
}

impl Step {
    const fn forward(plan: &'static [Transfer]) -> Step {
        Step {
            plan: Plan(plan),
            inverted: false,
        }
    }

    const fn inverse(plan: &'static [Transfer]) -> Step {
        Step {
            plan: Plan(plan),
            inverted: true,
        }
    }

    /// The plan of this step, and whether it is applied inverted once the move itself is taken
    /// into account.
    pub(crate) fn resolve(self, move_inverted: bool) -> (Plan, bool) {
        (self.plan, self.inverted != move_inverted)
    }
}

/// A face as it takes part in a cycle of four faces around an axis. A mirrored face has its
/// columns and rows reversed relative to the other faces of the cycle.
#[derive(Clone, Copy)]
struct CycleFace {
    face: Face,
    mirrored: bool,
}

impl CycleFace {
    const fn plain(face: Face) -> CycleFace {
        CycleFace {
            face,
            mirrored: false,
        }
    }

    const fn mirrored(face: Face) -> CycleFace {
        CycleFace {
            face,
            mirrored: true,
        }
    }

    /// The facelet at `(column, row)` in the common frame of the cycle.
    const fn at(self, column: u8, row: u8) -> Facelet {
        if self.mirrored {
            Facelet::at(self.face, SIZE - 1 - column, SIZE - 1 - row)
        } else {
            Facelet::at(self.face, column, row)
        }
    }
}

/// Faces around the left-right axis, in the direction an R turn moves them.
const VERTICAL_CYCLE: [CycleFace; 4] = [
    CycleFace::plain(Face::Front),
    CycleFace::plain(Face::Up),
    CycleFace::mirrored(Face::Back),
    CycleFace::plain(Face::Down),
];

/// Faces around the up-down axis, in the direction a U turn moves them.
const HORIZONTAL_CYCLE: [CycleFace; 4] = [
    CycleFace::plain(Face::Front),
    CycleFace::plain(Face::Left),
    CycleFace::plain(Face::Back),
    CycleFace::plain(Face::Right),
];

#[derive(Clone, Copy)]
enum Line {
    Column(u8),
    Row(u8),
}

const NO_TRANSFER: Transfer = (Facelet::at(Face::Up, 0, 0), Facelet::at(Face::Up, 0, 0));

/// Move one column or row of each face of the cycle onto the next face.
const fn slice(cycle: &[CycleFace; 4], line: Line) -> [Transfer; 12] {
    let mut out = [NO_TRANSFER; 12];
    let mut n = 0;
    let mut k = 0;
    while k < 4 {
        let src = cycle[k];
        let dst = cycle[(k + 1) % 4];
        let mut i = 0;
        while i < SIZE {
            let (column, row) = match line {
                Line::Column(c) => (c, i),
                Line::Row(r) => (i, r),
            };
            out[n] = (src.at(column, row), dst.at(column, row));
            n += 1;
            i += 1;
        }
        k += 1;
    }
    out
}

/// Move every facelet of each face of the cycle onto the next face.
const fn whole_faces(cycle: &[CycleFace; 4]) -> [Transfer; 36] {
    let mut out = [NO_TRANSFER; 36];
    let mut n = 0;
    let mut k = 0;
    while k < 4 {
        let src = cycle[k];
        let dst = cycle[(k + 1) % 4];
        let mut row = 0;
        while row < SIZE {
            let mut column = 0;
            while column < SIZE {
                out[n] = (src.at(column, row), dst.at(column, row));
                n += 1;
                column += 1;
            }
            row += 1;
        }
        k += 1;
    }
    out
}

/// Rotate the 8 non-center facelets of a face clockwise.
const fn face_rotation(face: Face) -> [Transfer; 8] {
    let mut out = [NO_TRANSFER; 8];
    let mut n = 0;
    let mut row = 0;
    while row < SIZE {
        let mut column = 0;
        while column < SIZE {
            if column != SIZE / 2 || row != SIZE / 2 {
                out[n] = (
                    Facelet::at(face, column, row),
                    Facelet::at(face, SIZE - 1 - row, column),
                );
                n += 1;
            }
            column += 1;
        }
        row += 1;
    }
    out
}

const fn face_rotations() -> [[Transfer; 8]; 6] {
    let mut out = [[NO_TRANSFER; 8]; 6];
    let mut i = 0;
    while i < 6 {
        out[i] = face_rotation(Face::ARRAY[i]);
        i += 1;
    }
    out
}

macro_rules! transfer {
    ($sf:ident $sc:literal $sr:literal => $df:ident $dc:literal $dr:literal) => {
        (
            Facelet::at(Face::$sf, $sc, $sr),
            Facelet::at(Face::$df, $dc, $dr),
        )
    };
}

static FACE_ROTATIONS: [[Transfer; 8]; 6] = face_rotations();

static COLUMN_SLICES: [[Transfer; 12]; 3] = [
    slice(&VERTICAL_CYCLE, Line::Column(0)),
    slice(&VERTICAL_CYCLE, Line::Column(1)),
    slice(&VERTICAL_CYCLE, Line::Column(2)),
];

static ROW_SLICES: [[Transfer; 12]; 3] = [
    slice(&HORIZONTAL_CYCLE, Line::Row(0)),
    slice(&HORIZONTAL_CYCLE, Line::Row(1)),
    slice(&HORIZONTAL_CYCLE, Line::Row(2)),
];

// The depth layers fold across Up, Right, Down and Left with a different orientation on each
// face, so they are written out pair by pair. Each is in the clockwise direction seen from its
// own face (S follows F).
static FRONT_SLICE: [Transfer; 12] = [
    transfer!(Up 0 2 => Right 0 0),
    transfer!(Up 1 2 => Right 0 1),
    transfer!(Up 2 2 => Right 0 2),
    transfer!(Right 0 0 => Down 2 0),
    transfer!(Right 0 1 => Down 1 0),
    transfer!(Right 0 2 => Down 0 0),
    transfer!(Down 2 0 => Left 2 2),
    transfer!(Down 1 0 => Left 2 1),
    transfer!(Down 0 0 => Left 2 0),
    transfer!(Left 2 2 => Up 0 2),
    transfer!(Left 2 1 => Up 1 2),
    transfer!(Left 2 0 => Up 2 2),
];

static STANDING_SLICE: [Transfer; 12] = [
    transfer!(Up 0 1 => Right 1 0),
    transfer!(Up 1 1 => Right 1 1),
    transfer!(Up 2 1 => Right 1 2),
    transfer!(Right 1 0 => Down 2 1),
    transfer!(Right 1 1 => Down 1 1),
    transfer!(Right 1 2 => Down 0 1),
    transfer!(Down 2 1 => Left 1 2),
    transfer!(Down 1 1 => Left 1 1),
    transfer!(Down 0 1 => Left 1 0),
    transfer!(Left 1 2 => Up 0 1),
    transfer!(Left 1 1 => Up 1 1),
    transfer!(Left 1 0 => Up 2 1),
];

static BACK_SLICE: [Transfer; 12] = [
    transfer!(Up 0 0 => Left 0 2),
    transfer!(Up 1 0 => Left 0 1),
    transfer!(Up 2 0 => Left 0 0),
    transfer!(Left 0 0 => Down 0 2),
    transfer!(Left 0 1 => Down 1 2),
    transfer!(Left 0 2 => Down 2 2),
    transfer!(Down 0 2 => Right 2 2),
    transfer!(Down 1 2 => Right 2 1),
    transfer!(Down 2 2 => Right 2 0),
    transfer!(Right 2 2 => Up 2 0),
    transfer!(Right 2 1 => Up 1 0),
    transfer!(Right 2 0 => Up 0 0),
];

static VERTICAL_TURN: [Transfer; 36] = whole_faces(&VERTICAL_CYCLE);
static HORIZONTAL_TURN: [Transfer; 36] = whole_faces(&HORIZONTAL_CYCLE);

const UP: usize = Face::Up as usize;
const RIGHT: usize = Face::Right as usize;
const FRONT: usize = Face::Front as usize;
const DOWN: usize = Face::Down as usize;
const LEFT: usize = Face::Left as usize;
const BACK: usize = Face::Back as usize;

// Face turns slice first and rotate the face second. L and M move with the opposite direction
// to the vertical cycle, as do E and D to the horizontal cycle.
static L_STEPS: [Step; 2] = [
    Step::inverse(&COLUMN_SLICES[0]),
    Step::forward(&FACE_ROTATIONS[LEFT]),
];
static M_STEPS: [Step; 1] = [Step::inverse(&COLUMN_SLICES[1])];
static R_STEPS: [Step; 2] = [
    Step::forward(&COLUMN_SLICES[2]),
    Step::forward(&FACE_ROTATIONS[RIGHT]),
];
static U_STEPS: [Step; 2] = [
    Step::forward(&ROW_SLICES[0]),
    Step::forward(&FACE_ROTATIONS[UP]),
];
static E_STEPS: [Step; 1] = [Step::inverse(&ROW_SLICES[1])];
static D_STEPS: [Step; 2] = [
    Step::inverse(&ROW_SLICES[2]),
    Step::forward(&FACE_ROTATIONS[DOWN]),
];
static F_STEPS: [Step; 2] = [
    Step::forward(&FRONT_SLICE),
    Step::forward(&FACE_ROTATIONS[FRONT]),
];
static S_STEPS: [Step; 1] = [Step::forward(&STANDING_SLICE)];
static B_STEPS: [Step; 2] = [
    Step::forward(&BACK_SLICE),
    Step::forward(&FACE_ROTATIONS[BACK]),
];

// Whole cube turns relabel the four faces around the axis and rotate the two faces on it. The
// two axis faces turn in opposite directions as seen from outside.
static TURN_LEFT_STEPS: [Step; 3] = [
    Step::forward(&HORIZONTAL_TURN),
    Step::forward(&FACE_ROTATIONS[UP]),
    Step::inverse(&FACE_ROTATIONS[DOWN]),
];
static TURN_RIGHT_STEPS: [Step; 3] = [
    Step::inverse(&HORIZONTAL_TURN),
    Step::inverse(&FACE_ROTATIONS[UP]),
    Step::forward(&FACE_ROTATIONS[DOWN]),
];
static TURN_UP_STEPS: [Step; 3] = [
    Step::forward(&VERTICAL_TURN),
    Step::forward(&FACE_ROTATIONS[RIGHT]),
    Step::inverse(&FACE_ROTATIONS[LEFT]),
];
static TURN_DOWN_STEPS: [Step; 3] = [
    Step::inverse(&VERTICAL_TURN),
    Step::inverse(&FACE_ROTATIONS[RIGHT]),
    Step::forward(&FACE_ROTATIONS[LEFT]),
];

impl Move333Type {
    /// The plans a clockwise (non inverted) application of this move type is made of, in the
    /// order they are applied.
    pub(crate) fn steps(self) -> &'static [Step] {
        use Move333Type as MT;
        match self {
            MT::L => &L_STEPS,
            MT::M => &M_STEPS,
            MT::R => &R_STEPS,
            MT::U => &U_STEPS,
            MT::E => &E_STEPS,
            MT::D => &D_STEPS,
            MT::F => &F_STEPS,
            MT::S => &S_STEPS,
            MT::B => &B_STEPS,
            MT::TurnLeft => &TURN_LEFT_STEPS,
            MT::TurnRight => &TURN_RIGHT_STEPS,
            MT::TurnUp => &TURN_UP_STEPS,
            MT::TurnDown => &TURN_DOWN_STEPS,
        }
    }
}
