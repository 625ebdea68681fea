//! Interpret moves relative to the axes of the cube (U/D, L/R, F/B).

use super::moves::Move333Type;

/// An axis of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Front-Back axis
    FB,
    /// Left-Right axis
    LR,
    /// Up-Down axis
    UD,
}

impl Move333Type {
    /// The axis this move turns around. Whole cube turns count as turning every layer around
    /// their axis, so they share it with the layer moves they are made of.
    pub fn axis(self) -> Axis {
        use Move333Type as MT;
        match self {
            MT::L | MT::M | MT::R | MT::TurnUp | MT::TurnDown => Axis::LR,
            MT::U | MT::E | MT::D | MT::TurnLeft | MT::TurnRight => Axis::UD,
            MT::F | MT::S | MT::B => Axis::FB,
        }
    }
}
