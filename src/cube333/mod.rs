//! Implementation of a 3x3x3 cube as a store of 54 colored facelets, along with the moves that
//! permute them.

pub mod axis;
pub mod moves;
mod plan;
pub mod scramble;

use crate::error::TryFromIntToEnumError;

/// The number of layers along each axis of the cube.
pub const SIZE: u8 = 3;

/// The number of facelets on the cube.
pub const FACELET_COUNT: usize = 6 * (SIZE as usize) * (SIZE as usize);

/// One of the six outer sides of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Face {
    Up,
    Right,
    Front,
    Down,
    Left,
    Back,
}

impl Face {
    /// Every face, in the order used for facelet indices.
    pub const ARRAY: [Face; 6] = [
        Face::Up,
        Face::Right,
        Face::Front,
        Face::Down,
        Face::Left,
        Face::Back,
    ];

    /// The color every facelet of this face has on a solved cube.
    pub const fn solved_color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Right => Color::Red,
            Face::Front => Color::Green,
            Face::Down => Color::Yellow,
            Face::Left => Color::Orange,
            Face::Back => Color::Blue,
        }
    }
}

impl TryFrom<u8> for Face {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Face::ARRAY
            .get(n as usize)
            .copied()
            .ok_or(TryFromIntToEnumError::OutOfBounds)
    }
}

/// A facelet color. There is one per face of a solved cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    White,
    Red,
    Green,
    Yellow,
    Orange,
    Blue,
}

impl Color {
    /// Every color, indexed the same way as `Face::ARRAY` is for solved colors.
    pub const ARRAY: [Color; 6] = [
        Color::White,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Orange,
        Color::Blue,
    ];

    fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Blue => 'B',
        }
    }
}

/// The address of a single facelet: a face, along with a column and row on that face.
///
/// Each face is addressed as it appears in the usual unfolded net, viewed from outside the cube.
/// Row 0 of the four side faces borders Up, row 0 of Up borders Back and row 0 of Down borders
/// Front. Column 0 of Up, Front and Down borders Left, column 0 of Right borders Front, column 0
/// of Back borders Right and column 0 of Left borders Back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Facelet {
    face: Face,
    column: u8,
    row: u8,
}

impl Facelet {
    /// Create a facelet address, or `None` if the column or row is off the face.
    pub fn new(face: Face, column: u8, row: u8) -> Option<Facelet> {
        (column < SIZE && row < SIZE).then_some(Facelet { face, column, row })
    }

    /// Infallible constructor for building tables. Out of range coordinates fail const
    /// evaluation.
    pub(crate) const fn at(face: Face, column: u8, row: u8) -> Facelet {
        assert!(column < SIZE && row < SIZE);
        Facelet { face, column, row }
    }

    /// The face this facelet is on.
    pub fn face(self) -> Face {
        self.face
    }

    /// The column of this facelet on its face.
    pub fn column(self) -> u8 {
        self.column
    }

    /// The row of this facelet on its face.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Whether this is the fixed center facelet of its face.
    pub fn is_center(self) -> bool {
        self.column == SIZE / 2 && self.row == SIZE / 2
    }

    /// A dense index in `0..FACELET_COUNT`.
    pub const fn index(self) -> usize {
        let size = SIZE as usize;
        (self.face as usize * size + self.row as usize) * size + self.column as usize
    }

    /// The facelet with the given dense index.
    pub fn from_index(n: usize) -> Option<Facelet> {
        let size = SIZE as usize;
        let face = u8::try_from(n / (size * size)).ok()?;
        let face = Face::try_from(face).ok()?;
        let n = n % (size * size);
        Some(Facelet {
            face,
            column: (n % size) as u8,
            row: (n / size) as u8,
        })
    }

    /// Iterate over every facelet, in index order.
    pub fn all() -> impl Iterator<Item = Facelet> {
        (0..FACELET_COUNT).filter_map(Facelet::from_index)
    }
}

/// A set of facelets, stored as a bitmask over facelet indices.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceletSet(u64);

impl FaceletSet {
    /// The empty set.
    pub const EMPTY: FaceletSet = FaceletSet(0);

    /// The set of every facelet.
    pub const ALL: FaceletSet = FaceletSet((1u64 << FACELET_COUNT) - 1);

    /// Add a facelet to the set.
    pub fn insert(&mut self, facelet: Facelet) {
        self.0 |= 1u64 << facelet.index();
    }

    /// Whether the facelet is in the set.
    pub fn contains(&self, facelet: Facelet) -> bool {
        self.0 & (1u64 << facelet.index()) != 0
    }

    /// Remove every facelet from the set.
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// The number of facelets in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set has no facelets.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate over the facelets in the set, in index order.
    pub fn iter(&self) -> impl Iterator<Item = Facelet> + '_ {
        Facelet::all().filter(|&f| self.contains(f))
    }
}

impl FromIterator<Facelet> for FaceletSet {
    fn from_iter<I: IntoIterator<Item = Facelet>>(iter: I) -> Self {
        let mut set = FaceletSet::EMPTY;
        for f in iter {
            set.insert(f);
        }
        set
    }
}

const fn solved_facelets() -> [Color; FACELET_COUNT] {
    let mut colors = [Color::White; FACELET_COUNT];
    let mut i = 0;
    while i < FACELET_COUNT {
        colors[i] = Face::ARRAY[i / 9].solved_color();
        i += 1;
    }
    colors
}

/// Every facelet of a solved cube.
pub const SOLVED_FACELETS: [Color; FACELET_COUNT] = solved_facelets();

/// A cube represented by the color on each of its facelets.
///
/// Along with the colors, the cube tracks which facelets were written since the set was last
/// cleared, so a consumer can redraw only what changed. Moves only ever permute colors, so every
/// reachable state has exactly 9 facelets of each color.
#[derive(Debug, Clone)]
pub struct FaceletCube {
    facelets: [Color; FACELET_COUNT],
    reset_snapshot: [Color; FACELET_COUNT],
    dirty: FaceletSet,
}

impl Default for FaceletCube {
    fn default() -> Self {
        Self::new()
    }
}

// Equality is over colors only; the dirty set is bookkeeping for consumers.
impl PartialEq for FaceletCube {
    fn eq(&self, other: &Self) -> bool {
        self.facelets == other.facelets
    }
}

impl Eq for FaceletCube {}

impl FaceletCube {
    /// A solved cube. The solved state is kept as the snapshot that `reset` restores.
    pub fn new() -> Self {
        FaceletCube {
            facelets: SOLVED_FACELETS,
            reset_snapshot: SOLVED_FACELETS,
            dirty: FaceletSet::ALL,
        }
    }

    /// The color of a facelet.
    pub fn get(&self, facelet: Facelet) -> Color {
        self.facelets[facelet.index()]
    }

    /// Overwrite the color of a facelet, marking it dirty. Callers are responsible for keeping
    /// the color counts intact, which is why this is only used by move application.
    pub(crate) fn set(&mut self, facelet: Facelet, color: Color) {
        self.facelets[facelet.index()] = color;
        self.dirty.insert(facelet);
    }

    /// The color of every facelet, indexed by `Facelet::index`.
    pub fn snapshot_all(&self) -> [Color; FACELET_COUNT] {
        self.facelets
    }

    /// Every facelet paired with its color, in index order.
    pub fn facelets(&self) -> impl Iterator<Item = (Facelet, Color)> + '_ {
        Facelet::all().map(|f| (f, self.get(f)))
    }

    /// The facelets written since the dirty set was last cleared.
    pub fn dirty(&self) -> FaceletSet {
        self.dirty
    }

    /// Empty the dirty set.
    pub fn clear_dirty(&mut self) {
        self.dirty.clear();
    }

    /// Restore the snapshot taken when the cube was created. Every facelet is marked dirty.
    pub fn reset(&mut self) {
        log::info!("resetting cube");
        self.facelets = self.reset_snapshot;
        self.dirty = FaceletSet::ALL;
    }

    /// Whether every face shows only its solved color.
    pub fn is_solved(&self) -> bool {
        self.facelets().all(|(f, c)| f.face().solved_color() == c)
    }

    /// Every facelet that currently has the given color.
    pub fn find(&self, color: Color) -> FaceletSet {
        self.facelets()
            .filter(|&(_, c)| c == color)
            .map(|(f, _)| f)
            .collect()
    }

    /// The number of facelets of each color, indexed as `Color::ARRAY`.
    pub fn count_colors(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for c in self.facelets {
            counts[c as usize] += 1;
        }
        counts
    }

    fn write_row(&self, f: &mut std::fmt::Formatter<'_>, face: Face, row: u8) -> std::fmt::Result {
        for column in 0..SIZE {
            let c = self.get(Facelet::at(face, column, row));
            write!(f, "{}", c.letter())?;
        }
        Ok(())
    }
}

impl std::fmt::Display for FaceletCube {
    /// Writes the cube as an unfolded net, with Up above Front and Down below it.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pad = " ".repeat(SIZE as usize + 1);
        for row in 0..SIZE {
            f.write_str(&pad)?;
            self.write_row(f, Face::Up, row)?;
            writeln!(f)?;
        }
        for row in 0..SIZE {
            for (i, face) in [Face::Left, Face::Front, Face::Right, Face::Back]
                .into_iter()
                .enumerate()
            {
                if i > 0 {
                    f.write_str(" ")?;
                }
                self.write_row(f, face, row)?;
            }
            writeln!(f)?;
        }
        for row in 0..SIZE {
            f.write_str(&pad)?;
            self.write_row(f, Face::Down, row)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
