use itertools::iproduct;
use strum::IntoEnumIterator;

use crate::{indexing::CellIndex, ConfigError};

/// Index axis a stencil advances along.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    strum::EnumCount,
    strum::EnumString,
    strum::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    X = 0,
    Y = 1,
    Z = 2,
}
impl Direction {
    pub fn axis(self) -> usize {
        self as usize
    }

    pub fn unit(self) -> [isize; 3] {
        match self {
            Self::X => [1, 0, 0],
            Self::Y => [0, 1, 0],
            Self::Z => [0, 0, 1],
        }
    }
}

/// Momentum equation a stress or advection term belongs to.
pub type MomentumEqn = Direction;
/// Direction a stress component is differenced along.
pub type DiffusionDir = Direction;

/// Which face of the reference cell is meant: `m - 1/2` or `m + 1/2` along the active direction.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::EnumString, strum::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum FaceSide {
    #[strum(to_string = "previous", serialize = "prev")]
    Previous,
    #[strum(to_string = "next")]
    Next,
}
impl FaceSide {
    /// Staggered index of the face.
    ///
    /// Face `(i, j, k)` is the previous face of cell `(i, j, k)`, so the next face of a cell is
    /// the previous face of its upper neighbor.
    pub fn face_index(self, cell: CellIndex, direction: Direction) -> CellIndex {
        match self {
            Self::Previous => cell,
            Self::Next => cell.shift(direction, 1),
        }
    }

    /// The two cells sharing the face, lower one first.
    pub fn adjacent_cells(self, cell: CellIndex, direction: Direction) -> (CellIndex, CellIndex) {
        let upper = self.face_index(cell, direction);
        (upper.shift(direction, -1), upper)
    }
}

/// Momentum-flux component doing the transporting.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::EnumString, strum::Display,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AdvectingQuantity {
    RhoU,
    RhoV,
    RhoW,
}
impl AdvectingQuantity {
    pub fn direction(self) -> Direction {
        match self {
            Self::RhoU => Direction::X,
            Self::RhoV => Direction::Y,
            Self::RhoW => Direction::Z,
        }
    }

    pub fn along(direction: Direction) -> Self {
        match direction {
            Direction::X => Self::RhoU,
            Direction::Y => Self::RhoV,
            Direction::Z => Self::RhoW,
        }
    }
}

/// Quantity transported by a state (cell-centered) equation.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::EnumString, strum::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AdvectedQuantity {
    /// Continuity.
    Unity,
    /// Potential temperature, carried as `rho * theta`.
    Theta,
    /// Passive scalar.
    Scalar,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::EnumString, strum::Display,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TurbulenceModel {
    /// Direct stress, no closure.
    Dns,
    /// Subfilter-scale stress scaled by an eddy viscosity.
    Smagorinsky,
}

/// One entry `S_{eqn, diff_dir}` of the rate-of-strain tensor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StressComponent {
    pub eqn: MomentumEqn,
    pub diff_dir: DiffusionDir,
}
impl StressComponent {
    pub fn new(eqn: MomentumEqn, diff_dir: DiffusionDir) -> Self {
        Self { eqn, diff_dir }
    }

    pub fn is_diagonal(self) -> bool {
        self.eqn == self.diff_dir
    }

    pub fn transpose(self) -> Self {
        Self {
            eqn: self.diff_dir,
            diff_dir: self.eqn,
        }
    }

    /// All nine components, row-major.
    pub fn all() -> impl Iterator<Item = Self> {
        iproduct!(Direction::iter(), Direction::iter()).map(|(eqn, diff_dir)| Self::new(eqn, diff_dir))
    }
}

/// Parses a tag from configuration text, reporting which kind of tag was expected.
pub fn parse_tag<T: std::str::FromStr>(kind: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::UnknownTag {
        kind,
        value: value.to_owned(),
    })
}
