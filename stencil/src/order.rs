use crate::{ConfigError, Float};

/// Second-order central: average of the two adjacent cells.
const SECOND_ORDER_WEIGHTS: [Float; 1] = [0.5];
/// Fourth-order central.
const FOURTH_ORDER_WEIGHTS: [Float; 2] = [7.0 / 12.0, -1.0 / 12.0];
/// Sixth-order central.
const SIXTH_ORDER_WEIGHTS: [Float; 3] = [37.0 / 60.0, -2.0 / 15.0, 1.0 / 60.0];

/// Spatial order of accuracy of the face stencils.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum SpatialOrder {
    #[default]
    Second,
    Fourth,
    Sixth,
}
impl SpatialOrder {
    pub fn order(self) -> u32 {
        match self {
            Self::Second => 2,
            Self::Fourth => 4,
            Self::Sixth => 6,
        }
    }

    /// Symmetric stencil weights, nearest pair of cells first.
    ///
    /// A face between cells `L` and `U = L + 1` takes the value `Σ_r w_r (q(L - r) + q(U + r))`.
    /// Every table sums to 1/2, so constant fields are reproduced.
    pub fn weights(self) -> &'static [Float] {
        match self {
            Self::Second => &SECOND_ORDER_WEIGHTS,
            Self::Fourth => &FOURTH_ORDER_WEIGHTS,
            Self::Sixth => &SIXTH_ORDER_WEIGHTS,
        }
    }

    /// Ghost cells needed on each side of the interior.
    ///
    /// The stencil for the previous face of cell `m` reaches `m - n` on one side and `m + n - 1`
    /// on the other, `n` being the number of weight pairs.
    pub fn ghost_cells(self) -> usize {
        self.weights().len()
    }
}
impl TryFrom<u32> for SpatialOrder {
    type Error = ConfigError;

    fn try_from(order: u32) -> Result<Self, Self::Error> {
        match order {
            2 => Ok(Self::Second),
            4 => Ok(Self::Fourth),
            6 => Ok(Self::Sixth),
            _ => Err(ConfigError::UnsupportedSpatialOrder(order)),
        }
    }
}
impl std::fmt::Display for SpatialOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order {}", self.order())
    }
}

/// Ghost cells a stencil of the given raw spatial order needs on each side.
pub fn ghost_cells_required(order: u32) -> Result<usize, ConfigError> {
    SpatialOrder::try_from(order).map(SpatialOrder::ghost_cells)
}
