use crate::{
    order::SpatialOrder,
    tags::{parse_tag, TurbulenceModel},
    ConfigError, Float,
};

/// Run-time discretization choices shared by every kernel call of a run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolverChoice {
    pub spatial_order: SpatialOrder,
    pub turbulence_model: TurbulenceModel,
    /// `C_s` of the Smagorinsky closure; unused under DNS.
    pub smagorinsky_constant: Float,
}

impl Default for SolverChoice {
    fn default() -> Self {
        Self {
            spatial_order: SpatialOrder::Second,
            turbulence_model: TurbulenceModel::Dns,
            smagorinsky_constant: 0.15,
        }
    }
}

impl SolverChoice {
    /// Validates untyped configuration, e.g. as read from an input deck.
    pub fn from_raw(spatial_order: u32, turbulence_model: &str) -> Result<Self, ConfigError> {
        Ok(Self::default()
            .with_spatial_order(SpatialOrder::try_from(spatial_order)?)
            .with_turbulence_model(parse_tag("turbulence model", turbulence_model)?))
    }

    pub fn with_spatial_order(self, spatial_order: SpatialOrder) -> Self {
        Self {
            spatial_order,
            ..self
        }
    }

    pub fn with_turbulence_model(self, turbulence_model: TurbulenceModel) -> Self {
        Self {
            turbulence_model,
            ..self
        }
    }

    pub fn with_smagorinsky_constant(self, smagorinsky_constant: Float) -> Self {
        Self {
            smagorinsky_constant,
            ..self
        }
    }

    pub fn ghost_cells_required(&self) -> usize {
        self.spatial_order.ghost_cells()
    }
}
