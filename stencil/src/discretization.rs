use ndarray as nd;

use crate::{
    advection, closure,
    config::SolverChoice,
    field::{FieldAccess, Geometry, MomentumFields, OwnedField, VelocityFields},
    indexing::{par_sweep, CellBox, CellIndex},
    interp, smagorinsky, strain,
    tags::{AdvectedQuantity, AdvectingQuantity, Direction, FaceSide, MomentumEqn, StressComponent},
    ConfigError, Float,
};

/// Kernels bound to one run's configuration and grid spacing.
///
/// Holds no field data, so a single value can be shared by every worker of a sweep.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Discretization {
    choice: SolverChoice,
    geometry: Geometry,
}

impl Discretization {
    pub fn new(choice: SolverChoice, geometry: Geometry) -> Self {
        log::info!(
            "Discretization: {}, turbulence model {}, cell size {:?}",
            choice.spatial_order,
            choice.turbulence_model,
            geometry.cell_sizes()
        );
        Self { choice, geometry }
    }

    pub fn choice(&self) -> &SolverChoice {
        &self.choice
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn ghost_cells_required(&self) -> usize {
        self.choice.ghost_cells_required()
    }

    /// Verifies that `field` carries enough ghost layers for the configured stencils.
    pub fn check_ghost_cells<F: FieldAccess + ?Sized>(
        &self,
        name: &str,
        field: &F,
    ) -> Result<(), ConfigError> {
        let (available, required) = (field.ghost_cells(), self.ghost_cells_required());
        if available < required {
            log::warn!("Field `{name}` has {available} ghost cell(s), {required} required");
            return Err(ConfigError::InsufficientGhostCells {
                field: name.to_string(),
                available,
                required,
            });
        }
        Ok(())
    }

    pub fn interpolate_to_face<F: FieldAccess + ?Sized>(
        &self,
        field: &F,
        component: usize,
        cell: CellIndex,
        direction: Direction,
        side: FaceSide,
    ) -> Float {
        interp::interpolate_to_face(
            field,
            component,
            cell,
            direction,
            side,
            self.choice.spatial_order,
        )
    }

    pub fn momentum_flux<F: FieldAccess + ?Sized>(
        &self,
        cell: CellIndex,
        momentum: &MomentumFields<'_, F>,
        velocity: &VelocityFields<'_, F>,
        side: FaceSide,
        eqn: MomentumEqn,
        advecting: AdvectingQuantity,
    ) -> Float {
        advection::advective_momentum_flux(
            cell,
            momentum,
            velocity,
            side,
            eqn,
            advecting,
            self.choice.spatial_order,
        )
    }

    pub fn state_flux<F: FieldAccess + ?Sized, C: FieldAccess + ?Sized>(
        &self,
        cell: CellIndex,
        momentum: &MomentumFields<'_, F>,
        cons: &C,
        side: FaceSide,
        advected: AdvectedQuantity,
        advecting: AdvectingQuantity,
    ) -> Float {
        advection::advective_state_flux(
            cell,
            momentum,
            cons,
            side,
            advected,
            advecting,
            self.choice.spatial_order,
        )
    }

    pub fn strain_rate<F: FieldAccess + ?Sized>(
        &self,
        cell: CellIndex,
        velocity: &VelocityFields<'_, F>,
        side: FaceSide,
        component: StressComponent,
    ) -> Float {
        strain::strain_rate(cell, velocity, side, component, &self.geometry)
    }

    pub fn stress_term<F: FieldAccess + ?Sized, V: FieldAccess + ?Sized>(
        &self,
        cell: CellIndex,
        velocity: &VelocityFields<'_, F>,
        side: FaceSide,
        component: StressComponent,
        eddy_viscosity: &V,
    ) -> Float {
        closure::stress_term(
            cell,
            velocity,
            side,
            component,
            &self.geometry,
            eddy_viscosity,
            self.choice.turbulence_model,
        )
    }

    /// Smagorinsky eddy viscosity with the configured `C_s`.
    pub fn eddy_viscosity<F: FieldAccess + ?Sized>(
        &self,
        velocity: &VelocityFields<'_, F>,
        num_cells: [usize; 3],
    ) -> Result<OwnedField, ConfigError> {
        smagorinsky::smagorinsky_eddy_viscosity(
            velocity,
            &self.geometry,
            self.choice.smagorinsky_constant,
            num_cells,
        )
    }

    /// Evaluates a per-cell kernel over `region` on the rayon pool.
    ///
    /// The result is indexed by position relative to `region.lower()`.
    pub fn sweep<K: Fn(CellIndex) -> Float + Sync>(
        &self,
        region: CellBox,
        kernel: K,
    ) -> nd::Array3<Float> {
        par_sweep(region, kernel)
    }
}
