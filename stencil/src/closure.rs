use crate::{
    field::{FieldAccess, Geometry, VelocityFields},
    indexing::CellIndex,
    strain::strain_rate,
    tags::{FaceSide, StressComponent, TurbulenceModel},
    Float,
};

/// Eddy viscosity sample used for the `component` stress on the `side` face of `cell`.
///
/// Diagonal stresses on the previous face take the sample one cell back along the differencing
/// direction. Off-diagonal stresses live on cell edges, where the viscosity would have to be
/// averaged from the four surrounding cells; for now they take the co-located sample.
pub fn interpolated_eddy_viscosity<V: FieldAccess + ?Sized>(
    cell: CellIndex,
    side: FaceSide,
    component: StressComponent,
    eddy_viscosity: &V,
) -> Float {
    match side {
        FaceSide::Previous if component.is_diagonal() => {
            eddy_viscosity.scalar(cell.shift(component.diff_dir, -1))
        }
        // TODO: Average to the edge once the placement of off-diagonal stresses is confirmed.
        FaceSide::Previous | FaceSide::Next => eddy_viscosity.scalar(cell),
    }
}

/// Subfilter-scale stress: the strain rate scaled by the eddy viscosity at the same placement.
pub fn subfilter_stress<F: FieldAccess + ?Sized, V: FieldAccess + ?Sized>(
    cell: CellIndex,
    velocity: &VelocityFields<'_, F>,
    side: FaceSide,
    component: StressComponent,
    geometry: &Geometry,
    eddy_viscosity: &V,
) -> Float {
    interpolated_eddy_viscosity(cell, side, component, eddy_viscosity)
        * strain_rate(cell, velocity, side, component, geometry)
}

/// Diffusive stress term consumed by the momentum update, selected by the turbulence model.
pub fn stress_term<F: FieldAccess + ?Sized, V: FieldAccess + ?Sized>(
    cell: CellIndex,
    velocity: &VelocityFields<'_, F>,
    side: FaceSide,
    component: StressComponent,
    geometry: &Geometry,
    eddy_viscosity: &V,
    turbulence_model: TurbulenceModel,
) -> Float {
    match turbulence_model {
        TurbulenceModel::Dns => strain_rate(cell, velocity, side, component, geometry),
        TurbulenceModel::Smagorinsky => {
            subfilter_stress(cell, velocity, side, component, geometry, eddy_viscosity)
        }
    }
}
