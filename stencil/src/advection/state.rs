use crate::{
    field::{FieldAccess, MomentumFields},
    indexing::CellIndex,
    interp::{interpolate_density, interpolate_rho_theta, interpolate_scalar},
    order::SpatialOrder,
    tags::{AdvectedQuantity, AdvectingQuantity, FaceSide},
    Float,
};

/// Convective flux of a cell-centered state equation (continuity, potential temperature or a
/// passive scalar) through the `side` face of `cell`.
///
/// The face coincides with a sample of the advecting momentum component, so no averaging is
/// needed: the next face reads the momentum one cell ahead, the previous face reads it at `cell`.
pub fn advective_state_flux<F: FieldAccess + ?Sized, C: FieldAccess + ?Sized>(
    cell: CellIndex,
    momentum: &MomentumFields<'_, F>,
    cons: &C,
    side: FaceSide,
    advected: AdvectedQuantity,
    advecting: AdvectingQuantity,
    order: SpatialOrder,
) -> Float {
    let direction = advecting.direction();
    let advecting_flux = momentum
        .component(direction)
        .scalar(side.face_index(cell, direction));

    let advected = match advected {
        AdvectedQuantity::Unity => 1.,
        AdvectedQuantity::Theta => {
            interpolate_rho_theta(cons, cell, direction, side, order)
                / interpolate_density(cons, cell, direction, side, order)
        }
        AdvectedQuantity::Scalar => interpolate_scalar(cons, cell, direction, side, order),
    };
    advecting_flux * advected
}
