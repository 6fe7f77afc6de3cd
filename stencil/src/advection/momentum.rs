use crate::{
    field::{FieldAccess, MomentumFields, VelocityFields},
    indexing::CellIndex,
    interp::interpolate_to_face,
    order::SpatialOrder,
    tags::{AdvectingQuantity, FaceSide, MomentumEqn},
    Float,
};

/// Convective flux of momentum equation `eqn` through the `side` face of staggered index `cell`
/// along the advecting direction.
///
/// `cell` indexes the face where the `eqn` velocity component lives. The advecting momentum
/// component lives on faces normal to its own direction, so it is averaged across the two
/// samples straddling the flux face in the `eqn` direction. For cross terms these are diagonal
/// neighbors, e.g. `rho_v(i, j+1, k)` and `rho_v(i-1, j+1, k)` for the `y` flux of `x` momentum
/// through the next face.
///
/// The advected velocity is interpolated onto the same face with the stencil of `order`.
pub fn advective_momentum_flux<F: FieldAccess + ?Sized>(
    cell: CellIndex,
    momentum: &MomentumFields<'_, F>,
    velocity: &VelocityFields<'_, F>,
    side: FaceSide,
    eqn: MomentumEqn,
    advecting: AdvectingQuantity,
    order: SpatialOrder,
) -> Float {
    let flux_direction = advecting.direction();
    let face = side.face_index(cell, flux_direction);
    let flux_field = momentum.component(flux_direction);
    let advecting_flux = 0.5 * (flux_field.scalar(face) + flux_field.scalar(face.shift(eqn, -1)));

    let advected = interpolate_to_face(
        velocity.component(eqn),
        0,
        cell,
        flux_direction,
        side,
        order,
    );
    advecting_flux * advected
}
