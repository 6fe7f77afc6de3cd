use crate::{
    field::{FieldAccess, Geometry, VelocityFields},
    indexing::CellIndex,
    tags::{Direction, FaceSide, StressComponent},
    Float,
};

/// One entry `S_{eqn, diff_dir}` of the rate-of-strain tensor at the `side` face of `cell` along
/// `diff_dir`.
///
/// Diagonal entries are first differences of the matching velocity component. An off-diagonal
/// entry lives on a cell edge and averages the two cross derivatives meeting there; both are
/// one-sided differences ending at the staggered face index, e.g. for `S_xy` on the next face
///
/// ```text
/// ½ [ (u(i, j+1, k) - u(i, j, k)) / dy + (v(i, j+1, k) - v(i-1, j+1, k)) / dx ]
/// ```
///
/// The two derivatives are always summed in axis order, so `S_xy` and `S_yx` at the same edge are
/// bit-identical.
pub fn strain_rate<F: FieldAccess + ?Sized>(
    cell: CellIndex,
    velocity: &VelocityFields<'_, F>,
    side: FaceSide,
    component: StressComponent,
    geometry: &Geometry,
) -> Float {
    let StressComponent { eqn, diff_dir } = component;
    let face = side.face_index(cell, diff_dir);
    let backward_difference = |velocity_component: Direction, along: Direction| {
        let field = velocity.component(velocity_component);
        (field.scalar(face) - field.scalar(face.shift(along, -1))) / geometry.cell_size(along)
    };

    if component.is_diagonal() {
        backward_difference(eqn, eqn)
    } else {
        let (first, second) = (eqn.min(diff_dir), eqn.max(diff_dir));
        (backward_difference(first, second) + backward_difference(second, first)) * 0.5
    }
}
