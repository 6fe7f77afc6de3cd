//! Smagorinsky eddy viscosity `nu_t = (C_s * delta)^2 * |S|`, with `|S| = sqrt(2 S_ij S_ij)` and
//! `delta` the cube root of the cell volume.

use ndarray as nd;

use crate::{
    error::ConfigError,
    field::{FieldAccess, Geometry, OwnedField, VelocityFields},
    indexing::{par_sweep, CellBox, CellIndex},
    strain::strain_rate,
    tags::{Direction, FaceSide, StressComponent},
    Float,
};

/// Strain-rate magnitude `sqrt(2 S_ij S_ij)` at the center of `cell`.
///
/// Diagonal entries are differenced across the cell. Off-diagonal entries live on the four cell
/// edges parallel to the remaining axis and are averaged back to the center.
pub fn strain_magnitude<F: FieldAccess + ?Sized>(
    cell: CellIndex,
    velocity: &VelocityFields<'_, F>,
    geometry: &Geometry,
) -> Float {
    let squared_sum: Float = StressComponent::all()
        .map(|component| {
            let entry = if component.is_diagonal() {
                strain_rate(cell, velocity, FaceSide::Next, component, geometry)
            } else {
                let StressComponent { eqn, diff_dir } = component;
                [
                    cell,
                    cell.shift(eqn, 1),
                    cell.shift(diff_dir, 1),
                    cell.shift(eqn, 1).shift(diff_dir, 1),
                ]
                .into_iter()
                .map(|edge| strain_rate(edge, velocity, FaceSide::Previous, component, geometry))
                .sum::<Float>()
                    * 0.25
            };
            entry * entry
        })
        .sum();
    (2. * squared_sum).sqrt()
}

/// Fills the eddy viscosity over the interior of a `num_cells` grid plus every ghost layer the
/// velocity envelope can support, i.e. one fewer than the velocity fields carry.
///
/// Every velocity component must cover exactly `num_cells` interior cells.
pub fn smagorinsky_eddy_viscosity<F: FieldAccess + ?Sized>(
    velocity: &VelocityFields<'_, F>,
    geometry: &Geometry,
    smagorinsky_constant: Float,
    num_cells: [usize; 3],
) -> Result<OwnedField, ConfigError> {
    for (name, direction) in [("u", Direction::X), ("v", Direction::Y), ("w", Direction::Z)] {
        let found = velocity.component(direction).num_cells();
        if found != num_cells {
            return Err(ConfigError::MismatchedCellCount {
                field: name.to_string(),
                expected: num_cells,
                found,
            });
        }
    }
    let available = velocity.ghost_cells();
    let ghost_cells =
        available
            .checked_sub(1)
            .ok_or_else(|| ConfigError::InsufficientGhostCells {
                field: "velocity".to_string(),
                available,
                required: 1,
            })?;

    let length_scale = smagorinsky_constant * geometry.filter_width();
    log::debug!(
        "Filling Smagorinsky eddy viscosity on {num_cells:?} cells with {ghost_cells} ghost \
         cell(s), length scale {length_scale:.3e}"
    );

    let region = CellBox::interior(num_cells).grow(ghost_cells);
    let eddy_viscosity = par_sweep(region, |cell| {
        length_scale.powi(2) * strain_magnitude(cell, velocity, geometry)
    });
    Ok(OwnedField::new(
        eddy_viscosity.insert_axis(nd::Axis(3)),
        ghost_cells,
    ))
}
