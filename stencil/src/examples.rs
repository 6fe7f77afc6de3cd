//! Manufactured fields for exercising the kernels end to end.
//!
//! Ghost cells are filled by evaluating the same closed-form expression outside the interior, as
//! if the neighboring patches were present.

use crate::{
    field::{Geometry, OwnedField, DENSITY_COMP, NUM_CONS, RHO_THETA_COMP, SCALAR_COMP},
    indexing::CellIndex,
    Float,
};

/// Surface density, in kg/m^3.
const SURFACE_DENSITY: Float = 1.2;
/// Density scale height, in m.
const SCALE_HEIGHT: Float = 8000.;
/// Potential temperature at the surface, in K.
const SURFACE_THETA: Float = 300.;
/// Potential temperature gradient of a stably stratified layer, in K/m.
const THETA_LAPSE_RATE: Float = 0.003;

/// Conserved state of a column along `x` whose density is `i + 1` in cell `i`, uniform in `y` and
/// `z`. The remaining components are copies of the density.
pub fn density_ramp(num_cells: usize, ghost_cells: usize) -> OwnedField {
    OwnedField::from_fn([num_cells, 1, 1], NUM_CONS, ghost_cells, |cell, _| {
        (cell.i + 1) as Float
    })
}

/// Staggered velocity of a pure shear flow `u = shear_rate * y`, with `v = w = 0`.
pub fn linear_shear(
    num_cells: [usize; 3],
    ghost_cells: usize,
    shear_rate: Float,
    geometry: &Geometry,
) -> [OwnedField; 3] {
    let dy = geometry.cell_sizes()[1];
    let u = OwnedField::from_fn(num_cells, 1, ghost_cells, |cell, _| {
        shear_rate * dy * cell.j as Float
    });
    let still = || OwnedField::zeros(num_cells, 1, ghost_cells);
    [u, still(), still()]
}

/// Height of the center of cell `cell` above the bottom of the domain.
fn height(cell: CellIndex, geometry: &Geometry) -> Float {
    (cell.k as Float + 0.5) * geometry.cell_sizes()[2]
}

/// Exponentially stratified atmosphere with a linear potential temperature profile and a
/// Gaussian tracer puff centered in `x`.
pub fn stratified_atmosphere(
    num_cells: [usize; 3],
    ghost_cells: usize,
    geometry: &Geometry,
) -> OwnedField {
    let dx = geometry.cell_sizes()[0];
    let center = 0.5 * num_cells[0] as Float * dx;
    let puff_width = 0.1 * num_cells[0] as Float * dx;
    OwnedField::from_fn(num_cells, NUM_CONS, ghost_cells, |cell, comp| {
        let z = height(cell, geometry);
        let density = SURFACE_DENSITY * (-z / SCALE_HEIGHT).exp();
        match comp {
            DENSITY_COMP => density,
            RHO_THETA_COMP => density * (SURFACE_THETA + THETA_LAPSE_RATE * z),
            SCALAR_COMP => {
                let x = (cell.i as Float + 0.5) * dx;
                (-((x - center) / puff_width).powi(2)).exp()
            }
            _ => 0.,
        }
    })
}
