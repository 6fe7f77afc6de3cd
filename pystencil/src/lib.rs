use numpy::{IntoPyArray, PyReadonlyArray4};
use pyo3::{exceptions::PyValueError, prelude::*};
use stencil::{
    tags::parse_tag, AdvectedQuantity, AdvectingQuantity, CellBox, CellIndex, ConfigError,
    Direction, Discretization, FaceSide, FieldView, Float, Geometry, MomentumFields, SolverChoice,
    SpatialOrder,
};

fn to_py_err(err: ConfigError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Wraps a `(x, y, z, component)` array whose outer `ghost_cells` layers are ghost cells.
fn field_view<'a>(
    array: &'a PyReadonlyArray4<'_, Float>,
    ghost_cells: usize,
) -> PyResult<FieldView<'a>> {
    let view = array.as_array();
    if view.shape()[..3].iter().any(|&len| len < 2 * ghost_cells) {
        return Err(PyValueError::new_err(format!(
            "array of shape {:?} cannot hold {ghost_cells} ghost cell(s) per side",
            view.shape()
        )));
    }
    Ok(FieldView::new(view, ghost_cells))
}

fn discretization(order: u32) -> PyResult<Discretization> {
    let order = SpatialOrder::try_from(order).map_err(to_py_err)?;
    Ok(Discretization::new(
        SolverChoice::default().with_spatial_order(order),
        Geometry::uniform(1.),
    ))
}

fn interior_cell(field: &FieldView<'_>, (i, j, k): (isize, isize, isize)) -> PyResult<CellIndex> {
    let cell = CellIndex::new(i, j, k);
    if CellBox::interior(field.num_cells()).contains(cell) {
        Ok(cell)
    } else {
        Err(PyValueError::new_err(format!(
            "cell {cell:?} is outside the {:?} interior",
            field.num_cells()
        )))
    }
}

#[pyfunction]
fn ghost_cells_required(order: u32) -> PyResult<usize> {
    stencil::order::ghost_cells_required(order).map_err(to_py_err)
}

#[pyfunction]
fn interpolate_to_face(
    field: PyReadonlyArray4<'_, Float>,
    ghost_cells: usize,
    component: usize,
    cell: (isize, isize, isize),
    direction: &str,
    side: &str,
    order: u32,
) -> PyResult<Float> {
    let discretization = discretization(order)?;
    let field = field_view(&field, ghost_cells)?;
    discretization
        .check_ghost_cells("field", &field)
        .map_err(to_py_err)?;
    let cell = interior_cell(&field, cell)?;
    Ok(discretization.interpolate_to_face(
        &field,
        component,
        cell,
        parse_tag::<Direction>("direction", direction).map_err(to_py_err)?,
        parse_tag::<FaceSide>("face side", side).map_err(to_py_err)?,
    ))
}

/// Face values for every interior cell, in parallel.
#[pyfunction]
fn face_values<'py>(
    py: Python<'py>,
    field: PyReadonlyArray4<'py, Float>,
    ghost_cells: usize,
    component: usize,
    direction: &str,
    side: &str,
    order: u32,
) -> PyResult<Bound<'py, numpy::PyArray3<Float>>> {
    let discretization = discretization(order)?;
    let field = field_view(&field, ghost_cells)?;
    discretization
        .check_ghost_cells("field", &field)
        .map_err(to_py_err)?;
    let direction = parse_tag::<Direction>("direction", direction).map_err(to_py_err)?;
    let side = parse_tag::<FaceSide>("face side", side).map_err(to_py_err)?;

    let values = discretization.sweep(CellBox::interior(field.num_cells()), |cell| {
        discretization.interpolate_to_face(&field, component, cell, direction, side)
    });
    Ok(values.into_pyarray_bound(py))
}

#[pyfunction]
#[allow(clippy::too_many_arguments)]
fn state_flux(
    rho_u: PyReadonlyArray4<'_, Float>,
    rho_v: PyReadonlyArray4<'_, Float>,
    rho_w: PyReadonlyArray4<'_, Float>,
    cons: PyReadonlyArray4<'_, Float>,
    ghost_cells: usize,
    cell: (isize, isize, isize),
    side: &str,
    advected: &str,
    advecting: &str,
    order: u32,
) -> PyResult<Float> {
    let discretization = discretization(order)?;
    let (rho_u, rho_v, rho_w) = (
        field_view(&rho_u, ghost_cells)?,
        field_view(&rho_v, ghost_cells)?,
        field_view(&rho_w, ghost_cells)?,
    );
    let cons = field_view(&cons, ghost_cells)?;
    for (name, field) in [("rho_u", &rho_u), ("rho_v", &rho_v), ("rho_w", &rho_w), ("cons", &cons)] {
        discretization
            .check_ghost_cells(name, field)
            .map_err(to_py_err)?;
    }
    let cell = interior_cell(&cons, cell)?;

    Ok(discretization.state_flux(
        cell,
        &MomentumFields::new(&rho_u, &rho_v, &rho_w),
        &cons,
        parse_tag::<FaceSide>("face side", side).map_err(to_py_err)?,
        parse_tag::<AdvectedQuantity>("advected quantity", advected).map_err(to_py_err)?,
        parse_tag::<AdvectingQuantity>("advecting quantity", advecting).map_err(to_py_err)?,
    ))
}

#[pymodule]
fn pystencil(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ghost_cells_required, m)?)?;
    m.add_function(wrap_pyfunction!(interpolate_to_face, m)?)?;
    m.add_function(wrap_pyfunction!(face_values, m)?)?;
    m.add_function(wrap_pyfunction!(state_flux, m)?)
}
