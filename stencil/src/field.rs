use ndarray as nd;

use crate::{
    indexing::{signed, CellBox, CellIndex},
    tags::Direction,
    Float, RawFloatData,
};

/// Component of the conserved-state field holding density.
pub const DENSITY_COMP: usize = 0;
/// Component of the conserved-state field holding density times potential temperature.
pub const RHO_THETA_COMP: usize = 1;
/// Component of the conserved-state field holding a passive scalar.
pub const SCALAR_COMP: usize = 2;
pub const NUM_CONS: usize = 3;

/// Read access to a cell- or face-centered field with ghost cells already populated.
///
/// Implementations are expected to reject reads outside their ghost envelope; kernels never
/// bounds-check on their own.
pub trait FieldAccess: Sync {
    fn value(&self, cell: CellIndex, component: usize) -> Float;

    /// Single-component fields (momentum, velocity, eddy viscosity) store their value in
    /// component 0.
    fn scalar(&self, cell: CellIndex) -> Float {
        self.value(cell, 0)
    }

    fn ghost_cells(&self) -> usize;

    /// Interior extent, ghost layers excluded.
    fn num_cells(&self) -> [usize; 3];
}

/// A field stored over `num_cells` interior cells surrounded by a uniform ghost layer.
///
/// Axes of the underlying array:
///     0: x index
///     1: y index
///     2: z index
///     3: component
pub struct GhostedField<S: RawFloatData> {
    storage: nd::ArrayBase<S, nd::Ix4>,
    ghost_cells: usize,
}

pub type OwnedField = GhostedField<nd::OwnedRepr<Float>>;
pub type FieldView<'a> = GhostedField<nd::ViewRepr<&'a Float>>;

impl<S: RawFloatData> GhostedField<S> {
    pub fn new(storage: nd::ArrayBase<S, nd::Ix4>, ghost_cells: usize) -> Self {
        let shape = storage.shape();
        assert!(
            shape[..3].iter().all(|&len| len >= 2 * ghost_cells),
            "Field of shape {shape:?} cannot hold {ghost_cells} ghost cell(s) per side"
        );
        Self {
            storage,
            ghost_cells,
        }
    }

    pub fn num_cells(&self) -> [usize; 3] {
        let (nx, ny, nz, _) = self.storage.dim();
        [nx, ny, nz].map(|len| len - 2 * self.ghost_cells)
    }

    pub fn num_components(&self) -> usize {
        self.storage.dim().3
    }

    pub fn storage(&self) -> &nd::ArrayBase<S, nd::Ix4> {
        &self.storage
    }

    pub fn view(&self) -> FieldView<'_> {
        GhostedField {
            storage: self.storage.view(),
            ghost_cells: self.ghost_cells,
        }
    }

    /// Interior values of one component, ghost layer stripped.
    pub fn interior(&self, component: usize) -> nd::ArrayView3<'_, Float> {
        let ghost = signed(self.ghost_cells);
        let [nx, ny, nz] = self.num_cells().map(signed);
        self.storage.slice(nd::s![
            ghost..ghost + nx,
            ghost..ghost + ny,
            ghost..ghost + nz,
            component
        ])
    }

    /// Every cell index this field can be read at.
    pub fn envelope(&self) -> CellBox {
        CellBox::interior(self.num_cells()).grow(self.ghost_cells)
    }

    fn storage_index(&self, cell: CellIndex, component: usize) -> Option<[usize; 4]> {
        let ghost = signed(self.ghost_cells);
        Some([
            usize::try_from(cell.i + ghost).ok()?,
            usize::try_from(cell.j + ghost).ok()?,
            usize::try_from(cell.k + ghost).ok()?,
            component,
        ])
    }
}

impl<S: RawFloatData + nd::DataMut> GhostedField<S> {
    #[track_caller]
    pub fn value_mut(&mut self, cell: CellIndex, component: usize) -> &mut Float {
        let ghost_cells = self.ghost_cells;
        self.storage_index(cell, component)
            .and_then(|index| self.storage.get_mut(index))
            .unwrap_or_else(|| {
                panic!("Write of component {component} at {cell:?} is outside the ghost envelope ({ghost_cells} ghost cell(s))")
            })
    }
}

impl OwnedField {
    pub fn zeros(num_cells: [usize; 3], num_components: usize, ghost_cells: usize) -> Self {
        let [nx, ny, nz] = num_cells.map(|n| n + 2 * ghost_cells);
        Self::new(nd::Array4::zeros((nx, ny, nz, num_components)), ghost_cells)
    }

    /// Builds a field by evaluating `f` at every cell of the envelope, ghost cells included.
    pub fn from_fn<F: Fn(CellIndex, usize) -> Float>(
        num_cells: [usize; 3],
        num_components: usize,
        ghost_cells: usize,
        f: F,
    ) -> Self {
        let [nx, ny, nz] = num_cells.map(|n| n + 2 * ghost_cells);
        let ghost = signed(ghost_cells);
        let storage = nd::Array4::from_shape_fn((nx, ny, nz, num_components), |(a, b, c, comp)| {
            f(
                CellIndex::new(signed(a) - ghost, signed(b) - ghost, signed(c) - ghost),
                comp,
            )
        });
        Self::new(storage, ghost_cells)
    }
}

impl<S: RawFloatData + Sync> FieldAccess for GhostedField<S> {
    #[track_caller]
    fn value(&self, cell: CellIndex, component: usize) -> Float {
        self.storage_index(cell, component)
            .and_then(|index| self.storage.get(index).copied())
            .unwrap_or_else(|| {
                panic!(
                    "Read of component {component} at {cell:?} is outside the ghost envelope ({} ghost cell(s))",
                    self.ghost_cells
                )
            })
    }

    fn ghost_cells(&self) -> usize {
        self.ghost_cells
    }

    fn num_cells(&self) -> [usize; 3] {
        Self::num_cells(self)
    }
}

impl<S: RawFloatData> std::fmt::Debug for GhostedField<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GhostedField")
            .field("num_cells", &self.num_cells())
            .field("num_components", &self.num_components())
            .field("ghost_cells", &self.ghost_cells)
            .finish_non_exhaustive()
    }
}

/// Per-axis grid spacing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Geometry {
    cell_size: [Float; 3],
}
impl Geometry {
    pub fn new(cell_size: [Float; 3]) -> Self {
        assert!(
            cell_size.iter().all(|&h| h > 0.),
            "Cell sizes must be positive, got {cell_size:?}"
        );
        Self { cell_size }
    }

    pub fn uniform(cell_size: Float) -> Self {
        Self::new([cell_size; 3])
    }

    pub fn cell_size(&self, direction: Direction) -> Float {
        self.cell_size[direction.axis()]
    }

    pub fn cell_sizes(&self) -> [Float; 3] {
        self.cell_size
    }

    pub fn cell_volume(&self) -> Float {
        self.cell_size.iter().product()
    }

    /// Filter width of an LES closure: the cube root of the cell volume.
    pub fn filter_width(&self) -> Float {
        self.cell_volume().cbrt()
    }
}

/// The three staggered momentum components `rho * (u, v, w)`, each living on the faces normal to
/// its own direction.
pub struct MomentumFields<'a, F: FieldAccess + ?Sized> {
    pub rho_u: &'a F,
    pub rho_v: &'a F,
    pub rho_w: &'a F,
}
impl<'a, F: FieldAccess + ?Sized> MomentumFields<'a, F> {
    pub fn new(rho_u: &'a F, rho_v: &'a F, rho_w: &'a F) -> Self {
        Self {
            rho_u,
            rho_v,
            rho_w,
        }
    }

    pub fn component(&self, direction: Direction) -> &'a F {
        match direction {
            Direction::X => self.rho_u,
            Direction::Y => self.rho_v,
            Direction::Z => self.rho_w,
        }
    }

    pub fn ghost_cells(&self) -> usize {
        [self.rho_u, self.rho_v, self.rho_w]
            .iter()
            .map(|field| field.ghost_cells())
            .min()
            .unwrap_or(0)
    }
}
impl<F: FieldAccess + ?Sized> Clone for MomentumFields<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<F: FieldAccess + ?Sized> Copy for MomentumFields<'_, F> {}

/// The three staggered velocity components.
pub struct VelocityFields<'a, F: FieldAccess + ?Sized> {
    pub u: &'a F,
    pub v: &'a F,
    pub w: &'a F,
}
impl<'a, F: FieldAccess + ?Sized> VelocityFields<'a, F> {
    pub fn new(u: &'a F, v: &'a F, w: &'a F) -> Self {
        Self { u, v, w }
    }

    pub fn component(&self, direction: Direction) -> &'a F {
        match direction {
            Direction::X => self.u,
            Direction::Y => self.v,
            Direction::Z => self.w,
        }
    }

    pub fn ghost_cells(&self) -> usize {
        [self.u, self.v, self.w]
            .iter()
            .map(|field| field.ghost_cells())
            .min()
            .unwrap_or(0)
    }
}
impl<F: FieldAccess + ?Sized> Clone for VelocityFields<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<F: FieldAccess + ?Sized> Copy for VelocityFields<'_, F> {}
