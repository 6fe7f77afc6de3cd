use ndarray as nd;
use rayon::prelude::*;

use crate::{tags::Direction, Float};

pub trait Indexing {
    type Index: Copy + std::fmt::Debug + PartialEq + Eq;

    fn shape(&self) -> nd::Dim<[usize; 3]>;

    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn flatten(&self, index: Self::Index) -> usize;
    fn unflatten(&self, flat_index: usize) -> Self::Index;
}

/// Converts an array position to a signed index offset.
pub(crate) fn signed(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}

pub fn iter_indices<I: Indexing>(indexing: &I) -> impl Iterator<Item = I::Index> + '_ {
    (0..indexing.len()).map(|flat_index| indexing.unflatten(flat_index))
}

/// Signed cell (or staggered face) index. Ghost cells have indices below zero or at/above the
/// interior size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellIndex {
    pub i: isize,
    pub j: isize,
    pub k: isize,
}
impl CellIndex {
    pub fn new(i: isize, j: isize, k: isize) -> Self {
        Self { i, j, k }
    }

    pub fn shift(self, direction: Direction, offset: isize) -> Self {
        let [di, dj, dk] = direction.unit();
        Self {
            i: self.i + di * offset,
            j: self.j + dj * offset,
            k: self.k + dk * offset,
        }
    }

    pub fn component(self, direction: Direction) -> isize {
        match direction {
            Direction::X => self.i,
            Direction::Y => self.j,
            Direction::Z => self.k,
        }
    }
}
impl From<[isize; 3]> for CellIndex {
    fn from([i, j, k]: [isize; 3]) -> Self {
        Self { i, j, k }
    }
}

/// Half-open box `lower..upper` of cell indices, flattened with `k` fastest.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellBox {
    lower: CellIndex,
    upper: CellIndex,
}
impl CellBox {
    pub fn new(lower: CellIndex, upper: CellIndex) -> Self {
        assert!(
            lower.i <= upper.i && lower.j <= upper.j && lower.k <= upper.k,
            "Cell box bounds are inverted: {lower:?}..{upper:?}"
        );
        Self { lower, upper }
    }

    /// Interior cells `0..num_cells` of a grid.
    pub fn interior(num_cells: [usize; 3]) -> Self {
        let [nx, ny, nz] = num_cells.map(signed);
        Self::new(CellIndex::new(0, 0, 0), CellIndex::new(nx, ny, nz))
    }

    /// Same box widened by `num_layers` cells on every side.
    pub fn grow(self, num_layers: usize) -> Self {
        let num_layers = signed(num_layers);
        Self {
            lower: CellIndex::new(
                self.lower.i - num_layers,
                self.lower.j - num_layers,
                self.lower.k - num_layers,
            ),
            upper: CellIndex::new(
                self.upper.i + num_layers,
                self.upper.j + num_layers,
                self.upper.k + num_layers,
            ),
        }
    }

    pub fn lower(&self) -> CellIndex {
        self.lower
    }
    pub fn upper(&self) -> CellIndex {
        self.upper
    }

    pub fn contains(&self, index: CellIndex) -> bool {
        (self.lower.i..self.upper.i).contains(&index.i)
            && (self.lower.j..self.upper.j).contains(&index.j)
            && (self.lower.k..self.upper.k).contains(&index.k)
    }

    fn extents(&self) -> [usize; 3] {
        [
            self.upper.i.abs_diff(self.lower.i),
            self.upper.j.abs_diff(self.lower.j),
            self.upper.k.abs_diff(self.lower.k),
        ]
    }

    /// Position of `index` relative to the lower corner, as an array index.
    pub fn local(&self, index: CellIndex) -> [usize; 3] {
        [
            index.i.abs_diff(self.lower.i),
            index.j.abs_diff(self.lower.j),
            index.k.abs_diff(self.lower.k),
        ]
    }

    pub fn iter(&self) -> impl Iterator<Item = CellIndex> + '_ {
        iter_indices(self)
    }
}
impl Indexing for CellBox {
    type Index = CellIndex;

    fn shape(&self) -> nd::Dim<[usize; 3]> {
        nd::Dim(self.extents())
    }

    fn len(&self) -> usize {
        self.extents().iter().product()
    }

    fn flatten(&self, index: Self::Index) -> usize {
        let [_, ny, nz] = self.extents();
        let [i, j, k] = self.local(index);
        (i * ny + j) * nz + k
    }

    fn unflatten(&self, flat_index: usize) -> Self::Index {
        let [_, ny, nz] = self.extents();
        CellIndex {
            i: self.lower.i + signed(flat_index / (ny * nz)),
            j: self.lower.j + signed(flat_index / nz % ny),
            k: self.lower.k + signed(flat_index % nz),
        }
    }
}

/// Evaluates `kernel` at every cell of `region` in parallel, gathering the results into an array
/// laid out like `region` (`local(index)` addresses the value at `index`).
pub fn par_sweep<K: Fn(CellIndex) -> Float + Sync>(region: CellBox, kernel: K) -> nd::Array3<Float> {
    let values: Vec<Float> = (0..region.len())
        .into_par_iter()
        .map(|flat_index| kernel(region.unflatten(flat_index)))
        .collect();
    // `unflatten` walks `k` fastest, which is the standard layout.
    nd::Array3::from_shape_vec(region.shape(), values)
        .expect("one value per cell of the swept region")
}
