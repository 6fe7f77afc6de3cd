#![deny(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

pub mod advection;
pub mod closure;
pub mod config;
pub mod discretization;
pub mod error;
pub mod examples;
pub mod field;
pub mod indexing;
pub mod interp;
pub mod order;
pub mod smagorinsky;
pub mod strain;
pub mod tags;
#[cfg(test)]
mod test_util;

use ndarray as nd;

pub type Float = f64;

pub trait RawFloatData: nd::RawData<Elem = Float> + nd::Data {}

impl<S: nd::RawData<Elem = Float> + nd::Data> RawFloatData for S {}

pub use config::SolverChoice;
pub use discretization::Discretization;
pub use error::ConfigError;
pub use field::{FieldAccess, FieldView, GhostedField, Geometry, MomentumFields, OwnedField, VelocityFields};
pub use indexing::{CellBox, CellIndex};
pub use order::SpatialOrder;
pub use tags::{
    AdvectedQuantity, AdvectingQuantity, DiffusionDir, Direction, FaceSide, MomentumEqn,
    StressComponent, TurbulenceModel,
};
