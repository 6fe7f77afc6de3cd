//! Flux-form convective terms through a single face.
//!
//! Both builders return `advecting mass flux * advected quantity`; they differ in where the mass
//! flux has to be read from on the staggered grid.

pub mod momentum;
pub mod state;

pub use momentum::advective_momentum_flux;
pub use state::advective_state_flux;
