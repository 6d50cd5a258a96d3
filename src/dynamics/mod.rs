//! Environmental forces and motion integration.

pub mod forces;
pub mod integrator;

pub use forces::{FluidDrag, ForceGenerator, GravityForce, Surroundings};
pub use integrator::Integrator;
