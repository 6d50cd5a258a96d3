//! Core types describing bodies, their shape profiles, and shared data.

pub mod body;
pub mod geometry;
pub mod types;

pub use body::{Body, BodyBuilder};
pub use geometry::{Geometry, GeometryKind};
pub use types::{Pose, Triangle};
