//! Contact detection: pose-bound solids, body pairs, the overlap cache, and collision response.

pub mod overlap;
pub mod pair;
pub mod response;
pub mod shapes;
pub mod solid;

pub use overlap::{ContactEvent, ContactState, OverlapTracker};
pub use pair::BodyPair;
pub use response::{elastic_exchange, resolve_contact};
pub use shapes::{CuboidSolid, SphereSolid};
pub use solid::Solid;
