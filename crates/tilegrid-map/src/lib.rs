//! Tile occupancy map with door/wall tracking and pathfinding.
//!
//! [`Map`] owns the authoritative status of every tile (free, blocked, or an
//! openable door that is open or closed) together with the occupant handle
//! that put it there, and mirrors every change into its
//! [`PathGrid`](tilegrid_paths::PathGrid) so path queries always see the
//! current obstacles.
//!
//! Occupant handles are opaque: the map stores and returns them but never
//! inspects them. [`OccupantId`] is provided as a default handle type.

pub mod choice;
pub mod location;
pub mod map;

pub use choice::{RandomChoice, WeightedChoice};
pub use location::{OccupantId, TileInfo, TileStatus};
pub use map::Map;
