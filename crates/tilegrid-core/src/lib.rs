//! **tilegrid-core**: foundational types for tile-grid maps.
//!
//! This crate provides the value types shared by the pathfinder and the
//! occupancy map: an explicit [`Config`] (tile size, window size and
//! pathfinding flags), the 0-indexed cell [`Point`], the pixel-aware,
//! 1-indexed tile [`Coordinate`] and the inclusive tile rectangle
//! [`Region`].
//!
//! Tiles are addressed by 1-indexed column/row in every public API. The
//! only place that converts to 0-indexed storage cells is
//! [`Coordinate::cell`] / [`Coordinate::from_cell`].

pub mod config;
pub mod coord;
pub mod error;
pub mod geom;
pub mod region;

pub use config::{Config, PathfindingConfig};
pub use coord::Coordinate;
pub use error::{GeomError, Result};
pub use geom::{Direction, Point};
pub use region::{Region, TileIter};
