//! Weighted A* pathfinding over tile cost grids.
//!
//! [`PathGrid`] stores one [`PathCost`] class per tile and answers
//! shortest-path queries between 1-indexed [`Coordinate`]s. The search
//! itself, [`astar_path`], is generic over the pather traits so other cost
//! models can reuse it.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | step cost |
//! | [`AstarPather`] : [`WeightedPather`] | admissible heuristic |
//!
//! [`Coordinate`]: tilegrid_core::Coordinate

mod astar;
mod cost;
mod distance;
mod grid;
mod traits;

pub use astar::astar_path;
pub use cost::{DIAGONAL_STEP, ORTHOGONAL_STEP, PathCost};
pub use distance::{manhattan, octile};
pub use grid::PathGrid;
pub use traits::{AstarPather, Pather, WeightedPather};
