//! The seam between search routines and the grids they walk.

use tilegrid_core::Point;

/// Enumerates the cells reachable in one step.
pub trait Pather {
    /// Push every enterable cell adjacent to `p` onto `buf`, which arrives
    /// empty. Push order is the expansion order, so keep it fixed.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// A [`Pather`] that prices each step.
pub trait WeightedPather: Pather {
    /// Price of stepping from `from` into the adjacent cell `to`; always > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// A [`WeightedPather`] that can estimate the remaining cost to a goal.
pub trait AstarPather: WeightedPather {
    /// Lower bound on the cheapest route from `from` to `to`.
    fn estimate(&self, from: Point, to: Point) -> i32;
}
