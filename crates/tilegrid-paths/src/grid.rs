//! The tile cost grid and its A* entry point.

use tilegrid_core::{Config, Coordinate, Point};

use crate::astar::astar_path;
use crate::cost::{DIAGONAL_STEP, ORTHOGONAL_STEP, PathCost};
use crate::distance::{manhattan, octile};
use crate::traits::{AstarPather, Pather, WeightedPather};

/// A `columns` x `rows` grid of [`PathCost`] classes.
///
/// Cells start `Available`. With hugging reduction enabled, blocking a cell
/// downgrades its `Available` orthogonal neighbours to `Avoid`, and opening a
/// cell leaves it at `Avoid`.
#[derive(Clone, Debug)]
pub struct PathGrid {
    columns: i32,
    rows: i32,
    cells: Vec<PathCost>,
    tile_size: i32,
    allow_diagonal: bool,
    reduce_hugging: bool,
}

impl PathGrid {
    /// Create a grid with every cell `Available`. Tile size and pathfinding
    /// flags come from `config`; non-positive dimensions yield an empty grid.
    pub fn new(columns: i32, rows: i32, config: &Config) -> Self {
        let columns = columns.max(0);
        let rows = rows.max(0);
        Self {
            columns,
            rows,
            cells: vec![PathCost::Available; columns as usize * rows as usize],
            tile_size: config.tile_size,
            allow_diagonal: config.pathfinding.allow_diagonal,
            reduce_hugging: config.pathfinding.reduce_hugging,
        }
    }

    #[inline]
    pub const fn columns(&self) -> i32 {
        self.columns
    }

    #[inline]
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    /// Default diagonal-movement flag used when a query does not override it.
    #[inline]
    pub const fn allow_diagonal(&self) -> bool {
        self.allow_diagonal
    }

    #[inline]
    pub const fn reduce_hugging(&self) -> bool {
        self.reduce_hugging
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        p.within(self.columns, self.rows)
            .then(|| p.y as usize * self.columns as usize + p.x as usize)
    }

    #[inline]
    fn at(&self, p: Point) -> PathCost {
        self.idx(p).map_or(PathCost::Blocked, |i| self.cells[i])
    }

    fn set(&mut self, p: Point, cost: PathCost) -> bool {
        match self.idx(p) {
            Some(i) => {
                self.cells[i] = cost;
                true
            }
            None => {
                log::warn!("path grid: cell {p} outside {}x{}", self.columns, self.rows);
                false
            }
        }
    }

    /// The cost class of a tile, or `None` outside the grid.
    pub fn cost_at(&self, c: &Coordinate) -> Option<PathCost> {
        self.idx(c.cell()).map(|i| self.cells[i])
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Mark a tile impassable.
    pub fn block(&mut self, c: &Coordinate) {
        let p = c.cell();
        if !self.set(p, PathCost::Blocked) {
            return;
        }
        if self.reduce_hugging {
            for n in p.neighbors_4() {
                if let Some(i) = self.idx(n) {
                    if self.cells[i] == PathCost::Available {
                        self.cells[i] = PathCost::Avoid;
                    }
                }
            }
        }
    }

    /// Make a tile passable again.
    pub fn open(&mut self, c: &Coordinate) {
        let cost = if self.reduce_hugging {
            PathCost::Avoid
        } else {
            PathCost::Available
        };
        self.set(c.cell(), cost);
    }

    /// Mark a tile as cheaper than a plain cell.
    pub fn prefer(&mut self, c: &Coordinate) {
        self.set(c.cell(), PathCost::Preferred);
    }

    /// The in-bounds orthogonal neighbours of a 1-indexed tile, as
    /// `(column, row)` pairs in up, right, down, left order.
    pub fn neighbors(&self, column: i32, row: i32) -> Vec<(i32, i32)> {
        // Tiles more than one step outside the grid have no in-bounds
        // neighbours.
        if !(0..=self.columns.saturating_add(1)).contains(&column)
            || !(0..=self.rows.saturating_add(1)).contains(&row)
        {
            return Vec::new();
        }
        Point::new(column - 1, row - 1)
            .neighbors_4()
            .into_iter()
            .filter(|n| n.within(self.columns, self.rows))
            .map(|n| (n.x + 1, n.y + 1))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Cheapest path from `start` to `end`, both included.
    ///
    /// `allow_diagonal` overrides the configured default for this call only.
    /// A start on the same tile as the end yields `[start]`; a blocked or
    /// off-grid endpoint, or a disconnected goal, yields `None`.
    pub fn find_path(
        &self,
        start: &Coordinate,
        end: &Coordinate,
        allow_diagonal: Option<bool>,
    ) -> Option<Vec<Coordinate>> {
        if start.is_same_tile(end) {
            return Some(vec![*start]);
        }
        if self.cost_at(start)?.is_blocked() || self.cost_at(end)?.is_blocked() {
            log::debug!("path {start} -> {end}: endpoint blocked");
            return None;
        }

        let view = GridPather {
            grid: self,
            diagonal: allow_diagonal.unwrap_or(self.allow_diagonal),
        };
        let Some(cells) = astar_path(&view, self.columns, self.rows, start.cell(), end.cell())
        else {
            log::debug!("path {start} -> {end}: no path");
            return None;
        };
        log::debug!("path {start} -> {end}: {} tiles", cells.len());

        cells
            .into_iter()
            .map(|p| Coordinate::from_cell(p, self.tile_size).ok())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Pather view
// ---------------------------------------------------------------------------

/// A read-only view of a [`PathGrid`] with the movement mode fixed for one
/// query.
///
/// Diagonal steps are refused when both flanking orthogonal cells are
/// blocked; squeezing past a single obstacle corner is allowed.
struct GridPather<'a> {
    grid: &'a PathGrid,
    diagonal: bool,
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if !self.grid.at(n).is_blocked() {
                buf.push(n);
            }
        }
        if !self.diagonal {
            return;
        }
        for n in p.neighbors_diagonal() {
            if self.grid.at(n).is_blocked() {
                continue;
            }
            let flank_x = self.grid.at(Point::new(n.x, p.y));
            let flank_y = self.grid.at(Point::new(p.x, n.y));
            if flank_x.is_blocked() && flank_y.is_blocked() {
                continue;
            }
            buf.push(n);
        }
    }
}

impl WeightedPather for GridPather<'_> {
    fn cost(&self, from: Point, to: Point) -> i32 {
        let base = if from.x != to.x && from.y != to.y {
            DIAGONAL_STEP
        } else {
            ORTHOGONAL_STEP
        };
        base * self.grid.at(to).weight().unwrap_or(PathCost::MIN_WEIGHT)
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        let steps = if self.diagonal {
            octile(from, to, ORTHOGONAL_STEP, DIAGONAL_STEP)
        } else {
            ORTHOGONAL_STEP * manhattan(from, to)
        };
        steps * PathCost::MIN_WEIGHT
    }
}
