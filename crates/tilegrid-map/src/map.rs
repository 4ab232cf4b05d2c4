//! The occupancy map.

use rand::{Rng, RngExt};
use tilegrid_core::{Config, Coordinate, Direction, GeomError, Region};
use tilegrid_paths::PathGrid;

use crate::location::{OccupantId, TileInfo, TileStatus};

#[derive(Clone, Debug)]
struct Tile<O> {
    status: TileStatus,
    occupant: Option<O>,
}

impl<O> Default for Tile<O> {
    fn default() -> Self {
        Self {
            status: TileStatus::Free,
            occupant: None,
        }
    }
}

/// Authoritative tile occupancy for a `columns x rows` grid.
///
/// Every mutation is mirrored into the owned [`PathGrid`]: `Blocked` and
/// `Closed` tiles are blocked there, `Free` and `Open` tiles are open.
/// Mutations aimed outside the grid log a warning and change nothing.
#[derive(Clone, Debug)]
pub struct Map<O = OccupantId> {
    config: Config,
    columns: i32,
    rows: i32,
    tiles: Vec<Tile<O>>,
    path_grid: PathGrid,
}

impl<O: Clone + PartialEq> Map<O> {
    /// Create an all-`Free` map sized `window_size / tile_size` per side.
    pub fn new(config: Config) -> Result<Self, GeomError> {
        config.validate()?;
        let columns = config.columns();
        let rows = config.rows();
        log::debug!(
            "map {columns}x{rows} (tile {} px, diagonal {}, reduce hugging {})",
            config.tile_size,
            config.pathfinding.allow_diagonal,
            config.pathfinding.reduce_hugging,
        );
        Ok(Self {
            config,
            columns,
            rows,
            tiles: vec![Tile::default(); columns as usize * rows as usize],
            path_grid: PathGrid::new(columns, rows, &config),
        })
    }

    #[inline]
    pub const fn columns(&self) -> i32 {
        self.columns
    }

    #[inline]
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    /// Map width in pixels.
    #[inline]
    pub fn width(&self) -> f32 {
        self.config.width_px()
    }

    /// Map height in pixels.
    #[inline]
    pub fn height(&self) -> f32 {
        self.config.height_px()
    }

    #[inline]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The path grid mirroring this map's occupancy.
    #[inline]
    pub const fn path_grid(&self) -> &PathGrid {
        &self.path_grid
    }

    fn index_of(&self, column: i32, row: i32) -> Option<usize> {
        if (1..=self.columns).contains(&column) && (1..=self.rows).contains(&row) {
            Some((row - 1) as usize * self.columns as usize + (column - 1) as usize)
        } else {
            None
        }
    }

    fn index(&self, c: &Coordinate) -> Option<usize> {
        self.index_of(c.column(), c.row())
    }

    fn tile_mut(&mut self, c: &Coordinate, op: &str) -> Option<&mut Tile<O>> {
        match self.index(c) {
            Some(i) => Some(&mut self.tiles[i]),
            None => {
                log::warn!(
                    "{op}: {c} is outside the {}x{} map",
                    self.columns,
                    self.rows
                );
                None
            }
        }
    }

    fn status(&self, c: &Coordinate) -> Option<TileStatus> {
        self.index(c).map(|i| self.tiles[i].status)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The tile under `c`, or [`TileInfo::edge`] if `c` is off the map.
    ///
    /// The returned position is the tile-aligned coordinate of that tile.
    pub fn location_at(&self, c: &Coordinate) -> TileInfo<O> {
        let Some(i) = self.index(c) else {
            return TileInfo::edge();
        };
        let tile = &self.tiles[i];
        TileInfo {
            position: Coordinate::new(c.column(), c.row(), self.config.tile_size).ok(),
            status: tile.status,
            occupant: tile.occupant.clone(),
            is_edge: false,
        }
    }

    pub fn is_blocked(&self, c: &Coordinate) -> bool {
        self.status(c) == Some(TileStatus::Blocked)
    }

    /// Whether the tile holds a door, open or closed.
    pub fn is_openable(&self, c: &Coordinate) -> bool {
        self.status(c).is_some_and(TileStatus::is_openable)
    }

    /// Whether an actor may enter the tile. Off-map tiles are never enterable.
    pub fn sprite_can_move_to(&self, c: &Coordinate) -> bool {
        self.status(c).is_some_and(TileStatus::is_passable)
    }

    pub fn occupant_at(&self, c: &Coordinate) -> Option<&O> {
        self.index(c).and_then(|i| self.tiles[i].occupant.as_ref())
    }

    /// The occupant of `c` if the tile is an openable (door) tile.
    pub fn openable_occupant_at(&self, c: &Coordinate) -> Option<&O> {
        let i = self.index(c)?;
        let tile = &self.tiles[i];
        if tile.status.is_openable() {
            tile.occupant.as_ref()
        } else {
            None
        }
    }

    fn adjacent(&self, c: &Coordinate, dir: Direction) -> Option<Coordinate> {
        let d = dir.delta();
        let column = c.column().checked_add(d.x)?;
        let row = c.row().checked_add(d.y)?;
        self.index_of(column, row)?;
        Coordinate::new(column, row, self.config.tile_size).ok()
    }

    /// The tile left of `c`, or `None` if that would be off the map.
    pub fn location_left_of(&self, c: &Coordinate) -> Option<TileInfo<O>> {
        self.adjacent(c, Direction::Left)
            .map(|n| self.location_at(&n))
    }

    /// The tile right of `c`, or `None` if that would be off the map.
    pub fn location_right_of(&self, c: &Coordinate) -> Option<TileInfo<O>> {
        self.adjacent(c, Direction::Right)
            .map(|n| self.location_at(&n))
    }

    /// The tile above `c`, or `None` if that would be off the map.
    pub fn location_above(&self, c: &Coordinate) -> Option<TileInfo<O>> {
        self.adjacent(c, Direction::Up).map(|n| self.location_at(&n))
    }

    /// The tile below `c`, or `None` if that would be off the map.
    pub fn location_below(&self, c: &Coordinate) -> Option<TileInfo<O>> {
        self.adjacent(c, Direction::Down)
            .map(|n| self.location_at(&n))
    }

    /// First door occupant next to `c`, checking left, right, above, then
    /// below.
    pub fn adjacent_openable(&self, c: &Coordinate) -> Option<&O> {
        [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ]
        .into_iter()
        .filter_map(|dir| self.adjacent(c, dir))
        .find_map(|n| self.openable_occupant_at(&n))
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Mark `c` as a permanent obstacle owned by `occupant`.
    pub fn mark_blocked(&mut self, c: &Coordinate, occupant: O) {
        let Some(tile) = self.tile_mut(c, "mark_blocked") else {
            return;
        };
        tile.status = TileStatus::Blocked;
        tile.occupant = Some(occupant);
        self.path_grid.block(c);
        log::trace!("blocked {c}");
    }

    /// Mark every tile of `region` blocked by the same occupant.
    pub fn mark_blocked_region(&mut self, region: &Region, occupant: O) {
        for c in region.tiles() {
            self.mark_blocked(&c, occupant.clone());
        }
    }

    /// Place a door owned by `occupant` at `c`, closed or open.
    pub fn mark_openable(&mut self, c: &Coordinate, occupant: O, closed: bool) {
        let Some(tile) = self.tile_mut(c, "mark_openable") else {
            return;
        };
        tile.occupant = Some(occupant);
        if closed {
            tile.status = TileStatus::Closed;
            self.path_grid.block(c);
        } else {
            tile.status = TileStatus::Open;
            self.path_grid.open(c);
        }
        log::trace!("openable {c} (closed {closed})");
    }

    /// Set `c` to `Closed`, keeping its occupant.
    pub fn mark_closed(&mut self, c: &Coordinate) {
        let Some(tile) = self.tile_mut(c, "mark_closed") else {
            return;
        };
        tile.status = TileStatus::Closed;
        self.path_grid.block(c);
        log::trace!("closed {c}");
    }

    /// Set `c` to `Open`, keeping its occupant.
    pub fn mark_open(&mut self, c: &Coordinate) {
        let Some(tile) = self.tile_mut(c, "mark_open") else {
            return;
        };
        tile.status = TileStatus::Open;
        self.path_grid.open(c);
        log::trace!("opened {c}");
    }

    /// Return `c` to `Free` and drop its occupant reference.
    pub fn clear(&mut self, c: &Coordinate) {
        let Some(tile) = self.tile_mut(c, "clear") else {
            return;
        };
        *tile = Tile::default();
        self.path_grid.open(c);
        log::trace!("cleared {c}");
    }

    // -----------------------------------------------------------------------
    // Geometry
    // -----------------------------------------------------------------------

    /// Clamp a pixel x into `[0, width]`.
    pub fn bound_to_width(&self, x: f32) -> f32 {
        x.clamp(0.0, self.width())
    }

    /// Clamp a pixel y into `[0, height]`.
    pub fn bound_to_height(&self, y: f32) -> f32 {
        y.clamp(0.0, self.height())
    }

    pub fn center_x(&self) -> f32 {
        self.width() / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.height() / 2.0
    }

    /// Pixel center of the map as `(x, y)`.
    pub fn center(&self) -> (f32, f32) {
        (self.center_x(), self.center_y())
    }

    pub fn right_edge(&self) -> f32 {
        self.width()
    }

    pub fn bottom_edge(&self) -> f32 {
        self.height()
    }

    /// Strictly left of the vertical center line.
    pub fn x_is_left_of_center(&self, x: f32) -> bool {
        x < self.center_x()
    }

    /// Strictly above the horizontal center line.
    pub fn y_is_above_center(&self, y: f32) -> bool {
        y < self.center_y()
    }

    /// Distance from `x` to the nearer of the left and right map edges.
    pub fn shortest_distance_to_sides(&self, x: f32) -> f32 {
        x.min(self.width() - x)
    }

    // -----------------------------------------------------------------------
    // Paths and sampling
    // -----------------------------------------------------------------------

    /// Cheapest path between two tiles. See [`PathGrid::find_path`].
    pub fn find_path(
        &self,
        start: &Coordinate,
        end: &Coordinate,
        allow_diagonal: Option<bool>,
    ) -> Option<Vec<Coordinate>> {
        self.path_grid.find_path(start, end, allow_diagonal)
    }

    /// A uniformly chosen tile of `region`.
    ///
    /// Regions reaching past the map may yield the edge sentinel.
    pub fn random_tile_in<R: Rng + ?Sized>(&self, region: &Region, rng: &mut R) -> TileInfo<O> {
        let column = rng.random_range(region.from_column()..=region.to_column());
        let row = rng.random_range(region.from_row()..=region.to_row());
        match Coordinate::new(column, row, self.config.tile_size) {
            Ok(c) => self.location_at(&c),
            Err(_) => TileInfo::edge(),
        }
    }
}
