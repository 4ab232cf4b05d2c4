//! Inclusive rectangles of tiles.

use std::fmt;

use crate::config::Config;
use crate::coord::{Coordinate, check_pixel_extent};
use crate::error::{GeomError, Result};

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// An inclusive tile rectangle `[from_column, to_column] x [from_row, to_row]`.
///
/// Unlike a half-open range, both corner tiles belong to the region, so a
/// region is never empty: the smallest one is a single tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RegionRepr"))]
pub struct Region {
    from_column: i32,
    from_row: i32,
    to_column: i32,
    to_row: i32,
    tile_size: i32,
}

impl Region {
    /// Create a region. Fails if any bound is below 1 or the rectangle is
    /// inverted on either axis.
    pub fn new(
        from_column: i32,
        from_row: i32,
        to_column: i32,
        to_row: i32,
        tile_size: i32,
    ) -> Result<Self> {
        if tile_size < 1 {
            return Err(GeomError::invalid(format!(
                "tile_size must be >= 1, got {tile_size}"
            )));
        }
        if from_column < 1 || to_column < 1 {
            return Err(GeomError::invalid(format!(
                "column values must be >= 1, got {from_column} and {to_column}"
            )));
        }
        if from_row < 1 || to_row < 1 {
            return Err(GeomError::invalid(format!(
                "row values must be >= 1, got {from_row} and {to_row}"
            )));
        }
        if to_column < from_column {
            return Err(GeomError::invalid(format!(
                "to_column ({to_column}) must be >= from_column ({from_column})"
            )));
        }
        if to_row < from_row {
            return Err(GeomError::invalid(format!(
                "to_row ({to_row}) must be >= from_row ({from_row})"
            )));
        }
        check_pixel_extent(to_column, to_row, tile_size)?;
        Ok(Self {
            from_column,
            from_row,
            to_column,
            to_row,
            tile_size,
        })
    }

    /// A `columns` x `rows` region whose pixel box is centred on (`cx`, `cy`),
    /// snapped to the nearest tiles.
    pub fn with_center(cx: f32, cy: f32, columns: i32, rows: i32, tile_size: i32) -> Result<Self> {
        if columns < 1 || rows < 1 {
            return Err(GeomError::invalid(format!(
                "region must span at least one tile, got {columns}x{rows}"
            )));
        }
        let ts = tile_size as f32;
        let top_left = Coordinate::from_pixel(
            cx - columns as f32 * ts / 2.0,
            cy - rows as f32 * ts / 2.0,
            tile_size,
        )?;
        let (Some(to_column), Some(to_row)) = (
            top_left.column().checked_add(columns - 1),
            top_left.row().checked_add(rows - 1),
        ) else {
            return Err(GeomError::invalid(format!(
                "{columns}x{rows} region at {top_left} overflows the tile range"
            )));
        };
        Self::new(top_left.column(), top_left.row(), to_column, to_row, tile_size)
    }

    /// Create a region after clamping every bound into the map.
    ///
    /// Clamping never reorders bounds, so an inverted rectangle still fails.
    pub fn clamp_to_map_bounds(
        from_column: i32,
        from_row: i32,
        to_column: i32,
        to_row: i32,
        config: &Config,
    ) -> Result<Self> {
        config.validate()?;
        let (cols, rows) = (config.columns(), config.rows());
        Self::new(
            from_column.clamp(1, cols),
            from_row.clamp(1, rows),
            to_column.clamp(1, cols),
            to_row.clamp(1, rows),
            config.tile_size,
        )
    }

    // -----------------------------------------------------------------------
    // Tile accessors
    // -----------------------------------------------------------------------

    #[inline]
    pub const fn from_column(&self) -> i32 {
        self.from_column
    }

    #[inline]
    pub const fn from_row(&self) -> i32 {
        self.from_row
    }

    #[inline]
    pub const fn to_column(&self) -> i32 {
        self.to_column
    }

    #[inline]
    pub const fn to_row(&self) -> i32 {
        self.to_row
    }

    #[inline]
    pub const fn tile_size(&self) -> i32 {
        self.tile_size
    }

    /// Number of columns spanned.
    #[inline]
    pub const fn columns(&self) -> i32 {
        self.to_column - self.from_column + 1
    }

    /// Number of rows spanned.
    #[inline]
    pub const fn rows(&self) -> i32 {
        self.to_row - self.from_row + 1
    }

    /// Total number of tiles.
    #[inline]
    pub const fn len(&self) -> usize {
        (self.columns() as usize) * (self.rows() as usize)
    }

    /// Always `false`; regions hold at least one tile.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Whether the coordinate's tile lies inside the region (inclusive).
    #[inline]
    pub fn contains(&self, c: &Coordinate) -> bool {
        c.column() >= self.from_column
            && c.column() <= self.to_column
            && c.row() >= self.from_row
            && c.row() <= self.to_row
    }

    /// Row-major iterator over every tile in the region.
    #[inline]
    pub fn tiles(&self) -> TileIter {
        TileIter {
            region: *self,
            column: self.from_column,
            row: self.from_row,
            done: false,
        }
    }

    /// Tiles on the perimeter, row-major. Every tile qualifies when the
    /// region is at most two tiles wide or tall.
    pub fn boundary_tiles(&self) -> impl Iterator<Item = Coordinate> {
        let r = *self;
        self.tiles().filter(move |c| {
            c.column() == r.from_column
                || c.column() == r.to_column
                || c.row() == r.from_row
                || c.row() == r.to_row
        })
    }

    // -----------------------------------------------------------------------
    // Pixel accessors
    // -----------------------------------------------------------------------

    #[inline]
    pub fn x(&self) -> f32 {
        self.min_x()
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.min_y()
    }

    #[inline]
    pub fn width_px(&self) -> f32 {
        (self.columns() * self.tile_size) as f32
    }

    #[inline]
    pub fn height_px(&self) -> f32 {
        (self.rows() * self.tile_size) as f32
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        ((self.from_column - 1) * self.tile_size) as f32
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        ((self.from_row - 1) * self.tile_size) as f32
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.min_x() + self.width_px()
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.min_y() + self.height_px()
    }

    #[inline]
    pub fn mid_x(&self) -> f32 {
        self.min_x() + self.width_px() / 2.0
    }

    #[inline]
    pub fn mid_y(&self) -> f32 {
        self.min_y() + self.height_px() / 2.0
    }
}

impl IntoIterator for Region {
    type Item = Coordinate;
    type IntoIter = TileIter;
    #[inline]
    fn into_iter(self) -> TileIter {
        self.tiles()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}->{}/{}",
            self.from_column, self.from_row, self.to_column, self.to_row
        )
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RegionRepr {
    from_column: i32,
    from_row: i32,
    to_column: i32,
    to_row: i32,
    tile_size: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RegionRepr> for Region {
    type Error = GeomError;

    fn try_from(r: RegionRepr) -> Result<Self> {
        Self::new(r.from_column, r.from_row, r.to_column, r.to_row, r.tile_size)
    }
}

// ---------------------------------------------------------------------------
// TileIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the tiles of a [`Region`].
#[derive(Clone, Debug)]
pub struct TileIter {
    region: Region,
    column: i32,
    row: i32,
    done: bool,
}

impl Iterator for TileIter {
    type Item = Coordinate;

    #[inline]
    fn next(&mut self) -> Option<Coordinate> {
        if self.done {
            return None;
        }
        let c = Coordinate::new_unchecked(self.column, self.row, self.region.tile_size);
        if self.column < self.region.to_column {
            self.column += 1;
        } else if self.row < self.region.to_row {
            self.column = self.region.from_column;
            self.row += 1;
        } else {
            self.done = true;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let w = self.region.columns() as usize;
        let remaining_in_row = (self.region.to_column - self.column + 1) as usize;
        let remaining_rows = (self.region.to_row - self.row) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for TileIter {}
