//! Explicit map configuration.
//!
//! A [`Config`] is built once by the host and handed to every constructor
//! that needs tile or window dimensions. Nothing in the tile-grid crates
//! reads ambient global state.

use crate::coord::Coordinate;
use crate::error::{GeomError, Result};
use crate::region::Region;

/// Pathfinding flags.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathfindingConfig {
    /// Whether A* may take diagonal steps when a call does not say otherwise.
    pub allow_diagonal: bool,
    /// Mark cells around obstacles as `Avoid` so paths keep their distance.
    pub reduce_hugging: bool,
}

/// Tile and window dimensions plus pathfinding flags.
///
/// The window is square; the map has `window_size / tile_size` columns and
/// the same number of rows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Edge length of one tile in pixels.
    pub tile_size: i32,
    /// Edge length of the (square) window in pixels.
    pub window_size: i32,
    pub pathfinding: PathfindingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tile_size: 8,
            window_size: 160,
            pathfinding: PathfindingConfig::default(),
        }
    }
}

impl Config {
    /// Set the tile size (builder).
    pub const fn with_tile_size(mut self, tile_size: i32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Set the window size (builder).
    pub const fn with_window_size(mut self, window_size: i32) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the default diagonal-movement flag (builder).
    pub const fn with_allow_diagonal(mut self, allow: bool) -> Self {
        self.pathfinding.allow_diagonal = allow;
        self
    }

    /// Set the hugging-reduction flag (builder).
    pub const fn with_reduce_hugging(mut self, reduce: bool) -> Self {
        self.pathfinding.reduce_hugging = reduce;
        self
    }

    /// Check that the configuration describes a grid of at least 1x1 tiles.
    pub fn validate(&self) -> Result<()> {
        if self.tile_size < 1 {
            return Err(GeomError::invalid(format!(
                "tile_size must be >= 1, got {}",
                self.tile_size
            )));
        }
        if self.window_size < self.tile_size {
            return Err(GeomError::invalid(format!(
                "window_size ({}) must be >= tile_size ({})",
                self.window_size, self.tile_size
            )));
        }
        Ok(())
    }

    /// Number of tile columns in the map; 0 while `tile_size` is below 1.
    #[inline]
    pub const fn columns(&self) -> i32 {
        if self.tile_size < 1 {
            0
        } else {
            self.window_size / self.tile_size
        }
    }

    /// Number of tile rows in the map; 0 while `tile_size` is below 1.
    #[inline]
    pub const fn rows(&self) -> i32 {
        self.columns()
    }

    /// Map width in pixels.
    #[inline]
    pub fn width_px(&self) -> f32 {
        self.window_size as f32
    }

    /// Map height in pixels.
    #[inline]
    pub fn height_px(&self) -> f32 {
        self.window_size as f32
    }

    /// A coordinate using the configured tile size.
    pub fn coordinate(&self, column: i32, row: i32) -> Result<Coordinate> {
        Coordinate::new(column, row, self.tile_size)
    }

    /// A region using the configured tile size.
    pub fn region(
        &self,
        from_column: i32,
        from_row: i32,
        to_column: i32,
        to_row: i32,
    ) -> Result<Region> {
        Region::new(from_column, from_row, to_column, to_row, self.tile_size)
    }
}
