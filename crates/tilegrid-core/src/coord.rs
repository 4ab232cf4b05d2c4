//! Tile coordinates with a pixel position.
//!
//! A [`Coordinate`] names a 1-indexed tile (`column`, `row`) and carries the
//! pixel position it was derived from. Coordinates built from a tile sit at
//! the tile's top-left pixel; coordinates built from a pixel keep that exact
//! pixel and snap their tile to the nearest one.
//!
//! Pixel-to-tile rounding is **half-up**: with 8 px tiles, `x = 4.0` lies in
//! column 2 and `x = 3.99` in column 1.

use std::fmt;

use crate::config::Config;
use crate::error::{GeomError, Result};
use crate::geom::{Direction, Point};

/// Shrink applied to both boxes by [`Coordinate::collides_with`].
pub const DEFAULT_COLLISION_TOLERANCE: f32 = 1.0;

/// Nearest 1-indexed tile for a pixel value, rounding half-up.
#[inline]
fn nearest_tile(px: f32, tile_size: i32) -> i32 {
    ((px / tile_size as f32 + 0.5).floor() as i32).saturating_add(1)
}

fn check_tile_size(tile_size: i32) -> Result<()> {
    if tile_size < 1 {
        return Err(GeomError::invalid(format!(
            "tile_size must be >= 1, got {tile_size}"
        )));
    }
    Ok(())
}

fn check_finite(x: f32, y: f32) -> Result<()> {
    if !x.is_finite() || !y.is_finite() {
        return Err(GeomError::invalid(format!(
            "pixel position must be finite, got ({x}, {y})"
        )));
    }
    Ok(())
}

/// Checks that the far pixel edge of tile (`column`, `row`) fits in `i32`,
/// which bounds every pixel value derived from the tile.
pub(crate) fn check_pixel_extent(column: i32, row: i32, tile_size: i32) -> Result<()> {
    if column.checked_mul(tile_size).is_none() || row.checked_mul(tile_size).is_none() {
        return Err(GeomError::invalid(format!(
            "tile {column}/{row} is beyond the pixel range for tile_size {tile_size}"
        )));
    }
    Ok(())
}

fn check_column_row(column: i32, row: i32) -> Result<()> {
    if column < 1 {
        return Err(GeomError::invalid(format!(
            "column must be >= 1, got {column}"
        )));
    }
    if row < 1 {
        return Err(GeomError::invalid(format!("row must be >= 1, got {row}")));
    }
    Ok(())
}

/// A 1-indexed tile position plus its pixel origin.
///
/// Invariant: `column >= 1`, `row >= 1`, `tile_size >= 1`. Every constructor
/// and mutator checks it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CoordinateRepr"))]
pub struct Coordinate {
    column: i32,
    row: i32,
    x: f32,
    y: f32,
    tile_size: i32,
}

impl Coordinate {
    /// Create a coordinate at the top-left pixel of tile (`column`, `row`).
    pub fn new(column: i32, row: i32, tile_size: i32) -> Result<Self> {
        check_tile_size(tile_size)?;
        check_column_row(column, row)?;
        check_pixel_extent(column, row, tile_size)?;
        Ok(Self::new_unchecked(column, row, tile_size))
    }

    /// Caller guarantees `column`, `row` and `tile_size` are all >= 1 and
    /// that `check_pixel_extent` holds.
    pub(crate) fn new_unchecked(column: i32, row: i32, tile_size: i32) -> Self {
        Self {
            column,
            row,
            x: ((column - 1) * tile_size) as f32,
            y: ((row - 1) * tile_size) as f32,
            tile_size,
        }
    }

    /// Create a coordinate at an exact pixel, snapped to the nearest tile.
    pub fn from_pixel(x: f32, y: f32, tile_size: i32) -> Result<Self> {
        check_tile_size(tile_size)?;
        check_finite(x, y)?;
        let column = nearest_tile(x, tile_size);
        let row = nearest_tile(y, tile_size);
        check_column_row(column, row)?;
        check_pixel_extent(column, row, tile_size)?;
        Ok(Self {
            column,
            row,
            x,
            y,
            tile_size,
        })
    }

    /// Create a coordinate whose tile-sized box is centred on (`cx`, `cy`).
    pub fn from_center(cx: f32, cy: f32, tile_size: i32) -> Result<Self> {
        let half = tile_size as f32 / 2.0;
        Self::from_pixel(cx - half, cy - half, tile_size)
    }

    /// Create a coordinate after clamping `column`/`row` into the map.
    pub fn clamp_to_map_bounds(column: i32, row: i32, config: &Config) -> Result<Self> {
        config.validate()?;
        Self::new(
            column.clamp(1, config.columns()),
            row.clamp(1, config.rows()),
            config.tile_size,
        )
    }

    /// Create the coordinate of a 0-indexed storage cell.
    #[inline]
    pub fn from_cell(cell: Point, tile_size: i32) -> Result<Self> {
        match (cell.x.checked_add(1), cell.y.checked_add(1)) {
            (Some(column), Some(row)) => Self::new(column, row, tile_size),
            _ => Err(GeomError::invalid(format!("cell {cell} has no tile"))),
        }
    }

    /// The 0-indexed storage cell of this tile.
    #[inline]
    pub const fn cell(&self) -> Point {
        Point::new(self.column - 1, self.row - 1)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[inline]
    pub const fn column(&self) -> i32 {
        self.column
    }

    #[inline]
    pub const fn row(&self) -> i32 {
        self.row
    }

    /// Left pixel edge.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Top pixel edge.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub const fn tile_size(&self) -> i32 {
        self.tile_size
    }

    #[inline]
    pub const fn min_x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub const fn min_y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.tile_size as f32
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.y + self.tile_size as f32
    }

    #[inline]
    pub fn mid_x(&self) -> f32 {
        self.x + self.tile_size as f32 / 2.0
    }

    #[inline]
    pub fn mid_y(&self) -> f32 {
        self.y + self.tile_size as f32 / 2.0
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Whether both coordinates name the same tile.
    #[inline]
    pub fn is_same_tile(&self, other: &Coordinate) -> bool {
        self.column == other.column && self.row == other.row
    }

    #[inline]
    pub fn is_different_tile(&self, other: &Coordinate) -> bool {
        !self.is_same_tile(other)
    }

    /// Whether both coordinates sit at exactly the same pixel.
    #[inline]
    pub fn is_at(&self, other: &Coordinate) -> bool {
        self.x == other.x && self.y == other.y
    }

    #[inline]
    pub fn is_above(&self, other: &Coordinate) -> bool {
        self.y < other.y
    }

    #[inline]
    pub fn is_below(&self, other: &Coordinate) -> bool {
        self.y > other.y
    }

    #[inline]
    pub fn is_left_of(&self, other: &Coordinate) -> bool {
        self.x < other.x
    }

    #[inline]
    pub fn is_right_of(&self, other: &Coordinate) -> bool {
        self.x > other.x
    }

    /// Whether the pixel lies in this coordinate's box, both edges included.
    pub fn contains_pixel(&self, px: f32, py: f32) -> bool {
        px >= self.min_x() && px <= self.max_x() && py >= self.min_y() && py <= self.max_y()
    }

    /// Box overlap test with [`DEFAULT_COLLISION_TOLERANCE`].
    pub fn collides_with(&self, other: &Coordinate) -> bool {
        self.collides_with_tolerance(other, DEFAULT_COLLISION_TOLERANCE)
    }

    /// Box overlap test after shrinking both boxes by `tolerance` pixels on
    /// every side. With a tolerance of 0, touching edges collide.
    pub fn collides_with_tolerance(&self, other: &Coordinate, tolerance: f32) -> bool {
        let (a_min_x, a_max_x) = (self.min_x() + tolerance, self.max_x() - tolerance);
        let (a_min_y, a_max_y) = (self.min_y() + tolerance, self.max_y() - tolerance);
        let (b_min_x, b_max_x) = (other.min_x() + tolerance, other.max_x() - tolerance);
        let (b_min_y, b_max_y) = (other.min_y() + tolerance, other.max_y() - tolerance);
        a_min_x <= b_max_x && a_max_x >= b_min_x && a_min_y <= b_max_y && a_max_y >= b_min_y
    }

    /// Euclidean distance between the pixel origins.
    pub fn distance_to(&self, other: &Coordinate) -> f32 {
        let (dx, dy) = self.diff(other);
        dx.hypot(dy)
    }

    /// Pixel offset `self - other`.
    #[inline]
    pub fn diff(&self, other: &Coordinate) -> (f32, f32) {
        (self.x - other.x, self.y - other.y)
    }

    // -----------------------------------------------------------------------
    // Movement
    // -----------------------------------------------------------------------

    /// Shift the pixel position and recompute the tile.
    ///
    /// Leaves `self` untouched if the new position would fall left of
    /// column 1 or above row 1.
    pub fn move_by(&mut self, dx: f32, dy: f32) -> Result<()> {
        *self = self.clone_by(dx, dy, None)?;
        Ok(())
    }

    /// A copy shifted by (`dx`, `dy`) pixels.
    ///
    /// With a `direction`, the axis of that direction snaps towards it
    /// (floor for up/left, ceil for down/right) instead of to the nearest
    /// tile, so a coordinate that has started crossing into the next tile
    /// reports that tile.
    pub fn clone_by(&self, dx: f32, dy: f32, direction: Option<Direction>) -> Result<Self> {
        let x = self.x + dx;
        let y = self.y + dy;
        check_finite(x, y)?;
        let ts = self.tile_size as f32;
        let mut column = nearest_tile(x, self.tile_size);
        let mut row = nearest_tile(y, self.tile_size);
        match direction {
            Some(Direction::Up) => row = ((y / ts).floor() as i32).saturating_add(1),
            Some(Direction::Down) => row = ((y / ts).ceil() as i32).saturating_add(1),
            Some(Direction::Left) => column = ((x / ts).floor() as i32).saturating_add(1),
            Some(Direction::Right) => column = ((x / ts).ceil() as i32).saturating_add(1),
            None => {}
        }
        check_column_row(column, row)?;
        check_pixel_extent(column, row, self.tile_size)?;
        Ok(Self {
            column,
            row,
            x,
            y,
            tile_size: self.tile_size,
        })
    }

    /// A copy moved `distance` pixels along the straight line to `other`.
    ///
    /// Never overshoots: if `distance` covers the whole gap the result sits
    /// on `other`'s pixel. Coincident coordinates yield an unmoved copy.
    pub fn clone_towards(&self, other: &Coordinate, distance: f32) -> Result<Self> {
        let (dx, dy) = other.diff(self);
        let len = dx.hypot(dy);
        if len <= f32::EPSILON {
            return Ok(*self);
        }
        if distance >= len {
            return self.clone_by(dx, dy, None);
        }
        let scale = distance / len;
        self.clone_by(dx * scale, dy * scale, None)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.column, self.row)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CoordinateRepr {
    column: i32,
    row: i32,
    x: f32,
    y: f32,
    tile_size: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<CoordinateRepr> for Coordinate {
    type Error = GeomError;

    fn try_from(r: CoordinateRepr) -> Result<Self> {
        check_tile_size(r.tile_size)?;
        check_column_row(r.column, r.row)?;
        check_pixel_extent(r.column, r.row, r.tile_size)?;
        check_finite(r.x, r.y)?;
        Ok(Self {
            column: r.column,
            row: r.row,
            x: r.x,
            y: r.y,
            tile_size: r.tile_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: i32 = 8;

    fn c(column: i32, row: i32) -> Coordinate {
        Coordinate::new(column, row, TS).unwrap()
    }

    fn px(x: f32, y: f32) -> Coordinate {
        Coordinate::from_pixel(x, y, TS).unwrap()
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    #[test]
    fn tile_to_pixel() {
        for column in 1..=25 {
            for row in 1..=25 {
                let co = c(column, row);
                assert_eq!(co.column(), column);
                assert_eq!(co.row(), row);
                assert_eq!(co.x(), ((column - 1) * TS) as f32);
                assert_eq!(co.y(), ((row - 1) * TS) as f32);
            }
        }
    }

    #[test]
    fn custom_tile_size() {
        let co = Coordinate::new(2, 2, 16).unwrap();
        assert_eq!(co.x(), 16.0);
        assert_eq!(co.tile_size(), 16);
    }

    #[test]
    fn non_positive_column_or_row_fails() {
        assert!(matches!(
            Coordinate::new(0, 1, TS),
            Err(GeomError::InvalidArgument(_))
        ));
        assert!(matches!(
            Coordinate::new(1, 0, TS),
            Err(GeomError::InvalidArgument(_))
        ));
        assert!(Coordinate::new(-3, 4, TS).is_err());
        assert!(Coordinate::new(1, 1, 0).is_err());
    }

    #[test]
    fn error_message_names_field() {
        let err = Coordinate::new(0, 1, TS).unwrap_err();
        assert!(err.to_string().contains("column must be >= 1"));
        let err = Coordinate::new(1, 0, TS).unwrap_err();
        assert!(err.to_string().contains("row must be >= 1"));
    }

    #[test]
    fn from_pixel_keeps_exact_pixel() {
        let co = px(16.0, 24.0);
        assert_eq!((co.x(), co.y()), (16.0, 24.0));
        assert_eq!((co.column(), co.row()), (3, 4));
    }

    #[test]
    fn from_pixel_rounds_half_up() {
        // 4 / 8 = 0.5 -> tile index 1 -> column 2.
        assert_eq!(px(4.0, 0.0).column(), 2);
        assert_eq!(px(3.99, 0.0).column(), 1);
        // 20 / 8 = 2.5 -> 3 -> column 4 (half-to-even would give 3).
        assert_eq!(px(20.0, 0.0).column(), 4);
        assert_eq!(px(0.0, 12.0).row(), 3);
    }

    #[test]
    fn from_pixel_rejects_far_negative() {
        // -4 / 8 + 0.5 = 0 -> column 1 is still valid.
        assert_eq!(px(-4.0, 0.0).column(), 1);
        assert!(Coordinate::from_pixel(-5.0, 0.0, TS).is_err());
    }

    #[test]
    fn from_center() {
        let co = Coordinate::from_center(20.0, 20.0, TS).unwrap();
        assert_eq!((co.x(), co.y()), (16.0, 16.0));
        assert_eq!((co.mid_x(), co.mid_y()), (20.0, 20.0));
        assert_eq!((co.column(), co.row()), (3, 3));
    }

    #[test]
    fn clamp_to_map_bounds() {
        let cfg = Config::default();
        let co = Coordinate::clamp_to_map_bounds(100, 100, &cfg).unwrap();
        assert_eq!((co.column(), co.row()), (20, 20));
        let co = Coordinate::clamp_to_map_bounds(-5, 0, &cfg).unwrap();
        assert_eq!((co.column(), co.row()), (1, 1));
        let co = Coordinate::clamp_to_map_bounds(7, 3, &cfg).unwrap();
        assert_eq!((co.column(), co.row()), (7, 3));
    }

    #[test]
    fn cell_round_trip() {
        let co = c(5, 7);
        assert_eq!(co.cell(), Point::new(4, 6));
        assert!(Coordinate::from_cell(co.cell(), TS).unwrap().is_same_tile(&co));
        assert!(Coordinate::from_cell(Point::new(-1, 0), TS).is_err());
        assert!(Coordinate::from_cell(Point::new(i32::MAX, 0), 1).is_err());
    }

    #[test]
    fn tile_beyond_pixel_range_fails() {
        let err = Coordinate::new(300_000_000, 1, TS).unwrap_err();
        assert!(matches!(err, GeomError::InvalidArgument(_)));
        assert!(Coordinate::new(1, 300_000_000, TS).is_err());
        // The far edge of the last addressable tile still fits.
        let edge = Coordinate::new(i32::MAX / TS, 1, TS).unwrap();
        assert_eq!(edge.x(), ((i32::MAX / TS - 1) * TS) as f32);
        assert!(Coordinate::new(i32::MAX, 1, 1).is_ok());
    }

    #[test]
    fn non_finite_pixels_fail() {
        for (x, y) in [
            (f32::NAN, 0.0),
            (0.0, f32::NAN),
            (f32::INFINITY, 0.0),
            (0.0, f32::NEG_INFINITY),
        ] {
            let err = Coordinate::from_pixel(x, y, TS).unwrap_err();
            assert!(matches!(err, GeomError::InvalidArgument(_)));
        }
        assert!(Coordinate::from_center(f32::NAN, 8.0, TS).is_err());

        let mut co = c(2, 2);
        assert!(co.clone_by(f32::NAN, 0.0, None).is_err());
        assert!(co.clone_by(0.0, f32::INFINITY, Some(Direction::Down)).is_err());
        assert!(co.move_by(f32::NAN, f32::NAN).is_err());
        assert_eq!(co, c(2, 2));
    }

    #[test]
    fn huge_pixels_fail_without_panicking() {
        assert!(Coordinate::from_pixel(1.0e12, 0.0, TS).is_err());
        assert!(c(1, 1).clone_by(0.0, 1.0e12, Some(Direction::Down)).is_err());
    }

    // -----------------------------------------------------------------------
    // Pixel box
    // -----------------------------------------------------------------------

    #[test]
    fn pixel_box() {
        let co = c(2, 2);
        assert_eq!((co.min_x(), co.min_y()), (8.0, 8.0));
        assert_eq!((co.max_x(), co.max_y()), (16.0, 16.0));
        let origin = c(1, 1);
        assert_eq!((origin.mid_x(), origin.mid_y()), (4.0, 4.0));
    }

    // -----------------------------------------------------------------------
    // Comparisons
    // -----------------------------------------------------------------------

    #[test]
    fn same_and_different_tile() {
        assert!(c(5, 5).is_same_tile(&c(5, 5)));
        assert!(c(5, 5).is_different_tile(&c(5, 6)));
        // Different pixels inside the same tile.
        assert!(px(32.0, 32.0).is_same_tile(&px(33.0, 34.0)));
    }

    #[test]
    fn exact_pixel() {
        assert!(px(10.0, 20.0).is_at(&px(10.0, 20.0)));
        assert!(!px(10.0, 20.0).is_at(&px(10.0, 21.0)));
    }

    #[test]
    fn relative_position_is_strict() {
        assert!(c(1, 1).is_above(&c(1, 2)));
        assert!(!c(1, 2).is_above(&c(1, 1)));
        assert!(c(1, 2).is_below(&c(1, 1)));
        assert!(c(1, 1).is_left_of(&c(2, 1)));
        assert!(c(2, 1).is_right_of(&c(1, 1)));
        assert!(!c(3, 3).is_left_of(&c(3, 3)));
        assert!(!c(3, 3).is_below(&c(3, 3)));
    }

    #[test]
    fn contains_pixel_is_inclusive() {
        let co = c(2, 2);
        assert!(co.contains_pixel(10.0, 10.0));
        assert!(co.contains_pixel(8.0, 8.0));
        assert!(co.contains_pixel(16.0, 16.0));
        assert!(!co.contains_pixel(0.0, 0.0));
        assert!(!co.contains_pixel(20.0, 20.0));
    }

    #[test]
    fn collision() {
        assert!(c(1, 1).collides_with(&px(4.0, 4.0)));
        assert!(!c(1, 1).collides_with(&c(5, 5)));
        // Adjacent tiles touch but do not collide under the default shrink.
        assert!(!c(1, 1).collides_with(&c(2, 1)));
    }

    #[test]
    fn collision_tolerance() {
        let a = c(1, 1);
        let b = px(7.0, 0.0);
        assert!(!a.collides_with_tolerance(&b, 2.0));
        assert!(a.collides_with_tolerance(&b, 0.0));
        // Touching edges count at tolerance 0.
        assert!(a.collides_with_tolerance(&c(2, 1), 0.0));
    }

    #[test]
    fn distance_and_diff() {
        assert!(approx(c(1, 1).distance_to(&px(3.0, 4.0)), 5.0));
        assert_eq!(px(20.0, 30.0).diff(&px(10.0, 10.0)), (10.0, 20.0));
    }

    // -----------------------------------------------------------------------
    // Movement
    // -----------------------------------------------------------------------

    #[test]
    fn move_by_recomputes_tile() {
        let mut co = c(1, 1);
        co.move_by(10.0, 5.0).unwrap();
        assert_eq!((co.x(), co.y()), (10.0, 5.0));

        let mut co = c(1, 1);
        co.move_by(16.0, 16.0).unwrap();
        assert_eq!((co.column(), co.row()), (3, 3));
    }

    #[test]
    fn move_by_off_map_leaves_value_unchanged() {
        let mut co = c(1, 1);
        assert!(co.move_by(-20.0, 0.0).is_err());
        assert_eq!((co.x(), co.y()), (0.0, 0.0));
        assert_eq!(co.column(), 1);
    }

    #[test]
    fn copies_are_independent() {
        let co = px(10.0, 20.0);
        let mut copy = co;
        copy.move_by(5.0, 0.0).unwrap();
        assert_eq!(co.x(), 10.0);
        assert_eq!(copy.x(), 15.0);
    }

    #[test]
    fn clone_by() {
        let co = c(1, 1);
        let moved = co.clone_by(8.0, 8.0, None).unwrap();
        assert_eq!((moved.x(), moved.y()), (8.0, 8.0));
        assert_eq!(co.x(), 0.0);
    }

    #[test]
    fn clone_by_full_tile_with_direction() {
        let co = c(5, 5);
        assert!(co.clone_by(0.0, -8.0, Some(Direction::Up)).unwrap().row() < co.row());
        assert!(co.clone_by(0.0, 8.0, Some(Direction::Down)).unwrap().row() > co.row());
    }

    #[test]
    fn direction_bias_switches_tile_early() {
        let co = c(5, 5);
        // One pixel of movement: nearest tile is unchanged...
        assert_eq!(co.clone_by(0.0, 1.0, None).unwrap().row(), 5);
        assert_eq!(co.clone_by(-1.0, 0.0, None).unwrap().column(), 5);
        // ...but a biased copy already reports the tile being entered.
        assert_eq!(co.clone_by(0.0, 1.0, Some(Direction::Down)).unwrap().row(), 6);
        assert_eq!(co.clone_by(0.0, -1.0, Some(Direction::Up)).unwrap().row(), 4);
        assert_eq!(co.clone_by(1.0, 0.0, Some(Direction::Right)).unwrap().column(), 6);
        assert_eq!(co.clone_by(-1.0, 0.0, Some(Direction::Left)).unwrap().column(), 4);
        // The other axis keeps nearest-tile rounding.
        let biased = co.clone_by(5.0, 1.0, Some(Direction::Down)).unwrap();
        assert_eq!(biased.column(), 6);
        // Aligned positions are unaffected by the bias.
        assert_eq!(co.clone_by(0.0, 0.0, Some(Direction::Up)).unwrap().row(), 5);
    }

    #[test]
    fn clone_towards_moves_along_line() {
        let from = c(1, 1);
        let to = c(5, 5);
        let step = from.clone_towards(&to, 4.0).unwrap();
        let expected = 4.0 / 2f32.sqrt();
        assert!(approx(step.x(), expected));
        assert!(approx(step.y(), expected));
        assert!(approx(from.distance_to(&step), 4.0));

        let straight = from.clone_towards(&c(3, 1), 5.0).unwrap();
        assert!(approx(straight.x(), 5.0));
        assert!(approx(straight.y(), 0.0));
    }

    #[test]
    fn clone_towards_does_not_overshoot() {
        let from = c(1, 1);
        let to = c(2, 1);
        let step = from.clone_towards(&to, 100.0).unwrap();
        assert!(step.is_at(&to));
        assert!(step.is_same_tile(&to));
    }

    #[test]
    fn clone_towards_self_is_unmoved() {
        let co = px(12.0, 30.0);
        let same = co.clone_towards(&co, 10.0).unwrap();
        assert!(same.is_at(&co));
    }

    #[test]
    fn display() {
        assert_eq!(c(3, 5).to_string(), "3/5");
    }
}
