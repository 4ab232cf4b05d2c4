//! Traversal cost classes.

use std::fmt;

/// Base cost of an orthogonal step, independent of the tile size.
pub const ORTHOGONAL_STEP: i32 = 10;

/// Base cost of a diagonal step (10 * √2, rounded).
pub const DIAGONAL_STEP: i32 = 14;

/// The traversal class of one path-grid cell.
///
/// Ordered so that `Blocked` is the least traversable class.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PathCost {
    /// Impassable.
    Blocked = 0,
    /// Cheaper than a plain cell.
    Preferred = 1,
    #[default]
    Available = 2,
    /// Passable, but costs more than a plain cell.
    Avoid = 3,
}

impl PathCost {
    /// Multiplier applied to the base step cost when entering a cell of this
    /// class, or `None` for `Blocked`.
    #[inline]
    pub const fn weight(self) -> Option<i32> {
        match self {
            Self::Blocked => None,
            Self::Preferred => Some(1),
            Self::Available => Some(2),
            Self::Avoid => Some(3),
        }
    }

    /// Smallest weight of any passable class. Keeps the heuristic admissible.
    pub const MIN_WEIGHT: i32 = 1;

    #[inline]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }
}

impl fmt::Display for PathCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Blocked => "blocked",
            Self::Preferred => "preferred",
            Self::Available => "available",
            Self::Avoid => "avoid",
        };
        f.write_str(s)
    }
}
