//! Per-tile occupancy records.

use tilegrid_core::Coordinate;

/// Occupancy status of one map tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TileStatus {
    #[default]
    Free = 0,
    /// A wall or other permanent obstacle.
    Blocked = 1,
    /// An openable occupant (door) in its closed state.
    Closed = 2,
    /// An openable occupant (door) in its open state.
    Open = 3,
}

impl TileStatus {
    /// Whether an actor may enter a tile with this status.
    #[inline]
    pub const fn is_passable(self) -> bool {
        matches!(self, Self::Free | Self::Open)
    }

    /// Whether the tile holds an openable occupant.
    #[inline]
    pub const fn is_openable(self) -> bool {
        matches!(self, Self::Closed | Self::Open)
    }
}

/// Default opaque occupant handle (a sprite, door or wall id owned elsewhere).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupantId(pub u64);

/// A snapshot of one tile, as returned by map queries.
///
/// Off-map queries return the [edge sentinel](TileInfo::edge): no position,
/// `Free`, no occupant and `is_edge` set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileInfo<O> {
    pub position: Option<Coordinate>,
    pub status: TileStatus,
    pub occupant: Option<O>,
    pub is_edge: bool,
}

impl<O> TileInfo<O> {
    /// The sentinel for a position outside the map.
    pub const fn edge() -> Self {
        Self {
            position: None,
            status: TileStatus::Free,
            occupant: None,
            is_edge: true,
        }
    }
}
