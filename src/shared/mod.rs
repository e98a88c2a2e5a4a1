//! Shared types, errors, and events for Homestead.
//!
//! This is the type contract. The model modules and the Bevy shell both
//! import from here; no model module imports from the shell.

use bevy::prelude::*;
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════
// GRID
// ═══════════════════════════════════════════════════════════════════════

/// Grid coordinate as `(row, col)`. Row 0 is the top of the map.
pub type Position = (usize, usize);

/// Width/height of one tile in world units for the placeholder view.
pub const TILE_SIZE: f32 = 48.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

impl Default for Facing {
    fn default() -> Self {
        Facing::Down
    }
}

impl Facing {
    /// Row/column delta of one step in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Facing::Up => (-1, 0),
            Facing::Down => (1, 0),
            Facing::Left => (0, -1),
            Facing::Right => (0, 1),
        }
    }

    /// The neighbouring position one step away, if it does not underflow.
    /// Upper bounds are the caller's concern.
    pub fn step(self, (row, col): Position) -> Option<Position> {
        let (dr, dc) = self.delta();
        Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?))
    }

    /// Parse the `w`/`a`/`s`/`d` key letters used in map headers.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'w' => Some(Facing::Up),
            's' => Some(Facing::Down),
            'a' => Some(Facing::Left),
            'd' => Some(Facing::Right),
            _ => None,
        }
    }
}

/// Terrain category of a single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroundKind {
    Grass,
    /// Tilled soil, ready for planting.
    Soil,
    Untilled,
    Water,
}

impl GroundKind {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' => Some(GroundKind::Grass),
            'S' => Some(GroundKind::Soil),
            'U' => Some(GroundKind::Untilled),
            'W' => Some(GroundKind::Water),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            GroundKind::Grass => 'G',
            GroundKind::Soil => 'S',
            GroundKind::Untilled => 'U',
            GroundKind::Water => 'W',
        }
    }

    pub fn is_walkable(self) -> bool {
        !matches!(self, GroundKind::Water)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ITEMS
// ═══════════════════════════════════════════════════════════════════════

/// Items are identified by their display name, e.g. `"Potato Seed"`.
pub type ItemId = String;

/// A yield handed back by a harvest, to be credited to the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Harvest {
    pub item: ItemId,
    pub quantity: u32,
    /// True when the plant is used up and must leave the farm.
    pub remove: bool,
}

// ═══════════════════════════════════════════════════════════════════════
// ERRORS
// ═══════════════════════════════════════════════════════════════════════

/// A map description that cannot be turned into a grid. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapFormatError {
    #[error("map has no rows")]
    Empty,

    #[error("row {row} has {found} cells but the first row has {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown ground symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { row: usize, col: usize, symbol: char },

    #[error("bad header line {0:?}; expected `@ <row> <col> [w|a|s|d]`")]
    BadHeader(String),

    #[error("player start {0:?} is outside the map or not walkable")]
    BadStart(Position),
}

/// Rule violations raised by farm operations. None of these are fatal and
/// none leave partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FarmError {
    #[error("position {0:?} is outside the map")]
    OutOfBounds(Position),

    #[error("cannot plant at {0:?}: the cell is not free tilled soil")]
    InvalidPlanting(Position),

    #[error("{ground:?} at {pos:?} cannot be tilled")]
    NotTillable { pos: Position, ground: GroundKind },

    #[error("{ground:?} at {pos:?} is not tilled soil")]
    NotTilled { pos: Position, ground: GroundKind },

    #[error("{0:?} is out of reach of the player")]
    OutOfReach(Position),

    #[error("a plant is growing at {0:?}")]
    Occupied(Position),

    #[error("no plant at {0:?}")]
    NoPlant(Position),

    #[error("need {price}g but only have {money}g")]
    InsufficientFunds { price: u32, money: u32 },

    #[error("need {wanted} {item} but only have {held}")]
    InsufficientInventory { item: ItemId, wanted: u32, held: u32 },

    #[error("unknown item {0:?}")]
    UnknownItem(String),

    #[error("{0} is not for sale here")]
    NotForSale(ItemId),

    #[error("{0} is not a seed")]
    NotASeed(ItemId),

    #[error("no item selected")]
    NothingSelected,

    #[error("too tired: need {needed} energy, have {energy}")]
    Exhausted { needed: u32, energy: u32 },
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS — emitted by the controller shell after model mutations
// ═══════════════════════════════════════════════════════════════════════

#[derive(Event, Debug, Clone)]
pub struct DayEndEvent {
    /// The day that just ended.
    pub day: u32,
}

#[derive(Event, Debug, Clone)]
pub struct CropHarvestedEvent {
    pub item: ItemId,
    pub quantity: u32,
    pub position: Position,
}

#[derive(Event, Debug, Clone)]
pub struct ShopTransactionEvent {
    pub item: ItemId,
    pub price: u32,
    pub is_purchase: bool,
}

/// A command the model refused. The shell logs it; views may surface it.
#[derive(Event, Debug, Clone)]
pub struct ActionRejectedEvent {
    pub error: FarmError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_underflow_is_none() {
        assert_eq!(Facing::Up.step((0, 3)), None);
        assert_eq!(Facing::Left.step((2, 0)), None);
        assert_eq!(Facing::Down.step((0, 3)), Some((1, 3)));
        assert_eq!(Facing::Right.step((2, 0)), Some((2, 1)));
    }

    #[test]
    fn test_ground_symbols_round_trip() {
        for kind in [
            GroundKind::Grass,
            GroundKind::Soil,
            GroundKind::Untilled,
            GroundKind::Water,
        ] {
            assert_eq!(GroundKind::from_symbol(kind.symbol()), Some(kind));
        }
        assert_eq!(GroundKind::from_symbol('x'), None);
    }

    #[test]
    fn test_facing_from_key() {
        assert_eq!(Facing::from_key('W'), Some(Facing::Up));
        assert_eq!(Facing::from_key('d'), Some(Facing::Right));
        assert_eq!(Facing::from_key('q'), None);
    }
}
