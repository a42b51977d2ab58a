//! Placement grid geometry.
//!
//! Pure coordinate math: world position to (lane, column) cell and back.
//! Occupancy queries need the live defender set and live in the sim crate.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Position;

/// A (lane, column) grid address. At most one live defender per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub lane: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(lane: usize, col: usize) -> Self {
        Self { lane, col }
    }

    /// Whether this address is inside the 5x9 field.
    pub fn in_field(&self) -> bool {
        self.lane < LANE_COUNT && self.col < COLUMN_COUNT
    }
}

/// Whether a world position lies inside the field (edges inclusive).
pub fn contains(x: f32, y: f32) -> bool {
    (FIELD_X..=FIELD_X + FIELD_WIDTH).contains(&x)
        && (FIELD_Y..=FIELD_Y + FIELD_HEIGHT).contains(&y)
}

/// Map a world position to its cell by floor division. Positions on the
/// far edges clamp into the last lane/column so the whole inclusive field
/// maps to a valid cell.
pub fn cell_of(x: f32, y: f32) -> Option<Cell> {
    if !contains(x, y) {
        return None;
    }
    let col = (((x - FIELD_X) / CELL_WIDTH) as usize).min(COLUMN_COUNT - 1);
    let lane = (((y - FIELD_Y) / CELL_HEIGHT) as usize).min(LANE_COUNT - 1);
    Some(Cell { lane, col })
}

/// World position of a cell's lower-left corner, where defenders stand.
pub fn cell_origin(cell: Cell) -> Position {
    Position::new(
        FIELD_X + cell.col as f32 * CELL_WIDTH,
        FIELD_Y + cell.lane as f32 * CELL_HEIGHT,
    )
}

/// Ground y of a lane.
pub fn lane_y(lane: usize) -> f32 {
    FIELD_Y + lane as f32 * CELL_HEIGHT
}
