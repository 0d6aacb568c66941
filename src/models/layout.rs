//! Room layout wire model and shared-edge queries.
//!
//! A layout is a sparse R×C grid: seat placements occupy cells, walls and
//! entrances annotate cell edges. An edge between two cells is one physical
//! boundary, so an element declared on `(r, c, right)` and one declared on
//! `(r, c+1, left)` describe the same thing; the queries here resolve both
//! declaration sites. Out-of-bounds coordinates always read as "absent".

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Wall,
    Entrance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl EdgeSide {
    /// The side the neighbouring cell uses for the same physical boundary.
    pub fn opposite(self) -> Self {
        match self {
            EdgeSide::Top => EdgeSide::Bottom,
            EdgeSide::Bottom => EdgeSide::Top,
            EdgeSide::Left => EdgeSide::Right,
            EdgeSide::Right => EdgeSide::Left,
        }
    }
}

/// Associates one roster seat with exactly one grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPosition {
    #[serde(rename = "seatId")]
    pub seat_id: String,
    #[serde(rename = "gridRow")]
    pub grid_row: u16,
    #[serde(rename = "gridCol")]
    pub grid_col: u16,
}

/// Wall or entrance annotation on one edge of one cell.
///
/// `id` and `room_id` are server-assigned and only present on loaded
/// layouts; the save payload never carries them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "roomId", default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(rename = "gridRow")]
    pub grid_row: u16,
    #[serde(rename = "gridCol")]
    pub grid_col: u16,
    pub side: EdgeSide,
}

impl RoomElement {
    pub fn new(kind: ElementKind, grid_row: u16, grid_col: u16, side: EdgeSide) -> Self {
        Self {
            id: None,
            room_id: None,
            kind,
            grid_row,
            grid_col,
            side,
        }
    }

    fn at(&self, row: u16, col: u16, side: EdgeSide) -> bool {
        self.grid_row == row && self.grid_col == col && self.side == side
    }
}

/// The persistence shape the collaborator accepts and returns.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoomLayout {
    #[serde(rename = "gridCols")]
    #[validate(range(min = 2, max = 20))]
    pub grid_cols: u16,
    #[serde(rename = "gridRows")]
    #[validate(range(min = 2, max = 25))]
    pub grid_rows: u16,
    #[serde(rename = "seatPositions")]
    pub seat_positions: Vec<SeatPosition>,
    pub elements: Vec<RoomElement>,
}

impl RoomLayout {
    pub fn empty(grid_cols: u16, grid_rows: u16) -> Self {
        Self {
            grid_cols,
            grid_rows,
            seat_positions: Vec::new(),
            elements: Vec::new(),
        }
    }

    pub fn in_bounds(&self, row: u16, col: u16) -> bool {
        row < self.grid_rows && col < self.grid_cols
    }

    pub fn total_cells(&self) -> u32 {
        u32::from(self.grid_rows) * u32::from(self.grid_cols)
    }

    /// Whether any seat has been positioned. Renderers fall back to a flat
    /// seat list when nothing is placed.
    pub fn has_positions(&self) -> bool {
        !self.seat_positions.is_empty()
    }

    /// Exact-key element lookup (no mirroring).
    pub fn element_at(&self, row: u16, col: u16, side: EdgeSide) -> Option<&RoomElement> {
        if !self.in_bounds(row, col) {
            return None;
        }
        self.elements.iter().find(|e| e.at(row, col, side))
    }

    pub fn seat_at(&self, row: u16, col: u16) -> Option<&SeatPosition> {
        if !self.in_bounds(row, col) {
            return None;
        }
        self.seat_positions
            .iter()
            .find(|p| p.grid_row == row && p.grid_col == col)
    }

    pub fn is_wall_edge(&self, row: u16, col: u16, side: EdgeSide) -> bool {
        self.is_edge(ElementKind::Wall, row, col, side)
    }

    pub fn is_entrance_edge(&self, row: u16, col: u16, side: EdgeSide) -> bool {
        self.is_edge(ElementKind::Entrance, row, col, side)
    }

    fn has_element(&self, kind: ElementKind, row: u16, col: u16, side: EdgeSide) -> bool {
        self.elements
            .iter()
            .any(|e| e.kind == kind && e.at(row, col, side))
    }

    // Проверяем обе стороны общей границы: прямое объявление и зеркальное
    // объявление у соседней клетки.
    fn is_edge(&self, kind: ElementKind, row: u16, col: u16, side: EdgeSide) -> bool {
        if !self.in_bounds(row, col) {
            return false;
        }
        if self.has_element(kind, row, col, side) {
            return true;
        }
        match self.neighbour(row, col, side) {
            Some((nr, nc)) => self.has_element(kind, nr, nc, side.opposite()),
            None => false,
        }
    }

    /// The in-bounds cell across `side`, if there is one.
    pub(crate) fn neighbour(&self, row: u16, col: u16, side: EdgeSide) -> Option<(u16, u16)> {
        match side {
            EdgeSide::Right if col + 1 < self.grid_cols => Some((row, col + 1)),
            EdgeSide::Bottom if row + 1 < self.grid_rows => Some((row + 1, col)),
            EdgeSide::Left if col > 0 => Some((row, col - 1)),
            EdgeSide::Top if row > 0 => Some((row - 1, col)),
            _ => None,
        }
    }
}
