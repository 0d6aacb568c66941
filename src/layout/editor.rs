//! Room layout editor.
//!
//! Holds one room's grid, seat placements and wall/entrance elements while
//! an admin edits them. Every mutation assumes a single caller per editing
//! session; the surrounding application serializes edits.
//!
//! Shared edges are stored canonically: an interior boundary always belongs
//! to the cell on its upper/left side (`left` of column 3 is recorded as
//! `right` of column 2). Loaded layouts may still carry the other
//! declaration site - the queries accept both, and a toggle clears both.

use std::cmp::Ordering;

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::GridConfig;
use crate::models::{EdgeSide, ElementKind, Room, RoomElement, RoomLayout, Seat, SeatPosition};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// Every roster seat already has a cell. Recoverable: the caller shows
    /// a notice and the grid stays as it was.
    #[error("all seats are already placed")]
    CapacityExhausted,
    #[error("cell ({row}, {col}) is outside the {cols}x{rows} grid")]
    OutOfBounds {
        row: u16,
        col: u16,
        rows: u16,
        cols: u16,
    },
}

/// What a seat toggle did, with the affected seat id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatToggle {
    Placed(String),
    Removed(String),
}

pub struct LayoutEditor {
    layout: RoomLayout,
    /// Room seats ordered by ascending seat number; placement always takes
    /// the first seat without a cell.
    roster: Vec<Seat>,
    limits: GridConfig,
}

impl LayoutEditor {
    /// Fresh editor for a room that has no saved layout yet (8×10 grid).
    pub fn new(room: &Room, limits: GridConfig) -> Self {
        Self {
            layout: RoomLayout::empty(8, 10),
            roster: sorted_roster(&room.seats),
            limits,
        }
    }

    /// Editor over a previously saved layout. Placements referring to seats
    /// that are no longer in the room are dropped on the way in.
    pub fn from_layout(room: &Room, mut layout: RoomLayout, limits: GridConfig) -> Self {
        let before = layout.seat_positions.len();
        layout
            .seat_positions
            .retain(|p| room.seat(&p.seat_id).is_some());
        if layout.seat_positions.len() != before {
            debug!(
                dropped = before - layout.seat_positions.len(),
                room_id = %room.id,
                "dropped placements for seats missing from the room"
            );
        }
        Self {
            layout,
            roster: sorted_roster(&room.seats),
            limits,
        }
    }

    pub fn layout(&self) -> &RoomLayout {
        &self.layout
    }

    /// The save payload: same grid and placements, elements without their
    /// server-assigned ids.
    pub fn to_layout(&self) -> RoomLayout {
        RoomLayout {
            grid_cols: self.layout.grid_cols,
            grid_rows: self.layout.grid_rows,
            seat_positions: self.layout.seat_positions.clone(),
            elements: self
                .layout
                .elements
                .iter()
                .map(|e| RoomElement::new(e.kind, e.grid_row, e.grid_col, e.side))
                .collect(),
        }
    }

    pub fn placed(&self) -> usize {
        self.layout.seat_positions.len()
    }

    pub fn roster_len(&self) -> usize {
        self.roster.len()
    }

    /// Grid dimensions, clamped to the configured limits. Shrinking keeps
    /// placements beyond the new bounds; they stay invisible to queries
    /// until the grid grows back.
    pub fn set_grid_size(&mut self, cols: u16, rows: u16) {
        self.layout.grid_cols = cols.clamp(self.limits.min_cols, self.limits.max_cols);
        self.layout.grid_rows = rows.clamp(self.limits.min_rows, self.limits.max_rows);
    }

    pub fn clear(&mut self) {
        self.layout.seat_positions.clear();
        self.layout.elements.clear();
    }

    /// Remove the seat at a cell, or place the next unplaced roster seat
    /// there. "Next" is the lowest seat number without a cell.
    pub fn toggle_seat(&mut self, row: u16, col: u16) -> Result<SeatToggle, LayoutError> {
        self.check_bounds(row, col)?;

        if let Some(idx) = self
            .layout
            .seat_positions
            .iter()
            .position(|p| p.grid_row == row && p.grid_col == col)
        {
            let removed = self.layout.seat_positions.remove(idx);
            return Ok(SeatToggle::Removed(removed.seat_id));
        }

        let next_id = self
            .roster
            .iter()
            .find(|s| !self.layout.seat_positions.iter().any(|p| p.seat_id == s.id))
            .map(|s| s.id.clone());

        match next_id {
            Some(seat_id) => {
                self.layout.seat_positions.push(SeatPosition {
                    seat_id: seat_id.clone(),
                    grid_row: row,
                    grid_col: col,
                });
                Ok(SeatToggle::Placed(seat_id))
            }
            None => {
                warn!(row, col, "no unplaced seats left in the roster");
                Err(LayoutError::CapacityExhausted)
            }
        }
    }

    /// Toggle a wall or entrance on a cell edge.
    ///
    /// If the boundary already holds an element of this kind (declared on
    /// either adjacent cell), it is removed - one toggle fully clears a
    /// shared edge. Otherwise any other element on the boundary is evicted
    /// and the new one is stored at the canonical key.
    pub fn toggle_edge(
        &mut self,
        row: u16,
        col: u16,
        side: EdgeSide,
        kind: ElementKind,
    ) -> Result<(), LayoutError> {
        self.check_bounds(row, col)?;
        let (row, col, side) = self.canonical_edge(row, col, side);

        if self.remove_boundary_elements(row, col, side, Some(kind)) {
            return Ok(());
        }

        self.remove_boundary_elements(row, col, side, None);
        self.layout
            .elements
            .push(RoomElement::new(kind, row, col, side));
        Ok(())
    }

    pub fn is_wall_edge(&self, row: u16, col: u16, side: EdgeSide) -> bool {
        self.layout.is_wall_edge(row, col, side)
    }

    pub fn is_entrance_edge(&self, row: u16, col: u16, side: EdgeSide) -> bool {
        self.layout.is_entrance_edge(row, col, side)
    }

    pub fn seat_at(&self, row: u16, col: u16) -> Option<&SeatPosition> {
        self.layout.seat_at(row, col)
    }

    fn check_bounds(&self, row: u16, col: u16) -> Result<(), LayoutError> {
        if !self.layout.in_bounds(row, col) {
            return Err(LayoutError::OutOfBounds {
                row,
                col,
                rows: self.layout.grid_rows,
                cols: self.layout.grid_cols,
            });
        }
        Ok(())
    }

    // Внутренняя граница всегда принадлежит верхней/левой клетке.
    fn canonical_edge(&self, row: u16, col: u16, side: EdgeSide) -> (u16, u16, EdgeSide) {
        match side {
            EdgeSide::Left if col > 0 => (row, col - 1, EdgeSide::Right),
            EdgeSide::Top if row > 0 => (row - 1, col, EdgeSide::Bottom),
            _ => (row, col, side),
        }
    }

    /// Drop every element on the boundary at the (canonical) key, matching
    /// both declaration sites. `kind` of `None` matches any kind. Returns
    /// whether anything was removed.
    fn remove_boundary_elements(
        &mut self,
        row: u16,
        col: u16,
        side: EdgeSide,
        kind: Option<ElementKind>,
    ) -> bool {
        let mirror = self
            .layout
            .neighbour(row, col, side)
            .map(|(r, c)| (r, c, side.opposite()));

        let before = self.layout.elements.len();
        self.layout.elements.retain(|e| {
            let direct = e.grid_row == row && e.grid_col == col && e.side == side;
            let mirrored = mirror
                .map_or(false, |(r, c, s)| e.grid_row == r && e.grid_col == c && e.side == s);
            let kind_matches = kind.map_or(true, |k| e.kind == k);
            !((direct || mirrored) && kind_matches)
        });
        self.layout.elements.len() != before
    }
}

fn sorted_roster(seats: &[Seat]) -> Vec<Seat> {
    let mut roster = seats.to_vec();
    roster.sort_by(|a, b| compare_seat_no(&a.seat_no, &b.seat_no));
    roster
}

// Числовые номера сортируются как числа, остальные - как строки после них.
fn compare_seat_no(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
