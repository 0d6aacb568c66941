//! Pure rendering decisions for a room layout.
//!
//! Interior boundaries are emphasized once: every cell draws its own
//! `right` and `bottom` edges, and walls on `left`/`top` only show at the
//! grid boundary. Entrances are the exception - they are drawn on all four
//! sides and win over a wall on the same edge. Colours come from an
//! explicit [`Theme`] argument; there is no ambient theming state.

use crate::models::{EdgeSide, ElementKind, RoomLayout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

/// Stroke to draw for one edge element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderStyle {
    pub kind: ElementKind,
    pub thickness_px: u16,
    pub color: &'static str,
}

pub fn border_style(kind: ElementKind, theme: Theme) -> BorderStyle {
    match kind {
        ElementKind::Wall => BorderStyle {
            kind,
            thickness_px: 3,
            color: match theme {
                Theme::Dark => "rgba(255,255,255,0.5)",
                Theme::Light => "rgba(0,0,0,0.45)",
            },
        },
        ElementKind::Entrance => BorderStyle {
            kind,
            thickness_px: 6,
            color: "#00e676",
        },
    }
}

/// Which element, if any, each side of a cell should draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellBorders {
    pub top: Option<ElementKind>,
    pub bottom: Option<ElementKind>,
    pub left: Option<ElementKind>,
    pub right: Option<ElementKind>,
}

pub fn cell_borders(layout: &RoomLayout, row: u16, col: u16) -> CellBorders {
    let decide = |side: EdgeSide, wall_allowed: bool| -> Option<ElementKind> {
        if layout.is_entrance_edge(row, col, side) {
            Some(ElementKind::Entrance)
        } else if wall_allowed && layout.is_wall_edge(row, col, side) {
            Some(ElementKind::Wall)
        } else {
            None
        }
    };

    CellBorders {
        right: decide(EdgeSide::Right, true),
        bottom: decide(EdgeSide::Bottom, true),
        // Walls on left/top would double-draw the neighbour's right/bottom,
        // so they only appear at the grid boundary.
        left: decide(EdgeSide::Left, col == 0),
        top: decide(EdgeSide::Top, row == 0),
    }
}

/// Cell edge length in pixels, by total cell count. Bigger rooms get
/// smaller cells so the whole grid stays on screen.
pub fn cell_size_px(layout: &RoomLayout) -> u16 {
    match layout.total_cells() {
        n if n > 100 => 48,
        n if n > 60 => 56,
        n if n > 30 => 64,
        _ => 72,
    }
}
