pub mod editor;
pub mod render;

pub use editor::{LayoutEditor, LayoutError, SeatToggle};
pub use render::{border_style, cell_borders, cell_size_px, BorderStyle, CellBorders, Theme};
