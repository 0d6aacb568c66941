pub mod branch;
pub mod holiday;
pub mod layout;
pub mod pricing;
pub mod room;
pub mod slot;

pub use branch::{Branch, Floor};
pub use holiday::Holiday;
pub use layout::{EdgeSide, ElementKind, RoomElement, RoomLayout, SeatPosition};
pub use pricing::{PriceQuote, PricingConfig, PricingRule};
pub use room::{Room, Seat};
pub use slot::Slot;
