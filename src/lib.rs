//! Seat booking core.
//!
//! The in-process engine behind the seat-booking front-end: tiered
//! duration pricing, the room layout grid (seats, walls, entrances) with
//! its editor, and the client for the remote booking API. Presentation
//! is someone else's job - everything here is plain data in, plain data
//! out.

pub mod client;
pub mod config;
pub mod layout;
pub mod models;
pub mod pricing;

pub use client::{ApiClient, ApiError};
pub use config::Config;
pub use layout::{LayoutEditor, LayoutError, SeatToggle, Theme};
pub use models::{
    Branch, EdgeSide, ElementKind, Holiday, PriceQuote, PricingConfig, PricingRule, Room,
    RoomElement, RoomLayout, Seat, SeatPosition, Slot,
};
pub use pricing::calculate_price;
pub use pricing::duration::{DurationError, DurationSelection, StayDates};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Wires up the tracing subscriber the way the binaries expect it:
/// env-filter syntax from config, compact fmt output.
pub fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
