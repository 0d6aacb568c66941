use serde::{Deserialize, Serialize};

use super::PricingConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    #[serde(rename = "roomNo")]
    pub room_no: String,
    pub name: String,
    pub seats: Vec<Seat>,
    #[serde(rename = "isAc")]
    pub is_ac: bool,
    #[serde(rename = "seatsCount", default, skip_serializing_if = "Option::is_none")]
    pub seats_count: Option<i64>,
    // Эти два поля приходят от API в snake_case, в отличие от остальных
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_daily: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_tiers: Option<PricingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    pub id: String,
    #[serde(rename = "seatNo")]
    pub seat_no: String,
    pub available: bool,
    #[serde(rename = "isBlocked", default, skip_serializing_if = "Option::is_none")]
    pub is_blocked: Option<bool>,
    /// Custom label, e.g. "95"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "blockInfo", default, skip_serializing_if = "Option::is_none")]
    pub block_info: Option<BlockInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockInfo {
    pub name: String,
    pub phone: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    #[serde(rename = "bookedAt")]
    pub booked_at: String,
}

impl Room {
    pub fn seat(&self, seat_id: &str) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == seat_id)
    }
}
