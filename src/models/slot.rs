use serde::{Deserialize, Serialize};

use crate::pricing::duration::effective_weeks_from_days;

/// A selected booking window, carried from duration selection into seat
/// selection. `effective_weeks` is what pricing wants; older slots may
/// only carry `duration_days`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    pub time: String,
    pub available: bool,
    pub price: i64,
    #[serde(rename = "durationDays")]
    pub duration_days: i64,
    #[serde(rename = "effectiveWeeks", default, skip_serializing_if = "Option::is_none")]
    pub effective_weeks: Option<i64>,
}

impl Slot {
    /// Weeks to price this slot at, falling back to a ceiling division of
    /// the day count when the slot predates the weeks field.
    pub fn pricing_weeks(&self) -> i64 {
        self.effective_weeks
            .unwrap_or_else(|| effective_weeks_from_days(self.duration_days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(duration_days: i64, effective_weeks: Option<i64>) -> Slot {
        Slot {
            id: "slot-20250301-20250329".to_string(),
            time: "1 month".to_string(),
            available: true,
            price: 0,
            duration_days,
            effective_weeks,
        }
    }

    #[test]
    fn explicit_weeks_win() {
        assert_eq!(slot(29, Some(4)).pricing_weeks(), 4);
    }

    #[test]
    fn day_count_fallback_rounds_up() {
        assert_eq!(slot(8, None).pricing_weeks(), 2);
        assert_eq!(slot(7, None).pricing_weeks(), 1);
    }
}
