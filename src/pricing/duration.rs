//! Duration selection and stay-date arithmetic.
//!
//! Users pick a duration as months + weeks. Four weeks roll into a month
//! for pricing, but the end date is computed with *calendar* months, so a
//! "1 month" stay over a 31-day month spans more days than 4 plain weeks.
//! Pricing always goes through `effective_weeks`, never the day count.

use chrono::{Days, Months, NaiveDate};
use thiserror::Error;

use super::tier_label;
use crate::models::{Holiday, Slot};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("minimum booking period is {min_days} days")]
    BelowMinimum { min_days: i64 },
}

/// A months + weeks duration choice, as picked in the selection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationSelection {
    pub months: u32,
    pub weeks: u32,
}

impl DurationSelection {
    pub fn new(months: u32, weeks: u32) -> Self {
        Self { months, weeks }
    }

    /// Rolls every full 4 weeks into a month: (0, 4) becomes (1, 0).
    pub fn normalized(self) -> Self {
        Self {
            months: self.months + self.weeks / 4,
            weeks: self.weeks % 4,
        }
    }

    /// The week count pricing operates on: months count as 4 weeks flat.
    pub fn effective_weeks(self) -> i64 {
        i64::from(self.months) * 4 + i64::from(self.weeks)
    }

    pub fn is_empty(self) -> bool {
        self.months == 0 && self.weeks == 0
    }

    /// "1 month + 2 weeks" display form, same rules as the price label.
    pub fn label(self) -> String {
        tier_label(i64::from(self.months), i64::from(self.weeks))
    }
}

/// A concrete stay window. `total_days` is inclusive of both endpoints
/// (5th to 5th of the next month counts both fifths).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayDates {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total_days: i64,
}

impl StayDates {
    /// End date = start + calendar months + 7 days per week. The selection
    /// is normalized first, so "4 weeks" lands on the same day next month.
    ///
    /// `None` only when the arithmetic leaves chrono's representable range.
    pub fn compute(start: NaiveDate, selection: DurationSelection) -> Option<Self> {
        let selection = selection.normalized();
        let end = start
            .checked_add_months(Months::new(selection.months))?
            .checked_add_days(Days::new(u64::from(selection.weeks) * 7))?;
        let total_days = (end - start).num_days() + 1;
        Some(Self {
            start,
            end,
            total_days,
        })
    }

    pub fn validate_min_stay(&self, min_days: i64) -> Result<(), DurationError> {
        if self.total_days < min_days {
            return Err(DurationError::BelowMinimum { min_days });
        }
        Ok(())
    }

    /// Turns a validated window into the slot handed to seat selection.
    /// The price stays zero until a room's rate card is known.
    pub fn into_slot(self, selection: DurationSelection) -> Slot {
        let selection = selection.normalized();
        Slot {
            id: format!(
                "slot-{}-{}",
                self.start.format("%Y%m%d"),
                self.end.format("%Y%m%d")
            ),
            time: selection.label(),
            available: true,
            price: 0,
            duration_days: self.total_days,
            effective_weeks: Some(selection.effective_weeks()),
        }
    }
}

/// Fallback week count for slots that only carry a day count.
pub fn effective_weeks_from_days(days: i64) -> i64 {
    if days <= 0 {
        return 0;
    }
    (days + 6) / 7
}

/// Only company-wide closures block the start-date choice; branch-scoped
/// closures are handled after a branch has been picked.
pub fn start_date_blocked(date: NaiveDate, holidays: &[Holiday]) -> bool {
    holidays.iter().any(|h| h.is_global() && h.date == date)
}

/// The date picker window: from today through `max_advance_days` ahead,
/// skipping blocked dates.
pub fn start_date_selectable(
    date: NaiveDate,
    today: NaiveDate,
    max_advance_days: i64,
    holidays: &[Holiday],
) -> bool {
    if date < today {
        return false;
    }
    match today.checked_add_days(Days::new(max_advance_days.max(0) as u64)) {
        Some(last) if date > last => return false,
        None => return false,
        _ => {}
    }
    !start_date_blocked(date, holidays)
}
