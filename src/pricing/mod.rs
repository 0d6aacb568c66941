//! Tiered duration pricing.
//!
//! A rate card gives absolute totals at four checkpoints (1/2/3 weeks,
//! 1 month). A duration is decomposed into whole month-blocks of exactly
//! 4 weeks plus a 0-3 week remainder, and each part is looked up, not
//! multiplied: 5 weeks costs `price_1m + price_1w`, not `5 * price_1w`.

pub mod duration;

use crate::models::{PriceQuote, PricingConfig, PricingRule, Room};

/// Price a stay of `effective_weeks` weeks against a rate card.
///
/// Durations below one week (zero and negative included) are priced as
/// exactly one week. Never fails; the card is complete by construction
/// and negative rates are the caller's problem (`PricingConfig` carries
/// a `Validate` impl for exactly that upstream check).
pub fn calculate_price(effective_weeks: i64, tiers: &PricingConfig) -> PriceQuote {
    let weeks = effective_weeks.max(1);

    let months = weeks / 4;
    let remaining_weeks = weeks % 4;

    let total = months * tiers.price_1m + remainder_rate(remaining_weeks, tiers);

    PriceQuote {
        total,
        tier_label: tier_label(months, remaining_weeks),
    }
}

fn remainder_rate(remaining_weeks: i64, tiers: &PricingConfig) -> i64 {
    match remaining_weeks {
        3 => tiers.price_3w,
        2 => tiers.price_2w,
        1 => tiers.price_1w,
        _ => 0,
    }
}

/// "2 months + 1 week" style label. Both parts pluralized, joined only
/// when both are present; "0 weeks" when there is nothing to describe.
pub(crate) fn tier_label(months: i64, weeks: i64) -> String {
    let mut label = String::new();
    if months > 0 {
        label.push_str(&format!("{} month{}", months, if months > 1 { "s" } else { "" }));
    }
    if weeks > 0 {
        if !label.is_empty() {
            label.push_str(" + ");
        }
        label.push_str(&format!("{} week{}", weeks, if weeks > 1 { "s" } else { "" }));
    }
    if label.is_empty() {
        label.push_str("0 weeks");
    }
    label
}

/// Rate card lookup order: the room's own card, then the branch rule for
/// the room's AC class, then the configured default.
pub fn resolve_tiers_for_room<'a>(
    room: &'a Room,
    rules: &'a [PricingRule],
    branch_id: i64,
    default_tiers: &'a PricingConfig,
) -> &'a PricingConfig {
    room.pricing_tiers
        .as_ref()
        .or_else(|| PricingRule::resolve(rules, branch_id, room.is_ac))
        .unwrap_or(default_tiers)
}
