use serde::{Deserialize, Serialize};
use validator::Validate;

/// Four absolute total-price checkpoints. These are not per-week rates:
/// each field is the full price for exactly that duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PricingConfig {
    #[validate(range(min = 0))]
    pub price_1w: i64,
    #[validate(range(min = 0))]
    pub price_2w: i64,
    #[validate(range(min = 0))]
    pub price_3w: i64,
    #[validate(range(min = 0))]
    pub price_1m: i64,
}

impl PricingConfig {
    /// A card without a 1-week rate has never been set up by an admin;
    /// price displays skip it entirely.
    pub fn is_configured(&self) -> bool {
        self.price_1w > 0
    }
}

/// Rate card for one (branch, AC) combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingRule {
    #[serde(rename = "branchId")]
    pub branch_id: i64,
    #[serde(rename = "isAc")]
    pub is_ac: bool,
    pub tiers: PricingConfig,
}

impl PricingRule {
    pub fn resolve(rules: &[PricingRule], branch_id: i64, is_ac: bool) -> Option<&PricingConfig> {
        rules
            .iter()
            .find(|r| r.branch_id == branch_id && r.is_ac == is_ac)
            .map(|r| &r.tiers)
    }
}

/// Result of a pricing computation. Recomputed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    pub total: i64,
    #[serde(rename = "tierLabel")]
    pub tier_label: String,
}
