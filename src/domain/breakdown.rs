use super::discount::DiscountRate;
use super::money::Money;
use super::tier::{BillingInterval, Tier};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierLine {
    pub display_name: String,
    pub count: u32,
    pub unit_price: Money,
    pub subtotal: Money,
}

/// Result of pricing a team's seat mix.
///
/// `per_tier` always holds every tier, including those with zero seats.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingBreakdown {
    pub billing_interval: BillingInterval,
    pub total_seats: u32,
    pub per_tier: BTreeMap<Tier, TierLine>,
    pub list_subtotal: Money,
    pub discount_percent: DiscountRate,
    pub discount_amount: Money,
    pub final_total: Money,
}

impl PricingBreakdown {
    pub fn line(&self, tier: Tier) -> Option<&TierLine> {
        self.per_tier.get(&tier)
    }

    pub fn is_discounted(&self) -> bool {
        !self.discount_percent.is_zero()
    }

    /// Lines with at least one seat, lowest tier first.
    pub fn occupied_lines(&self) -> impl Iterator<Item = &TierLine> {
        self.per_tier.values().filter(|line| line.count > 0)
    }
}
