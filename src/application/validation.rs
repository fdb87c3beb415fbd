//! Boundary parsing of caller-supplied seat lists.
//!
//! Unknown tiers are rejected outright rather than skipped, so a typo in an
//! upstream caller surfaces as a 400 instead of a silently cheaper quote.

use super::pricing::PricingError;
use crate::domain::{BillingInterval, RawSeat, SeatSelection, Tier};
use std::str::FromStr;

pub fn parse_tier(tier: &str) -> Result<Tier, PricingError> {
    Tier::from_str(tier).map_err(|_| PricingError::InvalidTier(tier.to_string()))
}

/// Accepts finite, non-negative whole numbers that fit in a `u32`.
pub fn parse_count(tier: &str, count: f64) -> Result<u32, PricingError> {
    let valid =
        count.is_finite() && count >= 0.0 && count.fract() == 0.0 && count <= f64::from(u32::MAX);
    if !valid {
        return Err(PricingError::InvalidCount {
            tier: tier.to_string(),
            count,
        });
    }
    Ok(count as u32)
}

pub fn parse_seat(raw: &RawSeat) -> Result<SeatSelection, PricingError> {
    let tier = parse_tier(&raw.tier)?;
    let count = parse_count(&raw.tier, raw.count)?;
    Ok(SeatSelection::new(tier, count))
}

/// Validates every entry; the first offending one fails the whole list.
pub fn parse_seats(raw: &[RawSeat]) -> Result<Vec<SeatSelection>, PricingError> {
    raw.iter().map(parse_seat).collect()
}

/// Missing interval means monthly.
pub fn parse_billing_interval(interval: Option<&str>) -> Result<BillingInterval, PricingError> {
    match interval {
        None => Ok(BillingInterval::default()),
        Some(s) => {
            BillingInterval::from_str(s).map_err(|_| PricingError::InvalidInterval(s.to_string()))
        }
    }
}
