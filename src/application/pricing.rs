use crate::domain::{
    next_discount, volume_discount, BillingInterval, Money, NextDiscount, PricingBreakdown,
    SeatSelection, Tier, TierLine,
};
use crate::infrastructure::{TierCatalog, TierTable};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("Invalid tier '{0}': expected one of basic, advanced, elite")]
    InvalidTier(String),
    #[error("Invalid seat count {count} for tier '{tier}': must be a non-negative whole number")]
    InvalidCount { tier: String, count: f64 },
    #[error("Invalid billing interval '{0}': expected monthly or yearly")]
    InvalidInterval(String),
    #[error("Pricing amount overflow")]
    Overflow,
}

/// Prices a team's seat mix against an injected tier catalog.
///
/// Stateless apart from the catalog, so one engine can be shared across
/// request handlers behind an `Arc`.
pub struct PricingEngine<C = TierTable>
where
    C: TierCatalog,
{
    catalog: C,
}

impl<C> PricingEngine<C>
where
    C: TierCatalog,
{
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn calculate_team_pricing(
        &self,
        seats: &[SeatSelection],
        billing_interval: BillingInterval,
    ) -> Result<PricingBreakdown, PricingError> {
        let mut counts: BTreeMap<Tier, u32> = Tier::ALL.iter().map(|tier| (*tier, 0)).collect();
        for seat in seats {
            let seats_in_tier = counts.entry(seat.tier).or_insert(0);
            *seats_in_tier = seats_in_tier
                .checked_add(seat.count)
                .ok_or(PricingError::Overflow)?;
        }

        let mut per_tier = BTreeMap::new();
        let mut total_seats: u32 = 0;
        let mut list_subtotal = Money::ZERO;

        for (tier, count) in counts {
            let price = self.catalog.unit_price(tier, billing_interval);
            let subtotal = price.checked_mul(count).ok_or(PricingError::Overflow)?;

            total_seats = total_seats
                .checked_add(count)
                .ok_or(PricingError::Overflow)?;
            list_subtotal = list_subtotal
                .checked_add(subtotal)
                .ok_or(PricingError::Overflow)?;

            per_tier.insert(
                tier,
                TierLine {
                    display_name: self.catalog.display_name(tier),
                    count,
                    unit_price: price,
                    subtotal,
                },
            );
        }

        let discount_percent = volume_discount(total_seats);
        let discount_amount = list_subtotal.portion(discount_percent);
        let final_total = list_subtotal
            .checked_sub(discount_amount)
            .ok_or(PricingError::Overflow)?;

        debug!(
            total_seats,
            interval = %billing_interval,
            list_subtotal_cents = list_subtotal.cents(),
            discount_bps = discount_percent.bps(),
            final_total_cents = final_total.cents(),
            "Calculated team pricing"
        );

        Ok(PricingBreakdown {
            billing_interval,
            total_seats,
            per_tier,
            list_subtotal,
            discount_percent,
            discount_amount,
            final_total,
        })
    }

    pub fn calculate_monthly(
        &self,
        seats: &[SeatSelection],
    ) -> Result<PricingBreakdown, PricingError> {
        self.calculate_team_pricing(seats, BillingInterval::Monthly)
    }

    /// Next volume discount step for a computed breakdown.
    pub fn next_discount(&self, breakdown: &PricingBreakdown) -> Option<NextDiscount> {
        next_discount(breakdown.total_seats)
    }
}

impl PricingEngine<TierTable> {
    /// Engine over the built-in list prices.
    pub fn standard() -> Self {
        Self::new(TierTable::standard())
    }
}

impl Default for PricingEngine<TierTable> {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MockTierCatalog;

    fn engine() -> PricingEngine {
        PricingEngine::standard()
    }

    #[test]
    fn every_tier_appears_in_breakdown() {
        let breakdown = engine()
            .calculate_monthly(&[SeatSelection::new(Tier::Advanced, 2)])
            .unwrap();

        assert_eq!(breakdown.per_tier.len(), 3);
        assert_eq!(breakdown.line(Tier::Basic).unwrap().count, 0);
        assert_eq!(breakdown.line(Tier::Basic).unwrap().subtotal, Money::ZERO);
        assert_eq!(breakdown.line(Tier::Advanced).unwrap().count, 2);
        assert_eq!(
            breakdown.line(Tier::Elite).unwrap().unit_price,
            Money::from_cents(12_999)
        );
    }

    #[test]
    fn repeated_tiers_are_summed() {
        let seats = [
            SeatSelection::new(Tier::Basic, 2),
            SeatSelection::new(Tier::Elite, 1),
            SeatSelection::new(Tier::Basic, 3),
        ];
        let breakdown = engine().calculate_monthly(&seats).unwrap();

        assert_eq!(breakdown.line(Tier::Basic).unwrap().count, 5);
        assert_eq!(breakdown.total_seats, 6);
        assert_eq!(breakdown.discount_percent.bps(), 1000);
    }

    #[test]
    fn zero_counts_contribute_nothing() {
        let seats = [
            SeatSelection::new(Tier::Elite, 0),
            SeatSelection::new(Tier::Basic, 0),
        ];
        let breakdown = engine().calculate_monthly(&seats).unwrap();

        assert_eq!(breakdown.total_seats, 0);
        assert_eq!(breakdown.list_subtotal, Money::ZERO);
        assert_eq!(breakdown.final_total, Money::ZERO);
        assert!(!breakdown.is_discounted());
    }

    #[test]
    fn discount_applies_to_whole_subtotal() {
        // 3 basic + 2 elite = 5 seats; the elite seats are discounted too
        let seats = [
            SeatSelection::new(Tier::Basic, 3),
            SeatSelection::new(Tier::Elite, 2),
        ];
        let breakdown = engine().calculate_monthly(&seats).unwrap();

        assert_eq!(
            breakdown.list_subtotal,
            Money::from_cents(3 * 2_999 + 2 * 12_999)
        );
        assert_eq!(breakdown.discount_amount, Money::from_cents(3_500));
        assert_eq!(breakdown.final_total, Money::from_cents(34_995 - 3_500));
    }

    #[test]
    fn discount_rounds_half_up_to_cents() {
        let seats = [
            SeatSelection::new(Tier::Basic, 3),
            SeatSelection::new(Tier::Advanced, 2),
        ];
        let breakdown = engine().calculate_monthly(&seats).unwrap();

        // 249.95 * 10% = 24.995
        assert_eq!(breakdown.list_subtotal, Money::from_cents(24_995));
        assert_eq!(breakdown.discount_amount, Money::from_cents(2_500));
        assert_eq!(breakdown.final_total, Money::from_cents(22_495));
    }

    #[test]
    fn uses_catalog_prices_verbatim() {
        let mut catalog = MockTierCatalog::new();
        catalog
            .expect_unit_price()
            .returning(|tier, interval| match (tier, interval) {
                (Tier::Basic, BillingInterval::Monthly) => Money::from_cents(1_000),
                (Tier::Advanced, BillingInterval::Monthly) => Money::from_cents(2_000),
                (Tier::Elite, BillingInterval::Monthly) => Money::from_cents(3_000),
                (_, BillingInterval::Yearly) => Money::from_cents(99_999),
            });
        catalog
            .expect_display_name()
            .returning(|tier| format!("Plan {}", tier));

        let engine = PricingEngine::new(catalog);
        let seats = [
            SeatSelection::new(Tier::Elite, 4),
            SeatSelection::new(Tier::Basic, 1),
        ];
        let breakdown = engine.calculate_monthly(&seats).unwrap();

        assert_eq!(breakdown.list_subtotal, Money::from_cents(13_000));
        assert_eq!(breakdown.discount_amount, Money::from_cents(1_300));
        assert_eq!(breakdown.final_total, Money::from_cents(11_700));
        assert_eq!(
            breakdown.line(Tier::Elite).unwrap().display_name,
            "Plan elite"
        );
    }

    #[test]
    fn catalog_is_queried_for_requested_interval_only() {
        let mut catalog = MockTierCatalog::new();
        catalog
            .expect_unit_price()
            .withf(|_, interval| *interval == BillingInterval::Yearly)
            .times(3)
            .returning(|_, _| Money::from_cents(11_000));
        catalog
            .expect_display_name()
            .times(3)
            .returning(|tier| tier.to_string());

        let engine = PricingEngine::new(catalog);
        let seats = [SeatSelection::new(Tier::Basic, 1)];
        let breakdown = engine
            .calculate_team_pricing(&seats, BillingInterval::Yearly)
            .unwrap();

        assert_eq!(breakdown.final_total, Money::from_cents(11_000));
        assert_eq!(breakdown.billing_interval, BillingInterval::Yearly);
    }

    #[test]
    fn overflow_is_reported() {
        let seats = [
            SeatSelection::new(Tier::Basic, u32::MAX),
            SeatSelection::new(Tier::Basic, 1),
        ];
        assert_eq!(
            engine().calculate_monthly(&seats),
            Err(PricingError::Overflow)
        );

        let seats = [
            SeatSelection::new(Tier::Basic, u32::MAX),
            SeatSelection::new(Tier::Elite, 1),
        ];
        assert_eq!(
            engine().calculate_monthly(&seats),
            Err(PricingError::Overflow)
        );
    }

    #[test]
    fn next_discount_follows_total_seats() {
        let engine = engine();
        let breakdown = engine
            .calculate_monthly(&[SeatSelection::new(Tier::Basic, 8)])
            .unwrap();
        let next = engine.next_discount(&breakdown).unwrap();
        assert_eq!(next.seats_needed, 2);
        assert_eq!(next.rate.whole_percent(), 20);
    }
}
