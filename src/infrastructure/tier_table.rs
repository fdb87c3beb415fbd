use crate::domain::{BillingInterval, Money, Tier};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use validator::{Validate, ValidationError, ValidationErrors};

/// Yearly list price is conventionally this many monthly prices (one month free).
pub const YEARLY_PRICE_MONTHS: u64 = 11;

#[derive(Error, Debug)]
pub enum TierTableError {
    #[error("Invalid pricing for tier {tier}: {source}")]
    Invalid {
        tier: Tier,
        #[source]
        source: ValidationErrors,
    },
}

/// Source of list prices and display names for the pricing engine.
#[cfg_attr(test, mockall::automock)]
pub trait TierCatalog: Send + Sync {
    fn display_name(&self, tier: Tier) -> String;
    fn unit_price(&self, tier: Tier, interval: BillingInterval) -> Money;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TierPrice {
    #[validate(length(min = 1))]
    pub display_name: String,
    #[validate(custom = "positive_price")]
    pub monthly_price_cents: u64,
    #[validate(custom = "positive_price")]
    pub yearly_price_cents: u64,
}

fn positive_price(cents: u64) -> Result<(), ValidationError> {
    if cents == 0 {
        return Err(ValidationError::new("price_must_be_positive"));
    }
    Ok(())
}

impl TierPrice {
    /// Price with the yearly column derived from the monthly one.
    pub fn with_monthly(display_name: impl Into<String>, monthly_price_cents: u64) -> Self {
        Self {
            display_name: display_name.into(),
            monthly_price_cents,
            yearly_price_cents: monthly_price_cents.saturating_mul(YEARLY_PRICE_MONTHS),
        }
    }

    pub fn price(&self, interval: BillingInterval) -> Money {
        match interval {
            BillingInterval::Monthly => Money::from_cents(self.monthly_price_cents),
            BillingInterval::Yearly => Money::from_cents(self.yearly_price_cents),
        }
    }
}

/// Immutable list-price table, one entry per tier.
///
/// Built once from configuration and handed to the engine; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierTable {
    pub basic: TierPrice,
    pub advanced: TierPrice,
    pub elite: TierPrice,
}

impl TierTable {
    pub fn standard() -> Self {
        Self {
            basic: TierPrice::with_monthly("Basic", 2_999),
            advanced: TierPrice::with_monthly("Advanced", 7_999),
            elite: TierPrice::with_monthly("Elite", 12_999),
        }
    }

    pub fn get(&self, tier: Tier) -> &TierPrice {
        match tier {
            Tier::Basic => &self.basic,
            Tier::Advanced => &self.advanced,
            Tier::Elite => &self.elite,
        }
    }

    pub fn validate(&self) -> Result<(), TierTableError> {
        for tier in Tier::ALL {
            let price = self.get(tier);
            price
                .validate()
                .map_err(|source| TierTableError::Invalid { tier, source })?;

            let expected_yearly = YEARLY_PRICE_MONTHS.saturating_mul(price.monthly_price_cents);
            if price.yearly_price_cents != expected_yearly {
                warn!(
                    tier = %tier,
                    monthly_price_cents = price.monthly_price_cents,
                    yearly_price_cents = price.yearly_price_cents,
                    expected_yearly_cents = expected_yearly,
                    "Yearly price does not equal {} monthly payments",
                    YEARLY_PRICE_MONTHS
                );
            }
        }
        Ok(())
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TierCatalog for TierTable {
    fn display_name(&self, tier: Tier) -> String {
        self.get(tier).display_name.clone()
    }

    fn unit_price(&self, tier: Tier, interval: BillingInterval) -> Money {
        self.get(tier).price(interval)
    }
}
