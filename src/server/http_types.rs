use crate::domain::{NextDiscount, PricingBreakdown, RawSeat, Tier, VolumeDiscount};
use crate::infrastructure::TierPrice;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub(super) struct HealthResponse {
    pub(super) status: String,
}

/// Seat mix to price
#[derive(Deserialize, ToSchema)]
pub(super) struct PricingRequest {
    #[schema(value_type = Vec<Object>, example = json!([{"tier": "basic", "count": 3}]))]
    pub(super) seats: Vec<RawSeat>,
    #[serde(default)]
    #[schema(example = "monthly")]
    pub(super) billing_interval: Option<String>,
}

#[derive(Deserialize, Debug, IntoParams, ToSchema)]
pub(super) struct TiersQuery {
    #[serde(default)]
    #[param(example = "yearly")]
    pub(super) interval: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub(super) struct TierEntry {
    pub(super) tier: String,
    pub(super) display_name: String,
    pub(super) monthly_price_cents: u64,
    pub(super) yearly_price_cents: u64,
    pub(super) unit_price_cents: u64,
}

impl TierEntry {
    pub(super) fn new(tier: Tier, price: &TierPrice, unit_price_cents: u64) -> Self {
        Self {
            tier: tier.to_string(),
            display_name: price.display_name.clone(),
            monthly_price_cents: price.monthly_price_cents,
            yearly_price_cents: price.yearly_price_cents,
            unit_price_cents,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub(super) struct DiscountStep {
    pub(super) min_seats: u32,
    pub(super) percent: u32,
}

impl From<&VolumeDiscount> for DiscountStep {
    fn from(discount: &VolumeDiscount) -> Self {
        Self {
            min_seats: discount.min_seats,
            percent: discount.rate.whole_percent(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub(super) struct TiersResponse {
    pub(super) currency: String,
    pub(super) billing_interval: String,
    pub(super) tiers: Vec<TierEntry>,
    pub(super) volume_discounts: Vec<DiscountStep>,
}

#[derive(Serialize, ToSchema)]
pub(super) struct NextDiscountResponse {
    pub(super) seats_needed: u32,
    pub(super) percent: u32,
}

impl From<NextDiscount> for NextDiscountResponse {
    fn from(next: NextDiscount) -> Self {
        Self {
            seats_needed: next.seats_needed,
            percent: next.rate.whole_percent(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub(super) struct ExplainResponse {
    pub(super) quote_id: Uuid,
    pub(super) generated_at: DateTime<Utc>,
    pub(super) currency: String,
    #[schema(value_type = Object)]
    pub(super) breakdown: PricingBreakdown,
    pub(super) explanation: String,
    pub(super) next_discount: Option<NextDiscountResponse>,
}
