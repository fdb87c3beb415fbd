use super::tier::Tier;
use serde::{Deserialize, Serialize};

/// How many seats of one tier a team wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSelection {
    pub tier: Tier,
    pub count: u32,
}

impl SeatSelection {
    pub fn new(tier: Tier, count: u32) -> Self {
        Self { tier, count }
    }
}

/// Unvalidated seat entry as received from a caller.
///
/// `count` stays a float so negative and fractional values can be reported
/// instead of being rejected by the deserializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSeat {
    pub tier: String,
    pub count: f64,
}

impl RawSeat {
    pub fn new(tier: impl Into<String>, count: f64) -> Self {
        Self {
            tier: tier.into(),
            count,
        }
    }
}
