use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Subscription level a seat is billed at, ordered low to high.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Tier {
    Basic,
    Advanced,
    Elite,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Basic, Tier::Advanced, Tier::Elite];

    /// Wire identifiers accepted at the HTTP boundary.
    pub fn identifiers() -> Vec<&'static str> {
        Self::ALL.into_iter().map(<&'static str>::from).collect()
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BillingInterval {
    #[default]
    Monthly,
    Yearly,
}

impl BillingInterval {
    pub const ALL: [BillingInterval; 2] = [BillingInterval::Monthly, BillingInterval::Yearly];

    pub fn identifiers() -> Vec<&'static str> {
        Self::ALL.into_iter().map(<&'static str>::from).collect()
    }

    /// Period noun used in customer-facing copy ("per month", "per year").
    pub fn period(&self) -> &'static str {
        match self {
            BillingInterval::Monthly => "month",
            BillingInterval::Yearly => "year",
        }
    }
}
