use super::http_types::PricingRequest;
use crate::application::{parse_billing_interval, parse_seats, PricingError};
use crate::domain::{BillingInterval, SeatSelection};

pub(super) fn parse_pricing_request(
    req: &PricingRequest,
) -> Result<(Vec<SeatSelection>, BillingInterval), PricingError> {
    let interval = parse_billing_interval(req.billing_interval.as_deref())?;
    let seats = parse_seats(&req.seats)?;
    Ok((seats, interval))
}

pub(super) fn parse_interval_param(
    interval: Option<&str>,
) -> Result<BillingInterval, PricingError> {
    parse_billing_interval(interval.filter(|s| !s.is_empty()))
}
