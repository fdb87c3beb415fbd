use crate::application::PricingError;
use crate::domain::{BillingInterval, Tier};
use axum::{extract::rejection::JsonRejection, http::StatusCode};

/// Every pricing error is caller-correctable, so all map to 400.
pub(super) fn map_pricing_error(err: &PricingError) -> (StatusCode, serde_json::Value) {
    match err {
        PricingError::InvalidTier(_) => (
            StatusCode::BAD_REQUEST,
            serde_json::json!({
                "error": err.to_string(),
                "allowed": Tier::identifiers()
            }),
        ),
        PricingError::InvalidInterval(_) => (
            StatusCode::BAD_REQUEST,
            serde_json::json!({
                "error": err.to_string(),
                "allowed": BillingInterval::identifiers()
            }),
        ),
        PricingError::InvalidCount { .. } => (
            StatusCode::BAD_REQUEST,
            serde_json::json!({ "error": err.to_string() }),
        ),
        PricingError::Overflow => (
            StatusCode::BAD_REQUEST,
            serde_json::json!({ "error": "Seat counts are too large to price" }),
        ),
    }
}

/// Bodies that are not valid JSON or do not match the request shape.
pub(super) fn map_json_rejection(rejection: &JsonRejection) -> (StatusCode, serde_json::Value) {
    (
        StatusCode::BAD_REQUEST,
        serde_json::json!({ "error": rejection.body_text() }),
    )
}
