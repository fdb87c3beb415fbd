use super::http_errors::{map_json_rejection, map_pricing_error};
use super::http_parse::{parse_interval_param, parse_pricing_request};
use super::http_types::{
    DiscountStep, ExplainResponse, HealthResponse, NextDiscountResponse, PricingRequest, TierEntry,
    TiersQuery, TiersResponse,
};
use super::state::AppState;
use crate::application::{describe_team_pricing_in, PricingError};
use crate::domain::{PricingBreakdown, Tier, VOLUME_DISCOUNTS};
use crate::infrastructure::TierCatalog;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/pricing/tiers", get(list_tiers))
        .route("/pricing/calculate", post(calculate_pricing))
        .route("/pricing/explain", post(explain_pricing))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(OpenApi)]
#[openapi(
    paths(health_check, list_tiers, calculate_pricing, explain_pricing),
    components(
        schemas(
            HealthResponse,
            PricingRequest,
            TierEntry,
            DiscountStep,
            TiersResponse,
            NextDiscountResponse,
            ExplainResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Pricing", description = "Team seat pricing and explanations"),
    ),
    info(
        title = "OVRSEE Pricing API",
        version = "0.1.0",
        description = "Seat pricing, volume discounts and plain-language pricing explanations",
        license(name = "MIT")
    )
)]
struct ApiDoc;

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}

/// List configured tiers and the volume discount schedule
#[utoipa::path(
    get,
    path = "/pricing/tiers",
    tag = "Pricing",
    params(TiersQuery),
    responses(
        (status = 200, description = "Tier table", body = TiersResponse),
        (status = 400, description = "Invalid billing interval", body = Object)
    )
)]
async fn list_tiers(
    State(state): State<AppState>,
    Query(params): Query<TiersQuery>,
) -> impl IntoResponse {
    let interval = match parse_interval_param(params.interval.as_deref()) {
        Ok(i) => i,
        Err(e) => {
            let (status, body) = map_pricing_error(&e);
            return (status, Json(body));
        }
    };

    let table = state.engine.catalog();
    let tiers = Tier::ALL
        .iter()
        .map(|&tier| {
            let unit_price = table.unit_price(tier, interval);
            TierEntry::new(tier, table.get(tier), unit_price.cents())
        })
        .collect();

    let response = TiersResponse {
        currency: state.currency.clone(),
        billing_interval: interval.to_string(),
        tiers,
        volume_discounts: VOLUME_DISCOUNTS.iter().map(DiscountStep::from).collect(),
    };
    (StatusCode::OK, Json(serde_json::json!(response)))
}

fn price_request(state: &AppState, req: &PricingRequest) -> Result<PricingBreakdown, PricingError> {
    let (seats, interval) = parse_pricing_request(req)?;
    state.engine.calculate_team_pricing(&seats, interval)
}

fn reject_body(rejection: &JsonRejection) -> (StatusCode, Json<serde_json::Value>) {
    warn!(error = %rejection.body_text(), "Rejected malformed pricing request body");
    let (status, body) = map_json_rejection(rejection);
    (status, Json(body))
}

/// Price a seat mix
#[utoipa::path(
    post,
    path = "/pricing/calculate",
    tag = "Pricing",
    request_body = PricingRequest,
    responses(
        (status = 200, description = "Pricing breakdown", body = Object),
        (status = 400, description = "Invalid tier, count, billing interval or body", body = Object)
    )
)]
async fn calculate_pricing(
    State(state): State<AppState>,
    payload: Result<Json<PricingRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(req) = match payload {
        Ok(req) => req,
        Err(rejection) => return reject_body(&rejection),
    };

    match price_request(&state, &req) {
        Ok(breakdown) => (StatusCode::OK, Json(serde_json::json!(breakdown))),
        Err(e) => {
            warn!(error = %e, "Rejected pricing request");
            let (status, body) = map_pricing_error(&e);
            (status, Json(body))
        }
    }
}

/// Price a seat mix and explain it in plain language
#[utoipa::path(
    post,
    path = "/pricing/explain",
    tag = "Pricing",
    request_body = PricingRequest,
    responses(
        (status = 200, description = "Breakdown with explanation", body = ExplainResponse),
        (status = 400, description = "Invalid tier, count, billing interval or body", body = Object)
    )
)]
async fn explain_pricing(
    State(state): State<AppState>,
    payload: Result<Json<PricingRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(req) = match payload {
        Ok(req) => req,
        Err(rejection) => return reject_body(&rejection),
    };

    let breakdown = match price_request(&state, &req) {
        Ok(b) => b,
        Err(e) => {
            warn!(error = %e, "Rejected pricing explanation request");
            let (status, body) = map_pricing_error(&e);
            return (status, Json(body));
        }
    };

    let explanation = describe_team_pricing_in(&breakdown, &state.currency);
    let next_discount = state
        .engine
        .next_discount(&breakdown)
        .map(NextDiscountResponse::from);
    let response = ExplainResponse {
        quote_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        currency: state.currency.clone(),
        breakdown,
        explanation,
        next_discount,
    };

    info!(
        quote_id = %response.quote_id,
        total_seats = response.breakdown.total_seats,
        final_total_cents = response.breakdown.final_total.cents(),
        "Generated pricing explanation"
    );
    (StatusCode::OK, Json(serde_json::json!(response)))
}
