use crate::application::PricingEngine;
use crate::infrastructure::{AppConfig, TierTable};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<PricingEngine<TierTable>>,
    pub currency: String,
}

impl AppState {
    pub fn new(engine: PricingEngine<TierTable>, currency: impl Into<String>) -> Self {
        Self {
            engine: Arc::new(engine),
            currency: currency.into(),
        }
    }
}

/// Build state from loaded configuration.
///
/// Intended for embedding into a larger service that already owns its config.
pub fn build_state(config: &AppConfig) -> AppState {
    AppState::new(
        PricingEngine::new(config.tiers.clone()),
        config.currency.clone(),
    )
}

