use super::tier_table::{TierPrice, TierTable};
use crate::domain::Tier;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub currency: String,
    pub tiers: TierTable,
}

impl AppConfig {
    /// Layers `config/default`, `config/local` and `SEATS_*` environment variables.
    ///
    /// Nested keys use a double underscore, e.g. `SEATS_TIERS__ELITE__MONTHLY_PRICE_CENTS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(
            Config::builder()
                .add_source(File::with_name("config/default").required(false))
                .add_source(File::with_name("config/local").required(false))
                .add_source(
                    Environment::with_prefix("SEATS")
                        .prefix_separator("_")
                        .separator("__")
                        .try_parsing(true),
                ),
        )
    }

    pub(crate) fn load(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let standard = TierTable::standard();
        let mut builder = builder
            .set_default("server_host", "0.0.0.0")?
            .set_default("server_port", 8080)?
            .set_default("currency", "USD")?;
        for tier in Tier::ALL {
            builder = tier_defaults(builder, tier, standard.get(tier))?;
        }

        let mut app_config: AppConfig = builder.build()?.try_deserialize()?;
        app_config.currency = normalize_currency(&app_config.currency)?;
        app_config
            .tiers
            .validate()
            .map_err(|e| ConfigError::Message(e.to_string()))?;
        Ok(app_config)
    }
}

fn tier_defaults(
    builder: ConfigBuilder<DefaultState>,
    tier: Tier,
    price: &TierPrice,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let key = |field: &str| format!("tiers.{}.{}", tier, field);
    let monthly = i64::try_from(price.monthly_price_cents).unwrap_or(i64::MAX);
    let yearly = i64::try_from(price.yearly_price_cents).unwrap_or(i64::MAX);
    builder
        .set_default(key("display_name"), price.display_name.as_str())?
        .set_default(key("monthly_price_cents"), monthly)?
        .set_default(key("yearly_price_cents"), yearly)
}

/// Three ASCII letters (ISO 4217), stored upper-cased.
fn normalize_currency(currency: &str) -> Result<String, ConfigError> {
    let code = currency.trim();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ConfigError::Message(format!(
            "Invalid currency '{}': expected a three-letter ISO 4217 code",
            currency
        )));
    }
    Ok(code.to_ascii_uppercase())
}
