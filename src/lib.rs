//! OVRSEE Pricing
//!
//! Team seat pricing with volume discounts, plus a plain-language explanation
//! of the result for the UI and the agents.
//!
//! ## Library
//!
//! ```rust
//! use ovrsee_pricing::application::{describe_team_pricing, PricingEngine};
//! use ovrsee_pricing::domain::{BillingInterval, SeatSelection, Tier};
//!
//! let engine = PricingEngine::standard();
//! let seats = [SeatSelection::new(Tier::Basic, 3), SeatSelection::new(Tier::Advanced, 2)];
//! let breakdown = engine.calculate_team_pricing(&seats, BillingInterval::Monthly).unwrap();
//! assert_eq!(breakdown.discount_percent.whole_percent(), 10);
//! assert!(describe_team_pricing(&breakdown).contains("final total"));
//! ```
//!
//! ## Embedded (Axum)
//!
//! When the `server` feature is enabled, this crate can be embedded into a larger Axum app:
//! ```rust,ignore
//! use axum::Router;
//! use ovrsee_pricing::infrastructure::AppConfig;
//! use ovrsee_pricing::server::{build_state, router};
//!
//! let cfg = AppConfig::from_env()?;
//! let app = Router::new().nest("/billing", router(build_state(&cfg)));
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

// Standalone + embedded HTTP server support (Axum).
// Enabled behind the `server` feature so the core library can be used without Axum.
#[cfg(feature = "server")]
pub mod server;

pub use application::*;
pub use domain::*;
pub use infrastructure::*;

#[cfg(feature = "server")]
pub use server::*;
