//! # Indicator Dashboard
//!
//! Query a remote indicators API for a date range and a set of named
//! indicators, then render one card per returned data point.
//!
//! ## Modules
//!
//! - [`client`]: HTTP client for the indicators API
//! - [`dashboard`]: Query form state, validation gate and result cards
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: `tracing` subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use indicator_dashboard::{IndicatorsClient, PeriodField, QueryForm};
//! use indicator_dashboard::config::Config;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default()?;
//!     let client = Arc::new(IndicatorsClient::new(config.api.clone())?);
//!
//!     let mut form = QueryForm::new(client, config.dashboard.indicators.clone());
//!     form.toggle_indicator("male_headcount");
//!     form.set_period_field(PeriodField::StartDate, "2023-01-01");
//!     form.set_period_field(PeriodField::EndDate, "2023-12-31");
//!
//!     let results = form.submit().await?;
//!     println!("Fetched {} results", results.len());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod dashboard;
pub mod logging;

pub use client::{
    ClientError, Dimension, IndicatorQuery, IndicatorResult, IndicatorsApi, IndicatorsClient,
};

pub use dashboard::{
    render_results, IndicatorSelection, OutputFormat, PeriodField, QueryForm, ResultCard,
    SubmitError, TimePeriod, ValidationError,
};

pub use config::{ApiConfig, Config, ConfigError, DashboardConfig, LoggingConfig};
