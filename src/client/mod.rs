//! Indicators API Client
//!
//! Read-only HTTP client for the indicators backend.
//!
//! ## Endpoints
//!
//! - `GET /indicators?start=&end=&indicators=...` - Data points for a date range
//! - `GET /dimensions` - All dimensions
//! - `GET /dimensions/:id` - A single dimension
//!
//! Every endpoint answers with a JSON envelope (`{ "results": [...] }`);
//! the client unwraps it and hands back the list unchanged.

mod error;
mod indicators;
mod types;

pub use error::ClientError;
pub use indicators::{IndicatorsApi, IndicatorsClient};
pub use types::{Dimension, IndicatorQuery, IndicatorResult};
