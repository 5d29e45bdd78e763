//! Dashboard
//!
//! The query form and its result cards.
//!
//! ## Flow
//!
//! 1. The user toggles indicators and edits the start/end dates
//! 2. On submit, [`QueryForm`] validates the period and the selection
//! 3. A valid query goes to the [`IndicatorsApi`](crate::client::IndicatorsApi)
//! 4. The response replaces the displayed results, rendered as [`ResultCard`]s

mod card;
mod form;
mod period;
mod selection;

pub use card::{render_results, OutputFormat, ResultCard};
pub use form::{QueryForm, SubmitError};
pub use period::{PeriodField, TimePeriod, ValidationError, VALIDATION_NOTICE};
pub use selection::IndicatorSelection;
