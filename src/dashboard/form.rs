//! Query Form Controller
//!
//! Owns the indicator selection, the time period and the last fetched
//! results. [`QueryForm::submit`] is the only path to the backend and runs
//! the validation gate first.

use std::sync::Arc;
use thiserror::Error;

use super::period::{PeriodField, TimePeriod, ValidationError};
use super::selection::IndicatorSelection;
use crate::client::{ClientError, IndicatorQuery, IndicatorResult, IndicatorsApi};

/// Why a submission produced no new results
#[derive(Error, Debug)]
pub enum SubmitError {
    /// Rejected before any request was made
    #[error("Invalid query: {0}")]
    Invalid(#[from] ValidationError),

    /// The request was made and failed
    #[error("Failed to fetch indicators: {0}")]
    Fetch(#[from] ClientError),
}

/// State of the dashboard's query form
pub struct QueryForm {
    api: Arc<dyn IndicatorsApi>,
    selection: IndicatorSelection,
    period: TimePeriod,
    results: Option<Vec<IndicatorResult>>,
    last_failure: Option<String>,
}

impl QueryForm {
    /// Fresh form: every indicator checked, empty period, no results
    pub fn new(
        api: Arc<dyn IndicatorsApi>,
        indicators: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            api,
            selection: IndicatorSelection::all(indicators),
            period: TimePeriod::default(),
            results: None,
            last_failure: None,
        }
    }

    pub fn toggle_indicator(&mut self, name: &str) {
        self.selection.toggle(name);
    }

    /// Overwrite one date field; no validation happens here
    pub fn set_period_field(&mut self, field: PeriodField, value: impl Into<String>) {
        self.period.set(field, value);
    }

    pub fn selection(&self) -> &IndicatorSelection {
        &self.selection
    }

    pub fn period(&self) -> &TimePeriod {
        &self.period
    }

    /// Results of the last successful fetch; `None` until one succeeds
    pub fn results(&self) -> Option<&[IndicatorResult]> {
        self.results.as_deref()
    }

    /// Reason of the most recent failed fetch, cleared by the next success
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    /// Run the validation gate and build the query it would send
    pub fn validate(&self) -> Result<IndicatorQuery, ValidationError> {
        self.period.validate()?;
        if self.selection.is_empty() {
            return Err(ValidationError::NoIndicators);
        }

        Ok(IndicatorQuery::new(
            self.period.start_date.clone(),
            self.period.end_date.clone(),
            self.selection.selected(),
        ))
    }

    /// Validate, fetch and replace the displayed results
    ///
    /// On a failed fetch the previous results stay in place.
    pub async fn submit(&mut self) -> Result<&[IndicatorResult], SubmitError> {
        let query = match self.validate() {
            Ok(query) => query,
            Err(e) => {
                tracing::warn!(reason = %e, "Submission rejected");
                return Err(e.into());
            }
        };

        match self.api.query(&query).await {
            Ok(results) => {
                tracing::info!(
                    start = %query.start,
                    end = %query.end,
                    indicators = query.indicators.len(),
                    count = results.len(),
                    "Fetched indicator results"
                );
                self.last_failure = None;
                Ok(self.results.insert(results).as_slice())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch indicators");
                self.last_failure = Some(e.to_string());
                Err(e.into())
            }
        }
    }
}
