//! Date range of the query form

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// User-facing notice shown for any rejected submission
pub const VALIDATION_NOTICE: &str = "Please provide correct information";

/// Which end of the period a form edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodField {
    StartDate,
    EndDate,
}

impl FromStr for PeriodField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "startDate" | "start_date" | "start" => Ok(PeriodField::StartDate),
            "endDate" | "end_date" | "end" => Ok(PeriodField::EndDate),
            other => Err(format!("unknown period field: {}", other)),
        }
    }
}

impl fmt::Display for PeriodField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodField::StartDate => write!(f, "startDate"),
            PeriodField::EndDate => write!(f, "endDate"),
        }
    }
}

/// Start and end dates as typed into the form (`YYYY-MM-DD`, empty = unset)
///
/// Fields may hold partial input between edits; only [`TimePeriod::validate`]
/// enforces anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimePeriod {
    pub start_date: String,
    pub end_date: String,
}

impl TimePeriod {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Overwrite one field, leaving the other untouched
    pub fn set(&mut self, field: PeriodField, value: impl Into<String>) {
        match field {
            PeriodField::StartDate => self.start_date = value.into(),
            PeriodField::EndDate => self.end_date = value.into(),
        }
    }

    /// Both dates set and `start_date <= end_date`
    ///
    /// Comparison is on the strings; fixed-width ISO dates sort chronologically.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.start_date.is_empty() {
            return Err(ValidationError::MissingStartDate);
        }
        if self.end_date.is_empty() {
            return Err(ValidationError::MissingEndDate);
        }
        if self.start_date > self.end_date {
            return Err(ValidationError::EndBeforeStart {
                start: self.start_date.clone(),
                end: self.end_date.clone(),
            });
        }
        Ok(())
    }
}

/// Reasons a form submission is rejected before any request is made
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("start date is not set")]
    MissingStartDate,

    #[error("end date is not set")]
    MissingEndDate,

    #[error("end date {end} is before start date {start}")]
    EndBeforeStart { start: String, end: String },

    #[error("no indicator selected")]
    NoIndicators,
}

impl ValidationError {
    /// Text to show the user, whatever the specific reason
    pub fn notice(&self) -> &'static str {
        VALIDATION_NOTICE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_leaves_other_field() {
        let mut period = TimePeriod::new("2023-01-01", "2023-12-31");
        period.set(PeriodField::EndDate, "2023-06");

        assert_eq!(period.start_date, "2023-01-01");
        assert_eq!(period.end_date, "2023-06");
    }

    #[test]
    fn test_field_names() {
        assert_eq!("startDate".parse::<PeriodField>(), Ok(PeriodField::StartDate));
        assert_eq!("end_date".parse::<PeriodField>(), Ok(PeriodField::EndDate));
        assert!("middle".parse::<PeriodField>().is_err());
        assert_eq!(PeriodField::StartDate.to_string(), "startDate");
    }

    #[test]
    fn test_validate() {
        assert_eq!(TimePeriod::new("2023-01-01", "2023-12-31").validate(), Ok(()));
        assert_eq!(TimePeriod::new("2023-05-05", "2023-05-05").validate(), Ok(()));
        assert_eq!(
            TimePeriod::default().validate(),
            Err(ValidationError::MissingStartDate)
        );
        assert_eq!(
            TimePeriod::new("", "2023-01-01").validate(),
            Err(ValidationError::MissingStartDate)
        );
        assert_eq!(
            TimePeriod::new("2023-01-01", "").validate(),
            Err(ValidationError::MissingEndDate)
        );
        assert!(matches!(
            TimePeriod::new("2023-12-31", "2023-01-01").validate(),
            Err(ValidationError::EndBeforeStart { .. })
        ));
    }

    #[test]
    fn test_notice_is_shared() {
        assert_eq!(ValidationError::NoIndicators.notice(), VALIDATION_NOTICE);
        assert_eq!(ValidationError::MissingEndDate.notice(), VALIDATION_NOTICE);
    }
}
