//! Request/Response types for the indicators API

use serde::{Deserialize, Deserializer, Serialize};

/// One data point returned by `GET /indicators`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorResult {
    /// Day of the data point (`YYYY-MM-DD`)
    pub date: String,
    /// Dimension the value is attached to; numeric ids are kept as text
    #[serde(deserialize_with = "string_or_number")]
    pub dimension: String,
    pub indicator: String,
    pub value: f64,
}

/// A categorical grouping (country and business unit)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub id: i64,
    pub country: String,
    pub business_unit: String,
}

/// Parameters of an indicator query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorQuery {
    pub start: String,
    pub end: String,
    pub indicators: Vec<String>,
    /// Optional dimension filter; the backend uses every dimension when empty
    pub dimensions: Vec<i64>,
}

impl IndicatorQuery {
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        indicators: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            indicators: indicators.into_iter().map(Into::into).collect(),
            dimensions: Vec::new(),
        }
    }

    /// Restrict the query to the given dimension ids
    pub fn dimensions(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.dimensions = ids.into_iter().collect();
        self
    }

    /// Query string pairs in wire order: `start`, `end`, one `indicators`
    /// pair per name, then one `dimensions` pair per id.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2 + self.indicators.len() + self.dimensions.len());
        pairs.push(("start", self.start.clone()));
        pairs.push(("end", self.end.clone()));
        pairs.extend(self.indicators.iter().map(|name| ("indicators", name.clone())));
        pairs.extend(self.dimensions.iter().map(|id| ("dimensions", id.to_string())));
        pairs
    }
}

// ============================================
// Response envelopes
// ============================================

#[derive(Debug, Deserialize)]
pub(crate) struct ResultsEnvelope<T> {
    pub results: Vec<T>,
}

/// `GET /dimensions/:id` answers `{ "result": {...} }` on the reference
/// backend; a `results` list is accepted as well. Any other shape is a
/// decode error.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum DimensionEnvelope {
    Single { result: Dimension },
    List { results: Vec<Dimension> },
}

impl DimensionEnvelope {
    pub fn into_results(self) -> Vec<Dimension> {
        match self {
            DimensionEnvelope::Single { result } => vec![result],
            DimensionEnvelope::List { results } => results,
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    })
}
