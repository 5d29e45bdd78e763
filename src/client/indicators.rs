//! Indicators REST API Client
//!
//! HTTP client for the indicators backend. No retries, no caching: every
//! failure is handed back to the caller as a [`ClientError`].

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::error::ClientError;
use super::types::{Dimension, DimensionEnvelope, IndicatorQuery, IndicatorResult, ResultsEnvelope};
use crate::config::ApiConfig;

/// Read operations offered by the indicators backend
///
/// The query form talks to the backend only through this trait, so tests can
/// substitute a double for [`IndicatorsClient`].
#[async_trait]
pub trait IndicatorsApi: Send + Sync {
    /// Fetch the data points for a date range and a set of indicators
    async fn query(&self, query: &IndicatorQuery) -> Result<Vec<IndicatorResult>, ClientError>;

    /// List every dimension
    async fn fetch_dimensions(&self) -> Result<Vec<Dimension>, ClientError>;

    /// Look up a single dimension
    async fn fetch_dimension_by_id(&self, id: i64) -> Result<Vec<Dimension>, ClientError>;
}

/// Indicators REST API client
pub struct IndicatorsClient {
    client: Client,
    base_url: String,
}

impl IndicatorsClient {
    /// Create a client for the configured backend
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for an indicator query
    pub fn indicators_url(&self, query: &IndicatorQuery) -> Result<Url, ClientError> {
        let mut url = self.endpoint("/indicators")?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.query_pairs() {
                pairs.append_pair(key, &value);
            }
        }
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {}", raw, e)))
    }

    /// GET a URL and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await.map_err(ClientError::from_transport)?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl IndicatorsApi for IndicatorsClient {
    async fn query(&self, query: &IndicatorQuery) -> Result<Vec<IndicatorResult>, ClientError> {
        let url = self.indicators_url(query)?;
        let envelope: ResultsEnvelope<IndicatorResult> = self.get_json(url).await?;

        tracing::debug!(count = envelope.results.len(), "indicator results received");
        Ok(envelope.results)
    }

    async fn fetch_dimensions(&self) -> Result<Vec<Dimension>, ClientError> {
        let url = self.endpoint("/dimensions")?;
        let envelope: ResultsEnvelope<Dimension> = self.get_json(url).await?;
        Ok(envelope.results)
    }

    async fn fetch_dimension_by_id(&self, id: i64) -> Result<Vec<Dimension>, ClientError> {
        let url = self.endpoint(&format!("/dimensions/{}", id))?;
        let envelope: DimensionEnvelope = self.get_json(url).await?;
        Ok(envelope.into_results())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, RawQuery},
        http::StatusCode,
        routing::get,
        Json, Router,
    };
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    /// Serve `router` on an ephemeral port and return its base URL
    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client_for(base_url: &str) -> IndicatorsClient {
        IndicatorsClient::new(ApiConfig {
            base_url: base_url.to_string(),
            request_timeout_ms: 5000,
        })
        .unwrap()
    }

    #[test]
    fn test_indicators_url() {
        let client = client_for("http://localhost:8080");
        let query = IndicatorQuery::new(
            "2023-01-01",
            "2023-12-31",
            ["total_revenue", "co2_emissions"],
        );

        let url = client.indicators_url(&query).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/indicators?start=2023-01-01&end=2023-12-31&indicators=total_revenue&indicators=co2_emissions"
        );
    }

    #[test]
    fn test_indicators_url_without_indicators() {
        let client = client_for("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");

        let query = IndicatorQuery::new("2023-01-01", "2023-12-31", Vec::<String>::new());

        let url = client.indicators_url(&query).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/indicators?start=2023-01-01&end=2023-12-31"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = IndicatorsClient::new(ApiConfig {
            base_url: "not a url".to_string(),
            request_timeout_ms: 1000,
        });
        assert!(matches!(result, Err(ClientError::InvalidBaseUrl(_))));
    }

    #[tokio::test]
    async fn test_query_sends_repeated_indicators() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&seen);

        let router = Router::new().route(
            "/indicators",
            get(move |RawQuery(query): RawQuery| {
                let recorder = Arc::clone(&recorder);
                async move {
                    recorder.lock().unwrap().push(query.unwrap_or_default());
                    Json(json!({
                        "results": [
                            {"date": "2023-02-01", "dimension": "dept_a", "indicator": "total_revenue", "value": 1000},
                            {"date": "2023-02-01", "dimension": "dept_a", "indicator": "co2_emissions", "value": 42.5}
                        ]
                    }))
                }
            }),
        );
        let client = client_for(&spawn_backend(router).await);

        let query = IndicatorQuery::new(
            "2023-01-01",
            "2023-12-31",
            ["total_revenue", "co2_emissions"],
        );
        let results = client.query(&query).await.unwrap();

        assert_eq!(
            seen.lock().unwrap().as_slice(),
            ["start=2023-01-01&end=2023-12-31&indicators=total_revenue&indicators=co2_emissions"]
        );
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].indicator, "total_revenue");
        assert_eq!(results[0].value, 1000.0);
        assert_eq!(results[1].indicator, "co2_emissions");
    }

    #[tokio::test]
    async fn test_query_api_error() {
        let router = Router::new().route(
            "/indicators",
            get(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"detail": "Invalid indicators {'revenue'}"})),
                )
            }),
        );
        let client = client_for(&spawn_backend(router).await);

        let err = client
            .query(&IndicatorQuery::new("2023-01-01", "2023-01-31", ["revenue"]))
            .await
            .unwrap_err();

        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 400);
                assert!(message.contains("Invalid indicators"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_query_decode_error() {
        let router = Router::new().route("/indicators", get(|| async { "not json" }));
        let client = client_for(&spawn_backend(router).await);

        let err = client
            .query(&IndicatorQuery::new("2023-01-01", "2023-01-31", ["total_revenue"]))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_query_backend_down() {
        // Reserve a port, then free it so nothing is listening
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{}", addr));
        let err = client
            .query(&IndicatorQuery::new("2023-01-01", "2023-01-31", ["total_revenue"]))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Unavailable));
    }

    #[tokio::test]
    async fn test_fetch_dimensions() {
        let router = Router::new()
            .route(
                "/dimensions",
                get(|| async {
                    Json(json!({
                        "results": [
                            {"id": 1, "country": "France", "business_unit": "HR"},
                            {"id": 2, "country": "Spain", "business_unit": "IT"}
                        ]
                    }))
                }),
            )
            .route(
                "/dimensions/:id",
                get(|Path(id): Path<i64>| async move {
                    Json(json!({
                        "result": {"id": id, "country": "Germany", "business_unit": "Manufacturing"}
                    }))
                }),
            );
        let client = client_for(&spawn_backend(router).await);

        let all = client.fetch_dimensions().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].business_unit, "IT");

        let one = client.fetch_dimension_by_id(9).await.unwrap();
        assert_eq!(
            one,
            vec![Dimension {
                id: 9,
                country: "Germany".to_string(),
                business_unit: "Manufacturing".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_fetch_dimension_unexpected_body() {
        let router = Router::new().route(
            "/dimensions/:id",
            get(|| async { Json(json!({"detail": "Dimension not found"})) }),
        );
        let client = client_for(&spawn_backend(router).await);

        let err = client.fetch_dimension_by_id(42).await.unwrap_err();

        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_query_sends_dimension_filter_after_indicators() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&seen);

        let router = Router::new().route(
            "/indicators",
            get(move |RawQuery(query): RawQuery| {
                let recorder = Arc::clone(&recorder);
                async move {
                    recorder.lock().unwrap().push(query.unwrap_or_default());
                    Json(json!({
                        "results": [
                            {"date": "2023-03-01", "dimension": 3, "indicator": "total_revenue", "value": 250}
                        ]
                    }))
                }
            }),
        );
        let client = client_for(&spawn_backend(router).await);

        let query = IndicatorQuery::new("2023-01-01", "2023-12-31", ["total_revenue"])
            .dimensions([3, 1]);
        let results = client.query(&query).await.unwrap();

        assert_eq!(
            seen.lock().unwrap().as_slice(),
            ["start=2023-01-01&end=2023-12-31&indicators=total_revenue&dimensions=3&dimensions=1"]
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].dimension, "3");
    }
}
