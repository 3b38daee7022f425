//! football-data.org v4 API client.
//!
//! Thin authenticated GET wrapper. Fails fast: no retries and no rate
//! limiting, the only transport policy is the configured request timeout.

use std::time::Duration;

use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;

use crate::config::UpstreamConfig;
use crate::error::FetchError;
use crate::upstream::types::{RawMatch, RawMatchesPage, RawTeamDetail};

const AUTH_HEADER: &str = "X-Auth-Token";

pub struct FootballApiClient {
    http: reqwest::Client,
    base_url: String,
    token: SecretString,
    head_to_head_limit: u32,
}

impl FootballApiClient {
    pub fn new(config: &UpstreamConfig, token: SecretString) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token,
            head_to_head_limit: config.head_to_head_limit,
        })
    }

    /// Today's fixtures across all competitions.
    pub async fn matches(&self) -> Result<RawMatchesPage, FetchError> {
        self.fetch_json("/matches", &[]).await
    }

    /// A single fixture. The id is passed through verbatim from the caller.
    pub async fn match_by_id(&self, match_id: &str) -> Result<RawMatch, FetchError> {
        self.fetch_json(&format!("/matches/{match_id}"), &[]).await
    }

    /// Historical meetings of the two sides of a fixture.
    /// Same page shape as the matches list, with `aggregates` ignored.
    pub async fn head_to_head(&self, match_id: &str) -> Result<RawMatchesPage, FetchError> {
        let limit = self.head_to_head_limit.to_string();
        self.fetch_json(&format!("/matches/{match_id}/head2head"), &[("limit", &limit)])
            .await
    }

    /// Competition table. Fetched as part of the detail aggregation; the
    /// payload is not projected into the response, so it stays untyped.
    pub async fn standings(&self, competition_code: &str) -> Result<Value, FetchError> {
        self.fetch_json(&format!("/competitions/{competition_code}/standings"), &[])
            .await
    }

    /// Full team record including the registered squad.
    pub async fn team(&self, team_id: i64) -> Result<RawTeamDetail, FetchError> {
        self.fetch_json(&format!("/teams/{team_id}"), &[]).await
    }

    #[instrument(skip(self, query), fields(path = %path))]
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .header(AUTH_HEADER, self.token.expose_secret())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            });
            return Err(FetchError::UpstreamStatus { status, body });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| FetchError::Malformed(format!("{path}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: String) -> FootballApiClient {
        let config = UpstreamConfig {
            base_url,
            timeout_seconds: 5,
            head_to_head_limit: 10,
        };
        FootballApiClient::new(&config, SecretString::from("test-token".to_string()))
            .expect("should build client")
    }

    #[tokio::test]
    async fn test_matches_sends_auth_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/matches"))
            .and(header("X-Auth-Token", "test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "filters": {"dateFrom": "2026-08-23"},
                "resultSet": {"count": 0},
                "matches": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(server.uri());
        let page = client.matches().await.expect("should fetch");
        assert!(page.matches.is_empty());
        assert!(page.filters.is_some());
    }

    #[tokio::test]
    async fn test_head_to_head_passes_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/matches/42/head2head"))
            .and(query_param("limit", "10"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"matches": []})),
            )
            .mount(&server)
            .await;

        let client = test_client(server.uri());
        let page = client.head_to_head("42").await.expect("should fetch");
        assert!(page.matches.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/teams/57"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exhausted"))
            .mount(&server)
            .await;

        let client = test_client(server.uri());
        let err = client.team(57).await.expect_err("should fail");
        match err {
            FetchError::UpstreamStatus { status, body } => {
                assert_eq!(status.as_u16(), 429);
                assert_eq!(body, "quota exhausted");
            }
            other => panic!("expected UpstreamStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/matches/42"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = test_client(server.uri());
        let err = client.match_by_id("42").await.expect_err("should fail");
        assert!(matches!(err, FetchError::Malformed(_)));
    }
}
