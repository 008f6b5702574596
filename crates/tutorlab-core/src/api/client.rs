//! HTTP client for the tutoring backend.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::types::{
    HealthResponse, MessageRequest, MessageResponse, ScoringCategory, SessionEndResponse,
    SessionStartRequest, SessionStartResponse,
};
use crate::personas::{self, PersonaInfo};

/// Thin wrapper over `reqwest::Client` for the session endpoints.
///
/// One instance per run; cheap to clone (reqwest clients share their pool).
#[derive(Debug, Clone)]
pub struct SessionClient {
    http: reqwest::Client,
    base_url: String,
}

impl SessionClient {
    /// Creates a client for the given base URL (e.g. `http://localhost:8000/api`).
    ///
    /// The URL is validated up front so a typo in config fails at startup, not
    /// on the first request.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .with_context(|| format!("invalid server URL '{base_url}'"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("server URL must be http or https, got '{}'", parsed.scheme());
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Starts a new tutoring session.
    pub async fn start_session(
        &self,
        request: &SessionStartRequest,
    ) -> Result<SessionStartResponse> {
        self.post_json("/sessions/start", Some(request))
            .await
            .context("start session")
    }

    /// Sends a tutor message and returns the learner's reply.
    pub async fn send_message(
        &self,
        session_id: &str,
        request: &MessageRequest,
    ) -> Result<MessageResponse> {
        self.post_json(&format!("/sessions/{session_id}/message"), Some(request))
            .await
            .context("send message")
    }

    /// Ends the session and returns the rubric scores.
    pub async fn end_session(&self, session_id: &str) -> Result<SessionEndResponse> {
        self.post_json::<(), _>(&format!("/sessions/{session_id}/end"), None)
            .await
            .context("end session")
    }

    /// Lists the available learner personas.
    ///
    /// Degrades to the built-in catalog when the server is unreachable or
    /// returns an error, so the setup screen always has personas to offer.
    pub async fn personas(&self) -> Vec<PersonaInfo> {
        #[derive(serde::Deserialize)]
        struct PersonasResponse {
            personas: Vec<PersonaInfo>,
        }

        match self.get_json::<PersonasResponse>("/personas").await {
            Ok(resp) if !resp.personas.is_empty() => resp.personas,
            Ok(_) => {
                tracing::warn!("server returned no personas, using built-in catalog");
                personas::builtin_personas()
            }
            Err(e) => {
                tracing::warn!("persona listing failed ({e:#}), using built-in catalog");
                personas::builtin_personas()
            }
        }
    }

    /// Lists the rubric categories the backend scores against.
    pub async fn scoring_categories(&self) -> Result<Vec<ScoringCategory>> {
        #[derive(serde::Deserialize)]
        struct CategoriesResponse {
            categories: Vec<ScoringCategory>,
        }

        let resp: CategoriesResponse = self
            .get_json("/scoring-categories")
            .await
            .context("list scoring categories")?;
        Ok(resp.categories)
    }

    /// Probes the backend's health endpoint.
    ///
    /// Lives at the server root, outside the `/api` prefix.
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}/health", self.server_root());
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;
        Self::decode(response).await.context("health check")
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL with a trailing `/api` segment stripped, for root endpoints.
    fn server_root(&self) -> &str {
        self.base_url.strip_suffix("/api").unwrap_or(&self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        let mut builder = self.http.post(&url);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = builder
            .send()
            .await
            .with_context(|| format!("POST {url}"))?;
        Self::decode(response).await
    }

    /// Turns a non-2xx response into an error carrying status and body text.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            bail!("server error {status}: {}", summarize_error(status, &detail));
        }
        response.json::<T>().await.context("decode response body")
    }
}

/// Extracts a short human-readable message from an error body.
///
/// FastAPI errors look like `{"detail": "Session not found"}`; anything else
/// is passed through truncated.
fn summarize_error(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
        && let Some(detail) = value.get("detail").and_then(|d| d.as_str())
    {
        return detail.to_string();
    }
    if body.trim().is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string();
    }
    let mut text: String = body.trim().chars().take(200).collect();
    if text.len() < body.trim().len() {
        text.push('…');
    }
    text
}
