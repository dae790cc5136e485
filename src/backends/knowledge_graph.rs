//! Knowledge-graph lookups for distractor candidates. ConceptNet is the
//! production implementation; the trait exists so tests can substitute a
//! static double.

use std::time::Duration;

use async_trait::async_trait;

use crate::errors::{AppError, AppResult};

/// Concept relations queried when collecting distractor candidates.
pub const DISTRACTOR_RELATIONS: &[&str] = &["RelatedTo", "IsA", "PartOf", "HasA"];

#[async_trait]
pub trait KnowledgeGraph: Send + Sync {
    /// Labels of concepts related to `term` through any of `relations`.
    /// Connectivity and decode failures surface as errors here and are
    /// absorbed into a strategy-level fallthrough by the caller.
    async fn related_concepts(&self, term: &str, relations: &[&str]) -> AppResult<Vec<String>>;
}

pub struct ConceptNetClient {
    client: reqwest::Client,
    base_url: String,
}

impl ConceptNetClient {
    /// `timeout` bounds every request so a stalled lookup degrades one
    /// strategy instead of the whole generation request.
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP client build failed: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl KnowledgeGraph for ConceptNetClient {
    async fn related_concepts(&self, term: &str, relations: &[&str]) -> AppResult<Vec<String>> {
        let node = format!("/c/en/{}", term.trim().to_lowercase().replace(' ', "_"));
        let url = format!("{}/query", self.base_url);
        let body = self
            .client
            .get(&url)
            .query(&[("node", node.as_str()), ("limit", "30")])
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        let edges = body
            .get("edges")
            .and_then(|e| e.as_array())
            .ok_or_else(|| AppError::BackendError("malformed ConceptNet response".into()))?;

        let mut concepts = Vec::new();
        for edge in edges {
            let rel = edge
                .pointer("/rel/label")
                .and_then(|v| v.as_str())
                .unwrap_or_default();
            if !relations.is_empty() && !relations.contains(&rel) {
                continue;
            }
            let start = edge
                .pointer("/start/label")
                .and_then(|v| v.as_str())
                .unwrap_or_default();
            let end = edge
                .pointer("/end/label")
                .and_then(|v| v.as_str())
                .unwrap_or_default();
            if start.eq_ignore_ascii_case(term) && !end.is_empty() {
                concepts.push(end.to_string());
            }
        }

        Ok(concepts)
    }
}
