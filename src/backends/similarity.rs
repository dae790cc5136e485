//! Semantic-similarity backends. The pipeline only depends on the
//! capability set `{nearest_neighbors, is_representable}`; the concrete
//! backend is chosen by configuration at startup, never by runtime type
//! inspection.

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::AppResult;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Neighbor {
    pub term: String,
    pub score: f64,
}

#[async_trait]
pub trait SimilarityBackend: Send + Sync {
    /// Tag emitted on question records whose distractors came from this
    /// backend.
    fn label(&self) -> &'static str;

    /// Top-n nearest neighbors to `term` in the backend's semantic space.
    async fn nearest_neighbors(&self, term: &str, n: usize) -> AppResult<Vec<Neighbor>>;

    /// Whether the backend can produce a valid representation for `term`.
    /// Used as a pre-check before distractor generation; failures degrade
    /// to `false` rather than erroring.
    async fn is_representable(&self, term: &str) -> bool;
}

/// Embedding vectors served over HTTP by a sense2vec-style vector service.
pub struct EmbeddingHttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl EmbeddingHttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl SimilarityBackend for EmbeddingHttpBackend {
    fn label(&self) -> &'static str {
        "sense2vec"
    }

    async fn nearest_neighbors(&self, term: &str, n: usize) -> AppResult<Vec<Neighbor>> {
        let url = format!("{}/neighbors", self.base_url);
        let neighbors = self
            .client
            .get(&url)
            .query(&[("term", term), ("n", &n.to_string())])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Neighbor>>()
            .await?;
        Ok(neighbors)
    }

    async fn is_representable(&self, term: &str) -> bool {
        let url = format!("{}/senses/best", self.base_url);
        match self
            .client
            .get(&url)
            .query(&[("term", term)])
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                log::warn!("availability check failed for '{}': {}", term, err);
                false
            }
        }
    }
}

/// Degraded local backend: validates terms lexically and never produces
/// neighbors, forcing the distractor chain onto its later strategies. Keeps
/// the service functional when no embedding service is deployed.
pub struct LexicalBackend;

#[async_trait]
impl SimilarityBackend for LexicalBackend {
    fn label(&self) -> &'static str {
        "lexical"
    }

    async fn nearest_neighbors(&self, _term: &str, _n: usize) -> AppResult<Vec<Neighbor>> {
        Ok(Vec::new())
    }

    async fn is_representable(&self, term: &str) -> bool {
        term.chars().any(|c| c.is_alphabetic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn lexical_backend_accepts_words_and_rejects_punctuation() {
        let backend = LexicalBackend;

        assert!(backend.is_representable("mitochondria").await);
        assert!(backend.is_representable("electron transport chain").await);
        assert!(!backend.is_representable("...").await);
        assert!(!backend.is_representable("42").await);
    }

    #[actix_rt::test]
    async fn lexical_backend_yields_no_neighbors() {
        let backend = LexicalBackend;
        let neighbors = backend.nearest_neighbors("cell", 5).await.unwrap();
        assert!(neighbors.is_empty());
    }

    #[test]
    fn embedding_backend_normalizes_base_url() {
        let backend = EmbeddingHttpBackend::new("http://localhost:9001/");
        assert_eq!(backend.base_url, "http://localhost:9001");
    }
}
