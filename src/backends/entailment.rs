//! Natural-language-inference model used to derive true/false answers.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EntailmentScores {
    pub entailment_prob: f64,
    pub contradiction_prob: f64,
}

impl EntailmentScores {
    /// The boolean-answer reduction: true when the premise supports the
    /// hypothesis more than it contradicts it.
    pub fn verdict(&self) -> bool {
        self.entailment_prob > self.contradiction_prob
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntailmentModel: Send + Sync {
    async fn predict_entailment(
        &self,
        premise: &str,
        hypothesis: &str,
    ) -> AppResult<EntailmentScores>;
}

#[derive(Serialize)]
struct EntailmentRequestBody<'a> {
    premise: &'a str,
    hypothesis: &'a str,
}

/// HTTP client for an NLI classification service.
pub struct NliHttpModel {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl NliHttpModel {
    pub fn new(base_url: &str, api_key: SecretString) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl EntailmentModel for NliHttpModel {
    async fn predict_entailment(
        &self,
        premise: &str,
        hypothesis: &str,
    ) -> AppResult<EntailmentScores> {
        let url = format!("{}/entailment", self.base_url);
        let scores = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&EntailmentRequestBody {
                premise,
                hypothesis,
            })
            .send()
            .await
            .map_err(|e| AppError::ModelError(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::ModelError(e.to_string()))?
            .json::<EntailmentScores>()
            .await
            .map_err(|e| AppError::ModelError(e.to_string()))?;
        Ok(scores)
    }
}
