//! The pretrained sequence-to-sequence question model, invoked as an
//! opaque black box over HTTP. Deterministic given fixed weights; the core
//! never specifies decoding strategy, only that one best string comes back.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionModel: Send + Sync {
    /// Phrase a question whose answer is `answer`, grounded in `context`.
    async fn generate_question(&self, context: &str, answer: &str) -> AppResult<String>;

    /// Answer `question` from `context`.
    async fn answer_question(&self, context: &str, question: &str) -> AppResult<String>;

    /// Rewrite `text` in up to `count` alternative phrasings.
    async fn paraphrase(&self, text: &str, count: usize) -> AppResult<Vec<String>>;
}

#[derive(Serialize)]
struct GenerateRequestBody<'a> {
    context: &'a str,
    answer: &'a str,
}

#[derive(Serialize)]
struct AnswerRequestBody<'a> {
    context: &'a str,
    question: &'a str,
}

#[derive(Serialize)]
struct ParaphraseRequestBody<'a> {
    text: &'a str,
    count: usize,
}

#[derive(Deserialize)]
struct GenerateResponseBody {
    question: String,
}

#[derive(Deserialize)]
struct ParaphraseResponseBody {
    paraphrases: Vec<String>,
}

#[derive(Deserialize)]
struct AnswerResponseBody {
    answer: String,
}

/// HTTP client for a seq2seq inference service.
pub struct Seq2SeqHttpModel {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl Seq2SeqHttpModel {
    pub fn new(base_url: &str, api_key: SecretString) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl QuestionModel for Seq2SeqHttpModel {
    async fn generate_question(&self, context: &str, answer: &str) -> AppResult<String> {
        let url = format!("{}/generate", self.base_url);
        let body = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&GenerateRequestBody { context, answer })
            .send()
            .await
            .map_err(|e| AppError::ModelError(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::ModelError(e.to_string()))?
            .json::<GenerateResponseBody>()
            .await
            .map_err(|e| AppError::ModelError(e.to_string()))?;
        Ok(body.question)
    }

    async fn answer_question(&self, context: &str, question: &str) -> AppResult<String> {
        let url = format!("{}/answer", self.base_url);
        let body = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&AnswerRequestBody { context, question })
            .send()
            .await
            .map_err(|e| AppError::ModelError(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::ModelError(e.to_string()))?
            .json::<AnswerResponseBody>()
            .await
            .map_err(|e| AppError::ModelError(e.to_string()))?;
        Ok(body.answer)
    }

    async fn paraphrase(&self, text: &str, count: usize) -> AppResult<Vec<String>> {
        let url = format!("{}/paraphrase", self.base_url);
        let body = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&ParaphraseRequestBody { text, count })
            .send()
            .await
            .map_err(|e| AppError::ModelError(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::ModelError(e.to_string()))?
            .json::<ParaphraseResponseBody>()
            .await
            .map_err(|e| AppError::ModelError(e.to_string()))?;
        Ok(body.paraphrases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn unreachable_model_yields_model_error() {
        let model = Seq2SeqHttpModel::new(
            "http://127.0.0.1:1",
            SecretString::from("test_key".to_string()),
        );
        let result = model.generate_question("some context", "answer").await;

        assert!(matches!(result, Err(AppError::ModelError(_))));
    }

    #[actix_rt::test]
    async fn mock_model_returns_configured_question() {
        let mut mock = MockQuestionModel::new();
        mock.expect_generate_question()
            .returning(|_, answer| Ok(format!("question: What is {}?", answer)));

        let question = mock.generate_question("ctx", "ATP").await.unwrap();
        assert_eq!(question, "question: What is ATP?");
    }
}
