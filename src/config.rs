use secrecy::SecretString;
use std::env;

/// Which semantic-similarity backend serves nearest-neighbor lookups and
/// the availability pre-check for distractor generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimilarityBackendKind {
    /// Embedding vectors served over HTTP (sense2vec-style service).
    Embedding,
    /// Degraded local fallback with no network dependency.
    Lexical,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub model_endpoint: String,
    pub model_api_key: SecretString,
    pub embedding_endpoint: String,
    pub similarity_backend: SimilarityBackendKind,
    pub conceptnet_base_url: String,
    pub conceptnet_timeout_secs: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            model_endpoint: env::var("MODEL_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:9000".to_string()),
            model_api_key: SecretString::from(
                env::var("MODEL_API_KEY").unwrap_or_else(|_| "dev_model_key".to_string()),
            ),
            embedding_endpoint: env::var("EMBEDDING_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:9001".to_string()),
            similarity_backend: match env::var("SIMILARITY_BACKEND").as_deref() {
                Ok("lexical") => SimilarityBackendKind::Lexical,
                _ => SimilarityBackendKind::Embedding,
            },
            conceptnet_base_url: env::var("CONCEPTNET_BASE_URL")
                .unwrap_or_else(|_| "http://api.conceptnet.io".to_string()),
            conceptnet_timeout_secs: env::var("CONCEPTNET_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            model_endpoint: "http://localhost:9000".to_string(),
            model_api_key: SecretString::from("test_model_key".to_string()),
            embedding_endpoint: "http://localhost:9001".to_string(),
            similarity_backend: SimilarityBackendKind::Lexical,
            conceptnet_base_url: "http://localhost:9002".to_string(),
            conceptnet_timeout_secs: 1,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
