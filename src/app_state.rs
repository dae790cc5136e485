use std::sync::Arc;
use std::time::Duration;

use crate::{
    backends::{
        ConceptNetClient, EmbeddingHttpBackend, LexicalBackend, NliHttpModel, Seq2SeqHttpModel,
        SimilarityBackend,
    },
    config::{Config, SimilarityBackendKind},
    errors::AppResult,
    services::{AnswerService, GenerationService},
};

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub answer_service: Arc<AnswerService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let similarity: Arc<dyn SimilarityBackend> = match config.similarity_backend {
            SimilarityBackendKind::Embedding => {
                Arc::new(EmbeddingHttpBackend::new(&config.embedding_endpoint))
            }
            SimilarityBackendKind::Lexical => Arc::new(LexicalBackend),
        };
        log::info!("similarity backend: {}", similarity.label());

        let knowledge_graph = Arc::new(ConceptNetClient::new(
            &config.conceptnet_base_url,
            Duration::from_secs(config.conceptnet_timeout_secs),
        )?);
        let model = Arc::new(Seq2SeqHttpModel::new(
            &config.model_endpoint,
            config.model_api_key.clone(),
        ));
        let entailment = Arc::new(NliHttpModel::new(
            &config.model_endpoint,
            config.model_api_key.clone(),
        ));

        let generation_service = Arc::new(GenerationService::new(
            model.clone(),
            entailment.clone(),
            similarity,
            knowledge_graph,
        ));
        let answer_service = Arc::new(AnswerService::new(model, entailment));

        Ok(Self {
            generation_service,
            answer_service,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_builds_from_test_config() {
        let state = AppState::new(Config::test_config());
        assert!(state.is_ok());
    }
}
