use std::sync::Arc;

use async_trait::async_trait;

use quizgen_server::{
    backends::{
        EntailmentModel, EntailmentScores, KnowledgeGraph, Neighbor, QuestionModel,
        SimilarityBackend,
    },
    errors::{AppError, AppResult},
    models::domain::QuestionType,
    models::dto::GenerateRequest,
    pipeline::diversity::{filter_distinct, lexical_distance, DISTANCE_THRESHOLD},
    pipeline::extractor::identify_keywords,
    services::GenerationService,
};

const PASSAGE: &str = "Mitochondria are the powerhouse of the cell. \
    They produce ATP through oxidative phosphorylation. \
    The inner membrane contains the electron transport chain.";

struct TemplateModel;

#[async_trait]
impl QuestionModel for TemplateModel {
    async fn generate_question(&self, _context: &str, answer: &str) -> AppResult<String> {
        Ok(format!("question: What is {}?", answer))
    }

    async fn answer_question(&self, _context: &str, _question: &str) -> AppResult<String> {
        Ok("the mitochondria".to_string())
    }

    async fn paraphrase(&self, text: &str, count: usize) -> AppResult<Vec<String>> {
        Ok((0..count)
            .map(|i| format!("Restatement {} of: {}", i + 1, text))
            .collect())
    }
}

struct DownModel;

#[async_trait]
impl QuestionModel for DownModel {
    async fn generate_question(&self, _context: &str, _answer: &str) -> AppResult<String> {
        Err(AppError::ModelError("inference service unreachable".into()))
    }

    async fn answer_question(&self, _context: &str, _question: &str) -> AppResult<String> {
        Err(AppError::ModelError("inference service unreachable".into()))
    }

    async fn paraphrase(&self, _text: &str, _count: usize) -> AppResult<Vec<String>> {
        Err(AppError::ModelError("inference service unreachable".into()))
    }
}

struct AlwaysTrueEntailment;

#[async_trait]
impl EntailmentModel for AlwaysTrueEntailment {
    async fn predict_entailment(
        &self,
        _premise: &str,
        _hypothesis: &str,
    ) -> AppResult<EntailmentScores> {
        Ok(EntailmentScores {
            entailment_prob: 0.9,
            contradiction_prob: 0.05,
        })
    }
}

/// Echoes the query term back among its neighbors, which a correct
/// distractor stage must filter out.
struct EchoingSimilarity;

#[async_trait]
impl SimilarityBackend for EchoingSimilarity {
    fn label(&self) -> &'static str {
        "sense2vec"
    }

    async fn nearest_neighbors(&self, term: &str, _n: usize) -> AppResult<Vec<Neighbor>> {
        Ok(vec![
            Neighbor {
                term: term.to_string(),
                score: 1.0,
            },
            Neighbor {
                term: "chloroplast".to_string(),
                score: 0.9,
            },
            Neighbor {
                term: "golgi apparatus".to_string(),
                score: 0.8,
            },
            Neighbor {
                term: "ribosome".to_string(),
                score: 0.7,
            },
        ])
    }

    async fn is_representable(&self, _term: &str) -> bool {
        true
    }
}

/// Rejects every term at the availability gate.
struct RejectingSimilarity;

#[async_trait]
impl SimilarityBackend for RejectingSimilarity {
    fn label(&self) -> &'static str {
        "sense2vec"
    }

    async fn nearest_neighbors(&self, _term: &str, _n: usize) -> AppResult<Vec<Neighbor>> {
        Ok(Vec::new())
    }

    async fn is_representable(&self, _term: &str) -> bool {
        false
    }
}

struct FailingSimilarity;

#[async_trait]
impl SimilarityBackend for FailingSimilarity {
    fn label(&self) -> &'static str {
        "sense2vec"
    }

    async fn nearest_neighbors(&self, _term: &str, _n: usize) -> AppResult<Vec<Neighbor>> {
        Err(AppError::BackendError("embedding service unreachable".into()))
    }

    async fn is_representable(&self, _term: &str) -> bool {
        true
    }
}

struct OfflineGraph;

#[async_trait]
impl KnowledgeGraph for OfflineGraph {
    async fn related_concepts(&self, _term: &str, _relations: &[&str]) -> AppResult<Vec<String>> {
        Err(AppError::BackendError("knowledge graph unreachable".into()))
    }
}

fn request(count: i32) -> GenerateRequest {
    GenerateRequest {
        input_text: PASSAGE.to_string(),
        max_questions: count,
    }
}

fn service(similarity: Arc<dyn SimilarityBackend>) -> GenerationService {
    GenerationService::new(
        Arc::new(TemplateModel),
        Arc::new(AlwaysTrueEntailment),
        similarity,
        Arc::new(OfflineGraph),
    )
}

#[actix_rt::test]
async fn mcq_generation_end_to_end() {
    let service = service(Arc::new(EchoingSimilarity));
    let response = service.generate_mcq(request(2)).await.unwrap();

    assert_eq!(response.questions.len(), 2);
    assert!(response.statement.contains("powerhouse"));

    for record in &response.questions {
        assert_eq!(record.question_type, QuestionType::Mcq);
        assert!(!record.question_statement.is_empty());
        assert_eq!(record.options.len(), 3);
        // the passage sentence holding the answer must be in the context
        assert!(record
            .context
            .to_lowercase()
            .contains(&record.answer.to_lowercase()));
    }
}

#[actix_rt::test]
async fn distractors_never_include_the_answer() {
    let service = service(Arc::new(EchoingSimilarity));
    let response = service.generate_mcq(request(3)).await.unwrap();

    assert!(!response.questions.is_empty());
    for record in &response.questions {
        for option in record.options.iter().chain(record.extra_options.iter()) {
            assert!(
                !option.eq_ignore_ascii_case(&record.answer),
                "answer '{}' leaked into its own options",
                record.answer
            );
        }
    }
}

#[actix_rt::test]
async fn failing_backends_degrade_instead_of_erroring() {
    let service = service(Arc::new(FailingSimilarity));
    let response = service.generate_mcq(request(2)).await.unwrap();

    // network strategies failed; records still come out via the
    // rule-based fallback and padding
    assert!(!response.questions.is_empty());
    for record in &response.questions {
        assert_eq!(record.options.len(), 3);
    }
}

#[actix_rt::test]
async fn model_outage_yields_empty_batch_not_an_error() {
    let service = GenerationService::new(
        Arc::new(DownModel),
        Arc::new(AlwaysTrueEntailment),
        Arc::new(EchoingSimilarity),
        Arc::new(OfflineGraph),
    );

    let response = service.generate_mcq(request(2)).await.unwrap();
    assert!(response.questions.is_empty());
    assert!(!response.statement.is_empty());
}

#[actix_rt::test]
async fn rejecting_availability_gate_still_yields_keywords() {
    let backend = RejectingSimilarity;
    let keywords = identify_keywords(PASSAGE, 3, 3, &backend).await;

    assert!(!keywords.is_empty());
    assert!(keywords.len() <= 3);
}

#[actix_rt::test]
async fn shortq_records_have_no_options() {
    let service = service(Arc::new(EchoingSimilarity));
    let response = service.generate_shortq(request(2)).await.unwrap();

    assert!(!response.questions.is_empty());
    for record in &response.questions {
        assert_eq!(record.question_type, QuestionType::Short);
        assert!(record.options.is_empty());
        assert!(record.extra_options.is_empty());
    }
}

#[actix_rt::test]
async fn paraphrase_generation_end_to_end() {
    let service = service(Arc::new(EchoingSimilarity));
    let response = service.generate_paraphrases(request(2)).await.unwrap();

    assert_eq!(response.paraphrases.len(), 2);
    assert!(response.paraphrases[0].contains("powerhouse"));
}

#[actix_rt::test]
async fn boolq_generation_uses_entailment_verdicts() {
    let service = service(Arc::new(EchoingSimilarity));
    let response = service.generate_boolq(request(2)).await.unwrap();

    assert_eq!(response.questions.len(), 2);
    for record in &response.questions {
        assert_eq!(record.question_type, QuestionType::Boolean);
        assert_eq!(record.answer, "True");
        assert_eq!(record.options, vec!["True", "False"]);
    }
}

#[test]
fn surviving_candidates_are_pairwise_distant() {
    let candidates = vec![
        "mitochondria".to_string(),
        "mitochondrion".to_string(),
        "oxidative phosphorylation".to_string(),
        "electron transport chain".to_string(),
    ];

    let kept = filter_distinct(&candidates, 4);
    for (i, a) in kept.iter().enumerate() {
        for b in kept.iter().skip(i + 1) {
            assert!(
                lexical_distance(a, b) >= DISTANCE_THRESHOLD,
                "'{}' and '{}' are too similar to coexist",
                a,
                b
            );
        }
    }
}

#[test]
fn zero_requested_candidates_yields_nothing() {
    let candidates = vec!["mitochondria".to_string(), "ribosome".to_string()];
    assert!(filter_distinct(&candidates, 0).is_empty());
}
