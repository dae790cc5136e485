//! Generation facade: validates inbound requests, runs the pipeline and
//! shapes responses. One instance per process, shared across requests.

use std::sync::Arc;
use std::time::Instant;

use validator::Validate;

use crate::backends::{EntailmentModel, KnowledgeGraph, QuestionModel, SimilarityBackend};
use crate::errors::AppResult;
use crate::models::domain::{QuestionRecord, QuestionType};
use crate::models::dto::{
    FillBlanksResponse, GenerateRequest, GenerateResponse, ParaphraseResponse,
};
use crate::pipeline::assembler::{QuestionAssembler, QuestionKind};
use crate::pipeline::fill_blanks::generate_fill_blanks;
use crate::pipeline::segmenter::segment;

const BOOLEAN_OPTIONS: [&str; 2] = ["True", "False"];

pub struct GenerationService {
    assembler: QuestionAssembler,
    model: Arc<dyn QuestionModel>,
    entailment: Arc<dyn EntailmentModel>,
}

impl GenerationService {
    pub fn new(
        model: Arc<dyn QuestionModel>,
        entailment: Arc<dyn EntailmentModel>,
        similarity: Arc<dyn SimilarityBackend>,
        knowledge_graph: Arc<dyn KnowledgeGraph>,
    ) -> Self {
        let assembler = QuestionAssembler::new(model.clone(), similarity, knowledge_graph);
        Self {
            assembler,
            model,
            entailment,
        }
    }

    pub async fn generate_mcq(&self, request: GenerateRequest) -> AppResult<GenerateResponse> {
        self.generate(request, QuestionKind::Mcq).await
    }

    pub async fn generate_shortq(&self, request: GenerateRequest) -> AppResult<GenerateResponse> {
        self.generate(request, QuestionKind::ShortAnswer).await
    }

    async fn generate(
        &self,
        request: GenerateRequest,
        kind: QuestionKind,
    ) -> AppResult<GenerateResponse> {
        request.validate()?;
        let started = Instant::now();

        let assembled = self
            .assembler
            .assemble(&request.input_text, request.max_questions as usize, kind)
            .await?;

        log::info!(
            "generated {} question(s) in {:.2}s",
            assembled.questions.len(),
            started.elapsed().as_secs_f64()
        );

        Ok(GenerateResponse {
            statement: assembled.statement,
            questions: assembled.questions,
            time_taken: started.elapsed().as_secs_f64(),
        })
    }

    /// Boolean questions: the model phrases a question per selected
    /// sentence, the entailment model decides the answer. Model failures
    /// fail closed with an empty set, like the other kinds.
    pub async fn generate_boolq(&self, request: GenerateRequest) -> AppResult<GenerateResponse> {
        request.validate()?;
        let started = Instant::now();

        let sentences = segment(&request.input_text);
        let statement = sentences.join(" ");

        let mut ranked: Vec<&String> = sentences.iter().collect();
        ranked.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        ranked.truncate(request.max_questions as usize);

        let mut questions = Vec::with_capacity(ranked.len());
        for (index, sentence) in ranked.iter().enumerate() {
            let generated = match self.model.generate_question(&statement, sentence).await {
                Ok(question) => question,
                Err(err) => {
                    log::error!("boolean question model failed, dropping batch: {}", err);
                    questions.clear();
                    break;
                }
            };
            let scores = match self.entailment.predict_entailment(&statement, sentence).await {
                Ok(scores) => scores,
                Err(err) => {
                    log::error!("entailment model failed, dropping batch: {}", err);
                    questions.clear();
                    break;
                }
            };

            let answer = if scores.verdict() {
                BOOLEAN_OPTIONS[0]
            } else {
                BOOLEAN_OPTIONS[1]
            };
            questions.push(QuestionRecord {
                question_statement: generated.trim().to_string(),
                question_type: QuestionType::Boolean,
                answer: answer.to_string(),
                id: index + 1,
                options: BOOLEAN_OPTIONS.iter().map(|s| s.to_string()).collect(),
                extra_options: Vec::new(),
                options_source: String::new(),
                context: sentence.to_string(),
            });
        }

        Ok(GenerateResponse {
            statement,
            questions,
            time_taken: started.elapsed().as_secs_f64(),
        })
    }

    /// Paraphrasing is a direct model call with no pipeline behind it, so
    /// a model failure propagates instead of degrading to an empty batch.
    pub async fn generate_paraphrases(
        &self,
        request: GenerateRequest,
    ) -> AppResult<ParaphraseResponse> {
        request.validate()?;
        let started = Instant::now();

        let count = request.max_questions as usize;
        let mut paraphrases = self.model.paraphrase(&request.input_text, count).await?;
        paraphrases.truncate(count);

        log::info!(
            "generated {} paraphrase(s) in {:.2}s",
            paraphrases.len(),
            started.elapsed().as_secs_f64()
        );

        Ok(ParaphraseResponse { paraphrases })
    }

    pub fn generate_fill_blanks(&self, request: GenerateRequest) -> AppResult<FillBlanksResponse> {
        request.validate()?;
        let questions = generate_fill_blanks(&request.input_text, request.max_questions as usize);
        Ok(FillBlanksResponse { questions })
    }
}
