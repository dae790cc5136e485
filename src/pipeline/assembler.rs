//! Question assembly: orchestrates segmentation, candidate selection,
//! context mapping, the external question model and distractor synthesis
//! into finished question records.
//!
//! Error asymmetry is deliberate: a model failure aborts the whole batch
//! and yields an empty result (a missing question is fatal to a record),
//! while a missing distractor set merely degrades one record.

use std::sync::Arc;

use crate::backends::{KnowledgeGraph, QuestionModel, SimilarityBackend};
use crate::errors::AppResult;
use crate::models::domain::{QuestionRecord, QuestionType};
use crate::pipeline::context::map_answers_to_context;
use crate::pipeline::distractors::{pad_options, DistractorSynthesizer, DESIRED_DISTRACTORS};
use crate::pipeline::extractor::identify_keywords;
use crate::pipeline::segmenter::segment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Mcq,
    ShortAnswer,
}

/// Output of one assembly run: the normalized passage plus the records
/// built from it.
pub struct AssembledQuestions {
    pub statement: String,
    pub questions: Vec<QuestionRecord>,
}

pub struct QuestionAssembler {
    model: Arc<dyn QuestionModel>,
    similarity: Arc<dyn SimilarityBackend>,
    synthesizer: DistractorSynthesizer,
}

/// Leading scaffold token emitted by the seq2seq model.
fn strip_scaffold(question: &str) -> String {
    question
        .trim()
        .strip_prefix("question:")
        .unwrap_or(question)
        .trim()
        .to_string()
}

impl QuestionAssembler {
    pub fn new(
        model: Arc<dyn QuestionModel>,
        similarity: Arc<dyn SimilarityBackend>,
        knowledge_graph: Arc<dyn KnowledgeGraph>,
    ) -> Self {
        let synthesizer = DistractorSynthesizer::new(similarity.clone(), knowledge_graph);
        Self {
            model,
            similarity,
            synthesizer,
        }
    }

    pub async fn assemble(
        &self,
        text: &str,
        max_questions: usize,
        kind: QuestionKind,
    ) -> AppResult<AssembledQuestions> {
        let sentences = segment(text);
        let statement = sentences.join(" ");

        if sentences.is_empty() || max_questions == 0 {
            return Ok(AssembledQuestions {
                statement,
                questions: Vec::new(),
            });
        }

        let answers = identify_keywords(
            &statement,
            max_questions,
            sentences.len(),
            &*self.similarity,
        )
        .await;
        let mapping = map_answers_to_context(&answers, &sentences);
        if mapping.is_empty() {
            log::info!("no answer candidates survived extraction");
            return Ok(AssembledQuestions {
                statement,
                questions: Vec::new(),
            });
        }

        let mut questions = Vec::with_capacity(mapping.len());
        for (index, entry) in mapping.iter().enumerate() {
            let generated = match self
                .model
                .generate_question(&entry.context, &entry.answer)
                .await
            {
                Ok(question) => strip_scaffold(&question),
                Err(err) => {
                    // fail closed: a partial batch would be inconsistent
                    log::error!("question model failed, dropping batch: {}", err);
                    return Ok(AssembledQuestions {
                        statement,
                        questions: Vec::new(),
                    });
                }
            };

            let record = match kind {
                QuestionKind::Mcq => {
                    let set = self.synthesizer.synthesize(&entry.answer).await;
                    let mut options: Vec<String> =
                        set.options.iter().take(DESIRED_DISTRACTORS).cloned().collect();
                    let extra_options: Vec<String> =
                        set.options.iter().skip(DESIRED_DISTRACTORS).cloned().collect();
                    pad_options(&entry.answer, &mut options, DESIRED_DISTRACTORS);
                    QuestionRecord {
                        question_statement: generated,
                        question_type: QuestionType::Mcq,
                        answer: entry.answer.clone(),
                        id: index + 1,
                        options,
                        extra_options,
                        options_source: set.source,
                        context: entry.context.clone(),
                    }
                }
                QuestionKind::ShortAnswer => QuestionRecord {
                    question_statement: generated,
                    question_type: QuestionType::Short,
                    answer: entry.answer.clone(),
                    id: index + 1,
                    options: Vec::new(),
                    extra_options: Vec::new(),
                    options_source: String::new(),
                    context: entry.context.clone(),
                },
            };
            questions.push(record);
        }

        Ok(AssembledQuestions {
            statement,
            questions,
        })
    }
}
