//! Answer prediction: answers free-form questions from a passage via the
//! seq2seq model, and true/false questions via the entailment model.

use std::sync::Arc;

use validator::Validate;

use crate::backends::{EntailmentModel, QuestionModel};
use crate::errors::AppResult;
use crate::models::dto::{
    PredictAnswersRequest, PredictAnswersResponse, PredictBooleanAnswersResponse,
};

pub struct AnswerService {
    model: Arc<dyn QuestionModel>,
    entailment: Arc<dyn EntailmentModel>,
}

fn capitalize(answer: &str) -> String {
    let trimmed = answer.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

impl AnswerService {
    pub fn new(model: Arc<dyn QuestionModel>, entailment: Arc<dyn EntailmentModel>) -> Self {
        Self { model, entailment }
    }

    pub async fn predict_answers(
        &self,
        request: PredictAnswersRequest,
    ) -> AppResult<PredictAnswersResponse> {
        request.validate()?;

        let mut answers = Vec::with_capacity(request.input_question.len());
        for question in &request.input_question {
            let answer = self
                .model
                .answer_question(&request.input_text, question)
                .await?;
            answers.push(capitalize(&answer));
        }
        Ok(PredictAnswersResponse { answers })
    }

    pub async fn predict_boolean_answers(
        &self,
        request: PredictAnswersRequest,
    ) -> AppResult<PredictBooleanAnswersResponse> {
        request.validate()?;

        let mut answers = Vec::with_capacity(request.input_question.len());
        for question in &request.input_question {
            let scores = self
                .entailment
                .predict_entailment(&request.input_text, question)
                .await?;
            answers.push(scores.verdict());
        }
        Ok(PredictBooleanAnswersResponse { answers })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::backends::entailment::MockEntailmentModel;
    use crate::backends::question_model::MockQuestionModel;
    use crate::backends::EntailmentScores;
    use crate::errors::AppError;

    fn request(questions: &[&str]) -> PredictAnswersRequest {
        PredictAnswersRequest {
            input_text: "Mitochondria are the powerhouse of the cell.".to_string(),
            input_question: questions.iter().map(|q| q.to_string()).collect(),
        }
    }

    #[actix_rt::test]
    async fn answers_are_capitalized() {
        let mut model = MockQuestionModel::new();
        model
            .expect_answer_question()
            .returning(|_, _| Ok("the mitochondria".to_string()));

        let service = AnswerService::new(Arc::new(model), Arc::new(MockEntailmentModel::new()));
        let response = service
            .predict_answers(request(&["What is the powerhouse of the cell?"]))
            .await
            .unwrap();

        assert_eq!(response.answers, vec!["The mitochondria"]);
    }

    #[actix_rt::test]
    async fn boolean_answers_follow_entailment() {
        let mut entailment = MockEntailmentModel::new();
        entailment.expect_predict_entailment().returning(|_, _| {
            Ok(EntailmentScores {
                entailment_prob: 0.1,
                contradiction_prob: 0.8,
            })
        });

        let service = AnswerService::new(
            Arc::new(MockQuestionModel::new()),
            Arc::new(entailment),
        );
        let response = service
            .predict_boolean_answers(request(&["Mitochondria produce light."]))
            .await
            .unwrap();

        assert_eq!(response.answers, vec![false]);
    }

    #[actix_rt::test]
    async fn empty_question_list_is_rejected() {
        let service = AnswerService::new(
            Arc::new(MockQuestionModel::new()),
            Arc::new(MockEntailmentModel::new()),
        );

        let err = service.predict_answers(request(&[])).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
