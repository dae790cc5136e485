use serde::Serialize;

use crate::models::domain::QuestionRecord;
use crate::pipeline::fill_blanks::FillBlankQuestion;

#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub statement: String,
    pub questions: Vec<QuestionRecord>,
    pub time_taken: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FillBlanksResponse {
    pub questions: Vec<FillBlankQuestion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParaphraseResponse {
    pub paraphrases: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictAnswersResponse {
    pub answers: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictBooleanAnswersResponse {
    pub answers: Vec<bool>,
}
