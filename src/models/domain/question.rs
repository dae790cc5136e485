use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
pub enum QuestionType {
    #[serde(rename = "MCQ")]
    Mcq,
    Boolean,
    Short,
}

/// One generated question. Created once per selected answer per generation
/// request, immutable after creation, never persisted beyond the response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionRecord {
    pub question_statement: String,
    pub question_type: QuestionType,
    pub answer: String,
    /// 1-based, in assignment order.
    pub id: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_options: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub options_source: String,
    pub context: String,
}
