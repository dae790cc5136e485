use serde::Deserialize;
use validator::Validate;

fn default_max_questions() -> i32 {
    4
}

/// Body shared by the MCQ, short-answer, boolean and fill-blank routes.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateRequest {
    #[validate(length(min = 1, message = "input_text must not be empty"))]
    pub input_text: String,
    #[serde(default = "default_max_questions")]
    #[validate(range(min = 1, message = "max_questions must be positive"))]
    pub max_questions: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PredictAnswersRequest {
    #[validate(length(min = 1, message = "input_text must not be empty"))]
    pub input_text: String,
    #[validate(length(min = 1, message = "at least one question is required"))]
    pub input_question: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_questions_defaults_to_four() {
        let request: GenerateRequest =
            serde_json::from_str(r#"{"input_text": "some text"}"#).unwrap();
        assert_eq!(request.max_questions, 4);
    }

    #[test]
    fn empty_text_fails_validation() {
        let request: GenerateRequest =
            serde_json::from_str(r#"{"input_text": "", "max_questions": 2}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn non_positive_count_fails_validation() {
        let request: GenerateRequest =
            serde_json::from_str(r#"{"input_text": "text", "max_questions": 0}"#).unwrap();
        assert!(request.validate().is_err());

        let request: GenerateRequest =
            serde_json::from_str(r#"{"input_text": "text", "max_questions": -3}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn answer_request_needs_at_least_one_question() {
        let request: PredictAnswersRequest =
            serde_json::from_str(r#"{"input_text": "text", "input_question": []}"#).unwrap();
        assert!(request.validate().is_err());
    }
}
