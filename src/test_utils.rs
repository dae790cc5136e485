use crate::models::dto::GenerateRequest;

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// A short factual passage with three sentences long enough to survive
    /// segmentation.
    pub fn cell_passage() -> &'static str {
        "Mitochondria are the powerhouse of the cell. \
         They produce ATP through oxidative phosphorylation. \
         The inner membrane contains the electron transport chain."
    }

    pub fn generate_request(count: i32) -> GenerateRequest {
        GenerateRequest {
            input_text: cell_passage().to_string(),
            max_questions: count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_cell_passage_segments_cleanly() {
        let sentences = crate::pipeline::segmenter::segment(cell_passage());
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn test_fixtures_generate_request() {
        let request = generate_request(4);
        assert_eq!(request.max_questions, 4);
        assert!(!request.input_text.is_empty());
    }
}
