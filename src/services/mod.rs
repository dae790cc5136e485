pub mod answer_service;
pub mod generation_service;

pub use answer_service::AnswerService;
pub use generation_service::GenerationService;
