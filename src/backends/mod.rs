pub mod entailment;
pub mod knowledge_graph;
pub mod question_model;
pub mod similarity;

pub use entailment::{EntailmentModel, EntailmentScores, NliHttpModel};
pub use knowledge_graph::{ConceptNetClient, KnowledgeGraph, DISTRACTOR_RELATIONS};
pub use question_model::{QuestionModel, Seq2SeqHttpModel};
pub use similarity::{EmbeddingHttpBackend, LexicalBackend, Neighbor, SimilarityBackend};
