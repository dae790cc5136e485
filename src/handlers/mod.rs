pub mod answer_handler;
pub mod generate_handler;

pub use answer_handler::{predict_answers, predict_boolean_answers};
pub use generate_handler::{
    generate_boolq, generate_fill_blanks, generate_mcq, generate_paraphrases, generate_shortq,
    health_check,
};
