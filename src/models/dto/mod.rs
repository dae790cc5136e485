pub mod request;
pub mod response;

pub use request::{GenerateRequest, PredictAnswersRequest};
pub use response::{
    FillBlanksResponse, GenerateResponse, ParaphraseResponse, PredictAnswersResponse,
    PredictBooleanAnswersResponse,
};
