use actix_web::{post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::PredictAnswersRequest};

#[post("/api/answers/predict")]
async fn predict_answers(
    state: web::Data<AppState>,
    request: web::Json<PredictAnswersRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .answer_service
        .predict_answers(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/answers/boolean")]
async fn predict_boolean_answers(
    state: web::Data<AppState>,
    request: web::Json<PredictAnswersRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .answer_service
        .predict_boolean_answers(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
