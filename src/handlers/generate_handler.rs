use actix_web::{get, post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::GenerateRequest};

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[post("/api/generate/mcq")]
async fn generate_mcq(
    state: web::Data<AppState>,
    request: web::Json<GenerateRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .generation_service
        .generate_mcq(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/generate/shortq")]
async fn generate_shortq(
    state: web::Data<AppState>,
    request: web::Json<GenerateRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .generation_service
        .generate_shortq(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/generate/boolq")]
async fn generate_boolq(
    state: web::Data<AppState>,
    request: web::Json<GenerateRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .generation_service
        .generate_boolq(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/generate/paraphrase")]
async fn generate_paraphrases(
    state: web::Data<AppState>,
    request: web::Json<GenerateRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .generation_service
        .generate_paraphrases(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/generate/fill-blanks")]
async fn generate_fill_blanks(
    state: web::Data<AppState>,
    request: web::Json<GenerateRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .generation_service
        .generate_fill_blanks(request.into_inner())?;
    Ok(HttpResponse::Ok().json(response))
}
