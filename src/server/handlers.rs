// HTTP handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;

use crate::errors::EngineError;
use crate::feedback::FeedbackRecord;

use super::types::{
    ErrorResponse, FeedbackRequest, FeedbackResponse, HealthResponse, RecommendRequest,
    RecommendResponse,
};
use super::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/recommend", post(handle_recommend))
        .route("/feedback", post(handle_feedback))
        .with_state(state)
}

async fn handle_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        active_model_version: state.engine.active_artifact().map(|a| a.version),
    })
}

async fn handle_recommend(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.engine.recommend(&request.text) {
        Ok(recommendation) => Ok(Json(recommendation)),
        Err(error) => {
            let status = match error {
                EngineError::InvalidInput => StatusCode::BAD_REQUEST,
                EngineError::ModelUnavailable => StatusCode::SERVICE_UNAVAILABLE,
                EngineError::Feedback(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            Err((
                status,
                Json(ErrorResponse {
                    error: error.to_string(),
                }),
            ))
        }
    }
}

async fn handle_feedback(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, (StatusCode, Json<ErrorResponse>)> {
    let record = FeedbackRecord::new(
        &request.text,
        &request.predicted_label,
        request.confidence,
        request.user_correct_label.as_deref(),
        &request.source,
    );
    match state.feedback.append(&record) {
        Ok(count) => Ok(Json(FeedbackResponse {
            success: true,
            feedback_count: count,
            message: "Feedback saved. Thank you for helping improve recommendations.".to_string(),
        })),
        Err(error) => {
            tracing::error!(error = %error, "failed to append feedback");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "failed to save feedback".to_string(),
                }),
            ))
        }
    }
}
