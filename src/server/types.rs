// Wire schemas for the HTTP boundary

use serde::{Deserialize, Serialize};

use crate::engine::Recommendation;

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendRequest {
    pub text: String,
    /// Consumed by the sibling shop-recommendation service; accepted and
    /// passed through unused here.
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
}

/// Response body for `/recommend` is the [`Recommendation`] itself; the
/// engine type already serializes to the wire contract.
pub type RecommendResponse = Recommendation;

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRequest {
    pub text: String,
    pub predicted_label: String,
    pub confidence: f64,
    #[serde(default)]
    pub user_correct_label: Option<String>,
    pub source: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResponse {
    pub success: bool,
    pub feedback_count: usize,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub active_model_version: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
