use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use scholarship::error::AppError;
use scholarship::roster::{RankedApplicant, RosterImporter};
use scholarship::scoring::{calculate, ScoreInput, ScoreResult};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;

/// Response envelope shared with the portal's other backend endpoints.
#[derive(Debug, Serialize)]
pub(crate) struct ApiEnvelope<T> {
    pub(crate) success: bool,
    pub(crate) data: T,
    pub(crate) message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CalculateScoreRequest {
    pub(crate) gpa: f64,
    pub(crate) family_income: f64,
    pub(crate) activity_count: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RankRosterRequest {
    pub(crate) csv: String,
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/student/calculate-score", post(calculate_score_endpoint))
        .route("/student/rank-roster", post(rank_roster_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn calculate_score_endpoint(
    Json(payload): Json<CalculateScoreRequest>,
) -> Json<ApiEnvelope<ScoreResult>> {
    let CalculateScoreRequest {
        gpa,
        family_income,
        activity_count,
    } = payload;

    let result = calculate(&ScoreInput {
        gpa,
        family_income,
        activity_count,
    });

    Json(ApiEnvelope {
        success: true,
        data: result,
        message: "คำนวณคะแนนความสำคัญเรียบร้อยแล้ว".to_string(),
    })
}

pub(crate) async fn rank_roster_endpoint(
    Json(payload): Json<RankRosterRequest>,
) -> Result<Json<ApiEnvelope<Vec<RankedApplicant>>>, AppError> {
    let RankRosterRequest { csv, limit } = payload;

    let roster = RosterImporter::from_reader(Cursor::new(csv.into_bytes()))?;
    let ranked = roster.rank(limit);

    let message = format!("จัดอันดับผู้สมัครแล้ว {} ราย", ranked.len());
    Ok(Json(ApiEnvelope {
        success: true,
        data: ranked,
        message,
    }))
}
