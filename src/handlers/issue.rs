// src/handlers/issue.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    common::error::AppError,
    config::AppState,
    models::issue::{HistoryQuery, IssueForm},
};

pub async fn get_all_issued(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    app_state.issue_service.list_issued().await
}

pub async fn issue_goods(
    State(app_state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    app_state.issue_service.issue_goods(&payload).await
}

// POST /api/issue-goods/draft
pub async fn draft_issue(
    State(app_state): State<AppState>,
    Json(form): Json<IssueForm>,
) -> Result<impl IntoResponse, AppError> {
    let draft = app_state.issue_service.draft_issue(form).await?;
    Ok((StatusCode::OK, Json(draft)))
}

pub async fn get_history(
    State(app_state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<impl IntoResponse, AppError> {
    let history = app_state.issue_service.history(&query).await?;
    Ok((StatusCode::OK, Json(history)))
}
