// src/handlers/vendors.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{common::error::AppError, config::AppState, models::vendor::MessageResponse};

pub async fn get_all_vendors(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    app_state.vendor_service.list_vendors().await
}

pub async fn create_vendor(
    State(app_state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    app_state.vendor_service.create_vendor(&payload).await
}

pub async fn update_vendor(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    app_state.vendor_service.update_vendor(&id, &payload).await
}

pub async fn delete_vendor(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    app_state.vendor_service.delete_vendor(&id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Vendor deleted successfully",
        }),
    ))
}
