// src/handlers/inventory.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    common::error::AppError,
    config::AppState,
    models::inventory::{BulkDeleteQuery, GeneratedSku, Product, StockQuery},
};

// ---
// Categorias
// ---
pub async fn get_all_categories(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    app_state.inventory_service.list_categories().await
}

pub async fn create_category(
    State(app_state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    app_state.inventory_service.create_category(&payload).await
}

// ---
// Mercadorias
// ---
pub async fn get_all_goods(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    app_state.inventory_service.list_goods().await
}

pub async fn create_goods(
    State(app_state): State<AppState>,
    Json(payload): Json<Product>,
) -> Result<impl IntoResponse, AppError> {
    app_state.inventory_service.create_goods(payload).await
}

pub async fn update_goods(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Product>,
) -> Result<impl IntoResponse, AppError> {
    app_state.inventory_service.update_goods(&id, payload).await
}

pub async fn delete_goods(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    app_state.inventory_service.delete_goods(&id).await
}

// DELETE /api/goods?categoryId=...
pub async fn delete_goods_by_category(
    State(app_state): State<AppState>,
    Query(query): Query<BulkDeleteQuery>,
) -> Result<impl IntoResponse, AppError> {
    let result = app_state
        .inventory_service
        .delete_goods_by_category(&query.category_id)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

pub async fn generate_sku(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(GeneratedSku {
        sku: app_state.inventory_service.generate_sku(),
    })
}

// ---
// Telas derivadas
// ---
pub async fn get_stock(
    State(app_state): State<AppState>,
    Query(query): Query<StockQuery>,
) -> Result<impl IntoResponse, AppError> {
    let view = app_state.inventory_service.stock_view(&query).await?;
    Ok((StatusCode::OK, Json(view)))
}

pub async fn get_grouped_stock(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let grouped = app_state.inventory_service.grouped_stock().await?;
    Ok((StatusCode::OK, Json(grouped)))
}
