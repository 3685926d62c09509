// src/upstream/inventory_api.rs

use axum::http::Method;
use serde_json::Value;

use crate::{
    common::error::AppError,
    models::inventory::{Category, Product},
    upstream::client::{UpstreamClient, UpstreamResponse},
};

// Categorias e mercadorias (goods) no upstream
#[derive(Clone)]
pub struct InventoryApi {
    client: UpstreamClient,
}

impl InventoryApi {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    // ---
    // Categorias
    // ---

    pub async fn list_categories(&self) -> Result<UpstreamResponse, AppError> {
        self.client
            .forward(Method::GET, "/categories", None, "Failed to fetch categories")
            .await
    }

    pub async fn get_all_categories(&self) -> Result<Vec<Category>, AppError> {
        self.client
            .fetch_list("/categories", "Failed to fetch categories")
            .await
    }

    pub async fn create_category(&self, body: &Value) -> Result<UpstreamResponse, AppError> {
        self.client
            .forward(Method::POST, "/categories", Some(body), "Failed to create category")
            .await
    }

    // ---
    // Mercadorias
    // ---

    pub async fn list_goods(&self) -> Result<UpstreamResponse, AppError> {
        self.client
            .forward(Method::GET, "/goods", None, "Failed to fetch goods")
            .await
    }

    pub async fn get_all_goods(&self) -> Result<Vec<Product>, AppError> {
        self.client.fetch_list("/goods", "Failed to fetch goods").await
    }

    pub async fn create_goods(&self, product: &Product) -> Result<UpstreamResponse, AppError> {
        let body = to_body(product, "Failed to create goods")?;
        self.client
            .forward(Method::POST, "/goods", Some(&body), "Failed to create goods")
            .await
    }

    pub async fn update_goods(
        &self,
        id: &str,
        product: &Product,
    ) -> Result<UpstreamResponse, AppError> {
        let body = to_body(product, "Failed to update goods")?;
        self.client
            .forward(
                Method::PUT,
                &format!("/goods/{}", id),
                Some(&body),
                "Failed to update goods",
            )
            .await
    }

    pub async fn delete_goods(&self, id: &str) -> Result<UpstreamResponse, AppError> {
        self.client
            .forward(
                Method::DELETE,
                &format!("/goods/{}", id),
                None,
                "Failed to delete goods",
            )
            .await
    }
}

fn to_body(product: &Product, failure: &'static str) -> Result<Value, AppError> {
    serde_json::to_value(product).map_err(|e| AppError::upstream(failure, Some(e.to_string())))
}
