// src/upstream/vendor_api.rs

use axum::http::Method;
use serde_json::Value;

use crate::{
    common::error::AppError,
    upstream::client::{UpstreamClient, UpstreamResponse},
};

#[derive(Clone)]
pub struct VendorApi {
    client: UpstreamClient,
}

impl VendorApi {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    pub async fn list_vendors(&self) -> Result<UpstreamResponse, AppError> {
        self.client
            .forward(Method::GET, "/vendors", None, "Failed to fetch vendors")
            .await
    }

    // Criação e edição são repasse puro: o corpo vai como chegou
    pub async fn create_vendor(&self, body: &Value) -> Result<UpstreamResponse, AppError> {
        self.client
            .forward(Method::POST, "/vendors", Some(body), "Failed to create vendor")
            .await
    }

    pub async fn update_vendor(&self, id: &str, body: &Value) -> Result<UpstreamResponse, AppError> {
        self.client
            .forward(
                Method::PUT,
                &format!("/vendors/{}", id),
                Some(body),
                "Failed to update vendor",
            )
            .await
    }

    pub async fn delete_vendor(&self, id: &str) -> Result<UpstreamResponse, AppError> {
        self.client
            .forward(
                Method::DELETE,
                &format!("/vendors/{}", id),
                None,
                "Failed to delete vendor",
            )
            .await
    }
}
