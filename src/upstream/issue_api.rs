// src/upstream/issue_api.rs

use axum::http::Method;
use serde_json::Value;

use crate::{
    common::error::AppError,
    models::issue::IssuedGood,
    upstream::client::{UpstreamClient, UpstreamResponse},
};

#[derive(Clone)]
pub struct IssueApi {
    client: UpstreamClient,
}

impl IssueApi {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    pub async fn list_issued(&self) -> Result<UpstreamResponse, AppError> {
        self.client
            .forward(Method::GET, "/issue-goods", None, "Failed to fetch issued goods")
            .await
    }

    pub async fn get_all_issued(&self) -> Result<Vec<IssuedGood>, AppError> {
        self.client
            .fetch_list("/issue-goods", "Failed to fetch issued goods")
            .await
    }

    pub async fn issue_goods(&self, body: &Value) -> Result<UpstreamResponse, AppError> {
        self.client
            .forward(Method::POST, "/issue-goods", Some(body), "Failed to issue goods")
            .await
    }
}
