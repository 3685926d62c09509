// src/upstream/auth_api.rs

use axum::http::Method;
use serde_json::json;

use crate::upstream::client::{UpstreamClient, UpstreamResponse};

#[derive(Clone)]
pub struct AuthApi {
    client: UpstreamClient,
}

impl AuthApi {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    // Aqui o status do upstream importa (401, 403...), então devolvemos a resposta crua
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UpstreamResponse, reqwest::Error> {
        let body = json!({ "email": email, "password": password });
        self.client
            .send(Method::POST, "/users/authenticate", Some(&body))
            .await
    }
}
