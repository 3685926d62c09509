// src/upstream/client.rs

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::common::error::AppError;

/// Cliente da API de inventário remota. Uma requisição por chamada:
/// sem retry, sem timeout, sem circuit breaker.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Value,
    // O upstream mandou algo que não é JSON
    pub malformed: bool,
}

impl UpstreamResponse {
    /// Mensagem de erro do corpo do upstream, quando houver (`message` ou `error`).
    pub fn error_message(&self) -> Option<String> {
        ["message", "error"]
            .iter()
            .find_map(|key| self.body.get(*key).and_then(Value::as_str))
            .map(str::to_string)
    }
}

// Repasse direto: mesmo status, mesmo corpo
impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

// O upstream às vezes devolve `[...]`, às vezes `{ "data": [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum ListEnvelope<T> {
    Wrapped { data: Vec<T> },
    Bare(Vec<T>),
}

pub fn parse_list<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, serde_json::Error> {
    let envelope: ListEnvelope<T> = serde_json::from_value(body)?;
    Ok(match envelope {
        ListEnvelope::Wrapped { data } => data,
        ListEnvelope::Bare(items) => items,
    })
}

impl UpstreamClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Ida e volta crua. Só falha em erro de transporte; status != 2xx volta como resposta.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<UpstreamResponse, reqwest::Error> {
        let mut request = self.http.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let (body, malformed) = if bytes.is_empty() {
            (Value::Null, false)
        } else {
            match serde_json::from_slice(&bytes) {
                Ok(value) => (value, false),
                Err(_) => (Value::Null, true),
            }
        };

        Ok(UpstreamResponse { status, body, malformed })
    }

    /// Ida e volta de proxy: qualquer falha (rede, status != 2xx, corpo
    /// ilegível) vira `AppError::Upstream` com a mensagem fixa da operação.
    pub async fn forward(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        failure: &'static str,
    ) -> Result<UpstreamResponse, AppError> {
        let response = self
            .send(method.clone(), path, body)
            .await
            .map_err(|e| {
                tracing::error!("🔥 {} {} não completou: {}", method, path, e);
                AppError::upstream(failure, Some(e.to_string()))
            })?;

        if !response.status.is_success() {
            tracing::warn!("Upstream respondeu {} para {} {}", response.status, method, path);
            return Err(AppError::upstream(failure, response.error_message()));
        }

        if response.malformed {
            return Err(AppError::upstream(
                failure,
                Some("Upstream returned a body that is not valid JSON".to_string()),
            ));
        }

        Ok(response)
    }

    /// GET de uma coleção já tipada.
    pub async fn fetch_list<T: DeserializeOwned>(
        &self,
        path: &str,
        failure: &'static str,
    ) -> Result<Vec<T>, AppError> {
        let response = self.forward(Method::GET, path, None, failure).await?;
        parse_list(response.body).map_err(|e| AppError::upstream(failure, Some(e.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn_upstream;
    use axum::{routing::get, Router};
    use serde_json::json;

    #[test]
    fn list_accepts_bare_and_enveloped_bodies() {
        let bare: Vec<u32> = parse_list(json!([1, 2])).unwrap();
        let wrapped: Vec<u32> = parse_list(json!({ "data": [3] })).unwrap();
        assert_eq!(bare, vec![1, 2]);
        assert_eq!(wrapped, vec![3]);
        assert!(parse_list::<u32>(json!({ "items": [] })).is_err());
    }

    #[test]
    fn url_joins_without_double_slashes() {
        let client = UpstreamClient::new(reqwest::Client::new(), "http://api.test/v1/");
        assert_eq!(client.url("/vendors/7"), "http://api.test/v1/vendors/7");
        assert_eq!(client.url("goods"), "http://api.test/v1/goods");
    }

    #[test]
    fn error_message_prefers_message_then_error() {
        let response = UpstreamResponse {
            status: StatusCode::NOT_FOUND,
            body: json!({ "error": "nope" }),
            malformed: false,
        };
        assert_eq!(response.error_message().as_deref(), Some("nope"));
    }

    #[tokio::test]
    async fn forward_maps_non_2xx_to_the_operation_failure() {
        let upstream = Router::new()
            .route("/ok", get(|| async { Json(json!({ "data": [] })) }))
            .route(
                "/missing",
                get(|| async { (StatusCode::NOT_FOUND, Json(json!({ "message": "Not here" }))) }),
            )
            .route("/html", get(|| async { "<html>" }));
        let base = spawn_upstream(upstream).await;
        let client = UpstreamClient::new(reqwest::Client::new(), base);

        let ok = client.forward(Method::GET, "/ok", None, "Failed").await.unwrap();
        assert_eq!(ok.status, StatusCode::OK);

        match client.forward(Method::GET, "/missing", None, "Failed to fetch").await {
            Err(AppError::Upstream { message, details }) => {
                assert_eq!(message, "Failed to fetch");
                assert_eq!(details.as_deref(), Some("Not here"));
            }
            other => panic!("resultado inesperado: {other:?}"),
        }

        assert!(matches!(
            client.forward(Method::GET, "/html", None, "Failed").await,
            Err(AppError::Upstream { .. })
        ));
    }

    #[tokio::test]
    async fn network_failure_is_an_upstream_error() {
        // porta 9 (discard) em localhost: conexão recusada
        let client = UpstreamClient::new(reqwest::Client::new(), "http://127.0.0.1:9");
        let result = client
            .forward(Method::DELETE, "/vendors/1", None, "Failed to delete vendor")
            .await;
        match result {
            Err(AppError::Upstream { message, details }) => {
                assert_eq!(message, "Failed to delete vendor");
                assert!(details.is_some());
            }
            other => panic!("resultado inesperado: {other:?}"),
        }
    }
}
