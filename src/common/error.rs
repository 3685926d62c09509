// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::common::validation::FieldErrors;

#[derive(Debug, Error)]
pub enum AppError {
    // Erros de formulário: nunca chegam ao upstream
    #[error("Erro de validação")]
    ValidationError(FieldErrors),

    #[error("Campos obrigatórios ausentes: {0:?}")]
    MissingFields(Vec<String>),

    #[error("Requisição inválida: {0}")]
    BadRequest(String),

    #[error("Sessão ausente")]
    MissingSession,

    // O upstream respondeu com erro (ou nem respondeu).
    // `message` é a mensagem fixa da operação, `details` o que o upstream disse.
    #[error("{message}")]
    Upstream {
        message: &'static str,
        details: Option<String>,
    },

    // Falha de autenticação repassada com o status original do upstream
    #[error("Falha na autenticação ({status}): {message}")]
    AuthRejected { status: StatusCode, message: String },

    // Serviço de autenticação inacessível ou com resposta ilegível
    #[error("Serviço de autenticação indisponível")]
    AuthUnavailable,

    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    pub fn upstream(message: &'static str, details: Option<String>) -> Self {
        AppError::Upstream { message, details }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(details) => {
                let body = Json(json!({
                    "error": "One or more fields are invalid.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::MissingFields(fields) => (
                StatusCode::BAD_REQUEST,
                format!("Missing required fields: {}", fields.join(", ")),
            ),
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::MissingSession => (
                StatusCode::UNAUTHORIZED,
                "No authentication token found".to_string(),
            ),
            AppError::Upstream { message, details } => {
                tracing::error!("Falha no upstream: {} ({:?})", message, details);
                return ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: message.to_string(),
                    details,
                }
                .into_response();
            }
            AppError::AuthRejected { status, message } => (status, message),
            AppError::AuthUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),

            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

// Erro "pronto" para virar resposta, usado nas falhas do upstream
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn upstream_error_is_a_500_with_details() {
        let response = AppError::upstream(
            "Failed to delete vendor",
            Some("Vendor not found".to_string()),
        )
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to delete vendor");
        assert_eq!(body["details"], "Vendor not found");
    }

    #[tokio::test]
    async fn upstream_error_without_details_omits_the_field() {
        let response = AppError::upstream("Failed to fetch goods", None).into_response();
        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to fetch goods");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn missing_fields_lists_every_key() {
        let response =
            AppError::MissingFields(vec!["name".into(), "zipCode".into()]).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Missing required fields: name, zipCode");
    }

    #[tokio::test]
    async fn validation_error_carries_the_field_map() {
        let mut details = FieldErrors::new();
        details.insert("costPrice".into(), "Cost price must be greater than 0".into());

        let response = AppError::ValidationError(details).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["details"]["costPrice"], "Cost price must be greater than 0");
    }

    #[tokio::test]
    async fn unavailable_auth_service_is_a_plain_500() {
        let response = AppError::AuthUnavailable.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn internal_errors_hide_their_cause() {
        let response = AppError::from(anyhow::anyhow!("segredo")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "An unexpected error occurred.");
    }
}
