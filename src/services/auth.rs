// src/services/auth.rs

use axum::http::StatusCode;

use crate::{
    common::error::AppError,
    models::auth::{LoginUserPayload, UpstreamAuthResponse},
    upstream::AuthApi,
};

// Resultado de um login bem-sucedido: o token vai para o cookie, o usuário para o corpo
#[derive(Debug)]
pub struct AuthSession {
    pub token: String,
    pub user: serde_json::Value,
}

#[derive(Clone)]
pub struct AuthService {
    auth_api: AuthApi,
}

impl AuthService {
    pub fn new(auth_api: AuthApi) -> Self {
        Self { auth_api }
    }

    pub async fn login_user(&self, payload: &LoginUserPayload) -> Result<AuthSession, AppError> {
        let (email, password) = payload.credentials().ok_or_else(|| {
            AppError::BadRequest("Email and password are required".to_string())
        })?;

        let response = self
            .auth_api
            .authenticate(email, password)
            .await
            .map_err(|e| {
                tracing::error!("🔥 Serviço de autenticação inacessível: {}", e);
                AppError::AuthUnavailable
            })?;

        if response.malformed {
            tracing::error!("🔥 Resposta ilegível do serviço de autenticação");
            return Err(AppError::AuthUnavailable);
        }

        let data: UpstreamAuthResponse =
            serde_json::from_value(response.body).unwrap_or_default();

        if !response.status.is_success() {
            return Err(AppError::AuthRejected {
                status: response.status,
                message: data
                    .message
                    .unwrap_or_else(|| "Authentication failed".to_string()),
            });
        }

        let token = data.token.filter(|t| !t.is_empty()).ok_or(AppError::AuthRejected {
            status: StatusCode::BAD_GATEWAY,
            message: "Authentication failed".to_string(),
        })?;

        tracing::info!("🔐 Login autorizado para {}", email);
        Ok(AuthSession {
            token,
            user: data.user,
        })
    }
}
