// src/models/auth.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

// Credenciais vindas da tela de login
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoginUserPayload {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginUserPayload {
    /// Retorna (email, senha) somente se os dois vierem preenchidos.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.email.as_deref(), self.password.as_deref()) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Some((email, password))
            }
            _ => None,
        }
    }
}

// Resposta do upstream em /users/authenticate
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamAuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Value,
    #[serde(default)]
    pub message: Option<String>,
}

// Resposta para o front end (o token vai só no cookie)
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: &'static str,
    pub user: Value,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub authenticated: bool,
}
