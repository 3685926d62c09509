// src/middleware/session.rs

use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::common::error::AppError;

pub const AUTH_COOKIE: &str = "auth_token";
pub const LOGIN_PATH: &str = "/login";
pub const HOME_AFTER_LOGIN: &str = "/view-vendors";

// Portão das páginas: sem cookie, tudo (menos "/" e "/login") volta para o login.
// As rotas /api ficam de fora; quem cuida delas são os próprios handlers.
pub async fn page_guard(jar: CookieJar, request: Request, next: Next) -> Response {
    let path = request.uri().path();
    let has_session = jar.get(AUTH_COOKIE).is_some();

    if path == "/api" || path.starts_with("/api/") {
        return next.run(request).await;
    }

    if path == LOGIN_PATH {
        if has_session {
            return Redirect::temporary(HOME_AFTER_LOGIN).into_response();
        }
        return next.run(request).await;
    }

    if path != "/" && !has_session {
        tracing::debug!("Sem sessão em {}, redirecionando para o login", path);
        return Redirect::temporary(LOGIN_PATH).into_response();
    }

    next.run(request).await
}

// Extrator: o token de sessão presente no cookie
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::MissingSession)?;

        jar.get(AUTH_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|token| !token.is_empty())
            .map(SessionToken)
            .ok_or(AppError::MissingSession)
    }
}
