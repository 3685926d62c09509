// src/handlers/auth.rs

use axum::{extract::State, response::IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::session::{SessionToken, AUTH_COOKIE},
    models::{
        auth::{AuthResponse, LoginUserPayload, VerifyResponse},
        vendor::MessageResponse,
    },
};

// Handler de login: troca as credenciais por um token e guarda o token num cookie http-only
pub async fn login(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    let session = app_state.auth_service.login_user(&payload).await?;

    let cookie = Cookie::build((AUTH_COOKIE, session.token))
        .http_only(true)
        .secure(app_state.config.secure_cookies)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::days(7))
        .path("/");

    Ok((
        jar.add(cookie),
        Json(AuthResponse {
            message: "Authentication successful",
            user: session.user,
        }),
    ))
}

pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (
        jar.remove(Cookie::build(AUTH_COOKIE).path("/")),
        Json(MessageResponse {
            message: "Logged out successfully",
        }),
    )
}

// Só chega aqui quem tem o cookie; o extrator responde 401 para os outros
pub async fn verify(_session: SessionToken) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        authenticated: true,
    })
}

#[cfg(test)]
mod tests {
    use crate::test_support::{http_client, spawn_app, spawn_upstream};
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    fn auth_upstream() -> Router {
        Router::new().route(
            "/users/authenticate",
            post(|Json(body): Json<Value>| async move {
                if body["password"] == "s3cret" {
                    (
                        StatusCode::OK,
                        Json(json!({ "token": "tok-123", "user": { "email": body["email"] } })),
                    )
                } else {
                    (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({ "message": "Invalid credentials" })),
                    )
                }
            }),
        )
    }

    #[tokio::test]
    async fn login_sets_an_http_only_cookie() {
        let upstream = spawn_upstream(auth_upstream()).await;
        let app = spawn_app(&upstream).await;

        let response = http_client()
            .post(format!("{app}/api/auth"))
            .json(&json!({ "email": "ana@shop.test", "password": "s3cret" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let cookie = response
            .headers()
            .get(reqwest::header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .to_string();
        assert!(cookie.starts_with("auth_token=tok-123"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Max-Age=604800"));
        assert!(!cookie.contains("Secure"));

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["message"], "Authentication successful");
        assert_eq!(body["user"]["email"], "ana@shop.test");
        assert!(body.get("token").is_none());
    }

    #[tokio::test]
    async fn rejected_login_keeps_the_upstream_status() {
        let upstream = spawn_upstream(auth_upstream()).await;
        let app = spawn_app(&upstream).await;

        let response = http_client()
            .post(format!("{app}/api/auth"))
            .json(&json!({ "email": "ana@shop.test", "password": "errada" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(reqwest::header::SET_COOKIE).is_none());
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Invalid credentials");
    }

    #[tokio::test]
    async fn missing_password_is_a_400() {
        let app = spawn_app("http://127.0.0.1:9").await;

        let response = http_client()
            .post(format!("{app}/api/auth"))
            .json(&json!({ "email": "ana@shop.test" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Email and password are required");
    }

    #[tokio::test]
    async fn unreachable_auth_service_is_a_500() {
        let app = spawn_app("http://127.0.0.1:9").await;

        let response = http_client()
            .post(format!("{app}/api/auth"))
            .json(&json!({ "email": "ana@shop.test", "password": "s3cret" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn unreadable_auth_reply_is_a_500() {
        let upstream = spawn_upstream(Router::new().route(
            "/users/authenticate",
            post(|| async { "<html>manutenção</html>" }),
        ))
        .await;
        let app = spawn_app(&upstream).await;

        let response = http_client()
            .post(format!("{app}/api/auth"))
            .json(&json!({ "email": "ana@shop.test", "password": "s3cret" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(reqwest::header::SET_COOKIE).is_none());
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn verify_depends_on_the_cookie() {
        let app = spawn_app("http://127.0.0.1:9").await;
        let client = http_client();

        let without = client.get(format!("{app}/api/auth/verify")).send().await.unwrap();
        assert_eq!(without.status(), reqwest::StatusCode::UNAUTHORIZED);

        let with = client
            .get(format!("{app}/api/auth/verify"))
            .header(reqwest::header::COOKIE, "auth_token=tok-123")
            .send()
            .await
            .unwrap();
        assert_eq!(with.status(), reqwest::StatusCode::OK);
        let body: Value = with.json().await.unwrap();
        assert_eq!(body["authenticated"], true);
    }

    #[tokio::test]
    async fn logout_expires_the_cookie() {
        let app = spawn_app("http://127.0.0.1:9").await;

        let response = http_client()
            .post(format!("{app}/api/auth/logout"))
            .header(reqwest::header::COOKIE, "auth_token=tok-123")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let cookie = response
            .headers()
            .get(reqwest::header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .to_string();
        assert!(cookie.starts_with("auth_token="));
        assert!(cookie.contains("Max-Age=0"));

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["message"], "Logged out successfully");
    }
}
