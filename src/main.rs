//src/main.rs

use axum::{
    http::StatusCode,
    middleware as axum_middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

mod common;
mod config;
mod handlers;
mod middleware;
mod models;
mod services;
mod upstream;

#[cfg(test)]
mod test_support;

use crate::config::AppState;
use crate::middleware::session::page_guard;

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

pub(crate) fn build_router(app_state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout))
        .route("/verify", get(handlers::auth::verify));

    let inventory_routes = Router::new()
        .route(
            "/api/categories",
            get(handlers::inventory::get_all_categories).post(handlers::inventory::create_category),
        )
        .route(
            "/api/goods",
            get(handlers::inventory::get_all_goods)
                .post(handlers::inventory::create_goods)
                .delete(handlers::inventory::delete_goods_by_category),
        )
        .route("/api/goods/sku", get(handlers::inventory::generate_sku))
        .route(
            "/api/goods/{id}",
            put(handlers::inventory::update_goods).delete(handlers::inventory::delete_goods),
        )
        .route("/api/inventory/stock", get(handlers::inventory::get_stock))
        .route("/api/inventory/grouped", get(handlers::inventory::get_grouped_stock));

    let vendor_routes = Router::new()
        .route(
            "/",
            get(handlers::vendors::get_all_vendors).post(handlers::vendors::create_vendor),
        )
        .route(
            "/{id}",
            put(handlers::vendors::update_vendor).delete(handlers::vendors::delete_vendor),
        );

    let issue_routes = Router::new()
        .route(
            "/",
            get(handlers::issue::get_all_issued).post(handlers::issue::issue_goods),
        )
        .route("/draft", post(handlers::issue::draft_issue))
        .route("/history", get(handlers::issue::get_history));

    let mut app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .merge(inventory_routes)
        .nest("/api/vendors", vendor_routes)
        .nest("/api/issue-goods", issue_routes);

    // As páginas do front end (quando houver build estático)
    app = match app_state.config.static_dir.clone() {
        Some(dir) => {
            tracing::info!("📁 Servindo arquivos estáticos de {}", dir.display());
            app.fallback_service(ServeDir::new(dir))
        }
        None => app.fallback(not_found),
    };

    app.layer(axum_middleware::from_fn(page_guard))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let app_state = AppState::new()?;
    let addr = app_state.config.bind_addr.clone();

    let app = build_router(app_state);

    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        tracing::error!("Falha ao iniciar o listener TCP em {}: {}", addr, e);
        e
    })?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
