// src/test_support.rs
//
// Utilidades só de teste: um upstream falso rodando em porta efêmera e o
// gateway de verdade apontando para ele.

use axum::Router;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use tokio::net::TcpListener;

use crate::config::{AppState, Config};

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Sobe o upstream falso e devolve a URL base.
pub async fn spawn_upstream(router: Router) -> String {
    serve(router).await
}

pub fn test_config(base_url: &str) -> Config {
    Config {
        base_url: base_url.to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        low_stock_threshold: crate::services::pricing::DEFAULT_LOW_STOCK_THRESHOLD,
        secure_cookies: false,
        static_dir: None,
    }
}

/// Sobe o gateway completo contra o upstream dado e devolve a URL base.
pub async fn spawn_app(upstream_base: &str) -> String {
    let state = AppState::from_config(test_config(upstream_base)).unwrap();
    serve(crate::build_router(state)).await
}

/// Cliente que não segue redirects (para testar o portão de sessão).
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

/// Contador de chamadas recebidas pelo upstream falso.
#[derive(Clone, Default)]
pub struct HitCounter(Arc<AtomicUsize>);

impl HitCounter {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
