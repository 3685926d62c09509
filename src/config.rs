// src/config.rs

use std::{env, path::PathBuf};

use crate::{
    services::{
        auth::AuthService, pricing::DEFAULT_LOW_STOCK_THRESHOLD, InventoryService, IssueService,
        VendorService,
    },
    upstream::{AuthApi, InventoryApi, IssueApi, UpstreamClient, VendorApi},
};

pub const DEFAULT_BASE_URL: &str = "https://inventory-management-dvwp.onrender.com/api/v1";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub bind_addr: String,
    pub low_stock_threshold: i64,
    // Cookie `Secure` só em produção
    pub secure_cookies: bool,
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let low_stock_threshold = match get("LOW_STOCK_THRESHOLD") {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|e| anyhow::anyhow!("LOW_STOCK_THRESHOLD inválido ({}): {}", raw, e))?,
            None => DEFAULT_LOW_STOCK_THRESHOLD,
        };
        if low_stock_threshold < 0 {
            anyhow::bail!("LOW_STOCK_THRESHOLD não pode ser negativo");
        }

        Ok(Self {
            base_url: get("BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            low_stock_threshold,
            secure_cookies: get("APP_ENV").is_some_and(|v| v.eq_ignore_ascii_case("production")),
            static_dir: get("STATIC_DIR").map(PathBuf::from),
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub auth_service: AuthService,
    pub inventory_service: InventoryService,
    pub vendor_service: VendorService,
    pub issue_service: IssueService,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        Self::from_config(Config::from_env()?)
    }

    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        // Sem timeout: uma ida e volta por chamada
        let http = reqwest::Client::builder().build()?;
        let client = UpstreamClient::new(http, config.base_url.clone());

        tracing::info!("✅ Upstream configurado em {}", config.base_url);

        // --- Monta o gráfico de dependências ---
        let inventory_service =
            InventoryService::new(InventoryApi::new(client.clone()), config.low_stock_threshold);
        let issue_service = IssueService::new(IssueApi::new(client.clone()), inventory_service.clone());
        let vendor_service = VendorService::new(VendorApi::new(client.clone()));
        let auth_service = AuthService::new(AuthApi::new(client));

        Ok(Self {
            config,
            auth_service,
            inventory_service,
            vendor_service,
            issue_service,
        })
    }
}
