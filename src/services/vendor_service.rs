// src/services/vendor_service.rs

use serde_json::Value;

use crate::{
    common::{
        error::AppError,
        validation::{ensure_valid, require_fields},
    },
    models::vendor::{Vendor, VENDOR_REQUIRED_FIELDS},
    upstream::{UpstreamResponse, VendorApi},
};

#[derive(Clone)]
pub struct VendorService {
    vendor_api: VendorApi,
}

impl VendorService {
    pub fn new(vendor_api: VendorApi) -> Self {
        Self { vendor_api }
    }

    pub async fn list_vendors(&self) -> Result<UpstreamResponse, AppError> {
        self.vendor_api.list_vendors().await
    }

    // Duas barreiras antes do upstream: as chaves obrigatórias (como a
    // camada de proxy sempre fez) e o validador do formulário.
    // O `Vendor` só serve para validar; o upstream recebe o corpo original.
    pub async fn create_vendor(&self, body: &Value) -> Result<UpstreamResponse, AppError> {
        require_fields(body, &VENDOR_REQUIRED_FIELDS)?;

        let vendor: Vendor = serde_json::from_value(body.clone())
            .map_err(|e| AppError::BadRequest(format!("Invalid vendor payload: {}", e)))?;
        ensure_valid(&vendor)?;

        tracing::info!("🏭 Cadastrando fornecedor '{}'", vendor.name);
        self.vendor_api.create_vendor(body).await
    }

    pub async fn update_vendor(&self, id: &str, body: &Value) -> Result<UpstreamResponse, AppError> {
        self.vendor_api.update_vendor(id, body).await
    }

    pub async fn delete_vendor(&self, id: &str) -> Result<(), AppError> {
        self.vendor_api.delete_vendor(id).await?;
        tracing::info!("Fornecedor {} removido", id);
        Ok(())
    }
}
