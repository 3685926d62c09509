// src/services/inventory_service.rs

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    common::{error::AppError, validation::ensure_valid},
    models::inventory::{
        BulkDeleteResult, CreateCategoryPayload, GroupedStock, Product, StockQuery, StockView,
    },
    services::{grouping, pricing},
    upstream::{InventoryApi, UpstreamResponse},
};

#[derive(Clone)]
pub struct InventoryService {
    inventory_api: InventoryApi,
    low_stock_threshold: i64,
}

impl InventoryService {
    pub fn new(inventory_api: InventoryApi, low_stock_threshold: i64) -> Self {
        Self {
            inventory_api,
            low_stock_threshold,
        }
    }

    // --- CATEGORIAS ---
    pub async fn list_categories(&self) -> Result<UpstreamResponse, AppError> {
        self.inventory_api.list_categories().await
    }

    pub async fn create_category(&self, body: &Value) -> Result<UpstreamResponse, AppError> {
        let payload: CreateCategoryPayload = serde_json::from_value(body.clone())
            .map_err(|e| AppError::BadRequest(format!("Invalid category payload: {}", e)))?;
        ensure_valid(&payload)?;

        self.inventory_api.create_category(body).await
    }

    // --- MERCADORIAS ---
    pub async fn list_goods(&self) -> Result<UpstreamResponse, AppError> {
        self.inventory_api.list_goods().await
    }

    /// Valida o formulário antes de qualquer chamada de rede e recalcula o
    /// preço bruto (o valor enviado pelo cliente nunca é aproveitado).
    pub async fn create_goods(&self, product: Product) -> Result<UpstreamResponse, AppError> {
        ensure_valid(&product)?;
        let product = pricing::with_gross_price(product);

        tracing::info!("📦 Cadastrando mercadoria '{}' ({})", product.name, product.sku);
        self.inventory_api.create_goods(&product).await
    }

    pub async fn update_goods(
        &self,
        id: &str,
        product: Product,
    ) -> Result<UpstreamResponse, AppError> {
        ensure_valid(&product)?;
        let product = pricing::with_gross_price(product);

        self.inventory_api.update_goods(id, &product).await
    }

    pub async fn delete_goods(&self, id: &str) -> Result<UpstreamResponse, AppError> {
        self.inventory_api.delete_goods(id).await
    }

    // Exclusão em lote: o upstream só sabe apagar um por um.
    // Para na primeira falha; o que já foi apagado continua apagado.
    pub async fn delete_goods_by_category(
        &self,
        category_id: &str,
    ) -> Result<BulkDeleteResult, AppError> {
        let category_id = category_id.trim();
        if category_id.is_empty() {
            return Err(AppError::BadRequest("categoryId is required".to_string()));
        }

        let goods = self.inventory_api.get_all_goods().await?;
        let mut deleted = 0;
        for product in goods.iter().filter(|p| p.category_id == category_id) {
            self.inventory_api.delete_goods(&product.id).await?;
            deleted += 1;
        }

        tracing::info!("🗑️ {} mercadorias removidas da categoria {}", deleted, category_id);
        Ok(BulkDeleteResult {
            category_id: category_id.to_string(),
            deleted,
        })
    }

    pub async fn find_product(&self, id: &str) -> Result<Option<Product>, AppError> {
        let goods = self.inventory_api.get_all_goods().await?;
        Ok(goods.into_iter().find(|p| p.id == id))
    }

    // --- TELAS DERIVADAS ---

    /// Estoque enriquecido (preço bruto, margem, nível) e filtrado.
    /// O resumo considera todos os produtos, não só os filtrados.
    pub async fn stock_view(&self, query: &StockQuery) -> Result<StockView, AppError> {
        let goods = self.inventory_api.get_all_goods().await?;
        let summary = pricing::summarize(&goods, self.low_stock_threshold);

        let rows = goods
            .into_iter()
            .map(|p| pricing::stock_row(p, self.low_stock_threshold))
            .collect();

        Ok(StockView {
            threshold: self.low_stock_threshold,
            summary,
            products: pricing::filter_rows(rows, query),
        })
    }

    /// Categorias e mercadorias são buscadas em paralelo; o agrupamento só
    /// acontece depois que as duas chegam.
    pub async fn grouped_stock(&self) -> Result<GroupedStock, AppError> {
        let (categories, goods) = tokio::try_join!(
            self.inventory_api.get_all_categories(),
            self.inventory_api.get_all_goods(),
        )?;

        let goods: Vec<Product> = goods.into_iter().map(pricing::with_gross_price).collect();
        Ok(grouping::group_by_category(&goods, &categories))
    }

    pub fn generate_sku(&self) -> String {
        let random = Uuid::new_v4().simple().to_string();
        sku_from(Utc::now().timestamp_millis(), &random)
    }
}

/// `PRD-<últimos 6 dígitos do timestamp>-<3 caracteres aleatórios>`
pub fn sku_from(timestamp_millis: i64, random: &str) -> String {
    let digits = timestamp_millis.unsigned_abs().to_string();
    let tail = &digits[digits.len().saturating_sub(6)..];
    let suffix: String = random
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(3)
        .collect::<String>()
        .to_uppercase();
    format!("PRD-{:0>6}-{}", tail, suffix)
}
