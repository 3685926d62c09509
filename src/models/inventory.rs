// src/models/inventory.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

use crate::common::{lenient, validation::validate_positive};

// --- 1. Categorias ---
// Dado de referência, só leitura do nosso lado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::trimmed")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryPayload {
    #[serde(default, deserialize_with = "lenient::trimmed")]
    #[validate(length(min = 1, message = "Category name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

// --- 2. Status do produto ---
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
    Discontinued,
}

// --- 3. Produto ---
// Forma canônica única para o formulário de cadastro/edição e para o que
// vem do upstream. `gross_price` nunca é lido de fora: é sempre recalculado.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, deserialize_with = "lenient::id", skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default, deserialize_with = "lenient::trimmed")]
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::trimmed")]
    #[validate(length(min = 1, message = "SKU is required"))]
    pub sku: String,

    #[serde(default, deserialize_with = "lenient::trimmed")]
    pub description: String,

    #[serde(default, deserialize_with = "lenient::id")]
    #[validate(length(min = 1, message = "Category is required"))]
    pub category_id: String,

    #[serde(default, deserialize_with = "lenient::decimal")]
    #[validate(custom(function = "validate_positive", message = "Selling price must be greater than 0"))]
    pub selling_price: Decimal,

    #[serde(default, alias = "buyingPrice", deserialize_with = "lenient::decimal")]
    #[validate(custom(function = "validate_positive", message = "Cost price must be greater than 0"))]
    pub cost_price: Decimal,

    #[serde(default, deserialize_with = "lenient::quantity")]
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: i64,

    #[serde(default, deserialize_with = "lenient::trimmed")]
    pub supplier: String,

    #[serde(default)]
    pub status: ProductStatus,

    #[serde(default, skip_deserializing)]
    pub gross_price: Decimal,
}

// --- 4. Nível de estoque (derivado) ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockLevel {
    OutOfStock,
    LowStock,
    HighStock,
}

// Linha da tela de estoque: produto + campos derivados a cada leitura
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRow {
    #[serde(flatten)]
    pub product: Product,
    pub profit_margin: Decimal,
    pub stock_level: StockLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub total_products: usize,
    pub low_stock_products: usize,
    pub out_of_stock_products: usize,
    pub total_value: Decimal,
}

// Filtro de status da tela de estoque
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockFilter {
    #[default]
    All,
    LowStock,
    OutOfStock,
    HighStock,
    Active,
    Inactive,
    Discontinued,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub status: StockFilter,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockView {
    pub threshold: i64,
    pub summary: InventorySummary,
    pub products: Vec<StockRow>,
}

// --- 5. Agrupamento por categoria ---
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedStock {
    pub groups: BTreeMap<String, CategoryGroup>,
    // Produtos cuja categoria não existe mais (ficam fora de todos os grupos)
    pub unassigned: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteQuery {
    pub category_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteResult {
    pub category_id: String,
    pub deleted: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedSku {
    pub sku: String,
}
