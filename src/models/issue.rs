// src/models/issue.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::lenient;

pub const ISSUE_REQUIRED_FIELDS: [&str; 6] = [
    "productId",
    "quantity",
    "categoryId",
    "sellingPrice",
    "grossPrice",
    "vendorId",
];

// --- Saída de mercadoria (a "nota" da tela de contas) ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedGood {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::trimmed")]
    pub item_name: String,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub quantity: i64,
    #[serde(default, deserialize_with = "lenient::trimmed")]
    pub vendor: String,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub total_price: Decimal,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

// Formulário da tela "Issue Goods"
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IssueForm {
    #[serde(default, alias = "category", deserialize_with = "lenient::id")]
    #[validate(length(min = 1, message = "Category is required"))]
    pub category_id: String,

    #[serde(default, deserialize_with = "lenient::id")]
    #[validate(length(min = 1, message = "Product is required"))]
    pub product_id: String,

    #[serde(default, deserialize_with = "lenient::id")]
    #[validate(length(min = 1, message = "Vendor is required"))]
    pub vendor_id: String,

    #[serde(default, deserialize_with = "lenient::quantity")]
    #[validate(range(min = 1, message = "Quantity must be greater than 0"))]
    pub quantity: i64,
}

// Rascunho pronto para o POST /issue-goods: quantidade já limitada ao
// estoque e preço bruto já calculado.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDraft {
    pub product_id: String,
    pub item_name: String,
    pub category_id: String,
    pub vendor_id: String,
    pub quantity: i64,
    pub requested_quantity: i64,
    pub available_quantity: i64,
    pub clamped: bool,
    pub selling_price: Decimal,
    pub cost_price: Decimal,
    pub gross_price: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueHistorySummary {
    pub total_issued: usize,
    pub total_value: Decimal,
    pub unique_vendors: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct IssueHistory {
    pub summary: IssueHistorySummary,
    pub bills: Vec<IssuedGood>,
}
