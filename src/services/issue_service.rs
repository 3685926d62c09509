// src/services/issue_service.rs

use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::HashSet;

use crate::{
    common::{
        error::AppError,
        validation::{ensure_valid, numeric_field, require_fields, FieldErrors},
    },
    models::{
        inventory::Product,
        issue::{
            HistoryQuery, IssueDraft, IssueForm, IssueHistory, IssueHistorySummary, IssuedGood,
            ISSUE_REQUIRED_FIELDS,
        },
    },
    services::{pricing, InventoryService},
    upstream::{IssueApi, UpstreamResponse},
};

#[derive(Clone)]
pub struct IssueService {
    issue_api: IssueApi,
    inventory_service: InventoryService,
}

impl IssueService {
    pub fn new(issue_api: IssueApi, inventory_service: InventoryService) -> Self {
        Self {
            issue_api,
            inventory_service,
        }
    }

    pub async fn list_issued(&self) -> Result<UpstreamResponse, AppError> {
        self.issue_api.list_issued().await
    }

    pub async fn issue_goods(&self, body: &Value) -> Result<UpstreamResponse, AppError> {
        require_fields(body, &ISSUE_REQUIRED_FIELDS)?;
        check_issue_numbers(body)?;

        self.issue_api.issue_goods(body).await
    }

    /// Monta o rascunho da saída a partir do formulário: valida, confere o
    /// produto, limita a quantidade ao estoque e calcula o preço bruto.
    pub async fn draft_issue(&self, form: IssueForm) -> Result<IssueDraft, AppError> {
        ensure_valid(&form)?;

        let product = self
            .inventory_service
            .find_product(&form.product_id)
            .await?
            .ok_or_else(|| field_error("productId", "Product not found"))?;

        build_draft(&form, &product)
    }

    pub async fn history(&self, query: &HistoryQuery) -> Result<IssueHistory, AppError> {
        let bills = self.issue_api.get_all_issued().await?;
        let summary = summarize_history(&bills);
        let bills = filter_history(bills, query.search.as_deref());
        Ok(IssueHistory { summary, bills })
    }
}

// ---
// Regras puras (testadas sem upstream)
// ---

fn field_error(field: &str, message: &str) -> AppError {
    let mut errors = FieldErrors::new();
    errors.insert(field.to_string(), message.to_string());
    AppError::ValidationError(errors)
}

/// Preço de venda e custo (se vier) precisam ser positivos; quantidade não pode ser negativa.
pub fn check_issue_numbers(body: &Value) -> Result<(), AppError> {
    let non_positive = |key: &str| numeric_field(body, key).is_some_and(|v| v <= Decimal::ZERO);
    let negative = |key: &str| numeric_field(body, key).is_some_and(|v| v < Decimal::ZERO);

    if non_positive("sellingPrice") || non_positive("costPrice") || negative("quantity") {
        return Err(AppError::BadRequest(
            "Price and quantity must be positive numbers".to_string(),
        ));
    }
    Ok(())
}

pub fn build_draft(form: &IssueForm, product: &Product) -> Result<IssueDraft, AppError> {
    if product.category_id != form.category_id {
        return Err(field_error(
            "productId",
            "Product does not belong to the selected category",
        ));
    }

    let quantity = pricing::clamp_issue_quantity(form.quantity, product.quantity);
    if quantity == 0 {
        return Err(field_error("quantity", "Product is out of stock"));
    }

    Ok(IssueDraft {
        product_id: product.id.clone(),
        item_name: product.name.clone(),
        category_id: product.category_id.clone(),
        vendor_id: form.vendor_id.clone(),
        quantity,
        requested_quantity: form.quantity,
        available_quantity: product.quantity,
        clamped: quantity != form.quantity,
        selling_price: product.selling_price,
        cost_price: product.cost_price,
        gross_price: pricing::gross_price(quantity, product.selling_price),
    })
}

pub fn summarize_history(bills: &[IssuedGood]) -> IssueHistorySummary {
    IssueHistorySummary {
        total_issued: bills.len(),
        total_value: bills
            .iter()
            .fold(Decimal::ZERO, |total, b| pricing::saturating_add(total, b.total_price)),
        unique_vendors: bills.iter().map(|b| b.vendor.as_str()).collect::<HashSet<_>>().len(),
    }
}

pub fn filter_history(bills: Vec<IssuedGood>, search: Option<&str>) -> Vec<IssuedGood> {
    let needle = search.unwrap_or_default().trim().to_lowercase();
    if needle.is_empty() {
        return bills;
    }
    bills
        .into_iter()
        .filter(|b| {
            b.item_name.to_lowercase().contains(&needle) || b.vendor.to_lowercase().contains(&needle)
        })
        .collect()
}
