// src/services/pricing.rs
//
// Cálculos de preço e estoque. Tudo puro e determinístico: recalculado a
// cada leitura, nunca guardado como fonte da verdade.

use rust_decimal::Decimal;

use crate::models::inventory::{
    InventorySummary, Product, ProductStatus, StockFilter, StockLevel, StockQuery, StockRow,
};

pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

// Fora da faixa do Decimal o resultado satura no extremo do mesmo sinal
fn saturate(negative: bool) -> Decimal {
    if negative { Decimal::MIN } else { Decimal::MAX }
}

/// Soma que satura em vez de estourar.
pub fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b)
        .unwrap_or_else(|| saturate(a.is_sign_negative()))
}

/// Preço bruto = quantidade × preço unitário (exato, sem arredondamento).
pub fn gross_price(quantity: i64, unit_price: Decimal) -> Decimal {
    let quantity = Decimal::from(quantity);
    quantity
        .checked_mul(unit_price)
        .unwrap_or_else(|| saturate(quantity.is_sign_negative() != unit_price.is_sign_negative()))
}

/// Margem sobre o custo, em %, com uma casa decimal. Custo zero => margem zero.
pub fn profit_margin(selling_price: Decimal, cost_price: Decimal) -> Decimal {
    if cost_price.is_zero() {
        return Decimal::ZERO;
    }

    let hundred = Decimal::ONE_HUNDRED;
    // (venda - custo) / custo; se a diferença estoura, (venda / custo - 1)
    selling_price
        .checked_sub(cost_price)
        .and_then(|difference| difference.checked_div(cost_price))
        .or_else(|| {
            selling_price
                .checked_div(cost_price)
                .and_then(|ratio| ratio.checked_sub(Decimal::ONE))
        })
        .and_then(|ratio| ratio.checked_mul(hundred))
        .map(|margin| margin.round_dp(1))
        .unwrap_or_else(|| saturate((selling_price < cost_price) != cost_price.is_sign_negative()))
}

pub fn classify_stock(quantity: i64, threshold: i64) -> StockLevel {
    if quantity <= 0 {
        StockLevel::OutOfStock
    } else if quantity <= threshold {
        StockLevel::LowStock
    } else {
        StockLevel::HighStock
    }
}

/// Não se emite mais do que há em estoque, nem quantidade negativa.
pub fn clamp_issue_quantity(requested: i64, available: i64) -> i64 {
    requested.min(available).max(0)
}

/// Produto com o preço bruto recalculado.
pub fn with_gross_price(mut product: Product) -> Product {
    product.gross_price = gross_price(product.quantity, product.selling_price);
    product
}

pub fn stock_row(product: Product, threshold: i64) -> StockRow {
    let product = with_gross_price(product);
    StockRow {
        profit_margin: profit_margin(product.selling_price, product.cost_price),
        stock_level: classify_stock(product.quantity, threshold),
        product,
    }
}

pub fn summarize(products: &[Product], threshold: i64) -> InventorySummary {
    products.iter().fold(
        InventorySummary {
            total_products: products.len(),
            ..Default::default()
        },
        |mut summary, product| {
            match classify_stock(product.quantity, threshold) {
                StockLevel::OutOfStock => summary.out_of_stock_products += 1,
                StockLevel::LowStock => summary.low_stock_products += 1,
                StockLevel::HighStock => {}
            }
            summary.total_value = saturating_add(
                summary.total_value,
                gross_price(product.quantity, product.selling_price),
            );
            summary
        },
    )
}

fn matches_search(product: &Product, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [&product.name, &product.sku, &product.category_id, &product.supplier]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

fn matches_status(row: &StockRow, filter: StockFilter) -> bool {
    match filter {
        StockFilter::All => true,
        StockFilter::LowStock => row.stock_level == StockLevel::LowStock,
        StockFilter::OutOfStock => row.stock_level == StockLevel::OutOfStock,
        StockFilter::HighStock => row.stock_level == StockLevel::HighStock,
        StockFilter::Active => row.product.status == ProductStatus::Active,
        StockFilter::Inactive => row.product.status == ProductStatus::Inactive,
        StockFilter::Discontinued => row.product.status == ProductStatus::Discontinued,
    }
}

/// Busca + categoria + status, na ordem em que a tela aplica.
pub fn filter_rows(rows: Vec<StockRow>, query: &StockQuery) -> Vec<StockRow> {
    rows.into_iter()
        .filter(|row| {
            query
                .search
                .as_deref()
                .is_none_or(|search| matches_search(&row.product, search))
        })
        .filter(|row| {
            query
                .category_id
                .as_deref()
                .filter(|c| !c.is_empty())
                .is_none_or(|category| row.product.category_id == category)
        })
        .filter(|row| matches_status(row, query.status))
        .collect()
}
