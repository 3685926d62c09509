// src/common/lenient.rs
//
// Leitura "tolerante" de números vindos de formulários e do upstream.
// Regra única para todo o sistema: o que não for número vira 0 antes de
// qualquer cálculo. Quem exige valor positivo é o validador, não o parser.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Converte texto livre em `Decimal`; entrada inválida vira zero.
pub fn parse_decimal(input: &str) -> Decimal {
    let trimmed = input.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// Converte texto livre em quantidade inteira, lendo só o prefixo numérico
/// ("12abc" -> 12, "abc" -> 0, "-3" -> -3).
pub fn parse_quantity(input: &str) -> i64 {
    let trimmed = input.trim();
    let mut end = 0;
    for (idx, ch) in trimmed.char_indices() {
        let is_sign = idx == 0 && (ch == '-' || ch == '+');
        if ch.is_ascii_digit() || is_sign {
            end = idx + ch.len_utf8();
        } else {
            break;
        }
    }
    trimmed[..end].parse().unwrap_or(0)
}

pub fn decimal_from_value(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s),
        _ => Decimal::ZERO,
    }
}

pub fn quantity_from_value(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => parse_quantity(s),
        _ => 0,
    }
}

// ---
// Deserializers para `#[serde(deserialize_with = "...")]`
// ---

pub fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decimal_from_value(&value))
}

pub fn quantity<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(quantity_from_value(&value))
}

/// IDs chegam como "3" ou 3 dependendo da tela; guardamos sempre texto.
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Aceita RFC 3339 ou milissegundos desde a época; o resto vira `None`.
pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    })
}
