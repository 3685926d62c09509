// src/common/validation.rs

use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::BTreeMap;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::common::{error::AppError, lenient};

/// Campo (camelCase) -> mensagem para o usuário. Vazio = formulário válido.
pub type FieldErrors = BTreeMap<String, String>;

// ---
// Validações customizadas (usadas nos derives dos models)
// ---
pub fn validate_positive(val: &Decimal) -> Result<(), ValidationError> {
    if *val <= Decimal::ZERO {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O valor deve ser maior que zero.".into());
        return Err(err);
    }
    Ok(())
}

/// Achata os erros do `validator` no formato que o front end exibe:
/// uma mensagem por campo (a primeira), com o nome em camelCase.
pub fn flatten(errors: &ValidationErrors) -> FieldErrors {
    let mut details = FieldErrors::new();
    for (field, field_errors) in errors.field_errors() {
        let message = field_errors
            .iter()
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| format!("{} is invalid", field));
        details.insert(camel_case(&field.to_string()), message);
    }
    details
}

/// Roda o validador do formulário e devolve o mapa de erros (vazio se ok).
pub fn field_errors<T: Validate>(form: &T) -> FieldErrors {
    match form.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errors) => flatten(&errors),
    }
}

/// Mesmo que `field_errors`, mas já no formato de erro HTTP.
pub fn ensure_valid<T: Validate>(form: &T) -> Result<(), AppError> {
    let errors = field_errors(form);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::ValidationError(errors))
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

// ---
// Checagem de chaves obrigatórias da camada de proxy
// ---

/// Mesma regra do front end: ausente, null, false, 0 e "" contam como faltando.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

pub fn missing_fields(body: &Value, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|field| !is_present(body.get(**field)))
        .map(|field| field.to_string())
        .collect()
}

pub fn require_fields(body: &Value, required: &[&str]) -> Result<(), AppError> {
    let missing = missing_fields(body, required);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::MissingFields(missing))
    }
}

/// Lê um campo numérico do corpo cru, se existir (mesma leitura tolerante dos forms).
pub fn numeric_field(body: &Value, key: &str) -> Option<Decimal> {
    body.get(key)
        .filter(|v| !v.is_null())
        .map(lenient::decimal_from_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize, Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "Name is required"))]
        display_name: String,
        #[validate(custom(function = "validate_positive", message = "Price must be greater than 0"))]
        unit_price: Decimal,
    }

    #[test]
    fn valid_form_yields_an_empty_map() {
        let probe = Probe {
            display_name: "Widget".into(),
            unit_price: Decimal::ONE,
        };
        assert!(field_errors(&probe).is_empty());
        assert!(ensure_valid(&probe).is_ok());
    }

    #[test]
    fn errors_are_keyed_by_camel_case_field() {
        let probe = Probe {
            display_name: String::new(),
            unit_price: Decimal::ZERO,
        };
        let errors = field_errors(&probe);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["displayName"], "Name is required");
        assert_eq!(errors["unitPrice"], "Price must be greater than 0");
    }

    #[test]
    fn falsy_values_count_as_missing() {
        let body = json!({
            "name": "ACME",
            "email": "",
            "phone": null,
            "quantity": 0,
            "active": false,
            "vendorId": 7,
        });
        let missing = missing_fields(&body, &["name", "email", "phone", "quantity", "active", "vendorId", "city"]);
        assert_eq!(missing, vec!["email", "phone", "quantity", "active", "city"]);
    }

    #[test]
    fn require_fields_reports_the_missing_keys() {
        let err = require_fields(&json!({ "name": "x" }), &["name", "zipCode"]).unwrap_err();
        match err {
            AppError::MissingFields(fields) => assert_eq!(fields, vec!["zipCode"]),
            other => panic!("erro inesperado: {other:?}"),
        }
    }

    #[test]
    fn numeric_field_is_lenient() {
        let body = json!({ "a": "12.5", "b": "abc", "c": null });
        assert_eq!(numeric_field(&body, "a"), Some(lenient::parse_decimal("12.5")));
        assert_eq!(numeric_field(&body, "b"), Some(Decimal::ZERO));
        assert_eq!(numeric_field(&body, "c"), None);
        assert_eq!(numeric_field(&body, "d"), None);
    }

    #[test]
    fn camel_case_conversion() {
        assert_eq!(camel_case("cost_price"), "costPrice");
        assert_eq!(camel_case("zipCode"), "zipCode");
        assert_eq!(camel_case("name"), "name");
    }
}
