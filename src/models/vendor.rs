// src/models/vendor.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::lenient;

// Chaves que o POST de fornecedor exige antes de ir ao upstream
pub const VENDOR_REQUIRED_FIELDS: [&str; 8] = [
    "name",
    "email",
    "phone",
    "address",
    "city",
    "state",
    "zipCode",
    "contactPerson",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    #[serde(default, deserialize_with = "lenient::id", skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default, deserialize_with = "lenient::trimmed")]
    #[validate(length(min = 1, message = "Vendor name is required"))]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::trimmed")]
    #[validate(length(min = 1, message = "Contact person is required"))]
    pub contact_person: String,

    #[serde(default, deserialize_with = "lenient::trimmed")]
    #[validate(email(message = "A valid email is required"))]
    pub email: String,

    #[serde(default, deserialize_with = "lenient::trimmed")]
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,

    #[serde(default, deserialize_with = "lenient::trimmed")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient::trimmed")]
    pub city: String,
    #[serde(default, deserialize_with = "lenient::trimmed")]
    pub state: String,
    #[serde(default, deserialize_with = "lenient::trimmed")]
    pub zip_code: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
