pub mod auth;
pub mod inventory;
pub mod issue;
pub mod vendor;
