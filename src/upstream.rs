pub mod client;
pub use client::{UpstreamClient, UpstreamResponse};
pub mod inventory_api;
pub use inventory_api::InventoryApi;
pub mod vendor_api;
pub use vendor_api::VendorApi;
pub mod issue_api;
pub use issue_api::IssueApi;
pub mod auth_api;
pub use auth_api::AuthApi;
