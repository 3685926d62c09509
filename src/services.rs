pub mod auth;
pub mod grouping;
pub mod pricing;
pub mod inventory_service;
pub use inventory_service::InventoryService;
pub mod vendor_service;
pub use vendor_service::VendorService;
pub mod issue_service;
pub use issue_service::IssueService;
