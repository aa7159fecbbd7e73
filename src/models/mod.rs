//! Data models for the studio catalog.
//!
//! Models are independent of UI and business logic: the service record, the
//! ordered strip the carousel rotates, and slug derivation.

pub mod service;
pub mod slug;

// Re-export all model types
pub use service::{Service, ServiceStrip};
pub use slug::slug;
