//! Core services - the application's orchestration layer.
//!
//! Services here are pure orchestrators over ports (trait interfaces);
//! they don't know about concrete implementations.

mod catalog_service;

pub use catalog_service::CatalogService;
