//! In-memory repository implementation for gameshelf.
//!
//! This crate provides [`MemoryCatalogRepository`], an implementation of
//! the `CatalogRepository` port that keeps the whole catalog in process
//! memory and simulates network latency on every operation. It stands in
//! for a real backend: storage is ephemeral and resets with the process.

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod repository;
pub mod seed;

// Re-export for convenient access
pub use config::MemoryStoreConfig;
pub use repository::MemoryCatalogRepository;
pub use seed::launch_catalog;
