//! Core domain types and port definitions for gameshelf.
//!
//! This crate holds everything the catalog knows independently of storage
//! and rendering: the [`Game`] domain types, the [`CatalogRepository`]
//! port that storage adapters implement, the error taxonomy, and the
//! [`CatalogService`] facade that view layers drive.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Game, GameDraft, filter_games};
pub use ports::{CatalogRepository, CoreError, RepositoryError};
pub use services::CatalogService;
