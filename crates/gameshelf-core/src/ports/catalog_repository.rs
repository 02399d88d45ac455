//! Catalog repository trait definition.
//!
//! This port defines the interface for catalog persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Game, GameDraft};

/// Repository for catalog persistence operations.
///
/// This trait defines CRUD operations for games. Implementations are
/// responsible for all storage details (in-memory collection, database,
/// remote backend, etc.) and for assigning ids on insertion.
///
/// # Design Rules
///
/// - CRUD-only: list, insert, update, delete
/// - Ids are opaque strings owned by the implementation
/// - The collection is an insertion-ordered sequence with unique ids
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// List all games in insertion order.
    ///
    /// Returns a snapshot copy; callers never observe later mutations
    /// through it.
    async fn list(&self) -> Result<Vec<Game>, RepositoryError>;

    /// Insert a new game into the catalog.
    ///
    /// Assigns a fresh unique id and returns the stored record.
    async fn insert(&self, draft: &GameDraft) -> Result<Game, RepositoryError>;

    /// Replace every field of the game with `id`, keeping the id itself.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no such game exists;
    /// the collection is untouched on that path.
    async fn update(&self, id: &str, draft: &GameDraft) -> Result<(), RepositoryError>;

    /// Delete the game with `id`.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no such game exists.
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}
