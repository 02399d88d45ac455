//! Catalog service - orchestrates game CRUD operations.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Game, GameDraft};
use crate::ports::{CatalogRepository, CoreError};

/// Service for catalog operations.
///
/// This service provides high-level catalog management by delegating to
/// the injected [`CatalogRepository`]. It adds no business logic beyond
/// what the repository provides - it's a thin facade.
pub struct CatalogService {
    repo: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    /// Create a new catalog service with the given repository.
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    /// List all games in insertion order.
    pub async fn list(&self) -> Result<Vec<Game>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }

    /// Add a new game, returning the stored record with its assigned id.
    pub async fn create(&self, draft: &GameDraft) -> Result<Game, CoreError> {
        let game = self.repo.insert(draft).await.map_err(CoreError::from)?;
        debug!(game_id = %game.id, name = %game.name, "game created");
        Ok(game)
    }

    /// Replace the fields of an existing game, keeping its id.
    pub async fn update(&self, id: &str, draft: &GameDraft) -> Result<(), CoreError> {
        self.repo.update(id, draft).await.map_err(CoreError::from)?;
        debug!(game_id = %id, "game updated");
        Ok(())
    }

    /// Delete a game by id.
    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        self.repo.delete(id).await.map_err(CoreError::from)?;
        debug!(game_id = %id, "game deleted");
        Ok(())
    }
}
