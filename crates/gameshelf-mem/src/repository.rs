//! In-memory implementation of the `CatalogRepository` trait.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use gameshelf_core::{CatalogRepository, Game, GameDraft, RepositoryError};

use crate::config::MemoryStoreConfig;
use crate::seed::launch_catalog;

/// Collection plus the id floor, guarded together by one mutex so the
/// store is single-writer by construction.
struct StoreState {
    games: Vec<Game>,
    last_id: i64,
}

/// In-memory implementation of the `CatalogRepository` trait.
///
/// The catalog lives in an insertion-ordered `Vec` behind a `tokio`
/// mutex. Every operation first sleeps for the configured latency,
/// simulating a network round-trip; the mutation itself is synchronous
/// inside the lock, so back-to-back operations serialize on the single
/// collection.
///
/// Ids are minted from `max(now_millis, last_id + 1)` — time-based,
/// strictly monotonic per store instance, and unique even when two
/// inserts land in the same millisecond.
pub struct MemoryCatalogRepository {
    state: Mutex<StoreState>,
    latency: Duration,
}

impl MemoryCatalogRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new(config: MemoryStoreConfig) -> Self {
        Self::with_games(Vec::new(), config)
    }

    /// Create a store holding `games` as its initial collection.
    ///
    /// Numeric ids among the initial entries raise the id floor so
    /// minted ids never collide with them.
    #[must_use]
    pub fn with_games(games: Vec<Game>, config: MemoryStoreConfig) -> Self {
        let last_id = games
            .iter()
            .filter_map(|g| g.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            state: Mutex::new(StoreState { games, last_id }),
            latency: config.latency,
        }
    }

    /// Create a store pre-loaded with the seed catalog.
    #[must_use]
    pub fn seeded(config: MemoryStoreConfig) -> Self {
        Self::with_games(launch_catalog(), config)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn mint_id(state: &mut StoreState) -> String {
        let next = Utc::now().timestamp_millis().max(state.last_id + 1);
        state.last_id = next;
        next.to_string()
    }

    fn stored(id: String, draft: &GameDraft) -> Game {
        Game {
            id,
            name: draft.name.clone(),
            platform: draft.platform.clone(),
            year: draft.year.clone(),
            genre: draft.genre.clone(),
            price: draft.price.clone(),
            description: draft.description.clone(),
            image: draft.image.clone(),
            available: draft.available,
        }
    }
}

#[async_trait]
impl CatalogRepository for MemoryCatalogRepository {
    async fn list(&self) -> Result<Vec<Game>, RepositoryError> {
        self.simulate_latency().await;
        let state = self.state.lock().await;
        Ok(state.games.clone())
    }

    async fn insert(&self, draft: &GameDraft) -> Result<Game, RepositoryError> {
        self.simulate_latency().await;
        let mut state = self.state.lock().await;
        let id = Self::mint_id(&mut state);
        let game = Self::stored(id, draft);
        state.games.push(game.clone());
        Ok(game)
    }

    async fn update(&self, id: &str, draft: &GameDraft) -> Result<(), RepositoryError> {
        self.simulate_latency().await;
        let mut state = self.state.lock().await;
        let game = state
            .games
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Game with id {id}")))?;
        *game = Self::stored(id.to_string(), draft);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        self.simulate_latency().await;
        let mut state = self.state.lock().await;
        let pos = state
            .games
            .iter()
            .position(|g| g.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Game with id {id}")))?;
        state.games.remove(pos);
        Ok(())
    }
}
