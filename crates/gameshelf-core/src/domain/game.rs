//! Game domain types.
//!
//! These types represent catalog entries in the system, independent of
//! any storage or rendering concerns.

use serde::{Deserialize, Serialize};

/// A catalog entry that exists in the store with an assigned id.
///
/// This represents a stored game with all its fields. Use [`GameDraft`]
/// for entries that haven't been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Store-assigned identifier. Unique across the collection, never
    /// reused, and immutable after creation.
    pub id: String,
    /// Title of the game.
    pub name: String,
    /// Platform the copy belongs to (e.g. "PS5", "PC").
    pub platform: String,
    /// Release year, kept as entered.
    pub year: String,
    /// Genre label. Empty when not set.
    pub genre: String,
    /// Price, kept as entered.
    pub price: String,
    /// Free-form description. Empty when not set.
    pub description: String,
    /// Cover image URL. Empty when not set.
    pub image: String,
    /// Whether the game is currently available.
    pub available: bool,
}

/// A catalog entry to be stored (no id yet).
///
/// After insertion, the repository returns a [`Game`] with the
/// assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDraft {
    /// Title of the game.
    pub name: String,
    /// Platform the copy belongs to.
    pub platform: String,
    /// Release year, kept as entered.
    pub year: String,
    /// Genre label. Empty when not set.
    pub genre: String,
    /// Price, kept as entered.
    pub price: String,
    /// Free-form description. Empty when not set.
    pub description: String,
    /// Cover image URL. Empty when not set.
    pub image: String,
    /// Whether the game is currently available.
    pub available: bool,
}

impl GameDraft {
    /// Create a draft with the required fields.
    ///
    /// Optional fields are set to empty defaults and the entry is marked
    /// available.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        platform: impl Into<String>,
        year: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            platform: platform.into(),
            year: year.into(),
            genre: String::new(),
            price: price.into(),
            description: String::new(),
            image: String::new(),
            available: true,
        }
    }
}

impl Game {
    /// Convert this entry to a [`GameDraft`] (drops the id).
    ///
    /// Useful when re-submitting an entry's data without its identity.
    #[must_use]
    pub fn to_draft(&self) -> GameDraft {
        GameDraft {
            name: self.name.clone(),
            platform: self.platform.clone(),
            year: self.year.clone(),
            genre: self.genre.clone(),
            price: self.price.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            available: self.available,
        }
    }

    /// Whether `name`, `platform`, or `genre` contains `query_lower`.
    ///
    /// `query_lower` must already be lowercased.
    fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.platform.to_lowercase().contains(query_lower)
            || self.genre.to_lowercase().contains(query_lower)
    }
}

/// Filter a collection down to the entries matching a search query.
///
/// An entry matches when its name, platform, or genre contains the query
/// as a case-insensitive substring. The empty query matches everything,
/// and the input order is preserved. Pure and stateless — callers
/// recompute on every query change.
#[must_use]
pub fn filter_games(games: &[Game], query: &str) -> Vec<Game> {
    let query_lower = query.to_lowercase();
    games
        .iter()
        .filter(|game| game.matches(&query_lower))
        .cloned()
        .collect()
}
