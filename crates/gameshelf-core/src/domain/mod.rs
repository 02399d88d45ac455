//! Domain types for the game catalog.
//!
//! These types are independent of any infrastructure concerns
//! (storage backend, rendering surface, etc.).

mod game;

pub use game::{Game, GameDraft, filter_games};
