//! Form state and validation for the game editor.

use gameshelf_core::{Game, GameDraft};
use thiserror::Error;

/// Required fields left empty at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {}", missing.join(", "))]
pub struct MissingFields {
    /// Names of the required fields that were empty.
    pub missing: Vec<&'static str>,
}

/// Editable field set backing the create/edit form.
///
/// Every input is kept exactly as entered; nothing is parsed or
/// normalized until submission. The `editing` slot decides whether a
/// submit becomes a create (empty) or an update (holds the target id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameForm {
    pub name: String,
    pub platform: String,
    pub year: String,
    pub genre: String,
    pub price: String,
    pub description: String,
    pub image: String,
    pub available: bool,
    /// Id of the entry being edited; `None` while creating.
    pub editing: Option<String>,
}

impl Default for GameForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            platform: String::new(),
            year: String::new(),
            genre: String::new(),
            price: String::new(),
            description: String::new(),
            image: String::new(),
            available: true,
            editing: None,
        }
    }
}

impl GameForm {
    /// Blank every field, reset availability to its default, and leave
    /// create mode.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Pre-fill every field from an existing entry and enter edit mode.
    pub fn load(&mut self, game: &Game) {
        self.name = game.name.clone();
        self.platform = game.platform.clone();
        self.year = game.year.clone();
        self.genre = game.genre.clone();
        self.price = game.price.clone();
        self.description = game.description.clone();
        self.image = game.image.clone();
        self.available = game.available;
        self.editing = Some(game.id.clone());
    }

    /// Whether a submit would update an existing entry.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Validate and convert the form into a draft.
    ///
    /// Name, platform, year, and price are required; blank (or
    /// whitespace-only) values reject the submission before the store is
    /// ever involved. Genre, description, and image pass through as-is.
    pub fn to_draft(&self) -> Result<GameDraft, MissingFields> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.platform.trim().is_empty() {
            missing.push("platform");
        }
        if self.year.trim().is_empty() {
            missing.push("year");
        }
        if self.price.trim().is_empty() {
            missing.push("price");
        }
        if !missing.is_empty() {
            return Err(MissingFields { missing });
        }

        Ok(GameDraft {
            name: self.name.clone(),
            platform: self.platform.clone(),
            year: self.year.clone(),
            genre: self.genre.clone(),
            price: self.price.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            available: self.available,
        })
    }
}
