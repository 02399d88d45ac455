//! The catalog screen - view state slots and user intents.

use tracing::{debug, warn};

use gameshelf_core::{CatalogService, Game, filter_games};

use crate::form::GameForm;
use crate::notice::{Notice, NoticeSlot};

/// View controller for the single catalog screen.
///
/// Holds the local view state (loading flag, search text, form, modal
/// visibility, pending-delete id, notice slot) and drives the injected
/// [`CatalogService`] through the CRUD operations. Adapters forward user
/// intents to the methods here and render from the accessors; they never
/// mutate the snapshot as a substitute for a store call.
///
/// One store operation is in flight at a time: every intent awaits its
/// operation to completion before returning, with no cancellation and no
/// retry.
pub struct CatalogScreen {
    catalog: CatalogService,
    games: Vec<Game>,
    loading: bool,
    search: String,
    form: GameForm,
    form_visible: bool,
    pending_delete: Option<String>,
    confirm_visible: bool,
    notice: NoticeSlot,
}

impl CatalogScreen {
    /// Create a screen over the given catalog service.
    ///
    /// The snapshot starts empty; call [`load`](Self::load) to populate
    /// it.
    #[must_use]
    pub fn new(catalog: CatalogService) -> Self {
        Self {
            catalog,
            games: Vec::new(),
            loading: false,
            search: String::new(),
            form: GameForm::default(),
            form_visible: false,
            pending_delete: None,
            confirm_visible: false,
            notice: NoticeSlot::default(),
        }
    }

    // =========================================================================
    // View state accessors
    // =========================================================================

    /// The full snapshot, in insertion order.
    #[must_use]
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// The subset of the snapshot matching the current search text.
    ///
    /// Re-derived from scratch on every call; an empty search yields the
    /// full snapshot in order.
    #[must_use]
    pub fn visible_games(&self) -> Vec<Game> {
        filter_games(&self.games, &self.search)
    }

    /// Whether the initial fetch is in progress.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The current search text.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// The form state.
    #[must_use]
    pub const fn form(&self) -> &GameForm {
        &self.form
    }

    /// Mutable form state, for field-changed intents.
    pub fn form_mut(&mut self) -> &mut GameForm {
        &mut self.form
    }

    /// Whether the create/edit form is open.
    #[must_use]
    pub const fn is_form_visible(&self) -> bool {
        self.form_visible
    }

    /// The id staged for deletion, while the confirmation prompt is open.
    #[must_use]
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Whether the delete confirmation prompt is open.
    #[must_use]
    pub const fn is_confirm_visible(&self) -> bool {
        self.confirm_visible
    }

    /// The notice slot.
    #[must_use]
    pub const fn notice(&self) -> &NoticeSlot {
        &self.notice
    }

    // =========================================================================
    // Intents
    // =========================================================================

    /// Initial full-list fetch.
    ///
    /// This is the only operation that toggles the loading flag; a
    /// failure leaves the previous snapshot in place and raises the
    /// load-failure notice.
    pub async fn load(&mut self) {
        self.loading = true;
        match self.catalog.list().await {
            Ok(games) => {
                debug!(count = games.len(), "catalog loaded");
                self.games = games;
            }
            Err(error) => {
                warn!(%error, "initial catalog load failed");
                self.notice.show(Notice::LoadFailed);
            }
        }
        self.loading = false;
    }

    /// The search text changed.
    pub fn search_changed(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// The add button was tapped: open the form blank, in create mode.
    pub fn add_tapped(&mut self) {
        self.form.clear();
        self.form_visible = true;
    }

    /// The edit button was tapped on an entry: open the form pre-filled,
    /// in edit mode.
    pub fn edit_tapped(&mut self, game: &Game) {
        self.form.load(game);
        self.form_visible = true;
    }

    /// The form was cancelled: blank all fields and close it.
    pub fn cancel_form(&mut self) {
        self.form.clear();
        self.form_visible = false;
    }

    /// The form was submitted.
    ///
    /// Validation failures reject the submission before the store is
    /// called. Otherwise the editing slot dispatches between create and
    /// update; on success the list is re-fetched and the form cleared
    /// and closed, on store failure the form stays open with its values.
    pub async fn submit(&mut self) {
        let draft = match self.form.to_draft() {
            Ok(draft) => draft,
            Err(error) => {
                warn!(missing = ?error.missing, "submission rejected");
                self.notice.show(Notice::MissingFields);
                return;
            }
        };

        let outcome = match self.form.editing.clone() {
            Some(id) => {
                debug!(game_id = %id, "updating entry");
                self.catalog.update(&id, &draft).await.map(|()| Notice::Updated)
            }
            None => {
                debug!(name = %draft.name, "creating entry");
                self.catalog.create(&draft).await.map(|_| Notice::Saved)
            }
        };

        match outcome {
            Ok(notice) => {
                self.notice.show(notice);
                self.refetch().await;
                self.form.clear();
                self.form_visible = false;
            }
            Err(error) => {
                warn!(%error, "save failed");
                self.notice.show(Notice::SaveFailed);
            }
        }
    }

    /// The delete button was tapped on an entry: stage its id and open
    /// the confirmation prompt. No mutation happens here.
    pub fn delete_tapped(&mut self, id: impl Into<String>) {
        self.pending_delete = Some(id.into());
        self.confirm_visible = true;
    }

    /// The confirmation prompt was cancelled: close it with no mutation.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.confirm_visible = false;
    }

    /// The deletion was confirmed.
    ///
    /// Issues the delete for the staged id. The prompt closes and the
    /// staged id clears regardless of the outcome; the notice reports
    /// it.
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            self.confirm_visible = false;
            return;
        };

        let outcome = self.catalog.delete(&id).await;
        self.confirm_visible = false;

        match outcome {
            Ok(()) => {
                self.notice.show(Notice::Deleted);
                self.refetch().await;
            }
            Err(error) => {
                warn!(game_id = %id, %error, "delete failed");
                self.notice.show(Notice::DeleteFailed);
            }
        }
    }

    /// The notice was dismissed (timer elapsed or swiped away).
    pub fn dismiss_notice(&mut self) {
        self.notice.dismiss();
    }

    /// Refresh the snapshot after a mutation.
    ///
    /// Unlike [`load`](Self::load) this leaves the loading flag alone -
    /// the prior list stays visible until the refresh lands.
    async fn refetch(&mut self) {
        match self.catalog.list().await {
            Ok(games) => self.games = games,
            Err(error) => {
                warn!(%error, "refresh after mutation failed");
                self.notice.show(Notice::LoadFailed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gameshelf_core::{CatalogRepository, GameDraft, RepositoryError};
    use gameshelf_mem::{MemoryCatalogRepository, MemoryStoreConfig};
    use std::sync::Arc;

    /// Repository stub whose every operation fails.
    struct BrokenRepo;

    #[async_trait]
    impl CatalogRepository for BrokenRepo {
        async fn list(&self) -> Result<Vec<Game>, RepositoryError> {
            Err(RepositoryError::Storage("backend gone".to_string()))
        }

        async fn insert(&self, _draft: &GameDraft) -> Result<Game, RepositoryError> {
            Err(RepositoryError::Storage("backend gone".to_string()))
        }

        async fn update(&self, _id: &str, _draft: &GameDraft) -> Result<(), RepositoryError> {
            Err(RepositoryError::Storage("backend gone".to_string()))
        }

        async fn delete(&self, _id: &str) -> Result<(), RepositoryError> {
            Err(RepositoryError::Storage("backend gone".to_string()))
        }
    }

    fn seeded_screen() -> CatalogScreen {
        let repo = Arc::new(MemoryCatalogRepository::seeded(MemoryStoreConfig::instant()));
        CatalogScreen::new(CatalogService::new(repo))
    }

    fn broken_screen() -> CatalogScreen {
        CatalogScreen::new(CatalogService::new(Arc::new(BrokenRepo)))
    }

    #[tokio::test]
    async fn test_load_populates_snapshot() {
        let mut screen = seeded_screen();
        assert!(screen.games().is_empty());

        screen.load().await;

        assert!(!screen.is_loading());
        assert_eq!(screen.games().len(), 3);
        assert!(screen.notice().current().is_none());
    }

    #[tokio::test]
    async fn test_load_failure_raises_notice_and_keeps_snapshot() {
        let mut screen = broken_screen();

        screen.load().await;

        assert!(!screen.is_loading());
        assert!(screen.games().is_empty());
        assert_eq!(screen.notice().current(), Some(Notice::LoadFailed));
    }

    #[tokio::test]
    async fn test_search_derives_visible_subset() {
        let mut screen = seeded_screen();
        screen.load().await;

        screen.search_changed("eld");
        let visible = screen.visible_games();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Elden Ring");

        screen.search_changed("xyz");
        assert!(screen.visible_games().is_empty());

        screen.search_changed("");
        assert_eq!(screen.visible_games().len(), 3);
    }

    #[tokio::test]
    async fn test_invalid_submission_never_reaches_store() {
        let mut screen = seeded_screen();
        screen.load().await;

        screen.add_tapped();
        screen.form_mut().name = "Celeste".to_string();
        // platform/year/price left blank
        screen.submit().await;

        assert_eq!(screen.notice().current(), Some(Notice::MissingFields));
        assert!(screen.is_form_visible());
        assert_eq!(screen.games().len(), 3);
    }

    #[tokio::test]
    async fn test_submit_creates_and_resets_form() {
        let mut screen = seeded_screen();
        screen.load().await;

        screen.add_tapped();
        {
            let form = screen.form_mut();
            form.name = "Celeste".to_string();
            form.platform = "PC".to_string();
            form.year = "2018".to_string();
            form.price = "40".to_string();
        }
        screen.submit().await;

        assert_eq!(screen.notice().current(), Some(Notice::Saved));
        assert!(!screen.is_form_visible());
        assert!(!screen.form().is_editing());
        assert!(screen.form().name.is_empty());
        assert_eq!(screen.games().len(), 4);
        let stored = screen.games().last().unwrap();
        assert!(!stored.id.is_empty());
        assert_eq!(stored.name, "Celeste");
    }

    #[tokio::test]
    async fn test_submit_dispatches_update_when_editing() {
        let mut screen = seeded_screen();
        screen.load().await;

        let target = screen.games()[1].clone();
        screen.edit_tapped(&target);
        assert!(screen.form().is_editing());
        assert_eq!(screen.form().name, "Hollow Knight");

        screen.form_mut().price = "60".to_string();
        screen.submit().await;

        assert_eq!(screen.notice().current(), Some(Notice::Updated));
        assert!(!screen.is_form_visible());
        let refreshed = screen
            .games()
            .iter()
            .find(|g| g.id == target.id)
            .unwrap();
        assert_eq!(refreshed.price, "60");
        assert_eq!(screen.games().len(), 3);
    }

    #[tokio::test]
    async fn test_save_failure_keeps_form_open_with_values() {
        let mut screen = broken_screen();

        screen.add_tapped();
        {
            let form = screen.form_mut();
            form.name = "Celeste".to_string();
            form.platform = "PC".to_string();
            form.year = "2018".to_string();
            form.price = "40".to_string();
        }
        screen.submit().await;

        assert_eq!(screen.notice().current(), Some(Notice::SaveFailed));
        assert!(screen.is_form_visible());
        assert_eq!(screen.form().name, "Celeste");
    }

    #[tokio::test]
    async fn test_delete_is_a_two_step_protocol() {
        let mut screen = seeded_screen();
        screen.load().await;

        // Tapping delete stages the id without mutating the collection.
        screen.delete_tapped("2");
        assert!(screen.is_confirm_visible());
        assert_eq!(screen.pending_delete(), Some("2"));
        assert_eq!(screen.games().len(), 3);

        // Cancelling closes the prompt with no mutation.
        screen.cancel_delete();
        assert!(!screen.is_confirm_visible());
        assert_eq!(screen.pending_delete(), None);
        assert_eq!(screen.games().len(), 3);

        // Confirming removes the entry and closes the prompt.
        screen.delete_tapped("2");
        screen.confirm_delete().await;
        assert!(!screen.is_confirm_visible());
        assert_eq!(screen.pending_delete(), None);
        assert_eq!(screen.notice().current(), Some(Notice::Deleted));
        assert_eq!(screen.games().len(), 2);
        assert!(screen.games().iter().all(|g| g.id != "2"));
    }

    #[tokio::test]
    async fn test_confirm_delete_failure_still_closes_prompt() {
        let mut screen = broken_screen();

        screen.delete_tapped("2");
        screen.confirm_delete().await;

        assert!(!screen.is_confirm_visible());
        assert_eq!(screen.pending_delete(), None);
        assert_eq!(screen.notice().current(), Some(Notice::DeleteFailed));
    }

    #[tokio::test]
    async fn test_delete_of_vanished_entry_reports_failure() {
        let mut screen = seeded_screen();
        screen.load().await;

        screen.delete_tapped("9999");
        screen.confirm_delete().await;

        assert_eq!(screen.notice().current(), Some(Notice::DeleteFailed));
        assert_eq!(screen.games().len(), 3);
    }

    #[tokio::test]
    async fn test_mutations_do_not_toggle_loading() {
        let mut screen = seeded_screen();
        screen.load().await;

        screen.delete_tapped("1");
        screen.confirm_delete().await;

        assert!(!screen.is_loading());
        assert_eq!(screen.games().len(), 2);
    }

    #[tokio::test]
    async fn test_dismiss_keeps_last_notice() {
        let mut screen = seeded_screen();
        screen.load().await;

        screen.delete_tapped("1");
        screen.confirm_delete().await;
        screen.dismiss_notice();

        assert_eq!(screen.notice().current(), None);
        assert_eq!(screen.notice().last(), Some(Notice::Deleted));
    }
}
