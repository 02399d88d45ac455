//! User-facing notices (snackbar events).

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long the rendering surface should keep a notice on screen.
///
/// The screen itself runs no timer; adapters dismiss after this long.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// A single user-facing event, one per outcome the catalog reports.
///
/// Each variant maps to exactly one human-readable string; none carries
/// structured detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Notice {
    /// The initial catalog fetch (or a refresh) failed.
    LoadFailed,
    /// A new entry was stored.
    Saved,
    /// An existing entry was updated.
    Updated,
    /// Create or update failed at the store.
    SaveFailed,
    /// An entry was removed.
    Deleted,
    /// Removal failed at the store.
    DeleteFailed,
    /// Submission was rejected before reaching the store.
    MissingFields,
}

impl Notice {
    /// The string the snackbar shows for this event.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::LoadFailed => "Failed to load games",
            Self::Saved => "Game added",
            Self::Updated => "Game updated",
            Self::SaveFailed => "Failed to save game",
            Self::Deleted => "Game deleted",
            Self::DeleteFailed => "Failed to delete game",
            Self::MissingFields => "Fill in the required fields",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The single current-notice slot.
///
/// Holds the last event explicitly together with a shown flag: a new
/// notice overwrites the previous one (nothing queues), and dismissing
/// clears the flag while keeping the value inspectable.
#[derive(Debug, Clone, Default)]
pub struct NoticeSlot {
    last: Option<Notice>,
    shown: bool,
}

impl NoticeSlot {
    /// Show a notice, preempting whatever is currently shown.
    pub fn show(&mut self, notice: Notice) {
        self.last = Some(notice);
        self.shown = true;
    }

    /// Dismiss the current notice, keeping it as the last event.
    pub fn dismiss(&mut self) {
        self.shown = false;
    }

    /// The notice to display, if one is shown and not yet dismissed.
    #[must_use]
    pub const fn current(&self) -> Option<Notice> {
        if self.shown { self.last } else { None }
    }

    /// The last event, shown or not.
    #[must_use]
    pub const fn last(&self) -> Option<Notice> {
        self.last
    }
}
