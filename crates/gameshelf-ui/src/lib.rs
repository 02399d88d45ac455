//! View-controller facade for gameshelf rendering adapters.
//!
//! This crate provides [`CatalogScreen`], a rendering-agnostic
//! orchestration layer that any frontend (mobile shell, TUI, web view)
//! drives by forwarding user intents and reading back view state.
//!
//! # Architecture
//!
//! ```text
//! Rendering adapters:   mobile shell    TUI    web view
//!                             ↓           ↓        ↓
//! Facade:                     └── gameshelf-ui ────┘
//!                                 CatalogScreen
//!                                      ↓
//! Core:                          gameshelf-core
//! ```
//!
//! # Rules
//!
//! 1. **No rendering dependencies** - widgets, layout, and theming stay
//!    in the adapter
//! 2. **Intents in, state out** - adapters call intent methods and read
//!    the state slots; they never mutate the snapshot directly
//! 3. **Failures become notices** - no store error propagates past the
//!    screen

#![deny(unused_crate_dependencies)]

mod form;
mod notice;
mod screen;

// Primary exports
pub use form::{GameForm, MissingFields};
pub use notice::{NOTICE_DURATION, Notice, NoticeSlot};
pub use screen::CatalogScreen;

// Re-export commonly used types from gameshelf-core for convenience
pub use gameshelf_core::{Game, GameDraft, filter_games};

// Silence unused dev-dependency warnings in unit tests; these are used
// by the integration tests.
#[cfg(test)]
use anyhow as _;
#[cfg(test)]
use tracing_subscriber as _;
