//! # lineup_core - Sports Lineup Editing Core
//!
//! Library behind the lineup studio: a static sport/formation catalog, a
//! roster reconciliation engine, a single-team session controller, and a
//! best-effort local persistence adapter.
//!
//! ## Features
//! - Non-destructive formation switching via per-formation roster memory
//! - Slot/bench reconciliation with stable player identity
//! - Whole-collection JSON persistence that degrades gracefully
//! - Injected id/name/number generation for deterministic tests
//! - Optional lineup suggestions from an external text-generation API

pub mod catalog;
pub mod gen;
pub mod models;
pub mod roster;
pub mod save;
pub mod session;
pub mod suggest;

// Re-export the catalog
pub use catalog::{sport, FormationSpec, SlotSpec, Sport, SportId, SPORTS};

// Re-export the data model
pub use models::{Player, PlayerPatch, Team};

// Re-export the reconciliation engine
pub use roster::{RosterError, SlotFill};

// Re-export the persistence adapter
pub use save::{current_timestamp, JsonFileStore, MemoryStore, StoreError, TeamStore};

// Re-export the session controller
pub use session::{SaveStatus, SessionError, TeamSession, AUTOSAVE_INDICATOR_MS};

// Re-export generation and suggestions
pub use gen::{Generator, RandomGenerator, SequenceGenerator, MOCK_NAMES};
pub use suggest::{LineupSuggester, StaticSuggester, SuggestedPlayer};

#[cfg(feature = "http")]
pub use suggest::HttpSuggester;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
