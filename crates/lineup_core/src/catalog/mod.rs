//! Static sport and formation registry.
//!
//! The catalog is compiled-in, read-only data: each sport carries an ordered
//! list of formations, each formation an ordered list of labeled slots with
//! normalized field coordinates. Slot order defines `slot_index` addressing,
//! which is stable only within a single formation.

mod sports;

pub use sports::SPORTS;

use serde::{Deserialize, Serialize};

/// Identifier for a sport in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SportId {
    Hockey,
    Soccer,
    Baseball,
    Football,
    Basketball,
}

impl SportId {
    pub fn all() -> [SportId; 5] {
        [SportId::Hockey, SportId::Soccer, SportId::Baseball, SportId::Football, SportId::Basketball]
    }

    /// Catalog key as it appears in persisted data ("soccer", "hockey", ...).
    pub fn key(&self) -> &'static str {
        match self {
            SportId::Hockey => "hockey",
            SportId::Soccer => "soccer",
            SportId::Baseball => "baseball",
            SportId::Football => "football",
            SportId::Basketball => "basketball",
        }
    }

    pub fn parse(value: &str) -> Option<SportId> {
        SportId::all().into_iter().find(|id| id.key() == value)
    }
}

/// A labeled field position within a formation.
///
/// Coordinates are percentages of a normalized field, 0..=100 on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotSpec {
    pub label: &'static str,
    pub x: f32,
    pub y: f32,
}

/// A named, ordered set of slots. Never empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormationSpec {
    pub name: &'static str,
    pub slots: &'static [SlotSpec],
}

impl FormationSpec {
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

/// A catalog entry: display name plus the sport's formation list. Never empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sport {
    pub id: SportId,
    pub name: &'static str,
    pub formations: &'static [FormationSpec],
}

impl Sport {
    pub fn formation(&self, index: usize) -> Option<&'static FormationSpec> {
        self.formations.get(index)
    }

    /// Formation at `index`, falling back to the sport's first formation
    /// when a stored index no longer resolves.
    pub fn formation_or_first(&self, index: usize) -> &'static FormationSpec {
        self.formations.get(index).unwrap_or(&self.formations[0])
    }
}

/// Look up a sport by id. The catalog covers every `SportId`.
pub fn sport(id: SportId) -> &'static Sport {
    SPORTS.iter().find(|s| s.id == id).expect("catalog covers every SportId")
}
