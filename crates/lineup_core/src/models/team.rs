use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::Player;
use crate::catalog::{FormationSpec, SportId};

/// A saved lineup: one sport, one active formation, an ordered roster, and
/// the per-formation roster memory.
///
/// `players` order is insertion order, not display order. `formation_rosters`
/// remembers the full player list as last seen under each visited formation
/// index, which is what makes switching between formations non-destructive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub sport_id: SportId,
    pub players: Vec<Player>,
    pub formation_index: usize,
    /// Unix epoch milliseconds of the last mutation.
    pub last_modified: u64,
    /// Formation index -> player list as last arranged there. Serialized as
    /// a JSON object whose keys are the index in decimal-string form;
    /// serde_json performs that coercion for integer-keyed maps.
    #[serde(default)]
    pub formation_rosters: BTreeMap<usize, Vec<Player>>,
}

impl Team {
    pub fn starters(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_starter())
    }

    pub fn bench(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.on_bench)
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Check the starter/bench invariants against a formation.
    pub fn validate(&self, formation: &FormationSpec) -> Result<(), String> {
        let mut ids = HashSet::new();
        for player in &self.players {
            if !ids.insert(player.id.as_str()) {
                return Err(format!("duplicate player id {}", player.id));
            }
        }

        let mut seats = HashSet::new();
        for player in &self.players {
            if player.on_bench {
                if player.slot_index.is_some() {
                    return Err(format!("benched player {} still holds a slot", player.id));
                }
                continue;
            }
            let slot = player
                .slot_index
                .ok_or_else(|| format!("starter {} has no slot index", player.id))?;
            if slot >= formation.slot_count() {
                return Err(format!(
                    "starter {} holds slot {} but {} has only {} slots",
                    player.id,
                    slot,
                    formation.name,
                    formation.slot_count()
                ));
            }
            if !seats.insert(slot) {
                return Err(format!("slot {} occupied by more than one starter", slot));
            }
        }

        Ok(())
    }
}
