//! Team session controller.
//!
//! Holds exactly one active team in memory, runs every edit through the
//! roster engine, and funnels all mutations through a single commit step:
//! refresh the active formation's roster snapshot, stamp `last_modified`,
//! and rewrite the stored collection. The save indicator is cosmetic: the
//! write itself is synchronous and has already happened by the time anyone
//! looks at the status.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::catalog::{self, FormationSpec, Sport, SportId};
use crate::gen::Generator;
use crate::models::{Player, PlayerPatch, Team};
use crate::roster::{self, RosterError, SlotFill};
use crate::save::{current_timestamp, TeamStore};
use crate::suggest::LineupSuggester;

/// How long the save indicator reports `Saving` after a mutation.
pub const AUTOSAVE_INDICATOR_MS: u64 = 1200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    Saving,
}

#[derive(Error, Debug)]
pub enum SessionError {
    /// The requested id resolves to no stored team; the caller should
    /// navigate back to a safe view.
    #[error("team {0} not found")]
    TeamNotFound(String),

    #[error(transparent)]
    Roster(#[from] RosterError),
}

pub struct TeamSession {
    store: Box<dyn TeamStore>,
    gen: Box<dyn Generator>,
    team: Team,
    indicator_until: u64,
}

impl TeamSession {
    /// Create a new team for a sport, persist it, and open a session on it.
    pub fn create(
        store: Box<dyn TeamStore>,
        mut gen: Box<dyn Generator>,
        sport_id: SportId,
        name: Option<&str>,
    ) -> Self {
        let sport = catalog::sport(sport_id);
        let team = roster::new_team(sport, name, current_timestamp(), gen.as_mut());

        let mut teams = store.load();
        teams.push(team.clone());
        store.save(&teams);

        log::info!("created {} team \"{}\" ({})", sport.name, team.name, team.id);
        Self { store, gen, team, indicator_until: 0 }
    }

    /// Open a session on a stored team.
    pub fn open(
        store: Box<dyn TeamStore>,
        gen: Box<dyn Generator>,
        team_id: &str,
    ) -> Result<Self, SessionError> {
        let team = store
            .load()
            .into_iter()
            .find(|t| t.id == team_id)
            .ok_or_else(|| SessionError::TeamNotFound(team_id.to_string()))?;

        Ok(Self { store, gen, team, indicator_until: 0 })
    }

    /// All stored teams, most recently modified first.
    pub fn list_teams(store: &dyn TeamStore) -> Vec<Team> {
        let mut teams = store.load();
        teams.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
        teams
    }

    pub fn team(&self) -> &Team {
        &self.team
    }

    pub fn sport(&self) -> &'static Sport {
        catalog::sport(self.team.sport_id)
    }

    /// The active formation, falling back to the sport's first formation
    /// when the stored index no longer resolves.
    pub fn formation(&self) -> &'static FormationSpec {
        self.sport().formation_or_first(self.team.formation_index)
    }

    /// Projection from slot index to the starter occupying it. The slot
    /// uniqueness invariant makes this a plain one-to-one mapping.
    pub fn starters_by_slot(&self) -> BTreeMap<usize, &Player> {
        self.team
            .players
            .iter()
            .filter(|p| p.is_starter())
            .filter_map(|p| p.slot_index.map(|slot| (slot, p)))
            .collect()
    }

    pub fn save_status(&self) -> SaveStatus {
        self.save_status_at(current_timestamp())
    }

    /// Indicator state at an explicit clock reading, for deterministic
    /// tests.
    pub fn save_status_at(&self, now_ms: u64) -> SaveStatus {
        if now_ms < self.indicator_until {
            SaveStatus::Saving
        } else {
            SaveStatus::Saved
        }
    }

    // Mutations

    pub fn rename(&mut self, name: &str) {
        self.team.name = name.to_string();
        self.commit(false);
    }

    pub fn switch_formation(&mut self, target: usize) -> Result<(), SessionError> {
        let sport = self.sport();
        roster::switch_formation(&mut self.team, sport, target)?;
        log::info!(
            "team {} now uses formation \"{}\"",
            self.team.id,
            self.formation().name
        );
        // The switch manages its roster snapshots itself.
        self.commit(false);
        Ok(())
    }

    pub fn fill_slot_from_bench(&mut self, slot: usize, player_id: &str) {
        let formation = self.formation();
        if roster::fill_slot(
            &mut self.team,
            formation,
            slot,
            SlotFill::FromBench(player_id),
            self.gen.as_mut(),
        ) {
            self.commit(true);
        }
    }

    pub fn fill_slot_with_new(&mut self, slot: usize) {
        let formation = self.formation();
        if roster::fill_slot(&mut self.team, formation, slot, SlotFill::NewPlayer, self.gen.as_mut())
        {
            self.commit(true);
        }
    }

    pub fn toggle_bench(&mut self, player_id: &str) {
        let formation = self.formation();
        if roster::toggle_bench(&mut self.team, formation, player_id) {
            self.commit(true);
        }
    }

    pub fn add_bench_player(&mut self) {
        roster::add_bench_player(&mut self.team, self.gen.as_mut());
        self.commit(true);
    }

    pub fn update_player(&mut self, player_id: &str, patch: &PlayerPatch) {
        if roster::update_player(&mut self.team, player_id, patch) {
            self.commit(true);
        }
    }

    /// Drop a player from the roster. A removed starter leaves their slot
    /// vacant.
    pub fn remove_player(&mut self, player_id: &str) {
        if roster::remove_player(&mut self.team, player_id).is_some() {
            self.commit(true);
        }
    }

    /// Bulk-add bench players from a suggestion source. A failed or absent
    /// suggestion leaves the team untouched. Returns how many players were
    /// added.
    pub fn populate_from_suggestions(
        &mut self,
        suggester: &dyn LineupSuggester,
        count: usize,
    ) -> usize {
        let sport = self.sport();
        let Some(suggestions) = suggester.suggest(sport.name, count) else {
            log::warn!("lineup suggestions unavailable for {}", sport.name);
            return 0;
        };
        if suggestions.is_empty() {
            return 0;
        }

        let added = suggestions.len();
        for suggestion in suggestions {
            self.team.players.push(Player {
                id: self.gen.next_id(),
                name: suggestion.name,
                number: suggestion.number,
                position: suggestion.position,
                secondary_position: None,
                tertiary_position: None,
                x: 0.0,
                y: 0.0,
                on_bench: true,
                slot_index: None,
            });
        }
        self.commit(true);
        added
    }

    /// The single funnel for every mutation: optionally refresh the active
    /// formation's roster snapshot, stamp the team, flip the indicator, and
    /// rewrite the whole collection (replace-by-id, last writer wins).
    fn commit(&mut self, refresh_snapshot: bool) {
        if refresh_snapshot {
            self.team.formation_rosters.insert(self.team.formation_index, self.team.players.clone());
        }

        let now = current_timestamp();
        self.team.last_modified = now;
        self.indicator_until = now + AUTOSAVE_INDICATOR_MS;

        let teams: Vec<Team> = self
            .store
            .load()
            .into_iter()
            .map(|t| if t.id == self.team.id { self.team.clone() } else { t })
            .collect();
        self.store.save(&teams);
    }
}
