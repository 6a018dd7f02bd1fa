//! Roster reconciliation engine.
//!
//! Pure mutation functions over a [`Team`] and catalog formation data.
//! These own the slot-assignment rules: what happens to every player when a
//! team switches formations, fills a vacant slot, benches a starter, or
//! promotes from the bench. Timestamping and persistence stay with the
//! session controller; nothing here talks to a store.

use std::collections::BTreeMap;
use std::collections::HashSet;

use thiserror::Error;

use crate::catalog::{FormationSpec, SlotSpec, Sport};
use crate::gen::{Generator, BENCH_POSITION, PLACEHOLDER_NAME};
use crate::models::{Player, PlayerPatch, Team};

#[cfg(test)]
mod reconcile_test;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("formation index {index} out of range for {sport} ({count} formations)")]
    FormationIndexOutOfRange { sport: &'static str, index: usize, count: usize },
}

/// How a slot gets its player in [`fill_slot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotFill<'a> {
    /// Seat the identified player (normally a bench member).
    FromBench(&'a str),
    /// Synthesize a brand-new starter for the slot.
    NewPlayer,
}

/// Switch the team to another of its sport's formations.
///
/// The roster being left is snapshotted under the old index. The target
/// roster is the stored snapshot for that index when one exists (restoring
/// exactly what the user last arranged there); otherwise it is synthesized
/// from the current players: starters whose slot index fits the target
/// formation keep their seat and inherit its label/coordinates, starters
/// whose seat no longer exists are benched, bench members ride along
/// untouched.
pub fn switch_formation(team: &mut Team, sport: &Sport, target: usize) -> Result<(), RosterError> {
    let next = sport.formation(target).ok_or(RosterError::FormationIndexOutOfRange {
        sport: sport.name,
        index: target,
        count: sport.formations.len(),
    })?;

    team.formation_rosters.insert(team.formation_index, team.players.clone());

    let players = match team.formation_rosters.get(&target) {
        Some(snapshot) => snapshot.clone(),
        None => {
            let synthesized = remap_to(&team.players, next);
            team.formation_rosters.insert(target, synthesized.clone());
            synthesized
        }
    };

    team.formation_index = target;
    team.players = players;
    Ok(())
}

fn remap_to(players: &[Player], next: &FormationSpec) -> Vec<Player> {
    players
        .iter()
        .map(|p| {
            if p.on_bench {
                return p.clone();
            }
            match p.slot_index {
                Some(slot) if slot < next.slot_count() => {
                    let mut moved = p.clone();
                    seat(&mut moved, slot, &next.slots[slot]);
                    moved
                }
                _ => {
                    let mut benched = p.clone();
                    benched.on_bench = true;
                    benched.slot_index = None;
                    benched
                }
            }
        })
        .collect()
}

/// Put a player into `slot`, displacing any current occupant to the bench.
///
/// Returns whether the roster changed. Unknown source ids and out-of-range
/// slots are no-ops; the UI only offers valid choices, so these are
/// defensive, not error paths.
pub fn fill_slot(
    team: &mut Team,
    formation: &FormationSpec,
    slot: usize,
    source: SlotFill<'_>,
    gen: &mut dyn Generator,
) -> bool {
    let Some(spec) = formation.slots.get(slot) else {
        return false;
    };

    match source {
        SlotFill::FromBench(id) => {
            if !team.players.iter().any(|p| p.id == id) {
                return false;
            }
            for player in &mut team.players {
                if player.id == id {
                    seat(player, slot, spec);
                } else if player.is_starter() && player.slot_index == Some(slot) {
                    player.on_bench = true;
                    player.slot_index = None;
                }
            }
            true
        }
        SlotFill::NewPlayer => {
            // Slot should be vacant by precondition; displace defensively.
            for player in &mut team.players {
                if player.is_starter() && player.slot_index == Some(slot) {
                    player.on_bench = true;
                    player.slot_index = None;
                }
            }
            let mut rookie = Player {
                id: gen.next_id(),
                name: gen.pick_name(),
                number: gen.jersey_number(),
                position: String::new(),
                secondary_position: None,
                tertiary_position: None,
                x: 0.0,
                y: 0.0,
                on_bench: false,
                slot_index: None,
            };
            seat(&mut rookie, slot, spec);
            team.players.push(rookie);
            true
        }
    }
}

/// Bench a starter, or promote a bench member into a slot.
///
/// Promotion takes the lowest vacant slot in formation order. When the
/// formation is full, the last starter in player-insertion order is
/// displaced to the bench and the promoted player takes that exact seat.
/// Returns whether the roster changed; unknown ids are no-ops.
pub fn toggle_bench(team: &mut Team, formation: &FormationSpec, player_id: &str) -> bool {
    let Some(idx) = team.players.iter().position(|p| p.id == player_id) else {
        return false;
    };

    if team.players[idx].is_starter() {
        let player = &mut team.players[idx];
        player.on_bench = true;
        player.slot_index = None;
        return true;
    }

    let occupied: HashSet<usize> = team.starters().filter_map(|p| p.slot_index).collect();
    if let Some(slot) = (0..formation.slot_count()).find(|i| !occupied.contains(i)) {
        seat(&mut team.players[idx], slot, &formation.slots[slot]);
        return true;
    }

    // Formation full: swap with the last starter in insertion order.
    let Some(last_idx) = team.players.iter().rposition(|p| p.is_starter()) else {
        return false;
    };
    let Some(slot) = team.players[last_idx].slot_index else {
        return false;
    };
    let Some(spec) = formation.slots.get(slot) else {
        return false;
    };

    team.players[last_idx].on_bench = true;
    team.players[last_idx].slot_index = None;
    seat(&mut team.players[idx], slot, spec);
    true
}

/// Append a new bench player. No slot interaction.
pub fn add_bench_player(team: &mut Team, gen: &mut dyn Generator) {
    team.players.push(Player {
        id: gen.next_id(),
        name: PLACEHOLDER_NAME.to_string(),
        number: gen.jersey_number(),
        position: BENCH_POSITION.to_string(),
        secondary_position: None,
        tertiary_position: None,
        x: 0.0,
        y: 0.0,
        on_bench: true,
        slot_index: None,
    });
}

/// Remove a player from the roster entirely, returning them.
///
/// A removed starter leaves their slot vacant; unknown ids are no-ops.
pub fn remove_player(team: &mut Team, player_id: &str) -> Option<Player> {
    let idx = team.players.iter().position(|p| p.id == player_id)?;
    Some(team.players.remove(idx))
}

/// Merge free-text edits into the identified player.
///
/// Returns whether the roster changed; unknown ids are no-ops.
pub fn update_player(team: &mut Team, player_id: &str, patch: &PlayerPatch) -> bool {
    match team.players.iter_mut().find(|p| p.id == player_id) {
        Some(player) => {
            *player = player.merged(patch);
            true
        }
        None => false,
    }
}

/// Synthesize a full starting lineup for a formation, one player per slot.
pub fn new_lineup(formation: &FormationSpec, gen: &mut dyn Generator) -> Vec<Player> {
    formation
        .slots
        .iter()
        .enumerate()
        .map(|(idx, spec)| Player {
            id: gen.next_id(),
            name: gen.pick_name(),
            number: gen.jersey_number(),
            position: spec.label.to_string(),
            secondary_position: None,
            tertiary_position: None,
            x: spec.x,
            y: spec.y,
            on_bench: false,
            slot_index: Some(idx),
        })
        .collect()
}

/// Build a fresh team for a sport: full lineup for the first formation and
/// the index-0 roster snapshot seeded.
pub fn new_team(sport: &Sport, name: Option<&str>, now_ms: u64, gen: &mut dyn Generator) -> Team {
    let players = new_lineup(&sport.formations[0], gen);
    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Untitled {} Team", sport.name));

    let mut formation_rosters = BTreeMap::new();
    formation_rosters.insert(0, players.clone());

    Team {
        id: gen.next_id(),
        name,
        sport_id: sport.id,
        players,
        formation_index: 0,
        last_modified: now_ms,
        formation_rosters,
    }
}

fn seat(player: &mut Player, slot: usize, spec: &SlotSpec) {
    player.on_bench = false;
    player.slot_index = Some(slot);
    player.position = spec.label.to_string();
    player.x = spec.x;
    player.y = spec.y;
}
