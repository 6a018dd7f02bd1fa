//! End-to-end reconciliation scenarios across formation switches and
//! bench traffic.

use super::*;
use crate::catalog::{sport, SportId};
use crate::gen::SequenceGenerator;

// Test-only sport whose formations differ in size, to exercise the
// out-of-bounds benching path (every catalog sport keeps a constant slot
// count across its formations).
const WIDE: FormationSpec = FormationSpec {
    name: "Wide 11",
    slots: &[
        SlotSpec { label: "S0", x: 50.0, y: 90.0 },
        SlotSpec { label: "S1", x: 10.0, y: 75.0 },
        SlotSpec { label: "S2", x: 30.0, y: 75.0 },
        SlotSpec { label: "S3", x: 70.0, y: 75.0 },
        SlotSpec { label: "S4", x: 90.0, y: 75.0 },
        SlotSpec { label: "S5", x: 10.0, y: 50.0 },
        SlotSpec { label: "S6", x: 30.0, y: 50.0 },
        SlotSpec { label: "S7", x: 70.0, y: 50.0 },
        SlotSpec { label: "S8", x: 90.0, y: 50.0 },
        SlotSpec { label: "S9", x: 35.0, y: 25.0 },
        SlotSpec { label: "S10", x: 65.0, y: 25.0 },
    ],
};

const COMPACT: FormationSpec = FormationSpec {
    name: "Compact 5",
    slots: &[
        SlotSpec { label: "C0", x: 50.0, y: 80.0 },
        SlotSpec { label: "C1", x: 20.0, y: 60.0 },
        SlotSpec { label: "C2", x: 80.0, y: 60.0 },
        SlotSpec { label: "C3", x: 35.0, y: 30.0 },
        SlotSpec { label: "C4", x: 65.0, y: 30.0 },
    ],
};

const SHAPESHIFT: Sport =
    Sport { id: SportId::Soccer, name: "Shapeshift", formations: &[WIDE, COMPACT] };

fn soccer_team() -> (Team, &'static Sport, SequenceGenerator) {
    let mut gen = SequenceGenerator::new();
    let s = sport(SportId::Soccer);
    let team = new_team(s, Some("Rovers"), 1, &mut gen);
    (team, s, gen)
}

#[test]
fn switch_round_trip_restores_original_arrangement() {
    let (mut team, s, _) = soccer_team();
    let original = team.players.clone();

    switch_formation(&mut team, s, 1).unwrap();
    assert_ne!(team.players, original); // labels moved with the new formation

    switch_formation(&mut team, s, 0).unwrap();
    assert_eq!(team.players, original);
    assert_eq!(team.formation_index, 0);
}

#[test]
fn switch_round_trip_survives_detours() {
    // A -> B -> A -> B restores B's snapshot exactly when nothing was
    // edited in between.
    let (mut team, s, _) = soccer_team();

    switch_formation(&mut team, s, 1).unwrap();
    let arranged_b = team.players.clone();

    switch_formation(&mut team, s, 0).unwrap();
    switch_formation(&mut team, s, 1).unwrap();

    assert_eq!(team.players, arranged_b);
}

#[test]
fn switch_preserves_player_count_and_slot_uniqueness() {
    let (mut team, s, mut gen) = soccer_team();
    add_bench_player(&mut team, &mut gen);
    add_bench_player(&mut team, &mut gen);
    let count = team.players.len();

    for target in [1usize, 0, 1, 0] {
        switch_formation(&mut team, s, target).unwrap();
        assert_eq!(team.players.len(), count);
        assert!(team.validate(&s.formations[target]).is_ok());
    }
}

#[test]
fn shrinking_formation_benches_exactly_out_of_bounds_starters() {
    let mut gen = SequenceGenerator::new();
    let mut team = new_team(&SHAPESHIFT, Some("Squeeze"), 1, &mut gen);
    assert_eq!(team.players.len(), 11);
    let original = team.players.clone();

    switch_formation(&mut team, &SHAPESHIFT, 1).unwrap();

    let kept: Vec<_> = team.players.iter().filter(|p| p.is_starter()).collect();
    let benched: Vec<_> = team.players.iter().filter(|p| p.on_bench).collect();
    assert_eq!(kept.len(), 5);
    assert_eq!(benched.len(), 6);

    // Slots 0..=4 keep their occupants, remapped to the compact labels
    // and coordinates.
    for player in &kept {
        let slot = player.slot_index.unwrap();
        assert!(slot < 5);
        assert_eq!(player.id, original[slot].id);
        assert_eq!(player.position, COMPACT.slots[slot].label);
        assert_eq!((player.x, player.y), (COMPACT.slots[slot].x, COMPACT.slots[slot].y));
    }

    // Former occupants of slots 5..=10 are benched, slot cleared.
    for player in &benched {
        assert_eq!(player.slot_index, None);
        let was = original.iter().find(|p| p.id == player.id).unwrap();
        assert!(was.slot_index.unwrap() >= 5);
    }

    // The wide arrangement is still remembered under its index.
    assert_eq!(team.formation_rosters.get(&0), Some(&original));
    assert!(team.validate(&COMPACT).is_ok());
}

#[test]
fn growing_formation_restores_benched_seats_via_snapshot() {
    // Shrink then grow again: the stored snapshot for the wide formation
    // brings everyone back to their original seats.
    let mut gen = SequenceGenerator::new();
    let mut team = new_team(&SHAPESHIFT, Some("Squeeze"), 1, &mut gen);
    let original = team.players.clone();

    switch_formation(&mut team, &SHAPESHIFT, 1).unwrap();
    switch_formation(&mut team, &SHAPESHIFT, 0).unwrap();

    assert_eq!(team.players, original);
}

#[test]
fn promote_fills_vacancy_then_displaces_last_starter() {
    // One vacant slot, two bench players: the first promotion takes the
    // vacancy; the second displaces the last starter in insertion order
    // and takes that exact seat.
    let (mut team, s, mut gen) = soccer_team();
    let formation = &s.formations[0];

    // Vacate slot 3.
    let vacated = team.players[3].id.clone();
    assert!(toggle_bench(&mut team, formation, &vacated));

    add_bench_player(&mut team, &mut gen);
    add_bench_player(&mut team, &mut gen);
    let first_sub = team.players[team.players.len() - 2].id.clone();
    let second_sub = team.players[team.players.len() - 1].id.clone();
    let count = team.players.len();

    // First promotion: lowest vacant slot is 3.
    assert!(toggle_bench(&mut team, formation, &first_sub));
    assert_eq!(team.player(&first_sub).unwrap().slot_index, Some(3));
    assert_eq!(team.player(&first_sub).unwrap().position, "RCB");

    // Formation is now full. The last starter in insertion order is the
    // sub just promoted (appended after the original lineup).
    assert!(toggle_bench(&mut team, formation, &second_sub));
    let displaced = team.player(&first_sub).unwrap();
    assert!(displaced.on_bench);
    assert_eq!(displaced.slot_index, None);
    assert_eq!(team.player(&second_sub).unwrap().slot_index, Some(3));

    assert_eq!(team.players.len(), count);
    assert!(team.validate(formation).is_ok());
}

#[test]
fn displacement_uses_insertion_order_not_slot_order() {
    // With a full formation, promotion displaces the last starter in the
    // players vec even when another starter holds a higher slot index.
    let s = sport(SportId::Basketball);
    let formation = &s.formations[0];
    let mut gen = SequenceGenerator::new();
    let mut team = new_team(s, Some("Order"), 1, &mut gen);

    // Seat the slot-0 holder last in insertion order by benching the
    // original slot-4 holder and promoting a new sub into slot 4.
    let slot4_holder = team.players[4].id.clone();
    assert!(toggle_bench(&mut team, formation, &slot4_holder));
    add_bench_player(&mut team, &mut gen);
    let seated_last = team.players.last().unwrap().id.clone();
    assert!(toggle_bench(&mut team, formation, &seated_last));
    assert_eq!(team.player(&seated_last).unwrap().slot_index, Some(4));

    // Promote the benched original: the displaced starter must be the one
    // seated last in the vec (holding slot 4), not the slot-0 holder.
    assert!(toggle_bench(&mut team, formation, &slot4_holder));

    assert!(team.player(&seated_last).unwrap().on_bench);
    assert_eq!(team.player(&slot4_holder).unwrap().slot_index, Some(4));
    assert!(team.players[0].is_starter());
    assert!(team.validate(formation).is_ok());
}

#[test]
fn bench_and_promote_preserve_player_count() {
    let (mut team, s, _) = soccer_team();
    let formation = &s.formations[0];
    let count = team.players.len();

    for player_id in team.players.iter().map(|p| p.id.clone()).collect::<Vec<_>>() {
        assert!(toggle_bench(&mut team, formation, &player_id));
        assert_eq!(team.players.len(), count);
        assert!(toggle_bench(&mut team, formation, &player_id));
        assert_eq!(team.players.len(), count);
    }
    assert!(team.validate(formation).is_ok());
}

#[test]
fn edits_after_switch_are_kept_per_formation() {
    // Arrange formation B, visit A, return to B: B comes back as last
    // arranged, not freshly synthesized. The per-mutation snapshot refresh
    // is the session's job, mirrored inline here.
    let (mut team, s, mut gen) = soccer_team();
    let formation_b = &s.formations[1];

    switch_formation(&mut team, s, 1).unwrap();

    let striker = team
        .starters()
        .find(|p| p.position == "ST")
        .map(|p| p.id.clone())
        .expect("4-3-3 has a striker");
    assert!(toggle_bench(&mut team, formation_b, &striker));
    team.formation_rosters.insert(1, team.players.clone());
    let arranged_b = team.players.clone();

    switch_formation(&mut team, s, 0).unwrap();
    assert!(fill_slot(&mut team, &s.formations[0], 0, SlotFill::NewPlayer, &mut gen));
    team.formation_rosters.insert(0, team.players.clone());

    switch_formation(&mut team, s, 1).unwrap();
    assert_eq!(team.players, arranged_b);
}
