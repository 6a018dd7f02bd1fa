use serde::{Deserialize, Serialize};

/// A member of a team's roster.
///
/// Starters mirror the label and coordinates of the formation slot they
/// occupy. Benched players keep whatever coordinates they last had; those
/// values carry no meaning until the player is seated again.
///
/// Invariants (checked by [`crate::models::Team::validate`]):
/// - `on_bench == false` implies `slot_index` is `Some`, in bounds for the
///   team's current formation, and unique among starters.
/// - `on_bench == true` implies `slot_index` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    /// Jersey number, free text.
    pub number: String,
    /// Primary position label, inherited from the occupied slot.
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tertiary_position: Option<String>,
    pub x: f32,
    pub y: f32,
    pub on_bench: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_index: Option<usize>,
}

/// Recognized free-text edits for a player.
///
/// Applied with [`Player::merged`]. Slot assignment, bench state, and
/// coordinates are managed by the roster engine, never through a patch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerPatch {
    pub name: Option<String>,
    pub number: Option<String>,
    pub secondary_position: Option<String>,
    pub tertiary_position: Option<String>,
}

impl PlayerPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.number.is_none()
            && self.secondary_position.is_none()
            && self.tertiary_position.is_none()
    }
}

impl Player {
    pub fn is_starter(&self) -> bool {
        !self.on_bench
    }

    /// Pure merge of a patch into this player, returning the new value.
    ///
    /// Secondary/tertiary labels normalize empty strings to "unset" so a
    /// cleared input field removes the label instead of storing "".
    pub fn merged(&self, patch: &PlayerPatch) -> Player {
        let mut next = self.clone();
        if let Some(name) = &patch.name {
            next.name = name.clone();
        }
        if let Some(number) = &patch.number {
            next.number = number.clone();
        }
        if let Some(secondary) = &patch.secondary_position {
            next.secondary_position = normalize_label(secondary);
        }
        if let Some(tertiary) = &patch.tertiary_position {
            next.tertiary_position = normalize_label(tertiary);
        }
        next
    }
}

fn normalize_label(label: &str) -> Option<String> {
    if label.is_empty() {
        None
    } else {
        Some(label.to_string())
    }
}
