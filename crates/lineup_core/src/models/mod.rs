pub mod player;
pub mod team;

pub use player::{Player, PlayerPatch};
pub use team::Team;
