// Team collection persistence
// One JSON document holding every saved team; best-effort, replace-on-write

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::{JsonFileStore, MemoryStore, TeamStore};

/// Current time as unix epoch milliseconds.
pub fn current_timestamp() -> u64 {
    chrono::Utc::now().timestamp_millis() as u64
}
