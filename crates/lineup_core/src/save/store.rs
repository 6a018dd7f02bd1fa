use std::cell::RefCell;
use std::fs::{rename, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::error::StoreError;
use crate::models::Team;

/// Best-effort store for the whole team collection.
///
/// Granularity is replace-on-write: callers reload, swap the one team they
/// touched, and hand the entire collection back. No partial writes, no
/// merging, no versioning. Last writer wins.
pub trait TeamStore {
    /// Load the collection. A missing or malformed store yields an empty
    /// collection; the failure is logged, never propagated.
    fn load(&self) -> Vec<Team>;

    /// Overwrite the collection. Failures are logged and otherwise
    /// swallowed; the caller's in-memory state stays authoritative.
    fn save(&self, teams: &[Team]);
}

/// File-backed store: one JSON array of teams.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `saves/lineup_teams.json` under the working
    /// directory.
    pub fn default_path() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("saves")
            .join("lineup_teams.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<Team>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn write(&self, teams: &[Team]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string(teams)?;

        // Atomic replace: write to temp file, then rename
        let temp_path = self.path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(json.as_bytes())?;
            file.flush()?;
            file.sync_all()?;
        }
        rename(&temp_path, &self.path)?;

        log::debug!("saved {} teams ({} bytes) to {:?}", teams.len(), json.len(), self.path);
        Ok(())
    }
}

impl TeamStore for JsonFileStore {
    fn load(&self) -> Vec<Team> {
        match self.read() {
            Ok(teams) => teams,
            Err(err) => {
                log::warn!("failed to load teams from {:?}: {}", self.path, err);
                Vec::new()
            }
        }
    }

    fn save(&self, teams: &[Team]) {
        if let Err(err) = self.write(teams) {
            log::warn!("failed to save teams to {:?}: {}", self.path, err);
        }
    }
}

/// In-memory store for tests and ephemeral sessions.
pub struct MemoryStore {
    teams: RefCell<Vec<Team>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self { teams: RefCell::new(Vec::new()) }
    }

    pub fn with_teams(teams: Vec<Team>) -> Self {
        Self { teams: RefCell::new(teams) }
    }

    /// Snapshot of the stored collection, for assertions.
    pub fn teams(&self) -> Vec<Team> {
        self.teams.borrow().clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamStore for MemoryStore {
    fn load(&self) -> Vec<Team> {
        self.teams.borrow().clone()
    }

    fn save(&self, teams: &[Team]) {
        *self.teams.borrow_mut() = teams.to_vec();
    }
}
