//! Championship storage keyed by championship id
//!
//! Single writer, last write wins. No transactions.

use cup_core::{Championship, ChampionshipId};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access store: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to (de)serialize championships: {0}")]
    Json(#[from] serde_json::Error),

    #[error("championship not found: {0}")]
    NotFound(ChampionshipId),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Persistence collaborator used by the runner
pub trait ChampionshipStore {
    /// Insert, or replace a championship with the same id
    fn save(&mut self, championship: &Championship) -> StoreResult<()>;

    fn load_all(&self) -> StoreResult<Vec<Championship>>;

    fn load_by_id(&self, id: &ChampionshipId) -> StoreResult<Option<Championship>>;

    /// Replace an existing championship; `NotFound` if it was never saved
    fn update(&mut self, championship: &Championship) -> StoreResult<()>;
}

fn upsert(list: &mut Vec<Championship>, championship: &Championship) {
    match list.iter_mut().find(|c| c.id == championship.id) {
        Some(slot) => *slot = championship.clone(),
        None => list.push(championship.clone()),
    }
}

fn replace(list: &mut [Championship], championship: &Championship) -> StoreResult<()> {
    let slot = list
        .iter_mut()
        .find(|c| c.id == championship.id)
        .ok_or_else(|| StoreError::NotFound(championship.id.clone()))?;
    *slot = championship.clone();
    Ok(())
}

/// In-memory store, mostly for tests and one-shot runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    championships: Vec<Championship>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChampionshipStore for MemoryStore {
    fn save(&mut self, championship: &Championship) -> StoreResult<()> {
        upsert(&mut self.championships, championship);
        Ok(())
    }

    fn load_all(&self) -> StoreResult<Vec<Championship>> {
        Ok(self.championships.clone())
    }

    fn load_by_id(&self, id: &ChampionshipId) -> StoreResult<Option<Championship>> {
        Ok(self.championships.iter().find(|c| &c.id == id).cloned())
    }

    fn update(&mut self, championship: &Championship) -> StoreResult<()> {
        replace(&mut self.championships, championship)
    }
}

/// All championships in one pretty-printed JSON array file.
///
/// A missing file reads as an empty list.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> StoreResult<Vec<Championship>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn write(&self, championships: &[Championship]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(championships)?;
        std::fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), count = championships.len(), "store written");
        Ok(())
    }
}

impl ChampionshipStore for JsonFileStore {
    fn save(&mut self, championship: &Championship) -> StoreResult<()> {
        let mut all = self.read()?;
        upsert(&mut all, championship);
        self.write(&all)
    }

    fn load_all(&self) -> StoreResult<Vec<Championship>> {
        self.read()
    }

    fn load_by_id(&self, id: &ChampionshipId) -> StoreResult<Option<Championship>> {
        Ok(self.read()?.into_iter().find(|c| &c.id == id))
    }

    fn update(&mut self, championship: &Championship) -> StoreResult<()> {
        let mut all = self.read()?;
        replace(&mut all, championship)?;
        self.write(&all)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
