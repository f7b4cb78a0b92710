//! Team registry: identity, registration order and the roster built before a draw

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CupError, Result};
use crate::types::{TeamId, TEAM_COUNT};

/// A registered team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Optional logo reference (URL or path)
    pub logo: Option<String>,
    pub created_at: DateTime<Utc>,
    /// 1-based rank fixed at registration; lower wins the last tiebreak
    pub registration_order: u8,
    /// Net goals across played matches. Refreshed by every progression pass,
    /// never read by the tiebreak resolver.
    pub points: i64,
}

impl Team {
    pub fn new(name: impl Into<String>, registration_order: u8) -> Self {
        Self {
            id: TeamId::generate(),
            name: name.into(),
            logo: None,
            created_at: Utc::now(),
            registration_order,
            points: 0,
        }
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }
}

/// Teams collected before a championship is drawn.
///
/// Registration order follows insertion and stays contiguous from 1 when a
/// team is removed.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    teams: Vec<Team>,
}

impl Roster {
    pub fn new() -> Self {
        Self { teams: Vec::new() }
    }

    /// Register a team under the next free registration order
    pub fn register(&mut self, name: &str) -> Result<&Team> {
        self.push(name, None)
    }

    pub fn register_with_logo(&mut self, name: &str, logo: &str) -> Result<&Team> {
        self.push(name, Some(logo.to_string()))
    }

    fn push(&mut self, name: &str, logo: Option<String>) -> Result<&Team> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CupError::EmptyName);
        }
        if self.is_full() {
            return Err(CupError::RosterFull);
        }

        let mut team = Team::new(name, self.teams.len() as u8 + 1);
        team.logo = logo;
        self.teams.push(team);
        Ok(&self.teams[self.teams.len() - 1])
    }

    /// Remove a team and renumber the rest 1..n in their current order
    pub fn remove(&mut self, id: &TeamId) -> Result<Team> {
        let index = self
            .teams
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| CupError::UnknownTeam(id.clone()))?;
        let removed = self.teams.remove(index);
        for (i, team) in self.teams.iter_mut().enumerate() {
            team.registration_order = i as u8 + 1;
        }
        Ok(removed)
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.teams.len() >= TEAM_COUNT
    }

    pub fn into_teams(self) -> Vec<Team> {
        self.teams
    }
}

#[cfg(test)]
#[path = "team_tests.rs"]
mod team_tests;
