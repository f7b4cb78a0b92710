//! Championship snapshot and read-only queries over it

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CupError, Result};
use crate::fixture::Match;
use crate::team::Team;
use crate::tiebreak::net_goal_differential;
use crate::types::{ChampionshipId, MatchId, Round, TeamId};

/// Aggregate progress of one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Placeholders not filled yet
    Waiting,
    /// Teams assigned, at least one fixture unplayed
    Playable,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChampionshipStatus {
    InProgress,
    Completed,
}

/// Final placings, available once the championship is completed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub winner: TeamId,
    pub runner_up: TeamId,
    pub third_place: TeamId,
    pub fourth_place: TeamId,
}

impl Standings {
    /// (place, team) from first to fourth
    pub fn podium(&self) -> [(u8, &TeamId); 4] {
        [
            (1, &self.winner),
            (2, &self.runner_up),
            (3, &self.third_place),
            (4, &self.fourth_place),
        ]
    }
}

/// Full championship state.
///
/// Teams live here once; fixtures refer to them by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Championship {
    pub id: ChampionshipId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Teams in drawn order
    pub teams: Vec<Team>,
    pub matches: Vec<Match>,
    pub completed: bool,
    pub winner: Option<TeamId>,
    pub runner_up: Option<TeamId>,
    pub third_place: Option<TeamId>,
    pub fourth_place: Option<TeamId>,
}

impl Championship {
    pub fn team(&self, id: &TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| &t.id == id)
    }

    /// Display name for a team id, falling back to the id itself
    pub fn team_name<'a>(&'a self, id: &'a TeamId) -> &'a str {
        self.team(id).map(|t| t.name.as_str()).unwrap_or(id.as_str())
    }

    pub fn fixture(&self, id: MatchId) -> Result<&Match> {
        self.matches
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| CupError::MatchNotFound(id.to_string()))
    }

    pub(crate) fn fixture_mut(&mut self, id: MatchId) -> Result<&mut Match> {
        self.matches
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| CupError::MatchNotFound(id.to_string()))
    }

    pub fn fixtures_in(&self, round: Round) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(move |m| m.round() == round)
    }

    /// Fixtures that can take a result right now
    pub fn playable(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(|m| m.is_playable())
    }

    pub fn played_count(&self) -> usize {
        self.matches.iter().filter(|m| m.played).count()
    }

    pub fn round_status(&self, round: Round) -> RoundStatus {
        let mut fixtures = self.fixtures_in(round).peekable();
        if fixtures.peek().is_none() {
            return RoundStatus::Waiting;
        }
        let (mut all_played, mut any_waiting) = (true, false);
        for m in fixtures {
            all_played &= m.played;
            any_waiting |= m.has_empty_slot();
        }
        if all_played {
            RoundStatus::Complete
        } else if any_waiting {
            RoundStatus::Waiting
        } else {
            RoundStatus::Playable
        }
    }

    /// Earliest round that still has unplayed fixtures
    pub fn current_round(&self) -> Option<Round> {
        Round::ALL
            .into_iter()
            .find(|&r| self.round_status(r) != RoundStatus::Complete)
    }

    pub fn status(&self) -> ChampionshipStatus {
        if self.completed {
            ChampionshipStatus::Completed
        } else {
            ChampionshipStatus::InProgress
        }
    }

    /// Net goals for a team recomputed from the played fixtures
    pub fn net_goals(&self, team: &TeamId) -> i64 {
        net_goal_differential(team, &self.matches)
    }

    /// Final placings, or None until the championship is completed
    pub fn standings(&self) -> Option<Standings> {
        if !self.completed {
            return None;
        }
        Some(Standings {
            winner: self.winner.clone()?,
            runner_up: self.runner_up.clone()?,
            third_place: self.third_place.clone()?,
            fourth_place: self.fourth_place.clone()?,
        })
    }
}
