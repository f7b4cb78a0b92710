//! A single fixture between two team slots

use serde::{Deserialize, Serialize};

use crate::types::{MatchId, Round, TeamId};

/// Where a fixture sits in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    /// At least one slot is still a placeholder
    Waiting,
    /// Both teams known, no result yet
    Playable,
    Played,
}

/// One fixture. Empty slots (`None`) are placeholders filled in by the
/// progression engine once the previous round is decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub team1: Option<TeamId>,
    pub team2: Option<TeamId>,
    pub team1_goals: u32,
    pub team2_goals: u32,
    pub played: bool,
    pub winner: Option<TeamId>,
    pub loser: Option<TeamId>,
}

impl Match {
    /// Fixture with both slots still empty
    pub fn placeholder(id: MatchId) -> Self {
        Self {
            id,
            team1: None,
            team2: None,
            team1_goals: 0,
            team2_goals: 0,
            played: false,
            winner: None,
            loser: None,
        }
    }

    pub fn between(id: MatchId, team1: TeamId, team2: TeamId) -> Self {
        Self {
            team1: Some(team1),
            team2: Some(team2),
            ..Self::placeholder(id)
        }
    }

    pub fn round(&self) -> Round {
        self.id.round()
    }

    pub fn match_number(&self) -> u8 {
        self.id.match_number()
    }

    /// Both teams, if neither slot is a placeholder
    pub fn teams(&self) -> Option<(&TeamId, &TeamId)> {
        match (&self.team1, &self.team2) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }

    pub fn has_teams(&self) -> bool {
        self.teams().is_some()
    }

    /// True if at least one slot is still a placeholder
    pub fn has_empty_slot(&self) -> bool {
        self.team1.is_none() || self.team2.is_none()
    }

    pub fn is_playable(&self) -> bool {
        self.has_teams() && !self.played
    }

    pub fn status(&self) -> MatchStatus {
        if self.played {
            MatchStatus::Played
        } else if self.has_teams() {
            MatchStatus::Playable
        } else {
            MatchStatus::Waiting
        }
    }

    /// Goals for minus goals against for `team`, or None if it did not take
    /// part in this fixture
    pub fn net_goals_for(&self, team: &TeamId) -> Option<i64> {
        let (g1, g2) = (i64::from(self.team1_goals), i64::from(self.team2_goals));
        if self.team1.as_ref() == Some(team) {
            Some(g1 - g2)
        } else if self.team2.as_ref() == Some(team) {
            Some(g2 - g1)
        } else {
            None
        }
    }

    pub fn involves(&self, team: &TeamId) -> bool {
        self.team1.as_ref() == Some(team) || self.team2.as_ref() == Some(team)
    }

    pub fn is_resolved(&self) -> bool {
        self.winner.is_some() && self.loser.is_some()
    }

    /// Store a final score and mark the fixture played. Winner and loser are
    /// left to the progression engine.
    pub(crate) fn record_score(&mut self, team1_goals: u32, team2_goals: u32) {
        self.team1_goals = team1_goals;
        self.team2_goals = team2_goals;
        self.played = true;
        self.winner = None;
        self.loser = None;
    }

    pub(crate) fn assign(&mut self, team1: TeamId, team2: TeamId) {
        self.team1 = Some(team1);
        self.team2 = Some(team2);
    }
}
