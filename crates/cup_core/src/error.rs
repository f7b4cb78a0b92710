//! Error types for championship operations

use thiserror::Error;

use crate::types::{MatchId, TeamId};

/// Result type for championship operations
pub type Result<T> = std::result::Result<T, CupError>;

/// Validation failures reported synchronously to the caller.
///
/// None of these leave a championship half-updated: every operation works on
/// a copy and only returns it on success.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CupError {
    /// Creation with anything other than eight teams
    #[error("a championship needs exactly 8 teams, got {0}")]
    InvalidTeamCount(usize),

    /// Unknown match id
    #[error("match not found: {0}")]
    MatchNotFound(String),

    /// Negative goal count on manual entry
    #[error("invalid score {team1_goals}-{team2_goals}: goal counts cannot be negative")]
    InvalidScore { team1_goals: i32, team2_goals: i32 },

    /// Result recorded for a match that cannot take one right now
    #[error("cannot record {match_id}: {reason}")]
    IllegalTransition {
        match_id: MatchId,
        reason: &'static str,
    },

    #[error("name must not be empty")]
    EmptyName,

    #[error("roster already has 8 teams")]
    RosterFull,

    #[error("unknown team: {0}")]
    UnknownTeam(TeamId),

    #[error("team {0} appears more than once")]
    DuplicateTeam(TeamId),

    /// Registration orders must be exactly 1..=8
    #[error("invalid registration order {0}")]
    InvalidRegistrationOrder(u8),
}
