//! Winner resolution for a single fixture
//!
//! Decision order:
//! 1. More goals wins.
//! 2. On a draw, higher net goal differential across every played fixture of
//!    the championship wins. The fixture being resolved counts only if it is
//!    already marked played (a draw adds zero to both sides either way).
//! 3. Still level, the lower registration order wins.
//!
//! The differential is always recomputed from match history; the `points`
//! field stored on teams is not consulted, so resolving the same fixture twice
//! gives the same answer.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::{CupError, Result};
use crate::fixture::Match;
use crate::team::Team;
use crate::types::TeamId;

/// Which tier settled a fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decider {
    Goals,
    NetGoals,
    RegistrationOrder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub winner: TeamId,
    pub loser: TeamId,
    pub decided_by: Decider,
}

/// Goals scored minus goals conceded by `team` over all played fixtures
pub fn net_goal_differential(team: &TeamId, matches: &[Match]) -> i64 {
    matches
        .iter()
        .filter(|m| m.played)
        .filter_map(|m| m.net_goals_for(team))
        .sum()
}

/// Decide winner and loser of `fixture` given the championship's history.
///
/// Fails if a slot is still a placeholder or a team is missing from `teams`.
pub fn resolve(fixture: &Match, matches: &[Match], teams: &[Team]) -> Result<Resolution> {
    let (team1, team2) = fixture.teams().ok_or(CupError::IllegalTransition {
        match_id: fixture.id,
        reason: "team slots are still placeholders",
    })?;

    let (ordering, decided_by) = match fixture.team1_goals.cmp(&fixture.team2_goals) {
        Ordering::Equal => {
            let net1 = net_goal_differential(team1, matches);
            let net2 = net_goal_differential(team2, matches);
            match net1.cmp(&net2) {
                Ordering::Equal => {
                    let order1 = registration_order(team1, teams)?;
                    let order2 = registration_order(team2, teams)?;
                    // Earlier registration ranks higher
                    (order2.cmp(&order1), Decider::RegistrationOrder)
                }
                by_net => (by_net, Decider::NetGoals),
            }
        }
        by_goals => (by_goals, Decider::Goals),
    };

    let (winner, loser) = if ordering == Ordering::Greater {
        (team1, team2)
    } else {
        (team2, team1)
    };

    Ok(Resolution {
        winner: winner.clone(),
        loser: loser.clone(),
        decided_by,
    })
}

fn registration_order(team: &TeamId, teams: &[Team]) -> Result<u8> {
    teams
        .iter()
        .find(|t| &t.id == team)
        .map(|t| t.registration_order)
        .ok_or_else(|| CupError::UnknownTeam(team.clone()))
}

#[cfg(test)]
#[path = "tiebreak_tests.rs"]
mod tiebreak_tests;
