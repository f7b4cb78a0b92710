//! Match outcome producer
//!
//! Both kinds of outcome go through [`apply_outcome`], which only stores the
//! score. Winner and loser are filled by the progression pass that follows,
//! so simulated and manually entered results are resolved the same way.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::championship::Championship;
use crate::error::{CupError, Result};
use crate::types::MatchId;

/// Highest goal count a simulated team can score
pub const MAX_SIMULATED_GOALS: u32 = 5;

/// How a fixture's score is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Draw both goal counts uniformly from `0..=MAX_SIMULATED_GOALS`
    Simulated,
    /// Externally supplied score
    Manual { team1_goals: i32, team2_goals: i32 },
}

impl Outcome {
    pub fn manual(team1_goals: i32, team2_goals: i32) -> Self {
        Outcome::Manual {
            team1_goals,
            team2_goals,
        }
    }

    /// Turn the outcome into a concrete score
    pub fn score<R: Rng + ?Sized>(self, rng: &mut R) -> Result<(u32, u32)> {
        match self {
            Outcome::Simulated => Ok(simulate_score(rng)),
            Outcome::Manual {
                team1_goals,
                team2_goals,
            } => match (u32::try_from(team1_goals), u32::try_from(team2_goals)) {
                (Ok(g1), Ok(g2)) => Ok((g1, g2)),
                _ => Err(CupError::InvalidScore {
                    team1_goals,
                    team2_goals,
                }),
            },
        }
    }
}

pub fn simulate_score<R: Rng + ?Sized>(rng: &mut R) -> (u32, u32) {
    (
        rng.gen_range(0..=MAX_SIMULATED_GOALS),
        rng.gen_range(0..=MAX_SIMULATED_GOALS),
    )
}

/// Record `outcome` on fixture `id` and mark it played.
///
/// Refused when the championship is already completed, the fixture still has
/// a placeholder slot, or it already has a result. Nothing is changed on error.
pub fn apply_outcome<R: Rng + ?Sized>(
    championship: &mut Championship,
    id: MatchId,
    outcome: Outcome,
    rng: &mut R,
) -> Result<(u32, u32)> {
    let completed = championship.completed;
    let fixture = championship.fixture_mut(id)?;

    let reason = if completed {
        Some("championship is already completed")
    } else if fixture.has_empty_slot() {
        Some("team slots are still placeholders")
    } else if fixture.played {
        Some("match has already been played")
    } else {
        None
    };
    if let Some(reason) = reason {
        return Err(CupError::IllegalTransition {
            match_id: id,
            reason,
        });
    }

    let (team1_goals, team2_goals) = outcome.score(rng)?;
    fixture.record_score(team1_goals, team2_goals);
    debug!(fixture = %id, ?outcome, team1_goals, team2_goals, "score recorded");
    Ok((team1_goals, team2_goals))
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod outcome_tests;
