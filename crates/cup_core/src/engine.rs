//! Public operations. Each takes a championship snapshot and returns a new one;
//! on error the input is left untouched.

use rand::Rng;
use tracing::{debug, info};

use crate::bracket;
use crate::championship::{Championship, Standings};
use crate::error::Result;
use crate::outcome::{apply_outcome, Outcome};
use crate::progression::advance;
use crate::team::Team;
use crate::types::{MatchId, Round};

/// Draw a new championship from exactly eight teams
pub fn create_championship<R: Rng + ?Sized>(
    name: &str,
    teams: Vec<Team>,
    rng: &mut R,
) -> Result<Championship> {
    let championship = bracket::draw(name, teams, rng)?;
    info!(
        championship = %championship.id,
        name = %championship.name,
        "championship created"
    );
    Ok(championship)
}

/// Record one result and run the progression pass
pub fn record_match_result<R: Rng + ?Sized>(
    championship: &Championship,
    match_id: MatchId,
    outcome: Outcome,
    rng: &mut R,
) -> Result<Championship> {
    let mut next = championship.clone();
    apply_outcome(&mut next, match_id, outcome, rng)?;
    let transitions = advance(&mut next)?;
    debug!(championship = %next.id, fixture = %match_id, ?transitions, "result recorded");
    Ok(next)
}

/// Simulate every remaining fixture round by round.
///
/// From a fresh bracket this always ends completed. A completed championship
/// is returned unchanged.
pub fn simulate_all<R: Rng + ?Sized>(championship: &Championship, rng: &mut R) -> Result<Championship> {
    let mut next = championship.clone();
    if next.completed {
        debug!(championship = %next.id, "already completed, nothing to simulate");
        return Ok(next);
    }

    for round in Round::ALL {
        let pending: Vec<MatchId> = next
            .fixtures_in(round)
            .filter(|m| m.is_playable())
            .map(|m| m.id)
            .collect();
        for id in pending {
            apply_outcome(&mut next, id, Outcome::Simulated, rng)?;
        }
        advance(&mut next)?;
    }
    Ok(next)
}

/// Final placings, None until completed
pub fn standings(championship: &Championship) -> Option<Standings> {
    championship.standings()
}
