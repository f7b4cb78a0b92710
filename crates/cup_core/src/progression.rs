//! Progression engine: promotes winners into the next round's placeholders
//! and finalizes the standings.
//!
//! `advance` is safe to call any number of times. Every assignment is guarded
//! by the target fixtures still having an empty slot and completion by the
//! `completed` flag, so a pass with no newly played fixtures changes nothing.
//! It is not safe to run two passes on the same championship concurrently.

use tracing::{debug, info};

use crate::championship::Championship;
use crate::error::Result;
use crate::tiebreak::{net_goal_differential, resolve};
use crate::types::{MatchId, TeamId};

/// Round transitions fired by a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    SemifinalsDrawn,
    FinalsDrawn,
    Completed,
}

/// Apply every transition the current results allow
pub fn advance(championship: &mut Championship) -> Result<Vec<Transition>> {
    let mut transitions = Vec::new();

    resolve_played(championship)?;

    if all_played(championship, &MatchId::QUARTERFINALS)
        && has_empty_slot(championship, &MatchId::SEMIFINALS)
    {
        let [w1, w2, w3, w4] = MatchId::QUARTERFINALS.map(|id| winner_of(championship, id));
        let (w1, w2, w3, w4) = (w1?, w2?, w3?, w4?);
        championship.fixture_mut(MatchId::Sf1)?.assign(w1, w2);
        championship.fixture_mut(MatchId::Sf2)?.assign(w3, w4);
        debug!(championship = %championship.id, "semifinals drawn");
        transitions.push(Transition::SemifinalsDrawn);
    }

    if all_played(championship, &MatchId::SEMIFINALS)
        && has_empty_slot(championship, &MatchId::FINALS)
    {
        let (sf1_winner, sf1_loser) = result_of(championship, MatchId::Sf1)?;
        let (sf2_winner, sf2_loser) = result_of(championship, MatchId::Sf2)?;
        championship
            .fixture_mut(MatchId::ThirdPlace)?
            .assign(sf1_loser, sf2_loser);
        championship
            .fixture_mut(MatchId::Final)?
            .assign(sf1_winner, sf2_winner);
        debug!(championship = %championship.id, "final and third-place match drawn");
        transitions.push(Transition::FinalsDrawn);
    }

    if !championship.completed && all_played(championship, &MatchId::FINALS) {
        let (winner, runner_up) = result_of(championship, MatchId::Final)?;
        let (third, fourth) = result_of(championship, MatchId::ThirdPlace)?;
        let champion = championship.team_name(&winner).to_string();
        championship.winner = Some(winner);
        championship.runner_up = Some(runner_up);
        championship.third_place = Some(third);
        championship.fourth_place = Some(fourth);
        championship.completed = true;
        info!(championship = %championship.id, winner = %champion, "championship completed");
        transitions.push(Transition::Completed);
    }

    refresh_points(championship);
    Ok(transitions)
}

/// Fill winner/loser of every played fixture that has both teams but no result
fn resolve_played(championship: &mut Championship) -> Result<()> {
    let pending: Vec<usize> = championship
        .matches
        .iter()
        .enumerate()
        .filter(|(_, m)| m.played && m.has_teams() && !m.is_resolved())
        .map(|(i, _)| i)
        .collect();

    for i in pending {
        let resolution = resolve(&championship.matches[i], &championship.matches, &championship.teams)?;
        let fixture = &mut championship.matches[i];
        debug!(
            fixture = %fixture.id,
            score = %format!("{}-{}", fixture.team1_goals, fixture.team2_goals),
            decided_by = ?resolution.decided_by,
            "fixture resolved"
        );
        fixture.winner = Some(resolution.winner);
        fixture.loser = Some(resolution.loser);
    }
    Ok(())
}

fn refresh_points(championship: &mut Championship) {
    let Championship { teams, matches, .. } = championship;
    for team in teams.iter_mut() {
        team.points = net_goal_differential(&team.id, matches.as_slice());
    }
}

fn all_played(championship: &Championship, ids: &[MatchId]) -> bool {
    ids.iter()
        .all(|&id| championship.fixture(id).map(|m| m.played).unwrap_or(false))
}

fn has_empty_slot(championship: &Championship, ids: &[MatchId]) -> bool {
    ids.iter()
        .any(|&id| championship.fixture(id).map(|m| m.has_empty_slot()).unwrap_or(false))
}

fn winner_of(championship: &Championship, id: MatchId) -> Result<TeamId> {
    result_of(championship, id).map(|(winner, _)| winner)
}

/// (winner, loser) of a played fixture, resolving it if needed
fn result_of(championship: &Championship, id: MatchId) -> Result<(TeamId, TeamId)> {
    let fixture = championship.fixture(id)?;
    match (&fixture.winner, &fixture.loser) {
        (Some(w), Some(l)) => Ok((w.clone(), l.clone())),
        _ => {
            let r = resolve(fixture, &championship.matches, &championship.teams)?;
            Ok((r.winner, r.loser))
        }
    }
}

#[cfg(test)]
#[path = "progression_tests.rs"]
mod progression_tests;
