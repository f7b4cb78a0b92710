//! Bracket builder: the initial eight-team draw

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::championship::Championship;
use crate::error::{CupError, Result};
use crate::fixture::Match;
use crate::team::Team;
use crate::types::{ChampionshipId, MatchId, Round, TEAM_COUNT};

/// Build a championship with a uniformly random draw.
///
/// Consecutive pairs of the shuffled teams meet in `qf-1`..`qf-4`; the
/// remaining four fixtures start as placeholders.
pub fn draw<R: Rng + ?Sized>(name: &str, mut teams: Vec<Team>, rng: &mut R) -> Result<Championship> {
    validate(name, &teams)?;
    teams.shuffle(rng);
    Ok(build(name, teams))
}

/// Build a championship keeping `teams` in the given order (no shuffle)
pub fn seeded(name: &str, teams: Vec<Team>) -> Result<Championship> {
    validate(name, &teams)?;
    Ok(build(name, teams))
}

fn validate(name: &str, teams: &[Team]) -> Result<()> {
    if teams.len() != TEAM_COUNT {
        return Err(CupError::InvalidTeamCount(teams.len()));
    }
    if name.trim().is_empty() {
        return Err(CupError::EmptyName);
    }

    let mut ids = HashSet::new();
    let mut orders = HashSet::new();
    for team in teams {
        if !ids.insert(&team.id) {
            return Err(CupError::DuplicateTeam(team.id.clone()));
        }
        let order = team.registration_order;
        if !(1..=TEAM_COUNT as u8).contains(&order) || !orders.insert(order) {
            return Err(CupError::InvalidRegistrationOrder(order));
        }
    }
    Ok(())
}

fn build(name: &str, mut teams: Vec<Team>) -> Championship {
    for team in &mut teams {
        team.points = 0;
    }

    let mut matches: Vec<Match> = MatchId::QUARTERFINALS
        .into_iter()
        .zip(teams.chunks_exact(2))
        .map(|(id, pair)| Match::between(id, pair[0].id.clone(), pair[1].id.clone()))
        .collect();
    matches.extend(
        [Round::Semifinal, Round::Finals]
            .into_iter()
            .flat_map(|round| round.fixtures().iter().copied())
            .map(Match::placeholder),
    );

    Championship {
        id: ChampionshipId::generate(),
        name: name.trim().to_string(),
        created_at: Utc::now(),
        teams,
        matches,
        completed: false,
        winner: None,
        runner_up: None,
        third_place: None,
        fourth_place: None,
    }
}

#[cfg(test)]
#[path = "bracket_tests.rs"]
mod bracket_tests;
