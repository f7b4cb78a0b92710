//! Plain-text reports for championships

use cup_core::{
    Championship, ChampionshipStatus, Match, Round, RoundStatus, Standings, TeamId, MATCH_COUNT,
};

/// Generate a text report of the whole bracket
pub fn bracket_report(championship: &Championship) -> String {
    let mut report = String::new();
    report.push_str(&format!("=== Championship: {} ===\n", championship.name));
    report.push_str(&format!("Id: {}\n", championship.id));
    report.push_str(&format!(
        "Created: {}\n",
        championship.created_at.format("%Y-%m-%d %H:%M")
    ));
    report.push_str(&format!(
        "Matches played: {} / {}\n",
        championship.played_count(),
        MATCH_COUNT
    ));
    match championship.current_round() {
        Some(round) => report.push_str(&format!("Current round: {}\n\n", round)),
        None => report.push_str("Status: completed\n\n"),
    }

    for round in Round::ALL {
        let status = match championship.round_status(round) {
            RoundStatus::Waiting => "waiting",
            RoundStatus::Playable => "playable",
            RoundStatus::Complete => "complete",
        };
        report.push_str(&format!("{} ({})\n", round, status));
        report.push_str(&"-".repeat(60));
        report.push('\n');
        for fixture in championship.fixtures_in(round) {
            report.push_str(&fixture_line(championship, fixture));
            report.push('\n');
        }
        report.push('\n');
    }

    if let Some(standings) = championship.standings() {
        report.push_str(&standings_report(championship, &standings));
    }
    report
}

fn fixture_line(championship: &Championship, fixture: &Match) -> String {
    let name = |slot: &Option<TeamId>| match slot {
        Some(id) => championship.team_name(id).to_string(),
        None => "TBD".to_string(),
    };
    let score = if fixture.played {
        format!("{:>2} - {:<2}", fixture.team1_goals, fixture.team2_goals)
    } else {
        " -  - ".to_string()
    };
    let winner = fixture
        .winner
        .as_ref()
        .map(|w| format!("  winner: {}", championship.team_name(w)))
        .unwrap_or_default();

    format!(
        "{:<10} {:>20} {} {:<20}{}",
        fixture.id,
        name(&fixture.team1),
        score,
        name(&fixture.team2),
        winner
    )
}

/// Podium lines for a completed championship
pub fn standings_report(championship: &Championship, standings: &Standings) -> String {
    let labels = ["Champion", "Runner-up", "Third place", "Fourth place"];
    let mut report = String::from("Final standings:\n");
    for ((place, team), label) in standings.podium().into_iter().zip(labels) {
        report.push_str(&format!(
            "{}. {:<14} {}\n",
            place,
            label,
            championship.team_name(team)
        ));
    }
    report
}

/// Teams with their registration order and net goals
pub fn teams_report(championship: &Championship) -> String {
    let mut report = String::new();
    report.push_str(&format!("{:<5} {:<24} {:>6}  {}\n", "Reg", "Team", "Net", "Logo"));
    report.push_str(&"-".repeat(44));
    report.push('\n');

    let mut teams: Vec<_> = championship.teams.iter().collect();
    teams.sort_by_key(|t| t.registration_order);
    for team in teams {
        report.push_str(&format!(
            "{:<5} {:<24} {:>+6}  {}\n",
            team.registration_order,
            team.name,
            team.points,
            team.logo.as_deref().unwrap_or("-")
        ));
    }
    report
}

/// One line per championship
pub fn list_line(championship: &Championship) -> String {
    let state = match championship.status() {
        ChampionshipStatus::Completed => {
            let winner = championship
                .winner
                .as_ref()
                .map(|w| championship.team_name(w))
                .unwrap_or("-");
            format!("completed, won by {}", winner)
        }
        ChampionshipStatus::InProgress => format!(
            "in progress, {}/{} played",
            championship.played_count(),
            MATCH_COUNT
        ),
    };
    format!(
        "{}  {}  {:<24} {}",
        championship.id,
        championship.created_at.format("%Y-%m-%d"),
        championship.name,
        state
    )
}
