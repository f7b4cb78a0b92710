use super::*;
use crate::fixture::MatchStatus;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn teams() -> Vec<Team> {
    (1..=8).map(|i| Team::new(format!("T{i}"), i)).collect()
}

#[test]
fn test_draw_creates_full_bracket() {
    let mut rng = StdRng::seed_from_u64(7);
    let c = draw("Cup A", teams(), &mut rng).unwrap();

    assert_eq!(c.name, "Cup A");
    assert!(!c.completed);
    assert_eq!(c.teams.len(), 8);
    assert_eq!(c.matches.len(), 8);

    let ids: Vec<MatchId> = c.matches.iter().map(|m| m.id).collect();
    assert_eq!(ids, MatchId::ALL.to_vec());

    let playable = c.matches.iter().filter(|m| m.status() == MatchStatus::Playable).count();
    let waiting = c.matches.iter().filter(|m| m.status() == MatchStatus::Waiting).count();
    assert_eq!(playable, 4);
    assert_eq!(waiting, 4);
}

#[test]
fn test_quarterfinals_pair_consecutive_drawn_teams() {
    let mut rng = StdRng::seed_from_u64(11);
    let c = draw("Cup", teams(), &mut rng).unwrap();

    for (i, id) in MatchId::QUARTERFINALS.into_iter().enumerate() {
        let m = c.fixture(id).unwrap();
        assert_eq!(m.team1.as_ref(), Some(&c.teams[2 * i].id));
        assert_eq!(m.team2.as_ref(), Some(&c.teams[2 * i + 1].id));
        assert_eq!(m.round(), Round::Quarterfinal);
        assert_eq!(m.match_number() as usize, i + 1);
    }
}

#[test]
fn test_every_team_plays_exactly_one_quarterfinal() {
    let mut rng = StdRng::seed_from_u64(3);
    let c = draw("Cup", teams(), &mut rng).unwrap();

    for team in &c.teams {
        let count = c
            .fixtures_in(Round::Quarterfinal)
            .filter(|m| m.involves(&team.id))
            .count();
        assert_eq!(count, 1, "{} should play once", team.name);
    }
}

#[test]
fn test_draw_is_reproducible_with_same_seed() {
    let roster = teams();
    let a = draw("Cup", roster.clone(), &mut StdRng::seed_from_u64(42)).unwrap();
    let b = draw("Cup", roster, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(a.teams, b.teams);
    assert_eq!(a.matches, b.matches);
}

#[test]
fn test_draw_resets_points() {
    let mut roster = teams();
    roster[3].points = 9;
    let c = draw("Cup", roster, &mut StdRng::seed_from_u64(1)).unwrap();
    assert!(c.teams.iter().all(|t| t.points == 0));
}

#[test]
fn test_seeded_keeps_given_order() {
    let roster = teams();
    let c = seeded("Cup", roster.clone()).unwrap();
    assert_eq!(c.teams, roster);
    let qf4 = c.fixture(MatchId::Qf4).unwrap();
    assert_eq!(qf4.teams(), Some((&roster[6].id, &roster[7].id)));
}

#[test]
fn test_finals_tier_numbering() {
    let c = seeded("Cup", teams()).unwrap();
    let third = c.fixture(MatchId::ThirdPlace).unwrap();
    let fin = c.fixture(MatchId::Final).unwrap();
    assert_eq!((third.round().number(), third.match_number()), (3, 1));
    assert_eq!((fin.round().number(), fin.match_number()), (3, 2));
}

#[test]
fn test_wrong_team_count() {
    let mut roster = teams();
    roster.pop();
    let err = draw("Cup", roster, &mut StdRng::seed_from_u64(0)).unwrap_err();
    assert_eq!(err, CupError::InvalidTeamCount(7));

    let mut roster = teams();
    roster.push(Team::new("T9", 9));
    assert_eq!(seeded("Cup", roster).unwrap_err(), CupError::InvalidTeamCount(9));
}

#[test]
fn test_blank_name() {
    assert_eq!(seeded("  ", teams()).unwrap_err(), CupError::EmptyName);
}

#[test]
fn test_duplicate_team() {
    let mut roster = teams();
    roster[7].id = roster[0].id.clone();
    assert_eq!(
        seeded("Cup", roster.clone()).unwrap_err(),
        CupError::DuplicateTeam(roster[0].id.clone())
    );
}

#[test]
fn test_registration_orders_must_be_one_through_eight() {
    let mut roster = teams();
    roster[7].registration_order = 1;
    assert_eq!(seeded("Cup", roster).unwrap_err(), CupError::InvalidRegistrationOrder(1));

    let mut roster = teams();
    roster[0].registration_order = 0;
    assert_eq!(seeded("Cup", roster).unwrap_err(), CupError::InvalidRegistrationOrder(0));
}
