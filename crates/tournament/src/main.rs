//! Championship CLI
//!
//! Create eight-team championships, record results and show standings.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use cup_core::{
    bracket, create_championship, record_match_result, simulate_all, standings, Championship,
    MatchId, Outcome, Roster,
};
use cup_tournament::{
    bracket_report, completed_history, list_line, standings_report, teams_report, ChampionshipStore,
    JsonFileStore, Summary, TournamentConfig, DEFAULT_CONFIG_FILE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::{info, warn};

/// Eight-team knockout championship manager
#[derive(Parser, Debug)]
#[clap(name = "cup", version)]
struct Args {
    /// Config file
    #[clap(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Championship data file (overrides the config file)
    #[clap(long, global = true, env = "CUP_DATA")]
    data: Option<PathBuf>,

    /// RNG seed for reproducible draws and simulations
    #[clap(long, global = true)]
    seed: Option<u64>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register eight teams and draw a new championship
    Create {
        #[clap(long)]
        name: String,
        /// Team name, in registration order (exactly eight)
        #[clap(long = "team", required = true)]
        teams: Vec<String>,
        /// Logo path or URL for the team given at the same position
        #[clap(long = "logo")]
        logos: Vec<String>,
        /// Keep registration order instead of a random draw
        #[clap(long)]
        seeded: bool,
    },
    /// List stored championships
    List,
    /// Show the bracket of one championship
    Show {
        id: String,
        /// Also list teams with registration order and net goals
        #[clap(long)]
        teams: bool,
    },
    /// Simulate a single match
    Play { id: String, match_id: String },
    /// Enter a match score
    Score {
        id: String,
        match_id: String,
        #[clap(allow_negative_numbers = true)]
        team1_goals: i32,
        #[clap(allow_negative_numbers = true)]
        team2_goals: i32,
    },
    /// Simulate every remaining match
    SimulateAll { id: String },
    /// Show the final standings
    Standings { id: String },
    /// Completed championships, most recent first
    History,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = TournamentConfig::load_or_default(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .init();

    let data_file = args.data.clone().unwrap_or_else(|| config.data_file.clone());
    let mut store = JsonFileStore::new(data_file);
    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match args.command {
        Command::Create {
            name,
            teams,
            logos,
            seeded,
        } => {
            if logos.len() > teams.len() {
                bail!("{} logos given for {} teams", logos.len(), teams.len());
            }
            let mut roster = Roster::new();
            for (i, team) in teams.iter().enumerate() {
                let registered = match logos.get(i) {
                    Some(logo) => roster.register_with_logo(team, logo),
                    None => roster.register(team),
                };
                registered.with_context(|| format!("registering team {team:?}"))?;
            }
            let championship = if seeded {
                bracket::seeded(&name, roster.into_teams())?
            } else {
                create_championship(&name, roster.into_teams(), &mut rng)?
            };
            store.save(&championship)?;
            println!("{}", bracket_report(&championship));
        }
        Command::List => {
            let all = store.load_all()?;
            if all.is_empty() {
                println!("No championships yet. Create one first!");
            }
            for championship in &all {
                println!("{}", list_line(championship));
            }
            let summary = Summary::of(&all);
            println!(
                "\n{} total, {} completed, {} in progress",
                summary.total, summary.completed, summary.in_progress
            );
        }
        Command::Show { id, teams } => {
            let championship = find(&store, &id)?;
            println!("{}", bracket_report(&championship));
            if teams {
                println!("{}", teams_report(&championship));
            }
        }
        Command::Play { id, match_id } => {
            record(&mut store, &id, &match_id, Outcome::Simulated, &mut rng)?;
        }
        Command::Score {
            id,
            match_id,
            team1_goals,
            team2_goals,
        } => {
            let outcome = Outcome::manual(team1_goals, team2_goals);
            record(&mut store, &id, &match_id, outcome, &mut rng)?;
        }
        Command::SimulateAll { id } => {
            let championship = find(&store, &id)?;
            let done = simulate_all(&championship, &mut rng)?;
            store.update(&done)?;
            println!("{}", bracket_report(&done));
        }
        Command::Standings { id } => {
            let championship = find(&store, &id)?;
            match standings(&championship) {
                Some(s) => print!("{}", standings_report(&championship, &s)),
                None => println!(
                    "{} is still in progress ({} played)",
                    championship.name,
                    championship.played_count()
                ),
            }
        }
        Command::History => {
            let all = store.load_all()?;
            let done = completed_history(&all);
            if done.is_empty() {
                println!("No completed championships");
            }
            for championship in done {
                println!("{}", list_line(championship));
            }
        }
    }

    Ok(())
}

fn record(
    store: &mut JsonFileStore,
    id: &str,
    match_id: &str,
    outcome: Outcome,
    rng: &mut StdRng,
) -> Result<()> {
    let championship = find(store, id)?;
    let match_id: MatchId = match_id.parse()?;
    let next = match record_match_result(&championship, match_id, outcome, rng) {
        Ok(next) => next,
        Err(e) => {
            warn!(championship = %championship.id, fixture = %match_id, "result refused: {}", e);
            return Err(e.into());
        }
    };
    store.update(&next)?;

    let fixture = next.fixture(match_id)?;
    if let Some((team1, team2)) = fixture.teams() {
        println!(
            "Final score: {} {} - {} {}",
            next.team_name(team1),
            fixture.team1_goals,
            fixture.team2_goals,
            next.team_name(team2)
        );
    }
    if let Some(s) = standings(&next) {
        info!(championship = %next.id, "championship finished");
        print!("{}", standings_report(&next, &s));
    }
    Ok(())
}

/// Look a championship up by full id or unique id prefix
fn find(store: &JsonFileStore, key: &str) -> Result<Championship> {
    let matches: Vec<Championship> = store
        .load_all()?
        .into_iter()
        .filter(|c| c.id.as_str().starts_with(key))
        .collect();
    if let Some(exact) = matches.iter().find(|c| c.id.as_str() == key) {
        return Ok(exact.clone());
    }
    match matches.as_slice() {
        [] => Err(anyhow!("no championship matches {key:?}")),
        [only] => Ok(only.clone()),
        many => bail!("{key:?} is ambiguous ({} championships match)", many.len()),
    }
}
