//! Knockout engine for eight-team championships
//!
//! This crate provides:
//! - The bracket draw (four quarterfinals plus placeholder fixtures)
//! - Winner resolution with goal, net-goal and registration-order tiebreaks
//! - Round progression up to the final standings
//! - Simulated and manual match outcomes
//!
//! Every operation takes a [`Championship`] snapshot and returns a new one.
//! Randomness is always passed in, so a seeded generator reproduces a
//! whole tournament.
//!
//! ```
//! use cup_core::{create_championship, simulate_all, standings, Roster};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let mut roster = Roster::new();
//! for name in ["A", "B", "C", "D", "E", "F", "G", "H"] {
//!     roster.register(name).unwrap();
//! }
//! let cup = create_championship("Cup A", roster.into_teams(), &mut rng).unwrap();
//! let cup = simulate_all(&cup, &mut rng).unwrap();
//! assert!(standings(&cup).is_some());
//! ```

pub mod bracket;
pub mod championship;
pub mod engine;
pub mod error;
pub mod fixture;
pub mod outcome;
pub mod progression;
pub mod team;
pub mod tiebreak;
pub mod types;

pub use championship::*;
pub use engine::*;
pub use error::{CupError, Result};
pub use fixture::*;
pub use outcome::*;
pub use progression::{advance, Transition};
pub use team::*;
pub use tiebreak::{net_goal_differential, resolve, Decider, Resolution};
pub use types::*;
