//! Championship runner
//!
//! This crate provides infrastructure for:
//! - Storing championships keyed by id (JSON file or in memory)
//! - Loading runner configuration from `cup.toml`
//! - Text reports of brackets, standings and history
//!
//! # Usage
//!
//! ```bash
//! # Register eight teams and draw the bracket
//! cargo run -p cup_tournament -- create --name "Cup A" --team Lions --team Tigers ...
//! # Logos pair with teams by position
//! cargo run -p cup_tournament -- create --name "Cup B" --team Lions --logo logos/lions.png ...
//!
//! # Enter a score, or simulate one match or the rest of the championship
//! cargo run -p cup_tournament -- score <id> qf-1 3 1
//! cargo run -p cup_tournament -- play <id> qf-2
//! cargo run -p cup_tournament -- simulate-all <id>
//! ```

mod config;
mod history;
mod report;
mod store;

pub use config::*;
pub use history::*;
pub use report::*;
pub use store::*;
