use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::CupError;

/// Teams in every championship
pub const TEAM_COUNT: usize = 8;
/// Fixtures in every championship (4 + 2 + 1 + 1)
pub const MATCH_COUNT: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(format!("team-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChampionshipId(String);

impl ChampionshipId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(format!("champ-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChampionshipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Knockout round a fixture belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Round {
    Quarterfinal,
    Semifinal,
    /// Third-place match and final
    Finals,
}

impl Round {
    pub const ALL: [Round; 3] = [Round::Quarterfinal, Round::Semifinal, Round::Finals];

    /// 1-based round number
    pub fn number(self) -> u8 {
        match self {
            Round::Quarterfinal => 1,
            Round::Semifinal => 2,
            Round::Finals => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Round::Quarterfinal => "Quarterfinals",
            Round::Semifinal => "Semifinals",
            Round::Finals => "Finals",
        }
    }

    pub fn fixtures(self) -> &'static [MatchId] {
        match self {
            Round::Quarterfinal => &MatchId::QUARTERFINALS,
            Round::Semifinal => &MatchId::SEMIFINALS,
            Round::Finals => &MatchId::FINALS,
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// The fixed id space of an eight-team bracket.
///
/// Serialized as its string form (`qf-1`, `sf-2`, `3rd-place`, `final`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MatchId {
    Qf1,
    Qf2,
    Qf3,
    Qf4,
    Sf1,
    Sf2,
    ThirdPlace,
    Final,
}

impl MatchId {
    pub const ALL: [MatchId; MATCH_COUNT] = [
        MatchId::Qf1,
        MatchId::Qf2,
        MatchId::Qf3,
        MatchId::Qf4,
        MatchId::Sf1,
        MatchId::Sf2,
        MatchId::ThirdPlace,
        MatchId::Final,
    ];
    pub const QUARTERFINALS: [MatchId; 4] = [MatchId::Qf1, MatchId::Qf2, MatchId::Qf3, MatchId::Qf4];
    pub const SEMIFINALS: [MatchId; 2] = [MatchId::Sf1, MatchId::Sf2];
    pub const FINALS: [MatchId; 2] = [MatchId::ThirdPlace, MatchId::Final];

    pub fn as_str(self) -> &'static str {
        match self {
            MatchId::Qf1 => "qf-1",
            MatchId::Qf2 => "qf-2",
            MatchId::Qf3 => "qf-3",
            MatchId::Qf4 => "qf-4",
            MatchId::Sf1 => "sf-1",
            MatchId::Sf2 => "sf-2",
            MatchId::ThirdPlace => "3rd-place",
            MatchId::Final => "final",
        }
    }

    pub fn round(self) -> Round {
        match self {
            MatchId::Qf1 | MatchId::Qf2 | MatchId::Qf3 | MatchId::Qf4 => Round::Quarterfinal,
            MatchId::Sf1 | MatchId::Sf2 => Round::Semifinal,
            MatchId::ThirdPlace | MatchId::Final => Round::Finals,
        }
    }

    /// Position within the round. In the finals round the third-place match is 1
    /// and the final is 2.
    pub fn match_number(self) -> u8 {
        match self {
            MatchId::Qf1 | MatchId::Sf1 | MatchId::ThirdPlace => 1,
            MatchId::Qf2 | MatchId::Sf2 | MatchId::Final => 2,
            MatchId::Qf3 => 3,
            MatchId::Qf4 => 4,
        }
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for MatchId {
    type Err = CupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatchId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CupError::MatchNotFound(s.to_string()))
    }
}

impl TryFrom<String> for MatchId {
    type Error = CupError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MatchId> for String {
    fn from(id: MatchId) -> Self {
        id.as_str().to_string()
    }
}
