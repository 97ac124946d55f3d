use std::num::ParseIntError;
use std::str::FromStr;

use derive_more::{AsRef, Display, From};
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};

/// One of the two group-stage pools. The page always lists Group A before
/// Group B, in that order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum GroupName {
    A,
    B,
}

impl GroupName {
    pub fn label(self) -> &'static str {
        match self {
            GroupName::A => "Group A",
            GroupName::B => "Group B",
        }
    }

    /// Position of this group's container among its siblings on the page.
    pub fn position(self) -> usize {
        match self {
            GroupName::A => 0,
            GroupName::B => 1,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("group name must be \"A\" or \"B\", got {0:?}")]
pub struct InvalidGroupName(String);

impl FromStr for GroupName {
    type Err = InvalidGroupName;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(GroupName::A),
            "B" => Ok(GroupName::B),
            _ => Err(InvalidGroupName(s.to_owned())),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, From, AsRef, Display, Serialize, Deserialize)]
#[as_ref(forward)]
pub struct TeamName(String);

/// One standings row: the cleaned team name, the remaining cell texts in
/// page order, and the group the row came from.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct GroupRecord {
    #[getset(get = "pub")]
    team: TeamName,
    #[getset(get = "pub")]
    stats: Vec<String>,
    #[getset(get_copy = "pub")]
    group: GroupName,
}

impl GroupRecord {
    pub fn new(team: TeamName, stats: Vec<String>, group: GroupName) -> Self {
        Self { team, stats, group }
    }
}

/// Standings rows plus the column names they align with. `columns` starts
/// with "Team" and ends with "Group"; `stats` of each row covers everything
/// in between. Team names are assumed unique, not verified.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct StandingsTable {
    #[getset(get = "pub")]
    columns: Vec<String>,
    #[getset(get = "pub")]
    rows: Vec<GroupRecord>,
}

impl StandingsTable {
    pub fn new(columns: Vec<String>, rows: Vec<GroupRecord>) -> Self {
        Self { columns, rows }
    }
}

/// How to order the two components of a score cell.
///
/// The upstream tool sorted the components as strings in descending order,
/// which puts the winning map count first only while both counts are single
/// digits. `Lexicographic` reproduces that behavior exactly; `Numeric` is
/// the corrected ordering and diverges once a count reaches two digits.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ScoreOrder {
    #[default]
    Lexicographic,
    Numeric,
}

impl ScoreOrder {
    /// Orders the two trimmed score components so the larger one (under
    /// this ordering) comes first. `Numeric` fails on non-integer text.
    pub fn pair(self, left: String, right: String) -> Result<ScorePair, ParseIntError> {
        let in_order = match self {
            ScoreOrder::Lexicographic => left >= right,
            ScoreOrder::Numeric => left.parse::<u32>()? >= right.parse::<u32>()?,
        };
        Ok(if in_order {
            ScorePair {
                first: left,
                second: right,
            }
        } else {
            ScorePair {
                first: right,
                second: left,
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScorePair {
    #[getset(get = "pub")]
    first: String,
    #[getset(get = "pub")]
    second: String,
}

impl ScorePair {
    pub fn into_parts(self) -> (String, String) {
        (self.first, self.second)
    }
}

/// One match: the page-relative link, the winner-marked team, the remaining
/// team, and the score pair with the winning count first. Serializes to the
/// CSV columns `URL,Winner,Loser,Score 1,Score 2`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "URL")]
    #[getset(get = "pub")]
    url: String,
    #[serde(rename = "Winner")]
    #[getset(get = "pub")]
    winner: TeamName,
    #[serde(rename = "Loser")]
    #[getset(get = "pub")]
    loser: TeamName,
    #[serde(rename = "Score 1")]
    #[getset(get = "pub")]
    score_first: String,
    #[serde(rename = "Score 2")]
    #[getset(get = "pub")]
    score_second: String,
}

impl MatchRecord {
    pub fn new(url: String, winner: TeamName, loser: TeamName, score: ScorePair) -> Self {
        let (score_first, score_second) = score.into_parts();
        Self {
            url,
            winner,
            loser,
            score_first,
            score_second,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MatchResultsTable {
    #[getset(get = "pub")]
    rows: Vec<MatchRecord>,
}

impl MatchResultsTable {
    pub fn new(rows: Vec<MatchRecord>) -> Self {
        Self { rows }
    }
}
