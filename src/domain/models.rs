//! Internal flat records served to the UI.
//!
//! Everything here is an independent value: a cached copy is a copy, not
//! shared state. All types round-trip through serde because responses are
//! stored verbatim in the cache.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub short_name: String,
    pub crest: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub flag: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competition {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub emblem: String,
}

/// One upstream fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: i64,
    pub utc_date: DateTime<Utc>,
    pub home_team: Team,
    pub away_team: Team,
    pub area: Area,
    pub competition: Competition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadMember {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub date_of_birth: String,
    pub nationality: String,
}

/// A team enriched with its registered squad, in upstream order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailTeam {
    pub id: i64,
    pub name: String,
    pub short_name: String,
    pub crest: String,
    pub squad: Vec<SquadMember>,
}

impl DetailTeam {
    pub fn from_parts(team: Team, squad: Vec<SquadMember>) -> Self {
        Self {
            id: team.id,
            name: team.name,
            short_name: team.short_name,
            crest: team.crest,
            squad,
        }
    }
}

/// Derived score estimate — not an authoritative result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub score: PredictionScore,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionScore {
    pub full_time: PredictedFullTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictedFullTime {
    pub home: i64,
    pub away: i64,
}

impl Prediction {
    pub fn new(home: i64, away: i64) -> Self {
        Self {
            score: PredictionScore {
                full_time: PredictedFullTime { home, away },
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetail {
    pub id: i64,
    pub utc_date: DateTime<Utc>,
    pub home_team: DetailTeam,
    pub away_team: DetailTeam,
    pub area: Area,
    pub competition: Competition,
    pub prediction: Prediction,
}

/// Body of `GET /api/matches`. `filters` and `resultSet` are passed through
/// from the provider untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchesResponse {
    pub filters: Value,
    pub result_set: Value,
    pub matches: Vec<Match>,
}

/// Body of `GET /api/matches/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDetailResponse {
    #[serde(rename = "match")]
    pub match_detail: MatchDetail,
}
