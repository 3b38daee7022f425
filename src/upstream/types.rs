//! Raw football-data.org v4 response shapes.
//!
//! Deserialization is deliberately lenient: sub-objects the provider may
//! omit are `Option`, lists default to empty. Requiredness is enforced by
//! the mapper, not here, so a shape problem is reported as malformed data
//! rather than an opaque decode failure.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Page returned by `GET /matches` and `/matches/{id}/head2head`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMatchesPage {
    #[serde(default)]
    pub filters: Option<Value>,
    #[serde(default)]
    pub result_set: Option<Value>,
    #[serde(default)]
    pub matches: Vec<RawMatch>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMatch {
    pub id: i64,
    pub utc_date: DateTime<Utc>,
    pub home_team: Option<RawTeam>,
    pub away_team: Option<RawTeam>,
    pub area: Option<RawArea>,
    pub competition: Option<RawCompetition>,
    #[serde(default)]
    pub score: Option<RawScore>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTeam {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub crest: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawArea {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub flag: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCompetition {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub emblem: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScore {
    #[serde(default)]
    pub full_time: Option<RawFullTime>,
}

/// Full-time score. Both sides are null until the match has been played.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawFullTime {
    pub home: Option<i64>,
    pub away: Option<i64>,
}

/// `GET /teams/{id}` — only the roster matters here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTeamDetail {
    #[serde(default)]
    pub squad: Option<Vec<RawSquadMember>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSquadMember {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
}
