//! Projection from raw provider shapes to internal records.
//!
//! A fixture missing one of its required sub-objects (teams, area,
//! competition) fails the whole mapping operation. Records are never
//! silently dropped: a partial list would be indistinguishable from a
//! complete one to the UI.

use crate::domain::models::{
    Area, Competition, Match, MatchesResponse, SquadMember, Team,
};
use crate::error::FetchError;
use crate::upstream::types::{RawMatch, RawMatchesPage, RawSquadMember};

const UNKNOWN_POSITION: &str = "Unknown";

pub fn map_match(raw: &RawMatch) -> Result<Match, FetchError> {
    let home_team = raw
        .home_team
        .as_ref()
        .ok_or_else(|| missing_field(raw.id, "homeTeam"))?;
    let away_team = raw
        .away_team
        .as_ref()
        .ok_or_else(|| missing_field(raw.id, "awayTeam"))?;
    let area = raw
        .area
        .as_ref()
        .ok_or_else(|| missing_field(raw.id, "area"))?;
    let competition = raw
        .competition
        .as_ref()
        .ok_or_else(|| missing_field(raw.id, "competition"))?;

    Ok(Match {
        id: raw.id,
        utc_date: raw.utc_date,
        home_team: Team {
            id: home_team.id,
            name: home_team.name.clone(),
            short_name: home_team.short_name.clone().unwrap_or_default(),
            crest: home_team.crest.clone().unwrap_or_default(),
        },
        away_team: Team {
            id: away_team.id,
            name: away_team.name.clone(),
            short_name: away_team.short_name.clone().unwrap_or_default(),
            crest: away_team.crest.clone().unwrap_or_default(),
        },
        area: Area {
            id: area.id,
            name: area.name.clone(),
            code: area.code.clone().unwrap_or_default(),
            flag: area.flag.clone().unwrap_or_default(),
        },
        competition: Competition {
            id: competition.id,
            name: competition.name.clone(),
            code: competition.code.clone().unwrap_or_default(),
            emblem: competition.emblem.clone().unwrap_or_default(),
        },
    })
}

/// Maps a whole upstream page, failing the batch on the first malformed
/// record. `filters` and `resultSet` pass through, defaulting to `{}`.
pub fn map_matches_page(page: &RawMatchesPage) -> Result<MatchesResponse, FetchError> {
    let matches = page
        .matches
        .iter()
        .map(map_match)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MatchesResponse {
        filters: page.filters.clone().unwrap_or_else(empty_object),
        result_set: page.result_set.clone().unwrap_or_else(empty_object),
        matches,
    })
}

/// An absent roster maps to an empty squad, never an error. Per entry,
/// `position` defaults to `"Unknown"`, the rest to empty strings.
pub fn map_squad(raw: Option<&[RawSquadMember]>) -> Vec<SquadMember> {
    raw.unwrap_or_default()
        .iter()
        .map(|member| SquadMember {
            id: member.id,
            name: member.name.clone(),
            position: member
                .position
                .clone()
                .unwrap_or_else(|| UNKNOWN_POSITION.to_string()),
            date_of_birth: member.date_of_birth.clone().unwrap_or_default(),
            nationality: member.nationality.clone().unwrap_or_default(),
        })
        .collect()
}

fn missing_field(match_id: i64, field: &str) -> FetchError {
    FetchError::Malformed(format!("match {match_id} is missing {field}"))
}

fn empty_object() -> serde_json::Value {
    serde_json::json!({})
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_match(json: serde_json::Value) -> RawMatch {
        serde_json::from_value(json).expect("valid raw match")
    }

    fn complete_match() -> serde_json::Value {
        serde_json::json!({
            "id": 499135,
            "utcDate": "2026-08-23T15:00:00Z",
            "homeTeam": {"id": 57, "name": "Arsenal FC", "shortName": "Arsenal", "crest": "a.png"},
            "awayTeam": {"id": 61, "name": "Chelsea FC", "shortName": "Chelsea", "crest": "c.png"},
            "area": {"id": 2072, "name": "England", "code": "ENG", "flag": "eng.svg"},
            "competition": {"id": 2021, "name": "Premier League", "code": "PL", "emblem": "pl.png"}
        })
    }

    #[test]
    fn test_map_match_projects_all_fields() {
        let mapped = map_match(&raw_match(complete_match())).expect("should map");
        assert_eq!(mapped.id, 499135);
        assert_eq!(mapped.home_team.short_name, "Arsenal");
        assert_eq!(mapped.away_team.id, 61);
        assert_eq!(mapped.area.code, "ENG");
        assert_eq!(mapped.competition.code, "PL");
    }

    #[test]
    fn test_map_match_missing_competition_fails() {
        let mut json = complete_match();
        json.as_object_mut().unwrap().remove("competition");
        let err = map_match(&raw_match(json)).expect_err("should fail");
        assert!(err.to_string().contains("competition"));
    }

    #[test]
    fn test_map_matches_page_fails_whole_batch_on_one_bad_record() {
        let mut bad = complete_match();
        bad.as_object_mut().unwrap().remove("homeTeam");
        let page: RawMatchesPage = serde_json::from_value(serde_json::json!({
            "filters": {"dateFrom": "2026-08-23"},
            "resultSet": {"count": 2},
            "matches": [complete_match(), bad]
        }))
        .unwrap();

        assert!(map_matches_page(&page).is_err());
    }

    #[test]
    fn test_map_matches_page_defaults_passthrough_sections() {
        let page: RawMatchesPage =
            serde_json::from_value(serde_json::json!({"matches": []})).unwrap();
        let response = map_matches_page(&page).expect("should map");
        assert_eq!(response.filters, serde_json::json!({}));
        assert_eq!(response.result_set, serde_json::json!({}));
        assert!(response.matches.is_empty());
    }

    #[test]
    fn test_map_squad_absent_and_empty_are_empty() {
        assert!(map_squad(None).is_empty());
        assert!(map_squad(Some(&[])).is_empty());
    }

    #[test]
    fn test_map_squad_defaults() {
        let members: Vec<RawSquadMember> = serde_json::from_value(serde_json::json!([
            {"id": 3754, "name": "David Raya", "position": "Goalkeeper",
             "dateOfBirth": "1995-09-15", "nationality": "Spain"},
            {"id": 7889, "name": "Trialist"}
        ]))
        .unwrap();

        let squad = map_squad(Some(&members));
        assert_eq!(squad.len(), 2);
        assert_eq!(squad[0].position, "Goalkeeper");
        assert_eq!(squad[0].nationality, "Spain");
        assert_eq!(squad[1].position, "Unknown");
        assert_eq!(squad[1].date_of_birth, "");
        assert_eq!(squad[1].nationality, "");
    }
}
