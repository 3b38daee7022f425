//! Cache-then-fetch aggregation over the upstream API.
//!
//! Both operations follow the same shape: cache check, upstream fetch on a
//! miss, map, best-effort cache write. The detail operation fans out twice
//! with `try_join!`; each fan-out is a join barrier, so one failed member
//! fails the whole request and nothing partial is returned or cached.

use tracing::{info, instrument};

use crate::db::cache::{CacheLookup, CacheStore};
use crate::domain::mapper::{map_match, map_matches_page, map_squad};
use crate::domain::models::{DetailTeam, MatchDetail, MatchDetailResponse, MatchesResponse};
use crate::domain::prediction::predict;
use crate::error::FetchError;
use crate::upstream::client::FootballApiClient;

const MATCHES_CACHE_KEY: &str = "matches";

pub struct MatchService {
    client: FootballApiClient,
    cache: CacheStore,
}

impl MatchService {
    pub fn new(client: FootballApiClient, cache: CacheStore) -> Self {
        Self { client, cache }
    }

    /// Today's fixtures across all competitions.
    #[instrument(skip(self))]
    pub async fn get_matches(&self) -> Result<MatchesResponse, FetchError> {
        if let CacheLookup::Hit(cached) = self.cache.get(MATCHES_CACHE_KEY).await {
            info!("Matches list served from cache");
            return Ok(cached);
        }

        let page = self.client.matches().await?;
        let response = map_matches_page(&page)?;
        info!(count = response.matches.len(), "Matches list fetched from upstream");

        self.cache.set(MATCHES_CACHE_KEY, &response).await;
        Ok(response)
    }

    /// Full detail for one fixture: squads for both sides plus a score
    /// prediction from head-to-head history.
    #[instrument(skip(self), fields(match_id = %match_id))]
    pub async fn get_match_detail(&self, match_id: &str) -> Result<MatchDetailResponse, FetchError> {
        let cache_key = format!("match_detail_{match_id}");
        if let CacheLookup::Hit(cached) = self.cache.get(&cache_key).await {
            info!("Match detail served from cache");
            return Ok(cached);
        }

        // Primary fan-out: history and the fixture itself.
        let (head_to_head, raw_match) = tokio::try_join!(
            self.client.head_to_head(match_id),
            self.client.match_by_id(match_id),
        )?;

        let summary = map_match(&raw_match)?;

        // Secondary fan-out, keyed off the resolved fixture. The standings
        // response is not projected into the output but still has to
        // succeed for the aggregation to count as complete.
        let (_standings, home_detail, away_detail) = tokio::try_join!(
            self.client.standings(&summary.competition.code),
            self.client.team(summary.home_team.id),
            self.client.team(summary.away_team.id),
        )?;

        let prediction = predict(&head_to_head.matches);
        info!(
            h2h_matches = head_to_head.matches.len(),
            predicted_home = prediction.score.full_time.home,
            predicted_away = prediction.score.full_time.away,
            "Match detail assembled"
        );

        let response = MatchDetailResponse {
            match_detail: MatchDetail {
                id: summary.id,
                utc_date: summary.utc_date,
                home_team: DetailTeam::from_parts(
                    summary.home_team,
                    map_squad(home_detail.squad.as_deref()),
                ),
                away_team: DetailTeam::from_parts(
                    summary.away_team,
                    map_squad(away_detail.squad.as_deref()),
                ),
                area: summary.area,
                competition: summary.competition,
                prediction,
            },
        };

        self.cache.set(&cache_key, &response).await;
        Ok(response)
    }
}
