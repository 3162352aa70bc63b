//! MLB Stats API client
//!
//! Thin reqwest wrapper over `https://statsapi.mlb.com/api/v1`.
//! No retries, no caching.

use std::time::Duration;

use async_trait::async_trait;
use mlb_core::StatsApiConfig;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{debug, error};

use crate::error::{Result, StatsError};
use crate::provider::StatsProvider;
use crate::types::{
    GameQuery, PlayerStatsQuery, RosterQuery, ScheduleQuery, StandingsQuery, TeamQuery,
};

/// Query string with no parameters
const NO_QUERY: &[(&str, &str)] = &[];

/// MLB Stats API client
#[derive(Clone)]
pub struct MlbStatsClient {
    client: Client,
    base_url: String,
}

impl MlbStatsClient {
    /// Create a client with the default 30 second timeout
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_settings(
            base_url,
            Duration::from_secs(30),
            concat!("mlb-gateway/", env!("CARGO_PKG_VERSION")),
        )
    }

    /// Create a client from configuration
    pub fn from_config(config: &StatsApiConfig) -> Result<Self> {
        Self::with_settings(
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
            &config.user_agent,
        )
    }

    fn with_settings(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(StatsError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET and decode the JSON body
    async fn get_json<Q>(&self, path: &str, query: &Q) -> Result<JsonValue>
    where
        Q: Serialize + ?Sized,
    {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        debug!(url = %url, "Stats API request");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(StatsError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Stats API request failed: {} {} - {}", url, status, error_text);
            return Err(StatsError::Api {
                status: status.as_u16(),
                body: error_text,
            });
        }

        response
            .json()
            .await
            .map_err(|e| StatsError::Parse(e.to_string()))
    }
}

/// Fail with `NotFound` when `key` is missing or an empty array
fn require_entries(body: JsonValue, key: &str, what: String) -> Result<JsonValue> {
    let has_entries = body
        .get(key)
        .and_then(JsonValue::as_array)
        .is_some_and(|items| !items.is_empty());

    if has_entries {
        Ok(body)
    } else {
        Err(StatsError::NotFound(what))
    }
}

#[async_trait]
impl StatsProvider for MlbStatsClient {
    async fn standings(&self, query: &StandingsQuery) -> Result<JsonValue> {
        self.get_json("standings", query).await
    }

    async fn schedule(&self, query: &ScheduleQuery) -> Result<JsonValue> {
        self.get_json("schedule", query).await
    }

    async fn team(&self, team_id: u64, query: &TeamQuery) -> Result<JsonValue> {
        let body = self.get_json(&format!("teams/{}", team_id), query).await?;
        require_entries(body, "teams", format!("team {}", team_id))
    }

    async fn teams(&self, sport_id: u32, season: Option<i32>) -> Result<JsonValue> {
        let query = TeamQuery {
            season,
            sport_id: Some(sport_id),
            ..Default::default()
        };
        self.get_json("teams", &query).await
    }

    async fn person(&self, person_id: u64) -> Result<JsonValue> {
        let body = self.get_json(&format!("people/{}", person_id), NO_QUERY).await?;
        require_entries(body, "people", format!("person {}", person_id))
    }

    async fn people_stats(&self, query: &PlayerStatsQuery) -> Result<JsonValue> {
        let mut params = vec![
            ("personIds", query.person_ids_param()),
            ("hydrate", query.hydrate_param()),
        ];
        if let Some(event_type) = &query.event_type {
            params.push(("eventType", event_type.clone()));
        }
        self.get_json("people", &params).await
    }

    async fn sport_players(&self, sport_id: u32, season: Option<i32>) -> Result<JsonValue> {
        let params: Vec<(&str, i32)> = season.map(|s| ("season", s)).into_iter().collect();
        self.get_json(&format!("sports/{}/players", sport_id), &params)
            .await
    }

    async fn boxscore(&self, game_pk: u64, query: &GameQuery) -> Result<JsonValue> {
        self.get_json(&format!("game/{}/boxscore", game_pk), query)
            .await
    }

    async fn linescore(&self, game_pk: u64) -> Result<JsonValue> {
        self.get_json(&format!("game/{}/linescore", game_pk), NO_QUERY)
            .await
    }

    async fn play_by_play(&self, game_pk: u64, query: &GameQuery) -> Result<JsonValue> {
        self.get_json(&format!("game/{}/playByPlay", game_pk), query)
            .await
    }

    async fn game_content(&self, game_pk: u64) -> Result<JsonValue> {
        self.get_json(&format!("game/{}/content", game_pk), NO_QUERY)
            .await
    }

    async fn game_pace(&self, season: i32, sport_id: u32) -> Result<JsonValue> {
        let params = [("season", season.to_string()), ("sportId", sport_id.to_string())];
        self.get_json("gamePace", &params).await
    }

    async fn sabermetrics(&self, season: i32, group: &str) -> Result<JsonValue> {
        let params = [
            ("stats", "sabermetrics".to_string()),
            ("group", group.to_string()),
            ("sportId", "1".to_string()),
            ("season", season.to_string()),
        ];
        self.get_json("stats", &params).await
    }

    async fn roster(&self, team_id: u64, query: &RosterQuery) -> Result<JsonValue> {
        self.get_json(&format!("teams/{}/roster", team_id), query)
            .await
    }

    async fn draft(&self, year: i32) -> Result<JsonValue> {
        self.get_json(&format!("draft/{}", year), NO_QUERY).await
    }

    async fn award_recipients(&self, award_id: &str) -> Result<JsonValue> {
        self.get_json(&format!("awards/{}/recipients", award_id), NO_QUERY)
            .await
    }
}
