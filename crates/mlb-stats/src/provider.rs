//! Statistics provider trait
//!
//! One method per upstream endpoint. Bodies are returned as raw JSON;
//! shaping happens in the tools layer.

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::error::Result;
use crate::types::{
    GameQuery, PlayerStatsQuery, RosterQuery, ScheduleQuery, StandingsQuery, TeamQuery,
};

/// Source of MLB statistics
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// `GET /standings`
    async fn standings(&self, query: &StandingsQuery) -> Result<JsonValue>;

    /// `GET /schedule`
    async fn schedule(&self, query: &ScheduleQuery) -> Result<JsonValue>;

    /// `GET /teams/{team_id}`; an empty `teams` array is `NotFound`
    async fn team(&self, team_id: u64, query: &TeamQuery) -> Result<JsonValue>;

    /// `GET /teams?sportId=..`
    async fn teams(&self, sport_id: u32, season: Option<i32>) -> Result<JsonValue>;

    /// `GET /people/{person_id}`; an empty `people` array is `NotFound`
    async fn person(&self, person_id: u64) -> Result<JsonValue>;

    /// `GET /people?personIds=..&hydrate=stats(..)`
    async fn people_stats(&self, query: &PlayerStatsQuery) -> Result<JsonValue>;

    /// `GET /sports/{sport_id}/players`
    async fn sport_players(&self, sport_id: u32, season: Option<i32>) -> Result<JsonValue>;

    /// `GET /game/{game_pk}/boxscore`
    async fn boxscore(&self, game_pk: u64, query: &GameQuery) -> Result<JsonValue>;

    /// `GET /game/{game_pk}/linescore`
    async fn linescore(&self, game_pk: u64) -> Result<JsonValue>;

    /// `GET /game/{game_pk}/playByPlay`
    async fn play_by_play(&self, game_pk: u64, query: &GameQuery) -> Result<JsonValue>;

    /// `GET /game/{game_pk}/content`
    async fn game_content(&self, game_pk: u64) -> Result<JsonValue>;

    /// `GET /gamePace`
    async fn game_pace(&self, season: i32, sport_id: u32) -> Result<JsonValue>;

    /// `GET /stats?stats=sabermetrics` for every qualified player in a season
    async fn sabermetrics(&self, season: i32, group: &str) -> Result<JsonValue>;

    /// `GET /teams/{team_id}/roster`
    async fn roster(&self, team_id: u64, query: &RosterQuery) -> Result<JsonValue>;

    /// `GET /draft/{year}`
    async fn draft(&self, year: i32) -> Result<JsonValue>;

    /// `GET /awards/{award_id}/recipients`
    async fn award_recipients(&self, award_id: &str) -> Result<JsonValue>;
}
