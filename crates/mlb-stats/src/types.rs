//! Typed query shapes accepted by the statistics client
//!
//! Field names serialize to the camelCase query parameters the Stats API
//! expects. `None` fields are omitted from the query string.

use chrono::NaiveDate;
use serde::Serialize;

/// `GET /standings`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsQuery {
    pub league_id: u32,
    pub season: i32,
    /// Comma-separated standings types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standings_types: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hydrate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// `GET /schedule`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleQuery {
    pub sport_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<u64>,
}

/// `GET /teams/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sport_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hydrate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Snapshot selection for game feeds (boxscore, play-by-play)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameQuery {
    /// `YYYYMMDD_HHMMSS`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timecode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// `GET /teams/{id}/roster`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roster_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hydrate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Stats for several people in one request
///
/// Sent as `GET /people?personIds=..&hydrate=stats(..)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerStatsQuery {
    pub person_ids: Vec<u64>,
    pub groups: Vec<String>,
    pub stat_types: Vec<String>,
    pub season: Option<i32>,
    pub event_type: Option<String>,
}

impl PlayerStatsQuery {
    /// Comma-separated `personIds` value
    pub fn person_ids_param(&self) -> String {
        self.person_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// `stats(...)` hydration expression
    pub fn hydrate_param(&self) -> String {
        let mut parts = Vec::new();
        if !self.groups.is_empty() {
            parts.push(format!("group=[{}]", self.groups.join(",")));
        }
        if !self.stat_types.is_empty() {
            parts.push(format!("type=[{}]", self.stat_types.join(",")));
        }
        if let Some(season) = self.season {
            parts.push(format!("season={}", season));
        }
        format!("stats({})", parts.join(","))
    }
}
