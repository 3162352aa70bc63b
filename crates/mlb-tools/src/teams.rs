//! Team tools: info, listing, search and roster

use std::sync::Arc;

use async_trait::async_trait;
use mlb_core::choices::{ROSTER_TYPES, TEAM_SEARCH_KEYS};
use mlb_core::{Args, ParamSpec, Result, Tool};
use mlb_stats::{RosterQuery, StatsProvider, TeamQuery};
use serde_json::{json, Value as JsonValue};

use crate::shape;

/// Team details by id
pub struct TeamInfoTool {
    provider: Arc<dyn StatsProvider>,
}

impl TeamInfoTool {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for TeamInfoTool {
    fn name(&self) -> &str {
        "get_mlb_team_info"
    }

    fn description(&self) -> &str {
        "Get information about a team by id: name, location, venue, league and division. \
         Example: team_id=147 is the New York Yankees."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::integer("team_id", "Team id").required(),
            ParamSpec::integer("season", "Season year"),
            ParamSpec::integer("sport_id", "Sport id"),
            ParamSpec::string("hydrate", "Additional data to hydrate in the response"),
            ParamSpec::string("fields", "Comma-separated list of fields to include"),
        ]
    }

    fn http_path(&self) -> String {
        "/mlb/team/{team_id}".to_string()
    }

    async fn execute(&self, input: JsonValue) -> Result<JsonValue> {
        let args = Args::new(&input)?;
        let team_id = args.required_id("team_id")?;
        let query = TeamQuery {
            season: args.season("season")?,
            sport_id: args.optional_sport_id("sport_id")?,
            hydrate: args.str("hydrate")?,
            fields: args.str("fields")?,
        };

        let body = self.provider.team(team_id, &query).await?;
        Ok(json!({ "team_info": shape::first_entry(body, "teams") }))
    }
}

/// Every team for a sport
pub struct TeamsTool {
    provider: Arc<dyn StatsProvider>,
}

impl TeamsTool {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for TeamsTool {
    fn name(&self) -> &str {
        "get_mlb_teams"
    }

    fn description(&self) -> &str {
        "Get all teams for a sport (default MLB), optionally for a specific season."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::integer("sport_id", "Sport id (1 = MLB)").with_default(1),
            ParamSpec::integer("season", "Season year"),
        ]
    }

    fn http_path(&self) -> String {
        "/mlb/teams".to_string()
    }

    async fn execute(&self, input: JsonValue) -> Result<JsonValue> {
        let args = Args::new(&input)?;
        let body = self
            .provider
            .teams(args.sport_id("sport_id")?, args.season("season")?)
            .await?;
        Ok(json!({ "teams": shape::unwrap_list(body, "teams") }))
    }
}

/// Team ids by name
pub struct SearchTeamsTool {
    provider: Arc<dyn StatsProvider>,
}

impl SearchTeamsTool {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for SearchTeamsTool {
    fn name(&self) -> &str {
        "get_mlb_search_teams"
    }

    fn description(&self) -> &str {
        "Search MLB teams by name and return matching team ids. Tries an exact match on \
         search_key first, then a partial match across full name, team name, abbreviation \
         and location. Example: team_name=Yankees."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::string("team_name", "Team name or part of it").required(),
            ParamSpec::choice("search_key", TEAM_SEARCH_KEYS, "Field for the exact match")
                .with_default("name"),
        ]
    }

    fn http_path(&self) -> String {
        "/mlb/search_teams".to_string()
    }

    async fn execute(&self, input: JsonValue) -> Result<JsonValue> {
        let args = Args::new(&input)?;
        let team_name = args.required_str("team_name")?;
        let search_key = args.choice_or("search_key", TEAM_SEARCH_KEYS, "name")?;

        let body = self.provider.teams(1, None).await?;
        let team_ids = shape::search_teams(&body, &team_name, search_key);
        Ok(json!({ "team_ids": team_ids }))
    }
}

/// Team roster with optional filters
pub struct RosterTool {
    provider: Arc<dyn StatsProvider>,
}

impl RosterTool {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for RosterTool {
    fn name(&self) -> &str {
        "get_mlb_roster"
    }

    fn description(&self) -> &str {
        "Get a team roster by team_id, optionally filtered by roster type \
         (40Man, fullSeason, fullRoster, nonRosterInvitees, active, allTime, depthChart, \
         gameday, coach), season or date."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::integer("team_id", "Team id").required(),
            ParamSpec::choice("rosterType", ROSTER_TYPES, "Roster type"),
            ParamSpec::integer("season", "Season year"),
            ParamSpec::date("date", "Roster as of this date"),
            ParamSpec::string("hydrate", "Additional data to hydrate, e.g. person(stats)"),
            ParamSpec::string("fields", "Comma-separated list of fields to include"),
        ]
    }

    fn http_path(&self) -> String {
        "/mlb/roster".to_string()
    }

    async fn execute(&self, input: JsonValue) -> Result<JsonValue> {
        let args = Args::new(&input)?;
        let team_id = args.required_id("team_id")?;
        let query = RosterQuery {
            roster_type: args.choice("rosterType", ROSTER_TYPES)?.map(str::to_string),
            season: args.season("season")?,
            date: args.date("date")?,
            hydrate: args.str("hydrate")?,
            fields: args.str("fields")?,
        };

        let body = self.provider.roster(team_id, &query).await?;
        Ok(json!({
            "team_id": team_id,
            "roster": shape::unwrap_list(body, "roster"),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeProvider;
    use mlb_core::Error;

    #[tokio::test]
    async fn test_team_info() {
        let provider = FakeProvider::new();
        let tool = TeamInfoTool::new(provider.clone());
        let result = tool.execute(json!({"team_id": "147"})).await.unwrap();
        assert_eq!(result["team_info"]["id"], 147);
        assert_eq!(provider.calls(), vec!["team 147"]);
    }

    #[tokio::test]
    async fn test_team_info_requires_positive_id() {
        let tool = TeamInfoTool::new(FakeProvider::new());
        let err = tool.execute(json!({"team_id": 0})).await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_teams_listing() {
        let tool = TeamsTool::new(FakeProvider::new());
        let result = tool.execute(json!({})).await.unwrap();
        assert_eq!(result["teams"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_search_teams() {
        let tool = SearchTeamsTool::new(FakeProvider::new());

        let result = tool.execute(json!({"team_name": "Yankees"})).await.unwrap();
        assert_eq!(result["team_ids"], json!([147]));

        let result = tool
            .execute(json!({"team_name": "nym", "search_key": "ABBREVIATION"}))
            .await
            .unwrap();
        assert_eq!(result["team_ids"], json!([121]));

        let result = tool.execute(json!({"team_name": "Dodgers"})).await.unwrap();
        assert_eq!(result["team_ids"], json!([]));
    }

    #[tokio::test]
    async fn test_roster_type_normalized() {
        let provider = FakeProvider::new();
        let tool = RosterTool::new(provider.clone());

        let result = tool
            .execute(json!({"team_id": 147, "rosterType": "40man"}))
            .await
            .unwrap();
        assert_eq!(result["roster"][0]["person"]["fullName"], "Aaron Judge");
        assert_eq!(provider.calls(), vec!["roster 147 type=40Man"]);
    }

    #[tokio::test]
    async fn test_roster_rejects_unknown_type_and_bad_date() {
        let provider = FakeProvider::new();
        let tool = RosterTool::new(provider.clone());

        let err = tool
            .execute(json!({"team_id": 147, "rosterType": "minors"}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(msg) if msg.contains("rosterType")));

        let err = tool
            .execute(json!({"team_id": 147, "date": "not-a-date"}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(provider.calls().is_empty());
    }
}
