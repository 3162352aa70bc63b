//! Player tools: info, listing, search and stats

use std::sync::Arc;

use async_trait::async_trait;
use mlb_core::choices::{PLAYER_SEARCH_KEYS, STAT_GROUPS, STAT_TYPES};
use mlb_core::{Args, ParamSpec, Result, Tool};
use mlb_stats::{PlayerStatsQuery, StatsProvider};
use serde_json::{json, Value as JsonValue};

use crate::shape;

/// Biographical details for one player
pub struct PlayerInfoTool {
    provider: Arc<dyn StatsProvider>,
}

impl PlayerInfoTool {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for PlayerInfoTool {
    fn name(&self) -> &str {
        "get_mlb_player_info"
    }

    fn description(&self) -> &str {
        "Get information about a player by id: name, position, team and biographical details. \
         Example: player_id=592450 is Aaron Judge."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![ParamSpec::integer("player_id", "Player id").required()]
    }

    fn http_path(&self) -> String {
        "/mlb/player/{player_id}".to_string()
    }

    async fn execute(&self, input: JsonValue) -> Result<JsonValue> {
        let args = Args::new(&input)?;
        let player_id = args.required_id("player_id")?;
        let body = self.provider.person(player_id).await?;
        Ok(json!({ "player_info": shape::first_entry(body, "people") }))
    }
}

/// Every player for a sport
pub struct PlayersTool {
    provider: Arc<dyn StatsProvider>,
}

impl PlayersTool {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for PlayersTool {
    fn name(&self) -> &str {
        "get_mlb_players"
    }

    fn description(&self) -> &str {
        "Get all players for a sport (default MLB), optionally for a specific season."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::integer("sport_id", "Sport id (1 = MLB)").with_default(1),
            ParamSpec::integer("season", "Season year"),
        ]
    }

    fn http_path(&self) -> String {
        "/mlb/players".to_string()
    }

    async fn execute(&self, input: JsonValue) -> Result<JsonValue> {
        let args = Args::new(&input)?;
        let body = self
            .provider
            .sport_players(args.sport_id("sport_id")?, args.season("season")?)
            .await?;
        Ok(json!({ "players": shape::unwrap_list(body, "people") }))
    }
}

/// Player ids by name
pub struct SearchPlayersTool {
    provider: Arc<dyn StatsProvider>,
}

impl SearchPlayersTool {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for SearchPlayersTool {
    fn name(&self) -> &str {
        "get_mlb_search_players"
    }

    fn description(&self) -> &str {
        "Search players by name and return matching player ids. \
         Example: fullname=Aaron Judge."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::string("fullname", "Name to match (case-insensitive, exact)").required(),
            ParamSpec::integer("sport_id", "Sport id (1 = MLB)").with_default(1),
            ParamSpec::choice("search_key", PLAYER_SEARCH_KEYS, "Person field to match on")
                .with_default("fullName"),
        ]
    }

    fn http_path(&self) -> String {
        "/mlb/search_players".to_string()
    }

    async fn execute(&self, input: JsonValue) -> Result<JsonValue> {
        let args = Args::new(&input)?;
        let fullname = args.required_str("fullname")?;
        let sport_id = args.sport_id("sport_id")?;
        let search_key = args.choice_or("search_key", PLAYER_SEARCH_KEYS, "fullName")?;

        let body = self.provider.sport_players(sport_id, None).await?;
        let player_ids = shape::search_people(&body, &fullname, search_key);
        Ok(json!({ "player_ids": player_ids }))
    }
}

/// Stats for several players at once
pub struct PlayerStatsTool {
    provider: Arc<dyn StatsProvider>,
}

impl PlayerStatsTool {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for PlayerStatsTool {
    fn name(&self) -> &str {
        "get_multiple_mlb_player_stats"
    }

    fn description(&self) -> &str {
        "Get stats for one or more players (comma-separated player_ids), filtered by stat \
         group (hitting, pitching, fielding, catching, running), stat type (e.g. season, \
         career, gameLog), season, and optionally eventType. \
         Example: player_ids=592450,605141&group=hitting&type=season&season=2023."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::id_list("player_ids", "Comma-separated player ids").required(),
            ParamSpec::choice_list("group", STAT_GROUPS, "Comma-separated stat groups"),
            ParamSpec::choice_list("type", STAT_TYPES, "Comma-separated stat types"),
            ParamSpec::integer("season", "Season year"),
            ParamSpec::string("eventType", "Event type filter for play logs, e.g. home_run"),
        ]
    }

    fn http_path(&self) -> String {
        "/mlb/player_stats".to_string()
    }

    async fn execute(&self, input: JsonValue) -> Result<JsonValue> {
        let args = Args::new(&input)?;
        let to_strings = |values: Option<Vec<&str>>| -> Vec<String> {
            values
                .unwrap_or_default()
                .into_iter()
                .map(str::to_string)
                .collect()
        };

        let query = PlayerStatsQuery {
            person_ids: args.id_list("player_ids")?,
            groups: to_strings(args.choice_list("group", STAT_GROUPS)?),
            stat_types: to_strings(args.choice_list("type", STAT_TYPES)?),
            season: args.season("season")?,
            event_type: args.str("eventType")?,
        };

        let body = self.provider.people_stats(&query).await?;
        Ok(json!({ "player_stats": shape::player_stats(&body) }))
    }
}
