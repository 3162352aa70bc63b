//! Standings tool

use std::sync::Arc;

use async_trait::async_trait;
use mlb_core::choices::{AMERICAN_LEAGUE_ID, LEAGUES, NATIONAL_LEAGUE_ID, STANDINGS_TYPES};
use mlb_core::{Args, ParamSpec, Result, Tool};
use mlb_stats::{StandingsQuery, StatsProvider};
use serde_json::{json, Map, Value as JsonValue};

use crate::shape;

/// Division standings for the American and/or National League
pub struct StandingsTool {
    provider: Arc<dyn StatsProvider>,
}

impl StandingsTool {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for StandingsTool {
    fn name(&self) -> &str {
        "get_mlb_standings"
    }

    fn description(&self) -> &str {
        "Get MLB standings for a season (defaults to the current year). \
         Returns per-division team records (wins, losses, winning percentage, games back) \
         for the American League (AL), the National League (NL), or both."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::integer("season", "Season year, e.g. 2023. Defaults to the current year"),
            ParamSpec::choice_list(
                "standingsTypes",
                STANDINGS_TYPES,
                "Comma-separated standings types, e.g. regularSeason or wildCard",
            ),
            ParamSpec::date("date", "Standings as of this date (YYYY-MM-DD, MM/DD/YYYY or today)"),
            ParamSpec::string("hydrate", "Additional data to hydrate in the response"),
            ParamSpec::string("fields", "Comma-separated list of fields to include"),
            ParamSpec::choice("league", LEAGUES, "League filter").with_default("both"),
        ]
    }

    fn http_path(&self) -> String {
        "/mlb/standings".to_string()
    }

    async fn execute(&self, input: JsonValue) -> Result<JsonValue> {
        let args = Args::new(&input)?;
        let season = args.season_or_current("season")?;
        let standings_types = args
            .choice_list("standingsTypes", STANDINGS_TYPES)?
            .map(|types| types.join(","));
        let date = args.date("date")?;
        let hydrate = args.str("hydrate")?;
        let fields = args.str("fields")?;
        let league = args.choice_or("league", LEAGUES, "both")?;

        let leagues: &[(&str, u32)] = match league {
            "AL" => &[("AL", AMERICAN_LEAGUE_ID)],
            "NL" => &[("NL", NATIONAL_LEAGUE_ID)],
            _ => &[("AL", AMERICAN_LEAGUE_ID), ("NL", NATIONAL_LEAGUE_ID)],
        };

        let mut standings = Map::new();
        for (key, league_id) in leagues {
            let query = StandingsQuery {
                league_id: *league_id,
                season,
                standings_types: standings_types.clone(),
                date,
                hydrate: hydrate.clone(),
                fields: fields.clone(),
            };
            let body = self.provider.standings(&query).await?;
            standings.insert(key.to_string(), shape::standings_divisions(&body));
        }

        Ok(json!({
            "season": season,
            "standings": standings,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeProvider;
    use mlb_core::Error;

    #[tokio::test]
    async fn test_american_league_only() {
        let provider = FakeProvider::new();
        let tool = StandingsTool::new(provider.clone());

        let result = tool
            .execute(json!({"season": 2023, "league": "AL"}))
            .await
            .unwrap();

        let standings = result["standings"].as_object().unwrap();
        assert_eq!(standings.keys().collect::<Vec<_>>(), vec!["AL"]);
        let team = &standings["AL"][0]["teams"][0];
        assert_eq!(team["team_name"], "New York Yankees");
        assert_eq!(team["wins"], 82);
        assert_eq!(team["losses"], 80);
        assert_eq!(provider.calls(), vec!["standings leagueId=103 season=2023"]);
    }

    #[tokio::test]
    async fn test_both_leagues_by_default() {
        let provider = FakeProvider::new();
        let tool = StandingsTool::new(provider.clone());

        let result = tool.execute(json!({"season": "2023"})).await.unwrap();

        assert!(result["standings"]["AL"].is_array());
        assert!(result["standings"]["NL"].is_array());
        assert_eq!(provider.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_league_case_insensitive() {
        let provider = FakeProvider::new();
        let tool = StandingsTool::new(provider.clone());

        let result = tool
            .execute(json!({"season": 2023, "league": "nl"}))
            .await
            .unwrap();
        assert!(result["standings"].get("AL").is_none());
        assert_eq!(provider.calls(), vec!["standings leagueId=104 season=2023"]);
    }

    #[tokio::test]
    async fn test_invalid_league() {
        let tool = StandingsTool::new(FakeProvider::new());
        let err = tool.execute(json!({"league": "AAA"})).await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_malformed_date() {
        let provider = FakeProvider::new();
        let tool = StandingsTool::new(provider.clone());
        let err = tool.execute(json!({"date": "not-a-date"})).await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let tool = StandingsTool::new(FakeProvider::failing(500));
        let err = tool.execute(json!({})).await.unwrap_err();
        assert!(matches!(err, Error::Upstream(_)));
    }
}
