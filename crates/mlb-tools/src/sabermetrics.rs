//! Sabermetrics tool (WAR, wOBA, wRC+ and friends)

use std::sync::Arc;

use async_trait::async_trait;
use mlb_core::choices::SABERMETRIC_GROUPS;
use mlb_core::{Args, Error, ParamSpec, Result, Tool};
use mlb_stats::StatsProvider;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::shape;

pub struct SabermetricsTool {
    provider: Arc<dyn StatsProvider>,
}

impl SabermetricsTool {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for SabermetricsTool {
    fn name(&self) -> &str {
        "get_mlb_sabermetrics"
    }

    fn description(&self) -> &str {
        "Get sabermetric statistics (WAR, wOBA, wRC+ and more) for one or more players in a \
         season. Pass stat_name (e.g. war) to return a single stat; unknown stat names list \
         the available ones. Example: player_ids=592450,605141&season=2023."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::id_list("player_ids", "Comma-separated player ids").required(),
            ParamSpec::integer("season", "Season year. Defaults to the current year"),
            ParamSpec::string("stat_name", "Single stat to return, e.g. war, woba, wRc"),
            ParamSpec::choice("group", SABERMETRIC_GROUPS, "Stat group").with_default("hitting"),
        ]
    }

    fn http_path(&self) -> String {
        "/mlb/sabermetrics".to_string()
    }

    async fn execute(&self, input: JsonValue) -> Result<JsonValue> {
        let args = Args::new(&input)?;
        let player_ids = args.id_list("player_ids")?;
        let season = args.season_or_current("season")?;
        let stat_name = args.str("stat_name")?;
        let group = args.choice_or("group", SABERMETRIC_GROUPS, "hitting")?;

        let body = self.provider.sabermetrics(season, group).await?;
        if body.get("stats").is_none_or(|stats| !stats.is_array()) {
            return Err(Error::Upstream(format!(
                "no sabermetrics data found for {} {}",
                season, group
            )));
        }

        let shaped = shape::sabermetrics(&body, &player_ids, season, group, stat_name.as_deref());
        debug!(
            requested = player_ids.len(),
            found = shaped["players"].as_array().map_or(0, Vec::len),
            "Sabermetrics selected"
        );
        Ok(shaped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeProvider;
    use chrono::Datelike;
    use serde_json::json;

    #[tokio::test]
    async fn test_all_sabermetrics() {
        let provider = FakeProvider::new();
        let tool = SabermetricsTool::new(provider.clone());

        let result = tool
            .execute(json!({"player_ids": "592450,605141", "season": 2023}))
            .await
            .unwrap();

        assert_eq!(result["season"], 2023);
        assert_eq!(result["group"], "hitting");
        assert_eq!(result["players"][0]["sabermetrics"]["war"], 5.8);
        assert_eq!(provider.calls(), vec!["sabermetrics season=2023 group=hitting"]);
    }

    #[tokio::test]
    async fn test_single_stat() {
        let tool = SabermetricsTool::new(FakeProvider::new());
        let result = tool
            .execute(json!({"player_ids": "592450", "season": 2023, "stat_name": "WAR"}))
            .await
            .unwrap();
        assert_eq!(result["players"][0]["WAR"], 5.8);
    }

    #[tokio::test]
    async fn test_season_defaults_to_current_year() {
        let provider = FakeProvider::new();
        let tool = SabermetricsTool::new(provider.clone());
        tool.execute(json!({"player_ids": [592450], "group": "PITCHING"}))
            .await
            .unwrap();

        let year = chrono::Local::now().year();
        assert_eq!(
            provider.calls(),
            vec![format!("sabermetrics season={} group=pitching", year)]
        );
    }

    #[tokio::test]
    async fn test_rejects_fielding_group() {
        let tool = SabermetricsTool::new(FakeProvider::new());
        let err = tool
            .execute(json!({"player_ids": "592450", "group": "fielding"}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_upstream_error_is_not_swallowed() {
        let tool = SabermetricsTool::new(FakeProvider::failing(404));
        let err = tool
            .execute(json!({"player_ids": "592450", "season": 2023}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Upstream(_)));
    }
}
