//! Game tools: boxscore, linescore, highlights, pace, plays and lineups

use std::sync::Arc;

use async_trait::async_trait;
use mlb_core::{Args, ParamSpec, Result, Tool};
use mlb_stats::{GameQuery, StatsProvider};
use serde_json::{json, Value as JsonValue};

use crate::shape;

fn game_id_param() -> ParamSpec {
    ParamSpec::integer("game_id", "Game id (gamePk), e.g. 715793").required()
}

fn snapshot_params() -> [ParamSpec; 2] {
    [
        ParamSpec::string("timecode", "Feed snapshot timecode, format YYYYMMDD_HHMMSS"),
        ParamSpec::string("fields", "Comma-separated list of fields to include"),
    ]
}

fn game_query(args: &Args<'_>) -> Result<GameQuery> {
    Ok(GameQuery {
        timecode: args.timecode("timecode")?,
        fields: args.str("fields")?,
    })
}

/// Full boxscore of a game
pub struct BoxscoreTool {
    provider: Arc<dyn StatsProvider>,
}

impl BoxscoreTool {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for BoxscoreTool {
    fn name(&self) -> &str {
        "get_mlb_boxscore"
    }

    fn description(&self) -> &str {
        "Get the boxscore for a game by game_id: team totals, lineups and player box lines. \
         Optionally a timecode snapshot (YYYYMMDD_HHMMSS) and a fields filter."
    }

    fn params(&self) -> Vec<ParamSpec> {
        let mut params = vec![game_id_param()];
        params.extend(snapshot_params());
        params
    }

    fn http_path(&self) -> String {
        "/mlb/boxscore".to_string()
    }

    async fn execute(&self, input: JsonValue) -> Result<JsonValue> {
        let args = Args::new(&input)?;
        let game_id = args.required_id("game_id")?;
        let query = game_query(&args)?;
        let body = self.provider.boxscore(game_id, &query).await?;
        Ok(json!({ "game_id": game_id, "boxscore": body }))
    }
}

/// Inning-by-inning linescore
pub struct LinescoreTool {
    provider: Arc<dyn StatsProvider>,
}

impl LinescoreTool {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for LinescoreTool {
    fn name(&self) -> &str {
        "get_mlb_linescore"
    }

    fn description(&self) -> &str {
        "Get the inning-by-inning linescore for a game by game_id, including runs, hits and errors."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![game_id_param()]
    }

    fn http_path(&self) -> String {
        "/mlb/linescore".to_string()
    }

    async fn execute(&self, input: JsonValue) -> Result<JsonValue> {
        let args = Args::new(&input)?;
        let game_id = args.required_id("game_id")?;
        let body = self.provider.linescore(game_id).await?;
        Ok(json!({ "game_id": game_id, "linescore": body }))
    }
}

/// Video highlights
pub struct HighlightsTool {
    provider: Arc<dyn StatsProvider>,
}

impl HighlightsTool {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for HighlightsTool {
    fn name(&self) -> &str {
        "get_mlb_game_highlights"
    }

    fn description(&self) -> &str {
        "Get video highlights for a game by game_id: headline, blurb, duration and mp4 url."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![game_id_param()]
    }

    fn http_path(&self) -> String {
        "/mlb/game_highlights".to_string()
    }

    async fn execute(&self, input: JsonValue) -> Result<JsonValue> {
        let args = Args::new(&input)?;
        let game_id = args.required_id("game_id")?;
        let body = self.provider.game_content(game_id).await?;
        Ok(json!({ "game_id": game_id, "highlights": shape::highlights(&body) }))
    }
}

/// League-wide pace of play
pub struct GamePaceTool {
    provider: Arc<dyn StatsProvider>,
}

impl GamePaceTool {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for GamePaceTool {
    fn name(&self) -> &str {
        "get_mlb_game_pace"
    }

    fn description(&self) -> &str {
        "Get pace-of-game statistics (average game duration, time per plate appearance) \
         for a season. Defaults to the current year."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::integer("season", "Season year. Defaults to the current year"),
            ParamSpec::integer("sport_id", "Sport id (1 = MLB)").with_default(1),
        ]
    }

    fn http_path(&self) -> String {
        "/mlb/game_pace".to_string()
    }

    async fn execute(&self, input: JsonValue) -> Result<JsonValue> {
        let args = Args::new(&input)?;
        let season = args.season_or_current("season")?;
        let sport_id = args.sport_id("sport_id")?;
        let body = self.provider.game_pace(season, sport_id).await?;
        Ok(json!({ "season": season, "game_pace": body }))
    }
}

/// Plays of a game, optionally filtered by event type
pub struct ScoringPlaysTool {
    provider: Arc<dyn StatsProvider>,
}

impl ScoringPlaysTool {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for ScoringPlaysTool {
    fn name(&self) -> &str {
        "get_mlb_game_scoring_plays"
    }

    fn description(&self) -> &str {
        "Get the plays of a game by game_id. eventType filters the plays: scoring_play \
         returns every play that scored a run, any other value (e.g. home_run, strikeout) \
         matches the play's result event type."
    }

    fn params(&self) -> Vec<ParamSpec> {
        let mut params = vec![
            game_id_param(),
            ParamSpec::string("eventType", "Event type filter, e.g. scoring_play or home_run"),
        ];
        params.extend(snapshot_params());
        params
    }

    fn http_path(&self) -> String {
        "/mlb/game_scoring_plays".to_string()
    }

    async fn execute(&self, input: JsonValue) -> Result<JsonValue> {
        let args = Args::new(&input)?;
        let game_id = args.required_id("game_id")?;
        let event_type = args.str("eventType")?;
        let query = game_query(&args)?;

        let body = self.provider.play_by_play(game_id, &query).await?;
        let plays = shape::filter_plays(&body, event_type.as_deref());
        Ok(json!({
            "game_id": game_id,
            "event_type": event_type,
            "count": plays.len(),
            "plays": plays,
        }))
    }
}

/// Batting orders derived from the boxscore
pub struct LineupTool {
    provider: Arc<dyn StatsProvider>,
}

impl LineupTool {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for LineupTool {
    fn name(&self) -> &str {
        "get_mlb_game_lineup"
    }

    fn description(&self) -> &str {
        "Get the lineups for a game by game_id: for each side, the batting order \
         with positions and the pitchers used."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![game_id_param()]
    }

    fn http_path(&self) -> String {
        "/mlb/game_lineup".to_string()
    }

    async fn execute(&self, input: JsonValue) -> Result<JsonValue> {
        let args = Args::new(&input)?;
        let game_id = args.required_id("game_id")?;
        let body = self.provider.boxscore(game_id, &GameQuery::default()).await?;
        Ok(json!({ "game_id": game_id, "lineup": shape::lineup(&body) }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeProvider;
    use mlb_core::Error;

    #[tokio::test]
    async fn test_boxscore_has_totals_and_player_lines() {
        let tool = BoxscoreTool::new(FakeProvider::new());
        let result = tool.execute(json!({"game_id": 715793})).await.unwrap();

        let teams = &result["boxscore"]["teams"];
        assert_eq!(teams["away"]["teamStats"]["batting"]["runs"], 8);
        assert_eq!(teams["home"]["teamStats"]["batting"]["runs"], 2);
        assert_eq!(
            teams["away"]["players"]["ID592450"]["stats"]["batting"]["homeRuns"],
            1
        );
    }

    #[tokio::test]
    async fn test_boxscore_missing_game_is_upstream_failure() {
        let tool = BoxscoreTool::new(FakeProvider::failing(404));
        let err = tool.execute(json!({"game_id": 1})).await.unwrap_err();
        assert!(matches!(err, Error::Upstream(msg) if msg.contains("404")));
    }

    #[tokio::test]
    async fn test_boxscore_rejects_bad_timecode() {
        let provider = FakeProvider::new();
        let tool = BoxscoreTool::new(provider.clone());
        let err = tool
            .execute(json!({"game_id": 715793, "timecode": "yesterday"}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_linescore_and_highlights() {
        let provider = FakeProvider::new();

        let result = LinescoreTool::new(provider.clone())
            .execute(json!({"game_id": "715793"}))
            .await
            .unwrap();
        assert_eq!(result["linescore"]["currentInning"], 9);

        let result = HighlightsTool::new(provider.clone())
            .execute(json!({"game_id": 715793}))
            .await
            .unwrap();
        assert_eq!(result["highlights"][0]["mp4_url"], "https://example.test/a.mp4");

        assert_eq!(
            provider.calls(),
            vec!["linescore 715793", "game_content 715793"]
        );
    }

    #[tokio::test]
    async fn test_game_pace() {
        let provider = FakeProvider::new();
        let result = GamePaceTool::new(provider.clone())
            .execute(json!({"season": 2023}))
            .await
            .unwrap();
        assert_eq!(result["season"], 2023);
        assert_eq!(provider.calls(), vec!["game_pace season=2023 sportId=1"]);
    }

    #[tokio::test]
    async fn test_scoring_plays_filter() {
        let tool = ScoringPlaysTool::new(FakeProvider::new());

        let all = tool.execute(json!({"game_id": 715793})).await.unwrap();
        assert_eq!(all["count"], 3);

        let scoring = tool
            .execute(json!({"game_id": 715793, "eventType": "scoring_play"}))
            .await
            .unwrap();
        assert_eq!(scoring["count"], 2);

        let homers = tool
            .execute(json!({"game_id": 715793, "eventType": "home_run"}))
            .await
            .unwrap();
        assert_eq!(homers["count"], 1);
        assert_eq!(homers["plays"][0]["result"]["eventType"], "home_run");
    }

    #[tokio::test]
    async fn test_lineup() {
        let tool = LineupTool::new(FakeProvider::new());
        let result = tool.execute(json!({"game_id": 715793})).await.unwrap();
        let away = &result["lineup"]["away"];
        assert_eq!(away["team_name"], "New York Yankees");
        assert_eq!(away["batting_order"][0]["name"], "Aaron Judge");
        assert_eq!(away["pitchers"][0]["name"], "Gerrit Cole");
    }

    #[tokio::test]
    async fn test_game_tools_require_game_id() {
        let provider = FakeProvider::new();
        let tools: Vec<Box<dyn Tool>> = vec![
            Box::new(BoxscoreTool::new(provider.clone())),
            Box::new(LinescoreTool::new(provider.clone())),
            Box::new(HighlightsTool::new(provider.clone())),
            Box::new(ScoringPlaysTool::new(provider.clone())),
            Box::new(LineupTool::new(provider.clone())),
        ];
        for tool in tools {
            let err = tool.execute(json!({"game_id": -3})).await.unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "{}", tool.name());
        }
    }
}
