//! League-wide lookups: draft and awards

use std::sync::Arc;

use async_trait::async_trait;
use mlb_core::{Args, Error, ParamSpec, Result, Tool};
use mlb_stats::StatsProvider;
use serde_json::{json, Value as JsonValue};

use crate::shape;

/// Draft picks for a year
pub struct DraftTool {
    provider: Arc<dyn StatsProvider>,
}

impl DraftTool {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for DraftTool {
    fn name(&self) -> &str {
        "get_mlb_draft"
    }

    fn description(&self) -> &str {
        "Get MLB draft picks and details for a year. Defaults to the current year."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![ParamSpec::integer("year", "Draft year, e.g. 2023")]
    }

    fn http_path(&self) -> String {
        "/mlb/draft/{year}".to_string()
    }

    async fn execute(&self, input: JsonValue) -> Result<JsonValue> {
        let args = Args::new(&input)?;
        let year = args.season_or_current("year")?;
        let body = self.provider.draft(year).await?;
        Ok(json!({ "year": year, "draft": body }))
    }
}

/// Recipients of an award
pub struct AwardsTool {
    provider: Arc<dyn StatsProvider>,
}

impl AwardsTool {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for AwardsTool {
    fn name(&self) -> &str {
        "get_mlb_awards"
    }

    fn description(&self) -> &str {
        "Get the recipients of an award by award id, e.g. MLBMVP, ALCY, NLROY."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![ParamSpec::string("award_id", "Award id, e.g. MLBMVP").required()]
    }

    fn http_path(&self) -> String {
        "/mlb/awards/{award_id}".to_string()
    }

    async fn execute(&self, input: JsonValue) -> Result<JsonValue> {
        let args = Args::new(&input)?;
        let award_id = args.required_str("award_id")?;
        // Interpolated into the upstream path
        if !award_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(Error::invalid(
                "award_id",
                format!("must be alphanumeric, got {}", award_id),
            ));
        }

        let body = self.provider.award_recipients(&award_id).await?;
        Ok(json!({
            "award_id": award_id,
            "awards": shape::unwrap_list(body, "awards"),
        }))
    }
}
