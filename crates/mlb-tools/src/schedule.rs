//! Schedule tool

use std::sync::Arc;

use async_trait::async_trait;
use mlb_core::{Args, Error, ParamSpec, Result, Tool};
use mlb_stats::{ScheduleQuery, StatsProvider};
use serde_json::{json, Value as JsonValue};

use crate::shape;

/// Games for a date, a date range or a team
pub struct ScheduleTool {
    provider: Arc<dyn StatsProvider>,
}

impl ScheduleTool {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for ScheduleTool {
    fn name(&self) -> &str {
        "get_mlb_schedule"
    }

    fn description(&self) -> &str {
        "Get the MLB schedule for a specific date, a date range, or a team. \
         Returns games grouped by date with teams, scores, status and venue."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::date("date", "Single date (YYYY-MM-DD, MM/DD/YYYY, today, yesterday, tomorrow)"),
            ParamSpec::date("start_date", "Start of a date range; requires end_date"),
            ParamSpec::date("end_date", "End of a date range; requires start_date"),
            ParamSpec::integer("sport_id", "Sport id (1 = MLB)").with_default(1),
            ParamSpec::integer("team_id", "Only games for this team, e.g. 147 for the Yankees"),
        ]
    }

    fn http_path(&self) -> String {
        "/mlb/schedule".to_string()
    }

    async fn execute(&self, input: JsonValue) -> Result<JsonValue> {
        let args = Args::new(&input)?;
        let query = ScheduleQuery {
            sport_id: args.sport_id("sport_id")?,
            date: args.date("date")?,
            start_date: args.date("start_date")?,
            end_date: args.date("end_date")?,
            team_id: args.id("team_id")?,
        };

        match (query.start_date, query.end_date) {
            (Some(start), Some(end)) if start > end => {
                return Err(Error::invalid("start_date", "must not be after end_date"));
            }
            (Some(_), None) | (None, Some(_)) => {
                return Err(Error::InvalidArgument(
                    "start_date and end_date must be given together".to_string(),
                ));
            }
            _ => {}
        }
        if query.date.is_some() && query.start_date.is_some() {
            return Err(Error::invalid("date", "cannot be combined with start_date/end_date"));
        }

        let body = self.provider.schedule(&query).await?;
        Ok(json!({ "schedule": shape::schedule_dates(&body) }))
    }
}
