//! Local clock tools

use async_trait::async_trait;
use chrono::Local;
use mlb_core::params::DATE_FORMAT;
use mlb_core::{ParamSpec, Result, Tool};
use serde_json::{json, Value as JsonValue};

/// Today's date, so a client can resolve "tonight's game" and similar
pub struct CurrentDateTool;

#[async_trait]
impl Tool for CurrentDateTool {
    fn name(&self) -> &str {
        "get_current_date"
    }

    fn description(&self) -> &str {
        "Get the current date (YYYY-MM-DD) of the server."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![]
    }

    fn http_path(&self) -> String {
        "/current_date".to_string()
    }

    async fn execute(&self, _input: JsonValue) -> Result<JsonValue> {
        let current_date = Local::now().format(DATE_FORMAT).to_string();
        Ok(json!({ "current_date": current_date }))
    }
}

pub struct CurrentTimeTool;

#[async_trait]
impl Tool for CurrentTimeTool {
    fn name(&self) -> &str {
        "get_current_time"
    }

    fn description(&self) -> &str {
        "Get the current local time (HH:MM:SS) of the server."
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![]
    }

    fn http_path(&self) -> String {
        "/current_time".to_string()
    }

    async fn execute(&self, _input: JsonValue) -> Result<JsonValue> {
        let current_time = Local::now().format("%H:%M:%S").to_string();
        Ok(json!({ "current_time": current_time }))
    }
}
