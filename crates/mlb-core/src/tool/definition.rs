//! Tool definition helpers
//!
//! Typed parameter declarations and the JSON schemas derived from them.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value as JsonValue};

/// Kind of a tool parameter
#[derive(Debug, Clone, PartialEq)]
pub enum ParamKind {
    /// Free-form string
    String,
    /// Integer (JSON number or numeric string)
    Integer,
    /// One of a fixed set of strings, matched case-insensitively
    Enum(&'static [&'static str]),
    /// Comma-separated list drawn from a fixed set of strings
    EnumList(&'static [&'static str]),
    /// Date string or relative keyword (`today`, `yesterday`, `tomorrow`)
    Date,
    /// Comma-separated list of numeric ids
    IdList,
}

/// Declaration of a single tool parameter
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub description: &'static str,
    pub required: bool,
    pub default: Option<JsonValue>,
}

impl ParamSpec {
    fn new(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            required: false,
            default: None,
        }
    }

    /// Optional string parameter
    pub fn string(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::String, description)
    }

    /// Optional integer parameter
    pub fn integer(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::Integer, description)
    }

    /// Optional enumerated string parameter
    pub fn choice(
        name: &'static str,
        choices: &'static [&'static str],
        description: &'static str,
    ) -> Self {
        Self::new(name, ParamKind::Enum(choices), description)
    }

    /// Optional comma-separated list of enumerated strings
    pub fn choice_list(
        name: &'static str,
        choices: &'static [&'static str],
        description: &'static str,
    ) -> Self {
        Self::new(name, ParamKind::EnumList(choices), description)
    }

    /// Optional date parameter
    pub fn date(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::Date, description)
    }

    /// Optional id-list parameter
    pub fn id_list(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::IdList, description)
    }

    /// Mark the parameter as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach a default value (documented in the schema, applied by the tool)
    pub fn with_default(mut self, value: impl Into<JsonValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// JSON schema fragment for this parameter
    pub fn to_schema(&self) -> JsonValue {
        let mut schema = match &self.kind {
            ParamKind::String => json!({ "type": "string" }),
            ParamKind::Integer => json!({ "type": "integer" }),
            ParamKind::Enum(choices) => json!({ "type": "string", "enum": choices }),
            ParamKind::EnumList(choices) => {
                let one_of = format!("({})", choices.join("|"));
                json!({
                    "type": "string",
                    "pattern": format!("^\\s*{one_of}(\\s*,\\s*{one_of})*\\s*$"),
                    "examples": [choices.iter().take(2).copied().collect::<Vec<_>>().join(",")],
                })
            }
            ParamKind::Date => json!({
                "type": "string",
                "examples": ["2024-06-01", "06/01/2024", "today"]
            }),
            ParamKind::IdList => json!({
                "type": "string",
                "pattern": "^\\s*\\d+(\\s*,\\s*\\d+)*\\s*$"
            }),
        };

        if let Some(obj) = schema.as_object_mut() {
            obj.insert("description".to_string(), json!(self.description));
            if let Some(default) = &self.default {
                obj.insert("default".to_string(), default.clone());
            }
        }

        schema
    }
}

/// Helper functions for creating tool schemas
pub struct SchemaBuilder;

impl SchemaBuilder {
    /// Create an object schema from parameter declarations
    pub fn object_schema(params: &[ParamSpec]) -> JsonValue {
        let props: Map<String, JsonValue> = params
            .iter()
            .map(|p| (p.name.to_string(), p.to_schema()))
            .collect();

        let required: Vec<&str> = params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();

        json!({
            "type": "object",
            "properties": props,
            "required": required
        })
    }
}

/// Static descriptor of a registered tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: JsonValue,
    pub http_path: String,
}

impl ToolDefinition {
    /// Names of the parameters that appear as `{segments}` in the HTTP path
    pub fn path_params(&self) -> Vec<&str> {
        self.http_path
            .split('/')
            .filter_map(|seg| seg.strip_prefix('{').and_then(|s| s.strip_suffix('}')))
            .collect()
    }
}

/// A single tool invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRequest {
    /// Tool name
    pub name: String,
    /// Parameter name to value mapping
    #[serde(default)]
    pub arguments: JsonValue,
}

impl ToolRequest {
    pub fn new(name: impl Into<String>, arguments: JsonValue) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAGUES: &[&str] = &["AL", "NL", "both"];

    #[test]
    fn test_object_schema() {
        let schema = SchemaBuilder::object_schema(&[
            ParamSpec::integer("game_id", "Game identifier").required(),
            ParamSpec::date("date", "Date"),
            ParamSpec::choice("league", LEAGUES, "League filter").with_default("both"),
        ]);

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["game_id"]));
        assert_eq!(schema["properties"]["game_id"]["type"], "integer");
        assert_eq!(schema["properties"]["date"]["type"], "string");
        assert_eq!(schema["properties"]["league"]["enum"], json!(["AL", "NL", "both"]));
        assert_eq!(schema["properties"]["league"]["default"], "both");
        assert_eq!(schema["properties"]["league"]["description"], "League filter");
    }

    #[test]
    fn test_enum_list_schema_describes_comma_lists() {
        const GROUPS: &[&str] = &["hitting", "pitching", "fielding"];
        let schema = ParamSpec::choice_list("group", GROUPS, "Stat groups").to_schema();

        assert_eq!(schema["type"], "string");
        assert!(schema.get("enum").is_none());
        assert_eq!(
            schema["pattern"],
            "^\\s*(hitting|pitching|fielding)(\\s*,\\s*(hitting|pitching|fielding))*\\s*$"
        );
        assert_eq!(schema["examples"], json!(["hitting,pitching"]));
        assert_eq!(schema["description"], "Stat groups");
    }

    #[test]
    fn test_empty_schema() {
        let schema = SchemaBuilder::object_schema(&[]);
        assert_eq!(schema["properties"], json!({}));
        assert_eq!(schema["required"], json!([]));
    }

    #[test]
    fn test_path_params() {
        let def = ToolDefinition {
            name: "get_mlb_team_info".to_string(),
            description: String::new(),
            input_schema: json!({}),
            http_path: "/mlb/team/{team_id}".to_string(),
        };
        assert_eq!(def.path_params(), vec!["team_id"]);

        let def = ToolDefinition {
            http_path: "/mlb/standings".to_string(),
            ..def
        };
        assert!(def.path_params().is_empty());
    }

    #[test]
    fn test_tool_request_default_arguments() {
        let req: ToolRequest = serde_json::from_str(r#"{"name": "get_current_date"}"#).unwrap();
        assert_eq!(req.name, "get_current_date");
        assert!(req.arguments.is_null());
    }
}
