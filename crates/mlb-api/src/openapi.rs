//! OpenAPI document and documentation pages
//!
//! The document is generated from the tool registry on each request;
//! `/docs` and `/redoc` are static pages that load it.

use axum::{Json, extract::State, response::Html};
use serde_json::{Map, Value as JsonValue, json};

use mlb_core::{ToolDefinition, ToolManager};

use crate::server::AppState;

const OPENAPI_VERSION: &str = "3.1.0";
const API_TITLE: &str = "MLB Gateway";
const API_DESCRIPTION: &str =
    "MLB statistics tools backed by the MLB Stats API, served over MCP and REST";

/// Swagger UI page
const DOCS_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>MLB Gateway - Swagger UI</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.onload = () => {
            window.ui = SwaggerUIBundle({
                url: '/openapi.json',
                dom_id: '#swagger-ui',
                presets: [SwaggerUIBundle.presets.apis, SwaggerUIBundle.SwaggerUIStandalonePreset],
                layout: 'BaseLayout',
                deepLinking: true,
            });
        };
    </script>
</body>
</html>
"#;

/// ReDoc page
const REDOC_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>MLB Gateway - ReDoc</title>
    <style>
        body { margin: 0; padding: 0; }
    </style>
</head>
<body>
    <redoc spec-url="/openapi.json"></redoc>
    <script src="https://cdn.jsdelivr.net/npm/redoc@2/bundles/redoc.standalone.js"></script>
</body>
</html>
"#;

pub async fn docs() -> Html<&'static str> {
    Html(DOCS_HTML)
}

pub async fn redoc() -> Html<&'static str> {
    Html(REDOC_HTML)
}

pub async fn openapi_json(State(state): State<AppState>) -> Json<JsonValue> {
    Json(openapi_document(&state.tools))
}

fn error_response(description: &str) -> JsonValue {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": {
                    "type": "object",
                    "properties": {
                        "error": { "type": "string" },
                        "status": { "type": "integer" }
                    }
                }
            }
        }
    })
}

fn json_response(description: &str) -> JsonValue {
    json!({
        "description": description,
        "content": { "application/json": { "schema": { "type": "object" } } }
    })
}

/// OpenAPI parameter list for a tool's `GET` route
fn tool_parameters(def: &ToolDefinition) -> Vec<JsonValue> {
    let path_params = def.path_params();
    let required: Vec<&str> = def.input_schema["required"]
        .as_array()
        .map(|names| names.iter().filter_map(JsonValue::as_str).collect())
        .unwrap_or_default();

    let Some(properties) = def.input_schema["properties"].as_object() else {
        return Vec::new();
    };

    properties
        .iter()
        .map(|(name, schema)| {
            let in_path = path_params.contains(&name.as_str());
            let location = if in_path { "path" } else { "query" };
            json!({
                "name": name,
                "in": location,
                "required": in_path || required.contains(&name.as_str()),
                "description": schema["description"],
                "schema": schema,
            })
        })
        .collect()
}

fn tool_operation(def: &ToolDefinition) -> JsonValue {
    let mut responses = Map::new();
    responses.insert("200".to_string(), json_response("Successful Response"));
    responses.insert("400".to_string(), error_response("Invalid argument"));
    responses.insert("502".to_string(), error_response("MLB Stats API failure"));

    json!({
        "operationId": def.name,
        "summary": def.name,
        "description": def.description,
        "tags": ["tools"],
        "parameters": tool_parameters(def),
        "responses": responses,
    })
}

/// Generate the OpenAPI document for the registry
pub fn openapi_document(tools: &ToolManager) -> JsonValue {
    let mut paths = Map::new();

    paths.insert(
        "/health".to_string(),
        json!({ "get": {
            "operationId": "health",
            "summary": "Liveness check",
            "tags": ["meta"],
            "responses": { "200": json_response("Service is healthy") }
        }}),
    );
    paths.insert(
        "/tools".to_string(),
        json!({ "get": {
            "operationId": "list_tools",
            "summary": "List registered tools",
            "tags": ["meta"],
            "responses": { "200": json_response("Tool descriptors") }
        }}),
    );
    paths.insert(
        "/mcp/info".to_string(),
        json!({ "get": {
            "operationId": "mcp_info",
            "summary": "MCP endpoint information",
            "tags": ["meta"],
            "responses": { "200": json_response("MCP endpoint description") }
        }}),
    );
    paths.insert(
        "/tools/{name}".to_string(),
        json!({ "post": {
            "operationId": "call_tool",
            "summary": "Invoke a tool with a JSON argument object",
            "tags": ["tools"],
            "parameters": [{
                "name": "name",
                "in": "path",
                "required": true,
                "schema": { "type": "string", "enum": tools.tool_names() }
            }],
            "requestBody": {
                "required": false,
                "content": { "application/json": { "schema": { "type": "object" } } }
            },
            "responses": {
                "200": json_response("Tool result"),
                "400": error_response("Invalid argument"),
                "404": error_response("Unknown tool"),
                "502": error_response("MLB Stats API failure")
            }
        }}),
    );

    for def in tools.definitions() {
        paths.insert(def.http_path.clone(), json!({ "get": tool_operation(&def) }));
    }

    json!({
        "openapi": OPENAPI_VERSION,
        "info": {
            "title": API_TITLE,
            "description": API_DESCRIPTION,
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": paths,
    })
}
