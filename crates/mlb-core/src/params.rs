//! Parameter normalization
//!
//! Converts loosely-typed caller input into the typed values the
//! statistics client expects. REST query strings arrive as strings and
//! MCP arguments as JSON, so every accessor accepts both spellings of a
//! number. Nothing here performs I/O.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value as JsonValue};

use crate::choices::normalize_choice;
use crate::tool::ParamSpec;
use crate::{Error, Result};

/// First season covered by the Stats API
pub const MIN_SEASON: i32 = 1876;

/// Canonical date format sent upstream
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timecode format used by game feed snapshots
pub const TIMECODE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a date string or relative keyword
///
/// Accepts `YYYY-MM-DD`, `MM/DD/YYYY`, `today`, `yesterday` and `tomorrow`.
pub fn parse_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "today" => return Some(today),
        "yesterday" => return Some(today - Duration::days(1)),
        "tomorrow" => return Some(today + Duration::days(1)),
        _ => {}
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(input, "%m/%d/%Y"))
        .ok()
}

/// Check that every required parameter is present and non-empty
pub fn check_required(specs: &[ParamSpec], input: &Map<String, JsonValue>) -> Result<()> {
    let missing: Vec<&str> = specs
        .iter()
        .filter(|spec| spec.required && present(input.get(spec.name)).is_none())
        .map(|spec| spec.name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "missing required parameter(s): {}",
            missing.join(", ")
        )))
    }
}

/// Null and blank strings count as absent
fn present(value: Option<&JsonValue>) -> Option<&JsonValue> {
    match value {
        None | Some(JsonValue::Null) => None,
        Some(JsonValue::String(s)) if s.trim().is_empty() => None,
        Some(v) => Some(v),
    }
}

/// Typed view over a tool's JSON arguments
#[derive(Debug, Clone)]
pub struct Args<'a> {
    map: &'a Map<String, JsonValue>,
    today: NaiveDate,
}

impl<'a> Args<'a> {
    /// Wrap a tool input, which must be a JSON object
    pub fn new(input: &'a JsonValue) -> Result<Self> {
        Self::with_today(input, today())
    }

    /// Wrap a tool input using a fixed reference date for relative keywords
    pub fn with_today(input: &'a JsonValue, today: NaiveDate) -> Result<Self> {
        let map = input.as_object().ok_or_else(|| {
            Error::InvalidArgument("tool arguments must be a JSON object".to_string())
        })?;
        Ok(Self { map, today })
    }

    /// Reference date used for relative keywords and default seasons
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    fn raw(&self, name: &str) -> Option<&'a JsonValue> {
        present(self.map.get(name))
    }

    /// Optional string; numbers and booleans are stringified
    pub fn str(&self, name: &str) -> Result<Option<String>> {
        match self.raw(name) {
            None => Ok(None),
            Some(JsonValue::String(s)) => Ok(Some(s.trim().to_string())),
            Some(JsonValue::Number(n)) => Ok(Some(n.to_string())),
            Some(JsonValue::Bool(b)) => Ok(Some(b.to_string())),
            Some(_) => Err(Error::invalid(name, "must be a string")),
        }
    }

    /// Required string
    pub fn required_str(&self, name: &str) -> Result<String> {
        self.str(name)?
            .ok_or_else(|| Error::invalid(name, "is required"))
    }

    /// Optional integer (JSON number or numeric string)
    pub fn int(&self, name: &str) -> Result<Option<i64>> {
        let value = match self.raw(name) {
            None => return Ok(None),
            Some(v) => v,
        };

        let parsed = match value {
            // `i64::MAX as f64` is 2^63, outside the range
            JsonValue::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0)
                    .filter(|f| *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            JsonValue::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };

        parsed
            .map(Some)
            .ok_or_else(|| Error::invalid(name, format!("must be an integer, got {}", value)))
    }

    /// Optional positive identifier
    pub fn id(&self, name: &str) -> Result<Option<u64>> {
        match self.int(name)? {
            None => Ok(None),
            Some(n) if n > 0 => Ok(Some(n as u64)),
            Some(n) => Err(Error::invalid(name, format!("must be a positive id, got {}", n))),
        }
    }

    /// Required positive identifier
    pub fn required_id(&self, name: &str) -> Result<u64> {
        self.id(name)?
            .ok_or_else(|| Error::invalid(name, "is required"))
    }

    /// Optional sport id
    pub fn optional_sport_id(&self, name: &str) -> Result<Option<u32>> {
        match self.id(name)? {
            None => Ok(None),
            Some(id) => u32::try_from(id)
                .map(Some)
                .map_err(|_| Error::invalid(name, format!("is out of range: {}", id))),
        }
    }

    /// Sport id, defaulting to MLB (1)
    pub fn sport_id(&self, name: &str) -> Result<u32> {
        Ok(self.optional_sport_id(name)?.unwrap_or(1))
    }

    /// Optional date, normalized from a date string or relative keyword
    pub fn date(&self, name: &str) -> Result<Option<NaiveDate>> {
        match self.str(name)? {
            None => Ok(None),
            Some(s) => parse_date(&s, self.today).map(Some).ok_or_else(|| {
                Error::invalid(
                    name,
                    format!(
                        "is not a valid date: {} (expected YYYY-MM-DD, MM/DD/YYYY, today, yesterday or tomorrow)",
                        s
                    ),
                )
            }),
        }
    }

    /// Optional season year
    pub fn season(&self, name: &str) -> Result<Option<i32>> {
        let max = self.today.year() + 1;
        match self.int(name)? {
            None => Ok(None),
            Some(year) if (MIN_SEASON as i64..=max as i64).contains(&year) => Ok(Some(year as i32)),
            Some(year) => Err(Error::invalid(
                name,
                format!("must be a season between {} and {}, got {}", MIN_SEASON, max, year),
            )),
        }
    }

    /// Season year, defaulting to the current year
    pub fn season_or_current(&self, name: &str) -> Result<i32> {
        Ok(self.season(name)?.unwrap_or_else(|| self.today.year()))
    }

    /// Optional enumerated value, normalized to its canonical spelling
    pub fn choice(&self, name: &str, choices: &'static [&'static str]) -> Result<Option<&'static str>> {
        match self.str(name)? {
            None => Ok(None),
            Some(s) => normalize_choice(&s, choices)
                .map(Some)
                .ok_or_else(|| not_in_set(name, &s, choices)),
        }
    }

    /// Enumerated value with a default
    pub fn choice_or(
        &self,
        name: &str,
        choices: &'static [&'static str],
        default: &'static str,
    ) -> Result<&'static str> {
        Ok(self.choice(name, choices)?.unwrap_or(default))
    }

    /// Optional comma-separated list of enumerated values
    pub fn choice_list(
        &self,
        name: &str,
        choices: &'static [&'static str],
    ) -> Result<Option<Vec<&'static str>>> {
        let raw = match self.str(name)? {
            None => return Ok(None),
            Some(s) => s,
        };

        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| normalize_choice(s, choices).ok_or_else(|| not_in_set(name, s, choices)))
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }

    /// Required list of ids: comma-separated string or JSON array
    pub fn id_list(&self, name: &str) -> Result<Vec<u64>> {
        let items: Vec<String> = match self.raw(name) {
            None => return Err(Error::invalid(name, "is required")),
            Some(JsonValue::String(s)) => s.split(',').map(|p| p.trim().to_string()).collect(),
            Some(JsonValue::Number(n)) => vec![n.to_string()],
            Some(JsonValue::Array(values)) => values
                .iter()
                .map(|v| match v {
                    JsonValue::String(s) => s.trim().to_string(),
                    other => other.to_string(),
                })
                .collect(),
            Some(_) => {
                return Err(Error::invalid(name, "must be a comma-separated list of ids"));
            }
        };

        let ids = items
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| match s.parse::<u64>() {
                Ok(id) if id > 0 => Ok(id),
                _ => Err(Error::invalid(name, format!("contains an invalid id: {}", s))),
            })
            .collect::<Result<Vec<u64>>>()?;

        if ids.is_empty() {
            return Err(Error::invalid(name, "must contain at least one id"));
        }
        Ok(ids)
    }

    /// Optional feed timecode (`YYYYMMDD_HHMMSS`)
    pub fn timecode(&self, name: &str) -> Result<Option<String>> {
        match self.str(name)? {
            None => Ok(None),
            Some(s) => NaiveDateTime::parse_from_str(&s, TIMECODE_FORMAT)
                .map(|_| Some(s.clone()))
                .map_err(|_| {
                    Error::invalid(name, format!("must be a timecode like 20240601_150000, got {}", s))
                }),
        }
    }
}

fn not_in_set(name: &str, value: &str, choices: &[&str]) -> Error {
    Error::invalid(
        name,
        format!("has unsupported value '{}'; allowed: {}", value, choices.join(", ")),
    )
}
