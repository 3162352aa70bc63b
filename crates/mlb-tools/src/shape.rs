//! Response shaping
//!
//! Turns deeply nested Stats API bodies into flatter JSON that is easier
//! for an AI client to read. Every function is pure; missing fields come
//! out as `null` rather than failing.

use mlb_core::choices::{SCORING_PLAY_EVENT, TEAM_SEARCH_KEYS};
use serde_json::{json, Map, Value as JsonValue};

/// Value at a JSON pointer, or `null`
fn at(value: &JsonValue, pointer: &str) -> JsonValue {
    value.pointer(pointer).cloned().unwrap_or(JsonValue::Null)
}

/// Array at a JSON pointer, or an empty slice
fn items<'a>(value: &'a JsonValue, pointer: &str) -> &'a [JsonValue] {
    value
        .pointer(pointer)
        .and_then(JsonValue::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Case-insensitive string comparison of a JSON string field
fn field_eq(value: &JsonValue, key: &str, expected: &str) -> bool {
    value
        .get(key)
        .and_then(JsonValue::as_str)
        .is_some_and(|s| s.eq_ignore_ascii_case(expected))
}

/// The array under `key`, or the whole body when it has no such array
pub fn unwrap_list(body: JsonValue, key: &str) -> JsonValue {
    match body {
        JsonValue::Object(mut map) if map.get(key).is_some_and(JsonValue::is_array) => {
            map.remove(key).unwrap_or(JsonValue::Null)
        }
        other => other,
    }
}

/// First element of the array under `key`, or the whole body
pub fn first_entry(body: JsonValue, key: &str) -> JsonValue {
    match body.pointer(&format!("/{}/0", key)) {
        Some(entry) => entry.clone(),
        None => body,
    }
}

// ---------------------------------------------------------------------------
// Standings
// ---------------------------------------------------------------------------

/// Divisions of a standings body, each with per-team records
pub fn standings_divisions(body: &JsonValue) -> JsonValue {
    let divisions: Vec<JsonValue> = items(body, "/records")
        .iter()
        .map(|record| {
            let teams: Vec<JsonValue> = items(record, "/teamRecords")
                .iter()
                .map(team_record)
                .collect();

            json!({
                "division_id": at(record, "/division/id"),
                "division_name": at(record, "/division/name"),
                "standings_type": at(record, "/standingsType"),
                "last_updated": at(record, "/lastUpdated"),
                "teams": teams,
            })
        })
        .collect();

    JsonValue::Array(divisions)
}

fn team_record(record: &JsonValue) -> JsonValue {
    json!({
        "team_id": at(record, "/team/id"),
        "team_name": at(record, "/team/name"),
        "wins": at(record, "/wins"),
        "losses": at(record, "/losses"),
        "winning_percentage": at(record, "/winningPercentage"),
        "games_back": at(record, "/gamesBack"),
        "wild_card_games_back": at(record, "/wildCardGamesBack"),
        "division_rank": at(record, "/divisionRank"),
        "league_rank": at(record, "/leagueRank"),
        "games_played": at(record, "/gamesPlayed"),
        "streak": at(record, "/streak/streakCode"),
        "runs_scored": at(record, "/runsScored"),
        "runs_allowed": at(record, "/runsAllowed"),
        "run_differential": at(record, "/runDifferential"),
        "clinched": at(record, "/clinched"),
    })
}

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

/// Schedule body flattened to games per date
pub fn schedule_dates(body: &JsonValue) -> JsonValue {
    let dates: Vec<JsonValue> = items(body, "/dates")
        .iter()
        .map(|date| {
            let games: Vec<JsonValue> = items(date, "/games").iter().map(schedule_game).collect();
            json!({
                "date": at(date, "/date"),
                "total_games": games.len(),
                "games": games,
            })
        })
        .collect();

    json!({
        "total_games": at(body, "/totalGames"),
        "dates": dates,
    })
}

fn schedule_game(game: &JsonValue) -> JsonValue {
    json!({
        "game_id": at(game, "/gamePk"),
        "game_date": at(game, "/gameDate"),
        "game_type": at(game, "/gameType"),
        "status": at(game, "/status/detailedState"),
        "away_team_id": at(game, "/teams/away/team/id"),
        "away_team": at(game, "/teams/away/team/name"),
        "away_score": at(game, "/teams/away/score"),
        "home_team_id": at(game, "/teams/home/team/id"),
        "home_team": at(game, "/teams/home/team/name"),
        "home_score": at(game, "/teams/home/score"),
        "venue": at(game, "/venue/name"),
    })
}

// ---------------------------------------------------------------------------
// Player statistics
// ---------------------------------------------------------------------------

/// Per player, per stat group and type, the splits
pub fn player_stats(body: &JsonValue) -> JsonValue {
    let players: Vec<JsonValue> = items(body, "/people")
        .iter()
        .map(|person| {
            let stats: Vec<JsonValue> = items(person, "/stats")
                .iter()
                .map(|stat| {
                    json!({
                        "group": at(stat, "/group/displayName"),
                        "type": at(stat, "/type/displayName"),
                        "splits": at(stat, "/splits"),
                    })
                })
                .collect();

            json!({
                "player_id": at(person, "/id"),
                "player_name": at(person, "/fullName"),
                "stats": stats,
            })
        })
        .collect();

    JsonValue::Array(players)
}

/// Sabermetric splits for the requested players
///
/// With `stat_name`, each player carries only that stat (matched
/// case-insensitively) or `null` plus the list of available stat names.
pub fn sabermetrics(
    body: &JsonValue,
    player_ids: &[u64],
    season: i32,
    group: &str,
    stat_name: Option<&str>,
) -> JsonValue {
    let mut players = Vec::new();

    for stat_group in items(body, "/stats") {
        for split in items(stat_group, "/splits") {
            let Some(player_id) = split.pointer("/player/id").and_then(JsonValue::as_u64) else {
                continue;
            };
            if !player_ids.contains(&player_id) {
                continue;
            }

            let mut player = Map::new();
            player.insert("player_id".into(), json!(player_id));
            player.insert(
                "player_name".into(),
                split
                    .pointer("/player/fullName")
                    .cloned()
                    .unwrap_or_else(|| json!("Unknown")),
            );
            player.insert("position".into(), at(split, "/position/abbreviation"));
            player.insert("team".into(), at(split, "/team/name"));
            player.insert("team_id".into(), at(split, "/team/id"));

            if let Some(stat) = split.get("stat").and_then(JsonValue::as_object) {
                match stat_name {
                    Some(name) => {
                        let found = stat
                            .iter()
                            .find(|(key, _)| key.eq_ignore_ascii_case(name))
                            .map(|(_, v)| v.clone());
                        if found.is_none() {
                            let available: Vec<&String> = stat.keys().collect();
                            player.insert("available_stats".into(), json!(available));
                        }
                        player.insert(name.to_string(), found.unwrap_or(JsonValue::Null));
                    }
                    None => {
                        player.insert("sabermetrics".into(), JsonValue::Object(stat.clone()));
                    }
                }
            }

            players.push(JsonValue::Object(player));
        }
    }

    json!({
        "season": season,
        "group": group,
        "players": players,
    })
}

// ---------------------------------------------------------------------------
// Games
// ---------------------------------------------------------------------------

/// Plays from a play-by-play body, optionally filtered by event type
///
/// `scoring_play` selects every play with `about.isScoringPlay` set.
pub fn filter_plays(body: &JsonValue, event_type: Option<&str>) -> Vec<JsonValue> {
    items(body, "/allPlays")
        .iter()
        .filter(|play| match event_type {
            None => true,
            Some(kind) if kind.eq_ignore_ascii_case(SCORING_PLAY_EVENT) => play
                .pointer("/about/isScoringPlay")
                .and_then(JsonValue::as_bool)
                .unwrap_or(false),
            Some(kind) => play.get("result").is_some_and(|r| field_eq(r, "eventType", kind)),
        })
        .cloned()
        .collect()
}

/// Starting lineups from a boxscore body
pub fn lineup(boxscore: &JsonValue) -> JsonValue {
    let mut sides = Map::new();
    for side in ["away", "home"] {
        let team = boxscore
            .pointer(&format!("/teams/{}", side))
            .cloned()
            .unwrap_or(JsonValue::Null);
        sides.insert(side.to_string(), lineup_side(&team));
    }
    JsonValue::Object(sides)
}

fn lineup_side(team: &JsonValue) -> JsonValue {
    let player_line = |id: u64| -> JsonValue {
        let player = team
            .pointer(&format!("/players/ID{}", id))
            .cloned()
            .unwrap_or(JsonValue::Null);
        json!({
            "player_id": id,
            "name": at(&player, "/person/fullName"),
            "position": at(&player, "/position/abbreviation"),
            "jersey_number": at(&player, "/jerseyNumber"),
        })
    };

    let ids = |pointer: &str| -> Vec<u64> {
        items(team, pointer)
            .iter()
            .filter_map(JsonValue::as_u64)
            .collect()
    };

    let batting_order: Vec<JsonValue> = ids("/battingOrder")
        .into_iter()
        .enumerate()
        .map(|(slot, id)| {
            let mut line = player_line(id);
            if let Some(obj) = line.as_object_mut() {
                obj.insert("batting_order".into(), json!(slot + 1));
            }
            line
        })
        .collect();

    let pitchers: Vec<JsonValue> = ids("/pitchers").into_iter().map(player_line).collect();

    json!({
        "team_id": at(team, "/team/id"),
        "team_name": at(team, "/team/name"),
        "batting_order": batting_order,
        "pitchers": pitchers,
    })
}

/// Highlight items from a game content body
pub fn highlights(content: &JsonValue) -> Vec<JsonValue> {
    items(content, "/highlights/highlights/items")
        .iter()
        .map(|item| {
            let playbacks = items(item, "/playbacks");
            let mp4 = playbacks
                .iter()
                .find(|p| field_eq(p, "name", "mp4Avc"))
                .or_else(|| playbacks.first())
                .map(|p| at(p, "/url"))
                .unwrap_or(JsonValue::Null);

            json!({
                "headline": at(item, "/headline"),
                "blurb": at(item, "/blurb"),
                "description": at(item, "/description"),
                "duration": at(item, "/duration"),
                "date": at(item, "/date"),
                "mp4_url": mp4,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Ids of teams matching `term`
///
/// Exact case-insensitive match on `search_key` first; when nothing
/// matches, a substring match across every name-like field.
pub fn search_teams(body: &JsonValue, term: &str, search_key: &str) -> Vec<JsonValue> {
    let teams = items(body, "/teams");

    let exact: Vec<JsonValue> = teams
        .iter()
        .filter(|team| field_eq(team, search_key, term))
        .map(|team| at(team, "/id"))
        .collect();
    if !exact.is_empty() {
        return exact;
    }

    let needle = term.to_lowercase();
    teams
        .iter()
        .filter(|team| {
            TEAM_SEARCH_KEYS.iter().any(|field| {
                team.get(*field)
                    .and_then(JsonValue::as_str)
                    .is_some_and(|value| value.to_lowercase().contains(&needle))
            })
        })
        .map(|team| at(team, "/id"))
        .collect()
}

/// Ids of people whose `search_key` equals `term`, ignoring case
pub fn search_people(body: &JsonValue, term: &str, search_key: &str) -> Vec<JsonValue> {
    items(body, "/people")
        .iter()
        .filter(|person| field_eq(person, search_key, term))
        .map(|person| at(person, "/id"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standings_divisions() {
        let body = json!({
            "records": [{
                "standingsType": "regularSeason",
                "division": {"id": 201, "name": "American League East"},
                "teamRecords": [{
                    "team": {"id": 147, "name": "New York Yankees"},
                    "wins": 82, "losses": 80,
                    "winningPercentage": ".506",
                    "gamesBack": "19.0",
                    "divisionRank": "4",
                    "streak": {"streakCode": "W1"}
                }]
            }]
        });
        let divisions = standings_divisions(&body);
        let team = &divisions[0]["teams"][0];
        assert_eq!(divisions[0]["division_id"], 201);
        assert_eq!(team["team_name"], "New York Yankees");
        assert_eq!(team["wins"], 82);
        assert_eq!(team["losses"], 80);
        assert_eq!(team["streak"], "W1");
        assert!(team["run_differential"].is_null());
    }

    #[test]
    fn test_standings_empty_body() {
        assert_eq!(standings_divisions(&json!({})), json!([]));
    }

    #[test]
    fn test_schedule_dates() {
        let body = json!({
            "totalGames": 1,
            "dates": [{
                "date": "2024-06-01",
                "games": [{
                    "gamePk": 745000,
                    "status": {"detailedState": "Final"},
                    "teams": {
                        "away": {"team": {"id": 147, "name": "New York Yankees"}, "score": 8},
                        "home": {"team": {"id": 137, "name": "San Francisco Giants"}, "score": 2}
                    },
                    "venue": {"name": "Oracle Park"}
                }]
            }]
        });
        let shaped = schedule_dates(&body);
        let game = &shaped["dates"][0]["games"][0];
        assert_eq!(shaped["total_games"], 1);
        assert_eq!(shaped["dates"][0]["total_games"], 1);
        assert_eq!(game["game_id"], 745000);
        assert_eq!(game["away_score"], 8);
        assert_eq!(game["home_team"], "San Francisco Giants");
        assert_eq!(game["venue"], "Oracle Park");
    }

    fn sabermetrics_body() -> JsonValue {
        json!({
            "stats": [{
                "splits": [
                    {
                        "player": {"id": 592450, "fullName": "Aaron Judge"},
                        "team": {"id": 147, "name": "New York Yankees"},
                        "position": {"abbreviation": "RF"},
                        "stat": {"war": 5.8, "woba": 0.428, "wRc": 174.2}
                    },
                    {
                        "player": {"id": 1, "fullName": "Someone Else"},
                        "stat": {"war": 0.1}
                    }
                ]
            }]
        })
    }

    #[test]
    fn test_sabermetrics_selects_players() {
        let shaped = sabermetrics(&sabermetrics_body(), &[592450], 2023, "hitting", None);
        assert_eq!(shaped["season"], 2023);
        assert_eq!(shaped["group"], "hitting");
        let players = shaped["players"].as_array().unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0]["position"], "RF");
        assert_eq!(players[0]["sabermetrics"]["war"], 5.8);
    }

    #[test]
    fn test_sabermetrics_stat_name_case_insensitive() {
        let shaped = sabermetrics(&sabermetrics_body(), &[592450], 2023, "hitting", Some("WRC"));
        let player = &shaped["players"][0];
        assert_eq!(player["WRC"], 174.2);
        assert!(player.get("available_stats").is_none());
    }

    #[test]
    fn test_sabermetrics_unknown_stat_lists_available() {
        let shaped = sabermetrics(&sabermetrics_body(), &[592450], 2023, "hitting", Some("fip"));
        let player = &shaped["players"][0];
        assert!(player["fip"].is_null());
        let available = player["available_stats"].as_array().unwrap();
        assert!(available.contains(&json!("war")));
    }

    #[test]
    fn test_filter_plays() {
        let body = json!({
            "allPlays": [
                {"result": {"eventType": "home_run"}, "about": {"isScoringPlay": true}},
                {"result": {"eventType": "strikeout"}, "about": {"isScoringPlay": false}},
                {"result": {"eventType": "single"}, "about": {"isScoringPlay": true}}
            ]
        });
        assert_eq!(filter_plays(&body, None).len(), 3);
        assert_eq!(filter_plays(&body, Some("home_run")).len(), 1);
        assert_eq!(filter_plays(&body, Some("scoring_play")).len(), 2);
        assert!(filter_plays(&body, Some("triple")).is_empty());
        assert!(filter_plays(&json!({}), None).is_empty());
    }

    #[test]
    fn test_lineup() {
        let boxscore = json!({
            "teams": {
                "away": {
                    "team": {"id": 147, "name": "New York Yankees"},
                    "battingOrder": [592450, 665742],
                    "pitchers": [543037],
                    "players": {
                        "ID592450": {"person": {"fullName": "Aaron Judge"}, "position": {"abbreviation": "RF"}},
                        "ID665742": {"person": {"fullName": "Juan Soto"}, "position": {"abbreviation": "LF"}},
                        "ID543037": {"person": {"fullName": "Gerrit Cole"}, "position": {"abbreviation": "P"}}
                    }
                },
                "home": {"team": {"id": 137, "name": "San Francisco Giants"}}
            }
        });
        let shaped = lineup(&boxscore);
        assert_eq!(shaped["away"]["team_name"], "New York Yankees");
        assert_eq!(shaped["away"]["batting_order"][1]["name"], "Juan Soto");
        assert_eq!(shaped["away"]["batting_order"][1]["batting_order"], 2);
        assert_eq!(shaped["away"]["pitchers"][0]["name"], "Gerrit Cole");
        assert_eq!(shaped["home"]["batting_order"], json!([]));
    }

    #[test]
    fn test_highlights_prefers_mp4() {
        let content = json!({
            "highlights": {"highlights": {"items": [{
                "headline": "Judge homers",
                "duration": "00:00:32",
                "playbacks": [
                    {"name": "highBit", "url": "https://example.test/a.m3u8"},
                    {"name": "mp4Avc", "url": "https://example.test/a.mp4"}
                ]
            }]}}
        });
        let items = highlights(&content);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["headline"], "Judge homers");
        assert_eq!(items[0]["mp4_url"], "https://example.test/a.mp4");
    }

    #[test]
    fn test_search_teams_exact_then_substring() {
        let body = json!({
            "teams": [
                {"id": 147, "name": "New York Yankees", "teamName": "Yankees",
                 "abbreviation": "NYY", "locationName": "Bronx"},
                {"id": 121, "name": "New York Mets", "teamName": "Mets", "abbreviation": "NYM"}
            ]
        });
        assert_eq!(search_teams(&body, "new york yankees", "name"), vec![json!(147)]);
        assert_eq!(search_teams(&body, "nym", "abbreviation"), vec![json!(121)]);
        assert_eq!(search_teams(&body, "New York", "name"), vec![json!(147), json!(121)]);
        assert_eq!(search_teams(&body, "bron", "name"), vec![json!(147)]);
        assert!(search_teams(&body, "Dodgers", "name").is_empty());
    }

    #[test]
    fn test_search_people_exact() {
        let body = json!({
            "people": [
                {"id": 592450, "fullName": "Aaron Judge", "lastName": "Judge"},
                {"id": 1, "fullName": "Aaron Judgeson", "lastName": "Judgeson"}
            ]
        });
        assert_eq!(search_people(&body, "aaron judge", "fullName"), vec![json!(592450)]);
        assert_eq!(search_people(&body, "JUDGE", "lastName"), vec![json!(592450)]);
        assert!(search_people(&body, "Judge", "fullName").is_empty());
    }

    #[test]
    fn test_unwrap_helpers() {
        let body = json!({"copyright": "x", "teams": [{"id": 1}]});
        assert_eq!(unwrap_list(body.clone(), "teams"), json!([{"id": 1}]));
        assert_eq!(first_entry(body.clone(), "teams"), json!({"id": 1}));
        assert_eq!(unwrap_list(body.clone(), "people"), body);
        assert_eq!(first_entry(json!({"teams": []}), "teams"), json!({"teams": []}));
    }
}
