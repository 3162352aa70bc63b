//! In-memory `StatsProvider` for tool tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mlb_stats::{
    GameQuery, PlayerStatsQuery, RosterQuery, ScheduleQuery, StandingsQuery, StatsError,
    StatsProvider, TeamQuery,
};
use serde_json::{json, Value as JsonValue};

/// Canned responses plus a log of every call made
#[derive(Default)]
pub struct FakeProvider {
    calls: Mutex<Vec<String>>,
    /// When set, every call fails with this HTTP status
    fail_status: Option<u16>,
}

impl FakeProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            fail_status: Some(status),
            ..Default::default()
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn respond(&self, call: String, body: JsonValue) -> mlb_stats::Result<JsonValue> {
        self.calls.lock().unwrap().push(call);
        match self.fail_status {
            Some(status) => Err(StatsError::Api {
                status,
                body: "Object not found".to_string(),
            }),
            None => Ok(body),
        }
    }
}

fn standings_body(league_id: u32) -> JsonValue {
    let (division, team_id, team_name) = if league_id == 103 {
        ("American League East", 147, "New York Yankees")
    } else {
        ("National League West", 119, "Los Angeles Dodgers")
    };
    json!({
        "records": [{
            "standingsType": "regularSeason",
            "league": {"id": league_id},
            "division": {"id": 201, "name": division},
            "teamRecords": [{
                "team": {"id": team_id, "name": team_name},
                "wins": 82,
                "losses": 80,
                "winningPercentage": ".506",
                "gamesBack": "19.0",
                "divisionRank": "4"
            }]
        }]
    })
}

fn boxscore_body() -> JsonValue {
    json!({
        "teams": {
            "away": {
                "team": {"id": 147, "name": "New York Yankees"},
                "teamStats": {"batting": {"runs": 8, "hits": 11}},
                "battingOrder": [592450],
                "pitchers": [543037],
                "players": {
                    "ID592450": {
                        "person": {"id": 592450, "fullName": "Aaron Judge"},
                        "position": {"abbreviation": "RF"},
                        "stats": {"batting": {"hits": 2, "homeRuns": 1}}
                    },
                    "ID543037": {
                        "person": {"id": 543037, "fullName": "Gerrit Cole"},
                        "position": {"abbreviation": "P"},
                        "stats": {"pitching": {"strikeOuts": 9}}
                    }
                }
            },
            "home": {
                "team": {"id": 137, "name": "San Francisco Giants"},
                "teamStats": {"batting": {"runs": 2, "hits": 5}},
                "battingOrder": [],
                "pitchers": [],
                "players": {}
            }
        }
    })
}

#[async_trait]
impl StatsProvider for FakeProvider {
    async fn standings(&self, query: &StandingsQuery) -> mlb_stats::Result<JsonValue> {
        self.respond(
            format!("standings leagueId={} season={}", query.league_id, query.season),
            standings_body(query.league_id),
        )
    }

    async fn schedule(&self, query: &ScheduleQuery) -> mlb_stats::Result<JsonValue> {
        let date = query
            .date
            .or(query.start_date)
            .map(|d| d.to_string())
            .unwrap_or_else(|| "2024-06-01".to_string());
        self.respond(
            format!("schedule sportId={} date={}", query.sport_id, date),
            json!({
                "totalGames": 1,
                "dates": [{
                    "date": date,
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
            }),
        )
    }

    async fn team(&self, team_id: u64, _query: &TeamQuery) -> mlb_stats::Result<JsonValue> {
        self.respond(
            format!("team {}", team_id),
            json!({"teams": [{"id": team_id, "name": "New York Yankees"}]}),
        )
    }

    async fn teams(&self, sport_id: u32, _season: Option<i32>) -> mlb_stats::Result<JsonValue> {
        self.respond(
            format!("teams sportId={}", sport_id),
            json!({"teams": [
                {"id": 147, "name": "New York Yankees", "teamName": "Yankees", "abbreviation": "NYY",
                 "shortName": "NY Yankees", "locationName": "Bronx", "franchiseName": "New York", "clubName": "Yankees"},
                {"id": 121, "name": "New York Mets", "teamName": "Mets", "abbreviation": "NYM",
                 "shortName": "NY Mets", "locationName": "Flushing", "franchiseName": "New York", "clubName": "Mets"}
            ]}),
        )
    }

    async fn person(&self, person_id: u64) -> mlb_stats::Result<JsonValue> {
        self.respond(
            format!("person {}", person_id),
            json!({"people": [{"id": person_id, "fullName": "Aaron Judge"}]}),
        )
    }

    async fn people_stats(&self, query: &PlayerStatsQuery) -> mlb_stats::Result<JsonValue> {
        let people: Vec<JsonValue> = query
            .person_ids
            .iter()
            .map(|id| {
                json!({
                    "id": id,
                    "fullName": format!("Player {}", id),
                    "stats": [{
                        "group": {"displayName": "hitting"},
                        "type": {"displayName": "season"},
                        "splits": [{"season": "2023", "stat": {"homeRuns": 37}}]
                    }]
                })
            })
            .collect();
        self.respond(
            format!("people_stats {}", query.hydrate_param()),
            json!({"people": people}),
        )
    }

    async fn sport_players(
        &self,
        sport_id: u32,
        _season: Option<i32>,
    ) -> mlb_stats::Result<JsonValue> {
        self.respond(
            format!("sport_players {}", sport_id),
            json!({"people": [
                {"id": 592450, "fullName": "Aaron Judge", "lastName": "Judge"},
                {"id": 660271, "fullName": "Shohei Ohtani", "lastName": "Ohtani"}
            ]}),
        )
    }

    async fn boxscore(&self, game_pk: u64, _query: &GameQuery) -> mlb_stats::Result<JsonValue> {
        self.respond(format!("boxscore {}", game_pk), boxscore_body())
    }

    async fn linescore(&self, game_pk: u64) -> mlb_stats::Result<JsonValue> {
        self.respond(
            format!("linescore {}", game_pk),
            json!({"currentInning": 9, "innings": [{"num": 1}], "teams": {}}),
        )
    }

    async fn play_by_play(&self, game_pk: u64, _query: &GameQuery) -> mlb_stats::Result<JsonValue> {
        self.respond(
            format!("play_by_play {}", game_pk),
            json!({"allPlays": [
                {"result": {"eventType": "home_run"}, "about": {"isScoringPlay": true}},
                {"result": {"eventType": "strikeout"}, "about": {"isScoringPlay": false}},
                {"result": {"eventType": "double"}, "about": {"isScoringPlay": true}}
            ]}),
        )
    }

    async fn game_content(&self, game_pk: u64) -> mlb_stats::Result<JsonValue> {
        self.respond(
            format!("game_content {}", game_pk),
            json!({"highlights": {"highlights": {"items": [{
                "headline": "Judge homers",
                "playbacks": [{"name": "mp4Avc", "url": "https://example.test/a.mp4"}]
            }]}}}),
        )
    }

    async fn game_pace(&self, season: i32, sport_id: u32) -> mlb_stats::Result<JsonValue> {
        self.respond(
            format!("game_pace season={} sportId={}", season, sport_id),
            json!({"sports": [{"season": season.to_string(), "timePerGame": "02:39:00"}]}),
        )
    }

    async fn sabermetrics(&self, season: i32, group: &str) -> mlb_stats::Result<JsonValue> {
        self.respond(
            format!("sabermetrics season={} group={}", season, group),
            json!({"stats": [{"splits": [{
                "player": {"id": 592450, "fullName": "Aaron Judge"},
                "team": {"id": 147, "name": "New York Yankees"},
                "position": {"abbreviation": "RF"},
                "stat": {"war": 5.8, "woba": 0.428}
            }]}]}),
        )
    }

    async fn roster(&self, team_id: u64, query: &RosterQuery) -> mlb_stats::Result<JsonValue> {
        self.respond(
            format!(
                "roster {} type={}",
                team_id,
                query.roster_type.as_deref().unwrap_or("-")
            ),
            json!({"roster": [{"person": {"id": 592450, "fullName": "Aaron Judge"}}]}),
        )
    }

    async fn draft(&self, year: i32) -> mlb_stats::Result<JsonValue> {
        self.respond(
            format!("draft {}", year),
            json!({"drafts": {"draftYear": year, "rounds": []}}),
        )
    }

    async fn award_recipients(&self, award_id: &str) -> mlb_stats::Result<JsonValue> {
        self.respond(
            format!("awards {}", award_id),
            json!({"awards": [{"id": award_id, "season": "2022", "player": {"id": 592450}}]}),
        )
    }
}
