//! Allowed values for enumerated tool parameters
//!
//! Values are matched case-insensitively and normalized to the spelling
//! listed here, which is the spelling the MLB Stats API expects.

/// League filter for standings
pub const LEAGUES: &[&str] = &["AL", "NL", "both"];

/// American League id in the Stats API
pub const AMERICAN_LEAGUE_ID: u32 = 103;

/// National League id in the Stats API
pub const NATIONAL_LEAGUE_ID: u32 = 104;

/// Roster types (`/api/v1/rosterTypes`)
pub const ROSTER_TYPES: &[&str] = &[
    "40Man",
    "fullSeason",
    "fullRoster",
    "nonRosterInvitees",
    "active",
    "allTime",
    "depthChart",
    "gameday",
    "coach",
];

/// Stat groups accepted by player stat lookups (`/api/v1/statGroups`)
pub const STAT_GROUPS: &[&str] = &["hitting", "pitching", "fielding", "catching", "running"];

/// Stat groups that carry sabermetrics
pub const SABERMETRIC_GROUPS: &[&str] = &["hitting", "pitching"];

/// Stat types (`/api/v1/statTypes`)
pub const STAT_TYPES: &[&str] = &[
    "projected",
    "projectedRos",
    "yearByYear",
    "yearByYearAdvanced",
    "yearByYearPlayoffs",
    "season",
    "standard",
    "advanced",
    "career",
    "careerRegularSeason",
    "careerAdvanced",
    "seasonAdvanced",
    "careerStatSplits",
    "careerPlayoffs",
    "gameLog",
    "playLog",
    "pitchLog",
    "metricLog",
    "metricAverages",
    "pitchArsenal",
    "outsAboveAverage",
    "expectedStatistics",
    "sabermetrics",
    "sprayChart",
    "tracking",
    "vsPlayer",
    "vsPlayerTotal",
    "vsPlayer5Y",
    "vsTeam",
    "vsTeam5Y",
    "vsTeamTotal",
    "lastXGames",
    "byDateRange",
    "byDateRangeAdvanced",
    "byMonth",
    "byMonthPlayoffs",
    "byDayOfWeek",
    "byDayOfWeekPlayoffs",
    "homeAndAway",
    "homeAndAwayPlayoffs",
    "winLoss",
    "winLossPlayoffs",
    "rankings",
    "rankingsByYear",
    "statsSingleSeason",
    "statsSingleSeasonAdvanced",
    "hotColdZones",
    "availableStats",
    "opponentsFaced",
    "gameTypeStats",
    "firstYearStats",
    "lastYearStats",
    "statSplits",
    "statSplitsAdvanced",
    "atGameStart",
    "vsOpponents",
];

/// Standings types (`/api/v1/standingsTypes`)
pub const STANDINGS_TYPES: &[&str] = &[
    "regularSeason",
    "wildCard",
    "divisionLeaders",
    "wildCardWithLeaders",
    "firstHalf",
    "secondHalf",
    "springTraining",
    "postseason",
    "byDivision",
    "byConference",
    "byLeague",
    "byOrganization",
];

/// Person fields a player search can match on
pub const PLAYER_SEARCH_KEYS: &[&str] = &[
    "fullName",
    "firstName",
    "lastName",
    "useName",
    "boxscoreName",
    "nickName",
];

/// Team fields a team search can match on, exactly or by substring fallback
pub const TEAM_SEARCH_KEYS: &[&str] = &[
    "name",
    "teamName",
    "abbreviation",
    "shortName",
    "locationName",
    "franchiseName",
    "clubName",
];

/// Pseudo event type selecting every play that scored a run
pub const SCORING_PLAY_EVENT: &str = "scoring_play";

/// Find the canonical spelling of `value` in `choices`, ignoring ASCII case
pub fn normalize_choice(value: &str, choices: &'static [&'static str]) -> Option<&'static str> {
    let value = value.trim();
    choices.iter().find(|c| c.eq_ignore_ascii_case(value)).copied()
}
