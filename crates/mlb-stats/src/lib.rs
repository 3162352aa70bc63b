//! mlb-stats: MLB Stats API client
//!
//! `StatsProvider` はツール層から見た統計データの境界です。
//! `MlbStatsClient` が reqwest で実装します。

pub mod client;
pub mod error;
pub mod provider;
pub mod types;

pub use client::MlbStatsClient;
pub use error::{Result, StatsError};
pub use provider::StatsProvider;
pub use types::{GameQuery, PlayerStatsQuery, RosterQuery, ScheduleQuery, StandingsQuery, TeamQuery};
