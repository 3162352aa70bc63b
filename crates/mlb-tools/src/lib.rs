//! mlb-tools: MLB tools for mlb-gateway
//!
//! 各ツールはパラメータを正規化し、`StatsProvider` を呼び出し、
//! レスポンスを AI クライアント向けに整形します。

use std::sync::Arc;

use mlb_core::ToolManager;
use mlb_stats::StatsProvider;
use tracing::info;

pub mod clock;
pub mod games;
pub mod league;
pub mod players;
pub mod sabermetrics;
pub mod schedule;
pub mod shape;
pub mod standings;
pub mod teams;

#[cfg(test)]
pub(crate) mod testing;

pub use clock::{CurrentDateTool, CurrentTimeTool};
pub use games::{
    BoxscoreTool, GamePaceTool, HighlightsTool, LineupTool, LinescoreTool, ScoringPlaysTool,
};
pub use league::{AwardsTool, DraftTool};
pub use players::{PlayerInfoTool, PlayerStatsTool, PlayersTool, SearchPlayersTool};
pub use sabermetrics::SabermetricsTool;
pub use schedule::ScheduleTool;
pub use standings::StandingsTool;
pub use teams::{RosterTool, SearchTeamsTool, TeamInfoTool, TeamsTool};

/// Register every MLB tool with the tool manager
pub fn register_default_tools(manager: &mut ToolManager, provider: Arc<dyn StatsProvider>) {
    manager.register(Arc::new(StandingsTool::new(provider.clone())));
    manager.register(Arc::new(ScheduleTool::new(provider.clone())));
    manager.register(Arc::new(TeamInfoTool::new(provider.clone())));
    manager.register(Arc::new(PlayerInfoTool::new(provider.clone())));
    manager.register(Arc::new(BoxscoreTool::new(provider.clone())));
    manager.register(Arc::new(LinescoreTool::new(provider.clone())));
    manager.register(Arc::new(HighlightsTool::new(provider.clone())));
    manager.register(Arc::new(GamePaceTool::new(provider.clone())));
    manager.register(Arc::new(ScoringPlaysTool::new(provider.clone())));
    manager.register(Arc::new(LineupTool::new(provider.clone())));
    manager.register(Arc::new(PlayerStatsTool::new(provider.clone())));
    manager.register(Arc::new(SabermetricsTool::new(provider.clone())));
    manager.register(Arc::new(RosterTool::new(provider.clone())));
    manager.register(Arc::new(SearchPlayersTool::new(provider.clone())));
    manager.register(Arc::new(PlayersTool::new(provider.clone())));
    manager.register(Arc::new(SearchTeamsTool::new(provider.clone())));
    manager.register(Arc::new(TeamsTool::new(provider.clone())));
    manager.register(Arc::new(DraftTool::new(provider.clone())));
    manager.register(Arc::new(AwardsTool::new(provider)));
    manager.register(Arc::new(CurrentDateTool));
    manager.register(Arc::new(CurrentTimeTool));

    info!(count = manager.len(), "Registered MLB tools");
}

/// Build a tool manager holding every MLB tool
pub fn default_manager(provider: Arc<dyn StatsProvider>) -> ToolManager {
    let mut manager = ToolManager::new();
    register_default_tools(&mut manager, provider);
    manager
}
