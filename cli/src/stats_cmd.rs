use ecoshare_lib::service::community::CommunityService;

use anyhow::Result;
use clap::Subcommand;
use std::sync::Arc;
use tracing::info;

#[derive(Subcommand)]
pub enum StatsCommands {
    #[command(about = "Per-neighborhood members, points and CO2 saved")]
    Neighborhoods,

    #[command(about = "Top profiles by eco points")]
    Leaderboard {
        #[arg(long, default_value_t = 10)]
        limit: i64,
    },

    #[command(about = "Total CO2 saved across all neighborhoods")]
    Co2,
}

pub fn handle_neighborhoods(community_service: Arc<CommunityService>) -> Result<()> {
    let stats = community_service.neighborhood_stats()?;
    for row in stats {
        info!(
            "{}: {} members, {} points, {} kg CO2 saved",
            row.neighborhood, row.members, row.total_points, row.co2_saved
        );
    }
    Ok(())
}

pub fn handle_leaderboard(community_service: Arc<CommunityService>, limit: i64) -> Result<()> {
    let top = community_service.leaderboard(limit)?;
    for (rank, profile) in top.iter().enumerate() {
        info!(
            "#{} {} ({}) - {} points",
            rank + 1,
            profile.full_name,
            profile.neighborhood,
            profile.eco_points
        );
    }
    Ok(())
}

pub fn handle_total_co2(community_service: Arc<CommunityService>) -> Result<()> {
    let total = community_service.total_co2_saved()?;
    info!("Community total: {} kg CO2 saved", total);
    Ok(())
}
