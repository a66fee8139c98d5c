use db::repositories::{
    borrow_request::BorrowRequestRepositoryImpl, challenge::ChallengeRepositoryImpl,
    item::ItemRepositoryImpl, profile::ProfileRepositoryImpl,
    user_challenge::UserChallengeRepositoryImpl, BorrowRequestRepository, ChallengeRepository,
    ItemRepository, ProfileRepository, UserChallengeRepository,
};
use db::{establish_connection_pool, run_migrations};
use ecoshare_lib::{
    config::Config,
    service::{challenge::ChallengeService, community::CommunityService},
    session::SessionContext,
    utils,
};

mod challenge_cmd;
mod item_cmd;
mod stats_cmd;

use challenge_cmd::ChallengeCommands;
use item_cmd::ItemCommands;
use stats_cmd::StatsCommands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "ecoshare-cli")]
#[command(about = "EcoShare operator CLI")]
#[command(version = "1.0.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Community impact statistics")]
    Stats {
        #[command(subcommand)]
        command: StatsCommands,
    },

    #[command(about = "Item listing helpers")]
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },

    #[command(about = "Challenge administration")]
    Challenge {
        #[command(subcommand)]
        command: ChallengeCommands,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Arc::new(Config::load_toml()?);

    let log_level = utils::convert_log_level_to_tracing_level(&config.log_level);
    let filter = EnvFilter::from_default_env().add_directive(log_level.into());

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()?;

    warn!("Starting ecoshare-cli...");

    let db_conn = establish_connection_pool(
        &config.database.database_url,
        config.database.db_connection_pool_max_size,
        config.database.db_connection_pool_idle_size,
    )?;
    warn!("Connected to database {}", &config.database.database_url);

    run_migrations(&db_conn)?;
    warn!("Database migrations completed");

    let profile_repo: Arc<dyn ProfileRepository + Send + Sync> =
        Arc::new(ProfileRepositoryImpl::new(db_conn.clone()));

    let item_repo: Arc<dyn ItemRepository + Send + Sync> =
        Arc::new(ItemRepositoryImpl::new(db_conn.clone()));

    let request_repo: Arc<dyn BorrowRequestRepository + Send + Sync> =
        Arc::new(BorrowRequestRepositoryImpl::new(db_conn.clone()));

    let challenge_repo: Arc<dyn ChallengeRepository + Send + Sync> =
        Arc::new(ChallengeRepositoryImpl::new(db_conn.clone()));

    let user_challenge_repo: Arc<dyn UserChallengeRepository + Send + Sync> =
        Arc::new(UserChallengeRepositoryImpl::new(db_conn.clone()));

    let community_service = Arc::new(CommunityService::new(
        Arc::clone(&profile_repo),
        Arc::clone(&request_repo),
    ));

    let challenge_service = Arc::new(ChallengeService::new(
        Arc::clone(&item_repo),
        Arc::clone(&request_repo),
        Arc::clone(&user_challenge_repo),
    ));

    let args = Cli::parse();
    match args.command {
        Commands::Stats { command } => match command {
            StatsCommands::Neighborhoods => {
                stats_cmd::handle_neighborhoods(Arc::clone(&community_service))?;
            }
            StatsCommands::Leaderboard { limit } => {
                stats_cmd::handle_leaderboard(Arc::clone(&community_service), limit)?;
            }
            StatsCommands::Co2 => {
                stats_cmd::handle_total_co2(Arc::clone(&community_service))?;
            }
        },
        Commands::Item { command } => match command {
            ItemCommands::Estimate {
                title,
                category,
                description,
                condition,
            } => {
                item_cmd::handle_estimate(&title, &category, &description, &condition)?;
            }
        },
        Commands::Challenge { command } => match command {
            ChallengeCommands::Complete { user, challenge } => {
                let session = SessionContext::new(
                    Arc::clone(&config),
                    Arc::clone(&profile_repo),
                    Arc::clone(&item_repo),
                    Arc::clone(&challenge_repo),
                );
                challenge_cmd::handle_complete(
                    Arc::clone(&challenge_service),
                    session,
                    &user,
                    challenge,
                )?;
            }
        },
    }

    Ok(())
}
