use ecoshare_lib::service::challenge::{ChallengeService, CompletionOutcome};
use ecoshare_lib::session::SessionContext;

use anyhow::Result;
use clap::Subcommand;
use std::sync::Arc;
use tracing::info;

#[derive(Subcommand)]
pub enum ChallengeCommands {
    #[command(about = "Complete a challenge for a user if their progress has reached the target")]
    Complete {
        #[arg(long)]
        user: String,

        #[arg(long)]
        challenge: i32,
    },
}

pub fn handle_complete(
    challenge_service: Arc<ChallengeService>,
    mut session: SessionContext,
    user: &str,
    challenge_id: i32,
) -> Result<()> {
    session.sign_in(user)?;

    match challenge_service.complete_if_ready(&session, challenge_id)? {
        CompletionOutcome::Completed {
            points_awarded,
            badge,
        } => {
            info!("Challenge {} completed: {} points", challenge_id, points_awarded);
            if let Some(badge) = badge {
                info!("Badge earned: {}", badge);
            }
        }
        CompletionOutcome::NotReady => {
            info!("Challenge {} not completed yet: progress below target", challenge_id);
        }
        CompletionOutcome::AlreadyCompleted => {
            info!("Challenge {} was already completed", challenge_id);
        }
    }
    Ok(())
}
