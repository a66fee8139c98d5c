use crate::config::Config;
use crate::error::{WorkflowError, WorkflowResult};

use db::models::{challenge::Challenge, item::Item, profile::Profile};
use db::repositories::{ChallengeRepository, ItemRepository, ProfileRepository};

use crate::types::ItemStatus;
use std::sync::Arc;
use tracing::{debug, info};

/// Explicit per-session state: the authenticated profile plus cached
/// reference data (available listings, active challenges, leaderboard).
/// Replaced wholesale on sign-in and sign-out; nothing here is ambient.
pub struct SessionContext {
    leaderboard_limit: i64,
    profile: Option<Profile>,
    items: Vec<Item>,
    challenges: Vec<Challenge>,
    leaderboard: Vec<Profile>,
    profile_repo: Arc<dyn ProfileRepository + Send + Sync>,
    item_repo: Arc<dyn ItemRepository + Send + Sync>,
    challenge_repo: Arc<dyn ChallengeRepository + Send + Sync>,
}

impl SessionContext {
    pub fn new(
        config: Arc<Config>,
        profile_repo: Arc<dyn ProfileRepository + Send + Sync>,
        item_repo: Arc<dyn ItemRepository + Send + Sync>,
        challenge_repo: Arc<dyn ChallengeRepository + Send + Sync>,
    ) -> Self {
        SessionContext {
            leaderboard_limit: config.community.leaderboard_limit,
            profile: None,
            items: Vec::new(),
            challenges: Vec::new(),
            leaderboard: Vec::new(),
            profile_repo,
            item_repo,
            challenge_repo,
        }
    }

    /// Loads the profile for the given identity and refreshes every cache.
    /// An unknown identity is an auth failure, not a persistence one.
    pub fn sign_in(&mut self, profile_id: &str) -> WorkflowResult<()> {
        let profile = match self.profile_repo.find_by_id(profile_id) {
            Ok(profile) => profile,
            Err(diesel::result::Error::NotFound) => {
                return Err(WorkflowError::Auth(format!(
                    "no profile for identity {profile_id}"
                )))
            }
            Err(e) => return Err(e.into()),
        };

        info!("Signed in as {} ({})", profile.full_name, profile.id);
        self.profile = Some(profile);
        self.refresh_all()
    }

    pub fn sign_out(&mut self) {
        if let Some(profile) = self.profile.take() {
            info!("Signed out {}", profile.id);
        }
        self.items.clear();
        self.challenges.clear();
        self.leaderboard.clear();
    }

    pub fn current_profile(&self) -> WorkflowResult<&Profile> {
        self.profile
            .as_ref()
            .ok_or_else(|| WorkflowError::Auth("no authenticated profile".to_string()))
    }

    pub fn is_signed_in(&self) -> bool {
        self.profile.is_some()
    }

    pub fn refresh_all(&mut self) -> WorkflowResult<()> {
        self.refresh_items()?;
        self.refresh_challenges()?;
        self.refresh_leaderboard()?;
        Ok(())
    }

    pub fn refresh_items(&mut self) -> WorkflowResult<()> {
        self.items = self
            .item_repo
            .find_by_status(ItemStatus::Available.as_str())?;
        debug!("Cached {} available items", self.items.len());
        Ok(())
    }

    pub fn refresh_challenges(&mut self) -> WorkflowResult<()> {
        self.challenges = self.challenge_repo.find_active()?;
        debug!("Cached {} active challenges", self.challenges.len());
        Ok(())
    }

    pub fn refresh_leaderboard(&mut self) -> WorkflowResult<()> {
        self.leaderboard = self.profile_repo.find_top_by_points(self.leaderboard_limit)?;
        Ok(())
    }

    /// Re-reads the signed-in profile, picking up point awards made since
    /// sign-in.
    pub fn refresh_profile(&mut self) -> WorkflowResult<()> {
        if let Some(profile) = &self.profile {
            let id = profile.id.clone();
            self.profile = Some(self.profile_repo.find_by_id(&id)?);
        }
        Ok(())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn leaderboard(&self) -> &[Profile] {
        &self.leaderboard
    }
}
