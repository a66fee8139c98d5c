use crate::error::{WorkflowError, WorkflowResult};
use crate::session::SessionContext;
use crate::types::{ChallengeType, RequestStatus};

use db::models::user_challenge::{NewUserChallenge, UpdateUserChallenge, UserChallenge, UserChallengeWithChallenge};
use db::repositories::{BorrowRequestRepository, ItemRepository, UserChallengeRepository};

use std::sync::Arc;
use tracing::info;

/// Result of a completion attempt. Not being ready and being already
/// completed are ordinary outcomes, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    Completed {
        points_awarded: i32,
        badge: Option<String>,
    },
    NotReady,
    AlreadyCompleted,
}

impl CompletionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, CompletionOutcome::Completed { .. })
    }
}

/// Challenge membership, progress tracking and the completion/point-award
/// routine.
pub struct ChallengeService {
    item_repo: Arc<dyn ItemRepository + Send + Sync>,
    request_repo: Arc<dyn BorrowRequestRepository + Send + Sync>,
    user_challenge_repo: Arc<dyn UserChallengeRepository + Send + Sync>,
}

impl ChallengeService {
    pub fn new(
        item_repo: Arc<dyn ItemRepository + Send + Sync>,
        request_repo: Arc<dyn BorrowRequestRepository + Send + Sync>,
        user_challenge_repo: Arc<dyn UserChallengeRepository + Send + Sync>,
    ) -> Self {
        ChallengeService {
            item_repo,
            request_repo,
            user_challenge_repo,
        }
    }

    /// Joins the signed-in profile to a challenge with progress 0. Re-joining
    /// surfaces as [`WorkflowError::Duplicate`], enforced by the unique
    /// (user, challenge) constraint rather than a read-then-write check.
    pub fn join_challenge(
        &self,
        session: &SessionContext,
        challenge_id: i32,
    ) -> WorkflowResult<UserChallenge> {
        let profile = session.current_profile()?;

        let new_membership = NewUserChallenge {
            user_id: profile.id.clone(),
            challenge_id,
            progress: 0,
        };
        let membership = self.user_challenge_repo.create(&new_membership)?;
        info!("{} joined challenge {}", profile.id, challenge_id);
        Ok(membership)
    }

    /// Recomputes progress with the rule for the challenge type and stores it
    /// as-is; no clamping to the target at this step. Lend challenges count
    /// the user's listed items, borrow challenges count their returned
    /// borrows, repair/custom take the caller-reported count.
    pub fn update_progress(
        &self,
        session: &SessionContext,
        user_challenge_id: i32,
        challenge_type: ChallengeType,
        reported_count: Option<i32>,
    ) -> WorkflowResult<i32> {
        let profile = session.current_profile()?;

        let new_progress = match challenge_type {
            ChallengeType::Lend => self.item_repo.find_by_owner(&profile.id)?.len() as i32,
            ChallengeType::Borrow => {
                self.request_repo
                    .find_by_borrower_and_status(&profile.id, RequestStatus::Returned.as_str())?
                    .len() as i32
            }
            ChallengeType::Repair | ChallengeType::Custom => reported_count.ok_or_else(|| {
                WorkflowError::Validation(
                    "a reported count is required for this challenge type".to_string(),
                )
            })?,
        };

        self.user_challenge_repo.update(
            user_challenge_id,
            &UpdateUserChallenge {
                progress: Some(new_progress),
                completed_at: None,
            },
        )?;
        Ok(new_progress)
    }

    /// Completes the challenge and credits the reward when progress has
    /// reached the target and the membership is not yet completed. Both
    /// writes happen in one repository transaction, so a second call can
    /// never double-award.
    pub fn complete_if_ready(
        &self,
        session: &SessionContext,
        challenge_id: i32,
    ) -> WorkflowResult<CompletionOutcome> {
        let profile = session.current_profile()?;

        let membership = self
            .user_challenge_repo
            .find_by_user_and_challenge_with_challenge(&profile.id, challenge_id)?;

        if membership.completed_at.is_some() {
            return Ok(CompletionOutcome::AlreadyCompleted);
        }
        if membership.progress < membership.target_count {
            return Ok(CompletionOutcome::NotReady);
        }

        self.user_challenge_repo.complete_and_reward(
            membership.id,
            &profile.id,
            membership.points_reward,
        )?;

        info!(
            "{} completed challenge {} for {} points",
            profile.id, challenge_id, membership.points_reward
        );
        Ok(CompletionOutcome::Completed {
            points_awarded: membership.points_reward,
            badge: membership.badge_name,
        })
    }

    /// The signed-in profile's memberships joined with their challenge
    /// definitions.
    pub fn my_challenges(
        &self,
        session: &SessionContext,
    ) -> WorkflowResult<Vec<UserChallengeWithChallenge>> {
        let profile = session.current_profile()?;
        Ok(self
            .user_challenge_repo
            .find_by_user_with_challenge(&profile.id)?)
    }
}
