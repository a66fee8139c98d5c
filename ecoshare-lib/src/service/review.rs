use crate::error::{WorkflowError, WorkflowResult};
use crate::session::SessionContext;

use db::models::review::{NewReview, Review};
use db::repositories::ReviewRepository;

use std::sync::Arc;

/// Append-only peer reviews between profiles.
pub struct ReviewService {
    review_repo: Arc<dyn ReviewRepository + Send + Sync>,
}

impl ReviewService {
    pub fn new(review_repo: Arc<dyn ReviewRepository + Send + Sync>) -> Self {
        ReviewService { review_repo }
    }

    pub fn create_review(
        &self,
        session: &SessionContext,
        reviewee_id: &str,
        rating: i32,
        comment: Option<String>,
    ) -> WorkflowResult<Review> {
        let profile = session.current_profile()?;

        if !(1..=5).contains(&rating) {
            return Err(WorkflowError::Validation(
                "rating must be between 1 and 5".to_string(),
            ));
        }
        if profile.id == reviewee_id {
            return Err(WorkflowError::Validation(
                "cannot review yourself".to_string(),
            ));
        }

        let new_review = NewReview {
            reviewer_id: profile.id.clone(),
            reviewee_id: reviewee_id.to_string(),
            rating,
            comment,
        };
        Ok(self.review_repo.create(&new_review)?)
    }

    pub fn reviews_for(&self, reviewee_id: &str) -> WorkflowResult<Vec<Review>> {
        Ok(self.review_repo.find_for_reviewee(reviewee_id)?)
    }
}
