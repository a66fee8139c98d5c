use crate::error::{WorkflowError, WorkflowResult};
use crate::session::SessionContext;
use crate::types::{ItemStatus, RequestStatus};

use db::models::borrow_request::{BorrowRequest, BorrowRequestWithItem, NewBorrowRequest, UpdateBorrowRequest};
use db::models::item::UpdateItem;
use db::repositories::{BorrowRequestRepository, ItemRepository};

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, warn};

/// Borrow-request lifecycle: creation plus the fixed state machine in
/// [`RequestStatus::can_transition`]. Item availability is kept in step with
/// the request: pickup marks the item borrowed, return makes it available
/// again.
pub struct LendingService {
    item_repo: Arc<dyn ItemRepository + Send + Sync>,
    request_repo: Arc<dyn BorrowRequestRepository + Send + Sync>,
}

impl LendingService {
    pub fn new(
        item_repo: Arc<dyn ItemRepository + Send + Sync>,
        request_repo: Arc<dyn BorrowRequestRepository + Send + Sync>,
    ) -> Self {
        LendingService {
            item_repo,
            request_repo,
        }
    }

    /// Creates a pending request for the item on behalf of the signed-in
    /// profile. The lender is the item's owner at this moment. Overlapping
    /// date windows for the same item are accepted; the window order
    /// (start <= end) is not checked either, matching the product behavior.
    pub fn create_request(
        &self,
        session: &SessionContext,
        item_id: i32,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        message: Option<String>,
    ) -> WorkflowResult<BorrowRequest> {
        let profile = session.current_profile()?;

        let start_date = start_date
            .ok_or_else(|| WorkflowError::Validation("start date is required".to_string()))?;
        let end_date = end_date
            .ok_or_else(|| WorkflowError::Validation("end date is required".to_string()))?;

        let item = self.item_repo.find_by_id(item_id)?;
        if item.owner_id == profile.id {
            return Err(WorkflowError::Validation(
                "cannot request to borrow your own item".to_string(),
            ));
        }

        let new_request = NewBorrowRequest {
            item_id,
            borrower_id: profile.id.clone(),
            lender_id: item.owner_id.clone(),
            start_date,
            end_date,
            message,
            status: RequestStatus::Pending.to_string(),
        };

        let request = self.request_repo.create(&new_request)?;
        info!(
            "Borrow request {} created for item {} by {}",
            request.id, item_id, profile.id
        );
        Ok(request)
    }

    /// Applies one state-machine step. Approve/decline are lender-only;
    /// pickup and return may come from either party. Any pair outside the
    /// transition table fails without touching the stored status.
    pub fn update_request_status(
        &self,
        session: &SessionContext,
        request_id: i32,
        new_status: RequestStatus,
    ) -> WorkflowResult<BorrowRequest> {
        let profile = session.current_profile()?;
        let request = self.request_repo.find_by_id(request_id)?;
        let current: RequestStatus = request.status.parse()?;

        let is_lender = request.lender_id == profile.id;
        let is_borrower = request.borrower_id == profile.id;
        if !is_lender && !is_borrower {
            return Err(WorkflowError::Auth(
                "not a party to this borrow request".to_string(),
            ));
        }
        if matches!(
            new_status,
            RequestStatus::Approved | RequestStatus::Cancelled
        ) && !is_lender
        {
            return Err(WorkflowError::Auth(
                "only the lender can approve or decline a request".to_string(),
            ));
        }

        if !current.can_transition(new_status) {
            warn!(
                "Rejected transition {} -> {} on request {}",
                current, new_status, request_id
            );
            return Err(WorkflowError::InvalidTransition {
                from: current,
                to: new_status,
            });
        }

        let updated = self.request_repo.update(
            request_id,
            &UpdateBorrowRequest {
                status: Some(new_status.to_string()),
                ..Default::default()
            },
        )?;

        // Keep the item's availability in lockstep with the request.
        let item_status = match new_status {
            RequestStatus::PickedUp => Some(ItemStatus::Borrowed),
            RequestStatus::Returned => Some(ItemStatus::Available),
            _ => None,
        };
        if let Some(item_status) = item_status {
            self.item_repo.update(
                request.item_id,
                &UpdateItem {
                    status: Some(item_status.to_string()),
                    ..Default::default()
                },
            )?;
        }

        info!(
            "Request {} moved {} -> {} by {}",
            request_id, current, new_status, profile.id
        );
        Ok(updated)
    }

    /// All requests where the signed-in profile is borrower or lender,
    /// joined with the item listing for display.
    pub fn my_requests(
        &self,
        session: &SessionContext,
    ) -> WorkflowResult<Vec<BorrowRequestWithItem>> {
        let profile = session.current_profile()?;
        Ok(self.request_repo.find_by_participant_with_item(&profile.id)?)
    }
}
