use crate::error::WorkflowResult;
use crate::utils;

use db::models::profile::Profile;
use db::repositories::{BorrowRequestRepository, ProfileRepository};

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

/// Aggregate impact figures for one neighborhood grouping label.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborhoodStats {
    pub neighborhood: String,
    pub members: i64,
    pub total_points: i64,
    pub co2_saved: Decimal,
}

pub struct CommunityService {
    profile_repo: Arc<dyn ProfileRepository + Send + Sync>,
    request_repo: Arc<dyn BorrowRequestRepository + Send + Sync>,
}

impl CommunityService {
    pub fn new(
        profile_repo: Arc<dyn ProfileRepository + Send + Sync>,
        request_repo: Arc<dyn BorrowRequestRepository + Send + Sync>,
    ) -> Self {
        CommunityService {
            profile_repo,
            request_repo,
        }
    }

    /// Per-neighborhood membership, point totals and CO2 saved. CO2 counts
    /// every returned borrow request, attributed to the borrower's
    /// neighborhood; neighborhoods with members but no returns show zero.
    pub fn neighborhood_stats(&self) -> WorkflowResult<Vec<NeighborhoodStats>> {
        let points = self.profile_repo.aggregate_points_by_neighborhood()?;
        let co2_rows = self.request_repo.aggregate_returned_co2_by_neighborhood()?;

        let mut co2_by_neighborhood: HashMap<String, Decimal> = co2_rows
            .into_iter()
            .map(|row| {
                let saved = utils::bigdecimal_to_decimal(&row.co2_saved);
                (row.neighborhood, saved)
            })
            .collect();

        let mut stats: Vec<NeighborhoodStats> = points
            .into_iter()
            .map(|row| {
                let co2_saved = co2_by_neighborhood
                    .remove(&row.neighborhood)
                    .unwrap_or_default();
                NeighborhoodStats {
                    neighborhood: row.neighborhood,
                    members: row.members,
                    total_points: row.total_points,
                    co2_saved,
                }
            })
            .collect();

        stats.sort_by(|a, b| b.total_points.cmp(&a.total_points));
        Ok(stats)
    }

    pub fn total_co2_saved(&self) -> WorkflowResult<Decimal> {
        let stats = self.neighborhood_stats()?;
        Ok(stats.iter().map(|s| s.co2_saved).sum())
    }

    pub fn leaderboard(&self, limit: i64) -> WorkflowResult<Vec<Profile>> {
        Ok(self.profile_repo.find_top_by_points(limit)?)
    }
}
