use crate::error::WorkflowError;

use std::fmt;
use std::str::FromStr;

/// Lifecycle of a borrow request. The only reachable transitions are
/// pending -> approved, pending -> cancelled, approved -> picked_up and
/// picked_up -> returned; returned and cancelled are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestStatus {
    Pending,
    Approved,
    PickedUp,
    Returned,
    Cancelled,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 5] = [
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::PickedUp,
        RequestStatus::Returned,
        RequestStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::PickedUp => "picked_up",
            RequestStatus::Returned => "returned",
            RequestStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Returned | RequestStatus::Cancelled)
    }

    pub fn can_transition(self, next: RequestStatus) -> bool {
        matches!(
            (self, next),
            (RequestStatus::Pending, RequestStatus::Approved)
                | (RequestStatus::Pending, RequestStatus::Cancelled)
                | (RequestStatus::Approved, RequestStatus::PickedUp)
                | (RequestStatus::PickedUp, RequestStatus::Returned)
        )
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RequestStatus::Pending),
            "approved" => Ok(RequestStatus::Approved),
            "picked_up" => Ok(RequestStatus::PickedUp),
            "returned" => Ok(RequestStatus::Returned),
            "cancelled" => Ok(RequestStatus::Cancelled),
            other => Err(WorkflowError::Validation(format!(
                "unknown request status: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemStatus {
    Available,
    Borrowed,
    Unavailable,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Available => "available",
            ItemStatus::Borrowed => "borrowed",
            ItemStatus::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(ItemStatus::Available),
            "borrowed" => Ok(ItemStatus::Borrowed),
            "unavailable" => Ok(ItemStatus::Unavailable),
            other => Err(WorkflowError::Validation(format!(
                "unknown item status: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    Tools,
    Appliances,
    CampingGear,
    Books,
    Other,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 5] = [
        ItemCategory::Tools,
        ItemCategory::Appliances,
        ItemCategory::CampingGear,
        ItemCategory::Books,
        ItemCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Tools => "Tools",
            ItemCategory::Appliances => "Appliances",
            ItemCategory::CampingGear => "Camping Gear",
            ItemCategory::Books => "Books",
            ItemCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemCategory {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Tools" => Ok(ItemCategory::Tools),
            "Appliances" => Ok(ItemCategory::Appliances),
            "Camping Gear" => Ok(ItemCategory::CampingGear),
            "Books" => Ok(ItemCategory::Books),
            "Other" => Ok(ItemCategory::Other),
            other => Err(WorkflowError::Validation(format!(
                "unknown item category: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCondition {
    LikeNew,
    Good,
    Fair,
    Poor,
}

impl ItemCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCondition::LikeNew => "Like New",
            ItemCondition::Good => "Good",
            ItemCondition::Fair => "Fair",
            ItemCondition::Poor => "Poor",
        }
    }

    /// Newer items carry a higher manufacturing footprint, so borrowing them
    /// avoids more emissions.
    pub fn co2_multiplier(&self) -> f64 {
        match self {
            ItemCondition::LikeNew => 1.2,
            ItemCondition::Good => 1.0,
            ItemCondition::Fair => 0.8,
            ItemCondition::Poor => 0.6,
        }
    }
}

impl fmt::Display for ItemCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemCondition {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Like New" => Ok(ItemCondition::LikeNew),
            "Good" => Ok(ItemCondition::Good),
            "Fair" => Ok(ItemCondition::Fair),
            "Poor" => Ok(ItemCondition::Poor),
            other => Err(WorkflowError::Validation(format!(
                "unknown item condition: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChallengeType {
    Borrow,
    Lend,
    Repair,
    Custom,
}

impl ChallengeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeType::Borrow => "borrow",
            ChallengeType::Lend => "lend",
            ChallengeType::Repair => "repair",
            ChallengeType::Custom => "custom",
        }
    }
}

impl fmt::Display for ChallengeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChallengeType {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "borrow" => Ok(ChallengeType::Borrow),
            "lend" => Ok(ChallengeType::Lend),
            "repair" => Ok(ChallengeType::Repair),
            "custom" => Ok(ChallengeType::Custom),
            other => Err(WorkflowError::Validation(format!(
                "unknown challenge type: {other}"
            ))),
        }
    }
}
