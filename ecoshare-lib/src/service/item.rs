use crate::co2;
use crate::error::{WorkflowError, WorkflowResult};
use crate::session::SessionContext;
use crate::types::{ItemCategory, ItemCondition, ItemStatus};
use crate::utils;

use db::models::item::{Item, ItemWithOwner, NewItem, UpdateItem};
use db::repositories::ItemRepository;

use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::info;

/// Listing input decoded at the boundary; the estimator fills the CO2 figure
/// when the owner leaves it unset.
#[derive(Debug, Clone)]
pub struct NewItemInput {
    pub title: String,
    pub description: Option<String>,
    pub category: ItemCategory,
    pub condition: ItemCondition,
    pub co2_saved_per_borrow: Option<Decimal>,
}

pub struct ItemService {
    item_repo: Arc<dyn ItemRepository + Send + Sync>,
}

impl ItemService {
    pub fn new(item_repo: Arc<dyn ItemRepository + Send + Sync>) -> Self {
        ItemService { item_repo }
    }

    pub fn create_item(
        &self,
        session: &SessionContext,
        input: NewItemInput,
    ) -> WorkflowResult<Item> {
        let profile = session.current_profile()?;

        if input.title.trim().is_empty() {
            return Err(WorkflowError::Validation("title is required".to_string()));
        }

        let co2_saved = match input.co2_saved_per_borrow {
            Some(value) if value < Decimal::ZERO => {
                return Err(WorkflowError::Validation(
                    "co2 saved per borrow cannot be negative".to_string(),
                ))
            }
            Some(value) => value,
            None => co2::estimate(
                &input.title,
                input.category.as_str(),
                input.description.as_deref().unwrap_or(""),
                input.condition.as_str(),
            ),
        };

        let new_item = NewItem {
            owner_id: profile.id.clone(),
            title: input.title,
            description: input.description,
            category: input.category.as_str().to_string(),
            condition: input.condition.as_str().to_string(),
            co2_saved_per_borrow: utils::decimal_to_bigdecimal(&co2_saved),
            status: ItemStatus::Available.to_string(),
        };

        let item = self.item_repo.create(&new_item)?;
        info!("Item {} listed by {}", item.id, profile.id);
        Ok(item)
    }

    pub fn update_item(
        &self,
        session: &SessionContext,
        item_id: i32,
        updates: &UpdateItem,
    ) -> WorkflowResult<Item> {
        self.require_owner(session, item_id)?;
        Ok(self.item_repo.update(item_id, updates)?)
    }

    pub fn delete_item(&self, session: &SessionContext, item_id: i32) -> WorkflowResult<bool> {
        self.require_owner(session, item_id)?;
        Ok(self.item_repo.delete(item_id)?)
    }

    pub fn list_available(&self) -> WorkflowResult<Vec<Item>> {
        Ok(self.item_repo.find_by_status(ItemStatus::Available.as_str())?)
    }

    pub fn list_available_by_category(
        &self,
        category: ItemCategory,
    ) -> WorkflowResult<Vec<Item>> {
        Ok(self
            .item_repo
            .find_by_status_and_category(ItemStatus::Available.as_str(), category.as_str())?)
    }

    pub fn list_available_with_owner(&self) -> WorkflowResult<Vec<ItemWithOwner>> {
        Ok(self
            .item_repo
            .find_by_status_with_owner(ItemStatus::Available.as_str())?)
    }

    /// Case-insensitive substring search over title, description and
    /// category of available listings.
    pub fn search(&self, query: &str) -> WorkflowResult<Vec<Item>> {
        let needle = query.to_lowercase();
        let items = self.list_available()?;
        Ok(items
            .into_iter()
            .filter(|item| {
                item.title.to_lowercase().contains(&needle)
                    || item
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
                    || item.category.to_lowercase().contains(&needle)
            })
            .collect())
    }

    pub fn my_items(&self, session: &SessionContext) -> WorkflowResult<Vec<Item>> {
        let profile = session.current_profile()?;
        Ok(self.item_repo.find_by_owner(&profile.id)?)
    }

    fn require_owner(&self, session: &SessionContext, item_id: i32) -> WorkflowResult<Item> {
        let profile = session.current_profile()?;
        let item = self.item_repo.find_by_id(item_id)?;
        if item.owner_id != profile.id {
            return Err(WorkflowError::Auth(
                "only the owner can modify an item".to_string(),
            ));
        }
        Ok(item)
    }
}
