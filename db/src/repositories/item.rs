use crate::models::item::{Item, ItemWithOwner, NewItem, UpdateItem};
use crate::repositories::ItemRepository;
use crate::DbPool;

use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::*;

pub struct ItemRepositoryImpl {
    db_pool: DbPool,
}

impl ItemRepositoryImpl {
    pub fn new(db_pool: DbPool) -> Self {
        ItemRepositoryImpl { db_pool }
    }
}

impl ItemRepository for ItemRepositoryImpl {
    fn create(&self, item: &NewItem) -> QueryResult<Item> {
        use crate::schema::items::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        diesel::insert_into(items).values(item).get_result(&mut conn)
    }

    fn update(&self, item_id: i32, item: &UpdateItem) -> QueryResult<Item> {
        use crate::schema::items::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        diesel::update(items.find(item_id))
            .set(item)
            .get_result(&mut conn)
    }

    fn delete(&self, item_id: i32) -> QueryResult<bool> {
        use crate::schema::items::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        let deleted_rows = diesel::delete(items.find(item_id)).execute(&mut conn)?;
        Ok(deleted_rows > 0)
    }

    fn find_by_id(&self, item_id: i32) -> QueryResult<Item> {
        use crate::schema::items::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        items.find(item_id).get_result(&mut conn)
    }

    fn find_all(&self) -> QueryResult<Vec<Item>> {
        use crate::schema::items::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        items.load(&mut conn)
    }

    fn find_by_owner(&self, owner_id_str: &str) -> QueryResult<Vec<Item>> {
        use crate::schema::items::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        items.filter(owner_id.eq(owner_id_str)).load(&mut conn)
    }

    fn find_by_status(&self, status_str: &str) -> QueryResult<Vec<Item>> {
        use crate::schema::items::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        items.filter(status.eq(status_str)).load(&mut conn)
    }

    fn find_by_status_and_category(
        &self,
        status_str: &str,
        category_str: &str,
    ) -> QueryResult<Vec<Item>> {
        use crate::schema::items::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        items
            .filter(status.eq(status_str))
            .filter(category.eq(category_str))
            .load(&mut conn)
    }

    fn find_by_status_with_owner(&self, status_str: &str) -> QueryResult<Vec<ItemWithOwner>> {
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        sql_query(
            "SELECT i.id, i.owner_id, i.title, i.description, i.category, i.condition,
                    i.co2_saved_per_borrow, i.status,
                    p.full_name AS owner_name, p.neighborhood AS owner_neighborhood,
                    p.rating AS owner_rating
             FROM items i
             INNER JOIN profiles p ON i.owner_id = p.id
             WHERE i.status = $1",
        )
        .bind::<Text, _>(status_str)
        .load(&mut conn)
    }
}
