use crate::models::borrow_request::{
    BorrowRequest, BorrowRequestWithItem, NeighborhoodCo2, NewBorrowRequest, UpdateBorrowRequest,
};
use crate::repositories::BorrowRequestRepository;
use crate::DbPool;

use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::*;

pub struct BorrowRequestRepositoryImpl {
    db_pool: DbPool,
}

impl BorrowRequestRepositoryImpl {
    pub fn new(db_pool: DbPool) -> Self {
        BorrowRequestRepositoryImpl { db_pool }
    }
}

impl BorrowRequestRepository for BorrowRequestRepositoryImpl {
    fn create(&self, request: &NewBorrowRequest) -> QueryResult<BorrowRequest> {
        use crate::schema::borrow_requests::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        diesel::insert_into(borrow_requests)
            .values(request)
            .get_result(&mut conn)
    }

    fn update(&self, request_id: i32, request: &UpdateBorrowRequest) -> QueryResult<BorrowRequest> {
        use crate::schema::borrow_requests::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        diesel::update(borrow_requests.find(request_id))
            .set(request)
            .get_result(&mut conn)
    }

    fn delete(&self, request_id: i32) -> QueryResult<bool> {
        use crate::schema::borrow_requests::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        let deleted_rows =
            diesel::delete(borrow_requests.find(request_id)).execute(&mut conn)?;
        Ok(deleted_rows > 0)
    }

    fn find_by_id(&self, request_id: i32) -> QueryResult<BorrowRequest> {
        use crate::schema::borrow_requests::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        borrow_requests.find(request_id).get_result(&mut conn)
    }

    fn find_all(&self) -> QueryResult<Vec<BorrowRequest>> {
        use crate::schema::borrow_requests::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        borrow_requests.load(&mut conn)
    }

    fn find_by_item(&self, item_id_val: i32) -> QueryResult<Vec<BorrowRequest>> {
        use crate::schema::borrow_requests::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        borrow_requests
            .filter(item_id.eq(item_id_val))
            .load(&mut conn)
    }

    fn find_by_participant(&self, profile_id: &str) -> QueryResult<Vec<BorrowRequest>> {
        use crate::schema::borrow_requests::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        borrow_requests
            .filter(borrower_id.eq(profile_id).or(lender_id.eq(profile_id)))
            .load(&mut conn)
    }

    fn find_by_borrower_and_status(
        &self,
        borrower_id_str: &str,
        status_str: &str,
    ) -> QueryResult<Vec<BorrowRequest>> {
        use crate::schema::borrow_requests::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        borrow_requests
            .filter(borrower_id.eq(borrower_id_str))
            .filter(status.eq(status_str))
            .load(&mut conn)
    }

    fn find_by_participant_with_item(
        &self,
        profile_id: &str,
    ) -> QueryResult<Vec<BorrowRequestWithItem>> {
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        sql_query(
            "SELECT br.id, br.item_id, br.borrower_id, br.lender_id, br.status,
                    i.title AS item_title, i.category AS item_category, i.co2_saved_per_borrow
             FROM borrow_requests br
             INNER JOIN items i ON br.item_id = i.id
             WHERE br.borrower_id = $1 OR br.lender_id = $1",
        )
        .bind::<Text, _>(profile_id)
        .load(&mut conn)
    }

    fn aggregate_returned_co2_by_neighborhood(&self) -> QueryResult<Vec<NeighborhoodCo2>> {
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        sql_query(
            "SELECT p.neighborhood, COALESCE(SUM(i.co2_saved_per_borrow), 0) AS co2_saved
             FROM borrow_requests br
             INNER JOIN items i ON br.item_id = i.id
             INNER JOIN profiles p ON br.borrower_id = p.id
             WHERE br.status = 'returned'
             GROUP BY p.neighborhood",
        )
        .load(&mut conn)
    }
}
