use crate::models::review::{NewReview, Review};
use crate::repositories::ReviewRepository;
use crate::DbPool;

use diesel::prelude::*;

pub struct ReviewRepositoryImpl {
    db_pool: DbPool,
}

impl ReviewRepositoryImpl {
    pub fn new(db_pool: DbPool) -> Self {
        ReviewRepositoryImpl { db_pool }
    }
}

impl ReviewRepository for ReviewRepositoryImpl {
    fn create(&self, review: &NewReview) -> QueryResult<Review> {
        use crate::schema::reviews::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        diesel::insert_into(reviews)
            .values(review)
            .get_result(&mut conn)
    }

    fn delete(&self, review_id: i32) -> QueryResult<bool> {
        use crate::schema::reviews::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        let deleted_rows = diesel::delete(reviews.find(review_id)).execute(&mut conn)?;
        Ok(deleted_rows > 0)
    }

    fn find_by_id(&self, review_id: i32) -> QueryResult<Review> {
        use crate::schema::reviews::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        reviews.find(review_id).get_result(&mut conn)
    }

    fn find_for_reviewee(&self, reviewee_id_str: &str) -> QueryResult<Vec<Review>> {
        use crate::schema::reviews::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        reviews
            .filter(reviewee_id.eq(reviewee_id_str))
            .order(created_at.desc())
            .load(&mut conn)
    }
}
