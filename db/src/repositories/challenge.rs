use crate::models::challenge::{Challenge, NewChallenge, UpdateChallenge};
use crate::repositories::ChallengeRepository;
use crate::DbPool;

use diesel::prelude::*;

pub struct ChallengeRepositoryImpl {
    db_pool: DbPool,
}

impl ChallengeRepositoryImpl {
    pub fn new(db_pool: DbPool) -> Self {
        ChallengeRepositoryImpl { db_pool }
    }
}

impl ChallengeRepository for ChallengeRepositoryImpl {
    fn create(&self, challenge: &NewChallenge) -> QueryResult<Challenge> {
        use crate::schema::challenges::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        diesel::insert_into(challenges)
            .values(challenge)
            .get_result(&mut conn)
    }

    fn update(&self, challenge_id: i32, challenge: &UpdateChallenge) -> QueryResult<Challenge> {
        use crate::schema::challenges::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        diesel::update(challenges.find(challenge_id))
            .set(challenge)
            .get_result(&mut conn)
    }

    fn delete(&self, challenge_id: i32) -> QueryResult<bool> {
        use crate::schema::challenges::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        let deleted_rows = diesel::delete(challenges.find(challenge_id)).execute(&mut conn)?;
        Ok(deleted_rows > 0)
    }

    fn find_by_id(&self, challenge_id: i32) -> QueryResult<Challenge> {
        use crate::schema::challenges::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        challenges.find(challenge_id).get_result(&mut conn)
    }

    fn find_all(&self) -> QueryResult<Vec<Challenge>> {
        use crate::schema::challenges::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        challenges.load(&mut conn)
    }

    fn find_active(&self) -> QueryResult<Vec<Challenge>> {
        use crate::schema::challenges::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        challenges.filter(is_active.eq(true)).load(&mut conn)
    }
}
