use crate::models::user_challenge::{
    NewUserChallenge, UpdateUserChallenge, UserChallenge, UserChallengeWithChallenge,
};
use crate::repositories::UserChallengeRepository;
use crate::DbPool;

use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::*;

pub struct UserChallengeRepositoryImpl {
    db_pool: DbPool,
}

impl UserChallengeRepositoryImpl {
    pub fn new(db_pool: DbPool) -> Self {
        UserChallengeRepositoryImpl { db_pool }
    }
}

impl UserChallengeRepository for UserChallengeRepositoryImpl {
    fn create(&self, user_challenge: &NewUserChallenge) -> QueryResult<UserChallenge> {
        use crate::schema::user_challenges::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        diesel::insert_into(user_challenges)
            .values(user_challenge)
            .get_result(&mut conn)
    }

    fn update(
        &self,
        user_challenge_id: i32,
        user_challenge: &UpdateUserChallenge,
    ) -> QueryResult<UserChallenge> {
        use crate::schema::user_challenges::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        diesel::update(user_challenges.find(user_challenge_id))
            .set(user_challenge)
            .get_result(&mut conn)
    }

    fn delete(&self, user_challenge_id: i32) -> QueryResult<bool> {
        use crate::schema::user_challenges::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        let deleted_rows =
            diesel::delete(user_challenges.find(user_challenge_id)).execute(&mut conn)?;
        Ok(deleted_rows > 0)
    }

    fn find_by_id(&self, user_challenge_id: i32) -> QueryResult<UserChallenge> {
        use crate::schema::user_challenges::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        user_challenges.find(user_challenge_id).get_result(&mut conn)
    }

    fn find_by_user(&self, user_id_str: &str) -> QueryResult<Vec<UserChallenge>> {
        use crate::schema::user_challenges::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        user_challenges.filter(user_id.eq(user_id_str)).load(&mut conn)
    }

    fn find_by_user_and_challenge(
        &self,
        user_id_str: &str,
        challenge_id_val: i32,
    ) -> QueryResult<UserChallenge> {
        use crate::schema::user_challenges::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        user_challenges
            .filter(user_id.eq(user_id_str))
            .filter(challenge_id.eq(challenge_id_val))
            .first(&mut conn)
    }

    fn find_by_user_with_challenge(
        &self,
        user_id_str: &str,
    ) -> QueryResult<Vec<UserChallengeWithChallenge>> {
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        sql_query(
            "SELECT uc.id, uc.user_id, uc.challenge_id, uc.progress, uc.completed_at,
                    c.title, c.challenge_type, c.target_count, c.points_reward, c.badge_name
             FROM user_challenges uc
             INNER JOIN challenges c ON uc.challenge_id = c.id
             WHERE uc.user_id = $1",
        )
        .bind::<Text, _>(user_id_str)
        .load(&mut conn)
    }

    fn find_by_user_and_challenge_with_challenge(
        &self,
        user_id_str: &str,
        challenge_id_val: i32,
    ) -> QueryResult<UserChallengeWithChallenge> {
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        sql_query(
            "SELECT uc.id, uc.user_id, uc.challenge_id, uc.progress, uc.completed_at,
                    c.title, c.challenge_type, c.target_count, c.points_reward, c.badge_name
             FROM user_challenges uc
             INNER JOIN challenges c ON uc.challenge_id = c.id
             WHERE uc.user_id = $1 AND uc.challenge_id = $2",
        )
        .bind::<Text, _>(user_id_str)
        .bind::<Integer, _>(challenge_id_val)
        .get_result(&mut conn)
    }

    fn complete_and_reward(
        &self,
        user_challenge_id: i32,
        user_id_str: &str,
        points: i32,
    ) -> QueryResult<()> {
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        conn.transaction(|conn| {
            let completed_rows = {
                use crate::schema::user_challenges::dsl::*;
                diesel::update(
                    user_challenges
                        .find(user_challenge_id)
                        .filter(completed_at.is_null()),
                )
                .set(completed_at.eq(diesel::dsl::now))
                .execute(conn)?
            };

            // Already completed by an earlier call; awarding again would
            // double-count the points.
            if completed_rows == 0 {
                return Ok(());
            }

            {
                use crate::schema::profiles::dsl::*;
                diesel::update(profiles.find(user_id_str))
                    .set(eco_points.eq(eco_points + points))
                    .execute(conn)?;
            }
            Ok(())
        })
    }
}
