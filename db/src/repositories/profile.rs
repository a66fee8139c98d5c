use crate::models::profile::{NeighborhoodPoints, NewProfile, Profile, UpdateProfile};
use crate::repositories::ProfileRepository;
use crate::DbPool;

use diesel::prelude::*;
use diesel::sql_query;

pub struct ProfileRepositoryImpl {
    db_pool: DbPool,
}

impl ProfileRepositoryImpl {
    pub fn new(db_pool: DbPool) -> Self {
        ProfileRepositoryImpl { db_pool }
    }
}

impl ProfileRepository for ProfileRepositoryImpl {
    fn create(&self, profile: &NewProfile) -> QueryResult<Profile> {
        use crate::schema::profiles::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        diesel::insert_into(profiles)
            .values(profile)
            .get_result(&mut conn)
    }

    fn update(&self, profile_id: &str, profile: &UpdateProfile) -> QueryResult<Profile> {
        use crate::schema::profiles::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        diesel::update(profiles.find(profile_id))
            .set(profile)
            .get_result(&mut conn)
    }

    fn delete(&self, profile_id: &str) -> QueryResult<bool> {
        use crate::schema::profiles::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        let deleted_rows = diesel::delete(profiles.find(profile_id)).execute(&mut conn)?;
        Ok(deleted_rows > 0)
    }

    fn find_by_id(&self, profile_id: &str) -> QueryResult<Profile> {
        use crate::schema::profiles::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        profiles.find(profile_id).get_result(&mut conn)
    }

    fn find_all(&self) -> QueryResult<Vec<Profile>> {
        use crate::schema::profiles::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        profiles.load(&mut conn)
    }

    fn find_top_by_points(&self, limit: i64) -> QueryResult<Vec<Profile>> {
        use crate::schema::profiles::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        profiles
            .order(eco_points.desc())
            .limit(limit)
            .load(&mut conn)
    }

    fn find_by_neighborhood(&self, neighborhood_str: &str) -> QueryResult<Vec<Profile>> {
        use crate::schema::profiles::dsl::*;
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        profiles
            .filter(neighborhood.eq(neighborhood_str))
            .load(&mut conn)
    }

    fn aggregate_points_by_neighborhood(&self) -> QueryResult<Vec<NeighborhoodPoints>> {
        let mut conn = self.db_pool.get().map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        sql_query(
            "SELECT p.neighborhood, COUNT(*) AS members, COALESCE(SUM(p.eco_points), 0)::BIGINT AS total_points
             FROM profiles p
             GROUP BY p.neighborhood",
        )
        .load(&mut conn)
    }
}
