use crate::schema::user_challenges;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sql_types::*;

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = user_challenges)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserChallenge {
    pub id: i32,
    pub user_id: String,
    pub challenge_id: i32,
    pub progress: i32,
    pub completed_at: Option<NaiveDateTime>,
    pub joined_at: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = user_challenges)]
pub struct NewUserChallenge {
    pub user_id: String,
    pub challenge_id: i32,
    pub progress: i32,
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = user_challenges)]
pub struct UpdateUserChallenge {
    pub progress: Option<i32>,
    pub completed_at: Option<NaiveDateTime>,
}

/// The compound read joining a user's challenge membership with the challenge
/// definition it tracks.
#[derive(QueryableByName, Debug, Clone)]
pub struct UserChallengeWithChallenge {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Text)]
    pub user_id: String,
    #[diesel(sql_type = Integer)]
    pub challenge_id: i32,
    #[diesel(sql_type = Integer)]
    pub progress: i32,
    #[diesel(sql_type = Nullable<Timestamp>)]
    pub completed_at: Option<NaiveDateTime>,
    #[diesel(sql_type = Text)]
    pub title: String,
    #[diesel(sql_type = Text)]
    pub challenge_type: String,
    #[diesel(sql_type = Integer)]
    pub target_count: i32,
    #[diesel(sql_type = Integer)]
    pub points_reward: i32,
    #[diesel(sql_type = Nullable<Text>)]
    pub badge_name: Option<String>,
}
