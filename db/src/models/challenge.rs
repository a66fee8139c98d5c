use crate::schema::challenges;
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = challenges)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Challenge {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub challenge_type: String,
    pub target_count: i32,
    pub points_reward: i32,
    pub co2_impact: Option<BigDecimal>,
    pub badge_name: Option<String>,
    pub is_active: bool,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = challenges)]
pub struct NewChallenge {
    pub title: String,
    pub description: Option<String>,
    pub challenge_type: String,
    pub target_count: i32,
    pub points_reward: i32,
    pub co2_impact: Option<BigDecimal>,
    pub badge_name: Option<String>,
    pub is_active: bool,
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = challenges)]
pub struct UpdateChallenge {
    pub title: Option<String>,
    pub description: Option<String>,
    pub target_count: Option<i32>,
    pub points_reward: Option<i32>,
    pub is_active: Option<bool>,
}
