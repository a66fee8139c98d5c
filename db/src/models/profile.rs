use crate::schema::profiles;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sql_types::*;

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Profile {
    pub id: String,
    pub full_name: String,
    pub email: Option<String>,
    pub neighborhood: String,
    pub eco_points: i32,
    pub rating: Option<f32>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = profiles)]
pub struct NewProfile {
    pub id: String,
    pub full_name: String,
    pub email: Option<String>,
    pub neighborhood: String,
    pub eco_points: i32,
    pub rating: Option<f32>,
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = profiles)]
pub struct UpdateProfile {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub neighborhood: Option<String>,
    pub eco_points: Option<i32>,
    pub rating: Option<f32>,
}

/// Per-neighborhood membership and point totals, aggregated over profiles.
#[derive(QueryableByName, Debug, Clone)]
pub struct NeighborhoodPoints {
    #[diesel(sql_type = Text)]
    pub neighborhood: String,
    #[diesel(sql_type = BigInt)]
    pub members: i64,
    #[diesel(sql_type = BigInt)]
    pub total_points: i64,
}
