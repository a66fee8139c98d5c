use crate::schema::items;
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sql_types::*;

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Item {
    pub id: i32,
    pub owner_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub condition: String,
    pub co2_saved_per_borrow: BigDecimal,
    pub status: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = items)]
pub struct NewItem {
    pub owner_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub condition: String,
    pub co2_saved_per_borrow: BigDecimal,
    pub status: String,
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = items)]
pub struct UpdateItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub condition: Option<String>,
    pub co2_saved_per_borrow: Option<BigDecimal>,
    pub status: Option<String>,
}

/// Listing row joined with the owner's public profile fields.
#[derive(QueryableByName, Debug, Clone)]
pub struct ItemWithOwner {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Text)]
    pub owner_id: String,
    #[diesel(sql_type = Text)]
    pub title: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub description: Option<String>,
    #[diesel(sql_type = Text)]
    pub category: String,
    #[diesel(sql_type = Text)]
    pub condition: String,
    #[diesel(sql_type = Numeric)]
    pub co2_saved_per_borrow: BigDecimal,
    #[diesel(sql_type = Text)]
    pub status: String,
    #[diesel(sql_type = Text)]
    pub owner_name: String,
    #[diesel(sql_type = Text)]
    pub owner_neighborhood: String,
    #[diesel(sql_type = Nullable<Float>)]
    pub owner_rating: Option<f32>,
}
