use crate::schema::borrow_requests;
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use diesel::sql_types::*;

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = borrow_requests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BorrowRequest {
    pub id: i32,
    pub item_id: i32,
    pub borrower_id: String,
    pub lender_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub message: Option<String>,
    pub status: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = borrow_requests)]
pub struct NewBorrowRequest {
    pub item_id: i32,
    pub borrower_id: String,
    pub lender_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub message: Option<String>,
    pub status: String,
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = borrow_requests)]
pub struct UpdateBorrowRequest {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub message: Option<String>,
    pub status: Option<String>,
}

/// Request row joined with the borrowed item's listing fields.
#[derive(QueryableByName, Debug, Clone)]
pub struct BorrowRequestWithItem {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Integer)]
    pub item_id: i32,
    #[diesel(sql_type = Text)]
    pub borrower_id: String,
    #[diesel(sql_type = Text)]
    pub lender_id: String,
    #[diesel(sql_type = Text)]
    pub status: String,
    #[diesel(sql_type = Text)]
    pub item_title: String,
    #[diesel(sql_type = Text)]
    pub item_category: String,
    #[diesel(sql_type = Numeric)]
    pub co2_saved_per_borrow: BigDecimal,
}

/// CO2 saved per neighborhood, summed over returned requests grouped by the
/// borrower's neighborhood.
#[derive(QueryableByName, Debug, Clone)]
pub struct NeighborhoodCo2 {
    #[diesel(sql_type = Text)]
    pub neighborhood: String,
    #[diesel(sql_type = Numeric)]
    pub co2_saved: BigDecimal,
}
