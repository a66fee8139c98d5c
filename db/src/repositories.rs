pub mod borrow_request;
pub mod challenge;
pub mod item;
pub mod profile;
pub mod review;
pub mod user_challenge;

use crate::models::{
    borrow_request::{
        BorrowRequest, BorrowRequestWithItem, NeighborhoodCo2, NewBorrowRequest,
        UpdateBorrowRequest,
    },
    challenge::{Challenge, NewChallenge, UpdateChallenge},
    item::{Item, ItemWithOwner, NewItem, UpdateItem},
    profile::{NeighborhoodPoints, NewProfile, Profile, UpdateProfile},
    review::{NewReview, Review},
    user_challenge::{
        NewUserChallenge, UpdateUserChallenge, UserChallenge, UserChallengeWithChallenge,
    },
};

use diesel::prelude::*;

pub trait ProfileRepository {
    fn create(&self, profile: &NewProfile) -> QueryResult<Profile>;
    fn update(&self, id: &str, profile: &UpdateProfile) -> QueryResult<Profile>;
    fn delete(&self, id: &str) -> QueryResult<bool>;
    fn find_by_id(&self, id: &str) -> QueryResult<Profile>;
    fn find_all(&self) -> QueryResult<Vec<Profile>>;
    fn find_top_by_points(&self, limit: i64) -> QueryResult<Vec<Profile>>;
    fn find_by_neighborhood(&self, neighborhood: &str) -> QueryResult<Vec<Profile>>;
    fn aggregate_points_by_neighborhood(&self) -> QueryResult<Vec<NeighborhoodPoints>>;
}

pub trait ItemRepository {
    fn create(&self, item: &NewItem) -> QueryResult<Item>;
    fn update(&self, id: i32, item: &UpdateItem) -> QueryResult<Item>;
    fn delete(&self, id: i32) -> QueryResult<bool>;
    fn find_by_id(&self, id: i32) -> QueryResult<Item>;
    fn find_all(&self) -> QueryResult<Vec<Item>>;
    fn find_by_owner(&self, owner_id: &str) -> QueryResult<Vec<Item>>;
    fn find_by_status(&self, status: &str) -> QueryResult<Vec<Item>>;
    fn find_by_status_and_category(&self, status: &str, category: &str)
        -> QueryResult<Vec<Item>>;
    fn find_by_status_with_owner(&self, status: &str) -> QueryResult<Vec<ItemWithOwner>>;
}

pub trait BorrowRequestRepository {
    fn create(&self, request: &NewBorrowRequest) -> QueryResult<BorrowRequest>;
    fn update(&self, id: i32, request: &UpdateBorrowRequest) -> QueryResult<BorrowRequest>;
    fn delete(&self, id: i32) -> QueryResult<bool>;
    fn find_by_id(&self, id: i32) -> QueryResult<BorrowRequest>;
    fn find_all(&self) -> QueryResult<Vec<BorrowRequest>>;
    fn find_by_item(&self, item_id: i32) -> QueryResult<Vec<BorrowRequest>>;

    /// Requests where the given profile is either the borrower or the lender.
    fn find_by_participant(&self, profile_id: &str) -> QueryResult<Vec<BorrowRequest>>;

    fn find_by_borrower_and_status(
        &self,
        borrower_id: &str,
        status: &str,
    ) -> QueryResult<Vec<BorrowRequest>>;

    fn find_by_participant_with_item(
        &self,
        profile_id: &str,
    ) -> QueryResult<Vec<BorrowRequestWithItem>>;

    fn aggregate_returned_co2_by_neighborhood(&self) -> QueryResult<Vec<NeighborhoodCo2>>;
}

pub trait ChallengeRepository {
    fn create(&self, challenge: &NewChallenge) -> QueryResult<Challenge>;
    fn update(&self, id: i32, challenge: &UpdateChallenge) -> QueryResult<Challenge>;
    fn delete(&self, id: i32) -> QueryResult<bool>;
    fn find_by_id(&self, id: i32) -> QueryResult<Challenge>;
    fn find_all(&self) -> QueryResult<Vec<Challenge>>;
    fn find_active(&self) -> QueryResult<Vec<Challenge>>;
}

pub trait UserChallengeRepository {
    fn create(&self, user_challenge: &NewUserChallenge) -> QueryResult<UserChallenge>;
    fn update(&self, id: i32, user_challenge: &UpdateUserChallenge)
        -> QueryResult<UserChallenge>;
    fn delete(&self, id: i32) -> QueryResult<bool>;
    fn find_by_id(&self, id: i32) -> QueryResult<UserChallenge>;
    fn find_by_user(&self, user_id: &str) -> QueryResult<Vec<UserChallenge>>;

    fn find_by_user_and_challenge(
        &self,
        user_id: &str,
        challenge_id: i32,
    ) -> QueryResult<UserChallenge>;

    fn find_by_user_with_challenge(
        &self,
        user_id: &str,
    ) -> QueryResult<Vec<UserChallengeWithChallenge>>;

    fn find_by_user_and_challenge_with_challenge(
        &self,
        user_id: &str,
        challenge_id: i32,
    ) -> QueryResult<UserChallengeWithChallenge>;

    /// Marks the membership completed and credits the reward to the profile
    /// inside a single transaction, so the two writes land together or not
    /// at all.
    fn complete_and_reward(
        &self,
        user_challenge_id: i32,
        user_id: &str,
        points: i32,
    ) -> QueryResult<()>;
}

pub trait ReviewRepository {
    fn create(&self, review: &NewReview) -> QueryResult<Review>;
    fn delete(&self, id: i32) -> QueryResult<bool>;
    fn find_by_id(&self, id: i32) -> QueryResult<Review>;
    fn find_for_reviewee(&self, reviewee_id: &str) -> QueryResult<Vec<Review>>;
}
