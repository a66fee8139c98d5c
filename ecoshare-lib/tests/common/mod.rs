#![allow(dead_code)]

use chrono::Utc;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use bigdecimal::BigDecimal;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::QueryResult;

use db::models::borrow_request::{
    BorrowRequest, BorrowRequestWithItem, NeighborhoodCo2, NewBorrowRequest, UpdateBorrowRequest,
};
use db::models::challenge::{Challenge, NewChallenge, UpdateChallenge};
use db::models::item::{Item, ItemWithOwner, NewItem, UpdateItem};
use db::models::profile::{NeighborhoodPoints, NewProfile, Profile, UpdateProfile};
use db::models::review::{NewReview, Review};
use db::models::user_challenge::{
    NewUserChallenge, UpdateUserChallenge, UserChallenge, UserChallengeWithChallenge,
};
use db::repositories::{
    BorrowRequestRepository, ChallengeRepository, ItemRepository, ProfileRepository,
    ReviewRepository, UserChallengeRepository,
};

use ecoshare_lib::config::{CommunityConfig, Config, DatabaseConfig};
use ecoshare_lib::session::SessionContext;

/// In-memory stand-in for the persistence layer, shared by all mock
/// repositories of one test.
#[derive(Default)]
pub struct State {
    pub profiles: HashMap<String, Profile>,
    pub items: BTreeMap<i32, Item>,
    pub requests: BTreeMap<i32, BorrowRequest>,
    pub challenges: BTreeMap<i32, Challenge>,
    pub user_challenges: BTreeMap<i32, UserChallenge>,
    pub reviews: BTreeMap<i32, Review>,
    pub next_id: i32,
}

impl State {
    pub fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

pub type SharedState = Arc<Mutex<State>>;

pub fn new_state() -> SharedState {
    Arc::new(Mutex::new(State::default()))
}

pub fn test_config() -> Arc<Config> {
    Arc::new(Config {
        log_level: "info".to_string(),
        database: DatabaseConfig {
            database_url: "postgres://unused".to_string(),
            db_connection_pool_max_size: 1,
            db_connection_pool_idle_size: 1,
        },
        community: CommunityConfig {
            leaderboard_limit: 10,
        },
    })
}

pub fn seed_profile(state: &SharedState, id: &str, name: &str, neighborhood: &str, points: i32) {
    let mut s = state.lock().unwrap();
    s.profiles.insert(
        id.to_string(),
        Profile {
            id: id.to_string(),
            full_name: name.to_string(),
            email: Some(format!("{id}@example.com")),
            neighborhood: neighborhood.to_string(),
            eco_points: points,
            rating: None,
            created_at: None,
        },
    );
}

pub fn seed_item(state: &SharedState, owner_id: &str, title: &str, category: &str) -> i32 {
    let mut s = state.lock().unwrap();
    let id = s.next_id();
    s.items.insert(
        id,
        Item {
            id,
            owner_id: owner_id.to_string(),
            title: title.to_string(),
            description: None,
            category: category.to_string(),
            condition: "Good".to_string(),
            co2_saved_per_borrow: BigDecimal::from_str("8.0").unwrap(),
            status: "available".to_string(),
            created_at: None,
            updated_at: None,
        },
    );
    id
}

pub fn seed_challenge(
    state: &SharedState,
    challenge_type: &str,
    target_count: i32,
    points_reward: i32,
    badge_name: Option<&str>,
) -> i32 {
    let mut s = state.lock().unwrap();
    let id = s.next_id();
    s.challenges.insert(
        id,
        Challenge {
            id,
            title: format!("challenge-{id}"),
            description: None,
            challenge_type: challenge_type.to_string(),
            target_count,
            points_reward,
            co2_impact: None,
            badge_name: badge_name.map(str::to_string),
            is_active: true,
            created_at: None,
        },
    );
    id
}

/// Builds a signed-in session backed by the shared state.
pub fn signed_in_session(state: &SharedState, profile_id: &str) -> SessionContext {
    let mut session = SessionContext::new(
        test_config(),
        Arc::new(MockProfileRepo(state.clone())),
        Arc::new(MockItemRepo(state.clone())),
        Arc::new(MockChallengeRepo(state.clone())),
    );
    session
        .sign_in(profile_id)
        .expect("seeded profile should sign in");
    session
}

pub fn anonymous_session(state: &SharedState) -> SessionContext {
    SessionContext::new(
        test_config(),
        Arc::new(MockProfileRepo(state.clone())),
        Arc::new(MockItemRepo(state.clone())),
        Arc::new(MockChallengeRepo(state.clone())),
    )
}

fn unique_violation(constraint: &str) -> DieselError {
    DieselError::DatabaseError(
        DatabaseErrorKind::UniqueViolation,
        Box::new(format!(
            "duplicate key value violates unique constraint \"{constraint}\""
        )),
    )
}

pub struct MockProfileRepo(pub SharedState);

impl ProfileRepository for MockProfileRepo {
    fn create(&self, profile: &NewProfile) -> QueryResult<Profile> {
        let mut s = self.0.lock().unwrap();
        let created = Profile {
            id: profile.id.clone(),
            full_name: profile.full_name.clone(),
            email: profile.email.clone(),
            neighborhood: profile.neighborhood.clone(),
            eco_points: profile.eco_points,
            rating: profile.rating,
            created_at: None,
        };
        s.profiles.insert(created.id.clone(), created.clone());
        Ok(created)
    }

    fn update(&self, id: &str, update: &UpdateProfile) -> QueryResult<Profile> {
        let mut s = self.0.lock().unwrap();
        let profile = s.profiles.get_mut(id).ok_or(DieselError::NotFound)?;
        if let Some(v) = &update.full_name {
            profile.full_name = v.clone();
        }
        if let Some(v) = &update.email {
            profile.email = Some(v.clone());
        }
        if let Some(v) = &update.neighborhood {
            profile.neighborhood = v.clone();
        }
        if let Some(v) = update.eco_points {
            profile.eco_points = v;
        }
        if let Some(v) = update.rating {
            profile.rating = Some(v);
        }
        Ok(profile.clone())
    }

    fn delete(&self, id: &str) -> QueryResult<bool> {
        Ok(self.0.lock().unwrap().profiles.remove(id).is_some())
    }

    fn find_by_id(&self, id: &str) -> QueryResult<Profile> {
        self.0
            .lock()
            .unwrap()
            .profiles
            .get(id)
            .cloned()
            .ok_or(DieselError::NotFound)
    }

    fn find_all(&self) -> QueryResult<Vec<Profile>> {
        Ok(self.0.lock().unwrap().profiles.values().cloned().collect())
    }

    fn find_top_by_points(&self, limit: i64) -> QueryResult<Vec<Profile>> {
        let mut all: Vec<Profile> = self.0.lock().unwrap().profiles.values().cloned().collect();
        all.sort_by(|a, b| b.eco_points.cmp(&a.eco_points));
        all.truncate(limit as usize);
        Ok(all)
    }

    fn find_by_neighborhood(&self, neighborhood: &str) -> QueryResult<Vec<Profile>> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .profiles
            .values()
            .filter(|p| p.neighborhood == neighborhood)
            .cloned()
            .collect())
    }

    fn aggregate_points_by_neighborhood(&self) -> QueryResult<Vec<NeighborhoodPoints>> {
        let s = self.0.lock().unwrap();
        let mut grouped: BTreeMap<String, (i64, i64)> = BTreeMap::new();
        for profile in s.profiles.values() {
            let entry = grouped.entry(profile.neighborhood.clone()).or_default();
            entry.0 += 1;
            entry.1 += i64::from(profile.eco_points);
        }
        Ok(grouped
            .into_iter()
            .map(|(neighborhood, (members, total_points))| NeighborhoodPoints {
                neighborhood,
                members,
                total_points,
            })
            .collect())
    }
}

pub struct MockItemRepo(pub SharedState);

impl ItemRepository for MockItemRepo {
    fn create(&self, item: &NewItem) -> QueryResult<Item> {
        let mut s = self.0.lock().unwrap();
        let id = s.next_id();
        let created = Item {
            id,
            owner_id: item.owner_id.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            category: item.category.clone(),
            condition: item.condition.clone(),
            co2_saved_per_borrow: item.co2_saved_per_borrow.clone(),
            status: item.status.clone(),
            created_at: None,
            updated_at: None,
        };
        s.items.insert(id, created.clone());
        Ok(created)
    }

    fn update(&self, id: i32, update: &UpdateItem) -> QueryResult<Item> {
        let mut s = self.0.lock().unwrap();
        let item = s.items.get_mut(&id).ok_or(DieselError::NotFound)?;
        if let Some(v) = &update.title {
            item.title = v.clone();
        }
        if let Some(v) = &update.description {
            item.description = Some(v.clone());
        }
        if let Some(v) = &update.category {
            item.category = v.clone();
        }
        if let Some(v) = &update.condition {
            item.condition = v.clone();
        }
        if let Some(v) = &update.co2_saved_per_borrow {
            item.co2_saved_per_borrow = v.clone();
        }
        if let Some(v) = &update.status {
            item.status = v.clone();
        }
        Ok(item.clone())
    }

    fn delete(&self, id: i32) -> QueryResult<bool> {
        Ok(self.0.lock().unwrap().items.remove(&id).is_some())
    }

    fn find_by_id(&self, id: i32) -> QueryResult<Item> {
        self.0
            .lock()
            .unwrap()
            .items
            .get(&id)
            .cloned()
            .ok_or(DieselError::NotFound)
    }

    fn find_all(&self) -> QueryResult<Vec<Item>> {
        Ok(self.0.lock().unwrap().items.values().cloned().collect())
    }

    fn find_by_owner(&self, owner_id: &str) -> QueryResult<Vec<Item>> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .items
            .values()
            .filter(|i| i.owner_id == owner_id)
            .cloned()
            .collect())
    }

    fn find_by_status(&self, status: &str) -> QueryResult<Vec<Item>> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .items
            .values()
            .filter(|i| i.status == status)
            .cloned()
            .collect())
    }

    fn find_by_status_and_category(
        &self,
        status: &str,
        category: &str,
    ) -> QueryResult<Vec<Item>> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .items
            .values()
            .filter(|i| i.status == status && i.category == category)
            .cloned()
            .collect())
    }

    fn find_by_status_with_owner(&self, status: &str) -> QueryResult<Vec<ItemWithOwner>> {
        let s = self.0.lock().unwrap();
        Ok(s.items
            .values()
            .filter(|i| i.status == status)
            .filter_map(|i| {
                let owner = s.profiles.get(&i.owner_id)?;
                Some(ItemWithOwner {
                    id: i.id,
                    owner_id: i.owner_id.clone(),
                    title: i.title.clone(),
                    description: i.description.clone(),
                    category: i.category.clone(),
                    condition: i.condition.clone(),
                    co2_saved_per_borrow: i.co2_saved_per_borrow.clone(),
                    status: i.status.clone(),
                    owner_name: owner.full_name.clone(),
                    owner_neighborhood: owner.neighborhood.clone(),
                    owner_rating: owner.rating,
                })
            })
            .collect())
    }
}

pub struct MockBorrowRequestRepo(pub SharedState);

impl BorrowRequestRepository for MockBorrowRequestRepo {
    fn create(&self, request: &NewBorrowRequest) -> QueryResult<BorrowRequest> {
        let mut s = self.0.lock().unwrap();
        let id = s.next_id();
        let created = BorrowRequest {
            id,
            item_id: request.item_id,
            borrower_id: request.borrower_id.clone(),
            lender_id: request.lender_id.clone(),
            start_date: request.start_date,
            end_date: request.end_date,
            message: request.message.clone(),
            status: request.status.clone(),
            created_at: None,
            updated_at: None,
        };
        s.requests.insert(id, created.clone());
        Ok(created)
    }

    fn update(&self, id: i32, update: &UpdateBorrowRequest) -> QueryResult<BorrowRequest> {
        let mut s = self.0.lock().unwrap();
        let request = s.requests.get_mut(&id).ok_or(DieselError::NotFound)?;
        if let Some(v) = update.start_date {
            request.start_date = v;
        }
        if let Some(v) = update.end_date {
            request.end_date = v;
        }
        if let Some(v) = &update.message {
            request.message = Some(v.clone());
        }
        if let Some(v) = &update.status {
            request.status = v.clone();
        }
        Ok(request.clone())
    }

    fn delete(&self, id: i32) -> QueryResult<bool> {
        Ok(self.0.lock().unwrap().requests.remove(&id).is_some())
    }

    fn find_by_id(&self, id: i32) -> QueryResult<BorrowRequest> {
        self.0
            .lock()
            .unwrap()
            .requests
            .get(&id)
            .cloned()
            .ok_or(DieselError::NotFound)
    }

    fn find_all(&self) -> QueryResult<Vec<BorrowRequest>> {
        Ok(self.0.lock().unwrap().requests.values().cloned().collect())
    }

    fn find_by_item(&self, item_id: i32) -> QueryResult<Vec<BorrowRequest>> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .requests
            .values()
            .filter(|r| r.item_id == item_id)
            .cloned()
            .collect())
    }

    fn find_by_participant(&self, profile_id: &str) -> QueryResult<Vec<BorrowRequest>> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .requests
            .values()
            .filter(|r| r.borrower_id == profile_id || r.lender_id == profile_id)
            .cloned()
            .collect())
    }

    fn find_by_borrower_and_status(
        &self,
        borrower_id: &str,
        status: &str,
    ) -> QueryResult<Vec<BorrowRequest>> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .requests
            .values()
            .filter(|r| r.borrower_id == borrower_id && r.status == status)
            .cloned()
            .collect())
    }

    fn find_by_participant_with_item(
        &self,
        profile_id: &str,
    ) -> QueryResult<Vec<BorrowRequestWithItem>> {
        let s = self.0.lock().unwrap();
        Ok(s.requests
            .values()
            .filter(|r| r.borrower_id == profile_id || r.lender_id == profile_id)
            .filter_map(|r| {
                let item = s.items.get(&r.item_id)?;
                Some(BorrowRequestWithItem {
                    id: r.id,
                    item_id: r.item_id,
                    borrower_id: r.borrower_id.clone(),
                    lender_id: r.lender_id.clone(),
                    status: r.status.clone(),
                    item_title: item.title.clone(),
                    item_category: item.category.clone(),
                    co2_saved_per_borrow: item.co2_saved_per_borrow.clone(),
                })
            })
            .collect())
    }

    fn aggregate_returned_co2_by_neighborhood(&self) -> QueryResult<Vec<NeighborhoodCo2>> {
        let s = self.0.lock().unwrap();
        let mut grouped: BTreeMap<String, BigDecimal> = BTreeMap::new();
        for request in s.requests.values().filter(|r| r.status == "returned") {
            let Some(item) = s.items.get(&request.item_id) else {
                continue;
            };
            let Some(borrower) = s.profiles.get(&request.borrower_id) else {
                continue;
            };
            let entry = grouped
                .entry(borrower.neighborhood.clone())
                .or_insert_with(|| BigDecimal::from(0));
            *entry += item.co2_saved_per_borrow.clone();
        }
        Ok(grouped
            .into_iter()
            .map(|(neighborhood, co2_saved)| NeighborhoodCo2 {
                neighborhood,
                co2_saved,
            })
            .collect())
    }
}

pub struct MockChallengeRepo(pub SharedState);

impl ChallengeRepository for MockChallengeRepo {
    fn create(&self, challenge: &NewChallenge) -> QueryResult<Challenge> {
        let mut s = self.0.lock().unwrap();
        let id = s.next_id();
        let created = Challenge {
            id,
            title: challenge.title.clone(),
            description: challenge.description.clone(),
            challenge_type: challenge.challenge_type.clone(),
            target_count: challenge.target_count,
            points_reward: challenge.points_reward,
            co2_impact: challenge.co2_impact.clone(),
            badge_name: challenge.badge_name.clone(),
            is_active: challenge.is_active,
            created_at: None,
        };
        s.challenges.insert(id, created.clone());
        Ok(created)
    }

    fn update(&self, id: i32, update: &UpdateChallenge) -> QueryResult<Challenge> {
        let mut s = self.0.lock().unwrap();
        let challenge = s.challenges.get_mut(&id).ok_or(DieselError::NotFound)?;
        if let Some(v) = &update.title {
            challenge.title = v.clone();
        }
        if let Some(v) = &update.description {
            challenge.description = Some(v.clone());
        }
        if let Some(v) = update.target_count {
            challenge.target_count = v;
        }
        if let Some(v) = update.points_reward {
            challenge.points_reward = v;
        }
        if let Some(v) = update.is_active {
            challenge.is_active = v;
        }
        Ok(challenge.clone())
    }

    fn delete(&self, id: i32) -> QueryResult<bool> {
        Ok(self.0.lock().unwrap().challenges.remove(&id).is_some())
    }

    fn find_by_id(&self, id: i32) -> QueryResult<Challenge> {
        self.0
            .lock()
            .unwrap()
            .challenges
            .get(&id)
            .cloned()
            .ok_or(DieselError::NotFound)
    }

    fn find_all(&self) -> QueryResult<Vec<Challenge>> {
        Ok(self.0.lock().unwrap().challenges.values().cloned().collect())
    }

    fn find_active(&self) -> QueryResult<Vec<Challenge>> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .challenges
            .values()
            .filter(|c| c.is_active)
            .cloned()
            .collect())
    }
}

pub struct MockUserChallengeRepo(pub SharedState);

impl MockUserChallengeRepo {
    fn join(uc: &UserChallenge, challenge: &Challenge) -> UserChallengeWithChallenge {
        UserChallengeWithChallenge {
            id: uc.id,
            user_id: uc.user_id.clone(),
            challenge_id: uc.challenge_id,
            progress: uc.progress,
            completed_at: uc.completed_at,
            title: challenge.title.clone(),
            challenge_type: challenge.challenge_type.clone(),
            target_count: challenge.target_count,
            points_reward: challenge.points_reward,
            badge_name: challenge.badge_name.clone(),
        }
    }
}

impl UserChallengeRepository for MockUserChallengeRepo {
    fn create(&self, user_challenge: &NewUserChallenge) -> QueryResult<UserChallenge> {
        let mut s = self.0.lock().unwrap();
        let exists = s.user_challenges.values().any(|uc| {
            uc.user_id == user_challenge.user_id && uc.challenge_id == user_challenge.challenge_id
        });
        if exists {
            return Err(unique_violation("user_challenges_user_challenge_unique"));
        }
        let id = s.next_id();
        let created = UserChallenge {
            id,
            user_id: user_challenge.user_id.clone(),
            challenge_id: user_challenge.challenge_id,
            progress: user_challenge.progress,
            completed_at: None,
            joined_at: Some(Utc::now().naive_utc()),
        };
        s.user_challenges.insert(id, created.clone());
        Ok(created)
    }

    fn update(&self, id: i32, update: &UpdateUserChallenge) -> QueryResult<UserChallenge> {
        let mut s = self.0.lock().unwrap();
        let uc = s.user_challenges.get_mut(&id).ok_or(DieselError::NotFound)?;
        if let Some(v) = update.progress {
            uc.progress = v;
        }
        if let Some(v) = update.completed_at {
            uc.completed_at = Some(v);
        }
        Ok(uc.clone())
    }

    fn delete(&self, id: i32) -> QueryResult<bool> {
        Ok(self.0.lock().unwrap().user_challenges.remove(&id).is_some())
    }

    fn find_by_id(&self, id: i32) -> QueryResult<UserChallenge> {
        self.0
            .lock()
            .unwrap()
            .user_challenges
            .get(&id)
            .cloned()
            .ok_or(DieselError::NotFound)
    }

    fn find_by_user(&self, user_id: &str) -> QueryResult<Vec<UserChallenge>> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .user_challenges
            .values()
            .filter(|uc| uc.user_id == user_id)
            .cloned()
            .collect())
    }

    fn find_by_user_and_challenge(
        &self,
        user_id: &str,
        challenge_id: i32,
    ) -> QueryResult<UserChallenge> {
        self.0
            .lock()
            .unwrap()
            .user_challenges
            .values()
            .find(|uc| uc.user_id == user_id && uc.challenge_id == challenge_id)
            .cloned()
            .ok_or(DieselError::NotFound)
    }

    fn find_by_user_with_challenge(
        &self,
        user_id: &str,
    ) -> QueryResult<Vec<UserChallengeWithChallenge>> {
        let s = self.0.lock().unwrap();
        Ok(s.user_challenges
            .values()
            .filter(|uc| uc.user_id == user_id)
            .filter_map(|uc| {
                let challenge = s.challenges.get(&uc.challenge_id)?;
                Some(Self::join(uc, challenge))
            })
            .collect())
    }

    fn find_by_user_and_challenge_with_challenge(
        &self,
        user_id: &str,
        challenge_id: i32,
    ) -> QueryResult<UserChallengeWithChallenge> {
        let s = self.0.lock().unwrap();
        let uc = s
            .user_challenges
            .values()
            .find(|uc| uc.user_id == user_id && uc.challenge_id == challenge_id)
            .ok_or(DieselError::NotFound)?;
        let challenge = s
            .challenges
            .get(&uc.challenge_id)
            .ok_or(DieselError::NotFound)?;
        Ok(Self::join(uc, challenge))
    }

    fn complete_and_reward(
        &self,
        user_challenge_id: i32,
        user_id: &str,
        points: i32,
    ) -> QueryResult<()> {
        let mut s = self.0.lock().unwrap();
        let uc = s
            .user_challenges
            .get_mut(&user_challenge_id)
            .ok_or(DieselError::NotFound)?;
        if uc.completed_at.is_some() {
            return Ok(());
        }
        uc.completed_at = Some(Utc::now().naive_utc());
        let profile = s.profiles.get_mut(user_id).ok_or(DieselError::NotFound)?;
        profile.eco_points += points;
        Ok(())
    }
}

pub struct MockReviewRepo(pub SharedState);

impl ReviewRepository for MockReviewRepo {
    fn create(&self, review: &NewReview) -> QueryResult<Review> {
        let mut s = self.0.lock().unwrap();
        let id = s.next_id();
        let created = Review {
            id,
            reviewer_id: review.reviewer_id.clone(),
            reviewee_id: review.reviewee_id.clone(),
            rating: review.rating,
            comment: review.comment.clone(),
            created_at: None,
        };
        s.reviews.insert(id, created.clone());
        Ok(created)
    }

    fn delete(&self, id: i32) -> QueryResult<bool> {
        Ok(self.0.lock().unwrap().reviews.remove(&id).is_some())
    }

    fn find_by_id(&self, id: i32) -> QueryResult<Review> {
        self.0
            .lock()
            .unwrap()
            .reviews
            .get(&id)
            .cloned()
            .ok_or(DieselError::NotFound)
    }

    fn find_for_reviewee(&self, reviewee_id: &str) -> QueryResult<Vec<Review>> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .reviews
            .values()
            .filter(|r| r.reviewee_id == reviewee_id)
            .cloned()
            .collect())
    }
}
