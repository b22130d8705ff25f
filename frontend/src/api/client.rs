use std::rc::Rc;

use async_trait::async_trait;
use shared::api::ClubApi;
use shared::dto::registration::{JoinRequest, RegisterOutcome, RegistrationRequest};
use shared::error::ApiError;
use shared::models::{
    achievement::{Achievement, NewAchievement},
    fixture::{Match, MatchPayload},
    gallery::GalleryItem,
    player::Player,
    stats::ClubStats,
};

use crate::api::{achievements, gallery, health, matches, players, registration, stats};

/// `ClubApi` over the browser's fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HttpClubApi;

#[async_trait(?Send)]
impl ClubApi for HttpClubApi {
    async fn list_matches(&self) -> Result<Vec<Match>, ApiError> {
        matches::list_matches().await
    }

    async fn create_match(&self, payload: &MatchPayload) -> Result<Match, ApiError> {
        matches::create_match(payload).await
    }

    async fn update_match(&self, id: i64, payload: &MatchPayload) -> Result<Match, ApiError> {
        matches::update_match(id, payload).await
    }

    async fn delete_match(&self, id: i64) -> Result<(), ApiError> {
        matches::delete_match(id).await
    }

    async fn list_players(&self) -> Result<Vec<Player>, ApiError> {
        players::list_players().await
    }

    async fn approve_player(&self, id: i64) -> Result<(), ApiError> {
        players::approve_player(id).await
    }

    async fn delete_player(&self, id: i64) -> Result<(), ApiError> {
        players::delete_player(id).await
    }

    async fn get_stats(&self) -> Result<Option<ClubStats>, ApiError> {
        stats::get_stats().await
    }

    async fn update_stats(&self, club_stats: &ClubStats) -> Result<(), ApiError> {
        stats::update_stats(club_stats).await
    }

    async fn list_achievements(&self) -> Result<Vec<Achievement>, ApiError> {
        achievements::list_achievements().await
    }

    async fn create_achievement(&self, achievement: &NewAchievement) -> Result<(), ApiError> {
        achievements::create_achievement(achievement).await
    }

    async fn delete_achievement(&self, id: i64) -> Result<(), ApiError> {
        achievements::delete_achievement(id).await
    }

    async fn list_gallery(&self) -> Result<Vec<GalleryItem>, ApiError> {
        gallery::list_gallery().await
    }

    async fn delete_gallery_item(&self, id: i64) -> Result<(), ApiError> {
        gallery::delete_gallery_item(id).await
    }

    async fn register(&self, request: &RegistrationRequest, force: bool) -> Result<RegisterOutcome, ApiError> {
        registration::register(request, force).await
    }

    async fn join(&self, request: &JoinRequest) -> Result<(), ApiError> {
        registration::join(request).await
    }

    async fn health(&self) -> Result<String, ApiError> {
        health::health().await
    }
}

/// The data-access layer handed to views through a Yew context.
#[derive(Clone)]
pub struct ApiContext(pub Rc<dyn ClubApi>);

impl ApiContext {
    pub fn new(api: impl ClubApi + 'static) -> Self {
        Self(Rc::new(api))
    }

    pub fn http() -> Self {
        Self::new(HttpClubApi)
    }

    pub fn api(&self) -> Rc<dyn ClubApi> {
        Rc::clone(&self.0)
    }
}

impl Default for ApiContext {
    fn default() -> Self {
        Self::http()
    }
}

impl PartialEq for ApiContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for ApiContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiContext")
    }
}
