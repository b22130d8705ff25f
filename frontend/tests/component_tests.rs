use std::cell::RefCell;

use async_trait::async_trait;
use futures::executor::block_on;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared::api::{decode_list, ClubApi};
use shared::dto::registration::{JoinRequest, RegisterOutcome, RegistrationRequest};
use shared::error::ApiError;
use shared::fixtures::{default_view, visible_matches, MatchQuery};
use shared::gallery::{group_images, Lightbox};
use shared::models::{
    achievement::{Achievement, NewAchievement},
    fixture::{Match, MatchPayload, MatchStatus},
    gallery::GalleryItem,
    player::Player,
    stats::ClubStats,
};
use shared::registration::{FlowState, FormVariant, RegistrationFlow};
use spartans_frontend::api::{api_url, ApiContext};

/// In-memory backend that answers registrations from a script.
#[derive(Default)]
struct ScriptedApi {
    register_answers: RefCell<Vec<Result<RegisterOutcome, ApiError>>>,
    register_calls: RefCell<Vec<bool>>,
    joined: RefCell<Vec<JoinRequest>>,
}

impl ScriptedApi {
    fn answering(answers: Vec<Result<RegisterOutcome, ApiError>>) -> Self {
        Self {
            register_answers: RefCell::new(answers),
            ..Self::default()
        }
    }
}

fn unused<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("not scripted".to_string()))
}

#[async_trait(?Send)]
impl ClubApi for ScriptedApi {
    async fn list_matches(&self) -> Result<Vec<Match>, ApiError> {
        unused()
    }
    async fn create_match(&self, _payload: &MatchPayload) -> Result<Match, ApiError> {
        unused()
    }
    async fn update_match(&self, _id: i64, _payload: &MatchPayload) -> Result<Match, ApiError> {
        unused()
    }
    async fn delete_match(&self, _id: i64) -> Result<(), ApiError> {
        unused()
    }
    async fn list_players(&self) -> Result<Vec<Player>, ApiError> {
        unused()
    }
    async fn approve_player(&self, _id: i64) -> Result<(), ApiError> {
        unused()
    }
    async fn delete_player(&self, _id: i64) -> Result<(), ApiError> {
        unused()
    }
    async fn get_stats(&self) -> Result<Option<ClubStats>, ApiError> {
        Ok(None)
    }
    async fn update_stats(&self, _stats: &ClubStats) -> Result<(), ApiError> {
        unused()
    }
    async fn list_achievements(&self) -> Result<Vec<Achievement>, ApiError> {
        Ok(Vec::new())
    }
    async fn create_achievement(&self, _achievement: &NewAchievement) -> Result<(), ApiError> {
        unused()
    }
    async fn delete_achievement(&self, _id: i64) -> Result<(), ApiError> {
        unused()
    }
    async fn list_gallery(&self) -> Result<Vec<GalleryItem>, ApiError> {
        Ok(Vec::new())
    }
    async fn delete_gallery_item(&self, _id: i64) -> Result<(), ApiError> {
        unused()
    }
    async fn register(
        &self,
        _request: &RegistrationRequest,
        force: bool,
    ) -> Result<RegisterOutcome, ApiError> {
        self.register_calls.borrow_mut().push(force);
        let mut answers = self.register_answers.borrow_mut();
        if answers.is_empty() {
            return unused();
        }
        answers.remove(0)
    }
    async fn join(&self, request: &JoinRequest) -> Result<(), ApiError> {
        self.joined.borrow_mut().push(request.clone());
        Ok(())
    }
    async fn health(&self) -> Result<String, ApiError> {
        Ok("Backend is running".to_string())
    }
}

fn filled(variant: FormVariant) -> RegistrationFlow {
    let mut flow = RegistrationFlow::new(variant);
    flow.form.name = "Babar Azam".to_string();
    flow.form.email = "babar@example.com".to_string();
    flow.form.phone = "0151 2345678".to_string();
    flow.form.legal_consent = true;
    flow
}

#[test]
fn test_duplicate_then_submit_anyway() {
    let api = ScriptedApi::answering(vec![
        Ok(RegisterOutcome::Duplicate { count: 2 }),
        Ok(RegisterOutcome::Created),
    ]);
    let mut flow = filled(FormVariant::Register);

    block_on(flow.submit(&api, false)).unwrap();
    assert_eq!(flow.state(), &FlowState::Duplicate { count: 2 });
    assert_eq!(flow.form.name, "Babar Azam");

    block_on(flow.submit(&api, true)).unwrap();
    assert_eq!(flow.state(), &FlowState::Succeeded);
    assert_eq!(flow.form.name, "");
    assert_eq!(*api.register_calls.borrow(), vec![false, true]);
}

#[test]
fn test_review_keeps_fields_and_sends_nothing() {
    let api = ScriptedApi::answering(vec![Ok(RegisterOutcome::Duplicate { count: 1 })]);
    let mut flow = filled(FormVariant::Register);

    block_on(flow.submit(&api, false)).unwrap();
    flow.review();

    assert_eq!(flow.state(), &FlowState::Editing);
    assert_eq!(flow.form.email, "babar@example.com");
    assert_eq!(api.register_calls.borrow().len(), 1);
}

#[test]
fn test_server_error_shows_generic_failure() {
    let api = ScriptedApi::answering(vec![Err(ApiError::Status {
        status: 500,
        message: "boom".to_string(),
    })]);
    let mut flow = filled(FormVariant::Register);

    block_on(flow.submit(&api, false)).unwrap();
    assert!(matches!(flow.state(), FlowState::Failed(_)));
    assert_eq!(flow.form.name, "Babar Azam");
}

#[test]
fn test_join_through_api_context() {
    let context = ApiContext::new(ScriptedApi::default());
    let api = context.api();
    let mut flow = filled(FormVariant::Join);

    block_on(flow.submit(api.as_ref(), false)).unwrap();

    assert_eq!(flow.state(), &FlowState::Succeeded);
    // Success screen greets the applicant by name
    assert_eq!(flow.form.name, "Babar Azam");
    assert_eq!(context, context.clone());
}

#[test]
fn test_honeypot_is_silently_dropped() {
    let api = ScriptedApi::default();
    let mut flow = filled(FormVariant::Join);
    flow.form.website = "http://spam.example".to_string();

    block_on(flow.submit(&api, false)).unwrap();

    assert!(api.joined.borrow().is_empty());
    assert_eq!(flow.state(), &FlowState::Editing);
}

#[test]
fn test_homepage_match_pipeline() {
    let body = json!([
        {"id": 1, "opponent": "Lions", "matchDate": "2025-06-01T14:00:00", "venue": "Home", "status": "Completed", "result": "Won"},
        {"id": 2, "opponent": "Tigers", "matchDate": "2025-07-01T14:00:00", "venue": "Away", "status": "Upcoming"},
        {"id": 3, "opponent": "Eagles", "matchDate": "2025-05-20T10:00:00", "venue": "Home", "status": "Live"},
        {"id": 4, "opponent": "Hawks", "matchDate": null, "venue": "Home", "status": "Upcoming"},
        {"bad": "row"}
    ])
    .to_string();
    let matches: Vec<Match> = decode_list(&body);
    assert_eq!(matches.len(), 4);

    let shown: Vec<i64> = default_view(&matches).iter().map(|m| m.id).collect();
    assert_eq!(shown, vec![3, 2, 4, 1]);

    let query = MatchQuery {
        search: "lions".to_string(),
        status: Some(MatchStatus::Completed),
    };
    let found: Vec<i64> = visible_matches(&matches, &query).iter().map(|m| m.id).collect();
    assert_eq!(found, vec![1]);
}

#[test]
fn test_gallery_to_lightbox() {
    let items: Vec<GalleryItem> = decode_list(
        &json!([
            {"id": 1, "imageUrl": "/api/gallery/1/image", "category": "Matches", "subCategory": "Final", "caption": "Toss"},
            {"id": 2, "imageUrl": "/api/gallery/2/image", "category": "Matches", "subCategory": "Final"},
            {"id": 3, "imageUrl": "/api/gallery/3/image"}
        ])
        .to_string(),
    );
    let tree = group_images(&items, "http://localhost:8080");
    let album = tree.album("Matches", "Final").unwrap();
    assert_eq!(album.len(), 2);
    assert_eq!(album.images[0].url, "http://localhost:8080/api/gallery/1/image");
    assert!(tree.album("General", "General").is_some());

    let mut lightbox = Lightbox::new();
    lightbox.open(album.images.clone(), 1);
    assert!(lightbox.handle_key("ArrowRight"));
    assert_eq!(lightbox.position_label(), "1 / 2");
    assert!(lightbox.handle_key("Escape"));
    assert!(!lightbox.is_open());
}

#[test]
fn test_api_url_joins_paths() {
    assert!(api_url("/api/gallery").ends_with("/api/gallery"));
}
