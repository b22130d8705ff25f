//! The typed data-access contract between views and the club backend.
//!
//! One method per JSON endpoint. The browser implementation lives in the
//! frontend crate; tests substitute a mock.

use async_trait::async_trait;
use log::warn;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::dto::registration::{JoinRequest, RegisterOutcome, RegistrationRequest};
use crate::error::ApiError;
use crate::models::{
    achievement::{Achievement, NewAchievement},
    fixture::{Match, MatchPayload},
    gallery::GalleryItem,
    player::Player,
    stats::ClubStats,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait ClubApi {
    async fn list_matches(&self) -> Result<Vec<Match>, ApiError>;
    async fn create_match(&self, payload: &MatchPayload) -> Result<Match, ApiError>;
    async fn update_match(&self, id: i64, payload: &MatchPayload) -> Result<Match, ApiError>;
    async fn delete_match(&self, id: i64) -> Result<(), ApiError>;

    async fn list_players(&self) -> Result<Vec<Player>, ApiError>;
    async fn approve_player(&self, id: i64) -> Result<(), ApiError>;
    async fn delete_player(&self, id: i64) -> Result<(), ApiError>;

    /// `Ok(None)` when the backend has no stats row yet.
    async fn get_stats(&self) -> Result<Option<ClubStats>, ApiError>;
    async fn update_stats(&self, stats: &ClubStats) -> Result<(), ApiError>;

    async fn list_achievements(&self) -> Result<Vec<Achievement>, ApiError>;
    async fn create_achievement(&self, achievement: &NewAchievement) -> Result<(), ApiError>;
    async fn delete_achievement(&self, id: i64) -> Result<(), ApiError>;

    async fn list_gallery(&self) -> Result<Vec<GalleryItem>, ApiError>;
    async fn delete_gallery_item(&self, id: i64) -> Result<(), ApiError>;

    /// `force` bypasses the backend's duplicate detection.
    async fn register(
        &self,
        request: &RegistrationRequest,
        force: bool,
    ) -> Result<RegisterOutcome, ApiError>;
    async fn join(&self, request: &JoinRequest) -> Result<(), ApiError>;

    async fn health(&self) -> Result<String, ApiError>;
}

/// Decodes a collection body. Anything that is not a JSON array is an empty
/// list, and elements that fail to decode are skipped.
pub fn decode_list<T: DeserializeOwned>(body: &str) -> Vec<T> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            warn!("Collection body is not JSON: {}", e);
            return Vec::new();
        }
    };

    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(decoded) => Some(decoded),
                Err(e) => {
                    warn!("Skipping malformed collection entry: {}", e);
                    None
                }
            })
            .collect(),
        other => {
            warn!("Expected a JSON array, got {}", kind_of(&other));
            Vec::new()
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixture::MatchStatus;
    use pretty_assertions::assert_eq;

    #[test_log::test]
    fn test_decode_list_non_array_is_empty() {
        assert!(decode_list::<Match>(r#"{"error": "boom"}"#).is_empty());
        assert!(decode_list::<Match>("null").is_empty());
        assert!(decode_list::<Match>("<html>").is_empty());
    }

    #[test_log::test]
    fn test_decode_list_skips_bad_entries() {
        let body = r#"[
            {"id": 1, "opponent": "A", "status": "Live"},
            {"opponent": "missing id"},
            {"id": 2, "opponent": "B", "status": "Upcoming"}
        ]"#;
        let matches = decode_list::<Match>(body);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].status, MatchStatus::Live);
        assert_eq!(matches[1].opponent, "B");
    }
}
