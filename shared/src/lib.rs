pub mod models {
    pub mod achievement;
    pub mod fixture;
    pub mod gallery;
    pub mod player;
    pub mod stats;
}

pub mod dto {
    pub mod common;
    pub mod registration;
}

pub mod api;
pub mod error;
pub mod fixtures;
pub mod forms;
pub mod gallery;
pub mod registration;
pub mod roster;
pub mod urls;

// Re-export commonly used items
pub use api::ClubApi;
pub use error::{ApiError, FormError, Result};

// Re-export models
pub use models::{
    achievement::{Achievement, AchievementKind, NewAchievement},
    fixture::{Match, MatchPayload, MatchStatus},
    gallery::GalleryItem,
    player::Player,
    stats::{ClubStats, StatsHeadline},
};

// Re-export DTOs
pub use dto::{
    common::ErrorResponse,
    registration::{DuplicateResponse, JoinRequest, RegisterOutcome, RegistrationRequest},
};
