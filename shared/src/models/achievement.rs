use serde::{Deserialize, Serialize};
use validator::Validate;

/// Kind of honour, which decides the card's icon and colours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AchievementKind {
    #[default]
    Trophy,
    Medal,
    Star,
    Award,
}

impl AchievementKind {
    pub const ALL: [AchievementKind; 4] = [
        AchievementKind::Trophy,
        AchievementKind::Medal,
        AchievementKind::Star,
        AchievementKind::Award,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            AchievementKind::Trophy => "TROPHY",
            AchievementKind::Medal => "MEDAL",
            AchievementKind::Star => "STAR",
            AchievementKind::Award => "AWARD",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AchievementKind::Trophy => "🏆",
            AchievementKind::Medal => "🥇",
            AchievementKind::Star => "⭐",
            AchievementKind::Award => "🎖️",
        }
    }

    /// (background, border) colours of the carousel card.
    pub fn palette(&self) -> (&'static str, &'static str) {
        match self {
            AchievementKind::Trophy => ("#fef3c7", "#f59e0b"),
            AchievementKind::Medal => ("#e0f2fe", "#0ea5e9"),
            AchievementKind::Star => ("#dcfce7", "#22c55e"),
            AchievementKind::Award => ("#f3e8ff", "#a855f7"),
        }
    }
}

impl From<String> for AchievementKind {
    fn from(code: String) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code().eq_ignore_ascii_case(code.trim()))
            .unwrap_or_default()
    }
}

impl From<AchievementKind> for String {
    fn from(kind: AchievementKind) -> Self {
        kind.code().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: i64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub achievement_year: String,

    #[serde(rename = "type", default)]
    pub kind: AchievementKind,
}

/// Body of `POST /api/achievements`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAchievement {
    #[validate(length(min = 1, max = 120, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, max = 16, message = "Year is required"))]
    pub achievement_year: String,

    #[serde(rename = "type")]
    pub kind: AchievementKind,
}
