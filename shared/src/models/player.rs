use serde::{Deserialize, Serialize};

pub const PLAYER_ROLES: [&str; 4] = ["Batsman", "Bowler", "All-rounder", "Wicket Keeper"];
pub const BATTING_STYLES: [&str; 2] = ["Right-hand bat", "Left-hand bat"];
pub const BOWLING_STYLES: [&str; 6] = [
    "Right-arm fast",
    "Right-arm medium",
    "Right-arm spin",
    "Left-arm fast",
    "Left-arm medium",
    "Left-arm spin",
];

pub const PLAYER_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x300?text=Player";

fn approved_by_default() -> bool {
    true
}

/// A squad member. Self-registered players stay unapproved until an admin accepts them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub role: String,

    #[serde(default)]
    pub batting_style: String,

    #[serde(default)]
    pub bowling_style: String,

    #[serde(default)]
    pub matches: u32,

    #[serde(default)]
    pub runs: u32,

    #[serde(default)]
    pub wickets: u32,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default = "approved_by_default")]
    pub approved: bool,
}

impl Player {
    pub fn is_pending(&self) -> bool {
        !self.approved
    }

    pub fn image_or_placeholder(&self) -> &str {
        match self.image_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => PLAYER_PLACEHOLDER_IMAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_defaults() {
        let player: Player = serde_json::from_str(r#"{"id": 1, "name": "Asif"}"#).unwrap();
        assert!(player.approved);
        assert_eq!(player.runs, 0);
        assert_eq!(player.image_or_placeholder(), PLAYER_PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_pending_player() {
        let player: Player = serde_json::from_str(
            r#"{"id": 2, "name": "Ravi", "approved": false, "imageUrl": "http://x/uploads/r.png"}"#,
        )
        .unwrap();
        assert!(player.is_pending());
        assert_eq!(player.image_or_placeholder(), "http://x/uploads/r.png");
    }
}
