use serde::{Deserialize, Serialize};
use validator::Validate;

/// Headline club numbers shown in the homepage stats bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClubStats {
    #[serde(default)]
    #[validate(range(max = 100000))]
    pub matches_won: u32,

    #[serde(default)]
    #[validate(range(max = 100000))]
    pub active_players: u32,

    #[serde(default)]
    #[validate(range(max = 1000))]
    pub championships: u32,
}

/// Text rendered in the stats bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsHeadline {
    pub matches_won: String,
    pub active_players: String,
    pub championships: String,
}

impl StatsHeadline {
    /// Shown until the backend answers, and kept if it never does.
    pub fn fallback() -> Self {
        Self {
            matches_won: "50+".to_string(),
            active_players: "120".to_string(),
            championships: "5".to_string(),
        }
    }
}

impl From<&ClubStats> for StatsHeadline {
    fn from(stats: &ClubStats) -> Self {
        Self {
            matches_won: stats.matches_won.to_string(),
            active_players: stats.active_players.to_string(),
            championships: stats.championships.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_from_stats() {
        let stats = ClubStats {
            matches_won: 61,
            active_players: 98,
            championships: 4,
        };
        let headline = StatsHeadline::from(&stats);
        assert_eq!(headline.matches_won, "61");
        assert_eq!(StatsHeadline::fallback().matches_won, "50+");
    }

    #[test]
    fn test_stats_json_shape() {
        let stats: ClubStats =
            serde_json::from_str(r#"{"id": 1, "matchesWon": 3, "activePlayers": 40}"#).unwrap();
        assert_eq!(stats.championships, 0);
        assert!(stats.validate().is_ok());
    }
}
