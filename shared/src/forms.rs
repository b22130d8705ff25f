//! Admin form state and the payloads built from it.
//!
//! Inputs are held as the strings the browser gives us and only turned into
//! typed payloads on save.

use chrono::NaiveDateTime;
use validator::Validate;

use crate::error::FormError;
use crate::models::achievement::{AchievementKind, NewAchievement};
use crate::models::fixture::{Match, MatchPayload, MatchStatus, NO_RESULT};
use crate::models::player::{Player, BATTING_STYLES, BOWLING_STYLES, PLAYER_ROLES};
use crate::models::stats::ClubStats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchForm {
    pub opponent: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, empty means midnight.
    pub time: String,
    pub venue: String,
    pub status: MatchStatus,
    pub result: String,
}

impl Default for MatchForm {
    fn default() -> Self {
        Self {
            opponent: String::new(),
            date: String::new(),
            time: String::new(),
            venue: String::new(),
            status: MatchStatus::Upcoming,
            result: NO_RESULT.to_string(),
        }
    }
}

impl MatchForm {
    pub fn from_match(m: &Match) -> Self {
        let (date, time) = match m.match_date {
            Some(dt) => (dt.format("%Y-%m-%d").to_string(), dt.format("%H:%M").to_string()),
            None => (String::new(), String::new()),
        };
        Self {
            opponent: m.opponent.clone(),
            date,
            time,
            venue: m.venue.clone(),
            status: if m.status == MatchStatus::Unknown {
                MatchStatus::Upcoming
            } else {
                m.status
            },
            result: m.result.clone().unwrap_or_else(|| NO_RESULT.to_string()),
        }
    }

    /// Date and time joined as `{date}T{time}:00`.
    pub fn timestamp(&self) -> Result<NaiveDateTime, FormError> {
        let time = match self.time.trim() {
            "" => "00:00",
            t => t,
        };
        let raw = format!("{}T{}:00", self.date.trim(), time);
        NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S").map_err(|_| FormError::InvalidDate)
    }

    pub fn to_payload(&self) -> Result<MatchPayload, FormError> {
        let result = match self.result.trim() {
            "" => NO_RESULT.to_string(),
            r => r.to_string(),
        };
        let payload = MatchPayload {
            opponent: self.opponent.trim().to_string(),
            match_date: self.timestamp()?,
            venue: self.venue.trim().to_string(),
            status: self.status,
            result,
        };
        payload.validate()?;
        Ok(payload)
    }
}

/// Text fields of the multipart player form. The image travels separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerForm {
    pub name: String,
    pub role: String,
    pub batting_style: String,
    pub bowling_style: String,
    pub matches: String,
    pub runs: String,
    pub wickets: String,
}

impl Default for PlayerForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            role: PLAYER_ROLES[0].to_string(),
            batting_style: BATTING_STYLES[0].to_string(),
            bowling_style: BOWLING_STYLES[0].to_string(),
            matches: "0".to_string(),
            runs: "0".to_string(),
            wickets: "0".to_string(),
        }
    }
}

impl PlayerForm {
    pub fn from_player(p: &Player) -> Self {
        Self {
            name: p.name.clone(),
            role: p.role.clone(),
            batting_style: p.batting_style.clone(),
            bowling_style: p.bowling_style.clone(),
            matches: p.matches.to_string(),
            runs: p.runs.to_string(),
            wickets: p.wickets.to_string(),
        }
    }

    /// Multipart field pairs in the order the backend reads them.
    pub fn fields(&self) -> Result<Vec<(&'static str, String)>, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::Invalid("Name is required".to_string()));
        }
        Ok(vec![
            ("name", self.name.trim().to_string()),
            ("role", self.role.clone()),
            ("battingStyle", self.batting_style.clone()),
            ("bowlingStyle", self.bowling_style.clone()),
            ("matches", count(&self.matches, "Matches")?.to_string()),
            ("runs", count(&self.runs, "Runs")?.to_string()),
            ("wickets", count(&self.wickets, "Wickets")?.to_string()),
        ])
    }
}

fn count(raw: &str, label: &str) -> Result<u32, FormError> {
    match raw.trim() {
        "" => Ok(0),
        value => value
            .parse()
            .map_err(|_| FormError::Invalid(format!("{} must be a whole number", label))),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AchievementForm {
    pub title: String,
    pub year: String,
    pub kind: AchievementKind,
}

impl AchievementForm {
    pub fn to_payload(&self) -> Result<NewAchievement, FormError> {
        let payload = NewAchievement {
            title: self.title.trim().to_string(),
            achievement_year: self.year.trim().to_string(),
            kind: self.kind,
        };
        payload.validate()?;
        Ok(payload)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsForm {
    pub matches_won: String,
    pub active_players: String,
    pub championships: String,
}

impl StatsForm {
    pub fn from_stats(stats: &ClubStats) -> Self {
        Self {
            matches_won: stats.matches_won.to_string(),
            active_players: stats.active_players.to_string(),
            championships: stats.championships.to_string(),
        }
    }

    pub fn to_payload(&self) -> Result<ClubStats, FormError> {
        let stats = ClubStats {
            matches_won: count(&self.matches_won, "Matches won")?,
            active_players: count(&self.active_players, "Active players")?,
            championships: count(&self.championships, "Championships")?,
        };
        stats.validate()?;
        Ok(stats)
    }
}

/// Upload form. The category comes from the picker unless a new one is typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryUploadForm {
    pub category: String,
    pub new_category: String,
    pub sub_category: String,
    pub caption: String,
}

impl GalleryUploadForm {
    pub fn resolved_category(&self) -> Option<String> {
        [&self.new_category, &self.category]
            .into_iter()
            .map(|c| c.trim())
            .find(|c| !c.is_empty())
            .map(String::from)
    }

    /// Text fields for the multipart body. `has_file` says whether an image was picked.
    pub fn fields(&self, has_file: bool) -> Result<Vec<(&'static str, String)>, FormError> {
        if !has_file {
            return Err(FormError::MissingImage);
        }
        let category = self.resolved_category().ok_or(FormError::MissingCategory)?;
        let mut fields = vec![("category", category)];
        if !self.sub_category.trim().is_empty() {
            fields.push(("subCategory", self.sub_category.trim().to_string()));
        }
        if !self.caption.trim().is_empty() {
            fields.push(("caption", self.caption.trim().to_string()));
        }
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn match_form() -> MatchForm {
        MatchForm {
            opponent: "Hanau CC".to_string(),
            date: "2024-07-14".to_string(),
            time: "10:30".to_string(),
            venue: "Ostpark".to_string(),
            ..MatchForm::default()
        }
    }

    #[test]
    fn test_new_match_defaults() {
        let form = MatchForm::default();
        assert_eq!(form.status, MatchStatus::Upcoming);
        assert_eq!(form.result, "VS");
    }

    #[test]
    fn test_match_payload_joins_date_and_time() {
        let payload = match_form().to_payload().unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 7, 14)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(payload.match_date, expected);
        assert_eq!(payload.result, "VS");
    }

    #[test]
    fn test_missing_time_is_midnight() {
        let mut form = match_form();
        form.time.clear();
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.match_date.format("%H:%M").to_string(), "00:00");
    }

    #[test_case("" ; "empty date")]
    #[test_case("14/07/2024" ; "wrong format")]
    fn test_bad_date_is_rejected(date: &str) {
        let mut form = match_form();
        form.date = date.to_string();
        assert_eq!(form.to_payload(), Err(FormError::InvalidDate));
    }

    #[test]
    fn test_blank_opponent_is_rejected() {
        let mut form = match_form();
        form.opponent = "  ".to_string();
        assert_eq!(
            form.to_payload(),
            Err(FormError::Invalid("Opponent is required".to_string()))
        );
    }

    #[test]
    fn test_edit_splits_timestamp() {
        let m: Match = serde_json::from_str(
            r#"{"id": 3, "opponent": "Mainz", "matchDate": "2024-08-02T18:45:00",
                "venue": "Home", "status": "Completed", "result": "Won by 4 wickets"}"#,
        )
        .unwrap();
        let form = MatchForm::from_match(&m);
        assert_eq!(form.date, "2024-08-02");
        assert_eq!(form.time, "18:45");
        assert_eq!(form.status, MatchStatus::Completed);
        assert_eq!(form.to_payload().unwrap().result, "Won by 4 wickets");
    }

    #[test]
    fn test_player_fields() {
        let form = PlayerForm {
            name: "Hasan Ali".to_string(),
            runs: "312".to_string(),
            wickets: "".to_string(),
            ..PlayerForm::default()
        };
        let fields = form.fields().unwrap();
        assert_eq!(fields[0], ("name", "Hasan Ali".to_string()));
        assert_eq!(fields[5], ("runs", "312".to_string()));
        assert_eq!(fields[6], ("wickets", "0".to_string()));
    }

    #[test]
    fn test_player_counts_must_be_numbers() {
        let form = PlayerForm {
            name: "Hasan Ali".to_string(),
            matches: "many".to_string(),
            ..PlayerForm::default()
        };
        assert!(form.fields().is_err());
    }

    #[test]
    fn test_achievement_requires_title() {
        let form = AchievementForm {
            title: String::new(),
            year: "2023".to_string(),
            kind: AchievementKind::Medal,
        };
        assert_eq!(
            form.to_payload(),
            Err(FormError::Invalid("Title is required".to_string()))
        );
    }

    #[test]
    fn test_stats_form_round_trip() {
        let stats = ClubStats {
            matches_won: 61,
            active_players: 130,
            championships: 6,
        };
        assert_eq!(StatsForm::from_stats(&stats).to_payload(), Ok(stats));
    }

    #[test]
    fn test_gallery_upload_needs_file_then_category() {
        let mut form = GalleryUploadForm::default();
        assert_eq!(form.fields(false), Err(FormError::MissingImage));
        assert_eq!(form.fields(true), Err(FormError::MissingCategory));

        form.category = "Matches".to_string();
        form.new_category = "Awards Night".to_string();
        form.caption = "Trophy lift".to_string();
        assert_eq!(
            form.fields(true).unwrap(),
            vec![
                ("category", "Awards Night".to_string()),
                ("caption", "Trophy lift".to_string()),
            ]
        );
    }
}
