use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use validator::Validate;

/// Result text the backend stores for a fixture that has not been played.
pub const NO_RESULT: &str = "VS";

/// Status of a fixture as stored by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    #[default]
    Upcoming,
    Live,
    Completed,
    /// Anything the backend sends that we do not recognise.
    #[serde(other)]
    Unknown,
}

impl MatchStatus {
    /// Statuses an admin can pick and a visitor can filter by, in display order.
    pub const SELECTABLE: [MatchStatus; 3] =
        [MatchStatus::Live, MatchStatus::Upcoming, MatchStatus::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "Upcoming",
            MatchStatus::Live => "Live",
            MatchStatus::Completed => "Completed",
            MatchStatus::Unknown => "Unknown",
        }
    }

    /// Parses a `<select>` value. Unrecognised values (including "All") yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::SELECTABLE
            .into_iter()
            .find(|status| status.as_str() == value)
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixture against another club.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: i64,

    #[serde(default)]
    pub opponent: String,

    /// Local kick-off time. `None` renders as "TBA".
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub match_date: Option<NaiveDateTime>,

    #[serde(default)]
    pub venue: String,

    #[serde(default)]
    pub status: MatchStatus,

    #[serde(default)]
    pub result: Option<String>,
}

impl Match {
    pub fn is_live(&self) -> bool {
        self.status == MatchStatus::Live
    }

    /// True once a real result has been entered.
    pub fn has_result(&self) -> bool {
        match self.result.as_deref().map(str::trim) {
            None | Some("") => false,
            Some(text) => text != NO_RESULT,
        }
    }

    pub fn display_date(&self) -> String {
        self.match_date
            .map(|d| d.format("%d %b %Y").to_string())
            .unwrap_or_else(|| "TBA".to_string())
    }

    pub fn display_datetime(&self) -> String {
        self.match_date
            .map(|d| d.format("%d %b %Y, %H:%M").to_string())
            .unwrap_or_else(|| "TBA".to_string())
    }
}

/// Body of `POST /api/matches` and `PUT /api/matches/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MatchPayload {
    #[validate(length(min = 1, message = "Opponent is required"))]
    pub opponent: String,

    pub match_date: NaiveDateTime,

    #[validate(length(min = 1, message = "Venue is required"))]
    pub venue: String,

    pub status: MatchStatus,

    pub result: String,
}

/// Accepts the backend's `LocalDateTime` strings, RFC 3339 timestamps and null.
/// Anything unparseable becomes `None` so one bad row never empties the list.
fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_match_date))
}

pub fn parse_match_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|d| d.naive_utc()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Upcoming" => Some(MatchStatus::Upcoming))]
    #[test_case("Live" => Some(MatchStatus::Live))]
    #[test_case("Completed" => Some(MatchStatus::Completed))]
    #[test_case("All" => None)]
    #[test_case("live" => None ; "case sensitive")]
    fn test_status_parse(value: &str) -> Option<MatchStatus> {
        MatchStatus::parse(value)
    }

    #[test]
    fn test_match_deserializes_backend_shape() {
        let json = r#"{
            "id": 7,
            "opponent": "Frankfurt CC",
            "matchDate": "2024-06-01T14:30:00",
            "venue": "Ostpark",
            "status": "Upcoming",
            "result": "VS"
        }"#;
        let m: Match = serde_json::from_str(json).unwrap();
        assert_eq!(m.id, 7);
        assert_eq!(m.status, MatchStatus::Upcoming);
        assert_eq!(m.display_date(), "01 Jun 2024");
        assert!(!m.has_result());
    }

    #[test]
    fn test_match_tolerates_odd_fields() {
        let json = r#"{"id": 1, "matchDate": "not a date", "status": "Postponed", "result": null}"#;
        let m: Match = serde_json::from_str(json).unwrap();
        assert_eq!(m.match_date, None);
        assert_eq!(m.status, MatchStatus::Unknown);
        assert_eq!(m.display_date(), "TBA");
        assert_eq!(m.opponent, "");
    }

    #[test]
    fn test_has_result() {
        let mut m: Match = serde_json::from_str(r#"{"id": 1, "status": "Completed"}"#).unwrap();
        assert!(!m.has_result());
        m.result = Some("Won by 4 wickets".to_string());
        assert!(m.has_result());
        m.result = Some(" VS ".to_string());
        assert!(!m.has_result());
    }

    #[test]
    fn test_parse_match_date_variants() {
        assert!(parse_match_date("2024-06-01T14:30").is_some());
        assert!(parse_match_date("2024-06-01T14:30:00.123").is_some());
        assert!(parse_match_date("2024-06-01T14:30:00Z").is_some());
        assert!(parse_match_date("").is_none());
    }

    #[test]
    fn test_payload_serializes_local_datetime() {
        let payload = MatchPayload {
            opponent: "Hanau".to_string(),
            match_date: parse_match_date("2024-06-01T09:00:00").unwrap(),
            venue: "Home".to_string(),
            status: MatchStatus::Upcoming,
            result: NO_RESULT.to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["matchDate"], "2024-06-01T09:00:00");
        assert_eq!(json["status"], "Upcoming");
        assert!(payload.validate().is_ok());
    }
}
