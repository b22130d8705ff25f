use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    /// Digits, `+`, `-`, spaces and parentheses, 7 to 20 characters.
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^[0-9+\-\s()]{7,20}$").unwrap();
}

/// Body of `POST /api/register` (homepage form). Phone is optional here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    #[validate(length(min = 1, message = "Full Name is required"))]
    pub full_name: String,

    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    pub phone_number: String,
    pub preferred_role: String,
    pub experience_level: String,
    pub legal_consent: bool,
}

/// Body of `POST /api/join` (standalone join page).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct JoinRequest {
    #[validate(length(min = 1, message = "Full Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(regex(path = "PHONE_REGEX", message = "Please enter a valid phone number"))]
    pub phone: String,

    pub role: String,

    pub experience: String,

    #[serde(rename = "legalConsent")]
    pub legal_consent: bool,

    /// Honeypot. Always sent so the backend can apply the same check.
    pub website: String,
}

/// 409 body of `POST /api/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateResponse {
    #[serde(default)]
    pub duplicate: bool,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub message: Option<String>,
}

/// What the backend decided about a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    Created,
    Duplicate { count: u64 },
}
